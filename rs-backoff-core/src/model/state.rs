use std::collections::HashMap;

/// One context of an n-gram table: a fixed (k-1)-token prefix and every
/// token observed right after it.
///
/// Each entry of `transitions` is the count of one full k-gram. Their sum,
/// kept in `total`, is how many windows open with this prefix, and serves
/// as the denominator of the order-k conditional probability.
///
/// ## Invariants
/// - `total` equals the sum of all `transitions` counts
/// - Each transition count is strictly positive
#[derive(Clone, Debug)]
pub(crate) struct ContextState {
	/// Outgoing transitions indexed by the next token.
	/// Example: { "cat" => 2, "dog" => 1 }
	transitions: HashMap<String, usize>,
	/// Number of windows sharing this context.
	total: usize,
}

impl ContextState {
	/// Creates a new context with no observations.
	pub(crate) fn new() -> Self {
		Self { transitions: HashMap::new(), total: 0 }
	}

	/// Records one occurrence of `next` following this context.
	pub(crate) fn add_transition(&mut self, next: &str) {
		*self.transitions.entry(next.to_owned()).or_insert(0) += 1;
		self.total += 1;
	}

	/// Number of times `next` was observed after this context.
	pub(crate) fn count(&self, next: &str) -> usize {
		self.transitions.get(next).copied().unwrap_or(0)
	}

	/// Number of windows sharing this context.
	pub(crate) fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct continuations.
	pub(crate) fn len(&self) -> usize {
		self.transitions.len()
	}

	/// Conditional probability of `next` given this context, or `None` if
	/// the transition was never observed.
	pub(crate) fn probability(&self, next: &str) -> Option<f64> {
		let count = *self.transitions.get(next)?;
		// `count > 0` implies `total > 0`
		Some(count as f64 / self.total as f64)
	}
}
