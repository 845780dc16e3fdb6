use super::state::ContextState;
use crate::error::{CompletionError, Result};
use std::collections::HashMap;

/// Frequency table for token n-grams of a single order `n`.
///
/// Stores one `ContextState` per (n-1)-token prefix. The frequency of a full
/// n-gram is the transition count from its prefix to its last token, and the
/// context count of a prefix is that state's total.
///
/// # Responsibilities
/// - Count every contiguous window of length `n` in a corpus
/// - Answer n-gram and context counts
/// - Give the order-n conditional probability of a seen n-gram
///
/// # Invariants
/// - `n` is always >= 1
/// - Order 1 has exactly one state, keyed by the empty context
/// - Each state in `states` corresponds to a unique prefix of length `n-1`
#[derive(Clone, Debug)]
pub struct NGramTable {
	/// The order of the table (number of tokens in the n-gram)
	n: usize, // must be >= 1

	/// Mapping from a prefix (length n-1) to its corresponding state
	states: HashMap<Vec<String>, ContextState>,

	/// Number of windows counted (sum of all context counts)
	windows: usize,
}

impl NGramTable {
	/// Creates an empty table of order `n`.
	///
	/// # Errors
	/// Returns `InvalidOrder` if `n < 1`.
	pub fn new(n: usize) -> Result<Self> {
		if n < 1 {
			return Err(CompletionError::InvalidOrder(n));
		}
		Ok(Self { n, states: HashMap::new(), windows: 0 })
	}

	/// Order of the table.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Counts every window of length `n` in `corpus`.
	///
	/// A corpus shorter than `n` contributes nothing.
	pub fn add_corpus<S: AsRef<str>>(&mut self, corpus: &[S]) {
		if corpus.len() < self.n {
			return;
		}

		for window in corpus.windows(self.n) {
			let (prefix, next) = window.split_at(self.n - 1);
			let key: Vec<String> = prefix.iter().map(|token| token.as_ref().to_owned()).collect();
			self.states.entry(key).or_insert_with(ContextState::new).add_transition(next[0].as_ref());
			self.windows += 1;
		}
	}

	/// Occurrence count of `ngram`; 0 if unseen or of the wrong length.
	pub fn count(&self, ngram: &[String]) -> usize {
		if ngram.len() != self.n {
			return 0;
		}
		let (context, next) = ngram.split_at(self.n - 1);
		self.continuation_count(context, &next[0])
	}

	/// Occurrence count of the n-gram `context + next`.
	pub fn continuation_count(&self, context: &[String], next: &str) -> usize {
		self.states.get(context).map_or(0, |state| state.count(next))
	}

	/// Number of windows whose first `n-1` tokens equal `context`.
	pub fn context_count(&self, context: &[String]) -> usize {
		self.states.get(context).map_or(0, ContextState::total)
	}

	/// `count(context + next) / context_count(context)`, or `None` if the
	/// n-gram was never observed.
	pub fn conditional(&self, context: &[String], next: &str) -> Option<f64> {
		if context.len() + 1 != self.n {
			return None;
		}
		self.states.get(context)?.probability(next)
	}

	/// Number of windows counted.
	pub fn windows(&self) -> usize {
		self.windows
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.states.values().map(ContextState::len).sum()
	}

	/// Returns `true` if the corpus was shorter than `n`.
	pub fn is_empty(&self) -> bool {
		self.windows == 0
	}
}
