use crate::error::{CompletionError, Result};
use serde::{Deserialize, Serialize};

/// Default cap on the length of a completed sentence.
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// Tokens that end a sentence by default.
pub const DEFAULT_TERMINAL_TOKENS: [&str; 3] = [".", "!", "?"];

/// Rule used to pick among candidates sharing the best probability.
///
/// # Variants
/// - `FirstInOrder`: the earliest candidate in vocabulary order wins.
/// - `Random`: the winner is drawn uniformly from every candidate tied with
///   the final maximum.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
	#[default]
	FirstInOrder,
	Random,
}

impl TieBreak {
	/// Maps the `stochastic` flag of the entry point to a policy.
	pub fn from_stochastic(stochastic: bool) -> Self {
		if stochastic { Self::Random } else { Self::FirstInOrder }
	}
}

/// Parameters of a completion run.
///
/// # Responsibilities
/// - Track the tie-break policy and the seed of its random source
/// - Track the length cap and the sentence-terminal tokens
///
/// # Invariants
/// - `max_length >= 1`
/// - `terminal_tokens` holds no empty token
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompletionInput {
	/// How ties on the best probability are resolved.
	pub tie_break: TieBreak,

	/// Seed for the tie-break random source. `None` seeds from the OS.
	pub rng_seed: Option<u64>,

	/// Generation stops once the sentence reaches this many tokens.
	max_length: usize,

	/// Generation stops right after appending one of these tokens.
	terminal_tokens: Vec<String>,
}

impl Default for CompletionInput {
	fn default() -> Self {
		Self {
			tie_break: TieBreak::FirstInOrder,
			rng_seed: None,
			max_length: DEFAULT_MAX_LENGTH,
			terminal_tokens: DEFAULT_TERMINAL_TOKENS.iter().map(|t| (*t).to_owned()).collect(),
		}
	}
}

impl CompletionInput {
	/// Default input with the given tie-break policy.
	pub fn new(tie_break: TieBreak) -> Self {
		Self { tie_break, ..Self::default() }
	}

	/// Returns the current length cap.
	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Returns the sentence-terminal tokens.
	pub fn terminal_tokens(&self) -> &[String] {
		&self.terminal_tokens
	}

	/// Returns `true` if `token` ends a sentence.
	pub fn is_terminal(&self, token: &str) -> bool {
		self.terminal_tokens.iter().any(|t| t == token)
	}

	/// Sets the length cap.
	///
	/// # Errors
	/// Returns an error if `max_length` is 0.
	pub fn set_max_length(&mut self, max_length: usize) -> Result<()> {
		if max_length == 0 {
			return Err(CompletionError::InvalidConfig("max_length must be >= 1".to_owned()));
		}
		self.max_length = max_length;
		Ok(())
	}

	/// Replaces the sentence-terminal tokens.
	///
	/// An empty list is allowed and disables early stopping.
	///
	/// # Errors
	/// Returns an error if any token is empty.
	pub fn set_terminal_tokens<I, S>(&mut self, tokens: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
		if tokens.iter().any(String::is_empty) {
			return Err(CompletionError::InvalidConfig("terminal tokens must not be empty".to_owned()));
		}
		self.terminal_tokens = tokens;
		Ok(())
	}

	/// Checks the invariants again. Needed for deserialized values, which
	/// never went through the setters.
	pub fn validate(&self) -> Result<()> {
		if self.max_length == 0 {
			return Err(CompletionError::InvalidConfig("max_length must be >= 1".to_owned()));
		}
		if self.terminal_tokens.iter().any(String::is_empty) {
			return Err(CompletionError::InvalidConfig("terminal tokens must not be empty".to_owned()));
		}
		Ok(())
	}
}
