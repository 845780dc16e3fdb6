//! Word-level sentence completion with an n-gram model under stupid backoff.
//!
//! This crate provides:
//! - N-gram frequency tables for every order up to the model order
//! - Stupid backoff probabilities (no discount when dropping an order)
//! - Token-by-token sentence completion with deterministic or seeded random
//!   tie-breaking
//!
//! ```
//! let corpus = ["the", "cat", "is", "chubby", ",", "i", "want", "to", "pet", "his", "belly", "."];
//! let sentence = rs_backoff_core::complete(&["the", "cat", "is"], 3, &corpus, false)?;
//! assert_eq!(&sentence[..3], &["the", "cat", "is"]);
//! assert!(sentence.len() <= 10);
//! # Ok::<(), rs_backoff_core::CompletionError>(())
//! ```

/// Error type shared by the crate.
pub mod error;

/// Frequency tables, backoff scoring and the completion loop.
pub mod model;

pub use error::{CompletionError, Result};
pub use model::completer::{Prediction, SentenceCompleter};
pub use model::completion_input::{CompletionInput, TieBreak};

/// Completes `seed` with an n-gram model of order `order` trained on `corpus`.
///
/// Generation stops after a `.`, `!` or `?` token, or once the sentence holds
/// 10 tokens. With `stochastic` set, ties on the best probability are broken
/// uniformly at random; otherwise the earliest token in corpus order wins.
///
/// # Errors
/// Returns `InvalidOrder` if `order < 1`.
pub fn complete<S, C>(seed: &[S], order: usize, corpus: &[C], stochastic: bool) -> Result<Vec<String>>
where
	S: AsRef<str>,
	C: AsRef<str>,
{
	let input = CompletionInput::new(TieBreak::from_stochastic(stochastic));
	let completer = SentenceCompleter::new(corpus, order, input)?;
	Ok(completer.complete(seed))
}
