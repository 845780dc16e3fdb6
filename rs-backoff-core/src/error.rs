use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = CompletionError> = std::result::Result<T, E>;

/// Errors reported at the boundary of the completion engine.
///
/// Scoring and generation themselves are total: once a `SentenceCompleter`
/// exists, no step can fail. Errors only come from rejected parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompletionError {
	/// The n-gram order has no backoff base case (`order < 1`).
	#[error("invalid n-gram order {0}: order must be >= 1")]
	InvalidOrder(usize),
	/// A `CompletionInput` failed validation.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
	/// Arguments passed to a lower-level operation are inconsistent.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}
