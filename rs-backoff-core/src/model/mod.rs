//! Top-level module for the backoff completion engine.
//!
//! This module provides a word-level n-gram sentence completer, including:
//! - Ordered vocabulary of corpus tokens (`Vocabulary`)
//! - Per-order frequency tables (`NGramTable`) gathered in a `FrequencyIndex`
//! - Stupid backoff probabilities (`BackoffScorer`)
//! - Completion parameters (`CompletionInput`)
//! - The generation loop (`SentenceCompleter`)

/// Generation loop: scores every vocabulary token, picks a winner and
/// appends it until a terminal token or the length cap.
pub mod completer;

/// Completion parameters: tie-break policy, random seed, length cap and
/// sentence-terminal tokens.
pub mod completion_input;

/// Stupid backoff scoring over a `FrequencyIndex`.
pub mod backoff;

/// Frequency tables for every order from 1 to the model order.
pub mod frequency_index;

/// Fixed-order n-gram frequency table (`n >= 1`).
///
/// Handles corpus ingestion and n-gram / context counting.
pub mod ngram_model;

/// Internal representation of a single context (prefix) and its
/// continuation counts. Not exposed publicly.
mod state;

/// Distinct corpus tokens in first-occurrence order.
pub mod vocabulary;
