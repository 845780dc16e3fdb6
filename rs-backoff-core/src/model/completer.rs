use crate::error::{CompletionError, Result};
use crate::model::backoff::BackoffScorer;
use crate::model::completion_input::{CompletionInput, TieBreak};
use crate::model::frequency_index::FrequencyIndex;
use crate::model::vocabulary::Vocabulary;
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Outcome of a single generation step.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
	/// Token to append.
	pub token: String,
	/// Backoff probability of `prior + token`.
	pub probability: f64,
	/// Number of candidates sharing `probability` (1 when there is no tie).
	pub ties: usize,
}

/// Completes token sequences with an n-gram model under stupid backoff.
///
/// # Responsibilities
/// - Build the vocabulary and the frequency index once from a corpus
/// - Score every vocabulary token as the continuation of a sentence
/// - Pick the winner according to the `TieBreak` policy
/// - Append winners until a terminal token or the length cap
#[derive(Clone, Debug)]
pub struct SentenceCompleter {
	order: usize,
	vocabulary: Vocabulary,
	index: FrequencyIndex,
	input: CompletionInput,
}

impl SentenceCompleter {
	/// Builds a completer of n-gram order `order` over `corpus`.
	///
	/// # Errors
	/// - `InvalidOrder` if `order < 1`.
	/// - `InvalidConfig` if `input` fails validation.
	pub fn new<S: AsRef<str>>(corpus: &[S], order: usize, input: CompletionInput) -> Result<Self> {
		if order < 1 {
			return Err(CompletionError::InvalidOrder(order));
		}
		input.validate()?;

		let vocabulary = Vocabulary::from_corpus(corpus);
		if vocabulary.is_empty() {
			warn!("empty corpus: completions will return the seed unchanged");
		}
		let index = FrequencyIndex::build(corpus, order)?;

		Ok(Self { order, vocabulary, index, input })
	}

	/// N-gram order the completer was built with.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Candidate tokens, in tie-break order.
	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	/// Frequency tables backing the scores.
	pub fn index(&self) -> &FrequencyIndex {
		&self.index
	}

	/// Parameters applied to every completion.
	pub fn input(&self) -> &CompletionInput {
		&self.input
	}

	/// Predicts the token following `sentence`.
	///
	/// The prior context is the last `order - 1` tokens of `sentence` (all of
	/// it when shorter). When every candidate scores 0, the first vocabulary
	/// token wins in deterministic mode.
	///
	/// Returns `None` only if the vocabulary is empty.
	pub fn predict<R: Rng>(&self, sentence: &[String], rng: &mut R) -> Option<Prediction> {
		if self.vocabulary.is_empty() {
			return None;
		}

		let start = sentence.len().saturating_sub(self.order - 1);
		let mut candidate: Vec<String> = sentence[start..].to_vec();
		candidate.push(String::new());
		let last = candidate.len() - 1;

		let scorer = BackoffScorer::new(&self.index);
		let mut scores = Vec::with_capacity(self.vocabulary.len());
		let mut best_index = 0;
		let mut best = 0.0;
		for (i, token) in self.vocabulary.iter().enumerate() {
			token.clone_into(&mut candidate[last]);
			let probability = scorer.score(&candidate);
			// Strictly greater: on ties, the earliest candidate stays
			if probability > best {
				best = probability;
				best_index = i;
			}
			scores.push(probability);
		}

		// Ties are taken against the final maximum only
		let tied: Vec<usize> = scores
			.iter()
			.enumerate()
			.filter(|(_, probability)| **probability == best)
			.map(|(i, _)| i)
			.collect();

		let winner = match self.input.tie_break {
			TieBreak::FirstInOrder => best_index,
			TieBreak::Random => tied[rng.random_range(0..tied.len())],
		};

		let token = self.vocabulary.get(winner)?.to_owned();
		Some(Prediction { token, probability: best, ties: tied.len() })
	}

	/// Completes `seed` using a random source seeded from `rng_seed`.
	pub fn complete<S: AsRef<str>>(&self, seed: &[S]) -> Vec<String> {
		let mut rng = match self.input.rng_seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		self.complete_with_rng(seed, &mut rng)
	}

	/// Completes `seed`, drawing tie-breaks from `rng`.
	///
	/// The result starts with `seed`, holds at most `max_length` tokens
	/// (unless the seed alone is longer), and ends right after the first
	/// generated terminal token if one is produced.
	pub fn complete_with_rng<S: AsRef<str>, R: Rng>(&self, seed: &[S], rng: &mut R) -> Vec<String> {
		let mut sentence: Vec<String> = seed.iter().map(|token| token.as_ref().to_owned()).collect();

		while sentence.len() < self.input.max_length() {
			let prediction = match self.predict(&sentence, &mut *rng) {
				Some(prediction) => prediction,
				None => break,
			};
			trace!(
				"step {}: '{}' (p = {}, {} tied)",
				sentence.len(),
				prediction.token,
				prediction.probability,
				prediction.ties
			);

			let terminal = self.input.is_terminal(&prediction.token);
			sentence.push(prediction.token);
			if terminal {
				break;
			}
		}

		debug!("completed {} seed tokens into {} tokens", seed.len(), sentence.len());
		sentence
	}
}
