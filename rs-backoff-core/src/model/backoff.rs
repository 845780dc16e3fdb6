use super::frequency_index::FrequencyIndex;
use crate::error::{CompletionError, Result};

/// Stupid backoff scorer over a `FrequencyIndex`.
///
/// For a candidate n-gram of order `k`:
/// - seen at order `k` (k > 1): `count(ngram) / context_count(prior)`
/// - unseen: drop the oldest token and retry at order `k - 1`
/// - order 1: `count(token) / corpus_len`
///
/// No penalty is applied when dropping an order, so a lower-order estimate
/// can equal or exceed a sparse higher-order one.
#[derive(Clone, Copy, Debug)]
pub struct BackoffScorer<'a> {
	index: &'a FrequencyIndex,
}

impl<'a> BackoffScorer<'a> {
	/// Creates a scorer reading from `index`.
	pub fn new(index: &'a FrequencyIndex) -> Self {
		Self { index }
	}

	/// Backoff probability of `ngram`, in `[0, 1]`.
	///
	/// The order is `ngram.len()` and the prior context is every token but
	/// the last. The empty n-gram scores 0.
	pub fn score(&self, ngram: &[String]) -> f64 {
		let mut ngram = ngram;
		let mut n = ngram.len();
		while n > 1 {
			let (prior, next) = ngram.split_at(n - 1);
			if let Some(probability) = self.index.table(n).and_then(|table| table.conditional(prior, &next[0])) {
				return probability;
			}
			// Unseen at this order: forget the oldest context token
			ngram = &ngram[1..];
			n -= 1;
		}

		match ngram.first() {
			Some(token) => self.index.unigram_probability(token),
			None => 0.0,
		}
	}

	/// Backoff probability with the order and prior context given explicitly.
	///
	/// # Errors
	/// Returns `InvalidOrder` if `order < 1`, and `InvalidArgument` if
	/// `ngram` is not of length `order` or `prior` is not its first
	/// `order - 1` tokens.
	pub fn score_with_prior(&self, ngram: &[String], order: usize, prior: &[String]) -> Result<f64> {
		if order < 1 {
			return Err(CompletionError::InvalidOrder(order));
		}
		if ngram.len() != order {
			return Err(CompletionError::InvalidArgument(format!(
				"n-gram has {} tokens, expected order {}",
				ngram.len(),
				order
			)));
		}
		if prior != &ngram[..order - 1] {
			return Err(CompletionError::InvalidArgument(
				"prior context must be the n-gram without its last token".to_owned(),
			));
		}
		Ok(self.score(ngram))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(words: &[&str]) -> Vec<String> {
		words.iter().map(|w| w.to_string()).collect()
	}

	#[test]
	fn seen_bigram_uses_context_count() {
		let corpus = tokens(&["a", "b"]);
		let index = FrequencyIndex::build(&corpus, 2).unwrap();
		let scorer = BackoffScorer::new(&index);

		assert_eq!(scorer.score(&tokens(&["a", "b"])), 1.0);
	}

	#[test]
	fn unseen_bigram_backs_off_to_unigram() {
		let corpus = tokens(&["a", "b"]);
		let index = FrequencyIndex::build(&corpus, 2).unwrap();
		let scorer = BackoffScorer::new(&index);

		assert_eq!(scorer.score(&tokens(&["b", "a"])), 0.5);
		assert_eq!(scorer.score(&tokens(&["a", "a"])), 0.5);
	}

	#[test]
	fn backoff_applies_no_penalty() {
		// "x y" is unseen, so P(y | w x) falls all the way to P(y) unweighted
		let corpus = tokens(&["w", "x", "z", "y", "y", "q"]);
		let index = FrequencyIndex::build(&corpus, 3).unwrap();
		let scorer = BackoffScorer::new(&index);

		assert_eq!(scorer.score(&tokens(&["w", "x", "y"])), 2.0 / 6.0);
	}

	#[test]
	fn backoff_stops_at_first_seen_order() {
		let corpus = tokens(&["a", "b", "c", "d", "b", "c", "b", "e"]);
		let index = FrequencyIndex::build(&corpus, 3).unwrap();
		let scorer = BackoffScorer::new(&index);

		// "d b c" is seen once out of one "d b" context
		assert_eq!(scorer.score(&tokens(&["d", "b", "c"])), 1.0);
		// "e b c" is unseen, "b c" is seen twice out of three "b" contexts
		assert_eq!(scorer.score(&tokens(&["e", "b", "c"])), 2.0 / 3.0);
	}

	#[test]
	fn unknown_token_scores_zero() {
		let corpus = tokens(&["a", "b", "c"]);
		let index = FrequencyIndex::build(&corpus, 3).unwrap();
		let scorer = BackoffScorer::new(&index);

		assert_eq!(scorer.score(&tokens(&["a", "b", "zzz"])), 0.0);
		assert_eq!(scorer.score(&[]), 0.0);
	}

	#[test]
	fn out_of_vocabulary_context_is_dropped() {
		let corpus = tokens(&["a", "b", "a", "c"]);
		let index = FrequencyIndex::build(&corpus, 2).unwrap();
		let scorer = BackoffScorer::new(&index);

		assert_eq!(scorer.score(&tokens(&["oov", "a"])), 0.5);
	}

	#[test]
	fn probabilities_stay_in_unit_interval() {
		let corpus = tokens(&["the", "cat", "is", "chubby", ",", "i", "want", "to", "pet", "his", "belly", "."]);
		let index = FrequencyIndex::build(&corpus, 3).unwrap();
		let scorer = BackoffScorer::new(&index);

		for a in &corpus {
			for b in &corpus {
				for c in &corpus {
					let p = scorer.score(&[a.clone(), b.clone(), c.clone()]);
					assert!((0.0..=1.0).contains(&p), "{} {} {} -> {}", a, b, c, p);
				}
			}
		}
	}

	#[test]
	fn score_with_prior_checks_shape() {
		let corpus = tokens(&["a", "b"]);
		let index = FrequencyIndex::build(&corpus, 2).unwrap();
		let scorer = BackoffScorer::new(&index);

		assert_eq!(scorer.score_with_prior(&tokens(&["a", "b"]), 2, &tokens(&["a"])), Ok(1.0));
		assert_eq!(scorer.score_with_prior(&tokens(&["a"]), 0, &[]), Err(CompletionError::InvalidOrder(0)));
		assert!(matches!(
			scorer.score_with_prior(&tokens(&["a", "b"]), 3, &tokens(&["a", "b"])),
			Err(CompletionError::InvalidArgument(_))
		));
		assert!(matches!(
			scorer.score_with_prior(&tokens(&["a", "b"]), 2, &tokens(&["b"])),
			Err(CompletionError::InvalidArgument(_))
		));
	}
}
