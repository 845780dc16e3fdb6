use super::ngram_model::NGramTable;
use crate::error::{CompletionError, Result};
use log::debug;

/// Frequency tables for the orders `1..=max_order` over one corpus.
///
/// Built once, then only read. Orders above the corpus length cannot hold a
/// single window, so their tables are never built: `table` returns `None`
/// for them and the backoff scorer moves straight down to a lower order.
#[derive(Clone, Debug)]
pub struct FrequencyIndex {
	/// `tables[k - 1]` holds the order-k table, for `k <= built order`.
	tables: Vec<NGramTable>,
	/// Order requested at build time.
	max_order: usize,
	corpus_len: usize,
}

impl FrequencyIndex {
	/// Counts every window of every order from 1 to `max_order`, stopping at
	/// the corpus length. Order 1 is always built, even for an empty corpus.
	///
	/// # Errors
	/// Returns `InvalidOrder` if `max_order < 1`.
	pub fn build<S: AsRef<str>>(corpus: &[S], max_order: usize) -> Result<Self> {
		if max_order < 1 {
			return Err(CompletionError::InvalidOrder(max_order));
		}

		let built = max_order.min(corpus.len().max(1));
		let mut tables = Vec::with_capacity(built);
		for n in 1..=built {
			let mut table = NGramTable::new(n)?;
			table.add_corpus(corpus);
			tables.push(table);
		}

		debug!(
			"built frequency index: {} tokens, order {} (tables 1..={}), {} distinct n-grams at top table",
			corpus.len(),
			max_order,
			built,
			tables[built - 1].len()
		);

		Ok(Self { tables, max_order, corpus_len: corpus.len() })
	}

	/// Order requested at build time.
	pub fn max_order(&self) -> usize {
		self.max_order
	}

	/// Highest order with a table. Never above the corpus length (or 1).
	pub fn built_order(&self) -> usize {
		self.tables.len()
	}

	/// Number of tokens in the corpus.
	pub fn corpus_len(&self) -> usize {
		self.corpus_len
	}

	/// Table for order `n`, or `None` if `n` is 0 or above `built_order`.
	pub fn table(&self, n: usize) -> Option<&NGramTable> {
		self.tables.get(n.checked_sub(1)?)
	}

	/// Occurrence count of `ngram` at order `ngram.len()`.
	pub fn count(&self, ngram: &[String]) -> usize {
		self.table(ngram.len()).map_or(0, |table| table.count(ngram))
	}

	/// Unigram probability: count over total corpus length.
	///
	/// There is no length-0 context to normalize by, so the denominator is
	/// the corpus length. Unknown tokens and empty corpora give 0.
	pub fn unigram_probability(&self, token: &str) -> f64 {
		if self.corpus_len == 0 {
			return 0.0;
		}
		self.tables[0].continuation_count(&[], token) as f64 / self.corpus_len as f64
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(words: &[&str]) -> Vec<String> {
		words.iter().map(|w| w.to_string()).collect()
	}

	#[test]
	fn builds_all_orders() {
		let corpus = tokens(&["the", "cat", "is", "the", "cat"]);
		let index = FrequencyIndex::build(&corpus, 3).unwrap();

		assert_eq!(index.max_order(), 3);
		assert_eq!(index.corpus_len(), 5);
		assert_eq!(index.count(&tokens(&["cat"])), 2);
		assert_eq!(index.count(&tokens(&["the", "cat"])), 2);
		assert_eq!(index.count(&tokens(&["the", "cat", "is"])), 1);
		assert_eq!(index.count(&tokens(&["the", "cat", "is", "the"])), 0);
		assert!(index.table(0).is_none());
		assert!(index.table(4).is_none());
	}

	#[test]
	fn orders_above_corpus_length_are_not_built() {
		let corpus = tokens(&["a", "b", "."]);
		let index = FrequencyIndex::build(&corpus, usize::MAX).unwrap();

		assert_eq!(index.max_order(), usize::MAX);
		assert_eq!(index.built_order(), 3);
		assert_eq!(index.count(&tokens(&["a", "b", "."])), 1);
		assert!(index.table(4).is_none());
		assert_eq!(index.count(&tokens(&["a", "b", ".", "a"])), 0);
		assert_eq!(index.unigram_probability("b"), 1.0 / 3.0);
	}

	#[test]
	fn rejects_order_zero() {
		let corpus = tokens(&["a"]);
		assert_eq!(FrequencyIndex::build(&corpus, 0).unwrap_err(), CompletionError::InvalidOrder(0));
	}

	#[test]
	fn unigram_probability_divides_by_corpus_length() {
		let corpus = tokens(&["a", "b", "a", "c"]);
		let index = FrequencyIndex::build(&corpus, 2).unwrap();

		assert_eq!(index.unigram_probability("a"), 0.5);
		assert_eq!(index.unigram_probability("c"), 0.25);
		assert_eq!(index.unigram_probability("z"), 0.0);
	}

	#[test]
	fn empty_corpus_degenerates_to_empty_tables() {
		let corpus: Vec<String> = Vec::new();
		let index = FrequencyIndex::build(&corpus, 3).unwrap();

		assert_eq!(index.max_order(), 3);
		assert_eq!(index.built_order(), 1);
		assert!(index.table(1).unwrap().is_empty());
		assert!(index.table(2).is_none());
		assert_eq!(index.unigram_probability("a"), 0.0);
	}

	#[test]
	fn context_counts_match_windows_sharing_prefix() {
		let corpus = tokens(&["a", "b", "c", "a", "b", "d", "a", "b"]);
		let index = FrequencyIndex::build(&corpus, 3).unwrap();
		let trigrams = index.table(3).unwrap();

		assert_eq!(trigrams.context_count(&tokens(&["a", "b"])), 2);
		assert_eq!(
			trigrams.count(&tokens(&["a", "b", "c"])) + trigrams.count(&tokens(&["a", "b", "d"])),
			2
		);
	}
}
