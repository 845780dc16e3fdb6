use std::collections::HashMap;

/// Distinct corpus tokens in first-occurrence order.
///
/// The order is observable: in deterministic mode, ties between candidates
/// are won by the token that appears first here. It is therefore carried
/// explicitly in `tokens` and never derived from the hash map.
///
/// # Invariants
/// - `tokens` holds no duplicates
/// - `indices[tokens[i]] == i` for every `i`
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
	/// Tokens in the order they first appear in the corpus.
	tokens: Vec<String>,
	/// Reverse lookup, used only for dedup and `index_of`.
	indices: HashMap<String, usize>,
}

impl Vocabulary {
	/// Builds the vocabulary in a single pass over the corpus.
	pub fn from_corpus<S: AsRef<str>>(corpus: &[S]) -> Self {
		let mut vocabulary = Self::default();
		for token in corpus {
			let token = token.as_ref();
			if vocabulary.indices.contains_key(token) {
				continue;
			}
			vocabulary.indices.insert(token.to_owned(), vocabulary.tokens.len());
			vocabulary.tokens.push(token.to_owned());
		}
		vocabulary
	}

	/// Number of distinct tokens.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Returns `true` if the corpus was empty.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Returns the token at `index`, or `None` if out of range.
	pub fn get(&self, index: usize) -> Option<&str> {
		self.tokens.get(index).map(String::as_str)
	}

	/// Returns the position of `token` in vocabulary order.
	pub fn index_of(&self, token: &str) -> Option<usize> {
		self.indices.get(token).copied()
	}

	/// Returns `true` if `token` occurs in the corpus.
	pub fn contains(&self, token: &str) -> bool {
		self.indices.contains_key(token)
	}

	/// Iterates over tokens in vocabulary order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.tokens.iter().map(String::as_str)
	}
}
