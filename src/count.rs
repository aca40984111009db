use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::base::{Token, Tokenizer, Vectorizer};
use crate::error::{Error, Result};

/// Mapping from token to column index, learned by [`CountVectorizer::fit`].
///
/// Indices always form the dense range `0..len()`, and iteration order is
/// index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    index: IndexMap<Token, usize>,
}

impl Vocabulary {
    /// Build from distinct tokens: sort by code point, then number by position.
    fn from_distinct(distinct: HashSet<Token>) -> Self {
        let mut sorted: Vec<Token> = distinct.into_iter().collect();
        // byte order on UTF-8 is code point order
        sorted.sort_unstable();
        let index = sorted
            .into_iter()
            .enumerate()
            .map(|(idx, token)| (token, idx))
            .collect();
        Vocabulary { index }
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Token stored at column `idx`.
    pub fn token(&self, idx: usize) -> Option<&str> {
        self.index.get_index(idx).map(|(token, _)| token.as_str())
    }

    /// `(token, index)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.index.iter().map(|(token, &idx)| (token.as_str(), idx))
    }
}

/// Bag-of-words vectorizer counting token occurrences per document.
///
/// The tokenizer is injected at construction and used for both `fit` and
/// `transform`.
///
/// ```
/// use bagofwords::{CountVectorizer, RegexTokenizer, Vectorizer};
///
/// let mut vectorizer = CountVectorizer::new(RegexTokenizer::new(true));
/// vectorizer.fit(&["a b", "b c"]);
/// let counts = vectorizer.transform(&["c c a"]).unwrap();
/// assert_eq!(counts, vec![vec![1, 0, 2]]);
/// ```
#[derive(Debug, Clone)]
pub struct CountVectorizer<T> {
    tokenizer: T,
    vocabulary: Vocabulary,
}

impl<T: Tokenizer> CountVectorizer<T> {
    pub fn new(tokenizer: T) -> Self {
        CountVectorizer {
            tokenizer,
            vocabulary: Vocabulary::default(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    /// Tokens ordered by column, usable as labels for the count vectors.
    pub fn feature_names(&self) -> Vec<&str> {
        self.vocabulary.iter().map(|(token, _)| token).collect()
    }

    fn count(&self, document: &str) -> Vec<usize> {
        let mut counts = vec![0; self.vocabulary.len()];
        for token in self.tokenizer.tokenize(document) {
            if let Some(idx) = self.vocabulary.get(&token) {
                counts[idx] += 1;
            }
        }
        counts
    }
}

impl<T: Tokenizer> Vectorizer for CountVectorizer<T> {
    fn fit<S: AsRef<str>>(&mut self, corpus: &[S]) {
        let mut distinct = HashSet::new();
        for document in corpus {
            distinct.extend(self.tokenizer.tokenize(document.as_ref()));
        }
        self.vocabulary = Vocabulary::from_distinct(distinct);
        debug!(
            documents = corpus.len(),
            vocabulary = self.vocabulary.len(),
            "fitted count vectorizer"
        );
    }

    fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Vec<usize>>> {
        if !self.is_fitted() {
            return Err(Error::NotFitted);
        }
        debug!(
            documents = documents.len(),
            vocabulary = self.vocabulary.len(),
            "transforming documents"
        );
        Ok(documents
            .iter()
            .map(|document| self.count(document.as_ref()))
            .collect())
    }
}
