use crate::error::Result;

pub type Token = String;

/// Splits text into an ordered sequence of tokens.
///
/// Implementations must be deterministic: the same text under the same
/// configuration always yields the same tokens. Empty input yields no tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        (**self).tokenize(text)
    }
}

/// Learns a vocabulary from a corpus and maps documents to count vectors.
pub trait Vectorizer {
    /// Learn the vocabulary from `corpus`, replacing any previous one.
    fn fit<S: AsRef<str>>(&mut self, corpus: &[S]);

    /// Count vocabulary tokens in each document.
    fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Vec<usize>>>;

    fn fit_transform<S: AsRef<str>>(&mut self, corpus: &[S]) -> Result<Vec<Vec<usize>>> {
        self.fit(corpus);
        self.transform(corpus)
    }
}
