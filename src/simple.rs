use indexmap::IndexSet;

use crate::base::{Token, Tokenizer};

/// Characters split out as their own tokens by default.
pub const DEFAULT_PUNCTUATION: &str = ".,!?:;\"'()[]{}";

/// Whitespace tokenizer that also separates a fixed set of punctuation marks.
///
/// Every punctuation character becomes a single-character token, whether or
/// not it is surrounded by spaces, so contractions split around the
/// apostrophe: `isn't` gives `isn`, `'`, `t`. Characters outside the set stay
/// attached to their neighbours (`$999.99` gives `$999`, `.`, `99`).
#[derive(Debug, Clone)]
pub struct SimpleTokenizer {
    punctuation: IndexSet<char>,
    lower: bool,
}

impl SimpleTokenizer {
    pub fn new(lower: bool) -> Self {
        Self::with_punctuation(DEFAULT_PUNCTUATION.chars(), lower)
    }

    /// Tokenizer splitting on `punctuation` instead of [`DEFAULT_PUNCTUATION`].
    /// Whitespace entries are ignored.
    pub fn with_punctuation<I: IntoIterator<Item = char>>(punctuation: I, lower: bool) -> Self {
        SimpleTokenizer {
            punctuation: punctuation.into_iter().filter(|c| !c.is_whitespace()).collect(),
            lower,
        }
    }

    pub fn punctuation(&self) -> impl Iterator<Item = char> + '_ {
        self.punctuation.iter().copied()
    }

    /// The punctuation token `ch` splits into, if any. Membership is checked
    /// on the source character first, then on its lowercase form when folding.
    fn split_mark(&self, ch: char) -> Option<char> {
        if self.punctuation.contains(&ch) {
            return Some(ch);
        }
        if !self.lower {
            return None;
        }
        let mut folded = ch.to_lowercase();
        match (folded.next(), folded.next()) {
            (Some(c), None) if self.punctuation.contains(&c) => Some(c),
            _ => None,
        }
    }

    fn flush(&self, current: &mut String, tokens: &mut Vec<Token>) {
        if current.is_empty() {
            return;
        }
        let word = std::mem::take(current);
        tokens.push(if self.lower { word.to_lowercase() } else { word });
    }
}

impl Default for SimpleTokenizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if ch.is_whitespace() {
                self.flush(&mut current, &mut tokens);
            } else if let Some(mark) = self.split_mark(ch) {
                self.flush(&mut current, &mut tokens);
                tokens.push(mark.to_string());
            } else {
                current.push(ch);
            }
        }
        self.flush(&mut current, &mut tokens);
        tokens
    }
}
