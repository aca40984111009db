use fancy_regex::Regex;
use lazy_static::lazy_static;
use tracing::warn;

use crate::base::{Token, Tokenizer};
use crate::error::{Error, Result};

/// Runs of word characters, or any single character that is neither a word
/// character nor whitespace.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\w+|[^\w\s]";

lazy_static! {
    static ref DEFAULT_TOKEN_COMPILED_PATTERN: Regex = Regex::new(DEFAULT_TOKEN_PATTERN)
        .expect("default token pattern is a valid regex");
}

/// Tokenizer that emits every match of a single regular expression.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: Regex,
    lower: bool,
}

impl RegexTokenizer {
    /// Tokenizer using [`DEFAULT_TOKEN_PATTERN`].
    pub fn new(lower: bool) -> Self {
        RegexTokenizer {
            pattern: DEFAULT_TOKEN_COMPILED_PATTERN.clone(),
            lower,
        }
    }

    /// Tokenizer using a caller-supplied pattern. Each non-empty match becomes a token.
    pub fn with_pattern(pattern: &str, lower: bool) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(source),
        })?;
        Ok(RegexTokenizer {
            pattern: compiled,
            lower,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for found in self.pattern.find_iter(text) {
            let matched = match found {
                Ok(m) => m,
                Err(err) => {
                    // backtrack limit hit; keep what we have
                    warn!(pattern = self.pattern.as_str(), %err, "token pattern failed mid-text");
                    break;
                }
            };
            let chunk = matched.as_str();
            if chunk.is_empty() {
                continue;
            }
            tokens.push(if self.lower {
                chunk.to_lowercase()
            } else {
                chunk.to_string()
            });
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contraction_and_question_mark() {
        let tokenizer = RegexTokenizer::new(true);
        assert_eq!(
            tokenizer.tokenize("Isn't it?"),
            vec!["isn", "'", "t", "it", "?"]
        );
    }

    #[test]
    fn test_demo_sentences() {
        let tokenizer = RegexTokenizer::new(true);
        assert_eq!(
            tokenizer.tokenize("Hello, world! This is a test."),
            vec!["hello", ",", "world", "!", "this", "is", "a", "test", "."]
        );
        assert_eq!(
            tokenizer.tokenize("NLP is fascinating... isn't it?"),
            vec!["nlp", "is", "fascinating", ".", ".", ".", "isn", "'", "t", "it", "?"]
        );
    }

    #[test]
    fn test_numbers_and_symbols() {
        let tokenizer = RegexTokenizer::new(true);
        assert_eq!(
            tokenizer.tokenize("$999.99 abc123 snake_case"),
            vec!["$", "999", ".", "99", "abc123", "snake_case"]
        );
    }

    #[test]
    fn test_preserves_case_when_not_lowering() {
        let tokenizer = RegexTokenizer::new(false);
        assert_eq!(tokenizer.tokenize("Hello World"), vec!["Hello", "World"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        let tokenizer = RegexTokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_unicode_word_characters() {
        let tokenizer = RegexTokenizer::new(true);
        assert_eq!(tokenizer.tokenize("Café ÜBER"), vec!["café", "über"]);
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = RegexTokenizer::with_pattern(r"[a-z]+", false).unwrap();
        assert_eq!(tokenizer.tokenize("ab1cd EF gh"), vec!["ab", "cd", "gh"]);
        assert_eq!(tokenizer.pattern(), "[a-z]+");
    }

    #[test]
    fn test_custom_pattern_drops_empty_matches() {
        let tokenizer = RegexTokenizer::with_pattern(r"\w*", true).unwrap();
        assert_eq!(tokenizer.tokenize("a  b"), vec!["a", "b"]);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = RegexTokenizer::with_pattern("(unclosed", true).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }
}
