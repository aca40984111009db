use serde::Deserialize;

use crate::base::Tokenizer;
use crate::error::Result;
use crate::regex::{DEFAULT_TOKEN_PATTERN, RegexTokenizer};
use crate::simple::{DEFAULT_PUNCTUATION, SimpleTokenizer};

/// Which matching rule a tokenizer uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// Whitespace split plus single-character punctuation tokens.
    Simple {
        #[serde(default)]
        punctuation: Option<String>,
    },
    /// Every match of one regular expression is a token.
    Regex {
        #[serde(default)]
        pattern: Option<String>,
    },
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Regex { pattern: None }
    }
}

/// Construction-time tokenizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub strategy: Strategy,
    pub lower: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            strategy: Strategy::default(),
            lower: true,
        }
    }
}

impl TokenizerConfig {
    pub fn simple(lower: bool) -> Self {
        TokenizerConfig {
            strategy: Strategy::Simple { punctuation: None },
            lower,
        }
    }

    pub fn regex(lower: bool) -> Self {
        TokenizerConfig {
            strategy: Strategy::Regex { pattern: None },
            lower,
        }
    }

    /// Builds the configured tokenizer. Fails only on an invalid regex pattern.
    pub fn build(&self) -> Result<Box<dyn Tokenizer + Send + Sync>> {
        Ok(match &self.strategy {
            Strategy::Simple { punctuation } => {
                let set = punctuation.as_deref().unwrap_or(DEFAULT_PUNCTUATION);
                Box::new(SimpleTokenizer::with_punctuation(set.chars(), self.lower))
            }
            Strategy::Regex { pattern } => {
                let pattern = pattern.as_deref().unwrap_or(DEFAULT_TOKEN_PATTERN);
                Box::new(RegexTokenizer::with_pattern(pattern, self.lower)?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_is_lowercasing_regex() {
        let config = TokenizerConfig::default();
        assert_eq!(config, TokenizerConfig::regex(true));
        let tokenizer = config.build().unwrap();
        assert_eq!(tokenizer.tokenize("Hi, You"), vec!["hi", ",", "you"]);
    }

    #[test]
    fn test_deserialize_simple_with_punctuation() {
        let config: TokenizerConfig = serde_json::from_str(
            r#"{"strategy": {"kind": "simple", "punctuation": "-"}, "lower": false}"#,
        )
        .unwrap();
        assert_eq!(
            config.strategy,
            Strategy::Simple {
                punctuation: Some("-".to_string())
            }
        );
        let tokenizer = config.build().unwrap();
        assert_eq!(tokenizer.tokenize("Up-Down."), vec!["Up", "-", "Down."]);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: TokenizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TokenizerConfig::default());

        let config: TokenizerConfig =
            serde_json::from_str(r#"{"strategy": {"kind": "simple"}}"#).unwrap();
        assert_eq!(config, TokenizerConfig::simple(true));
    }

    #[test]
    fn test_bad_pattern_fails_at_build() {
        let config = TokenizerConfig {
            strategy: Strategy::Regex {
                pattern: Some("[".to_string()),
            },
            lower: true,
        };
        assert!(matches!(config.build(), Err(Error::InvalidPattern { .. })));
    }
}
