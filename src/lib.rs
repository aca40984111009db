//! Bag-of-words text vectorization.
//!
//! A [`Tokenizer`] turns text into tokens; a [`CountVectorizer`] learns a
//! sorted vocabulary from a corpus with it and maps documents to count vectors.

pub mod base;
pub mod config;
pub mod count;
pub mod error;
pub mod loader;
pub mod regex;
pub mod simple;

pub use base::{Token, Tokenizer, Vectorizer};
pub use config::{Strategy, TokenizerConfig};
pub use count::{CountVectorizer, Vocabulary};
pub use error::{Error, Result};
pub use loader::load_raw_text_data;
pub use regex::RegexTokenizer;
pub use simple::SimpleTokenizer;
