use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("vocabulary not initialized, call fit before transform")]
    NotFitted,

    #[error("invalid tokenizer pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
