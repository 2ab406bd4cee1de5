//! Error types for bigram cryptanalysis

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid key: a = {a} is not invertible modulo {modulus}")]
    InvalidKey { a: u32, modulus: u32 },

    #[error("Bigram '{0}' contains a character outside the alphabet")]
    UnknownBigram(String),

    #[error("Alphabet has no letters")]
    EmptyAlphabet,

    #[error("Alphabet contains duplicate letter '{0}'")]
    DuplicateLetter(char),

    #[error("No valid candidate key found")]
    NoValidCandidate,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
