//! Bijection between bigrams and integers modulo `M = n²`

use crate::alphabet::{bigram_to_string, Alphabet, Bigram};
use crate::error::{AnalysisError, Result};

/// Encodes bigram `(i, j)` as `i·n + j` where `n` is the alphabet size
#[derive(Debug, Clone)]
pub struct BigramRing {
    alphabet: Alphabet,
    bigrams: Vec<Bigram>,
    modulus: u32,
}

impl BigramRing {
    pub fn new(alphabet: Alphabet) -> Self {
        let letters = alphabet.letters();
        let bigrams: Vec<Bigram> = letters
            .iter()
            .flat_map(|&first| letters.iter().map(move |&second| [first, second]))
            .collect();
        let modulus = bigrams.len() as u32;

        Self {
            alphabet,
            bigrams,
            modulus,
        }
    }

    /// Ring size `M`
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encode a bigram as an element of Z/M
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownBigram`] if either character is not
    /// an alphabet letter.
    pub fn encode(&self, bigram: &Bigram) -> Result<u32> {
        let n = self.alphabet.len();
        match (
            self.alphabet.position(bigram[0]),
            self.alphabet.position(bigram[1]),
        ) {
            (Some(i), Some(j)) => Ok((i * n + j) as u32),
            _ => Err(AnalysisError::UnknownBigram(bigram_to_string(bigram))),
        }
    }

    /// Decode an element of Z/M, reducing it first
    pub fn decode(&self, value: u32) -> Bigram {
        self.bigrams[(value % self.modulus) as usize]
    }
}
