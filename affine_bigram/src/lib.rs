//! # Affine Bigram Library
//!
//! Ciphertext-only attack on the affine substitution cipher over bigrams.
//!
//! Each pair of letters `(i, j)` of an `n`-letter alphabet is an element
//! `x = i·n + j` of the ring Z/M with `M = n²`, and encryption is
//! `y = a·x + b (mod M)`. The key is recovered from ciphertext alone by
//! matching its most frequent bigrams against the most frequent bigrams of
//! the language and ranking every resulting key by how natural its
//! decryption looks.
//!
//! ## Pipeline
//!
//! - **Normalize** the input onto the alphabet
//! - **Analyze** bigram frequencies of the ciphertext
//! - **Generate** candidate keys by solving linear congruences
//! - **Decrypt and score** every candidate
//! - **Rank** the candidates and keep the best
//!
//! ## Usage
//!
//! ```rust
//! use affine_bigram::{analyze, AffineKey, AnalysisOptions, Context};
//!
//! let context = Context::russian();
//! let ciphertext = affine_bigram::encrypt(context.ring(), "стнотонаен", AffineKey::new(37, 5))?;
//!
//! let analysis = analyze(&context, &ciphertext, &AnalysisOptions::default())?;
//! assert!(analysis.candidates.contains(&AffineKey::new(37, 5)));
//! # Ok::<(), affine_bigram::AnalysisError>(())
//! ```

pub mod alphabet;
pub mod candidates;
pub mod cipher;
pub mod error;
pub mod frequency;
pub mod modular;
pub mod normalize;
pub mod pipeline;
pub mod ring;
pub mod scoring;

pub use alphabet::{Alphabet, Bigram, LanguageProfile};
pub use candidates::generate_candidates;
pub use cipher::{decrypt, encrypt, AffineBigramCipher, AffineKey};
pub use error::{AnalysisError, Result};
pub use frequency::{
    bigram_entropy, bigram_frequencies, character_frequencies, index_of_coincidence,
    letter_entropy, overlapping_bigram_frequencies, FrequencyTable,
};
pub use modular::{extended_gcd, modular_inverse, solve_linear_congruence};
pub use normalize::{normalize, strip_spaces};
pub use pipeline::{analyze, Analysis, AnalysisOptions, Context, ScoredCandidate};
pub use ring::BigramRing;
pub use scoring::{PlausibilityScorer, Strictness};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
