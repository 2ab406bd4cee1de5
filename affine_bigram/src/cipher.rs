//! Affine substitution cipher over bigrams

use std::fmt;

use crate::error::{AnalysisError, Result};
use crate::frequency::split_bigrams;
use crate::modular::modular_inverse;
use crate::ring::BigramRing;

/// Key `(a, b)` of the map `y = a·x + b (mod M)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AffineKey {
    pub a: u32,
    pub b: u32,
}

impl AffineKey {
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// Whether the key can decrypt, i.e. `gcd(a, modulus) = 1`
    pub fn is_invertible(&self, modulus: u32) -> bool {
        modular_inverse(self.a as i64, modulus as i64).is_some()
    }
}

impl fmt::Display for AffineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// An affine bigram cipher bound to a ring and a key
///
/// Text is processed in non-overlapping bigrams; a trailing unpaired
/// character is dropped.
///
/// # Example
///
/// ```rust
/// use affine_bigram::{AffineBigramCipher, AffineKey, Alphabet, BigramRing};
///
/// let ring = BigramRing::new(Alphabet::russian());
/// let cipher = AffineBigramCipher::new(&ring, AffineKey::new(37, 5))?;
///
/// let encrypted = cipher.encrypt("привет")?;
/// assert_eq!(cipher.decrypt(&encrypted)?, "привет");
/// # Ok::<(), affine_bigram::AnalysisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AffineBigramCipher<'r> {
    ring: &'r BigramRing,
    key: AffineKey,
    inverse_a: i64,
}

impl<'r> AffineBigramCipher<'r> {
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidKey`] if `a` has no inverse modulo `M`.
    pub fn new(ring: &'r BigramRing, key: AffineKey) -> Result<Self> {
        let modulus = ring.modulus();
        let inverse_a = modular_inverse(key.a as i64, modulus as i64).ok_or(
            AnalysisError::InvalidKey {
                a: key.a,
                modulus,
            },
        )?;

        Ok(Self {
            ring,
            key,
            inverse_a,
        })
    }

    pub fn key(&self) -> AffineKey {
        self.key
    }

    /// `y = a·x + b (mod M)` for each bigram
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let m = self.ring.modulus() as i64;
        let (a, b) = (self.key.a as i64, self.key.b as i64);
        self.map_bigrams(plaintext, |x| (a * x + b).rem_euclid(m))
    }

    /// `x = a⁻¹·(y − b) (mod M)` for each bigram
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let m = self.ring.modulus() as i64;
        let b = self.key.b as i64;
        self.map_bigrams(ciphertext, |y| (self.inverse_a * (y - b)).rem_euclid(m))
    }

    fn map_bigrams(&self, text: &str, map: impl Fn(i64) -> i64) -> Result<String> {
        let bigrams = split_bigrams(text);
        let mut output = String::with_capacity(text.len());

        for bigram in &bigrams {
            let value = self.ring.encode(bigram)? as i64;
            output.extend(self.ring.decode(map(value) as u32));
        }

        Ok(output)
    }
}

/// Decrypt `ciphertext` with `key`
pub fn decrypt(ring: &BigramRing, ciphertext: &str, key: AffineKey) -> Result<String> {
    AffineBigramCipher::new(ring, key)?.decrypt(ciphertext)
}

/// Encrypt `plaintext` with `key`
pub fn encrypt(ring: &BigramRing, plaintext: &str, key: AffineKey) -> Result<String> {
    AffineBigramCipher::new(ring, key)?.encrypt(plaintext)
}
