//! Candidate key generation by frequency matching
//!
//! Two crib bigrams `X_i`, `X_j` are assumed to encrypt to two frequent
//! ciphertext bigrams `Y_k`, `Y_l`. Subtracting the two affine equations
//! eliminates `b`:
//!
//! ```text
//! (X_i − X_j)·a ≡ (Y_k − Y_l)  (mod M)
//! b = Y_k − a·X_i              (mod M)
//! ```

use std::collections::HashSet;

use crate::alphabet::Bigram;
use crate::cipher::AffineKey;
use crate::error::Result;
use crate::modular::solve_linear_congruence;
use crate::ring::BigramRing;

/// Number of frequent bigrams matched on each side
pub const CANDIDATE_DEPTH: usize = 5;

/// Enumerate candidate keys for every ordered crib pair against every
/// ordered pair of frequent ciphertext bigrams
///
/// Keys are deduplicated in first-seen order. Keys with a non-invertible
/// `a` are kept; the caller discards them at decryption.
///
/// # Errors
///
/// Returns [`crate::AnalysisError::UnknownBigram`] if a bigram on either
/// side is not a pair of alphabet letters.
pub fn generate_candidates(
    ring: &BigramRing,
    crib: &[Bigram],
    frequent: &[Bigram],
) -> Result<Vec<AffineKey>> {
    let m = ring.modulus() as i64;
    let xs = encode_all(ring, crib)?;
    let ys = encode_all(ring, frequent)?;

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for (i, &x_first) in xs.iter().enumerate() {
        for (j, &x_second) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            for (k, &y_first) in ys.iter().enumerate() {
                for (l, &y_second) in ys.iter().enumerate() {
                    if k == l {
                        continue;
                    }
                    for a in solve_linear_congruence(x_first - x_second, y_first - y_second, m) {
                        let b = (y_first - a * x_first).rem_euclid(m);
                        let key = AffineKey::new(a as u32, b as u32);
                        if seen.insert(key) {
                            candidates.push(key);
                        }
                    }
                }
            }
        }
    }

    Ok(candidates)
}

fn encode_all(ring: &BigramRing, bigrams: &[Bigram]) -> Result<Vec<i64>> {
    bigrams
        .iter()
        .take(CANDIDATE_DEPTH)
        .map(|bigram| ring.encode(bigram).map(i64::from))
        .collect()
}
