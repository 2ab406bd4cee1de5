//! End-to-end key recovery
//!
//! normalize → analyze → generate candidates → decrypt + score → rank

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::alphabet::{Bigram, LanguageProfile};
use crate::candidates::{generate_candidates, CANDIDATE_DEPTH};
use crate::cipher::{AffineBigramCipher, AffineKey};
use crate::error::{AnalysisError, Result};
use crate::frequency::bigram_table;
use crate::normalize::{normalize, strip_spaces};
use crate::ring::BigramRing;
use crate::scoring::{PlausibilityScorer, Strictness};

/// Read-only tables shared by every stage, built once per process
#[derive(Debug, Clone)]
pub struct Context {
    profile: LanguageProfile,
    ring: BigramRing,
    scorer: PlausibilityScorer,
}

impl Context {
    pub fn new(profile: LanguageProfile) -> Self {
        let ring = BigramRing::new(profile.alphabet().clone());
        let scorer = PlausibilityScorer::new(&profile);
        Self {
            profile,
            ring,
            scorer,
        }
    }

    pub fn russian() -> Self {
        Self::new(LanguageProfile::russian())
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    pub fn ring(&self) -> &BigramRing {
        &self.ring
    }

    pub fn scorer(&self) -> &PlausibilityScorer {
        &self.scorer
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Number of ranked candidates kept in the report
    pub top_n: usize,
    pub strictness: Strictness,
    /// Score candidates on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_n: 5,
            strictness: Strictness::Full,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub key: AffineKey,
    pub score: f64,
    pub plaintext: String,
}

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Canonical text with word separators
    pub normalized: String,
    /// Most frequent ciphertext bigrams, most frequent first
    pub frequent_bigrams: Vec<Bigram>,
    /// Deduplicated candidate keys in generation order
    pub candidates: Vec<AffineKey>,
    /// Number of candidates discarded for a non-invertible `a`
    pub invalid_keys: usize,
    /// Best candidates by descending score, at most `top_n`
    pub ranked: Vec<ScoredCandidate>,
}

impl Analysis {
    /// The highest-scoring decryption
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.ranked.first()
    }
}

/// Recover the most plausible plaintext of `raw` ciphertext
///
/// # Errors
///
/// Returns [`AnalysisError::NoValidCandidate`] if no generated key can
/// decrypt the text.
pub fn analyze(context: &Context, raw: &str, options: &AnalysisOptions) -> Result<Analysis> {
    let normalized = normalize(raw, context.profile.alphabet());
    let ciphertext = strip_spaces(&normalized);

    let frequent_bigrams = bigram_table(&ciphertext).top(CANDIDATE_DEPTH);
    let candidates = generate_candidates(&context.ring, context.profile.crib(), &frequent_bigrams)?;

    let scored = score_candidates(context, &ciphertext, &candidates, options)?;
    let invalid_keys = candidates.len() - scored.len();
    if scored.is_empty() {
        return Err(AnalysisError::NoValidCandidate);
    }

    Ok(Analysis {
        normalized,
        frequent_bigrams,
        candidates,
        invalid_keys,
        ranked: rank(scored, options.top_n),
    })
}

/// Decrypt and score each key, skipping keys that cannot decrypt
///
/// Results keep the order of `candidates`.
pub fn score_candidates(
    context: &Context,
    ciphertext: &str,
    candidates: &[AffineKey],
    options: &AnalysisOptions,
) -> Result<Vec<ScoredCandidate>> {
    let evaluate = |key: &AffineKey| score_candidate(context, ciphertext, *key, options.strictness);

    #[cfg(feature = "parallel")]
    let results: Vec<Result<Option<ScoredCandidate>>> = if options.parallel {
        candidates.par_iter().map(evaluate).collect()
    } else {
        candidates.iter().map(evaluate).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<Option<ScoredCandidate>>> = candidates.iter().map(evaluate).collect();

    let mut scored = Vec::with_capacity(results.len());
    for result in results {
        if let Some(candidate) = result? {
            scored.push(candidate);
        }
    }
    Ok(scored)
}

fn score_candidate(
    context: &Context,
    ciphertext: &str,
    key: AffineKey,
    strictness: Strictness,
) -> Result<Option<ScoredCandidate>> {
    let cipher = match AffineBigramCipher::new(&context.ring, key) {
        Ok(cipher) => cipher,
        Err(AnalysisError::InvalidKey { .. }) => return Ok(None),
        Err(err) => return Err(err),
    };
    let plaintext = cipher.decrypt(ciphertext)?;
    let score = context.scorer().score(&plaintext, strictness);

    Ok(Some(ScoredCandidate {
        key,
        score,
        plaintext,
    }))
}

/// Stable sort by descending score, truncated to `top_n`
pub fn rank(mut scored: Vec<ScoredCandidate>, top_n: usize) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_n.max(1));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(a: u32, score: f64) -> ScoredCandidate {
        ScoredCandidate {
            key: AffineKey::new(a, 0),
            score,
            plaintext: String::new(),
        }
    }

    #[test]
    fn test_rank_orders_and_truncates() {
        let ranked = rank(
            vec![candidate(1, -3.0), candidate(2, 1.5), candidate(3, 0.0)],
            2,
        );
        let keys: Vec<u32> = ranked.iter().map(|c| c.key.a).collect();
        assert_eq!(keys, vec![2, 3]);
    }

    #[test]
    fn test_rank_ties_keep_order() {
        let ranked = rank(vec![candidate(5, 1.0), candidate(4, 1.0)], 5);
        assert_eq!(ranked[0].key.a, 5);
        assert_eq!(ranked[1].key.a, 4);
    }

    #[test]
    fn test_invalid_keys_are_excluded() {
        let context = Context::russian();
        let candidates = [
            AffineKey::new(31, 0),
            AffineKey::new(37, 5),
            AffineKey::new(62, 7),
        ];
        let scored =
            score_candidates(&context, "абвг", &candidates, &AnalysisOptions::default()).unwrap();

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].key, AffineKey::new(37, 5));
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let context = Context::russian();
        let candidates: Vec<AffineKey> = (1..200).map(|a| AffineKey::new(a, a * 3)).collect();
        let parallel = AnalysisOptions::default();
        let sequential = AnalysisOptions {
            parallel: false,
            ..parallel
        };

        let text = "пдфжлдюабтяфшцрпэчзцьбяфгелнюрхглзяфэьфы";
        assert_eq!(
            score_candidates(&context, text, &candidates, &parallel).unwrap(),
            score_candidates(&context, text, &candidates, &sequential).unwrap()
        );
    }

    #[test]
    fn test_no_candidates_for_letterless_text() {
        let context = Context::russian();
        let result = analyze(&context, "12345 !!!", &AnalysisOptions::default());
        assert_eq!(result.unwrap_err(), AnalysisError::NoValidCandidate);
    }
}
