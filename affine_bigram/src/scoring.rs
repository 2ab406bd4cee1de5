//! Plausibility scoring of candidate plaintexts

use crate::alphabet::LanguageProfile;
use crate::frequency::{character_table, index_of_coincidence};

/// Size of the most/least frequent character windows
pub const RANK_WINDOW: usize = 4;

/// Weight of the index of coincidence deviation
pub const IC_PENALTY: f64 = 200.0;

/// How many checks the scorer applies; each level adds one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Strictness {
    /// A frequent language letter is among the most frequent characters
    Letters = 1,
    /// ...and a rare language letter is among the least frequent characters
    RareLetters = 2,
    /// ...and the index of coincidence is close to the language's
    #[default]
    Full = 3,
}

/// Rates text against expected language statistics; higher is better
#[derive(Debug, Clone)]
pub struct PlausibilityScorer {
    frequent_letters: Vec<char>,
    rare_letters: Vec<char>,
    expected_ic: f64,
}

impl PlausibilityScorer {
    pub fn new(profile: &LanguageProfile) -> Self {
        Self {
            frequent_letters: profile.frequent_letters().to_vec(),
            rare_letters: profile.rare_letters().to_vec(),
            expected_ic: profile.expected_ic(),
        }
    }

    /// Number of letter-rank checks the text passes at `strictness`
    ///
    /// Zero means the text looks nothing like the language, whatever its
    /// index of coincidence.
    pub fn letter_checks(&self, text: &str, strictness: Strictness) -> u32 {
        let ranked = character_table(text).top(usize::MAX);
        let window = RANK_WINDOW.min(ranked.len());
        let mut passed = 0;

        let most_frequent = &ranked[..window];
        if most_frequent.iter().any(|c| self.frequent_letters.contains(c)) {
            passed += 1;
        }
        if strictness == Strictness::Letters {
            return passed;
        }

        let least_frequent = &ranked[ranked.len() - window..];
        if least_frequent.iter().any(|c| self.rare_letters.contains(c)) {
            passed += 1;
        }
        passed
    }

    pub fn score(&self, text: &str, strictness: Strictness) -> f64 {
        let score = self.letter_checks(text, strictness) as f64;
        if strictness < Strictness::Full {
            return score;
        }

        score - IC_PENALTY * (index_of_coincidence(text) - self.expected_ic).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> PlausibilityScorer {
        PlausibilityScorer::new(&LanguageProfile::russian())
    }

    #[test]
    fn test_frequent_letter_check() {
        let scorer = scorer();
        assert_eq!(scorer.score("ооооабвгд", Strictness::Letters), 1.0);
        assert_eq!(scorer.score("ккккбвгдж", Strictness::Letters), 0.0);
    }

    #[test]
    fn test_rare_letter_check() {
        let scorer = scorer();
        // least frequent window: в, г, д, ф
        assert_eq!(scorer.score("оооббббввгдф", Strictness::RareLetters), 2.0);
        assert_eq!(scorer.score("оооббббввгдж", Strictness::RareLetters), 1.0);
    }

    #[test]
    fn test_levels_are_monotonic_checks() {
        let scorer = scorer();
        let text = "оооббббввгдф";
        let letters = scorer.score(text, Strictness::Letters);
        let rare = scorer.score(text, Strictness::RareLetters);
        let full = scorer.score(text, Strictness::Full);

        assert!(letters <= rare);
        let expected_penalty =
            IC_PENALTY * (index_of_coincidence(text) - scorer.expected_ic).abs();
        assert!((rare - expected_penalty - full).abs() < 1e-12);
    }

    #[test]
    fn test_short_text_does_not_panic() {
        let scorer = scorer();
        assert_eq!(scorer.score("", Strictness::RareLetters), 0.0);
        assert_eq!(scorer.score("о", Strictness::RareLetters), 1.0);
        assert_eq!(scorer.score("оф", Strictness::RareLetters), 2.0);
        assert!(scorer.score("", Strictness::Full).is_finite());
    }

    #[test]
    fn test_letter_checks() {
        let scorer = scorer();
        assert_eq!(scorer.letter_checks("оооббббввгдф", Strictness::Full), 2);
        assert_eq!(scorer.letter_checks("оооббббввгдф", Strictness::Letters), 1);
        assert_eq!(scorer.letter_checks("ккккбвгдж", Strictness::Full), 0);
        assert_eq!(scorer.letter_checks("", Strictness::Full), 0);
    }

    #[test]
    fn test_default_strictness() {
        assert_eq!(Strictness::default(), Strictness::Full);
        assert!(Strictness::Letters < Strictness::Full);
    }
}
