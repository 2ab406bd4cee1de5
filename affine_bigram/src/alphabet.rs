//! Alphabet and language statistics used by the attack

use std::collections::HashMap;

use crate::error::{AnalysisError, Result};

/// Russian alphabet in ring order (no `ё`, no `ъ`)
pub const RUSSIAN_ALPHABET: &str = "абвгдежзийклмнопрстуфхцчшщьыэюя";

/// Expected letter probabilities of Russian text
pub const RUSSIAN_PROBABILITIES: [f64; 32] = [
    0.08143, 0.01667, 0.04604, 0.01632, 0.03084, 0.08027, 0.00884,
    0.01507, 0.07563, 0.01200, 0.03374, 0.03952, 0.03270, 0.06503, 0.11143,
    0.02931, 0.04774, 0.05482, 0.06829, 0.02647, 0.00310, 0.00827, 0.00455,
    0.01458, 0.00681, 0.00330, 0.01808, 0.01752, 0.00425, 0.00735, 0.01818,
    0.00036,
];

/// The five most frequent (non-overlapping) bigrams of Russian text
pub const RUSSIAN_CRIB: [&str; 5] = ["ст", "но", "то", "на", "ен"];

/// A bigram: an ordered pair of letters
pub type Bigram = [char; 2];

/// Renders a bigram as a two-character string
pub fn bigram_to_string(bigram: &Bigram) -> String {
    bigram.iter().collect()
}

/// An ordered set of letters with an optional fold table
///
/// The fold table maps letter variants that are not part of the alphabet
/// (for example `ё`) onto a base letter that is.
#[derive(Debug, Clone)]
pub struct Alphabet {
    letters: Vec<char>,
    positions: HashMap<char, usize>,
    folds: HashMap<char, char>,
}

impl Alphabet {
    /// Create an alphabet from its letters in ring order
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyAlphabet`] if there are no letters and
    /// [`AnalysisError::DuplicateLetter`] if a letter repeats.
    pub fn new(letters: &str) -> Result<Self> {
        let letters: Vec<char> = letters.chars().collect();
        if letters.is_empty() {
            return Err(AnalysisError::EmptyAlphabet);
        }
        let mut positions = HashMap::with_capacity(letters.len());

        for (pos, &letter) in letters.iter().enumerate() {
            if positions.insert(letter, pos).is_some() {
                return Err(AnalysisError::DuplicateLetter(letter));
            }
        }

        Ok(Self {
            letters,
            positions,
            folds: HashMap::new(),
        })
    }

    /// Fold `variant` onto `base` during normalization
    pub fn with_fold(mut self, variant: char, base: char) -> Self {
        self.folds.insert(variant, base);
        self
    }

    /// The Russian alphabet, folding `ё`/`Ё` onto `е`
    pub fn russian() -> Self {
        let letters: Vec<char> = RUSSIAN_ALPHABET.chars().collect();
        let positions = letters.iter().enumerate().map(|(pos, &c)| (c, pos)).collect();

        Self {
            letters,
            positions,
            folds: HashMap::new(),
        }
        .with_fold('ё', 'е')
        .with_fold('Ё', 'е')
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn contains(&self, letter: char) -> bool {
        self.positions.contains_key(&letter)
    }

    /// Position of a letter in ring order
    pub fn position(&self, letter: char) -> Option<usize> {
        self.positions.get(&letter).copied()
    }

    /// Map an input character onto the alphabet, if it has a counterpart
    ///
    /// Alphabet letters pass through, fold-table variants map to their base
    /// letter and uppercase forms are lowered when the lowercase form is a
    /// letter of the alphabet.
    pub fn canonical(&self, c: char) -> Option<char> {
        if self.contains(c) {
            return Some(c);
        }
        if let Some(&base) = self.folds.get(&c) {
            return Some(base);
        }

        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l != c => self.canonical(l),
            _ => None,
        }
    }
}

/// Statistical model of the plaintext language
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    alphabet: Alphabet,
    crib: Vec<Bigram>,
    frequent_letters: Vec<char>,
    rare_letters: Vec<char>,
    expected_ic: f64,
}

impl LanguageProfile {
    /// Build a profile, precomputing the expected index of coincidence
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownBigram`] if a crib entry is not a
    /// pair of alphabet letters.
    pub fn new(
        alphabet: Alphabet,
        probabilities: &[f64],
        crib: &[&str],
        frequent_letters: &[char],
        rare_letters: &[char],
    ) -> Result<Self> {
        let crib = crib
            .iter()
            .map(|entry| {
                let chars: Vec<char> = entry.chars().collect();
                match chars.as_slice() {
                    &[x, y] if alphabet.contains(x) && alphabet.contains(y) => Ok([x, y]),
                    _ => Err(AnalysisError::UnknownBigram(entry.to_string())),
                }
            })
            .collect::<Result<Vec<Bigram>>>()?;

        Ok(Self {
            alphabet,
            crib,
            frequent_letters: frequent_letters.to_vec(),
            rare_letters: rare_letters.to_vec(),
            expected_ic: expected_index_of_coincidence(probabilities),
        })
    }

    /// Built-in profile of Russian text
    pub fn russian() -> Self {
        let crib = RUSSIAN_CRIB
            .iter()
            .filter_map(|entry| {
                let mut chars = entry.chars();
                Some([chars.next()?, chars.next()?])
            })
            .collect();

        Self {
            alphabet: Alphabet::russian(),
            crib,
            frequent_letters: vec!['о', 'е', 'а'],
            rare_letters: vec!['ф', 'ц', 'щ'],
            expected_ic: expected_index_of_coincidence(&RUSSIAN_PROBABILITIES),
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Most frequent plaintext bigrams, most frequent first
    pub fn crib(&self) -> &[Bigram] {
        &self.crib
    }

    pub fn frequent_letters(&self) -> &[char] {
        &self.frequent_letters
    }

    pub fn rare_letters(&self) -> &[char] {
        &self.rare_letters
    }

    pub fn expected_ic(&self) -> f64 {
        self.expected_ic
    }
}

/// Σ p² over a letter distribution
pub fn expected_index_of_coincidence(probabilities: &[f64]) -> f64 {
    probabilities.iter().map(|&p| p.powi(2)).sum()
}
