//! Frequency analysis of letters and bigrams

use std::collections::HashMap;
use std::hash::Hash;

use crate::alphabet::Bigram;

/// Occurrence counts of symbols, remembering first-seen order
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    counts: HashMap<T, usize>,
    order: Vec<T>,
    total: usize,
}

impl<T: Copy + Eq + Hash> FrequencyTable<T> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
            total: 0,
        }
    }

    pub fn add(&mut self, symbol: T) {
        let count = self.counts.entry(symbol).or_insert(0);
        if *count == 0 {
            self.order.push(symbol);
        }
        *count += 1;
        self.total += 1;
    }

    pub fn count(&self, symbol: &T) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Number of symbols counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct symbols
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Symbols by descending count; ties keep first-seen order
    pub fn ranked(&self) -> Vec<(T, usize)> {
        let mut ranked: Vec<(T, usize)> = self
            .order
            .iter()
            .map(|symbol| (*symbol, self.counts[symbol]))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` most frequent symbols
    pub fn top(&self, n: usize) -> Vec<T> {
        self.ranked().into_iter().take(n).map(|(symbol, _)| symbol).collect()
    }

    /// Shannon entropy in bits: −Σ p·log₂ p
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        -self
            .counts
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                p * p.log2()
            })
            .sum::<f64>()
    }
}

impl<T: Copy + Eq + Hash> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for symbol in iter {
            table.add(symbol);
        }
        table
    }
}

/// Split text into non-overlapping bigrams at positions (0,1), (2,3), ...
///
/// A trailing unpaired character is dropped.
pub fn split_bigrams(text: &str) -> Vec<Bigram> {
    let chars: Vec<char> = text.chars().collect();
    chars.chunks_exact(2).map(|pair| [pair[0], pair[1]]).collect()
}

pub fn bigram_table(text: &str) -> FrequencyTable<Bigram> {
    split_bigrams(text).into_iter().collect()
}

pub fn character_table(text: &str) -> FrequencyTable<char> {
    text.chars().collect()
}

/// Non-overlapping bigrams ranked by descending count
pub fn bigram_frequencies(text: &str) -> Vec<(Bigram, usize)> {
    bigram_table(text).ranked()
}

/// Characters (spaces included) ranked by descending count
pub fn character_frequencies(text: &str) -> Vec<(char, usize)> {
    character_table(text).ranked()
}

/// Every adjacent pair of characters ranked by descending count
pub fn overlapping_bigram_frequencies(text: &str) -> Vec<(Bigram, usize)> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(2)
        .map(|pair| [pair[0], pair[1]])
        .collect::<FrequencyTable<Bigram>>()
        .ranked()
}

/// Σ n_c·(n_c − 1) / (n·(n − 1)), or 0 when the text has fewer than two characters
pub fn index_of_coincidence(text: &str) -> f64 {
    let table = character_table(text);
    let n = table.total();
    if n <= 1 {
        return 0.0;
    }

    let numerator: usize = table
        .ranked()
        .iter()
        .map(|&(_, count)| count * (count - 1))
        .sum();
    numerator as f64 / (n * (n - 1)) as f64
}

/// Per-letter entropy H1
pub fn letter_entropy(text: &str) -> f64 {
    character_table(text).entropy()
}

/// Per-letter entropy H2 estimated from overlapping bigrams
pub fn bigram_entropy(text: &str) -> f64 {
    let chars: Vec<char> = text.chars().collect();
    let table: FrequencyTable<Bigram> = chars.windows(2).map(|pair| [pair[0], pair[1]]).collect();
    table.entropy() / 2.0
}
