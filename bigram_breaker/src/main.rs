use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use affine_bigram::{
    analyze, bigram_entropy, bigram_frequencies, character_frequencies, index_of_coincidence,
    letter_entropy, normalize, overlapping_bigram_frequencies, strip_spaces, AffineBigramCipher,
    AffineKey, Analysis, AnalysisOptions, Context, ScoredCandidate, Strictness,
};
use clap::{Parser, Subcommand, ValueEnum};
use rand::Rng;

/// Below this many letters the frequency statistics are unreliable
const MIN_RELIABLE_LETTERS: usize = 100;

/// Command-line arguments for the affine bigram breaker.
#[derive(Parser, Debug)]
#[command(
    name = "bigram-breaker",
    about = "Affine bigram cipher tool: recover the key from ciphertext alone, encrypt or decrypt",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recover the most plausible key and plaintext of a ciphertext
    Analyze {
        /// Path to the input file containing encrypted text
        #[arg(short, long, help = "Path to the input file containing encrypted text")]
        file: PathBuf,

        /// Path to the output file where the best decryption will be saved
        #[arg(short, long, help = "Path to the output file for decrypted text")]
        output: PathBuf,

        /// Number of ranked candidates to report
        #[arg(short = 'n', long, default_value_t = 5)]
        top: usize,

        /// Which plausibility checks to apply
        #[arg(short, long, value_enum, default_value_t = StrictnessArg::Full)]
        strictness: StrictnessArg,

        /// Score candidates on a single thread
        #[arg(long)]
        sequential: bool,

        /// Also save the normalized ciphertext to this path
        #[arg(short, long)]
        preprocessed: Option<PathBuf>,
    },

    /// Encrypt text with a given or random key
    Encrypt {
        #[arg(short, long, help = "Path to the input file containing plain text")]
        file: PathBuf,

        #[arg(short, long, help = "Path to the output file for encrypted text")]
        output: PathBuf,

        /// Multiplier a (must be coprime to the ring size); random if omitted
        #[arg(short, requires = "b")]
        a: Option<u32>,

        /// Shift b; random if omitted
        #[arg(short, requires = "a")]
        b: Option<u32>,
    },

    /// Decrypt text with a known key
    Decrypt {
        #[arg(short, long, help = "Path to the input file containing encrypted text")]
        file: PathBuf,

        #[arg(short, long, help = "Path to the output file for decrypted text")]
        output: PathBuf,

        #[arg(short)]
        a: u32,

        #[arg(short)]
        b: u32,
    },

    /// Print letter and bigram statistics of a text
    Stats {
        #[arg(short, long, help = "Path to the input file")]
        file: PathBuf,

        /// Number of top letters and bigrams to list
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,

        /// Keep word separators, counting the space as a character
        #[arg(long)]
        with_spaces: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrictnessArg {
    /// Frequent letters only
    Letters,
    /// Frequent and rare letters
    RareLetters,
    /// Letters plus index of coincidence
    Full,
}

impl From<StrictnessArg> for Strictness {
    fn from(arg: StrictnessArg) -> Self {
        match arg {
            StrictnessArg::Letters => Strictness::Letters,
            StrictnessArg::RareLetters => Strictness::RareLetters,
            StrictnessArg::Full => Strictness::Full,
        }
    }
}

/// Main entry point for the affine bigram breaker.
fn main() -> Result<(), Box<dyn Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Alphabet, ring and language statistics are built once for the whole run
    let context = Context::russian();

    match cli.command {
        Command::Analyze {
            file,
            output,
            top,
            strictness,
            sequential,
            preprocessed,
        } => {
            let content = read_text(&file)?;
            let options = AnalysisOptions {
                top_n: top,
                strictness: strictness.into(),
                parallel: !sequential,
            };

            // Recover the key: normalize, match frequencies, decrypt and rank
            let analysis = analyze(&context, &content, &options)?;

            if let Some(path) = preprocessed {
                write_text(&path, &analysis.normalized)?;
                println!("Preprocessed text saved to {}", path.display());
            }
            warn_if_short(&analysis.normalized);
            report(&analysis);

            if let Some(best) = analysis.best() {
                // The best candidate may still look nothing like the language
                if is_low_confidence(&context, best, options.strictness) {
                    eprintln!(
                        "Warning: best key {} passes no letter frequency check, decryption is low-confidence",
                        best.key
                    );
                }
                println!("{}", best.plaintext);
                write_text(&output, &best.plaintext)?;
            }
        }
        Command::Encrypt { file, output, a, b } => {
            let modulus = context.ring().modulus();
            let key = match (a, b) {
                (Some(a), Some(b)) => AffineKey::new(a % modulus, b % modulus),
                _ => random_key(modulus),
            };
            let plaintext = strip_spaces(&normalize(&read_text(&file)?, context.profile().alphabet()));
            let cipher = AffineBigramCipher::new(context.ring(), key)?;

            write_text(&output, &cipher.encrypt(&plaintext)?)?;
            println!("Encrypted with key {}", cipher.key());
        }
        Command::Decrypt { file, output, a, b } => {
            let modulus = context.ring().modulus();
            let key = AffineKey::new(a % modulus, b % modulus);
            let ciphertext = strip_spaces(&normalize(&read_text(&file)?, context.profile().alphabet()));
            let cipher = AffineBigramCipher::new(context.ring(), key)?;

            write_text(&output, &cipher.decrypt(&ciphertext)?)?;
            println!("Decrypted with key {}", cipher.key());
        }
        Command::Stats {
            file,
            top,
            with_spaces,
        } => {
            let normalized = normalize(&read_text(&file)?, context.profile().alphabet());
            warn_if_short(&normalized);

            let text = stats_text(&normalized, with_spaces);
            for line in stats_report(&context, &text, top) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Prints the frequent bigrams, candidate counts and the ranked keys.
///
/// # Arguments
///
/// * `analysis` - The outcome of a key recovery run.
fn report(analysis: &Analysis) {
    // Ciphertext bigrams the candidates were derived from
    let frequent: Vec<String> = analysis
        .frequent_bigrams
        .iter()
        .map(|bigram| bigram.iter().collect())
        .collect();
    println!("Most frequent bigrams: {:?}", frequent);
    println!(
        "Candidate keys: {} ({} discarded as not invertible)",
        analysis.candidates.len(),
        analysis.invalid_keys
    );

    // One line per ranked key, best first
    println!("Top {} rated:", analysis.ranked.len());
    for candidate in &analysis.ranked {
        println!("{:.6} : {}", candidate.score, candidate.key);
    }
}

/// Checks whether a decryption fails every letter frequency check.
///
/// # Arguments
///
/// * `context` - Language statistics to score against.
/// * `candidate` - The decryption to judge.
/// * `strictness` - The checks that were used for ranking.
///
/// # Returns
///
/// `true` if the candidate passed none of the letter checks.
fn is_low_confidence(context: &Context, candidate: &ScoredCandidate, strictness: Strictness) -> bool {
    context.scorer().letter_checks(&candidate.plaintext, strictness) == 0
}

/// Selects the text that statistics are computed over.
///
/// # Arguments
///
/// * `normalized` - Canonical text with single spaces between words.
/// * `with_spaces` - Whether the word separators are kept.
///
/// # Returns
///
/// The normalized text, with or without its spaces.
fn stats_text(normalized: &str, with_spaces: bool) -> String {
    if with_spaces {
        normalized.to_string()
    } else {
        strip_spaces(normalized)
    }
}

/// Builds the letter and bigram statistics report of a text.
///
/// # Arguments
///
/// * `context` - Language statistics providing the expected index of coincidence.
/// * `text` - The text to analyze.
/// * `top` - How many letters and bigrams to list per ranking.
///
/// # Returns
///
/// The report, one line per entry.
fn stats_report(context: &Context, text: &str, top: usize) -> Vec<String> {
    let mut lines = vec![format!("Characters: {}", text.chars().count())];

    lines.push("Most frequent letters:".to_string());
    for (letter, count) in character_frequencies(text).into_iter().take(top) {
        lines.push(format!("  '{}' : {}", letter, count));
    }

    // Non-overlapping pairs, as the cipher sees them
    lines.push("Most frequent bigrams:".to_string());
    for (bigram, count) in bigram_frequencies(text).into_iter().take(top) {
        lines.push(format!("  '{}{}' : {}", bigram[0], bigram[1], count));
    }

    // Every adjacent pair, as H2 is estimated from them
    lines.push("Most frequent overlapping bigrams:".to_string());
    for (bigram, count) in overlapping_bigram_frequencies(text).into_iter().take(top) {
        lines.push(format!("  '{}{}' : {}", bigram[0], bigram[1], count));
    }

    lines.push(format!(
        "Index of coincidence: {:.6} (expected {:.6})",
        index_of_coincidence(text),
        context.profile().expected_ic()
    ));
    lines.push(format!("H1: {:.6}", letter_entropy(text)));
    lines.push(format!("H2: {:.6}", bigram_entropy(text)));
    lines
}

/// Warns on stderr when a text is too short for frequency analysis.
///
/// # Arguments
///
/// * `normalized` - Canonical text; spaces are not counted.
fn warn_if_short(normalized: &str) {
    let letters = normalized.chars().filter(|&c| c != ' ').count();
    if letters < MIN_RELIABLE_LETTERS {
        eprintln!(
            "Warning: only {} letters, text may be too short for reliable analysis",
            letters
        );
    }
}

/// Draws a key whose multiplier is invertible modulo `modulus`.
///
/// # Arguments
///
/// * `modulus` - The ring size `M`.
///
/// # Returns
///
/// A usable key with `a` in `[1, M)` and `b` in `[0, M)`.
fn random_key(modulus: u32) -> AffineKey {
    let mut rng = rand::thread_rng();
    loop {
        let key = AffineKey::new(rng.gen_range(1..modulus), rng.gen_range(0..modulus));
        if key.is_invertible(modulus) {
            return key;
        }
    }
}

/// Reads a whole UTF-8 text file.
///
/// # Arguments
///
/// * `path` - The file to read.
///
/// # Returns
///
/// The file content, or an error naming the path.
fn read_text(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
}

/// Writes text to a file, replacing any previous content.
///
/// # Arguments
///
/// * `path` - The file to write.
/// * `content` - The text to store.
///
/// # Returns
///
/// `Ok(())` on success, or an error naming the path.
fn write_text(path: &Path, content: &str) -> Result<(), Box<dyn Error>> {
    fs::write(path, content)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e).into())
}
