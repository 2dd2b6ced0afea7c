//! Candidate filtering and next-guess selection.
//!
//! The filter reduces the corpus to the words consistent with every recorded
//! turn; a [`Strategy`] then picks one of the survivors as the next guess.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::feedback::{Feedback, FeedbackLine, WORD_LENGTH};

/// Relative frequency of each letter in English text, in hundredths so that
/// scores stay exact integers. Indexed by `letter - b'a'`.
const LETTER_WEIGHTS: [u32; 26] = [
    4331, // a
    1056, // b
    2313, // c
    1725, // d
    5688, // e
    924,  // f
    1259, // g
    1531, // h
    3845, // i
    100,  // j
    561,  // k
    2798, // l
    1536, // m
    3392, // n
    3651, // o
    1614, // p
    100,  // q
    3864, // r
    2923, // s
    3543, // t
    1851, // u
    513,  // v
    657,  // w
    148,  // x
    906,  // y
    139,  // z
];

#[derive(Debug)]
pub enum SolverError {
    /// A recorded guess had the wrong shape.
    InvalidInput(String),
    /// Two turns lock different letters onto the same position.
    ContradictoryHistory {
        position: usize,
        first: char,
        second: char,
    },
    /// No corpus word is consistent with the accumulated feedback.
    NoCandidates,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            SolverError::ContradictoryHistory {
                position,
                first,
                second,
            } => write!(
                f,
                "contradictory history: position {} locked to both '{first}' and '{second}'",
                position + 1
            ),
            SolverError::NoCandidates => write!(f, "no consistent words remain"),
        }
    }
}

impl Error for SolverError {}

/// One (guess, feedback) pair as reported by the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: String,
    pub feedback: FeedbackLine,
}

impl Turn {
    pub fn new(guess: &str, feedback: FeedbackLine) -> Self {
        Self {
            guess: guess.to_string(),
            feedback,
        }
    }
}

/// A corpus word still consistent with the feedback history.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub word: String,
    /// Number of distinct letters, for strategies that prefer coverage.
    pub distinct_letters: usize,
}

impl Candidate {
    fn new(word: String) -> Self {
        let distinct_letters = word.bytes().collect::<HashSet<u8>>().len();
        Self {
            word,
            distinct_letters,
        }
    }
}

/// Letter constraints derived from the full guess history.
///
/// Recomputed from scratch every turn. Constraints only accumulate, so the
/// remaining set can never grow as history does.
#[derive(Debug, Default)]
struct Constraints {
    absent: HashSet<u8>,
    present: HashSet<u8>,
    locks: [Option<u8>; WORD_LENGTH],
    excluded_positions: HashSet<(usize, u8)>,
}

impl Constraints {
    fn derive(history: &[Turn]) -> Result<Self, SolverError> {
        let mut constraints = Constraints::default();

        // Correct marks first: a letter that is green anywhere, in any turn,
        // must never be globally excluded even if another occurrence of it
        // was gray.
        let mut correct_letters: HashSet<u8> = HashSet::new();
        for turn in history {
            let letters = turn.guess.as_bytes().iter().zip(turn.feedback);
            for (i, (&letter, fb)) in letters.enumerate() {
                if fb == Feedback::Correct {
                    correct_letters.insert(letter);
                    match constraints.locks[i] {
                        None => constraints.locks[i] = Some(letter),
                        Some(locked) if locked != letter => {
                            return Err(SolverError::ContradictoryHistory {
                                position: i,
                                first: locked as char,
                                second: letter as char,
                            });
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        for turn in history {
            let letters = turn.guess.as_bytes().iter().zip(turn.feedback);
            for (i, (&letter, fb)) in letters.enumerate() {
                match fb {
                    Feedback::Correct => {}
                    Feedback::Present => {
                        constraints.present.insert(letter);
                        constraints.excluded_positions.insert((i, letter));
                    }
                    Feedback::Absent => {
                        if !correct_letters.contains(&letter) {
                            constraints.absent.insert(letter);
                        }
                    }
                }
            }
        }

        Ok(constraints)
    }

    fn admits(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        if bytes.iter().any(|b| self.absent.contains(b)) {
            return false;
        }
        if !self.present.iter().all(|b| bytes.contains(b)) {
            return false;
        }
        for (i, lock) in self.locks.iter().enumerate() {
            if let Some(locked) = lock {
                if bytes[i] != *locked {
                    return false;
                }
            }
        }
        self.excluded_positions
            .iter()
            .all(|&(i, letter)| bytes[i] != letter)
    }
}

fn is_valid_guess(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Filter the corpus down to the words consistent with every recorded turn.
///
/// Already-guessed words are excluded. Output order is unspecified by
/// contract; callers must not rely on it.
pub fn remaining_candidates(
    corpus: &[String],
    history: &[Turn],
) -> Result<Vec<Candidate>, SolverError> {
    for turn in history {
        if !is_valid_guess(&turn.guess) {
            return Err(SolverError::InvalidInput(format!(
                "guess '{}' is not five lowercase letters",
                turn.guess
            )));
        }
    }

    let constraints = Constraints::derive(history)?;
    let guessed: HashSet<&str> = history.iter().map(|t| t.guess.as_str()).collect();

    let candidates: Vec<Candidate> = corpus
        .iter()
        .filter(|word| !guessed.contains(word.as_str()))
        .filter(|word| constraints.admits(word))
        .map(|word| Candidate::new(word.clone()))
        .collect();

    log::debug!(
        "{} of {} words remain after {} turns",
        candidates.len(),
        corpus.len(),
        history.len()
    );
    Ok(candidates)
}

/// Sum of per-letter frequency weights; repeated letters count every time.
pub fn word_score(word: &str) -> u32 {
    word.bytes()
        .map(|b| LETTER_WEIGHTS[(b - b'a') as usize])
        .sum()
}

/// Picks the next guess from the remaining candidates.
pub trait Strategy {
    fn select(&mut self, candidates: &[Candidate]) -> Result<String, SolverError>;
}

/// Uniform random choice among the remaining candidates.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed variant for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select(&mut self, candidates: &[Candidate]) -> Result<String, SolverError> {
        candidates
            .choose(&mut self.rng)
            .map(|c| c.word.clone())
            .ok_or(SolverError::NoCandidates)
    }
}

/// Highest letter-frequency score wins; ties go to the earliest candidate,
/// so the pick is deterministic for a given filter output.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select(&mut self, candidates: &[Candidate]) -> Result<String, SolverError> {
        let mut best: Option<(&Candidate, u32)> = None;
        for candidate in candidates {
            let score = word_score(&candidate.word);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((candidate, score)),
            }
        }
        best.map(|(c, _)| c.word.clone())
            .ok_or(SolverError::NoCandidates)
    }
}
