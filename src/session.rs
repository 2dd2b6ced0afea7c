//! Guess history and the console feedback loop.

use std::io::BufRead;

use crate::feedback::{self, FeedbackLine};
use crate::solver::{remaining_candidates, SolverError, Strategy, Turn};

/// Feedback-and-suggest cycles allowed after the opening guess.
pub const MAX_ATTEMPTS: usize = 12;

/// Opening guess used when the caller does not pick one.
pub const DEFAULT_OPENING: &str = "irate";

/// Append-only record of the turns played so far.
///
/// The session owns the history; the corpus is borrowed read-only and the
/// filter is recomputed from the full history on every suggestion.
pub struct Session<'a> {
    corpus: &'a [String],
    history: Vec<Turn>,
}

impl<'a> Session<'a> {
    pub fn new(corpus: &'a [String]) -> Self {
        Self {
            corpus,
            history: Vec::new(),
        }
    }

    /// Record one (guess, feedback) pair. Turn order is insertion order.
    pub fn record(&mut self, guess: &str, feedback: FeedbackLine) {
        self.history.push(Turn::new(guess, feedback));
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Next guess according to `strategy`, given everything recorded so far.
    pub fn suggest(&self, strategy: &mut dyn Strategy) -> Result<String, SolverError> {
        let candidates = remaining_candidates(self.corpus, &self.history)?;
        strategy.select(&candidates)
    }
}

/// Run the interactive loop: print the opening guess, then read feedback and
/// suggest until a sentinel, EOF, an error, or the attempt limit.
pub fn run<R: BufRead>(corpus: &[String], opening: &str, strategy: &mut dyn Strategy, mut reader: R) {
    let mut session = Session::new(corpus);
    let mut guess = opening.to_string();
    let mut attempt = 1;
    println!("Attempt {attempt}: {guess}");

    for _ in 0..MAX_ATTEMPTS {
        let Some(line) = read_feedback_line(&mut reader) else {
            break;
        };
        if line == feedback::EXIT_SENTINEL || line == feedback::ALL_CORRECT {
            break;
        }
        let Some(parsed) = feedback::parse_line(&line) else {
            println!("Invalid feedback. Please enter 5 characters using g, y, or x.");
            continue;
        };

        session.record(&guess, parsed);
        match session.suggest(strategy) {
            Ok(next) => {
                guess = next;
                attempt += 1;
                println!("Attempt {attempt}: {guess}");
            }
            Err(SolverError::NoCandidates) => {
                println!("No consistent words remain. Check your feedback.");
                break;
            }
            Err(err) => {
                println!("{err}");
                break;
            }
        }
    }
}

fn read_feedback_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    if reader.read_line(&mut input).ok()? == 0 {
        return None;
    }
    Some(input.trim().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::parse_line;
    use crate::solver::FrequencyStrategy;
    use std::io::Cursor;

    fn corpus(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn session_records_turns_in_order() {
        let corpus = corpus(&["crane", "slate"]);
        let mut session = Session::new(&corpus);
        session.record("crane", parse_line("xxxxx").unwrap());
        session.record("slate", parse_line("ggggg").unwrap());
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].guess, "crane");
        assert_eq!(session.history()[1].guess, "slate");
    }

    #[test]
    fn session_suggest_respects_history() {
        let corpus = corpus(&["apple", "angle", "amble", "anode"]);
        let mut session = Session::new(&corpus);
        session.record("apple", parse_line("gxxxg").unwrap());
        let mut strategy = FrequencyStrategy;
        assert_eq!(session.suggest(&mut strategy).unwrap(), "anode");
    }

    #[test]
    fn session_suggest_surfaces_no_candidates() {
        let corpus = corpus(&["crane"]);
        let mut session = Session::new(&corpus);
        session.record("crane", parse_line("xxxxx").unwrap());
        let mut strategy = FrequencyStrategy;
        assert!(matches!(
            session.suggest(&mut strategy),
            Err(SolverError::NoCandidates)
        ));
    }

    #[test]
    fn run_stops_on_exit_sentinel() {
        let corpus = corpus(&["crane", "slate"]);
        let mut strategy = FrequencyStrategy;
        let reader = Cursor::new("exit\n");
        run(&corpus, "crane", &mut strategy, reader);
    }

    #[test]
    fn run_stops_on_all_correct() {
        let corpus = corpus(&["crane", "slate"]);
        let mut strategy = FrequencyStrategy;
        let reader = Cursor::new("ggggg\n");
        run(&corpus, "crane", &mut strategy, reader);
    }

    #[test]
    fn run_stops_on_eof() {
        let corpus = corpus(&["crane", "slate"]);
        let mut strategy = FrequencyStrategy;
        let reader = Cursor::new("");
        run(&corpus, "crane", &mut strategy, reader);
    }

    #[test]
    fn run_reports_invalid_feedback_and_continues() {
        let corpus = corpus(&["crane", "slate", "brine"]);
        let mut strategy = FrequencyStrategy;
        let reader = Cursor::new("garbage\nexit\n");
        run(&corpus, "crane", &mut strategy, reader);
    }

    #[test]
    fn run_accepts_uppercase_feedback_and_sentinels() {
        let corpus = corpus(&["crane", "slate"]);
        let mut strategy = FrequencyStrategy;
        let reader = Cursor::new("GGGGG\n");
        run(&corpus, "crane", &mut strategy, reader);
    }

    #[test]
    fn run_narrows_and_keeps_suggesting() {
        let corpus = corpus(&["train", "brain", "grain", "drain"]);
        let mut strategy = FrequencyStrategy;
        // opening 'train' all-but-first correct, then done
        let reader = Cursor::new("xgggg\nggggg\n");
        run(&corpus, "train", &mut strategy, reader);
    }

    #[test]
    fn run_reports_exhausted_candidates() {
        let corpus = corpus(&["crane"]);
        let mut strategy = FrequencyStrategy;
        let reader = Cursor::new("xxxxx\n");
        run(&corpus, "crane", &mut strategy, reader);
    }
}
