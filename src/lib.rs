// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod cli;
pub mod feedback;
pub mod logging;
pub mod session;
pub mod solver;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use feedback::{Feedback, FeedbackLine, WORD_LENGTH};
pub use session::Session;
pub use solver::{
    remaining_candidates, word_score, Candidate, FrequencyStrategy, RandomStrategy, SolverError,
    Strategy, Turn,
};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
