use std::io;
use std::process::ExitCode;

use wordle_helper::cli::{parse_cli, StrategyKind};
use wordle_helper::solver::{FrequencyStrategy, RandomStrategy, Strategy};
use wordle_helper::wordbank::{load_wordbank_from_file, load_wordbank_from_str, EMBEDDED_WORDBANK};
use wordle_helper::{logging, session, WORD_LENGTH};

fn main() -> ExitCode {
    logging::init();
    let cli = parse_cli();

    let corpus = match &cli.wordlist_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    if corpus.is_empty() {
        eprintln!("Word list is empty.");
        return ExitCode::FAILURE;
    }
    log::info!("loaded {} words", corpus.len());

    let opening = cli.opening.trim().to_ascii_lowercase();
    if opening.len() != WORD_LENGTH || !opening.bytes().all(|b| b.is_ascii_lowercase()) {
        eprintln!("Opening guess must be five letters.");
        return ExitCode::FAILURE;
    }

    let mut strategy: Box<dyn Strategy> = match (cli.strategy, cli.seed) {
        (StrategyKind::Frequency, _) => Box::new(FrequencyStrategy),
        (StrategyKind::Random, Some(seed)) => Box::new(RandomStrategy::seeded(seed)),
        (StrategyKind::Random, None) => Box::new(RandomStrategy::new()),
    };

    let stdin = io::stdin();
    session::run(&corpus, &opening, strategy.as_mut(), stdin.lock());
    ExitCode::SUCCESS
}
