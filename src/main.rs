use std::path::PathBuf;

use clap::Parser;
use sports_quiz::{logging, Quiz, QuizError};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (defaults to the bundled sports set)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// JSON file with per-option vote statistics
    #[arg(short, long, requires = "questions")]
    stats: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<(), QuizError> {
    if let Some(path) = &args.log_file {
        logging::init(path, &args.log_level)?;
    }

    let quiz = match &args.questions {
        Some(path) => Quiz::from_json(path, args.stats.as_deref())?,
        None => Quiz::builtin(),
    };
    info!("launching quiz");
    quiz.run()
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
