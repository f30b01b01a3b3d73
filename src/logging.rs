//! Tracing setup.
//!
//! The UI owns stdout, so events only go to a file when one is requested.

use std::env;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::QuizError;

/// Install a global subscriber writing to `path`.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init(path: &Path, default_level: &str) -> Result<(), QuizError> {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(directives.as_deref(), default_level)?;
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish()
        .try_init()?;
    Ok(())
}

fn env_filter(directives: Option<&str>, default_level: &str) -> Result<EnvFilter, QuizError> {
    let directives = directives
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(default_level);
    Ok(EnvFilter::try_new(directives)?)
}
