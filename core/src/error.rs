use std::path::PathBuf;

use thiserror::Error;

/// Failures while scanning the project root. These are the only errors that
/// abort a run before any analyzer is invoked; per-project failures are
/// folded into [`crate::runner::TaskOutcome`] instead.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("project root does not exist: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("project root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),
    #[error("discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
