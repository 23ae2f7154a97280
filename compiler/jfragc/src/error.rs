use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures outside the scanner itself. The scanner never fails.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),

    #[error("cannot render report: {0}")]
    Render(#[from] serde_json::Error),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

impl CliError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Write {
            path: path.into(),
            source,
        }
    }
}
