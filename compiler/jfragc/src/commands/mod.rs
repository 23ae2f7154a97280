//! Command handlers.
//!
//! Each handler writes to a caller-supplied writer so the binary can pass
//! stdout and tests can pass a buffer. Shared input handling lives here.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::cli::{Cli, Command};
use crate::CliError;

mod check;
mod mirror;
mod strip;

pub use check::check;
pub use mirror::{mirror, MirrorStats, MIRROR_DIR};
pub use strip::strip;

/// How a successful command ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The fragment was scanned and has a non-empty `errmsg`.
    FragmentInvalid,
}

impl Status {
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::FragmentInvalid => 1,
        }
    }
}

/// Exit code for a [`CliError`].
pub const ERROR_EXIT_CODE: u8 = 2;

/// Run the parsed command line.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<Status, CliError> {
    let config = cli.scan.config();
    match &cli.command {
        Command::Check { file } => check(&read_source(file.as_deref())?, &config, out),
        Command::Strip { file } => strip(&read_source(file.as_deref())?, &config, out),
        Command::Mirror { dir, quiet } => {
            let progress = if *quiet { None } else { Some(out) };
            mirror(dir, &config, progress)?;
            Ok(Status::Success)
        }
    }
}

/// Read a fragment from `file`, or from stdin when it is `None` or `-`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_source(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => {
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(CliError::Stdin)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(|e| CliError::read(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
