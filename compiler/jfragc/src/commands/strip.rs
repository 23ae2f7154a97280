//! The `strip` command: print the fragment without comments.

use std::io::Write;

use jfrag_lexer::{scan_with, ScanConfig};

use super::Status;
use crate::CliError;

/// Write the comment-free text exactly, with no trailing newline added.
pub fn strip(source: &str, config: &ScanConfig, out: &mut dyn Write) -> Result<Status, CliError> {
    let result = scan_with(source, config);
    out.write_all(result.text_nocomments().as_bytes())?;
    out.flush()?;
    Ok(Status::Success)
}
