//! The `check` command: print the scan report as JSON.

use std::io::Write;

use jfrag_lexer::{scan_with, ScanConfig};

use super::Status;
use crate::CliError;

pub fn check(source: &str, config: &ScanConfig, out: &mut dyn Write) -> Result<Status, CliError> {
    let result = scan_with(source, config);
    serde_json::to_writer_pretty(&mut *out, &result)?;
    writeln!(out)?;

    if result.is_valid() {
        Ok(Status::Success)
    } else {
        Ok(Status::FragmentInvalid)
    }
}
