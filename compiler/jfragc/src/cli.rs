//! Argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jfrag_lexer::{EscapeRange, ScanConfig};

#[derive(Parser, Debug)]
#[command(
    name = "jfrag",
    version,
    about = "Lexical checks and comment stripping for Java fragments"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scan a fragment and print the report as JSON.
    Check {
        /// Input file; reads stdin when absent or `-`.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Print a fragment with its comments removed.
    Strip {
        /// Input file; reads stdin when absent or `-`.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Mirror every `.java` file under DIR into DIR/.nocomments, stripped.
    Mirror {
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Do not print progress.
        #[arg(long, short)]
        quiet: bool,
    },
}

#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanArgs {
    /// Decode only escapes below U+0080.
    #[arg(long, global = true)]
    pub ascii_escapes: bool,

    /// Leave a line break or space where each comment was.
    #[arg(long, global = true)]
    pub keep_separators: bool,

    /// Also match parentheses and brackets.
    #[arg(long, global = true)]
    pub match_brackets: bool,
}

impl ScanArgs {
    pub fn config(self) -> ScanConfig {
        ScanConfig {
            escapes: if self.ascii_escapes {
                EscapeRange::Ascii
            } else {
                EscapeRange::Unicode
            },
            comment_separators: self.keep_separators,
            match_brackets: self.match_brackets,
        }
    }
}
