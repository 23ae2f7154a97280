//! `jfrag`: check and strip Java source fragments.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use jfragc::cli::Cli;
use jfragc::commands::{self, ERROR_EXIT_CODE};

fn main() -> ExitCode {
    jfragc::init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match commands::run(&cli, &mut out) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
