#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests for the command handlers.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use jfrag_lexer::{EscapeRange, ScanConfig};
use jfragc::cli::{Cli, Command};
use jfragc::commands::{self, check, mirror, strip, MirrorStats, Status, MIRROR_DIR};
use jfragc::CliError;
use pretty_assertions::assert_eq;

fn run_check(source: &str) -> (Status, serde_json::Value) {
    let mut out = Vec::new();
    let status = check(source, &ScanConfig::default(), &mut out).unwrap();
    (status, serde_json::from_slice(&out).unwrap())
}

// === Argument parsing ===

#[test]
fn parses_global_scan_flags() {
    let cli = Cli::try_parse_from(["jfrag", "strip", "--keep-separators", "--ascii-escapes", "A.java"])
        .unwrap();
    assert_eq!(
        cli.command,
        Command::Strip {
            file: Some(PathBuf::from("A.java"))
        }
    );
    let config = cli.scan.config();
    assert_eq!(config.escapes, EscapeRange::Ascii);
    assert!(config.comment_separators);
    assert!(!config.match_brackets);
}

#[test]
fn mirror_defaults_to_current_dir() {
    let cli = Cli::try_parse_from(["jfrag", "mirror", "--quiet"]).unwrap();
    assert_eq!(
        cli.command,
        Command::Mirror {
            dir: PathBuf::from("."),
            quiet: true
        }
    );
}

#[test]
fn rejects_unknown_command() {
    assert!(Cli::try_parse_from(["jfrag", "format"]).is_err());
}

// === check ===

#[test]
fn check_prints_flat_report() {
    let (status, report) = run_check("x = 1; /* done */");
    assert_eq!(status, Status::Success);
    assert_eq!(report["text_nocomments"], "x = 1; ");
    assert_eq!(report["valid"], true);
    assert_eq!(report["ends-with-semicolon"], true);
    assert_eq!(report["unterminated-comment"], false);
}

#[test]
fn check_reports_invalid_fragment() {
    let (status, report) = run_check("unmatched \"!");
    assert_eq!(status, Status::FragmentInvalid);
    assert_eq!(status.exit_code(), 1);
    assert_eq!(
        report["errmsg"],
        "Error at line 1, column 11: unterminated string literal: `\"` reaches end of input"
    );
}

#[test]
fn check_reads_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Frag.java");
    fs::write(&path, "int x = 1;\r\n").unwrap();

    let cli = Cli::try_parse_from(["jfrag", "check", path.to_str().unwrap()]).unwrap();
    let mut out = Vec::new();
    let status = commands::run(&cli, &mut out).unwrap();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(status, Status::Success);
    assert_eq!(report["text"], "int x = 1;\n");
    assert_eq!(report["line_count"], 2);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Nope.java");
    let err = commands::read_source(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read "));
}

// === strip ===

#[test]
fn strip_writes_text_only() {
    let mut out = Vec::new();
    let status = strip("a /* b */c // d\ne", &ScanConfig::default(), &mut out).unwrap();
    assert_eq!(status, Status::Success);
    assert_eq!(String::from_utf8(out).unwrap(), "a c e");
}

#[test]
fn strip_with_separators() {
    let config = ScanConfig {
        comment_separators: true,
        ..ScanConfig::default()
    };
    let mut out = Vec::new();
    strip("a /* b */c // d\ne", &config, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a  c \ne");
}

// === mirror ===

#[test]
fn mirror_copies_java_files_without_comments() {
    let root = tempfile::tempdir().unwrap();
    let base = root.path();
    fs::write(base.join("Main.java"), "class Main {} // main\n").unwrap();
    fs::write(base.join("notes.txt"), "// not java").unwrap();
    fs::create_dir(base.join("pkg")).unwrap();
    fs::write(base.join("pkg/Util.java"), "/* util */class Util {}").unwrap();
    fs::create_dir(base.join(".git")).unwrap();
    fs::write(base.join(".git/Hidden.java"), "// hidden").unwrap();

    let stats = mirror(base, &ScanConfig::default(), None).unwrap();
    assert_eq!(
        stats,
        MirrorStats {
            directories: 2,
            files: 2,
            invalid: 0
        }
    );

    let mirrored = base.join(MIRROR_DIR);
    assert_eq!(
        fs::read_to_string(mirrored.join("Main.java")).unwrap(),
        "class Main {} "
    );
    assert_eq!(
        fs::read_to_string(mirrored.join("pkg/Util.java")).unwrap(),
        "class Util {}"
    );
    assert!(!mirrored.join("notes.txt").exists());
    assert!(!mirrored.join(".git").exists());
}

#[test]
fn mirror_replaces_previous_copy() {
    let root = tempfile::tempdir().unwrap();
    let base = root.path();
    fs::create_dir(base.join(MIRROR_DIR)).unwrap();
    fs::write(base.join(MIRROR_DIR).join("Stale.java"), "stale").unwrap();
    fs::write(base.join("Fresh.java"), "int x; /* open").unwrap();

    let mut progress = Vec::new();
    let sink: &mut dyn Write = &mut progress;
    let stats = mirror(base, &ScanConfig::default(), Some(sink)).unwrap();

    assert_eq!(stats.files, 1);
    assert_eq!(stats.invalid, 1);
    assert!(!base.join(MIRROR_DIR).join("Stale.java").exists());
    assert_eq!(
        fs::read_to_string(base.join(MIRROR_DIR).join("Fresh.java")).unwrap(),
        "int x; "
    );
    let progress = String::from_utf8(progress).unwrap();
    assert!(progress.contains("Making a comment-stripped copy in"));
    assert!(progress.ends_with(" Fresh.java\n"));
}

#[test]
fn mirror_requires_a_directory() {
    let root = tempfile::tempdir().unwrap();
    let file = root.path().join("A.java");
    fs::write(&file, "").unwrap();
    let err = mirror(&file, &ScanConfig::default(), None).unwrap_err();
    assert!(matches!(err, CliError::NotADirectory(_)));
}
