//! The `mirror` command: a comment-stripped copy of a source tree.
//!
//! Every `.java` file under the root is scanned and its stripped text written
//! to the same relative path under `<root>/.nocomments`. Directories whose
//! names start with `.` are skipped, which also keeps the mirror out of
//! itself. An existing mirror is removed first.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use jfrag_lexer::{scan_with, ScanConfig};
use tracing::debug;

use super::read_file;
use crate::CliError;

/// Name of the mirror directory created inside the root.
pub const MIRROR_DIR: &str = ".nocomments";

/// What a mirror run produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MirrorStats {
    pub directories: usize,
    pub files: usize,
    /// Files whose scan reported a problem (written anyway).
    pub invalid: usize,
}

pub fn mirror(
    root: &Path,
    config: &ScanConfig,
    mut progress: Option<&mut dyn Write>,
) -> Result<MirrorStats, CliError> {
    if !root.is_dir() {
        return Err(CliError::NotADirectory(root.to_path_buf()));
    }

    let target = root.join(MIRROR_DIR);
    if target.exists() {
        fs::remove_dir_all(&target).map_err(|e| CliError::write(&target, e))?;
    }

    let mut stats = MirrorStats::default();
    mirror_dir(root, &target, config, &mut progress, &mut stats)?;
    debug!(
        directories = stats.directories,
        files = stats.files,
        invalid = stats.invalid,
        "mirror complete"
    );
    Ok(stats)
}

fn mirror_dir(
    source: &Path,
    target: &Path,
    config: &ScanConfig,
    progress: &mut Option<&mut dyn Write>,
    stats: &mut MirrorStats,
) -> Result<(), CliError> {
    fs::create_dir_all(target).map_err(|e| CliError::write(target, e))?;
    stats.directories += 1;

    let (dirs, files) = list_dir(source)?;

    if let Some(out) = progress.as_deref_mut() {
        write!(out, "Making a comment-stripped copy in {} of:", target.display())?;
    }
    for file in files.iter().filter(|f| f.extension().is_some_and(|e| e == "java")) {
        let Some(name) = file.file_name() else {
            continue;
        };
        let result = scan_with(&read_file(file)?, config);
        if !result.is_valid() {
            debug!(file = %file.display(), errmsg = result.errmsg(), "scan reported a problem");
            stats.invalid += 1;
        }
        let copy = target.join(name);
        fs::write(&copy, result.text_nocomments()).map_err(|e| CliError::write(&copy, e))?;
        stats.files += 1;

        if let Some(out) = progress.as_deref_mut() {
            write!(out, " {}", name.to_string_lossy())?;
        }
    }
    if let Some(out) = progress.as_deref_mut() {
        writeln!(out)?;
    }

    for dir in dirs {
        let Some(name) = dir.file_name() else {
            continue;
        };
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        mirror_dir(&dir, &target.join(name), config, progress, stats)?;
    }
    Ok(())
}

/// Directory entries split into subdirectories and files, each sorted.
fn list_dir(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>), CliError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| CliError::read(dir, e))? {
        let entry = entry.map_err(|e| CliError::read(dir, e))?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths.into_iter().partition(|p| p.is_dir()))
}
