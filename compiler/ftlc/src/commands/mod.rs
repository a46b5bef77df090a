//! Command handlers for the `ftl` CLI.
//!
//! Each submodule implements one command. Handlers render to a `String`
//! so tests can inspect output; the `*_file` / `run_*` entry points print
//! it. Shared utilities like [`read_file`] and [`discover_templates`] live
//! here in the module root.

use crate::CliError;
use ftl_highlight::is_template_path;
use std::fs;
use std::path::{Path, PathBuf};

mod check;
mod highlight;
mod lex;

pub use check::{check_paths, check_source, run_check, CheckReport, FileReport, Violation};
pub use highlight::{highlight_file, render_highlights};
pub use lex::{lex_file, render_tokens};

/// Read a template as UTF-8.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Expand `paths` into template files.
///
/// Files are taken as given, whatever their extension. Directories are
/// searched recursively for `.ftl` files, skipping hidden entries. The
/// result is sorted and free of duplicates.
pub fn discover_templates(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            discover_recursive(path, &mut files);
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files.dedup();
    tracing::debug!(count = files.len(), "discovered templates");
    files
}

fn discover_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "cannot list directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // Skip hidden files and directories
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'))
        {
            continue;
        }

        if path.is_dir() {
            discover_recursive(&path, files);
        } else if is_template_path(&path) {
            files.push(path);
        }
    }
}

/// Escape a lexeme for one-line display.
fn escape(text: &str) -> String {
    text.escape_debug().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
