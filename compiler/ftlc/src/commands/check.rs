//! `ftl check`: verify tokenizer guarantees on real templates.
//!
//! For every template the token stream must tile the document, reproduce
//! it byte for byte, and be resumable: restarting a fresh session at each
//! line's checkpoint must yield the same tokens and the same checkpoint at
//! the next line.

use super::{discover_templates, read_file};
use crate::{CliError, CliOptions};
use ftl_lexer_core::{tokenize, BufferView, CheckpointTable, Session, Token};
use rayon::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// A broken guarantee in one template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Token `index` does not start where the previous one ended.
    Gap { index: usize, expected: u32, found: u32 },
    /// Token `index` is empty.
    Empty { index: usize, at: u32 },
    /// The tokens stop short of the end of the document.
    Incomplete { covered: u32, len: u32 },
    /// Token texts do not concatenate to the source.
    RoundTrip,
    /// Resuming at `offset` diverged from the continuous run.
    Resume { offset: u32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Gap {
                index,
                expected,
                found,
            } => write!(f, "token {index} starts at {found}, expected {expected}"),
            Violation::Empty { index, at } => write!(f, "token {index} at {at} is empty"),
            Violation::Incomplete { covered, len } => {
                write!(f, "tokens cover {covered} of {len} bytes")
            }
            Violation::RoundTrip => f.write_str("token texts do not reproduce the source"),
            Violation::Resume { offset } => write!(f, "resuming at {offset} diverges"),
        }
    }
}

/// Check outcome for one template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub tokens: usize,
    pub violations: Vec<Violation>,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check outcome for a run.
#[derive(Clone, Debug, Default)]
pub struct CheckReport {
    pub files: Vec<FileReport>,
    pub duration: Duration,
}

impl CheckReport {
    pub fn failed(&self) -> usize {
        self.files.iter().filter(|file| !file.passed()).count()
    }

    /// Human-readable report. Passing files are listed only when `verbose`.
    pub fn render(&self, verbose: bool) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for file in &self.files {
            if file.passed() {
                if verbose {
                    let _ = writeln!(out, "ok    {} ({} tokens)", file.path.display(), file.tokens);
                }
                continue;
            }
            let _ = writeln!(out, "FAIL  {}", file.path.display());
            for violation in &file.violations {
                let _ = writeln!(out, "      {violation}");
            }
        }
        let _ = writeln!(
            out,
            "{} template(s) checked, {} failed in {:.2?}",
            self.files.len(),
            self.failed(),
            self.duration
        );
        out
    }
}

/// Check every template under `paths`.
pub fn check_paths(paths: &[PathBuf], options: &CliOptions) -> Result<CheckReport, CliError> {
    let start = Instant::now();
    let files = discover_templates(paths);

    let files = if options.parallel {
        files
            .par_iter()
            .map(|path| check_file(path))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        files
            .iter()
            .map(|path| check_file(path))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(CheckReport {
        files,
        duration: start.elapsed(),
    })
}

/// Run `check` and print the report. Fails if any template fails.
pub fn run_check(paths: &[PathBuf], options: &CliOptions) -> Result<(), CliError> {
    let report = check_paths(paths, options)?;
    print!("{}", report.render(options.verbose));

    match report.failed() {
        0 => Ok(()),
        failed => Err(CliError::CheckFailed {
            failed,
            total: report.files.len(),
        }),
    }
}

fn check_file(path: &Path) -> Result<FileReport, CliError> {
    let source = read_file(path)?;
    let tokens = tokenize(&source);
    let violations = check_tokens(&source, &tokens);
    if !violations.is_empty() {
        tracing::warn!(path = %path.display(), violations = violations.len(), "template failed checks");
    }
    Ok(FileReport {
        path: path.to_path_buf(),
        tokens: tokens.len(),
        violations,
    })
}

/// Every guarantee violated by the tokens of `source`.
pub fn check_source(source: &str) -> Vec<Violation> {
    check_tokens(source, &tokenize(source))
}

fn check_tokens(source: &str, tokens: &[Token]) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_partition(source, tokens, &mut violations);

    let text: String = tokens.iter().map(|token| token.text(source)).collect();
    if text != source {
        violations.push(Violation::RoundTrip);
    }

    check_resume(source, tokens, &mut violations);
    violations
}

fn check_partition(source: &str, tokens: &[Token], violations: &mut Vec<Violation>) {
    let mut expected = 0;
    for (index, token) in tokens.iter().enumerate() {
        if token.start != expected {
            violations.push(Violation::Gap {
                index,
                expected,
                found: token.start,
            });
        }
        if token.is_empty() {
            violations.push(Violation::Empty {
                index,
                at: token.start,
            });
        }
        expected = token.end;
    }

    let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
    if expected != len {
        violations.push(Violation::Incomplete {
            covered: expected,
            len,
        });
    }
}

/// Resume at each line's checkpoint and compare up to the next line.
///
/// Matching every segment and the checkpoint at its end proves the whole
/// stream resumable from any of those points.
fn check_resume(source: &str, tokens: &[Token], violations: &mut Vec<Violation>) {
    let table = CheckpointTable::build(source);
    let points = table.points();

    for (index, point) in points.iter().enumerate() {
        let next = points.get(index + 1);
        let stop = next.map_or(u32::MAX, |next| next.offset);
        let first = tokens.partition_point(|token| token.start < point.offset);
        let mut expected = tokens[first..].iter();

        let mut session = Session::new(
            BufferView::new(source, point.offset, u32::MAX),
            point.checkpoint,
        );
        let mut diverged = false;
        while session.pos() < stop {
            let Some((after, token)) = session.advance() else {
                break;
            };
            if expected.next() != Some(&token) {
                diverged = true;
                break;
            }
            session = after;
        }

        if let Some(next) = next {
            diverged |= session.pos() != next.offset || session.checkpoint() != next.checkpoint;
        } else {
            diverged |= expected.next().is_some();
        }
        if diverged {
            violations.push(Violation::Resume {
                offset: point.offset,
            });
        }
    }
}
