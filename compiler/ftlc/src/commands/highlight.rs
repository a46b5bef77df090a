//! `ftl highlight`: print the highlight spans of a template.

use super::{escape, read_file};
use crate::{CliError, CliOptions};
use ftl_highlight::highlight_range;
use std::fmt::Write;
use std::path::Path;

pub fn highlight_file(path: &Path, options: &CliOptions) -> Result<(), CliError> {
    let content = read_file(path)?;
    print!("{}", render_highlights(&content, options.initial_state));
    Ok(())
}

/// One line per span: attribute key, byte span, escaped text.
pub fn render_highlights(source: &str, initial_state: u32) -> String {
    let mut out = String::new();
    for span in highlight_range(source, 0, u32::MAX, initial_state) {
        let text = source
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default();
        let range = format!("{}..{}", span.start, span.end);
        let _ = writeln!(
            out,
            "{:<26} {:<12} \"{}\"",
            span.category.attribute_key(),
            range,
            escape(text),
        );
    }
    out
}
