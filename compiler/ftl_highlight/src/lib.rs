//! Syntax highlighting for FreeMarker templates.
//!
//! Maps token kinds from `ftl_lexer_core` to a small set of display
//! categories, each with a stable attribute key editors use to look up
//! colors, and turns a template into merged highlight spans.

mod category;
mod file_type;
mod spans;

pub use category::{category, HighlightCategory};
pub use file_type::{is_template_path, LANGUAGE_NAME, TEMPLATE_EXTENSION};
pub use spans::{highlight, highlight_range, HighlightSpan};

/// Sample template shown in color settings previews.
pub const DEMO_TEXT: &str = "<html>
  <body>
    <#directive param=\"value\">
    ${interpolation}
    <#-- commento -->
  </body>
</html>";
