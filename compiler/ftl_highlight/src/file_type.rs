//! Template file recognition.

use std::path::Path;

pub const LANGUAGE_NAME: &str = "FreeMarker";

/// Extension of template files, without the dot.
pub const TEMPLATE_EXTENSION: &str = "ftl";

/// Whether `path` names a template file. The extension match ignores case.
pub fn is_template_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TEMPLATE_EXTENSION))
}
