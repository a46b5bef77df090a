//! Reserved words of the template language.
//!
//! A word is only reported as a keyword where the language reads one:
//! outside markup tags and comments, and not straight after a `TEXT`
//! token. The context check lives in the word scanner; this module only
//! answers "is this spelling reserved".

/// Every reserved word.
pub const KEYWORDS: [&str; 21] = [
    "if", "else", "elseif", "list", "assign", "include", "import", "macro", "function", "return",
    "switch", "case", "default", "ftl", "setting", "escape", "stop", "attempt", "recover", "items",
    "as",
];

/// Whether `word` is a reserved word. Case-sensitive.
///
/// Uses length-bucketing for fast rejection: words outside the 2-8 byte
/// range are rejected without any comparison.
#[inline]
pub fn is_keyword(word: &str) -> bool {
    match word.len() {
        2 => matches!(word, "as" | "if"),
        3 => word == "ftl",
        4 => matches!(word, "case" | "else" | "list" | "stop"),
        5 => matches!(word, "items" | "macro"),
        6 => matches!(
            word,
            "assign" | "elseif" | "escape" | "import" | "return" | "switch"
        ),
        7 => matches!(
            word,
            "attempt" | "default" | "include" | "recover" | "setting"
        ),
        8 => word == "function",
        _ => false,
    }
}
