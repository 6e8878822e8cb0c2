use core::fmt;

use crate::Error;

/// Indentation of one nesting level in generated code.
pub(crate) const INDENT: &str = "    ";

/// Formats an accessor name as a Rust identifier, using raw identifier syntax if needed.
pub(crate) struct Ident<'a>(pub &'a str);

impl fmt::Display for Ident<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if KEYWORDS_2024.binary_search(&self.0).is_ok() {
            f.write_str("r#")?;
        }
        f.write_str(self.0)
    }
}

/// Fails if `name` is a keyword that cannot be used even as a raw identifier.
pub(crate) fn check_not_reserved(name: &str) -> Result<(), Error> {
    if NOT_RAW_IDENTIFIERS.contains(&name) {
        Err(Error::ReservedName(name.into()))
    } else {
        Ok(())
    }
}

const NOT_RAW_IDENTIFIERS: &[&str] = &["crate", "self", "super", "Self"];

// Contains all keywords, strict or weak, in 2024 and any previous edition, sorted by byte value.
// https://doc.rust-lang.org/reference/keywords.html
pub(crate) const KEYWORDS_2024: &[&str] = &[
    "Self",
    "abstract",
    "as",
    "async",
    "await",
    "become",
    "box",
    "break",
    "const",
    "continue",
    "crate",
    "do",
    "dyn",
    "else",
    "enum",
    "extern",
    "false",
    "final",
    "fn",
    "for",
    "gen",
    "if",
    "impl",
    "in",
    "let",
    "loop",
    "macro",
    "macro_rules",
    "match",
    "mod",
    "move",
    "mut",
    "override",
    "priv",
    "pub",
    "raw",
    "ref",
    "return",
    "safe",
    "self",
    "static",
    "struct",
    "super",
    "trait",
    "true",
    "try",
    "type",
    "typeof",
    "union",
    "unsafe",
    "unsized",
    "use",
    "virtual",
    "where",
    "while",
    "yield",
];
