//! Token classification tables

use phf::{phf_set, Set};

/// Reserved words tokenized as `Keyword` (ECMAScript reserved words plus the
/// strict mode future reserved words). `true`, `false` and `null` have their
/// own token kinds and are not listed.
pub static KEYWORDS: Set<&'static str> = phf_set! {
    "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "finally",
    "for", "function", "if", "import", "in", "instanceof", "new", "return",
    "super", "switch", "this", "throw", "try", "typeof", "var", "void",
    "while", "with",
    "implements", "interface", "let", "package", "private", "protected",
    "public", "static", "yield",
};

/// Keywords after which a `/` starts a regular expression literal
pub static REGEX_PRECEDING_KEYWORDS: Set<&'static str> = phf_set! {
    "case", "delete", "do", "else", "in", "instanceof", "new", "return",
    "throw", "typeof", "void", "yield",
};

/// Check if an identifier-like word is a reserved keyword
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}
