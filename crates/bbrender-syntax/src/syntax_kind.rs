//! SyntaxKind enum for the tokens of bracket markup.
//!
//! Every byte in the source appears in exactly one token of one of these kinds.

/// All token kinds produced by the lexer.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    /// `[` opening an opening tag
    LBRACKET,
    /// `[/` opening a closing tag
    LBRACKET_SLASH,
    /// `]` ending any tag
    RBRACKET,
    /// `=` separating a tag name from its parameter
    EQ,
    /// Anything else, grouped into runs
    TEXT,
}

impl SyntaxKind {
    /// Returns true for kinds that can start a tag.
    pub fn is_tag_start(self) -> bool {
        matches!(self, SyntaxKind::LBRACKET | SyntaxKind::LBRACKET_SLASH)
    }
}
