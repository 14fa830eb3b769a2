//! # bbrender-syntax
//!
//! A lossless tokenizer for forum bracket markup (`[b]bold[/b]`,
//! `[box=Title]...[/box]`) built on [Logos], plus a tag scanner that groups
//! the token stream into opening tags, closing tags and plain text.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Tokens → Tag Scanner → TagTokens
//!               (Logos)          (tags::scan)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Every byte of the input lands in exactly one token. The lexer only knows
//! about the four characters that carry meaning in bracket markup (`[`, `[/`,
//! `]`, `=`); everything else is grouped into `TEXT` runs.
//!
//! ```text
//! "[b]x[/b]" → [LBRACKET, TEXT("b"), RBRACKET, TEXT("x"),
//!               LBRACKET_SLASH, TEXT("b"), RBRACKET]
//! ```
//!
//! ### 2. Tag Scanner ([`tags`] module)
//!
//! The scanner recognises `[name]`, `[name=param]` and `[/name]` shapes and
//! turns everything else (stray brackets, unterminated tags) back into text.
//! It does not pair tags up; pairing is the job of whoever consumes the
//! stream, because pairing rules differ per tag.
//!
//! ## Quick Start
//!
//! ```
//! use bbrender_syntax::tags::{scan, TagToken};
//!
//! let tokens = scan("[box=Intro]hi[/box]");
//! assert!(matches!(tokens[0], TagToken::Open { name: "box", param: Some("Intro"), .. }));
//! assert!(matches!(tokens[2], TagToken::Close { name: "box", .. }));
//! ```

pub mod lexer;
pub mod syntax_kind;
pub mod tags;

pub use syntax_kind::SyntaxKind;
pub use tags::{TagToken, scan};

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    /// Renders a scanned tag stream one token per line for snapshot comparison.
    fn format_tags(input: &str) -> String {
        scan(input)
            .iter()
            .map(|token| match token {
                TagToken::Open { name, param, span } => match param {
                    Some(param) => format!("OPEN {name}={param} @{span:?}"),
                    None => format!("OPEN {name} @{span:?}"),
                },
                TagToken::Close { name, span } => format!("CLOSE {name} @{span:?}"),
                TagToken::Text { span } => format!("TEXT {:?} @{span:?}", &input[span.clone()]),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn snapshot_nested_boxes() {
        assert_snapshot!(format_tags("[box=A][box=B]in[/box]out[/box]"), @r#"
        OPEN box=A @0..7
        OPEN box=B @7..14
        TEXT "in" @14..16
        CLOSE box @16..22
        TEXT "out" @22..25
        CLOSE box @25..31
        "#);
    }

    #[test]
    fn snapshot_stray_brackets() {
        assert_snapshot!(format_tags("a [ b ] [/x"), @r#"TEXT "a [ b ] [/x" @0..11"#);
    }
}
