//! # Lexer - Tokenizing Bracket Markup
//!
//! First stage of tag scanning: breaking source text into tokens using the
//! [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte in the input appears in exactly one token:
//!
//! ```
//! use bbrender_syntax::lexer::lex;
//!
//! let input = "[color=#f00]red[/color] and [stray";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! Tokens are minimal and context-free. The lexer doesn't know whether `[`
//! starts a tag or is a literal bracket in prose; the tag scanner decides.

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// Separate from [`SyntaxKind`] because Logos needs to derive on it.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[/` starts a closing tag
    #[token("[/")]
    LBracketSlash,

    /// `[` starts an opening tag
    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("=")]
    Eq,

    /// Plain text - anything not matched by other rules, newlines included
    #[regex(r"[^\[\]=]+")]
    Text,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::LBracketSlash => SyntaxKind::LBRACKET_SLASH,
            TokenKind::LBracket => SyntaxKind::LBRACKET,
            TokenKind::RBracket => SyntaxKind::RBRACKET,
            TokenKind::Eq => SyntaxKind::EQ,
            TokenKind::Text => SyntaxKind::TEXT,
        }
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            // Unrecognised input is still text; nothing is dropped
            Err(()) => SyntaxKind::TEXT,
        };
        tokens.push((Token { kind, text }, span));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(kind: SyntaxKind, text: &str) -> Token<'_> {
        Token { kind, text }
    }

    #[test]
    fn lex_empty_input() {
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex("hello world"), vec![token(SyntaxKind::TEXT, "hello world")]);
    }

    #[test]
    fn lex_newlines_stay_in_text() {
        assert_eq!(lex("a\nb"), vec![token(SyntaxKind::TEXT, "a\nb")]);
    }

    #[test]
    fn lex_simple_tag_pair() {
        assert_eq!(
            lex("[b]x[/b]"),
            vec![
                token(SyntaxKind::LBRACKET, "["),
                token(SyntaxKind::TEXT, "b"),
                token(SyntaxKind::RBRACKET, "]"),
                token(SyntaxKind::TEXT, "x"),
                token(SyntaxKind::LBRACKET_SLASH, "[/"),
                token(SyntaxKind::TEXT, "b"),
                token(SyntaxKind::RBRACKET, "]"),
            ]
        );
    }

    #[test]
    fn lex_parameterised_tag() {
        assert_eq!(
            lex("[size=150]"),
            vec![
                token(SyntaxKind::LBRACKET, "["),
                token(SyntaxKind::TEXT, "size"),
                token(SyntaxKind::EQ, "="),
                token(SyntaxKind::TEXT, "150"),
                token(SyntaxKind::RBRACKET, "]"),
            ]
        );
    }

    #[test]
    fn lex_with_spans_covers_input() {
        let input = "x[url=a=b]y";
        let tokens = lex_with_spans(input);

        let mut expected_start = 0;
        for (tok, span) in &tokens {
            assert_eq!(span.start, expected_start);
            assert_eq!(&input[span.clone()], tok.text);
            expected_start = span.end;
        }
        assert_eq!(expected_start, input.len());
    }

    #[test]
    fn lex_multibyte_text() {
        let input = "[box=展开查看]内容[/box]";
        let reconstructed: String = lex(input).iter().map(|t| t.text).collect();
        assert_eq!(reconstructed, input);
    }
}
