//! # Tag Scanner
//!
//! Groups the lexer's token stream into [`TagToken`]s. A tag is one of:
//!
//! - `[name]`
//! - `[name=param]` where `param` runs to the first `]`
//! - `[/name]`
//!
//! Names are ASCII alphanumerics plus `*` and `-`. Anything that does not fit
//! one of these shapes (a stray `[`, `[ spaced ]`, an unterminated `[b`) is
//! folded into the surrounding text, so malformed markup degrades to literal
//! text rather than an error.

use std::ops::Range;

use crate::lexer::{Token, lex_with_spans};
use crate::syntax_kind::SyntaxKind;

/// A scanned piece of bracket markup with its byte span in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagToken<'a> {
    /// `[name]` or `[name=param]`
    Open {
        name: &'a str,
        param: Option<&'a str>,
        span: Range<usize>,
    },
    /// `[/name]`
    Close { name: &'a str, span: Range<usize> },
    /// Anything else. Adjacent text is always merged into one token.
    Text { span: Range<usize> },
}

impl<'a> TagToken<'a> {
    pub fn span(&self) -> Range<usize> {
        match self {
            TagToken::Open { span, .. } | TagToken::Close { span, .. } | TagToken::Text { span } => {
                span.clone()
            }
        }
    }

    /// True if this is an opening tag called `tag` (ASCII case-insensitive).
    pub fn is_open(&self, tag: &str) -> bool {
        matches!(self, TagToken::Open { name, .. } if name.eq_ignore_ascii_case(tag))
    }

    /// True if this is a closing tag called `tag` (ASCII case-insensitive).
    pub fn is_close(&self, tag: &str) -> bool {
        matches!(self, TagToken::Close { name, .. } if name.eq_ignore_ascii_case(tag))
    }

    /// The parameter of an opening tag, if it has one.
    pub fn param(&self) -> Option<&'a str> {
        match self {
            TagToken::Open { param, .. } => *param,
            _ => None,
        }
    }
}

/// Scan `input` into tags and text.
///
/// Concatenating the spans of the returned tokens reproduces `input`.
pub fn scan(input: &str) -> Vec<TagToken<'_>> {
    let tokens = lex_with_spans(input);
    let mut out: Vec<TagToken<'_>> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].0.kind.is_tag_start()
            && let Some((tag, next)) = try_tag(input, &tokens, i)
        {
            out.push(tag);
            i = next;
            continue;
        }

        push_text(&mut out, tokens[i].1.clone());
        i += 1;
    }

    out
}

fn push_text(out: &mut Vec<TagToken<'_>>, span: Range<usize>) {
    if let Some(TagToken::Text { span: last }) = out.last_mut()
        && last.end == span.start
    {
        last.end = span.end;
        return;
    }
    out.push(TagToken::Text { span });
}

/// Try to read a tag starting at token `start`. Returns the tag and the index
/// of the first token after it.
fn try_tag<'a>(
    input: &'a str,
    tokens: &[(Token<'a>, Range<usize>)],
    start: usize,
) -> Option<(TagToken<'a>, usize)> {
    let (open, open_span) = &tokens[start];
    let (name_tok, _) = tokens.get(start + 1)?;
    if name_tok.kind != SyntaxKind::TEXT || !is_tag_name(name_tok.text) {
        return None;
    }
    let name = name_tok.text;
    let (after_name, after_span) = tokens.get(start + 2)?;

    if open.kind == SyntaxKind::LBRACKET_SLASH {
        if after_name.kind != SyntaxKind::RBRACKET {
            return None;
        }
        let span = open_span.start..after_span.end;
        return Some((TagToken::Close { name, span }, start + 3));
    }

    match after_name.kind {
        SyntaxKind::RBRACKET => {
            let span = open_span.start..after_span.end;
            Some((
                TagToken::Open {
                    name,
                    param: None,
                    span,
                },
                start + 3,
            ))
        }
        SyntaxKind::EQ => {
            let param_start = after_span.end;
            let close = tokens[start + 3..]
                .iter()
                .position(|(tok, _)| tok.kind == SyntaxKind::RBRACKET)?
                + start
                + 3;
            let close_span = &tokens[close].1;
            let span = open_span.start..close_span.end;
            Some((
                TagToken::Open {
                    name,
                    param: Some(&input[param_start..close_span.start]),
                    span,
                },
                close + 1,
            ))
        }
        _ => None,
    }
}

fn is_tag_name(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'*' || b == b'-')
}
