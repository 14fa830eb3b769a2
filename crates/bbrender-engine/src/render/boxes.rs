//! # Box Resolution
//!
//! Resolves the nestable collapsible constructs:
//!
//! - `[box=Title]...[/box]`: named box
//! - `[spoilerbox]...[/spoilerbox]`: box with the fixed title `SPOILER`
//!
//! ## Algorithm
//!
//! The buffer is scanned once into tag tokens (see [`bbrender_syntax::tags`]).
//! Opening tags are pushed on a stack and each closing tag pops the innermost
//! open box, which pairs every box with its own close no matter how deep the
//! nesting goes. Whatever is left on the stack afterwards never closed.
//!
//! The leftmost unclosed opening tag is a hard stop: boxes before it are
//! rendered, everything from it onward stays literal. A document with a
//! dangling `[box=...]` therefore never gets a guessed boundary.
//!
//! Rendering walks the tokens again with a stack of output buffers, so inner
//! boxes are fully rendered before the box around them is assembled and no
//! recursion depth limit applies.

use std::ops::Range;

use bbrender_syntax::{TagToken, scan};

use super::markup::{trim_line_breaks, widget};
use super::state::{RenderContext, widget_id};

/// Title shown on every spoiler box.
pub const SPOILER_TITLE: &str = "SPOILER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    Named,
    Spoiler,
}

impl BoxKind {
    pub const fn tag(self) -> &'static str {
        match self {
            BoxKind::Named => "box",
            BoxKind::Spoiler => "spoilerbox",
        }
    }

    /// Named boxes need a `=title`; spoiler boxes must not have one.
    fn opens(self, token: &TagToken<'_>) -> bool {
        token.is_open(self.tag())
            && match self {
                BoxKind::Named => token.param().is_some(),
                BoxKind::Spoiler => token.param().is_none(),
            }
    }
}

/// One box being assembled while its body is rendered.
struct Frame {
    title: String,
    id: String,
    expanded: bool,
    body: String,
}

/// Resolve every well-formed box of `kind` in `text`.
pub fn resolve(text: &str, kind: BoxKind, ctx: &mut RenderContext<'_>) -> String {
    let tokens = scan(text);
    let Some(pairs) = pair_up(&tokens, kind) else {
        return text.to_string();
    };

    let stop = pairs.unclosed.unwrap_or(tokens.len());
    if let Some(index) = pairs.unclosed {
        log::debug!(
            "unclosed [{}] at byte {}; leaving the rest of the document unresolved",
            kind.tag(),
            tokens[index].span().start
        );
    }

    let mut frames: Vec<Frame> = Vec::new();
    let mut out = String::with_capacity(text.len());

    for (index, token) in tokens.iter().enumerate() {
        if index >= stop {
            push_span(&mut frames, &mut out, text, token.span());
            continue;
        }

        if pairs.is_open[index] {
            frames.push(open_frame(token, kind, ctx));
        } else if pairs.is_close[index] {
            // Every close below the stop point has its open on the frame stack.
            if let Some(frame) = frames.pop() {
                let html = widget(
                    &frame.title,
                    trim_line_breaks(&frame.body),
                    &frame.id,
                    frame.expanded,
                );
                match frames.last_mut() {
                    Some(parent) => parent.body.push_str(&html),
                    None => out.push_str(&html),
                }
            }
        } else {
            push_span(&mut frames, &mut out, text, token.span());
        }
    }

    out
}

fn push_span(frames: &mut [Frame], out: &mut String, text: &str, span: Range<usize>) {
    match frames.last_mut() {
        Some(frame) => frame.body.push_str(&text[span]),
        None => out.push_str(&text[span]),
    }
}

/// Allocates the widget id in document order of the opening tags, so
/// identifiers do not depend on nesting.
fn open_frame(token: &TagToken<'_>, kind: BoxKind, ctx: &mut RenderContext<'_>) -> Frame {
    let (title, id) = match kind {
        BoxKind::Named => {
            let title = token.param().unwrap_or_default();
            let occurrence = ctx.count_box_title(title);
            (title.to_string(), widget_id(kind.tag(), title, occurrence))
        }
        BoxKind::Spoiler => {
            let occurrence = ctx.next_spoilerbox();
            (
                SPOILER_TITLE.to_string(),
                widget_id(kind.tag(), SPOILER_TITLE, occurrence),
            )
        }
    };
    let expanded = ctx.widget_expanded(&id);
    Frame {
        title,
        id,
        expanded,
        body: String::new(),
    }
}

struct Pairs {
    is_open: Vec<bool>,
    is_close: Vec<bool>,
    /// Token index of the leftmost opening tag that never closed.
    unclosed: Option<usize>,
}

/// Match opening and closing tags. `None` when there is no box at all.
fn pair_up(tokens: &[TagToken<'_>], kind: BoxKind) -> Option<Pairs> {
    let mut is_open = vec![false; tokens.len()];
    let mut is_close = vec![false; tokens.len()];
    let mut stack: Vec<usize> = Vec::new();
    let mut any = false;

    for (index, token) in tokens.iter().enumerate() {
        if kind.opens(token) {
            any = true;
            stack.push(index);
        } else if token.is_close(kind.tag())
            && let Some(open) = stack.pop()
        {
            is_open[open] = true;
            is_close[index] = true;
        }
    }

    if !any {
        return None;
    }

    Some(Pairs {
        is_open,
        is_close,
        unclosed: stack.first().copied(),
    })
}
