//! List resolution: `[list=TYPE]`, `[list]` and `[*]` items.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::markup::trim_line_breaks;
use super::rules::{Action, Rule};
use super::state::RenderContext;

fn list_rules() -> &'static [Rule] {
    static TABLE: OnceLock<Vec<Rule>> = OnceLock::new();
    TABLE.get_or_init(|| {
        vec![
            Rule::new(
                "list-ordered",
                r"(?is)\[list=([^\]]+)\](.*?)\[/list\]",
                Action::Build(ordered),
            ),
            Rule::new(
                "list-unordered",
                r"(?is)\[list\](.*?)\[/list\]",
                Action::Build(unordered),
            ),
        ]
    })
}

/// Item markers and the list closers that bound an item's content.
fn item_boundary() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"(?i)\[\*\]|</[ou]l>").expect("Invalid list item regex"))
}

const ITEM_MARKER: &str = "[*]";

fn ordered(caps: &Captures<'_>, _ctx: &mut RenderContext<'_>) -> String {
    format!("<ol>{}</ol>", trim_line_breaks(&caps[2]))
}

fn unordered(caps: &Captures<'_>, _ctx: &mut RenderContext<'_>) -> String {
    format!(r#"<ol class="unordered">{}</ol>"#, trim_line_breaks(&caps[1]))
}

/// Resolve list blocks, then split their bodies into items.
pub fn resolve(text: String, ctx: &mut RenderContext<'_>) -> String {
    let text = super::rules::apply_all(list_rules(), text, ctx);
    resolve_items(&text)
}

/// Each `[*]` item runs up to the next item marker or list closer, whichever
/// comes first. The terminator itself is not consumed, so the next item (or
/// the closer) is still there for the following step. A marker with no
/// terminator after it stays literal.
fn resolve_items(text: &str) -> String {
    let bounds: Vec<_> = item_boundary().find_iter(text).collect();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for (i, marker) in bounds.iter().enumerate() {
        if marker.as_str() != ITEM_MARKER {
            continue;
        }
        let Some(end) = bounds.get(i + 1) else {
            break;
        };
        out.push_str(&text[last..marker.start()]);
        out.push_str("<li>");
        out.push_str(trim_line_breaks(&text[marker.end()..end.start()]));
        out.push_str("</li>");
        last = end.start();
    }

    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{options::RenderOptions, state::WidgetStateMap};
    use pretty_assertions::assert_eq;

    fn run(input: &str) -> String {
        let options = RenderOptions::default();
        let mut widgets = WidgetStateMap::new();
        let mut ctx = RenderContext::new(&options, &mut widgets);
        resolve(input.to_string(), &mut ctx)
    }

    #[test]
    fn unordered_items_stop_before_closer() {
        assert_eq!(
            run("[list][*]one[*]two[/list]"),
            r#"<ol class="unordered"><li>one</li><li>two</li></ol>"#
        );
    }

    #[test]
    fn ordered_list_accepts_any_type() {
        assert_eq!(run("[list=a][*]x[/list]"), "<ol><li>x</li></ol>");
        assert_eq!(run("[list=1][*]x[/list]"), "<ol><li>x</li></ol>");
    }

    #[test]
    fn item_breaks_are_trimmed() {
        assert_eq!(
            run("[list]<br>[*]one<br>[*]two<br>[/list]"),
            r#"<ol class="unordered"><li>one</li><li>two</li></ol>"#
        );
    }

    #[test]
    fn marker_outside_list_stays_literal() {
        assert_eq!(run("[*]loose"), "[*]loose");
    }

    #[test]
    fn unclosed_list_is_untouched() {
        assert_eq!(run("[list][*]a"), "[list][*]a");
    }

    #[test]
    fn two_lists_keep_their_items() {
        assert_eq!(
            run("[list][*]a[/list]x[list=1][*]b[/list]"),
            r#"<ol class="unordered"><li>a</li></ol>x<ol><li>b</li></ol>"#
        );
    }
}
