//! Turns bare `http://` / `https://` URLs into anchors.
//!
//! Runs after every tag-driven stage, so it has to avoid URLs those stages
//! already placed: anything right after `"` or `=` is taken to be an
//! attribute value, and anything inside an existing `<a>` element is left
//! alone. Code blocks are still behind placeholders at this point.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use super::markup::anchor;

fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    // Placeholder delimiters are excluded so a URL never runs into a code block.
    URL_REGEX.get_or_init(|| {
        Regex::new(r#"(?i)https?://[^\s<>"\x{E000}\x{E001}]+"#).expect("Invalid URL regex")
    })
}

fn anchor_regex() -> &'static Regex {
    static ANCHOR_REGEX: OnceLock<Regex> = OnceLock::new();
    ANCHOR_REGEX.get_or_init(|| Regex::new(r"(?is)<a\s[^>]*>.*?</a>").expect("Invalid anchor regex"))
}

pub fn autolink(html: &str) -> String {
    let anchors: Vec<Range<usize>> = anchor_regex().find_iter(html).map(|m| m.range()).collect();
    let mut out = String::with_capacity(html.len());
    let mut last = 0;

    for url_match in url_regex().find_iter(html) {
        let (start, end) = (url_match.start(), url_match.end());

        let in_attribute = html[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c == '"' || c == '=');
        let in_anchor = anchors.iter().any(|a| a.start <= start && end <= a.end);
        if in_attribute || in_anchor {
            continue;
        }

        out.push_str(&html[last..start]);
        out.push_str(&anchor(url_match.as_str()));
        last = end;
    }

    out.push_str(&html[last..]);
    out
}
