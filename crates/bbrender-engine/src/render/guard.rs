//! Code-region guard: lifts `[code]` contents out of the buffer before any
//! other stage runs and puts them back, escaped, at the very end.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::markup::trim_line_breaks;
use super::options::CodeBlockMatching;

/// Placeholder delimiters. Private-use code points are never emitted by any
/// rewrite stage, so placeholders cannot collide with generated markup.
const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

fn placeholder(index: usize) -> String {
    format!("{OPEN}CODE{index}{CLOSE}")
}

fn code_pattern(matching: CodeBlockMatching) -> &'static Regex {
    static NEAREST: OnceLock<Regex> = OnceLock::new();
    static GREEDY: OnceLock<Regex> = OnceLock::new();
    match matching {
        CodeBlockMatching::Nearest => NEAREST.get_or_init(|| {
            Regex::new(r"(?is)\[code\](.*?)\[/code\]").expect("Invalid code block regex")
        }),
        CodeBlockMatching::Greedy => GREEDY.get_or_init(|| {
            Regex::new(r"(?is)\[code\](.*)\[/code\]").expect("Invalid code block regex")
        }),
    }
}

fn trailing_break() -> &'static Regex {
    static PRE_BREAK: OnceLock<Regex> = OnceLock::new();
    PRE_BREAK.get_or_init(|| Regex::new(r"</pre>\s*<br>").expect("Invalid pre break regex"))
}

/// Raw `[code]` bodies, addressed by the index embedded in their placeholder.
#[derive(Debug, Default)]
pub struct ProtectedBlocks {
    blocks: Vec<String>,
}

impl ProtectedBlocks {
    /// Replace every code region in `source` with a placeholder.
    pub fn protect(source: &str, matching: CodeBlockMatching) -> (String, Self) {
        let mut guard = Self::default();
        let cleaned: String;
        let source = if source.contains([OPEN, CLOSE]) {
            log::debug!("stripping placeholder delimiters from source text");
            cleaned = source.replace([OPEN, CLOSE], "");
            cleaned.as_str()
        } else {
            source
        };

        let text = code_pattern(matching)
            .replace_all(source, |caps: &Captures<'_>| {
                let index = guard.blocks.len();
                guard.blocks.push(caps[1].to_string());
                placeholder(index)
            })
            .into_owned();

        (text, guard)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Substitute each placeholder with its escaped `<pre>` block, then drop
    /// the line break that followed the original `[/code]`.
    pub fn restore(self, mut html: String) -> String {
        for (index, raw) in self.blocks.iter().enumerate() {
            let escaped = html_escape::encode_text(raw);
            let block = format!("<pre>{}</pre>", trim_line_breaks(&escaped));
            // A placeholder copied by a template (`[url]` body) appears more than once.
            html = html.replace(&placeholder(index), &block);
        }
        if self.blocks.is_empty() {
            return html;
        }
        trailing_break().replace_all(&html, "</pre>").into_owned()
    }
}
