//! The fixed single-pass rewrite table.
//!
//! Each rule matches an opening tag, a lazily-matched body and the closing
//! tag in one regex, so adjacent same-type tags never merge. Anything a rule
//! does not match (unclosed or malformed tags) is left in the buffer verbatim.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::markup::{self, BR, trim_line_breaks};
use super::state::RenderContext;

/// What a rule turns its match into.
pub enum Action {
    /// `regex` replacement template (`${1}` style group references).
    Template(&'static str),
    /// Computed replacement; may read options or bump render counters.
    Build(fn(&Captures<'_>, &mut RenderContext<'_>) -> String),
}

pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    action: Action,
}

impl Rule {
    pub fn new(name: &'static str, pattern: &str, action: Action) -> Self {
        let pattern = Regex::new(pattern).expect("Invalid rewrite rule regex");
        Self {
            name,
            pattern,
            action,
        }
    }

    pub fn apply(&self, text: &str, ctx: &mut RenderContext<'_>) -> String {
        match &self.action {
            Action::Template(template) => self.pattern.replace_all(text, *template).into_owned(),
            Action::Build(build) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| build(caps, ctx))
                .into_owned(),
        }
    }
}

/// Run every rule of a stage in order, each over the previous rule's output.
pub fn apply_all(rules: &[Rule], text: String, ctx: &mut RenderContext<'_>) -> String {
    rules.iter().fold(text, |text, rule| {
        log::trace!("applying rule {}", rule.name);
        rule.apply(&text, ctx)
    })
}

macro_rules! rule_table {
    ($(#[$meta:meta])* $name:ident => [$($rule:expr),* $(,)?]) => {
        $(#[$meta])*
        pub fn $name() -> &'static [Rule] {
            static TABLE: OnceLock<Vec<Rule>> = OnceLock::new();
            TABLE.get_or_init(|| vec![$($rule),*])
        }
    };
}

rule_table!(
    /// Newline normalization. A heading swallows the break that follows it.
    line_breaks => [
        Rule::new("crlf", r"\r\n", Action::Template("\n")),
        Rule::new("newline", r"\n", Action::Template(BR)),
        Rule::new("heading-break", r"(?i)\[/heading\]<br>", Action::Template("[/heading]")),
    ]
);

rule_table!(
    formatting => [
        Rule::new("bold", r"(?is)\[b\](.*?)\[/b\]", Action::Template("<strong>${1}</strong>")),
        Rule::new("italic", r"(?is)\[i\](.*?)\[/i\]", Action::Template("<em>${1}</em>")),
        Rule::new("underline", r"(?is)\[u\](.*?)\[/u\]", Action::Template("<u>${1}</u>")),
        Rule::new("strike", r"(?is)\[s\](.*?)\[/s\]", Action::Template("<s>${1}</s>")),
        Rule::new("strike-long", r"(?is)\[strike\](.*?)\[/strike\]", Action::Template("<s>${1}</s>")),
    ]
);

rule_table!(
    /// Color only; the size rule depends on options and lives on the transformer.
    color => [
        Rule::new(
            "color",
            r"(?is)\[color=(.*?)\](.*?)\[/color\]",
            Action::Template(r#"<span style="color:${1};">${2}</span>"#),
        ),
    ]
);

rule_table!(
    specials => [
        Rule::new(
            "spoiler",
            r"(?is)\[spoiler\](.*?)\[/spoiler\]",
            Action::Template(
                r#"<span class="spoiler" onclick="this.classList.toggle('revealed')">${1}</span>"#,
            ),
        ),
    ]
);

rule_table!(
    quotes => [
        Rule::new("quote", r"(?is)\[quote\](.*?)\[/quote\]", Action::Build(quote)),
        Rule::new("quote-author", r#"(?is)\[quote="(.*?)"\](.*?)\[/quote\]"#, Action::Build(attributed_quote)),
    ]
);

rule_table!(
    inline_code => [
        Rule::new("inline-code", r"(?is)\[c\](.*?)\[/c\]", Action::Build(inline_code_span)),
    ]
);

rule_table!(
    layout => [
        Rule::new("centre", r"(?is)\[centre\](.*?)\[/centre\]", Action::Template("<center>${1}</center>")),
    ]
);

rule_table!(
    links_and_media => [
        Rule::new(
            "url",
            r"(?is)\[url\](.*?)\[/url\]",
            Action::Template(r#"<a href="${1}" target="_blank" rel="noopener noreferrer">${1}</a>"#),
        ),
        Rule::new(
            "url-titled",
            r"(?is)\[url=(.*?)\](.*?)\[/url\]",
            Action::Template(r#"<a href="${1}" target="_blank" rel="noopener noreferrer">${2}</a>"#),
        ),
        Rule::new("profile", r"(?is)\[profile=(.*?)\](.*?)\[/profile\]", Action::Build(profile)),
        Rule::new(
            "image",
            r"(?is)\[img\](.*?)\[/img\]",
            Action::Template(r#"<img src="${1}" alt="Image" />"#),
        ),
        Rule::new(
            "image-sized",
            r"(?is)\[img=(.*?)\](.*?)\[/img\]",
            Action::Template(r#"<img src="${2}" alt="Image" style="max-width: ${1}px;" />"#),
        ),
        Rule::new(
            "youtube",
            r"(?is)\[youtube\](.*?)\[/youtube\]",
            Action::Template(
                r#"<iframe class="u-embed-wide u-embed-wide--bbcode" src="https://www.youtube.com/embed/${1}?rel=0" allowfullscreen></iframe>"#,
            ),
        ),
        Rule::new("audio", r"(?is)\[audio\](.*?)\[/audio\]", Action::Build(audio)),
    ]
);

rule_table!(
    trailing => [
        Rule::new(
            "email",
            r"(?is)\[email=(.*?)\](.*?)\[/email\]",
            Action::Template(r#"<a href="mailto:${1}">${2}</a>"#),
        ),
        Rule::new(
            "heading",
            r"(?is)\[heading\](.*?)\[/heading\]",
            Action::Template(r#"<h2 class="osu-heading">${1}</h2>"#),
        ),
        Rule::new("notice", r"(?is)\[notice\](.*?)\[/notice\]", Action::Build(notice)),
    ]
);

rule_table!(
    /// Block-level elements already end a line; a break right after one is noise.
    collapse_breaks => [
        Rule::new("div-break", r"</div>\s*<br>", Action::Template("</div>")),
        Rule::new("blockquote-break", r"</blockquote>\s*<br>", Action::Template("</blockquote>")),
    ]
);

/// `[size=N]` restricted to the configured values.
pub fn size_rule(allowed: &[u16]) -> Option<Rule> {
    if allowed.is_empty() {
        return None;
    }
    let alternation = allowed
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join("|");
    Some(Rule::new(
        "size",
        &format!(r"(?is)\[size=({alternation})\](.*?)\[/size\]"),
        Action::Template(r#"<span style="font-size:${1}%;">${2}</span>"#),
    ))
}

fn quote(caps: &Captures<'_>, _ctx: &mut RenderContext<'_>) -> String {
    format!("<blockquote>{}</blockquote>", trim_line_breaks(&caps[1]))
}

fn attributed_quote(caps: &Captures<'_>, _ctx: &mut RenderContext<'_>) -> String {
    format!(
        "<blockquote><h4>{} wrote:</h4>{}</blockquote>",
        &caps[1],
        trim_line_breaks(&caps[2])
    )
}

/// Multi-line bodies are left alone: they never went through code protection
/// and wrapping them would mangle the line-break markup inside.
fn inline_code_span(caps: &Captures<'_>, _ctx: &mut RenderContext<'_>) -> String {
    if caps[1].contains(BR) {
        return caps[0].to_string();
    }
    format!("<code>{}</code>", &caps[1])
}

fn profile(caps: &Captures<'_>, ctx: &mut RenderContext<'_>) -> String {
    let card = ctx.next_profile_card();
    markup::profile_link(&ctx.options.profile_url, &caps[1], &caps[2], card)
}

fn audio(caps: &Captures<'_>, _ctx: &mut RenderContext<'_>) -> String {
    markup::audio_player(&caps[1])
}

fn notice(caps: &Captures<'_>, _ctx: &mut RenderContext<'_>) -> String {
    format!(r#"<div class="well">{}</div>"#, trim_line_breaks(&caps[1]))
}
