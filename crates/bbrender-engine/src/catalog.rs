//! Static catalog of the tags an editor toolbar and completion list offer.
//!
//! Pure data. The renderer does not consult it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Format,
    Media,
    Layout,
    Special,
    Osu,
}

impl TagCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TagCategory::Format => "format",
            TagCategory::Media => "media",
            TagCategory::Layout => "layout",
            TagCategory::Special => "special",
            TagCategory::Osu => "osu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    /// Toolbar button text.
    pub label: &'static str,
    /// Icon class names.
    pub icon: &'static str,
    pub category: Option<TagCategory>,
    pub shortcut: Option<&'static str>,
    /// Opening tag as inserted, possibly with an example parameter
    /// (`url=https://example.com`).
    pub tag: &'static str,
    /// Text inserted between the opening and closing tag.
    pub placeholder: &'static str,
    pub has_closing_tag: bool,
    pub documentation: &'static str,
    pub detail: &'static str,
    pub hover_info: &'static str,
    /// Completion ranking, lower first.
    pub sort_order: u8,
}

impl TagEntry {
    /// The tag name without its example parameter.
    pub fn tag_name(&self) -> &'static str {
        match self.tag.split_once('=') {
            Some((name, _)) => name,
            None => self.tag,
        }
    }

    /// Text to insert for this tag.
    pub fn snippet(&self) -> String {
        if self.has_closing_tag {
            format!("[{}]{}[/{}]", self.tag, self.placeholder, self.tag_name())
        } else {
            format!("[{}]", self.tag)
        }
    }
}

/// Look up a catalog entry by tag name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static TagEntry> {
    tags()
        .iter()
        .find(|entry| entry.tag_name().eq_ignore_ascii_case(name))
}

/// Every supported tag, in toolbar order.
pub fn tags() -> &'static [TagEntry] {
    &TAGS
}

macro_rules! entry {
    (
        $label:literal, $tag:literal, $placeholder:literal, $icon:literal,
        $category:ident, $shortcut:expr, $sort:literal,
        doc: $doc:literal, detail: $detail:literal, hover: $hover:literal $(,)?
    ) => {
        TagEntry {
            label: $label,
            icon: $icon,
            category: Some(TagCategory::$category),
            shortcut: $shortcut,
            tag: $tag,
            placeholder: $placeholder,
            has_closing_tag: true,
            documentation: $doc,
            detail: $detail,
            hover_info: $hover,
            sort_order: $sort,
        }
    };
}

static TAGS: [TagEntry; 23] = [
    entry!("Bold", "b", "text", "fas fa-bold", Format, Some("Ctrl+B"), 0,
        doc: "**Bold** - renders text in bold",
        detail: "BBCode bold tag",
        hover: "**Bold tag** - renders text in bold\n\nUsage: `[b]text[/b]`"),
    entry!("Italic", "i", "text", "fas fa-italic", Format, Some("Ctrl+I"), 0,
        doc: "**Italic** - renders text in italics",
        detail: "BBCode italic tag",
        hover: "**Italic tag** - renders text in italics\n\nUsage: `[i]text[/i]`"),
    entry!("Underline", "u", "text", "fas fa-underline", Format, Some("Ctrl+U"), 0,
        doc: "**Underline** - underlines text",
        detail: "BBCode underline tag",
        hover: "**Underline tag** - underlines text\n\nUsage: `[u]text[/u]`"),
    entry!("Strikethrough", "s", "text", "fas fa-strikethrough", Format, None, 0,
        doc: "**Strikethrough** - strikes text through",
        detail: "BBCode strikethrough tag",
        hover: "**Strikethrough tag** - strikes text through\n\nUsage: `[s]text[/s]`"),
    entry!("Color", "color=#ff0000", "text", "fas fa-palette", Format, None, 3,
        doc: "**Text color** - sets the text color\n\nExample: `[color=#ff0000]red text[/color]`",
        detail: "BBCode color tag",
        hover: "**Color tag** - sets the text color\n\nUsage: `[color=#ff0000]text[/color]`"),
    entry!("Size", "size=100", "text", "fas fa-text-height", Format, None, 3,
        doc: "**Text size** - sets the text size as a percentage\n\nExample: `[size=150]large text[/size]`",
        detail: "BBCode size tag",
        hover: "**Size tag** - sets the text size\n\nUsage: `[size=100]text[/size]`\n\nOnly 50, 85, 100 and 150 are supported. 100 is normal size, 150 is 1.5x"),
    entry!("Link", "url=https://example.com", "link text", "fas fa-link", Media, Some("Ctrl+K"), 1,
        doc: "**Hyperlink** - creates a clickable link\n\nExample: `[url=https://osu.ppy.sh]visit osu![/url]`",
        detail: "BBCode link tag",
        hover: "**Link tag** - creates a hyperlink\n\nUsage: `[url=address]text[/url]`"),
    entry!("Image", "img", "https://example.com/image.jpg", "fas fa-image", Media, None, 1,
        doc: "**Image** - inserts an image\n\nExample: `[img]https://example.com/logo.png[/img]`",
        detail: "BBCode image tag",
        hover: "**Image tag** - inserts an image\n\nUsage: `[img]image address[/img]`"),
    entry!("Centre", "centre", "centered text", "fas fa-align-center", Layout, None, 5,
        doc: "**Centre** - centers text",
        detail: "BBCode centre tag",
        hover: "**Centre tag** - centers text\n\nUsage: `[centre]text[/centre]`"),
    entry!("Code block", "code", "\n// code\n", "fas fa-code", Special, None, 2,
        doc: "**Code block** - shows formatted code\n\nFor displaying source code",
        detail: "BBCode code block tag",
        hover: "**Code block tag** - shows a code block\n\nUsage: `[code]code[/code]`"),
    entry!("Inline code", "c", "code", "fas fa-terminal", Special, None, 2,
        doc: "**Inline code** - shows code inline\n\nFor displaying source code",
        detail: "BBCode inline code tag",
        hover: "**Inline code tag** - shows code inline\n\nUsage: `[c]code[/c]`"),
    entry!("Quote", "quote", "quoted text", "fas fa-quote-right", Special, None, 2,
        doc: "**Quote** - quotes someone\n\nCommonly used when replying\n\nAlternative: `[quote=\"author\"]text[/quote]`",
        detail: "BBCode quote tag",
        hover: "**Quote tag** - shows quoted text\n\nUsage: `[quote]quoted text[/quote]`\nor: `[quote=\"author\"]quoted text[/quote]`"),
    entry!("List", "list", "[*]item 1\n[*]item 2\n[*]item 3", "fas fa-list", Special, None, 4,
        doc: "**List** - creates a list\n\nUse `[*]` for each item\n\n- `[list]` - unordered list (bullets)\n- `[list=TYPE]` - ordered list (numbers)",
        detail: "BBCode list tag",
        hover: "**List tag** - creates a list\n\nUnordered: `[list][*]item 1[*]item 2[/list]`\n\nOrdered (TYPE can be anything): `[list=TYPE][*]item 1[*]item 2[/list]`"),
    entry!("Spoiler", "spoiler", "hidden text", "fas fa-eye-slash", Special, None, 4,
        doc: "**Spoiler** - text that is revealed on click\n\nCommonly used for spoiler warnings",
        detail: "BBCode spoiler tag",
        hover: "**Spoiler tag** - hides sensitive text\n\nUsage: `[spoiler]hidden text[/spoiler]`"),
    entry!("Heading", "heading", "heading text", "fas fa-heading", Osu, None, 6,
        doc: "**Heading** - osu! forum heading style\n\nCreates a prominent section heading",
        detail: "osu! heading tag",
        hover: "**Heading tag** - osu! forum heading style\n\nUsage: `[heading]title[/heading]`"),
    entry!("Notice", "notice", "notice text", "fas fa-exclamation-triangle", Osu, None, 6,
        doc: "**Notice** - osu! forum notice box\n\nShows an important note or warning",
        detail: "osu! notice tag",
        hover: "**Notice tag** - osu! forum notice box\n\nUsage: `[notice]text[/notice]`"),
    entry!("Box", "box=Click to expand", "collapsed content", "fas fa-box", Osu, None, 6,
        doc: "**Box** - osu! forum collapsible box\n\nCreates a region that can be expanded and collapsed\n\nExample: `[box=Click to expand]content[/box]`",
        detail: "osu! box tag",
        hover: "**Box tag** - osu! forum collapsible box\n\nUsage: `[box=title]content[/box]`"),
    entry!("User", "profile=123456", "username", "fas fa-user", Osu, None, 6,
        doc: "**User link** - link to an osu! user profile\n\nExample: `[profile=2]peppy[/profile]`",
        detail: "osu! profile tag",
        hover: "**Profile tag** - link to an osu! user profile\n\nUsage: `[profile=user id]username[/profile]`"),
    entry!("Spoiler box", "spoilerbox", "spoiler content", "fas fa-search", Special, None, 6,
        doc: "**Spoiler box** - osu! forum spoiler box\n\nA collapsible box whose title is always SPOILER\n\nExample: `[spoilerbox]content[/spoilerbox]`",
        detail: "osu! spoiler box tag",
        hover: "**Spoiler box tag** - osu! forum spoiler box\n\nUsage: `[spoilerbox]content[/spoilerbox]`\n\nThe title is always SPOILER"),
    entry!("Email", "email=test@example.com", "name", "fas fa-envelope", Media, None, 6,
        doc: "**Email** - mailto link\n\nExample: `[email=test@example.com]your name[/email]`",
        detail: "osu! email tag",
        hover: "**Email tag** - mailto link\n\nUsage: `[email=address]text[/email]`"),
    entry!("YouTube", "youtube", "", "fab fa-youtube", Media, None, 6,
        doc: "**YouTube** - embeds a YouTube video\n\nExample: `[youtube]Ef6zwIR44Ww[/youtube]`",
        detail: "osu! YouTube tag",
        hover: "**YouTube tag** - embeds a YouTube video\n\nUsage: `[youtube]video id[/youtube]`"),
    entry!("Audio", "audio", "", "fas fa-music", Media, None, 6,
        doc: "**Audio** - embeds a playable audio file\n\nExample: `[audio]https://example.com/audiofile[/audio]`",
        detail: "osu! audio tag",
        hover: "**Audio tag** - embeds audio\n\nUsage: `[audio]audio URL (must be reachable from osu!)[/audio]`"),
    entry!("Imagemap", "imagemap", "", "fas fa-map-marked-alt", Media, None, 6,
        doc: "**Imagemap** - image with clickable regions\n\nExample: `[imagemap]https://example.com/example.jpg\n\n45 16 25 7 https://osu.ppy.sh/users/2\n\n70 8 30 7 https://osu.ppy.sh/users/3[/imagemap]`",
        detail: "osu! imagemap tag",
        hover: "**Imagemap tag** - image with clickable regions\n\nUsage:\n\n[imagemap]\n\nimage URL\n\nX Y WIDTH HEIGHT link\n\n[/imagemap]"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn catalog_order_starts_with_formatting() {
        let names: Vec<_> = tags().iter().take(4).map(TagEntry::tag_name).collect();
        assert_eq!(names, vec!["b", "i", "u", "s"]);
        assert_eq!(tags().len(), 23);
    }

    #[rstest]
    #[case("b", "[b]text[/b]")]
    #[case("color", "[color=#ff0000]text[/color]")]
    #[case("url", "[url=https://example.com]link text[/url]")]
    #[case("youtube", "[youtube][/youtube]")]
    fn snippets(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(find(name).map(TagEntry::snippet).as_deref(), Some(expected));
    }

    #[test]
    fn shortcuts_are_unique() {
        let mut shortcuts: Vec<_> = tags().iter().filter_map(|t| t.shortcut).collect();
        let total = shortcuts.len();
        shortcuts.sort_unstable();
        shortcuts.dedup();
        assert_eq!(shortcuts.len(), total);
        assert_eq!(total, 4);
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("SPOILERBOX").map(|t| t.label), Some("Spoiler box"));
        assert!(find("table").is_none());
    }

    #[test]
    fn tag_names_are_unique() {
        let mut names: Vec<_> = tags().iter().map(TagEntry::tag_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tags().len());
    }
}
