//! HTML fragments emitted by the stateful and block-level rewrite stages.

/// The line-break marker newlines are normalized to.
pub const BR: &str = "<br>";

/// Strip runs of line-break markers (and raw newlines) from both ends.
pub fn trim_line_breaks(text: &str) -> &str {
    let mut s = text;
    loop {
        if let Some(rest) = s.strip_prefix(BR) {
            s = rest;
        } else if let Some(rest) = s.strip_prefix(['\n', '\r']) {
            s = rest;
        } else {
            break;
        }
    }
    loop {
        if let Some(rest) = s.strip_suffix(BR) {
            s = rest;
        } else if let Some(rest) = s.strip_suffix(['\n', '\r']) {
            s = rest;
        } else {
            break;
        }
    }
    s
}

/// A collapsible box. Only the expanded flag differs between the open and
/// closed renderings; title and body are identical.
pub fn widget(title: &str, body: &str, id: &str, expanded: bool) -> String {
    let (open_class, display) = if expanded {
        (" js-spoilerbox--open", "block")
    } else {
        ("", "none")
    };
    format!(
        r##"<div class="js-spoilerbox bbcode-spoilerbox{open_class}" id="{id}" data-widget-id="{id}" data-expanded="{expanded}"><a class="js-spoilerbox__link bbcode-spoilerbox__link" href="#" data-widget-toggle="{id}"><span class="bbcode-spoilerbox__link-icon"></span>{title}</a><div class="js-spoilerbox__body bbcode-spoilerbox__body" style="display: {display};">{body}</div></div>"##
    )
}

/// A user profile link plus the hidden hover-card element it is correlated with.
pub fn profile_link(base_url: &str, user_id: &str, username: &str, card: usize) -> String {
    format!(
        r#"<a class="js-usercard" href="{base_url}{user_id}" data-user-id="{user_id}" data-tooltip-id="qtip-{card}" target="_blank" rel="noopener noreferrer">{username}</a><span id="qtip-{card}" class="qtip qtip--user-card" data-user-id="{user_id}" hidden></span>"#
    )
}

pub fn audio_player(src: &str) -> String {
    format!(
        r#"<div class="audio-player"><audio controls preload="none" src="{src}"></audio></div>"#
    )
}

pub fn anchor(url: &str) -> String {
    format!(r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<br>x<br>", "x")]
    #[case("<br><br>x<br>y<br><br>", "x<br>y")]
    #[case("\n<br>\r\nx\n", "x")]
    #[case("x", "x")]
    #[case("<br><br>", "")]
    #[case("", "")]
    fn trims_boundary_breaks(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(trim_line_breaks(input), expected);
    }

    #[test]
    fn widget_differs_only_in_state() {
        let closed = widget("T", "body", "box-1", false);
        let open = widget("T", "body", "box-1", true);

        assert!(closed.contains(r#"data-expanded="false""#));
        assert!(closed.contains("display: none;"));
        assert!(open.contains(r#"data-expanded="true""#));
        assert!(open.contains("js-spoilerbox--open"));
        assert!(open.contains("display: block;"));
        assert!(open.ends_with(r#"">body</div></div>"#));
        assert!(closed.ends_with(r#"">body</div></div>"#));
    }

    #[test]
    fn profile_link_correlates_card() {
        let html = profile_link("https://osu.ppy.sh/users/", "2", "peppy", 3);
        assert!(html.contains(r#"href="https://osu.ppy.sh/users/2""#));
        assert!(html.contains(r#"data-tooltip-id="qtip-3""#));
        assert!(html.contains(r#"id="qtip-3""#));
        assert!(html.contains(">peppy</a>"));
    }
}
