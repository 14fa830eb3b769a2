use serde::{Deserialize, Serialize};

/// How `[code]` regions are delimited when they are lifted out of the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeBlockMatching {
    /// Each `[code]` ends at the nearest following `[/code]`.
    #[default]
    Nearest,
    /// The first `[code]` runs to the last `[/code]` in the document, swallowing
    /// everything in between. Kept for documents authored against renderers
    /// that behaved this way.
    Greedy,
}

/// Tunables for a [`Transformer`](super::Transformer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// `[size=N]` values that render; anything else stays literal.
    pub allowed_sizes: Vec<u16>,
    pub code_blocks: CodeBlockMatching,
    /// Prefix for `[profile=ID]` links; the user id is appended.
    pub profile_url: String,
    /// Flag given to widgets the first time they are seen.
    pub expand_widgets_by_default: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            allowed_sizes: vec![50, 85, 100, 150],
            code_blocks: CodeBlockMatching::default(),
            profile_url: "https://osu.ppy.sh/users/".to_string(),
            expand_widgets_by_default: false,
        }
    }
}
