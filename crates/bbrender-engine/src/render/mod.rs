//! # BBCode Rendering
//!
//! Turns bracket markup into presentational HTML through a fixed sequence of
//! rewrite stages. Each stage takes the previous stage's buffer and returns a
//! new one:
//!
//! 1. Lift `[code]` regions out behind placeholders ([`guard`])
//! 2. Normalize line breaks to `<br>`
//! 3. Inline formatting (`b`, `i`, `u`, `s`)
//! 4. `color` and `size` spans
//! 5. Inline spoiler
//! 6. Named boxes ([`boxes`])
//! 7. Spoiler boxes
//! 8. Quotes
//! 9. Inline code
//! 10. Centering
//! 11. Links, media and profile cards
//! 12. Lists ([`lists`])
//! 13. Email links, headings and notices
//! 14. Drop `<br>` right after block closers
//! 15. Auto-link bare URLs ([`autolink`])
//! 16. Restore code regions, escaped
//!
//! Malformed markup never fails a render; whatever a stage cannot match is
//! left in the output as literal text.

pub mod autolink;
pub mod boxes;
pub mod guard;
pub mod host;
pub mod lists;
pub mod markup;
pub mod options;
pub mod rules;
pub mod state;

use std::sync::OnceLock;

pub use host::{ElementHost, HOVER_CARD_PREFIX, NoopHost};
pub use options::{CodeBlockMatching, RenderOptions};
pub use state::{RenderContext, WidgetStateMap, widget_id};

use boxes::BoxKind;
use guard::ProtectedBlocks;
use rules::{Rule, apply_all};

/// A compiled render pipeline for one set of [`RenderOptions`].
///
/// Holds no per-render state, so one transformer can serve any number of
/// documents. Each document's widget flags live in its own [`WidgetStateMap`].
pub struct Transformer {
    options: RenderOptions,
    size: Option<Rule>,
}

impl Transformer {
    pub fn new(options: RenderOptions) -> Self {
        let size = rules::size_rule(&options.allowed_sizes);
        Self { options, size }
    }

    /// Render `source` to HTML.
    ///
    /// Reads and updates `widgets`: flags of widgets in this document are kept
    /// (new ones get the default), flags of widgets no longer present are
    /// dropped. `host` is asked once to remove hover cards left by the
    /// previous render.
    pub fn transform(
        &self,
        source: &str,
        widgets: &mut WidgetStateMap,
        host: &mut dyn ElementHost,
    ) -> String {
        host.remove_elements_with_prefix(HOVER_CARD_PREFIX);

        let mut ctx = RenderContext::new(&self.options, widgets);
        let (text, protected) = ProtectedBlocks::protect(source, self.options.code_blocks);

        let text = apply_all(rules::line_breaks(), text, &mut ctx);
        let text = apply_all(rules::formatting(), text, &mut ctx);
        let mut text = apply_all(rules::color(), text, &mut ctx);
        if let Some(size) = &self.size {
            text = size.apply(&text, &mut ctx);
        }
        let text = apply_all(rules::specials(), text, &mut ctx);

        let text = boxes::resolve(&text, BoxKind::Named, &mut ctx);
        let text = boxes::resolve(&text, BoxKind::Spoiler, &mut ctx);

        let text = apply_all(rules::quotes(), text, &mut ctx);
        let text = apply_all(rules::inline_code(), text, &mut ctx);
        let text = apply_all(rules::layout(), text, &mut ctx);
        let text = apply_all(rules::links_and_media(), text, &mut ctx);
        let text = lists::resolve(text, &mut ctx);
        let text = apply_all(rules::trailing(), text, &mut ctx);
        let text = apply_all(rules::collapse_breaks(), text, &mut ctx);
        let text = autolink::autolink(&text);

        let html = protected.restore(text);
        ctx.finish();
        html
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Render with default options.
pub fn transform(source: &str, widgets: &mut WidgetStateMap, host: &mut dyn ElementHost) -> String {
    static DEFAULT: OnceLock<Transformer> = OnceLock::new();
    DEFAULT
        .get_or_init(Transformer::default)
        .transform(source, widgets, host)
}
