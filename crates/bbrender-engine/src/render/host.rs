//! The one capability the transform needs from whatever displays its output.

/// Identifier prefix of the hover-card elements emitted for `[profile]` links.
pub const HOVER_CARD_PREFIX: &str = "qtip-";

/// A rendering host that can drop elements generated by a previous render.
///
/// Called once at the start of every transform. Implementations must be
/// idempotent and must tolerate there being nothing to remove.
pub trait ElementHost {
    fn remove_elements_with_prefix(&mut self, prefix: &str);
}

/// Host for non-rendering callers (CLI, server-side conversion).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl ElementHost for NoopHost {
    fn remove_elements_with_prefix(&mut self, _prefix: &str) {}
}

impl<F: FnMut(&str)> ElementHost for F {
    fn remove_elements_with_prefix(&mut self, prefix: &str) {
        self(prefix)
    }
}
