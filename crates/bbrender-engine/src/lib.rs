//! # bbrender engine
//!
//! Converts the osu! forum dialect of BBCode into HTML.
//!
//! - [`render`]: the transform pipeline and widget state
//! - [`session`]: a document being edited, with cached output
//! - [`catalog`]: tag metadata for editor tooling
//! - [`io`]: reading sources and writing rendered files

pub mod catalog;
pub mod io;
pub mod render;
pub mod session;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use catalog::{TagCategory, TagEntry};
pub use io::*;
pub use render::{
    CodeBlockMatching, ElementHost, HOVER_CARD_PREFIX, NoopHost, RenderOptions, Transformer,
    WidgetStateMap, transform, widget_id,
};
pub use session::Session;
