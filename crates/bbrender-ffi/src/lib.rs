//! UniFFI bindings for bbrender editor front-ends
//!
//! Exposes a render session that keeps widget state between renders, and
//! the tag catalog that drives the editor toolbar. The front-end supplies
//! the document host that removes stale hover cards.

use bbrender_engine::{ElementHost, RenderOptions, Session, TagEntry, WidgetStateMap, catalog, io};
use relative_path::RelativePath;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("File not found: {reason}")]
    NotFound { reason: String },
    #[error("IO error: {reason}")]
    Io { reason: String },
}

impl From<io::IoError> for FfiError {
    fn from(error: io::IoError) -> Self {
        match error {
            io::IoError::NotFound(path) => FfiError::NotFound {
                reason: path.display().to_string(),
            },
            other => FfiError::Io {
                reason: other.to_string(),
            },
        }
    }
}

// ============ Document Host ============

/// Implemented by the front-end that displays rendered HTML.
#[uniffi::export(with_foreign)]
pub trait DocumentHost: Send + Sync {
    /// Remove every element whose id starts with `prefix`.
    fn remove_elements_with_prefix(&self, prefix: String);
}

/// Adapts an optional foreign host to the engine's host capability.
struct ForeignHost(Option<Arc<dyn DocumentHost>>);

impl ElementHost for ForeignHost {
    fn remove_elements_with_prefix(&mut self, prefix: &str) {
        if let Some(host) = &self.0 {
            host.remove_elements_with_prefix(prefix.to_string());
        }
    }
}

// ============ Render Session ============

/// A document being edited, with its widget state.
///
/// Calls are serialized by an internal lock.
#[derive(uniffi::Object)]
pub struct RenderSession {
    inner: Mutex<Session<ForeignHost>>,
}

impl RenderSession {
    fn from_host(host: ForeignHost) -> Self {
        Self {
            inner: Mutex::new(Session::with_host(RenderOptions::default(), host)),
        }
    }

    fn session(&self) -> std::sync::MutexGuard<'_, Session<ForeignHost>> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl RenderSession {
    /// Session for a front-end without generated elements to clean up.
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::from_host(ForeignHost(None))
    }

    #[uniffi::constructor]
    pub fn with_host(host: Arc<dyn DocumentHost>) -> Self {
        Self::from_host(ForeignHost(Some(host)))
    }

    /// Render `source`. Output is cached until the source, `generation` or
    /// a widget flag changes.
    pub fn render(&self, source: String, generation: u64) -> String {
        self.session().render(&source, generation)
    }

    /// Flip a widget's expanded flag and return the new value.
    pub fn toggle_widget(&self, id: String) -> bool {
        self.session().toggle_widget(&id)
    }

    pub fn set_widget_expanded(&self, id: String, expanded: bool) {
        self.session().set_widget_expanded(&id, expanded);
    }

    pub fn widget_states(&self) -> HashMap<String, bool> {
        self.session()
            .widgets()
            .iter()
            .map(|(id, expanded)| (id.to_string(), expanded))
            .collect()
    }

    /// Replace the widget flags, e.g. with states saved from an earlier session.
    pub fn restore_widget_states(&self, states: HashMap<String, bool>) {
        let mut widgets = WidgetStateMap::new();
        for (id, expanded) in &states {
            widgets.set_expanded(id, *expanded);
        }
        self.session().restore_widgets(widgets);
    }
}

impl Default for RenderSession {
    fn default() -> Self {
        Self::new()
    }
}

// ============ DTOs ============

/// One toolbar / completion entry.
#[derive(uniffi::Record)]
pub struct TagEntryDto {
    pub label: String,
    pub icon: String,
    /// "format", "media", "layout", "special" or "osu"
    pub category: Option<String>,
    pub shortcut: Option<String>,
    /// Opening tag as inserted, e.g. "url=https://example.com"
    pub tag: String,
    /// Tag name without the example parameter
    pub tag_name: String,
    /// Full insertion text
    pub snippet: String,
    pub placeholder: String,
    pub has_closing_tag: bool,
    pub documentation: String,
    pub detail: String,
    pub hover_info: String,
    pub sort_order: u8,
}

impl TagEntryDto {
    fn from_engine(entry: &TagEntry) -> Self {
        Self {
            label: entry.label.to_string(),
            icon: entry.icon.to_string(),
            category: entry.category.map(|c| c.as_str().to_string()),
            shortcut: entry.shortcut.map(str::to_string),
            tag: entry.tag.to_string(),
            tag_name: entry.tag_name().to_string(),
            snippet: entry.snippet(),
            placeholder: entry.placeholder.to_string(),
            has_closing_tag: entry.has_closing_tag,
            documentation: entry.documentation.to_string(),
            detail: entry.detail.to_string(),
            hover_info: entry.hover_info.to_string(),
            sort_order: entry.sort_order,
        }
    }
}

// ============ Standalone Functions ============

/// Every supported tag, in toolbar order.
#[uniffi::export]
pub fn tag_catalog() -> Vec<TagEntryDto> {
    catalog::tags().iter().map(TagEntryDto::from_engine).collect()
}

/// Read a BBCode source file below `root`.
#[uniffi::export]
pub fn read_source(root: String, relative_path: String) -> Result<String, FfiError> {
    io::read_file(RelativePath::new(&relative_path), Path::new(&root)).map_err(FfiError::from)
}
