use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::options::RenderOptions;

/// Namespace for the name-based UUIDs behind widget identifiers.
const WIDGET_NAMESPACE: Uuid = Uuid::from_u128(0x0e9a_41c6_5b1f_4d2e_9f3a_7c58_d2b4_6a10);

/// Expanded/collapsed flags of collapsible widgets, keyed by widget id.
///
/// Outlives a single render: it is read and written by every transform so a
/// widget the reader opened stays open when the document is re-rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetStateMap {
    states: BTreeMap<String, bool>,
}

impl WidgetStateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<bool> {
        self.states.get(id).copied()
    }

    pub fn set_expanded(&mut self, id: &str, expanded: bool) {
        self.states.insert(id.to_string(), expanded);
    }

    /// Flip a widget's flag and return the new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = self.states.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.states.iter().map(|(id, flag)| (id.as_str(), *flag))
    }

    fn get_or_insert(&mut self, id: &str, default: bool) -> bool {
        *self.states.entry(id.to_string()).or_insert(default)
    }

    fn retain_ids(&mut self, keep: &HashSet<String>) {
        self.states.retain(|id, _| keep.contains(id));
    }
}

/// Build the identifier of the `occurrence`-th widget of `kind` titled `title`.
///
/// Derived from content rather than randomness so the same document produces
/// the same identifiers on every render.
pub fn widget_id(kind: &str, title: &str, occurrence: usize) -> String {
    let name = format!("{kind}\u{0}{title}\u{0}{occurrence}");
    let uuid = Uuid::new_v5(&WIDGET_NAMESPACE, name.as_bytes());
    format!("box-{}", uuid.simple())
}

/// Per-render state threaded through every pipeline stage.
///
/// Counters start from zero on each transform; only the widget map outlives it.
pub struct RenderContext<'a> {
    pub(crate) options: &'a RenderOptions,
    widgets: &'a mut WidgetStateMap,
    box_usage: HashMap<String, usize>,
    spoilerboxes: usize,
    profile_cards: usize,
    seen_widgets: HashSet<String>,
}

impl<'a> RenderContext<'a> {
    pub fn new(options: &'a RenderOptions, widgets: &'a mut WidgetStateMap) -> Self {
        Self {
            options,
            widgets,
            box_usage: HashMap::new(),
            spoilerboxes: 0,
            profile_cards: 0,
            seen_widgets: HashSet::new(),
        }
    }

    /// Record another box titled `title`; returns how many have been seen so far.
    pub fn count_box_title(&mut self, title: &str) -> usize {
        let count = self.box_usage.entry(title.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn box_title_count(&self, title: &str) -> usize {
        self.box_usage.get(title).copied().unwrap_or(0)
    }

    pub fn next_spoilerbox(&mut self) -> usize {
        self.spoilerboxes += 1;
        self.spoilerboxes
    }

    /// Hover-card index for the next profile link, starting at zero.
    pub fn next_profile_card(&mut self) -> usize {
        let card = self.profile_cards;
        self.profile_cards += 1;
        card
    }

    /// Look up a widget's flag, registering it with the default if new.
    pub fn widget_expanded(&mut self, id: &str) -> bool {
        self.seen_widgets.insert(id.to_string());
        self.widgets
            .get_or_insert(id, self.options.expand_widgets_by_default)
    }

    /// Drop widget flags this render did not produce.
    pub fn finish(self) {
        self.widgets.retain_ids(&self.seen_widgets);
    }
}
