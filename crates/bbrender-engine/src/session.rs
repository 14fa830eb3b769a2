use crate::render::{ElementHost, NoopHost, RenderOptions, Transformer, WidgetStateMap};

/// Inputs of the last render together with its output.
struct Rendered {
    source: String,
    generation: u64,
    revision: u64,
    html: String,
}

/// One document being edited and displayed.
///
/// Owns the widget flags that must survive re-renders and caches the last
/// output: [`Session::render`] only runs the transform again when the source
/// text, the caller's generation signal or the widget flags have changed.
/// Calls on one session are serialized by `&mut self`.
pub struct Session<H: ElementHost = NoopHost> {
    transformer: Transformer,
    widgets: WidgetStateMap,
    host: H,
    /// Bumped on every widget flag change so cached output is never stale.
    revision: u64,
    last: Option<Rendered>,
}

impl Session<NoopHost> {
    pub fn new(options: RenderOptions) -> Self {
        Self::with_host(options, NoopHost)
    }
}

impl Default for Session<NoopHost> {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl<H: ElementHost> Session<H> {
    pub fn with_host(options: RenderOptions, host: H) -> Self {
        Self {
            transformer: Transformer::new(options),
            widgets: WidgetStateMap::new(),
            host,
            revision: 0,
            last: None,
        }
    }

    pub fn render(&mut self, source: &str, generation: u64) -> String {
        if let Some(last) = &self.last
            && last.generation == generation
            && last.revision == self.revision
            && last.source == source
        {
            return last.html.clone();
        }

        let html = self
            .transformer
            .transform(source, &mut self.widgets, &mut self.host);
        self.last = Some(Rendered {
            source: source.to_string(),
            generation,
            revision: self.revision,
            html: html.clone(),
        });
        html
    }

    /// Flip a widget's expanded flag; returns the new value.
    pub fn toggle_widget(&mut self, id: &str) -> bool {
        self.revision += 1;
        self.widgets.toggle(id)
    }

    pub fn set_widget_expanded(&mut self, id: &str, expanded: bool) {
        self.revision += 1;
        self.widgets.set_expanded(id, expanded);
    }

    pub fn widgets(&self) -> &WidgetStateMap {
        &self.widgets
    }

    /// Replace the widget flags, e.g. with a map persisted from an earlier session.
    pub fn restore_widgets(&mut self, widgets: WidgetStateMap) {
        self.revision += 1;
        self.widgets = widgets;
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
