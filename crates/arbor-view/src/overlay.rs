use std::fmt::Write as _;

use arbor_dom::{Document, NodeId};

/// Horizontal gap between a hovered node and the overlay.
pub const OVERLAY_GAP: f32 = 10.0;

const HEADER: &str = "node info";

/// Floating panel showing metadata for the hovered node.
///
/// One instance exists per page lifetime. Each pointer-enter repositions and
/// repopulates it; pointer-leave hides it. It keeps no state between hovers.
#[derive(Debug, Default)]
pub struct InspectorOverlay {
    visible: bool,
    position: (f32, f32),
    span: Option<(String, String)>,
    text: String,
    error: Option<String>,
    kind: Option<&'static str>,
}

impl InspectorOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repositions the overlay beside `id` and fills it with that node's
    /// metadata.
    pub(crate) fn show(&mut self, doc: &Document, id: NodeId) {
        let element = &doc[id];
        let rect = element.rect();
        self.position = (rect.right() + OVERLAY_GAP, rect.top());
        self.visible = true;

        self.span = element
            .span()
            .map(|span| (u32::from(span.start()).to_string(), u32::from(span.end()).to_string()));
        self.text = escape_html(element.raw_text().unwrap_or(""));
        self.error = doc
            .descendants(id)
            .filter(|&descendant| {
                doc[descendant].kind().as_node().is_some_and(|kind| kind.is_error())
            })
            .find_map(|descendant| doc[descendant].error_message().map(str::to_string));
        self.kind = element.kind().as_node().map(|kind| kind.label());
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Top-left corner the overlay is anchored at.
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    /// The panel as displayed: header, span, text, then error and kind
    /// lines when present.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');

        let (start, end) = match &self.span {
            Some((start, end)) => (start.as_str(), end.as_str()),
            None => ("", ""),
        };
        let _ = writeln!(out, "span: {start} - {end}");
        let _ = writeln!(out, "text: {}", self.text);
        if let Some(error) = &self.error {
            let _ = writeln!(out, "error: {error}");
        }
        if let Some(kind) = self.kind {
            let _ = writeln!(out, "kind: {kind}");
        }
        out
    }
}

/// Escapes parser-supplied text so it can never smuggle markup into the
/// panel.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
