//! Interactive behavior for a rendered parse tree.
//!
//! The host supplies a finished element tree. Initialization runs the
//! classifier, normalizer and hydrator over it once; afterwards the tree
//! only changes in response to pointer events.

use std::collections::HashMap;

use arbor_dom::{Document, NodeId};

mod classify;
mod hydrate;
mod normalize;
mod overlay;
#[cfg(test)]
mod tests;
mod toggle;

pub use overlay::{InspectorOverlay, OVERLAY_GAP};
pub use toggle::{COLLAPSED_GLYPH, EXPANDED_GLYPH};

/// Pointer event delivered by the host, targeted at one element.
#[derive(Clone, Copy, Debug)]
pub enum PointerEvent {
    Enter(NodeId),
    Leave(NodeId),
    Click(NodeId),
}

/// An initialized, interactive tree.
///
/// Owns the document and the overlay. The overlay is constructed by the
/// caller and handed in, so tests can build and inspect it directly.
pub struct View {
    doc: Document,
    overlay: InspectorOverlay,
    handlers: HashMap<NodeId, toggle::Action>,
}

impl View {
    /// Runs the one-shot init pipeline: classify, normalize, hydrate, then
    /// bind toggles.
    ///
    /// Normalization must precede binding (the injected toggles have to
    /// exist) and classification must precede everything that reads
    /// expansion state.
    pub fn new(mut doc: Document, overlay: InspectorOverlay) -> Self {
        let classified = classify::classify(&mut doc);
        let normalized = normalize::normalize(&mut doc);
        let hydrated = hydrate::hydrate(&mut doc);

        let mut handlers = HashMap::new();
        let bound = toggle::bind(&doc, &mut handlers);

        tracing::debug!(classified, normalized, hydrated, bound, "view initialized");

        Self { doc, overlay, handlers }
    }

    /// Reacts to one pointer event. Synchronous; no event outlives this
    /// call.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter(id) => self.overlay.show(&self.doc, id),
            PointerEvent::Leave(_) => self.overlay.hide(),
            PointerEvent::Click(id) => self.click(id),
        }
    }

    /// Delivers a click: the nearest registered affordance on the ancestor
    /// chain handles it and propagation stops there.
    fn click(&mut self, target: NodeId) {
        let mut current = Some(target);
        while let Some(id) = current {
            if let Some(&toggle::Action::Toggle { owner }) = self.handlers.get(&id) {
                toggle::toggle(&mut self.doc, owner);
                return;
            }
            current = self.doc.parent(id);
        }
    }

    /// Whether `id` currently shows its children.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        toggle::is_expanded(&self.doc, id)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn overlay(&self) -> &InspectorOverlay {
        &self.overlay
    }
}
