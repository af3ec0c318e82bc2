use std::collections::HashMap;

use arbor_dom::{Document, Marker, NodeId};

/// Toggle glyph shown on an expanded container.
pub const EXPANDED_GLYPH: &str = "▼";
/// Toggle glyph shown on a collapsed container.
pub const COLLAPSED_GLYPH: &str = "▶";

/// Registered reaction to a click on a specific element.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Action {
    Toggle { owner: NodeId },
}

/// Registers click handlers on every toggle affordance.
///
/// Containers get theirs on the injected toggle element; lightweight
/// collapsible nodes on their first child. Must run after normalization so
/// the injected toggles exist.
pub(crate) fn bind(doc: &Document, handlers: &mut HashMap<NodeId, Action>) -> usize {
    let mut bound = 0;

    for id in doc.descendants(doc.root()) {
        if doc[id].kind().as_node().is_none() {
            continue;
        }

        let markers = doc[id].markers();
        if !markers.contains(Marker::Container) && !markers.contains(Marker::HasChildren) {
            continue;
        }

        // For containers the first child is the injected toggle; for
        // lightweight nodes it doubles as the affordance.
        if let Some(affordance) = doc.first_child(id) {
            handlers.insert(affordance, Action::Toggle { owner: id });
            bound += 1;
        }
    }

    bound
}

/// Flips the collapsed/expanded state of `owner`.
///
/// Containers track state with the collapsed marker and mirror it in the
/// toggle glyph; lightweight nodes flip the expanded marker, which is what
/// the styling layer keys child visibility on.
pub(crate) fn toggle(doc: &mut Document, owner: NodeId) {
    if doc[owner].markers().contains(Marker::Container) {
        doc[owner].markers_mut().toggle(Marker::Collapsed);
        let glyph = if doc[owner].markers().contains(Marker::Collapsed) {
            COLLAPSED_GLYPH
        } else {
            EXPANDED_GLYPH
        };
        if let Some(glyph_element) = doc.first_child(owner) {
            doc[glyph_element].set_text(glyph);
        }
    } else {
        doc[owner].markers_mut().toggle(Marker::Expanded);
    }
}

/// Whether `id` currently shows its children.
pub(crate) fn is_expanded(doc: &Document, id: NodeId) -> bool {
    let markers = doc[id].markers();
    if markers.contains(Marker::Container) {
        // Containers start expanded: that is the default the injected
        // glyph advertises.
        !markers.contains(Marker::Collapsed)
    } else {
        markers.contains(Marker::Expanded)
    }
}
