use arbor_dom::{Document, Element, ElementKind, Marker};

use crate::toggle::EXPANDED_GLYPH;

/// Rewrites composite nodes into the uniform `[toggle, children wrapper]`
/// shape.
///
/// Children are deep-copied into the wrapper in order and the originals are
/// detached, so the wrapper owns a fully independent subtree. Nodes are
/// processed innermost-first: an outer composite then copies the already
/// normalized shape of its inner composites.
pub(crate) fn normalize(doc: &mut Document) -> usize {
    let mut targets: Vec<_> = doc
        .descendants(doc.root())
        .filter(|&id| doc[id].kind().as_node().is_some_and(|kind| kind.is_composite()))
        .collect();
    // Reversed preorder visits every node after all of its descendants.
    targets.reverse();

    for &id in &targets {
        let toggle =
            doc.insert_first(id, Element::new(ElementKind::Toggle).with_text(EXPANDED_GLYPH));
        doc[id].markers_mut().insert(Marker::Container);

        let moved: Vec<_> =
            doc.children(id).iter().copied().filter(|&child| child != toggle).collect();

        let wrapper = doc.alloc(Element::new(ElementKind::Children));
        for child in moved {
            let copy = doc.clone_subtree(child);
            doc.append(wrapper, copy);
            doc.detach(child);
        }
        doc.append(id, wrapper);
    }

    targets.len()
}
