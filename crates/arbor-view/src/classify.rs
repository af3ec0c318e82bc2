use arbor_dom::{Document, ElementKind, Marker};

/// Marks parse-tree nodes as collapsible and top-level nodes as initially
/// expanded.
///
/// A node is collapsible when more than one of its immediate children is a
/// node or another block-level element. A node is initially expanded when it
/// sits directly under the tree root or under a grouping element. The two
/// rules are independent; re-running only re-adds markers that are already
/// present.
pub(crate) fn classify(doc: &mut Document) -> usize {
    let ids: Vec<_> = doc.descendants(doc.root()).collect();
    let mut classified = 0;

    for id in ids {
        if doc[id].kind().as_node().is_none() {
            continue;
        }
        classified += 1;

        let qualifying =
            doc.children(id).iter().filter(|&&child| doc[child].kind().is_block_level()).count();
        if qualifying > 1 {
            doc[id].markers_mut().insert(Marker::HasChildren);
        }

        if let Some(parent) = doc.parent(id) {
            if parent == doc.root() || doc[parent].kind() == ElementKind::Group {
                doc[id].markers_mut().insert(Marker::Expanded);
            }
        }
    }

    classified
}
