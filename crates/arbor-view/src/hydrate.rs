use arbor_dom::{Document, NodeId, NodeKind};

/// Slot kinds a payload may be rendered into, in lookup priority order.
const TOKEN_SLOTS: [NodeKind; 4] =
    [NodeKind::Token, NodeKind::Identifier, NodeKind::Integer, NodeKind::BinaryOperator];

/// Renders each node's raw-text payload into the right place.
///
/// The payload goes into the first token slot found in the subtree, unless
/// that slot already has text. True leaves without any slot get the payload
/// as their own text. Nodes with children but no slot are left alone: their
/// text is represented structurally. Running twice is a no-op.
pub(crate) fn hydrate(doc: &mut Document) -> usize {
    let ids: Vec<_> = doc.descendants(doc.root()).collect();
    let mut hydrated = 0;

    for id in ids {
        if doc[id].kind().as_node().is_none() {
            continue;
        }
        let Some(payload) = doc[id].raw_text() else {
            continue;
        };
        let payload = payload.trim().to_string();

        match token_slot(doc, id) {
            Some(slot) if doc[slot].text().trim().is_empty() => {
                doc[slot].set_text(payload);
                hydrated += 1;
            }
            Some(_) => {}
            None if doc.children(id).is_empty() => {
                doc[id].set_text(payload);
                hydrated += 1;
            }
            None => {}
        }
    }

    hydrated
}

/// First element matching the highest-priority slot kind present in the
/// subtree. The node itself counts: a leaf token node is its own slot.
fn token_slot(doc: &Document, id: NodeId) -> Option<NodeId> {
    TOKEN_SLOTS.iter().find_map(|&kind| {
        doc.descendants(id).find(|&candidate| doc[candidate].kind().as_node() == Some(kind))
    })
}
