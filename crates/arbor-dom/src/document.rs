use std::fmt::Write as _;
use std::ops::{Index, IndexMut};

use text_size::TextSize;

use crate::arena::{Arena, Idx};
use crate::element::{Element, ElementKind};

pub type NodeId = Idx<Element>;

/// Element tree for one rendered page.
///
/// Elements live in an arena and reference each other by id. The root is the
/// tree window; everything the renderer produced hangs below it.
#[derive(Debug)]
pub struct Document {
    elements: Arena<Element>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut elements = Arena::default();
        let root = elements.alloc(Element::new(ElementKind::Root));
        Self { elements, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of allocated elements, detached subtrees included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        // The root always exists.
        self.len() <= 1
    }

    /// Allocates a detached element.
    pub fn alloc(&mut self, element: Element) -> NodeId {
        self.elements.alloc(element)
    }

    /// Attaches a detached element as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.elements[child].parent = Some(parent);
        self.elements[parent].children.push(child);
    }

    /// Allocates `element` and appends it to `parent`.
    pub fn push(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.alloc(element);
        self.append(parent, id);
        id
    }

    /// Allocates `element` and inserts it as the first child of `parent`.
    pub fn insert_first(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.alloc(element);
        self.elements[id].parent = Some(parent);
        self.elements[parent].children.insert(0, id);
        id
    }

    /// Unlinks `id` from its parent. The subtree stays allocated but is no
    /// longer reachable from the root.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.elements[id].parent.take() {
            self.elements[parent].children.retain(|&child| child != id);
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.elements[id].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.elements[id].children
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.elements[id].children.first().copied()
    }

    /// Preorder traversal of `id` and everything below it.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants { document: self, stack: vec![id] }
    }

    /// Deep, independent copy of the subtree at `id`.
    ///
    /// The copy gets fresh ids, keeps markers, attributes and text, and comes
    /// back detached.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        let mut copy = self.elements[id].clone();
        copy.parent = None;
        copy.children = Vec::new();
        let copy_id = self.elements.alloc(copy);

        let children = self.elements[id].children.clone();
        for child in children {
            let child_copy = self.clone_subtree(child);
            self.append(copy_id, child_copy);
        }

        copy_id
    }

    /// Smallest parse-tree node whose span contains `offset`.
    pub fn covering_node(&self, offset: TextSize) -> Option<NodeId> {
        self.descendants(self.root)
            .filter(|&id| self.elements[id].kind().as_node().is_some())
            .filter_map(|id| Some((id, self.elements[id].span()?)))
            .filter(|(_, span)| span.contains(offset))
            .min_by_key(|(_, span)| span.len())
            .map(|(id, _)| id)
    }

    /// Indented rendering of the reachable tree, for snapshots and the CLI.
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, self.root, 0);
        out
    }

    fn dump_into(&self, out: &mut String, id: NodeId, depth: usize) {
        let element = &self.elements[id];

        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(element.kind().debug_label());
        if let Some(span) = element.span() {
            let _ = write!(out, "@{span:?}");
        }
        for marker in element.markers().iter() {
            let _ = write!(out, " #{}", marker.as_str());
        }
        if !element.text().is_empty() {
            let _ = write!(out, " {:?}", element.text());
        }
        out.push('\n');

        for &child in &element.children {
            self.dump_into(out, child, depth + 1);
        }
    }
}

impl Index<NodeId> for Document {
    type Output = Element;

    fn index(&self, id: NodeId) -> &Element {
        &self.elements[id]
    }
}

impl IndexMut<NodeId> for Document {
    fn index_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.elements[id]
    }
}

/// Preorder iterator over element ids.
pub struct Descendants<'a> {
    document: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack.extend(self.document.children(id).iter().rev().copied());
        Some(id)
    }
}
