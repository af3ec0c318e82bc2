//! Loads a pre-serialized parse tree into an element document.
//!
//! The external renderer serializes the tree it produced as JSON: one object
//! per element, kinds in kebab-case, every field but `kind` optional. The
//! loader synthesizes the tree-window root and hangs the serialized elements
//! under it.

use arbor_dom::{Document, Element, ElementKind, NodeId, NodeKind, Rect};
use serde::Deserialize;
use text_size::TextRange;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed tree json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tree has no nodes")]
    Empty,
}

/// Parses a serialized tree. Accepts a single top-level node or an array of
/// them.
pub fn load_str(text: &str) -> Result<Document, LoadError> {
    let raw: RawTree = serde_json::from_str(text)?;
    let nodes = match raw {
        RawTree::Many(nodes) => nodes,
        RawTree::One(node) => vec![*node],
    };

    let mut doc = Document::new();
    let root = doc.root();
    for node in nodes {
        attach(&mut doc, root, node);
    }
    if doc.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(doc)
}

fn attach(doc: &mut Document, parent: NodeId, raw: RawNode) {
    let mut element = Element::new(raw.kind.into());
    if let Some(span) = raw.span.and_then(RawSpan::into_range) {
        element = element.with_span(span);
    }
    if let Some(text) = raw.text {
        element = element.with_raw_text(text);
    }
    if let Some(error) = raw.error {
        element = element.with_error_message(error);
    }
    if let Some(rect) = raw.rect {
        element = element.with_rect(Rect::new(rect.x, rect.y, rect.width, rect.height));
    }

    let id = doc.push(parent, element);
    for child in raw.children {
        attach(doc, id, child);
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTree {
    Many(Vec<RawNode>),
    One(Box<RawNode>),
}

#[derive(Deserialize)]
struct RawNode {
    kind: KindTag,
    #[serde(default)]
    span: Option<RawSpan>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    rect: Option<RawRect>,
    #[serde(default)]
    children: Vec<RawNode>,
}

#[derive(Deserialize, Clone, Copy)]
struct RawSpan {
    start: u32,
    end: u32,
}

impl RawSpan {
    /// Inverted spans are treated as absent rather than rejected.
    fn into_range(self) -> Option<TextRange> {
        (self.start <= self.end).then(|| TextRange::new(self.start.into(), self.end.into()))
    }
}

#[derive(Deserialize, Clone, Copy)]
struct RawRect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
enum KindTag {
    Function,
    FunctionBody,
    Declaration,
    Statement,
    Expression,
    Binary,
    BinaryOperator,
    Parenthesized,
    Let,
    Identifier,
    Integer,
    Token,
    NodeError,
    FatalError,
    Group,
    Block,
}

impl From<KindTag> for ElementKind {
    fn from(tag: KindTag) -> Self {
        match tag {
            KindTag::Function => Self::Node(NodeKind::Function),
            KindTag::FunctionBody => Self::Node(NodeKind::FunctionBody),
            KindTag::Declaration => Self::Node(NodeKind::Declaration),
            KindTag::Statement => Self::Node(NodeKind::Statement),
            KindTag::Expression => Self::Node(NodeKind::Expression),
            KindTag::Binary => Self::Node(NodeKind::Binary),
            KindTag::BinaryOperator => Self::Node(NodeKind::BinaryOperator),
            KindTag::Parenthesized => Self::Node(NodeKind::Parenthesized),
            KindTag::Let => Self::Node(NodeKind::Let),
            KindTag::Identifier => Self::Node(NodeKind::Identifier),
            KindTag::Integer => Self::Node(NodeKind::Integer),
            KindTag::Token => Self::Node(NodeKind::Token),
            KindTag::NodeError => Self::Node(NodeKind::NodeError),
            KindTag::FatalError => Self::Node(NodeKind::FatalError),
            KindTag::Group => Self::Group,
            KindTag::Block => Self::Block,
        }
    }
}
