use text_size::TextRange;

use crate::document::NodeId;
use crate::markers::Markers;

/// Kind vocabulary for parse-tree nodes, as produced by the external
/// renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
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
}

impl NodeKind {
    /// Human-readable label shown by the inspector overlay.
    pub fn label(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::FunctionBody => "function-body",
            Self::Declaration => "declaration",
            Self::Statement => "statement",
            Self::Expression => "expression",
            Self::Binary => "binary",
            Self::BinaryOperator => "binary-operator",
            Self::Parenthesized => "parenthesized",
            Self::Let => "let",
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::Token => "token",
            Self::NodeError => "node-error",
            Self::FatalError => "fatal-error",
        }
    }

    /// Composite kinds that get a toggle and a children wrapper.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            Self::Function | Self::FunctionBody | Self::Binary | Self::Parenthesized | Self::Let
        )
    }

    pub fn is_error(self) -> bool {
        matches!(self, Self::NodeError | Self::FatalError)
    }
}

/// What an element in the document is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// The tree window the renderer mounts everything under.
    Root,
    /// Top-level grouping element.
    Group,
    /// Generic block-level element.
    Block,
    /// Toggle glyph injected by the normalizer.
    Toggle,
    /// Children wrapper injected by the normalizer.
    Children,
    /// A parse-tree node of the given kind.
    Node(NodeKind),
}

impl ElementKind {
    pub fn as_node(self) -> Option<NodeKind> {
        match self {
            Self::Node(kind) => Some(kind),
            _ => None,
        }
    }

    /// Counts toward a parent's qualifying-child total.
    pub fn is_block_level(self) -> bool {
        matches!(self, Self::Node(_) | Self::Group | Self::Block)
    }

    pub(crate) fn debug_label(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Group => "group",
            Self::Block => "block",
            Self::Toggle => "toggle",
            Self::Children => "children",
            Self::Node(kind) => kind.label(),
        }
    }
}

/// On-screen box of an element, supplied by the host layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(self) -> f32 {
        self.x + self.width
    }

    pub fn top(self) -> f32 {
        self.y
    }
}

/// One rendered element of the tree.
#[derive(Clone, Debug)]
pub struct Element {
    kind: ElementKind,
    markers: Markers,
    span: Option<TextRange>,
    raw_text: Option<String>,
    error_message: Option<String>,
    text: String,
    rect: Rect,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            markers: Markers::EMPTY,
            span: None,
            raw_text: None,
            error_message: None,
            text: String::new(),
            rect: Rect::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_span(mut self, span: TextRange) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_raw_text(mut self, raw_text: impl Into<String>) -> Self {
        self.raw_text = Some(raw_text.into());
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn markers(&self) -> Markers {
        self.markers
    }

    pub fn markers_mut(&mut self) -> &mut Markers {
        &mut self.markers
    }

    pub fn span(&self) -> Option<TextRange> {
        self.span
    }

    /// Raw-text payload carried over from the source span, if any.
    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Currently rendered text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}
