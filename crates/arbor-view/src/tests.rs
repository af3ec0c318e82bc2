use arbor_dom::{Document, Element, ElementKind, Marker, NodeKind, Rect};
use expect_test::expect;
use text_size::TextRange;

use crate::{COLLAPSED_GLYPH, EXPANDED_GLYPH, InspectorOverlay, PointerEvent, View};

fn node(kind: NodeKind) -> Element {
    Element::new(ElementKind::Node(kind))
}

fn span(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

fn view(doc: Document) -> View {
    View::new(doc, InspectorOverlay::new())
}

/// `let x = 5` as the renderer would serialize it.
fn let_binding(doc: &mut Document) -> arbor_dom::NodeId {
    let group = doc.push(doc.root(), Element::new(ElementKind::Group));
    let let_ =
        doc.push(group, node(NodeKind::Let).with_span(span(0, 9)).with_raw_text("let x = 5"));
    doc.push(let_, node(NodeKind::Token).with_span(span(0, 3)).with_raw_text("let"));
    doc.push(let_, node(NodeKind::Identifier).with_span(span(4, 5)).with_raw_text("x"));
    doc.push(let_, node(NodeKind::Integer).with_span(span(8, 9)).with_raw_text("5"));
    let_
}

#[test]
fn init_pipeline_shapes_the_tree() {
    let mut doc = Document::new();
    let_binding(&mut doc);

    let view = view(doc);

    // The binding's own payload lands in its first token slot; the leaf
    // slots then keep what they already have or fill themselves.
    expect![[r#"
        root
          group
            let@0..9 #has-children #expanded #container
              toggle "▼"
              children
                token@0..3 "let x = 5"
                identifier@4..5 "x"
                integer@8..9 "5"
    "#]]
    .assert_eq(&view.document().debug_dump());
}

#[test]
fn container_toggle_round_trips_state_and_glyph() {
    let mut doc = Document::new();
    let let_ = let_binding(&mut doc);
    let mut view = view(doc);

    let toggle = view.document().first_child(let_).unwrap();
    assert!(view.is_expanded(let_));

    view.handle(PointerEvent::Click(toggle));
    assert!(!view.is_expanded(let_));
    assert!(view.document()[let_].markers().contains(Marker::Collapsed));
    assert_eq!(view.document()[toggle].text(), COLLAPSED_GLYPH);

    view.handle(PointerEvent::Click(toggle));
    assert!(view.is_expanded(let_));
    assert!(!view.document()[let_].markers().contains(Marker::Collapsed));
    assert_eq!(view.document()[toggle].text(), EXPANDED_GLYPH);
}

#[test]
fn lightweight_toggle_round_trips_expanded_marker() {
    let mut doc = Document::new();
    let statement = doc.push(doc.root(), node(NodeKind::Statement));
    let affordance = doc.push(statement, node(NodeKind::Token));
    doc.push(statement, node(NodeKind::Expression));
    let mut view = view(doc);

    assert!(view.is_expanded(statement));

    view.handle(PointerEvent::Click(affordance));
    assert!(!view.is_expanded(statement));

    view.handle(PointerEvent::Click(affordance));
    assert!(view.is_expanded(statement));
}

#[test]
fn lightweight_click_does_not_toggle_ancestor_container() {
    let mut doc = Document::new();
    let let_ = doc.push(doc.root(), node(NodeKind::Let));
    let statement = doc.push(let_, node(NodeKind::Statement));
    doc.push(statement, node(NodeKind::Token));
    doc.push(statement, node(NodeKind::Expression));
    doc.push(let_, node(NodeKind::Token));
    let mut view = view(doc);

    // Post-normalization copies live under the wrapper.
    let wrapper = view.document().children(let_)[1];
    let statement_copy = view.document().children(wrapper)[0];
    let affordance = view.document().first_child(statement_copy).unwrap();

    // The nested statement starts collapsed: it is not a root/group child.
    assert!(!view.is_expanded(statement_copy));

    let was_expanded = view.is_expanded(let_);
    view.handle(PointerEvent::Click(affordance));

    assert!(view.is_expanded(statement_copy));
    assert_eq!(view.is_expanded(let_), was_expanded);
    assert!(!view.document()[let_].markers().contains(Marker::Collapsed));
}

#[test]
fn click_without_an_affordance_is_ignored() {
    let mut doc = Document::new();
    let leaf = doc.push(doc.root(), node(NodeKind::Integer));
    let mut view = view(doc);

    let before = view.document().debug_dump();
    view.handle(PointerEvent::Click(leaf));
    assert_eq!(before, view.document().debug_dump());
}

#[test]
fn overlay_shows_span_and_text() {
    let mut doc = Document::new();
    let id = doc.push(
        doc.root(),
        node(NodeKind::Identifier)
            .with_span(span(5, 12))
            .with_raw_text("foo")
            .with_rect(Rect::new(0.0, 40.0, 20.0, 10.0)),
    );
    let mut view = view(doc);

    view.handle(PointerEvent::Enter(id));

    let overlay = view.overlay();
    assert!(overlay.is_visible());
    assert_eq!(overlay.position(), (30.0, 40.0));

    let panel = overlay.render();
    assert!(panel.contains("span: 5 - 12"));
    assert!(panel.contains("text: foo"));
    assert!(panel.contains("kind: identifier"));
    assert!(!panel.contains("error:"));
}

#[test]
fn overlay_escapes_untrusted_text() {
    let mut doc = Document::new();
    let id =
        doc.push(doc.root(), node(NodeKind::Token).with_raw_text("<script>alert(1)</script>"));
    let mut view = view(doc);

    view.handle(PointerEvent::Enter(id));

    let panel = view.overlay().render();
    assert!(panel.contains("&lt;script&gt;"));
    assert!(!panel.contains("<script>"));
}

#[test]
fn overlay_surfaces_descendant_errors() {
    let mut doc = Document::new();
    let let_ = doc.push(doc.root(), node(NodeKind::Let).with_span(span(0, 4)));
    doc.push(let_, node(NodeKind::Token));
    doc.push(let_, node(NodeKind::NodeError).with_error_message("expected `=`"));
    let mut view = view(doc);

    view.handle(PointerEvent::Enter(let_));

    assert!(view.overlay().render().contains("error: expected `=`"));
}

#[test]
fn overlay_degrades_on_missing_metadata() {
    let mut doc = Document::new();
    let group = doc.push(doc.root(), Element::new(ElementKind::Group));
    let mut view = view(doc);

    view.handle(PointerEvent::Enter(group));

    let panel = view.overlay().render();
    assert!(panel.contains("span:  - "));
    assert!(panel.contains("text: \n"));
    assert!(!panel.contains("kind:"));
}

#[test]
fn overlay_hides_on_leave() {
    let mut doc = Document::new();
    let id = doc.push(doc.root(), node(NodeKind::Integer));
    let mut view = view(doc);

    view.handle(PointerEvent::Enter(id));
    assert!(view.overlay().is_visible());

    view.handle(PointerEvent::Leave(id));
    assert!(!view.overlay().is_visible());
}
