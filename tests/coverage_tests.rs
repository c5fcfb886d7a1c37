//! Totality checks: the default registry and the declared kind tables must
//! agree exactly, in both directions.

use galley::ast::Node;
use galley::doc::Fragment;
use galley::engine::{format_node, FormatOptions};
use galley::registry::build_default_registry;
use galley::syntax::kind;

#[test]
fn test_default_registry_populates_without_fault() {
    let registry = build_default_registry().unwrap();
    assert_eq!(registry.len(), kind::all().len());
}

#[test]
fn test_every_declared_kind_has_a_builder() {
    let registry = build_default_registry().unwrap();
    let missing: Vec<_> = kind::all()
        .iter()
        .filter(|tag| !registry.contains(tag))
        .collect();
    assert!(missing.is_empty(), "kinds without a builder: {missing:?}");
}

#[test]
fn test_every_registered_builder_is_declared() {
    let registry = build_default_registry().unwrap();
    let orphaned: Vec<_> = registry
        .kinds()
        .filter(|tag| !kind::is_known(tag))
        .collect();
    assert!(orphaned.is_empty(), "builders for undeclared kinds: {orphaned:?}");
}

// ---
// Per-Grammar Spot Checks
// ---
//
// One representative node per grammar, dispatched end to end through the
// default registry.

#[test]
fn test_script_grammar_dispatches() {
    let registry = build_default_registry().unwrap();
    let node = Node::new("JSIfStatement")
        .with_slot("test", Node::new("JSReferenceIdentifier").with_text("ready"))
        .with_slot(
            "consequent",
            Node::new("JSBlockStatement").with_slot(
                "body",
                Node::new("JSExpressionStatement").with_slot(
                    "expression",
                    Node::new("JSCallExpression")
                        .with_slot("callee", Node::new("JSReferenceIdentifier").with_text("go")),
                ),
            ),
        );

    let fragment = format_node(&registry, &node, FormatOptions::default()).unwrap();
    let rendered = format!("{fragment:?}");
    for piece in ["if (", "ready", "go", "(", ";"] {
        assert!(rendered.contains(piece), "missing {piece}");
    }
}

#[test]
fn test_typed_grammar_dispatches() {
    let registry = build_default_registry().unwrap();
    let node = Node::new("TSTypeAlias")
        .with_slot("name", Node::new("JSBindingIdentifier").with_text("Port"))
        .with_slot("annotation", Node::new("TSNumberKeywordTypeAnnotation"));

    let fragment = format_node(&registry, &node, FormatOptions::default()).unwrap();
    let rendered = format!("{fragment:?}");
    assert!(rendered.contains("type "));
    assert!(rendered.contains("Port"));
    assert!(rendered.contains("number"));
}

#[test]
fn test_markup_grammar_dispatches() {
    let registry = build_default_registry().unwrap();
    let node = Node::new("HTMLElement")
        .with_slot("name", Node::new("HTMLIdentifier").with_text("br"));

    let fragment = format_node(&registry, &node, FormatOptions::default()).unwrap();
    assert!(format!("{fragment:?}").contains("<br"));
}

#[test]
fn test_stylesheet_grammar_dispatches() {
    let registry = build_default_registry().unwrap();
    let node = Node::new("CSSRuleDeclaration")
        .with_slot("name", Node::new("CSSIdentifierType").with_text("color"))
        .with_slot("value", Node::new("CSSIdentifierType").with_text("red"));

    let fragment = format_node(&registry, &node, FormatOptions::default()).unwrap();
    let rendered = format!("{fragment:?}");
    assert!(rendered.contains("color"));
    assert!(rendered.contains("red"));
    assert!(rendered.contains(";"));
}

#[test]
fn test_common_kinds_dispatch() {
    let registry = build_default_registry().unwrap();

    let line = Node::new("CommentLine").with_text(" note");
    assert_eq!(
        format_node(&registry, &line, FormatOptions::default()).unwrap(),
        Fragment::text("// note")
    );

    let wrapper = Node::new("MockParent")
        .with_slot("child", Node::new("JSNullLiteral"));
    assert_eq!(
        format_node(&registry, &wrapper, FormatOptions::default()).unwrap(),
        Fragment::list(vec![Fragment::text("null")])
    );
}
