//! Read-only AST query helpers consumed by individual builders.
//!
//! These sit outside the dispatch core proper: builders call them to inspect
//! node fields (most commonly attribute lookups on markup elements) without
//! each builder re-implementing the slot walking.

use crate::ast::Node;

/// Returns the attribute of `element` whose name child carries `name`, if any.
///
/// Works for any element-shaped node that stores its attributes in an
/// `attributes` slot where each attribute's own `name` slot is an identifier
/// node (`HTMLElement`, `JSXElement`).
///
/// # Examples
///
/// ```rust
/// use galley::ast::{query, Node};
///
/// let element = Node::new("JSXElement")
///     .with_slot("name", Node::new("JSXIdentifier").with_text("img"))
///     .with_slot(
///         "attributes",
///         Node::new("JSXAttribute")
///             .with_slot("name", Node::new("JSXIdentifier").with_text("alt"))
///             .with_slot("value", Node::new("JSStringLiteral").with_text("\"logo\"")),
///     );
///
/// let alt = query::attribute(&element, "alt").unwrap();
/// assert_eq!(alt.kind(), "JSXAttribute");
/// assert!(query::attribute(&element, "src").is_none());
/// ```
pub fn attribute<'a>(element: &'a Node, name: &str) -> Option<&'a Node> {
    element
        .slots_named("attributes")
        .find(|attr| attr.slot("name").and_then(Node::text) == Some(name))
}

/// True when `element` carries an attribute named `name`.
///
/// # Examples
///
/// ```rust
/// use galley::ast::{query, Node};
///
/// let element = Node::new("HTMLElement")
///     .with_slot("name", Node::new("HTMLIdentifier").with_text("input"))
///     .with_slot(
///         "attributes",
///         Node::new("HTMLAttribute")
///             .with_slot("name", Node::new("HTMLIdentifier").with_text("disabled")),
///     );
///
/// assert!(query::has_attribute(&element, "disabled"));
/// assert!(!query::has_attribute(&element, "checked"));
/// ```
pub fn has_attribute(element: &Node, name: &str) -> bool {
    attribute(element, name).is_some()
}

/// The text payload of the first child in slot `name`, if both exist.
///
/// The common case is pulling an identifier out of a name slot:
/// `slot_text(element, "name")` yields the tag name of a markup element.
pub fn slot_text<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    node.slot(name).and_then(Node::text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Node {
        Node::new("HTMLElement")
            .with_slot("name", Node::new("HTMLIdentifier").with_text("a"))
            .with_slot(
                "attributes",
                Node::new("HTMLAttribute")
                    .with_slot("name", Node::new("HTMLIdentifier").with_text("href"))
                    .with_slot("value", Node::new("HTMLString").with_text("/home")),
            )
            .with_slot(
                "attributes",
                Node::new("HTMLAttribute")
                    .with_slot("name", Node::new("HTMLIdentifier").with_text("target"))
                    .with_slot("value", Node::new("HTMLString").with_text("_blank")),
            )
    }

    #[test]
    fn attribute_finds_by_name_child() {
        let element = anchor();
        let target = attribute(&element, "target").unwrap();
        assert_eq!(slot_text(target, "value"), Some("_blank"));
    }

    #[test]
    fn attribute_misses_cleanly() {
        let element = anchor();
        assert!(attribute(&element, "rel").is_none());
        assert!(!has_attribute(&element, "rel"));
    }

    #[test]
    fn attribute_on_attributeless_node_is_none() {
        let element = Node::new("HTMLElement")
            .with_slot("name", Node::new("HTMLIdentifier").with_text("br"));
        assert!(attribute(&element, "href").is_none());
    }

    #[test]
    fn slot_text_requires_both_slot_and_text() {
        let element = anchor();
        assert_eq!(slot_text(&element, "name"), Some("a"));
        assert_eq!(slot_text(&element, "children"), None);
        // Slot present but child has no payload.
        let bare = Node::new("HTMLElement").with_slot("name", Node::new("HTMLIdentifier"));
        assert_eq!(slot_text(&bare, "name"), None);
    }
}
