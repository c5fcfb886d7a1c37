//! AST surface consumed by the dispatch core.
//!
//! The formatter does not define one struct per syntax construct; nodes are a
//! uniform shape carrying a kind tag, an optional source span, an optional
//! literal text payload, and an ordered list of named child slots. The parser
//! guarantees well-formedness per grammar; this module performs no validation.
//! Nodes are immutable after construction: all access goes through read-only
//! accessors, and construction goes through the chaining API below.

// ============================================================================
// IMPORTS
// ============================================================================

use serde::{Deserialize, Serialize};

pub mod query;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A byte range in the original source text.
///
/// Spans survive parsing so faults raised far from the parser can still point
/// at source positions.
///
/// # Examples
///
/// ```rust
/// use galley::ast::Span;
/// let span = Span { start: 4, end: 9 };
/// assert_eq!(span.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// One node of the heterogeneous syntax tree.
///
/// Every node names its shape with a kind tag (`"JSBinaryExpression"`,
/// `"HTMLElement"`, `"CSSRoot"`, ...); the tag namespace is flat across all
/// four embedded grammars. Child nodes live in named slots, and a slot name
/// may repeat for list-valued fields (statement bodies, element children,
/// call arguments).
///
/// Nodes serialize to and from JSON so tooling and tests can express whole
/// trees as data.
///
/// # Examples
///
/// ```rust
/// use galley::ast::Node;
///
/// let node = Node::new("JSBinaryExpression")
///     .with_text("+")
///     .with_slot("left", Node::new("JSNumericLiteral").with_text("1"))
///     .with_slot("right", Node::new("JSNumericLiteral").with_text("2"));
///
/// assert_eq!(node.kind(), "JSBinaryExpression");
/// assert_eq!(node.text(), Some("+"));
/// assert_eq!(node.slot("left").map(Node::kind), Some("JSNumericLiteral"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    span: Option<Span>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    slots: Vec<(String, Node)>,
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Node {
    /// Creates a leaf node of the given kind with no span, text, or children.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            span: None,
            text: None,
            slots: Vec::new(),
        }
    }

    /// Attaches a source span. Chaining constructor.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attaches a literal text payload (identifier name, operator, literal
    /// source text). Chaining constructor.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends one named child slot. Chaining constructor.
    pub fn with_slot(mut self, name: impl Into<String>, child: Node) -> Self {
        self.slots.push((name.into(), child));
        self
    }

    /// Appends a run of children under the same slot name, preserving order.
    /// Chaining constructor for list-valued fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use galley::ast::Node;
    /// let root = Node::new("CSSRoot").with_slots(
    ///     "body",
    ///     vec![Node::new("CSSRulesetStatement"), Node::new("CSSRulesetStatement")],
    /// );
    /// assert_eq!(root.slots_named("body").count(), 2);
    /// ```
    pub fn with_slots(mut self, name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        let name = name.into();
        for child in children {
            self.slots.push((name.clone(), child));
        }
        self
    }

    /// The kind tag naming this node's shape.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The source span, if the parser recorded one.
    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    /// The literal text payload, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The first child stored under `name`, if present.
    pub fn slot(&self, name: &str) -> Option<&Node> {
        self.slots
            .iter()
            .find(|(slot, _)| slot == name)
            .map(|(_, child)| child)
    }

    /// All children stored under `name`, in slot order.
    pub fn slots_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.slots
            .iter()
            .filter(move |(slot, _)| slot == name)
            .map(|(_, child)| child)
    }

    /// Every `(slot name, child)` pair in declaration order, across all names.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.slots.iter().map(|(name, child)| (name.as_str(), child))
    }

    /// True when at least one child is stored under `name`.
    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.iter().any(|(slot, _)| slot == name)
    }

    /// Total number of children across all slots.
    pub fn child_count(&self) -> usize {
        self.slots.len()
    }

    /// True for nodes with no children at all.
    pub fn is_leaf(&self) -> bool {
        self.slots.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn element() -> Node {
        Node::new("HTMLElement")
            .with_span(Span::new(0, 42))
            .with_slot("name", Node::new("HTMLIdentifier").with_text("div"))
            .with_slot(
                "attributes",
                Node::new("HTMLAttribute")
                    .with_slot("name", Node::new("HTMLIdentifier").with_text("id")),
            )
            .with_slots(
                "children",
                vec![
                    Node::new("HTMLText").with_text("hello"),
                    Node::new("HTMLText").with_text("world"),
                ],
            )
    }

    #[test]
    fn slot_returns_first_match_only() {
        let node = element();
        assert_eq!(node.slot("children").and_then(Node::text), Some("hello"));
    }

    #[test]
    fn slots_named_preserves_order() {
        let node = element();
        let texts: Vec<_> = node
            .slots_named("children")
            .filter_map(Node::text)
            .collect();
        assert_eq!(texts, vec!["hello", "world"]);
    }

    #[test]
    fn children_walks_every_slot_in_declaration_order() {
        let node = element();
        let names: Vec<_> = node.children().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["name", "attributes", "children", "children"]);
    }

    #[test]
    fn missing_slot_is_none_not_error() {
        let node = element();
        assert!(node.slot("nonexistent").is_none());
        assert!(!node.has_slot("nonexistent"));
        assert_eq!(node.slots_named("nonexistent").count(), 0);
    }

    #[test]
    fn json_round_trip_preserves_structure() {
        let node = element();
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn sparse_json_fills_defaults() {
        let node: Node = serde_json::from_str(r#"{"kind":"JSNullLiteral"}"#).unwrap();
        assert_eq!(node.kind(), "JSNullLiteral");
        assert!(node.span().is_none());
        assert!(node.text().is_none());
        assert!(node.is_leaf());
    }
}
