//! Failure modes of registry population and dispatch.
//!
//! There are exactly two: registering a second builder for a kind that
//! already has one, and dispatching a node whose kind has no builder. Both
//! are programming or configuration mistakes, not recoverable runtime
//! conditions. Callers surface them and stop; nothing in this crate retries
//! or falls back past either.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::{Node, Span};

/// An error raised while populating the builder registry or dispatching a
/// node through it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FormatError {
    /// Two builders were registered for the same node kind. Raised by
    /// [`BuilderRegistry::register`](crate::registry::BuilderRegistry::register)
    /// and treated as fatal by registry construction: a silently shadowed
    /// builder would misformat every node of that kind.
    #[error("duplicate builder registration for node kind `{kind}`")]
    #[diagnostic(
        code(galley::registry::duplicate_registration),
        help("each node kind takes exactly one builder; remove the extra registration")
    )]
    DuplicateRegistration { kind: String },

    /// Dispatch reached a node whose kind has no registered builder. The
    /// offending tag is carried verbatim, with the node's source position
    /// when the parser recorded one.
    #[error("no builder registered for node kind `{kind}`")]
    #[diagnostic(
        code(galley::dispatch::unknown_node_kind),
        help("the grammar produced a node this registry cannot format; register a builder for it")
    )]
    UnknownNodeKind { kind: String, span: Option<Span> },
}

impl FormatError {
    /// Builds the duplicate-registration fault for `kind`.
    pub fn duplicate_registration(kind: impl Into<String>) -> FormatError {
        FormatError::DuplicateRegistration { kind: kind.into() }
    }

    /// Builds the unknown-kind fault for `node`, capturing its kind tag and
    /// source position.
    pub fn unknown_node_kind(node: &Node) -> FormatError {
        FormatError::UnknownNodeKind {
            kind: node.kind().to_string(),
            span: node.span().cloned(),
        }
    }

    /// The node-kind tag this error is about.
    pub fn kind(&self) -> &str {
        match self {
            FormatError::DuplicateRegistration { kind } => kind,
            FormatError::UnknownNodeKind { kind, .. } => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use miette::Report;

    use super::*;

    #[test]
    fn duplicate_registration_names_the_kind() {
        let err = FormatError::duplicate_registration("JSIfStatement");
        assert_eq!(err.kind(), "JSIfStatement");
        assert!(err.to_string().contains("JSIfStatement"));
    }

    #[test]
    fn unknown_node_kind_captures_tag_and_position() {
        let node = Node::new("JSMysteryNode").with_span(Span::new(14, 22));
        let err = FormatError::unknown_node_kind(&node);
        assert_eq!(err.kind(), "JSMysteryNode");
        assert_eq!(
            err,
            FormatError::UnknownNodeKind {
                kind: "JSMysteryNode".to_string(),
                span: Some(Span::new(14, 22)),
            }
        );
    }

    #[test]
    fn unknown_node_kind_tolerates_missing_position() {
        let node = Node::new("HTMLElement");
        let err = FormatError::unknown_node_kind(&node);
        assert_eq!(
            err,
            FormatError::UnknownNodeKind {
                kind: "HTMLElement".to_string(),
                span: None,
            }
        );
    }

    #[test]
    fn reports_carry_diagnostic_codes() {
        let report = Report::new(FormatError::duplicate_registration("CSSRoot"));
        let rendered = format!("{report:?}");
        assert!(rendered.contains("galley::registry::duplicate_registration"));

        let report = Report::new(FormatError::unknown_node_kind(&Node::new("CSSRoot")));
        let rendered = format!("{report:?}");
        assert!(rendered.contains("galley::dispatch::unknown_node_kind"));
    }
}
