//! # Galley: Dispatch Engine
//!
//! Drives formatting over a populated [`BuilderRegistry`]: read the node's
//! kind tag, resolve its builder, invoke it, and hand back the fragment the
//! builder produced, unchanged. The engine adds no layout decisions of its
//! own; every formatting opinion lives in a builder.
//!
//! Population happens before the first dispatch and nothing mutates the
//! registry afterwards, so dispatch takes the registry by shared reference
//! and never locks. Builders recurse through [`FormatEngine::build`] for
//! their children, which means call depth mirrors tree depth exactly; a
//! pathologically deep tree exhausts the thread stack, and no depth counter
//! is kept to dress that up.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ast::{Node, Span};
use crate::diagnostics::FormatError;
use crate::doc::Fragment;
use crate::registry::BuilderRegistry;

// ============================================================================
// FORMAT OPTIONS - Caller-facing layout knobs
// ============================================================================

/// Layout preferences threaded to every builder through the print context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Preferred maximum line width, advisory for group breaking.
    pub line_width: usize,
    /// Keep markup text runs exactly as written instead of collapsing
    /// whitespace.
    pub preserve_markup_whitespace: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            line_width: 80,
            preserve_markup_whitespace: false,
        }
    }
}

// ============================================================================
// COMMENTS - Trivia carried outside the node tree
// ============================================================================

/// The lexical shape of a source comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
}

/// A source comment the parser lifted out of the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: String,
}

impl Comment {
    /// A `// ...` style comment.
    pub fn line(text: impl Into<String>) -> Comment {
        Comment {
            kind: CommentKind::Line,
            text: text.into(),
        }
    }

    /// A `/* ... */` style comment.
    pub fn block(text: impl Into<String>) -> Comment {
        Comment {
            kind: CommentKind::Block,
            text: text.into(),
        }
    }
}

/// Comments indexed by the source offset of the node they attach to.
///
/// Nodes do not own their comments; the parser attaches each comment to the
/// start offset of the node it should print with, and builders ask the store
/// at dispatch time.
#[derive(Debug, Clone, Default)]
pub struct CommentStore {
    attached: HashMap<usize, Vec<Comment>>,
}

impl CommentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `comment` to the node starting at `offset`, after any
    /// comments already attached there.
    pub fn attach(&mut self, offset: usize, comment: Comment) {
        self.attached.entry(offset).or_default().push(comment);
    }

    /// The comments attached to a node with source position `span`, in
    /// attachment order. Nodes without a recorded position have no comments.
    pub fn attached_to(&self, span: Option<&Span>) -> &[Comment] {
        let Some(span) = span else { return &[] };
        self.attached
            .get(&span.start)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True when no comment is attached anywhere.
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

// ============================================================================
// PRINT CONTEXT - Mutable formatting state threaded through dispatch
// ============================================================================

/// Per-format mutable state: options, the comment store, and the ancestor
/// chain of the node currently being built.
///
/// The engine pushes a node's kind onto the ancestor chain before invoking
/// its builder and pops it after, so inside a builder the chain always ends
/// with the node being built.
pub struct PrintContext {
    options: FormatOptions,
    comments: CommentStore,
    ancestors: Vec<String>,
}

impl PrintContext {
    /// Fresh context with no comments.
    pub fn new(options: FormatOptions) -> Self {
        Self::with_comments(options, CommentStore::new())
    }

    /// Fresh context over a parser-populated comment store.
    pub fn with_comments(options: FormatOptions, comments: CommentStore) -> Self {
        Self {
            options,
            comments,
            ancestors: Vec::new(),
        }
    }

    /// The layout options for this format.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// The comment store for this format.
    pub fn comments(&self) -> &CommentStore {
        &self.comments
    }

    /// Kind tags from the root down to the node currently being built.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        self.ancestors.iter().map(String::as_str)
    }

    /// The kind of the node currently being built.
    pub fn current_kind(&self) -> Option<&str> {
        self.ancestors.last().map(String::as_str)
    }

    /// The kind of the parent of the node currently being built.
    pub fn parent_kind(&self) -> Option<&str> {
        let len = self.ancestors.len();
        if len < 2 {
            return None;
        }
        Some(&self.ancestors[len - 2])
    }

    /// How deep the current node sits: 1 for the dispatch root.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    pub(crate) fn push_ancestor(&mut self, kind: &str) {
        self.ancestors.push(kind.to_string());
    }

    pub(crate) fn pop_ancestor(&mut self) {
        self.ancestors.pop();
    }
}

// ============================================================================
// FORMAT ENGINE - Recursive dispatch over the registry
// ============================================================================

/// The dispatch handle builders use to format child nodes.
///
/// Builders never touch the registry directly; they receive an engine
/// reference and call [`build`](Self::build) for every child, which keeps
/// registry access in one place.
pub struct FormatEngine<'r> {
    registry: &'r BuilderRegistry,
}

impl<'r> FormatEngine<'r> {
    /// Wraps a populated registry for dispatch.
    pub fn new(registry: &'r BuilderRegistry) -> Self {
        Self { registry }
    }

    /// The registry this engine dispatches through.
    pub fn registry(&self) -> &BuilderRegistry {
        self.registry
    }

    /// Formats one node: resolve its kind to a builder and invoke it.
    ///
    /// Fails with [`FormatError::UnknownNodeKind`] when the kind has no
    /// builder; the error carries the offending tag and the node's source
    /// position when one was recorded. The fragment a builder returns is
    /// passed back untouched.
    pub fn build(&self, node: &Node, ctx: &mut PrintContext) -> Result<Fragment, FormatError> {
        // Resolve before touching any context state.
        let Some(builder) = self.registry.lookup(node.kind()) else {
            return Err(FormatError::unknown_node_kind(node));
        };

        ctx.push_ancestor(node.kind());
        let result = builder(node, ctx, self);
        ctx.pop_ancestor();
        result
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Main formatting entry point: dispatches `node` through `registry` with a
/// fresh, comment-free context.
pub fn format_node(
    registry: &BuilderRegistry,
    node: &Node,
    options: FormatOptions,
) -> Result<Fragment, FormatError> {
    let mut context = PrintContext::new(options);
    let engine = FormatEngine::new(registry);
    engine.build(node, &mut context)
}
