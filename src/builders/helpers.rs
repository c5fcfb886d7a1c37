//! # Builder Helper Infrastructure
//!
//! Shared templates and utilities used across every grammar's builders:
//! slot-driven child formatting, delimiter and block layout, comment
//! emission, and the kind-derived emitters that whole node families bind to
//! directly.
//!
//! ## Design Principles
//!
//! - **Canonical Nodes**: Builders assume the parser handed them canonical
//!   trees. A missing slot prints as nothing; it is never an error here.
//! - **Single Responsibility**: Each helper does one layout job.
//! - **Composition Through the Engine**: Child nodes are always formatted by
//!   calling back into the engine, never by peeking at sibling builders.

use crate::ast::Node;
use crate::diagnostics::FormatError;
use crate::doc::Fragment;
use crate::engine::{Comment, CommentKind, FormatEngine, PrintContext};
use crate::registry::BuilderFn;

// ============================================================================
// SLOT-DRIVEN CHILD FORMATTING
// ============================================================================

/// Formats the child in slot `name`, or nothing when the slot is absent.
pub fn build_slot(
    node: &Node,
    name: &str,
    ctx: &mut PrintContext,
    engine: &FormatEngine,
) -> Result<Fragment, FormatError> {
    let Some(child) = node.slot(name) else {
        return Ok(Fragment::nil());
    };
    engine.build(child, ctx)
}

/// Formats every child in slots named `name`, in declaration order.
pub fn build_slots(
    node: &Node,
    name: &str,
    ctx: &mut PrintContext,
    engine: &FormatEngine,
) -> Result<Vec<Fragment>, FormatError> {
    node.slots_named(name)
        .map(|child| engine.build(child, ctx))
        .collect()
}

/// Formats the children in slots named `name` and joins them with
/// `separator`.
pub fn join_slots(
    node: &Node,
    name: &str,
    separator: Fragment,
    ctx: &mut PrintContext,
    engine: &FormatEngine,
) -> Result<Fragment, FormatError> {
    Ok(Fragment::join(
        separator,
        build_slots(node, name, ctx, engine)?,
    ))
}

/// Like [`build_slots`], but prints each child's attached comments on the
/// lines above it. Statement sequences use this so source comments survive
/// formatting.
pub fn build_slots_with_comments(
    node: &Node,
    name: &str,
    ctx: &mut PrintContext,
    engine: &FormatEngine,
) -> Result<Vec<Fragment>, FormatError> {
    let mut parts = Vec::new();
    for child in node.slots_named(name) {
        let comments = leading_comments(child, ctx);
        let formatted = engine.build(child, ctx)?;
        parts.push(if comments.is_nil() {
            formatted
        } else {
            comments.append(formatted)
        });
    }
    Ok(parts)
}

// ============================================================================
// DELIMITER AND BLOCK LAYOUT
// ============================================================================

/// Wraps `inner` in `open`/`close` delimiters as a breakable group: flat
/// when it fits, otherwise broken with `inner` indented one level.
pub fn delimited(open: &str, inner: Fragment, close: &str) -> Fragment {
    Fragment::list(vec![
        Fragment::text(open),
        Fragment::line_or_nil().append(inner).indent(),
        Fragment::line_or_nil(),
        Fragment::text(close),
    ])
    .group()
}

/// A brace-delimited block with its contents on their own indented lines.
/// Empty contents collapse to `{}`.
pub fn block(inner: Fragment) -> Fragment {
    if is_empty_fragment(&inner) {
        return Fragment::text("{}");
    }
    Fragment::text("{")
        .append(Fragment::hard_line().append(inner).indent())
        .append(Fragment::hard_line())
        .append(Fragment::text("}"))
}

fn is_empty_fragment(fragment: &Fragment) -> bool {
    match fragment {
        Fragment::Nil => true,
        Fragment::Seq(parts) => parts.is_empty(),
        _ => false,
    }
}

// ============================================================================
// COMMENT EMISSION
// ============================================================================

/// Renders one source comment in its original lexical shape.
pub fn comment_fragment(comment: &Comment) -> Fragment {
    match comment.kind {
        CommentKind::Line => Fragment::text(format!("//{}", comment.text)),
        CommentKind::Block => Fragment::text(format!("/*{}*/", comment.text)),
    }
}

/// The comments attached to `node`, each on its own line ahead of the node.
/// Nothing when no comments are attached.
pub fn leading_comments(node: &Node, ctx: &PrintContext) -> Fragment {
    let attached = ctx.comments().attached_to(node.span());
    if attached.is_empty() {
        return Fragment::nil();
    }

    let mut parts = Vec::with_capacity(attached.len() * 2);
    for comment in attached {
        parts.push(comment_fragment(comment));
        parts.push(Fragment::hard_line());
    }
    Fragment::list(parts)
}

// ============================================================================
// TEXT UTILITIES
// ============================================================================

/// Collapses every whitespace run to a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// KIND-DERIVED EMITTERS
// ============================================================================
//
// Whole families of node kinds share one of these emitters; the emitter
// derives what to print from the kind tag itself, so each family member
// registers the same function.

/// Prints the node's captured source text verbatim; nothing when absent.
pub const SOURCE_TEXT: BuilderFn = |node, _ctx, _engine| {
    Ok(match node.text() {
        Some(text) => Fragment::text(text),
        None => Fragment::nil(),
    })
};

/// Formats every child slot in declaration order, concatenated.
pub const SEQUENCE_CHILDREN: BuilderFn = |node, ctx, engine| {
    let mut parts = Vec::with_capacity(node.child_count());
    for (_name, child) in node.children() {
        parts.push(engine.build(child, ctx)?);
    }
    Ok(Fragment::list(parts))
};

/// A keyword statement derived from the kind tag, with an optional `label`
/// or `argument` child: `JSBreakStatement` prints `break;` or `break outer;`,
/// `JSReturnStatement` prints `return;` or `return value;`.
pub const KEYWORD_STATEMENT: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text(statement_keyword_of(node.kind()));
    for slot in ["label", "argument"] {
        if node.has_slot(slot) {
            fragment = fragment
                .append(Fragment::space())
                .append(build_slot(node, slot, ctx, engine)?);
        }
    }
    Ok(fragment.append(Fragment::text(";")))
};

/// A type keyword derived from the kind tag:
/// `TSNumberKeywordTypeAnnotation` prints `number`.
pub const KEYWORD_TYPE: BuilderFn =
    |node, _ctx, _engine| Ok(Fragment::text(type_keyword_of(node.kind())));

/// A markup text run: interior whitespace collapses to single spaces unless
/// the caller asked to preserve it.
pub const TEXT_RUN: BuilderFn = |node, ctx, _engine| {
    let text = node.text().unwrap_or_default();
    if ctx.options().preserve_markup_whitespace {
        return Ok(Fragment::text(text));
    }
    Ok(Fragment::text(collapse_whitespace(text)))
};

/// An at-rule derived from the kind tag: `CSSFontFaceAtStatement` prints
/// `@font-face`, followed by its prelude and either a block or `;`.
pub const AT_STATEMENT: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text(at_rule_of(node.kind()));
    if node.has_slot("prelude") {
        fragment = fragment
            .append(Fragment::space())
            .append(build_slot(node, "prelude", ctx, engine)?);
    }
    if node.has_slot("body") {
        let body = join_slots(node, "body", Fragment::hard_line(), ctx, engine)?;
        fragment = fragment.append(Fragment::space()).append(block(body));
    } else {
        fragment = fragment.append(Fragment::text(";"));
    }
    Ok(fragment)
};

/// `JSBreakStatement` → `break`.
fn statement_keyword_of(kind: &str) -> String {
    kind.trim_start_matches("JS")
        .trim_end_matches("Statement")
        .to_ascii_lowercase()
}

/// `TSNumberKeywordTypeAnnotation` → `number`.
fn type_keyword_of(kind: &str) -> String {
    kind.trim_start_matches("TS")
        .trim_end_matches("KeywordTypeAnnotation")
        .to_ascii_lowercase()
}

/// `CSSFontFaceAtStatement` → `@font-face`.
fn at_rule_of(kind: &str) -> String {
    let stem = kind.trim_start_matches("CSS").trim_end_matches("AtStatement");
    // `@charset` is one word in CSS even though the tag camel-cases it.
    if stem == "CharSet" {
        return "@charset".to_string();
    }
    let mut name = String::from("@");
    for (index, ch) in stem.char_indices() {
        if ch.is_ascii_uppercase() {
            if index > 0 {
                name.push('-');
            }
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FormatOptions;
    use crate::registry::BuilderRegistry;

    #[test]
    fn statement_keywords_derive_from_the_tag() {
        assert_eq!(statement_keyword_of("JSBreakStatement"), "break");
        assert_eq!(statement_keyword_of("JSContinueStatement"), "continue");
        assert_eq!(statement_keyword_of("JSDebuggerStatement"), "debugger");
        assert_eq!(statement_keyword_of("JSReturnStatement"), "return");
        assert_eq!(statement_keyword_of("JSThrowStatement"), "throw");
    }

    #[test]
    fn type_keywords_derive_from_the_tag() {
        assert_eq!(type_keyword_of("TSAnyKeywordTypeAnnotation"), "any");
        assert_eq!(type_keyword_of("TSBigIntKeywordTypeAnnotation"), "bigint");
        assert_eq!(
            type_keyword_of("TSUndefinedKeywordTypeAnnotation"),
            "undefined"
        );
    }

    #[test]
    fn at_rules_kebab_case_the_tag() {
        assert_eq!(at_rule_of("CSSMediaAtStatement"), "@media");
        assert_eq!(at_rule_of("CSSFontFaceAtStatement"), "@font-face");
        assert_eq!(at_rule_of("CSSCounterStyleAtStatement"), "@counter-style");
        assert_eq!(at_rule_of("CSSCharSetAtStatement"), "@charset");
    }

    #[test]
    fn collapse_whitespace_folds_runs_and_trims() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn missing_slots_print_as_nothing() {
        let registry = BuilderRegistry::new();
        let engine = FormatEngine::new(&registry);
        let mut ctx = PrintContext::new(FormatOptions::default());

        let node = Node::new("JSReturnStatement");
        let fragment = build_slot(&node, "argument", &mut ctx, &engine).unwrap();
        assert!(fragment.is_nil());
    }

    #[test]
    fn empty_blocks_collapse_to_braces() {
        assert_eq!(block(Fragment::nil()), Fragment::text("{}"));
        assert_eq!(block(Fragment::list(Vec::new())), Fragment::text("{}"));
        assert_ne!(block(Fragment::text("a;")), Fragment::text("{}"));
    }

    #[test]
    fn comment_fragments_keep_their_lexical_shape() {
        assert_eq!(
            comment_fragment(&Comment::line(" note")),
            Fragment::text("// note")
        );
        assert_eq!(
            comment_fragment(&Comment::block(" note ")),
            Fragment::text("/* note */")
        );
    }
}
