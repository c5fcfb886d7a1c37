//! Builders for the stylesheet grammar.
//!
//! ## Conventions
//!
//! - Value-type nodes (`CSS*Type`) carry their source text verbatim, quotes
//!   included, and print it back unchanged.
//! - Selector nodes carry their name in the node text; the builder adds the
//!   sigil (`.`, `#`, `:`).
//! - Rulesets hold their selectors in `selectors` slots and their
//!   declarations in `declarations` slots.

use crate::builders::helpers::{
    block, build_slot, build_slots_with_comments, join_slots, AT_STATEMENT, SOURCE_TEXT,
};
use crate::diagnostics::FormatError;
use crate::doc::Fragment;
use crate::registry::{BuilderFn, BuilderRegistry};

// ============================================================================
// CORE
// ============================================================================

/// A whole stylesheet: top-level statements on their own lines, with a
/// trailing newline. Comments attached to a statement print on the lines
/// above it.
pub const BUILD_ROOT: BuilderFn = |node, ctx, engine| {
    if !node.has_slot("body") {
        return Ok(Fragment::nil());
    }
    let body = build_slots_with_comments(node, "body", ctx, engine)?;
    Ok(Fragment::join(Fragment::hard_line(), body).append(Fragment::hard_line()))
};

/// `selector, selector { declarations }`.
pub const BUILD_RULESET: BuilderFn = |node, ctx, engine| {
    let selectors = join_slots(
        node,
        "selectors",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?
    .group();
    let declarations = join_slots(node, "declarations", Fragment::hard_line(), ctx, engine)?;
    Ok(selectors
        .append(Fragment::space())
        .append(block(declarations)))
};

/// `name: value;`, joining multi-part values with spaces.
pub const BUILD_RULE_DECLARATION: BuilderFn = |node, ctx, engine| {
    let name = build_slot(node, "name", ctx, engine)?;
    let value = join_slots(node, "value", Fragment::space(), ctx, engine)?;
    Ok(name
        .append(Fragment::text(": "))
        .append(value)
        .append(Fragment::text(";")))
};

// ============================================================================
// KEYFRAMES
// ============================================================================

/// A keyframe selector block: `from { ... }`, `50% { ... }`.
pub const BUILD_KEYFRAMES_RULE: BuilderFn = |node, ctx, engine| {
    let name = build_slot(node, "name", ctx, engine)?;
    let declarations = join_slots(node, "declarations", Fragment::hard_line(), ctx, engine)?;
    Ok(name.append(Fragment::space()).append(block(declarations)))
};

pub const BUILD_KEYFRAMES_FROM: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::text("from"));

pub const BUILD_KEYFRAMES_TO: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::text("to"));

// ============================================================================
// SELECTORS
// ============================================================================

/// `.button`
pub const BUILD_SELECTOR_CLASS: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        ".{}",
        node.text().unwrap_or_default()
    )))
};

/// `#header`
pub const BUILD_SELECTOR_ID: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "#{}",
        node.text().unwrap_or_default()
    )))
};

/// `*`
pub const BUILD_SELECTOR_UNIVERSAL: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::text("*"));

/// `:hover`, or `:nth-child(2n)` when `params` children are present.
pub const BUILD_SELECTOR_PSEUDO_CLASS: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text(format!(":{}", node.text().unwrap_or_default()));
    if node.has_slot("params") {
        fragment = fragment
            .append(Fragment::text("("))
            .append(join_slots(node, "params", Fragment::text(", "), ctx, engine)?)
            .append(Fragment::text(")"));
    }
    Ok(fragment)
};

/// `::before`
pub const BUILD_SELECTOR_PSEUDO_ELEMENT: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "::{}",
        node.text().unwrap_or_default()
    )))
};

/// `[attr]`, `[attr=value]`; the operator lives in the node text.
pub const BUILD_SELECTOR_ATTRIBUTE: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text("[").append(build_slot(node, "name", ctx, engine)?);
    if let Some(operator) = node.text() {
        fragment = fragment
            .append(Fragment::text(operator))
            .append(build_slot(node, "value", ctx, engine)?);
    }
    Ok(fragment.append(Fragment::text("]")))
};

/// A whole compound selector: parts joined with single spaces, so
/// `div > .button` is `[tag, combinator, class]`.
pub const BUILD_SELECTOR_CHAIN: BuilderFn =
    |node, ctx, engine| join_slots(node, "parts", Fragment::space(), ctx, engine);

// ============================================================================
// VALUE TYPES
// ============================================================================

/// `url(...)`; the node text is the already-quoted location.
pub const BUILD_URL: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "url({})",
        node.text().unwrap_or_default()
    )))
};

// ============================================================================
// REGISTRATION FUNCTION
// ============================================================================

/// Registers every stylesheet builder.
pub fn register(registry: &mut BuilderRegistry) -> Result<(), FormatError> {
    // Core
    registry.register("CSSRoot", BUILD_ROOT)?;
    registry.register("CSSRuleDeclaration", BUILD_RULE_DECLARATION)?;
    registry.register("CSSRulesetStatement", BUILD_RULESET)?;

    // At-statements all derive their rule name from the kind tag
    registry.register("CSSCharSetAtStatement", AT_STATEMENT)?;
    registry.register("CSSCounterStyleAtStatement", AT_STATEMENT)?;
    registry.register("CSSDocumentAtStatement", AT_STATEMENT)?;
    registry.register("CSSFontFaceAtStatement", AT_STATEMENT)?;
    registry.register("CSSImportAtStatement", AT_STATEMENT)?;
    registry.register("CSSKeyframesAtStatement", AT_STATEMENT)?;
    registry.register("CSSMediaAtStatement", AT_STATEMENT)?;
    registry.register("CSSNamespaceAtStatement", AT_STATEMENT)?;
    registry.register("CSSPageAtStatement", AT_STATEMENT)?;
    registry.register("CSSSupportsAtStatement", AT_STATEMENT)?;
    registry.register("CSSViewportAtStatement", AT_STATEMENT)?;

    // Keyframes
    registry.register("CSSKeyframesFromKeyword", BUILD_KEYFRAMES_FROM)?;
    registry.register("CSSKeyframesRuleDeclaration", BUILD_KEYFRAMES_RULE)?;
    registry.register("CSSKeyframesToKeyword", BUILD_KEYFRAMES_TO)?;

    // Selectors
    registry.register("CSSSelectorAttribute", BUILD_SELECTOR_ATTRIBUTE)?;
    registry.register("CSSSelectorChain", BUILD_SELECTOR_CHAIN)?;
    registry.register("CSSSelectorClass", BUILD_SELECTOR_CLASS)?;
    registry.register("CSSSelectorCombinator", SOURCE_TEXT)?;
    registry.register("CSSSelectorId", BUILD_SELECTOR_ID)?;
    registry.register("CSSSelectorPseudoClass", BUILD_SELECTOR_PSEUDO_CLASS)?;
    registry.register("CSSSelectorPseudoElementSelector", BUILD_SELECTOR_PSEUDO_ELEMENT)?;
    registry.register("CSSSelectorTag", SOURCE_TEXT)?;
    registry.register("CSSSelectorUniversal", BUILD_SELECTOR_UNIVERSAL)?;

    // Value types print their source text back verbatim
    registry.register("CSSAnglePercentageType", SOURCE_TEXT)?;
    registry.register("CSSAngleType", SOURCE_TEXT)?;
    registry.register("CSSBasicShapeType", SOURCE_TEXT)?;
    registry.register("CSSBlendModeType", SOURCE_TEXT)?;
    registry.register("CSSDimensionType", SOURCE_TEXT)?;
    registry.register("CSSFrequencyPercentageType", SOURCE_TEXT)?;
    registry.register("CSSFrequencyType", SOURCE_TEXT)?;
    registry.register("CSSGradientType", SOURCE_TEXT)?;
    registry.register("CSSIdentifierType", SOURCE_TEXT)?;
    registry.register("CSSImageType", SOURCE_TEXT)?;
    registry.register("CSSIntegerType", SOURCE_TEXT)?;
    registry.register("CSSLengthPercentageType", SOURCE_TEXT)?;
    registry.register("CSSLengthType", SOURCE_TEXT)?;
    registry.register("CSSNumberType", SOURCE_TEXT)?;
    registry.register("CSSPercentageType", SOURCE_TEXT)?;
    registry.register("CSSRatioType", SOURCE_TEXT)?;
    registry.register("CSSResolutionType", SOURCE_TEXT)?;
    registry.register("CSSShapeType", SOURCE_TEXT)?;
    registry.register("CSSStringType", SOURCE_TEXT)?;
    registry.register("CSSTimePercentageType", SOURCE_TEXT)?;
    registry.register("CSSTimeType", SOURCE_TEXT)?;
    registry.register("CSSTransformFunctionType", SOURCE_TEXT)?;
    registry.register("CSSURLType", BUILD_URL)?;

    Ok(())
}
