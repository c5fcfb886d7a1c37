//! Builders for the JSX sub-grammar.
//!
//! ## Conventions
//!
//! - An element holds its tag in the `name` slot (an identifier, member
//!   expression, or namespaced name), attributes in `attributes` slots, and
//!   content in `children` slots.
//! - Elements without children self-close; the closing tag of a non-empty
//!   element reuses the formatted name, so member-expression tags close
//!   correctly.
//! - Attribute values wear their own delimiters: string literals print
//!   quoted, expression containers print braced.

use crate::builders::helpers::{build_slot, build_slots, join_slots, SOURCE_TEXT, TEXT_RUN};
use crate::diagnostics::FormatError;
use crate::doc::Fragment;
use crate::registry::{BuilderFn, BuilderRegistry};

/// `<Name attrs>children</Name>`, or `<Name attrs />` without children.
pub const BUILD_ELEMENT: BuilderFn = |node, ctx, engine| {
    let name = build_slot(node, "name", ctx, engine)?;

    let mut open = Fragment::text("<").append(name.clone());
    for attribute in build_slots(node, "attributes", ctx, engine)? {
        open = open.append(Fragment::line_or_space()).append(attribute);
    }
    let open = open.group();

    if !node.has_slot("children") {
        return Ok(open.append(Fragment::text(" />")));
    }

    let children = join_slots(node, "children", Fragment::hard_line(), ctx, engine)?;
    Ok(open
        .append(Fragment::text(">"))
        .append(Fragment::hard_line().append(children).indent())
        .append(Fragment::hard_line())
        .append(Fragment::text("</").append(name).append(Fragment::text(">"))))
};

/// `<>children</>`.
pub const BUILD_FRAGMENT: BuilderFn = |node, ctx, engine| {
    if !node.has_slot("children") {
        return Ok(Fragment::text("<></>"));
    }
    let children = join_slots(node, "children", Fragment::hard_line(), ctx, engine)?;
    Ok(Fragment::text("<>")
        .append(Fragment::hard_line().append(children).indent())
        .append(Fragment::hard_line())
        .append(Fragment::text("</>")))
};

/// `name` or `name=value`; the value node carries its own delimiters.
pub const BUILD_ATTRIBUTE: BuilderFn = |node, ctx, engine| {
    let mut fragment = build_slot(node, "name", ctx, engine)?;
    if node.has_slot("value") {
        fragment = fragment
            .append(Fragment::text("="))
            .append(build_slot(node, "value", ctx, engine)?);
    }
    Ok(fragment)
};

/// `{...argument}`
pub const BUILD_SPREAD_ATTRIBUTE: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("{...")
        .append(build_slot(node, "argument", ctx, engine)?)
        .append(Fragment::text("}")))
};

/// `{expression}`
pub const BUILD_EXPRESSION_CONTAINER: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("{")
        .append(build_slot(node, "expression", ctx, engine)?)
        .append(Fragment::text("}")))
};

/// `{...expression}` as a child position spread.
pub const BUILD_SPREAD_CHILD: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("{...")
        .append(build_slot(node, "expression", ctx, engine)?)
        .append(Fragment::text("}")))
};

/// The hole inside `{}` and `{/* comment */}` containers.
pub const BUILD_EMPTY_EXPRESSION: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::nil());

/// `object.property`
pub const BUILD_MEMBER_EXPRESSION: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "object", ctx, engine)?
        .append(Fragment::text("."))
        .append(build_slot(node, "property", ctx, engine)?))
};

/// `namespace:name`
pub const BUILD_NAMESPACED_NAME: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "namespace", ctx, engine)?
        .append(Fragment::text(":"))
        .append(build_slot(node, "name", ctx, engine)?))
};

/// Registers every JSX builder.
pub fn register(registry: &mut BuilderRegistry) -> Result<(), FormatError> {
    registry.register("JSXAttribute", BUILD_ATTRIBUTE)?;
    registry.register("JSXElement", BUILD_ELEMENT)?;
    registry.register("JSXEmptyExpression", BUILD_EMPTY_EXPRESSION)?;
    registry.register("JSXExpressionContainer", BUILD_EXPRESSION_CONTAINER)?;
    registry.register("JSXFragment", BUILD_FRAGMENT)?;
    registry.register("JSXIdentifier", SOURCE_TEXT)?;
    registry.register("JSXMemberExpression", BUILD_MEMBER_EXPRESSION)?;
    registry.register("JSXNamespacedName", BUILD_NAMESPACED_NAME)?;
    registry.register("JSXReferenceIdentifier", SOURCE_TEXT)?;
    registry.register("JSXSpreadAttribute", BUILD_SPREAD_ATTRIBUTE)?;
    registry.register("JSXSpreadChild", BUILD_SPREAD_CHILD)?;
    registry.register("JSXText", TEXT_RUN)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;
    use crate::engine::{format_node, FormatOptions};

    fn registry() -> BuilderRegistry {
        let mut registry = BuilderRegistry::new();
        register(&mut registry).unwrap();
        registry
    }

    #[test]
    fn childless_elements_self_close() {
        let node = Node::new("JSXElement")
            .with_slot("name", Node::new("JSXReferenceIdentifier").with_text("Spinner"));
        let fragment = format_node(&registry(), &node, FormatOptions::default()).unwrap();
        assert_eq!(
            fragment,
            Fragment::text("<")
                .append(Fragment::text("Spinner"))
                .group()
                .append(Fragment::text(" />"))
        );
    }

    #[test]
    fn member_expression_tags_close_with_the_full_name() {
        let name = Node::new("JSXMemberExpression")
            .with_slot("object", Node::new("JSXReferenceIdentifier").with_text("Menu"))
            .with_slot("property", Node::new("JSXIdentifier").with_text("Item"));
        let node = Node::new("JSXElement")
            .with_slot("name", name)
            .with_slot("children", Node::new("JSXText").with_text("label"));

        let fragment = format_node(&registry(), &node, FormatOptions::default()).unwrap();
        let rendered = format!("{fragment:?}");
        assert!(rendered.contains("</"));
        // Both tags carry the dotted name.
        assert_eq!(rendered.matches("Menu").count(), 2);
        assert_eq!(rendered.matches("Item").count(), 2);
    }

    #[test]
    fn attribute_values_keep_their_own_delimiters() {
        let node = Node::new("JSXAttribute")
            .with_slot("name", Node::new("JSXIdentifier").with_text("onClick"))
            .with_slot(
                "value",
                Node::new("JSXExpressionContainer")
                    .with_slot("expression", Node::new("JSXReferenceIdentifier").with_text("handler")),
            );
        let fragment = format_node(&registry(), &node, FormatOptions::default()).unwrap();
        assert_eq!(
            fragment,
            Fragment::text("onClick")
                .append(Fragment::text("="))
                .append(
                    Fragment::text("{")
                        .append(Fragment::text("handler"))
                        .append(Fragment::text("}"))
                )
        );
    }

    #[test]
    fn empty_fragments_stay_flat() {
        let node = Node::new("JSXFragment");
        let fragment = format_node(&registry(), &node, FormatOptions::default()).unwrap();
        assert_eq!(fragment, Fragment::text("<></>"));
    }
}
