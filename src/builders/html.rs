//! Builders for the markup grammar.
//!
//! ## Conventions
//!
//! - An element holds its tag name in the `name` slot, attributes in
//!   `attributes` slots, and content in `children` slots.
//! - `HTMLString` nodes carry the raw attribute value; the builder adds the
//!   double quotes, normalizing however the source quoted it.
//! - Text runs collapse interior whitespace unless the
//!   `preserve_markup_whitespace` option is set; whitespace-sensitive
//!   elements additionally keep their children inline instead of putting
//!   them on fresh indented lines.

use crate::ast::query::slot_text;
use crate::builders::helpers::{build_slot, build_slots, join_slots, SOURCE_TEXT, TEXT_RUN};
use crate::diagnostics::FormatError;
use crate::doc::Fragment;
use crate::registry::{BuilderFn, BuilderRegistry};

/// Elements that never have children and print self-closing.
const VOID_ELEMENTS: &[&str] = &["area", "base", "br", "col", "hr", "img", "input", "link", "meta"];

/// Elements whose text content is significant and must not be re-wrapped.
const WHITESPACE_SENSITIVE: &[&str] = &["pre", "textarea"];

/// A whole document: top-level nodes on their own lines, with a trailing
/// newline.
pub const BUILD_ROOT: BuilderFn = |node, ctx, engine| {
    if !node.has_slot("children") {
        return Ok(Fragment::nil());
    }
    let children = join_slots(node, "children", Fragment::hard_line(), ctx, engine)?;
    Ok(children.append(Fragment::hard_line()))
};

/// `<name attrs>children</name>`, with the attribute list breakable and the
/// children indented on their own lines. Void elements self-close;
/// whitespace-sensitive elements keep their children inline.
pub const BUILD_ELEMENT: BuilderFn = |node, ctx, engine| {
    let name = slot_text(node, "name").unwrap_or_default().to_string();

    let mut open = Fragment::text(format!("<{name}"));
    for attribute in build_slots(node, "attributes", ctx, engine)? {
        open = open.append(Fragment::line_or_space()).append(attribute);
    }
    let open = open.group();

    if VOID_ELEMENTS.contains(&name.as_str()) {
        return Ok(open.append(Fragment::text(" />")));
    }

    let close = Fragment::text(format!("</{name}>"));
    if !node.has_slot("children") {
        return Ok(open.append(Fragment::text(">")).append(close));
    }

    if WHITESPACE_SENSITIVE.contains(&name.as_str()) {
        let children = Fragment::list(build_slots(node, "children", ctx, engine)?);
        return Ok(open
            .append(Fragment::text(">"))
            .append(children)
            .append(close));
    }

    let children = join_slots(node, "children", Fragment::hard_line(), ctx, engine)?;
    Ok(open
        .append(Fragment::text(">"))
        .append(Fragment::hard_line().append(children).indent())
        .append(Fragment::hard_line())
        .append(close))
};

/// `name="value"`, or a bare `name` for value-less attributes.
pub const BUILD_ATTRIBUTE: BuilderFn = |node, ctx, engine| {
    let mut fragment = build_slot(node, "name", ctx, engine)?;
    if node.has_slot("value") {
        fragment = fragment
            .append(Fragment::text("="))
            .append(build_slot(node, "value", ctx, engine)?);
    }
    Ok(fragment)
};

/// `<!DOCTYPE html>`; the text names the document type.
pub const BUILD_DOCTYPE: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "<!DOCTYPE {}>",
        node.text().unwrap_or("html")
    )))
};

/// A double-quoted attribute value; the node text is raw.
pub const BUILD_STRING: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "\"{}\"",
        node.text().unwrap_or_default()
    )))
};

/// Registers every markup builder.
pub fn register(registry: &mut BuilderRegistry) -> Result<(), FormatError> {
    registry.register("HTMLAttribute", BUILD_ATTRIBUTE)?;
    registry.register("HTMLDoctypeTag", BUILD_DOCTYPE)?;
    registry.register("HTMLElement", BUILD_ELEMENT)?;
    registry.register("HTMLIdentifier", SOURCE_TEXT)?;
    registry.register("HTMLRoot", BUILD_ROOT)?;
    registry.register("HTMLString", BUILD_STRING)?;
    registry.register("HTMLText", TEXT_RUN)?;
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

    fn element(name: &str) -> Node {
        Node::new("HTMLElement").with_slot("name", Node::new("HTMLIdentifier").with_text(name))
    }

    #[test]
    fn childless_elements_print_adjacent_tags() {
        let fragment =
            format_node(&registry(), &element("div"), FormatOptions::default()).unwrap();
        assert_eq!(
            fragment,
            Fragment::text("<div")
                .group()
                .append(Fragment::text(">"))
                .append(Fragment::text("</div>"))
        );
    }

    #[test]
    fn void_elements_self_close() {
        let node = element("br");
        let fragment = format_node(&registry(), &node, FormatOptions::default()).unwrap();
        assert_eq!(
            fragment,
            Fragment::text("<br").group().append(Fragment::text(" />"))
        );
    }

    #[test]
    fn attributes_normalize_to_double_quotes() {
        let node = Node::new("HTMLAttribute")
            .with_slot("name", Node::new("HTMLIdentifier").with_text("class"))
            .with_slot("value", Node::new("HTMLString").with_text("primary"));
        let fragment = format_node(&registry(), &node, FormatOptions::default()).unwrap();
        assert_eq!(
            fragment,
            Fragment::text("class")
                .append(Fragment::text("="))
                .append(Fragment::text("\"primary\""))
        );
    }

    #[test]
    fn text_collapses_unless_preservation_is_requested() {
        let node = Node::new("HTMLText").with_text("  hello \n world  ");
        let collapsed = format_node(&registry(), &node, FormatOptions::default()).unwrap();
        assert_eq!(collapsed, Fragment::text("hello world"));

        let options = FormatOptions {
            preserve_markup_whitespace: true,
            ..FormatOptions::default()
        };
        let preserved = format_node(&registry(), &node, options).unwrap();
        assert_eq!(preserved, Fragment::text("  hello \n world  "));
    }

    #[test]
    fn preformatted_children_stay_inline() {
        let node = element("pre").with_slot("children", Node::new("HTMLText").with_text("a\n b"));
        let options = FormatOptions {
            preserve_markup_whitespace: true,
            ..FormatOptions::default()
        };
        let fragment = format_node(&registry(), &node, options).unwrap();
        assert_eq!(
            fragment,
            Fragment::text("<pre")
                .group()
                .append(Fragment::text(">"))
                .append(Fragment::list(vec![Fragment::text("a\n b")]))
                .append(Fragment::text("</pre>"))
        );
    }
}
