//! Builders for the kinds every grammar shares: comment nodes and the
//! test-support wrapper.

use crate::builders::helpers::SEQUENCE_CHILDREN;
use crate::diagnostics::FormatError;
use crate::doc::Fragment;
use crate::registry::{BuilderFn, BuilderRegistry};

/// A `// ...` comment node; the text is everything after the slashes.
pub const BUILD_COMMENT_LINE: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "//{}",
        node.text().unwrap_or_default()
    )))
};

/// A `/* ... */` comment node; the text is everything between the markers.
pub const BUILD_COMMENT_BLOCK: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "/*{}*/",
        node.text().unwrap_or_default()
    )))
};

/// Registers the grammar-independent builders.
pub fn register(registry: &mut BuilderRegistry) -> Result<(), FormatError> {
    registry.register("CommentBlock", BUILD_COMMENT_BLOCK)?;
    registry.register("CommentLine", BUILD_COMMENT_LINE)?;
    // Transparent wrapper test harnesses use to give a fixture a parent;
    // it contributes nothing of its own to the output.
    registry.register("MockParent", SEQUENCE_CHILDREN)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;
    use crate::engine::{format_node, FormatOptions};

    #[test]
    fn comment_nodes_print_in_their_lexical_shape() {
        let mut registry = BuilderRegistry::new();
        register(&mut registry).unwrap();

        let line = Node::new("CommentLine").with_text(" note");
        assert_eq!(
            format_node(&registry, &line, FormatOptions::default()).unwrap(),
            Fragment::text("// note")
        );

        let blk = Node::new("CommentBlock").with_text(" note ");
        assert_eq!(
            format_node(&registry, &blk, FormatOptions::default()).unwrap(),
            Fragment::text("/* note */")
        );
    }

    #[test]
    fn mock_parent_is_transparent() {
        let mut registry = BuilderRegistry::new();
        register(&mut registry).unwrap();

        let tree = Node::new("MockParent")
            .with_slot("child", Node::new("CommentLine").with_text("a"))
            .with_slot("child", Node::new("CommentLine").with_text("b"));
        let fragment = format_node(&registry, &tree, FormatOptions::default()).unwrap();
        assert_eq!(
            fragment,
            Fragment::list(vec![Fragment::text("//a"), Fragment::text("//b")])
        );
    }
}
