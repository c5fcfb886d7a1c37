//! Builders for the typed grammar.
//!
//! ## Conventions
//!
//! - Type positions live in `annotation` slots, expression positions in
//!   `expression` slots, and signature return types in `return` slots.
//! - Union and intersection members live in `types` slots; interface,
//!   enum, and object-type members in `members` slots.
//! - The fourteen `TS*KeywordTypeAnnotation` kinds and the literal type
//!   annotations bind shared emitters; everything else has shape of its
//!   own.

use crate::builders::helpers::{
    block, build_slot, delimited, join_slots, KEYWORD_TYPE, SOURCE_TEXT,
};
use crate::diagnostics::FormatError;
use crate::doc::Fragment;
use crate::registry::{BuilderFn, BuilderRegistry};

// ============================================================================
// TYPE EXPRESSIONS
// ============================================================================

/// `T[]`
pub const BUILD_ARRAY_TYPE: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "element", ctx, engine)?.append(Fragment::text("[]")))
};

/// `A | B | C`
pub const BUILD_UNION: BuilderFn =
    |node, ctx, engine| Ok(join_slots(node, "types", Fragment::text(" | "), ctx, engine)?.group());

/// `A & B`
pub const BUILD_INTERSECTION: BuilderFn =
    |node, ctx, engine| Ok(join_slots(node, "types", Fragment::text(" & "), ctx, engine)?.group());

/// `[A, B, C]`
pub const BUILD_TUPLE: BuilderFn = |node, ctx, engine| {
    let elements = join_slots(
        node,
        "elements",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    Ok(delimited("[", elements, "]"))
};

/// A tuple member, labeled (`name: T`) or bare (`T`).
pub const BUILD_TUPLE_ELEMENT: BuilderFn = |node, ctx, engine| {
    let annotation = build_slot(node, "annotation", ctx, engine)?;
    if !node.has_slot("name") {
        return Ok(annotation);
    }
    Ok(build_slot(node, "name", ctx, engine)?
        .append(Fragment::text(": "))
        .append(annotation))
};

/// `(T)`
pub const BUILD_PARENTHESIZED: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("(")
        .append(build_slot(node, "annotation", ctx, engine)?)
        .append(Fragment::text(")")))
};

/// `{ a: string; b: number }`
pub const BUILD_OBJECT_TYPE: BuilderFn = |node, ctx, engine| {
    let members = join_slots(
        node,
        "members",
        Fragment::text(";").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    Ok(delimited("{", members, "}"))
};

/// `a.b`
pub const BUILD_QUALIFIED_NAME: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "left", ctx, engine)?
        .append(Fragment::text("."))
        .append(build_slot(node, "right", ctx, engine)?))
};

/// A named type, with its arguments when instantiated: `Map<K, V>`.
pub const BUILD_TYPE_REFERENCE: BuilderFn = |node, ctx, engine| {
    let mut fragment = build_slot(node, "name", ctx, engine)?;
    if node.has_slot("arguments") {
        fragment = fragment.append(build_slot(node, "arguments", ctx, engine)?);
    }
    Ok(fragment)
};

/// `check extends X ? T : F`
pub const BUILD_CONDITIONAL_TYPE: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "check", ctx, engine)?
        .append(Fragment::text(" extends "))
        .append(build_slot(node, "extends", ctx, engine)?)
        .append(Fragment::text(" ? "))
        .append(build_slot(node, "true", ctx, engine)?)
        .append(Fragment::text(" : "))
        .append(build_slot(node, "false", ctx, engine)?))
};

/// `{ [K in Keys]: T }`
pub const BUILD_MAPPED_TYPE: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text("{ [")
        .append(build_slot(node, "parameter", ctx, engine)?)
        .append(Fragment::text(" in "))
        .append(build_slot(node, "container", ctx, engine)?)
        .append(Fragment::text("]"));
    if node.has_slot("annotation") {
        fragment = fragment
            .append(Fragment::text(": "))
            .append(build_slot(node, "annotation", ctx, engine)?);
    }
    Ok(fragment.append(Fragment::text(" }")))
};

/// `keyof T`, `readonly T`; the operator lives in the node text.
pub const BUILD_TYPE_OPERATOR: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text(node.text().unwrap_or_default())
        .append(Fragment::space())
        .append(build_slot(node, "annotation", ctx, engine)?))
};

/// `infer T`
pub const BUILD_INFER: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("infer ").append(build_slot(node, "parameter", ctx, engine)?))
};

/// `typeof value`
pub const BUILD_TYPE_QUERY: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("typeof ").append(build_slot(node, "argument", ctx, engine)?))
};

/// `value is T`, or `asserts value is T` with an `asserts` marker slot.
pub const BUILD_TYPE_PREDICATE: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::nil();
    if node.has_slot("asserts") {
        fragment = fragment.append(Fragment::text("asserts "));
    }
    fragment = fragment.append(build_slot(node, "parameter", ctx, engine)?);
    if node.has_slot("annotation") {
        fragment = fragment
            .append(Fragment::text(" is "))
            .append(build_slot(node, "annotation", ctx, engine)?);
    }
    Ok(fragment)
};

/// `obj[index]`
pub const BUILD_INDEXED_ACCESS: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "object", ctx, engine)?
        .append(Fragment::text("["))
        .append(build_slot(node, "index", ctx, engine)?)
        .append(Fragment::text("]")))
};

/// `import("module").Qualifier`
pub const BUILD_IMPORT_TYPE: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text("import(")
        .append(build_slot(node, "argument", ctx, engine)?)
        .append(Fragment::text(")"));
    if node.has_slot("qualifier") {
        fragment = fragment
            .append(Fragment::text("."))
            .append(build_slot(node, "qualifier", ctx, engine)?);
    }
    Ok(fragment)
};

/// `this` in type position.
pub const BUILD_THIS_TYPE: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::text("this"));

/// `(params) => Return`
pub const BUILD_FUNCTION_TYPE: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "meta", ctx, engine)?
        .append(Fragment::text(" => "))
        .append(build_slot(node, "return", ctx, engine)?))
};

/// `new (params) => Instance`
pub const BUILD_CONSTRUCTOR_TYPE: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("new ")
        .append(build_slot(node, "meta", ctx, engine)?)
        .append(Fragment::text(" => "))
        .append(build_slot(node, "return", ctx, engine)?))
};

/// `Base<Args>` in heritage position.
pub const BUILD_EXPRESSION_WITH_TYPE_ARGUMENTS: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "expression", ctx, engine)?
        .append(build_slot(node, "arguments", ctx, engine)?))
};

// ============================================================================
// EXPRESSION-LEVEL TYPE SYNTAX
// ============================================================================

/// `expr as T`; serves both the expression and assignment positions.
pub const BUILD_AS: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "expression", ctx, engine)?
        .append(Fragment::text(" as "))
        .append(build_slot(node, "annotation", ctx, engine)?))
};

/// `expr!`; serves both the expression and assignment positions.
pub const BUILD_NON_NULL: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "expression", ctx, engine)?.append(Fragment::text("!")))
};

/// `<T>expr`; serves both the expression and assignment positions.
pub const BUILD_TYPE_ASSERTION: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("<")
        .append(build_slot(node, "annotation", ctx, engine)?)
        .append(Fragment::text(">"))
        .append(build_slot(node, "expression", ctx, engine)?))
};

// ============================================================================
// SIGNATURES AND MEMBERS
// ============================================================================

/// `<A, B>`; serves both parameter declarations and instantiations.
pub const BUILD_ANGLE_BRACKETED: BuilderFn = |node, ctx, engine| {
    let params = join_slots(node, "params", Fragment::text(", "), ctx, engine)?;
    Ok(Fragment::text("<").append(params).append(Fragment::text(">")))
};

/// `T`, `T extends C`, `T = D`.
pub const BUILD_TYPE_PARAMETER: BuilderFn = |node, ctx, engine| {
    let mut fragment = build_slot(node, "name", ctx, engine)?;
    if node.has_slot("constraint") {
        fragment = fragment
            .append(Fragment::text(" extends "))
            .append(build_slot(node, "constraint", ctx, engine)?);
    }
    if node.has_slot("default") {
        fragment = fragment
            .append(Fragment::text(" = "))
            .append(build_slot(node, "default", ctx, engine)?);
    }
    Ok(fragment)
};

/// The shared parameter-list head of every signature: `<T>(a, b)`.
pub const BUILD_SIGNATURE_META: BuilderFn = |node, ctx, engine| {
    let params = join_slots(
        node,
        "params",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    Ok(build_slot(node, "type_params", ctx, engine)?.append(delimited("(", params, ")")))
};

/// `name?: T;`
pub const BUILD_PROPERTY_SIGNATURE: BuilderFn = |node, ctx, engine| {
    let mut fragment = build_slot(node, "key", ctx, engine)?;
    if node.has_slot("optional") {
        fragment = fragment.append(Fragment::text("?"));
    }
    if node.has_slot("annotation") {
        fragment = fragment
            .append(Fragment::text(": "))
            .append(build_slot(node, "annotation", ctx, engine)?);
    }
    Ok(fragment)
};

/// `name(params): Return`
pub const BUILD_METHOD_SIGNATURE: BuilderFn = |node, ctx, engine| {
    let mut fragment =
        build_slot(node, "key", ctx, engine)?.append(build_slot(node, "meta", ctx, engine)?);
    if node.has_slot("return") {
        fragment = fragment
            .append(Fragment::text(": "))
            .append(build_slot(node, "return", ctx, engine)?);
    }
    Ok(fragment)
};

/// `(params): Return` as an interface call signature.
pub const BUILD_CALL_SIGNATURE: BuilderFn = |node, ctx, engine| {
    let mut fragment = build_slot(node, "meta", ctx, engine)?;
    if node.has_slot("return") {
        fragment = fragment
            .append(Fragment::text(": "))
            .append(build_slot(node, "return", ctx, engine)?);
    }
    Ok(fragment)
};

/// `new (params): Instance` as an interface construct signature.
pub const BUILD_CONSTRUCT_SIGNATURE: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("new ").append(BUILD_CALL_SIGNATURE(node, ctx, engine)?))
};

/// `[key: string]: T`
pub const BUILD_INDEX_SIGNATURE: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("[")
        .append(build_slot(node, "key", ctx, engine)?)
        .append(Fragment::text("]: "))
        .append(build_slot(node, "annotation", ctx, engine)?))
};

// ============================================================================
// DECLARATIONS
// ============================================================================

/// `type Name<T> = Body;`
pub const BUILD_TYPE_ALIAS: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("type ")
        .append(build_slot(node, "name", ctx, engine)?)
        .append(build_slot(node, "type_params", ctx, engine)?)
        .append(Fragment::text(" = "))
        .append(build_slot(node, "annotation", ctx, engine)?)
        .append(Fragment::text(";")))
};

/// `interface Name extends A, B { members }`
pub const BUILD_INTERFACE: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text("interface ")
        .append(build_slot(node, "name", ctx, engine)?)
        .append(build_slot(node, "type_params", ctx, engine)?);
    if node.has_slot("extends") {
        fragment = fragment
            .append(Fragment::text(" extends "))
            .append(join_slots(node, "extends", Fragment::text(", "), ctx, engine)?);
    }
    Ok(fragment
        .append(Fragment::space())
        .append(block(build_slot(node, "body", ctx, engine)?)))
};

/// Interface members, one per line, each ending in a semicolon.
pub const BUILD_INTERFACE_BODY: BuilderFn = |node, ctx, engine| {
    join_slots(
        node,
        "members",
        Fragment::text(";").append(Fragment::hard_line()),
        ctx,
        engine,
    )
    .map(|members| {
        if matches!(&members, Fragment::Seq(parts) if parts.is_empty()) {
            members
        } else {
            members.append(Fragment::text(";"))
        }
    })
};

/// `enum Name { A, B = 1 }`, with a `const` marker slot for const enums.
pub const BUILD_ENUM: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::nil();
    if node.has_slot("const") {
        fragment = fragment.append(Fragment::text("const "));
    }
    let members = join_slots(
        node,
        "members",
        Fragment::text(",").append(Fragment::hard_line()),
        ctx,
        engine,
    )?;
    Ok(fragment
        .append(Fragment::text("enum "))
        .append(build_slot(node, "name", ctx, engine)?)
        .append(Fragment::space())
        .append(block(members)))
};

/// `Name = initializer` inside an enum body.
pub const BUILD_ENUM_MEMBER: BuilderFn = |node, ctx, engine| {
    let mut fragment = build_slot(node, "name", ctx, engine)?;
    if node.has_slot("init") {
        fragment = fragment
            .append(Fragment::text(" = "))
            .append(build_slot(node, "init", ctx, engine)?);
    }
    Ok(fragment)
};

/// `namespace Name { body }`; the node text may override the keyword with
/// `module`.
pub const BUILD_MODULE_DECLARATION: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text(node.text().unwrap_or("namespace"))
        .append(Fragment::space())
        .append(build_slot(node, "name", ctx, engine)?)
        .append(Fragment::space())
        .append(block(build_slot(node, "body", ctx, engine)?)))
};

/// The statements of a module or namespace body.
pub const BUILD_MODULE_BLOCK: BuilderFn =
    |node, ctx, engine| join_slots(node, "body", Fragment::hard_line(), ctx, engine);

/// `declare function name(params): Return;`
pub const BUILD_DECLARE_FUNCTION: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text("declare function ")
        .append(build_slot(node, "name", ctx, engine)?)
        .append(build_slot(node, "meta", ctx, engine)?);
    if node.has_slot("return") {
        fragment = fragment
            .append(Fragment::text(": "))
            .append(build_slot(node, "return", ctx, engine)?);
    }
    Ok(fragment.append(Fragment::text(";")))
};

/// An ambient class method: `name(params): Return;`
pub const BUILD_DECLARE_METHOD: BuilderFn = |node, ctx, engine| {
    Ok(BUILD_METHOD_SIGNATURE(node, ctx, engine)?.append(Fragment::text(";")))
};

/// `export = expr;`
pub const BUILD_EXPORT_ASSIGNMENT: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("export = ")
        .append(build_slot(node, "expression", ctx, engine)?)
        .append(Fragment::text(";")))
};

/// `import Name = reference;`
pub const BUILD_IMPORT_EQUALS: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("import ")
        .append(build_slot(node, "name", ctx, engine)?)
        .append(Fragment::text(" = "))
        .append(build_slot(node, "reference", ctx, engine)?)
        .append(Fragment::text(";")))
};

/// `require("module")`
pub const BUILD_EXTERNAL_MODULE_REFERENCE: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("require(")
        .append(build_slot(node, "argument", ctx, engine)?)
        .append(Fragment::text(")")))
};

/// `export as namespace Name;`
pub const BUILD_NAMESPACE_EXPORT: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("export as namespace ")
        .append(build_slot(node, "name", ctx, engine)?)
        .append(Fragment::text(";")))
};

// ============================================================================
// REGISTRATION FUNCTION
// ============================================================================

/// Registers every typed-grammar builder, in tag order.
pub fn register(registry: &mut BuilderRegistry) -> Result<(), FormatError> {
    registry.register("TSAnyKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSArrayType", BUILD_ARRAY_TYPE)?;
    registry.register("TSAsExpression", BUILD_AS)?;
    registry.register("TSAssignmentAsExpression", BUILD_AS)?;
    registry.register("TSAssignmentNonNullExpression", BUILD_NON_NULL)?;
    registry.register("TSAssignmentTypeAssertion", BUILD_TYPE_ASSERTION)?;
    registry.register("TSBigIntKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSBooleanKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSBooleanLiteralTypeAnnotation", SOURCE_TEXT)?;
    registry.register("TSCallSignatureDeclaration", BUILD_CALL_SIGNATURE)?;
    registry.register("TSConditionalType", BUILD_CONDITIONAL_TYPE)?;
    registry.register("TSConstructorType", BUILD_CONSTRUCTOR_TYPE)?;
    registry.register("TSConstructSignatureDeclaration", BUILD_CONSTRUCT_SIGNATURE)?;
    registry.register("TSDeclareFunction", BUILD_DECLARE_FUNCTION)?;
    registry.register("TSDeclareMethod", BUILD_DECLARE_METHOD)?;
    registry.register("TSEmptyKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSEnumDeclaration", BUILD_ENUM)?;
    registry.register("TSEnumMember", BUILD_ENUM_MEMBER)?;
    registry.register("TSExportAssignment", BUILD_EXPORT_ASSIGNMENT)?;
    registry.register("TSExpressionWithTypeArguments", BUILD_EXPRESSION_WITH_TYPE_ARGUMENTS)?;
    registry.register("TSExternalModuleReference", BUILD_EXTERNAL_MODULE_REFERENCE)?;
    registry.register("TSFunctionType", BUILD_FUNCTION_TYPE)?;
    registry.register("TSImportEqualsDeclaration", BUILD_IMPORT_EQUALS)?;
    registry.register("TSImportType", BUILD_IMPORT_TYPE)?;
    registry.register("TSIndexedAccessType", BUILD_INDEXED_ACCESS)?;
    registry.register("TSIndexSignature", BUILD_INDEX_SIGNATURE)?;
    registry.register("TSInferType", BUILD_INFER)?;
    registry.register("TSInterfaceBody", BUILD_INTERFACE_BODY)?;
    registry.register("TSInterfaceDeclaration", BUILD_INTERFACE)?;
    registry.register("TSIntersectionTypeAnnotation", BUILD_INTERSECTION)?;
    registry.register("TSMappedType", BUILD_MAPPED_TYPE)?;
    registry.register("TSMethodSignature", BUILD_METHOD_SIGNATURE)?;
    registry.register("TSMixedKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSModuleBlock", BUILD_MODULE_BLOCK)?;
    registry.register("TSModuleDeclaration", BUILD_MODULE_DECLARATION)?;
    registry.register("TSNamespaceExportDeclaration", BUILD_NAMESPACE_EXPORT)?;
    registry.register("TSNeverKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSNonNullExpression", BUILD_NON_NULL)?;
    registry.register("TSNullKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSNumberKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSNumericLiteralTypeAnnotation", SOURCE_TEXT)?;
    registry.register("TSObjectKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSObjectTypeAnnotation", BUILD_OBJECT_TYPE)?;
    registry.register("TSParenthesizedType", BUILD_PARENTHESIZED)?;
    registry.register("TSPropertySignature", BUILD_PROPERTY_SIGNATURE)?;
    registry.register("TSQualifiedName", BUILD_QUALIFIED_NAME)?;
    registry.register("TSSignatureDeclarationMeta", BUILD_SIGNATURE_META)?;
    registry.register("TSStringKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSStringLiteralTypeAnnotation", SOURCE_TEXT)?;
    registry.register("TSSymbolKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSTemplateLiteralTypeAnnotation", SOURCE_TEXT)?;
    registry.register("TSThisType", BUILD_THIS_TYPE)?;
    registry.register("TSTupleElement", BUILD_TUPLE_ELEMENT)?;
    registry.register("TSTupleType", BUILD_TUPLE)?;
    registry.register("TSTypeAlias", BUILD_TYPE_ALIAS)?;
    registry.register("TSTypeAssertion", BUILD_TYPE_ASSERTION)?;
    registry.register("TSTypeOperator", BUILD_TYPE_OPERATOR)?;
    registry.register("TSTypeParameter", BUILD_TYPE_PARAMETER)?;
    registry.register("TSTypeParameterDeclaration", BUILD_ANGLE_BRACKETED)?;
    registry.register("TSTypeParameterInstantiation", BUILD_ANGLE_BRACKETED)?;
    registry.register("TSTypePredicate", BUILD_TYPE_PREDICATE)?;
    registry.register("TSTypeQuery", BUILD_TYPE_QUERY)?;
    registry.register("TSTypeReference", BUILD_TYPE_REFERENCE)?;
    registry.register("TSUndefinedKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSUnionTypeAnnotation", BUILD_UNION)?;
    registry.register("TSUnknownKeywordTypeAnnotation", KEYWORD_TYPE)?;
    registry.register("TSVoidKeywordTypeAnnotation", KEYWORD_TYPE)?;
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

    fn reference(name: &str) -> Node {
        Node::new("TSTypeReference").with_slot("name", Node::new("JSIdentifier").with_text(name))
    }

    #[test]
    fn keyword_types_print_their_keyword() {
        let registry = registry();
        let node = Node::new("TSNumberKeywordTypeAnnotation");
        assert_eq!(
            format_node(&registry, &node, FormatOptions::default()).unwrap(),
            Fragment::text("number")
        );

        let node = Node::new("TSUndefinedKeywordTypeAnnotation");
        assert_eq!(
            format_node(&registry, &node, FormatOptions::default()).unwrap(),
            Fragment::text("undefined")
        );
    }

    #[test]
    fn unions_join_with_pipes() {
        // Type references recurse into the script grammar for their names,
        // so this test registers the one extra builder it needs.
        let mut registry = registry();
        registry
            .register("JSIdentifier", crate::builders::helpers::SOURCE_TEXT)
            .unwrap();

        let node = Node::new("TSUnionTypeAnnotation")
            .with_slot("types", reference("A"))
            .with_slot("types", reference("B"));
        let fragment = format_node(&registry, &node, FormatOptions::default()).unwrap();
        assert_eq!(
            fragment,
            Fragment::join(
                Fragment::text(" | "),
                vec![Fragment::text("A"), Fragment::text("B")],
            )
            .group()
        );
    }

    #[test]
    fn array_types_suffix_brackets() {
        let registry = registry();
        let node =
            Node::new("TSArrayType").with_slot("element", Node::new("TSStringKeywordTypeAnnotation"));
        assert_eq!(
            format_node(&registry, &node, FormatOptions::default()).unwrap(),
            Fragment::text("string").append(Fragment::text("[]"))
        );
    }

    #[test]
    fn type_aliases_are_complete_statements() {
        let mut registry = registry();
        registry
            .register("JSBindingIdentifier", crate::builders::helpers::SOURCE_TEXT)
            .unwrap();

        let node = Node::new("TSTypeAlias")
            .with_slot("name", Node::new("JSBindingIdentifier").with_text("Id"))
            .with_slot("annotation", Node::new("TSStringKeywordTypeAnnotation"));
        let fragment = format_node(&registry, &node, FormatOptions::default()).unwrap();
        assert_eq!(
            fragment,
            Fragment::text("type ")
                .append(Fragment::text("Id"))
                .append(Fragment::nil())
                .append(Fragment::text(" = "))
                .append(Fragment::text("string"))
                .append(Fragment::text(";"))
        );
    }
}
