//! Builders for the script grammar (excluding the JSX sub-grammar, which
//! lives in its own module).
//!
//! ## Conventions
//!
//! - Identifier and literal nodes carry their source text verbatim, string
//!   quotes included, and print it back unchanged.
//! - Infix operators (`JSBinaryExpression`, `JSLogicalExpression`,
//!   `JSAssignmentExpression`) carry the operator in the node text.
//! - Boolean syntax markers (`static`, `async`, `await`, `postfix`,
//!   `delegate`, `invert`) are empty marker slots: present means set.
//! - Member access carries its own punctuation: `JSStaticMemberProperty`
//!   prints the leading dot, `JSComputedMemberProperty` its brackets, so
//!   `JSMemberExpression` is plain concatenation.

use crate::builders::helpers::{
    block, build_slot, build_slots, build_slots_with_comments, delimited, join_slots,
    KEYWORD_STATEMENT, SEQUENCE_CHILDREN, SOURCE_TEXT,
};
use crate::diagnostics::FormatError;
use crate::doc::Fragment;
use crate::registry::{BuilderFn, BuilderRegistry};

// ============================================================================
// CORE
// ============================================================================

/// A whole program: interpreter line, directives, then statements, one per
/// line with a trailing newline. Comments attached to a statement print on
/// the lines above it.
pub const BUILD_ROOT: BuilderFn = |node, ctx, engine| {
    let mut parts = Vec::new();
    if node.has_slot("interpreter") {
        parts.push(build_slot(node, "interpreter", ctx, engine)?);
    }
    parts.extend(build_slots(node, "directives", ctx, engine)?);
    parts.extend(build_slots_with_comments(node, "body", ctx, engine)?);
    if parts.is_empty() {
        return Ok(Fragment::nil());
    }
    Ok(Fragment::join(Fragment::hard_line(), parts).append(Fragment::hard_line()))
};

/// `"use strict";` — the text is the raw directive value.
pub const BUILD_DIRECTIVE: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "\"{}\";",
        node.text().unwrap_or_default()
    )))
};

/// `#!/usr/bin/env node`
pub const BUILD_INTERPRETER: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "#!{}",
        node.text().unwrap_or_default()
    )))
};

// ============================================================================
// STATEMENTS
// ============================================================================

/// `{ statements }`
pub const BUILD_BLOCK: BuilderFn = |node, ctx, engine| {
    let statements = build_slots_with_comments(node, "body", ctx, engine)?;
    Ok(block(Fragment::join(Fragment::hard_line(), statements)))
};

/// `;`
pub const BUILD_EMPTY_STATEMENT: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::text(";"));

/// `expr;`
pub const BUILD_EXPRESSION_STATEMENT: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "expression", ctx, engine)?.append(Fragment::text(";")))
};

/// `if (test) consequent else alternate`
pub const BUILD_IF: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text("if (")
        .append(build_slot(node, "test", ctx, engine)?)
        .append(Fragment::text(") "))
        .append(build_slot(node, "consequent", ctx, engine)?);
    if node.has_slot("alternate") {
        fragment = fragment
            .append(Fragment::text(" else "))
            .append(build_slot(node, "alternate", ctx, engine)?);
    }
    Ok(fragment)
};

/// `while (test) body`
pub const BUILD_WHILE: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("while (")
        .append(build_slot(node, "test", ctx, engine)?)
        .append(Fragment::text(") "))
        .append(build_slot(node, "body", ctx, engine)?))
};

/// `do body while (test);`
pub const BUILD_DO_WHILE: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("do ")
        .append(build_slot(node, "body", ctx, engine)?)
        .append(Fragment::text(" while ("))
        .append(build_slot(node, "test", ctx, engine)?)
        .append(Fragment::text(");")))
};

/// `for (init; test; update) body`, with every header part optional.
pub const BUILD_FOR: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("for (")
        .append(build_slot(node, "init", ctx, engine)?)
        .append(Fragment::text("; "))
        .append(build_slot(node, "test", ctx, engine)?)
        .append(Fragment::text("; "))
        .append(build_slot(node, "update", ctx, engine)?)
        .append(Fragment::text(") "))
        .append(build_slot(node, "body", ctx, engine)?))
};

/// `for (left in right) body`
pub const BUILD_FOR_IN: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("for (")
        .append(build_slot(node, "left", ctx, engine)?)
        .append(Fragment::text(" in "))
        .append(build_slot(node, "right", ctx, engine)?)
        .append(Fragment::text(") "))
        .append(build_slot(node, "body", ctx, engine)?))
};

/// `for (left of right) body`, or `for await (...)` with an `await` marker.
pub const BUILD_FOR_OF: BuilderFn = |node, ctx, engine| {
    let keyword = if node.has_slot("await") {
        "for await ("
    } else {
        "for ("
    };
    Ok(Fragment::text(keyword)
        .append(build_slot(node, "left", ctx, engine)?)
        .append(Fragment::text(" of "))
        .append(build_slot(node, "right", ctx, engine)?)
        .append(Fragment::text(") "))
        .append(build_slot(node, "body", ctx, engine)?))
};

/// `label: body`
pub const BUILD_LABELED: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "label", ctx, engine)?
        .append(Fragment::text(": "))
        .append(build_slot(node, "body", ctx, engine)?))
};

/// `switch (discriminant) { cases }`
pub const BUILD_SWITCH: BuilderFn = |node, ctx, engine| {
    let cases = join_slots(node, "cases", Fragment::hard_line(), ctx, engine)?;
    Ok(Fragment::text("switch (")
        .append(build_slot(node, "discriminant", ctx, engine)?)
        .append(Fragment::text(") "))
        .append(block(cases)))
};

/// `case test:` or `default:`, with the consequent indented below.
pub const BUILD_SWITCH_CASE: BuilderFn = |node, ctx, engine| {
    let label = if node.has_slot("test") {
        Fragment::text("case ")
            .append(build_slot(node, "test", ctx, engine)?)
            .append(Fragment::text(":"))
    } else {
        Fragment::text("default:")
    };
    if !node.has_slot("consequent") {
        return Ok(label);
    }
    let consequent = join_slots(node, "consequent", Fragment::hard_line(), ctx, engine)?;
    Ok(label.append(Fragment::hard_line().append(consequent).indent()))
};

/// `try block catch finally`
pub const BUILD_TRY: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text("try ").append(build_slot(node, "block", ctx, engine)?);
    if node.has_slot("handler") {
        fragment = fragment
            .append(Fragment::space())
            .append(build_slot(node, "handler", ctx, engine)?);
    }
    if node.has_slot("finalizer") {
        fragment = fragment
            .append(Fragment::text(" finally "))
            .append(build_slot(node, "finalizer", ctx, engine)?);
    }
    Ok(fragment)
};

/// `catch (param) body`, or a bare `catch body`.
pub const BUILD_CATCH: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text("catch");
    if node.has_slot("param") {
        fragment = fragment
            .append(Fragment::text(" ("))
            .append(build_slot(node, "param", ctx, engine)?)
            .append(Fragment::text(")"));
    }
    Ok(fragment
        .append(Fragment::space())
        .append(build_slot(node, "body", ctx, engine)?))
};

/// `with (object) body`
pub const BUILD_WITH: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("with (")
        .append(build_slot(node, "object", ctx, engine)?)
        .append(Fragment::text(") "))
        .append(build_slot(node, "body", ctx, engine)?))
};

/// `const a = 1, b = 2;` as a statement.
pub const BUILD_VARIABLE_STATEMENT: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "declaration", ctx, engine)?.append(Fragment::text(";")))
};

/// `const a = 1, b = 2` — the node text is the declaration keyword.
pub const BUILD_VARIABLE_DECLARATION: BuilderFn = |node, ctx, engine| {
    let declarators = join_slots(node, "declarators", Fragment::text(", "), ctx, engine)?;
    Ok(Fragment::text(node.text().unwrap_or("var"))
        .append(Fragment::space())
        .append(declarators))
};

/// `id = init`, or a bare `id`.
pub const BUILD_VARIABLE_DECLARATOR: BuilderFn = |node, ctx, engine| {
    let mut fragment = build_slot(node, "id", ctx, engine)?;
    if node.has_slot("init") {
        fragment = fragment
            .append(Fragment::text(" = "))
            .append(build_slot(node, "init", ctx, engine)?);
    }
    Ok(fragment)
};

// ============================================================================
// FUNCTIONS AND CLASSES
// ============================================================================

/// `function name(params) body`; serves declarations and expressions.
/// `async` and `generator` marker slots adjust the keyword.
pub const BUILD_FUNCTION: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::nil();
    if node.has_slot("async") {
        fragment = fragment.append(Fragment::text("async "));
    }
    fragment = fragment.append(Fragment::text("function"));
    if node.has_slot("generator") {
        fragment = fragment.append(Fragment::text("*"));
    }
    if node.has_slot("name") {
        fragment = fragment
            .append(Fragment::space())
            .append(build_slot(node, "name", ctx, engine)?);
    }
    Ok(fragment
        .append(build_slot(node, "head", ctx, engine)?)
        .append(Fragment::space())
        .append(build_slot(node, "body", ctx, engine)?))
};

/// The parameter list and return annotation shared by every function form.
pub const BUILD_FUNCTION_HEAD: BuilderFn = |node, ctx, engine| {
    let params = join_slots(
        node,
        "params",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    let mut fragment = delimited("(", params, ")");
    if node.has_slot("return") {
        fragment = fragment
            .append(Fragment::text(": "))
            .append(build_slot(node, "return", ctx, engine)?);
    }
    Ok(fragment)
};

/// `(params) => body`
pub const BUILD_ARROW: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "head", ctx, engine)?
        .append(Fragment::text(" => "))
        .append(build_slot(node, "body", ctx, engine)?))
};

/// `class Head { members }`; serves declarations and expressions.
pub const BUILD_CLASS: BuilderFn = |node, ctx, engine| {
    let members = join_slots(node, "members", Fragment::hard_line(), ctx, engine)?;
    Ok(Fragment::text("class")
        .append(build_slot(node, "head", ctx, engine)?)
        .append(Fragment::space())
        .append(block(members)))
};

/// The name and heritage of a class: ` Name extends Base`.
pub const BUILD_CLASS_HEAD: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::nil();
    if node.has_slot("name") {
        fragment = fragment
            .append(Fragment::space())
            .append(build_slot(node, "name", ctx, engine)?);
    }
    if node.has_slot("extends") {
        fragment = fragment
            .append(Fragment::text(" extends "))
            .append(build_slot(node, "extends", ctx, engine)?);
    }
    if node.has_slot("implements") {
        fragment = fragment
            .append(Fragment::text(" implements "))
            .append(join_slots(node, "implements", Fragment::text(", "), ctx, engine)?);
    }
    Ok(fragment)
};

/// `static key(params) body`; serves plain and private methods.
pub const BUILD_CLASS_METHOD: BuilderFn = |node, ctx, engine| {
    let mut fragment = build_slot(node, "meta", ctx, engine)?;
    fragment = fragment
        .append(build_slot(node, "key", ctx, engine)?)
        .append(build_slot(node, "head", ctx, engine)?);
    Ok(fragment
        .append(Fragment::space())
        .append(build_slot(node, "body", ctx, engine)?))
};

/// `static key: T = value;`; serves plain and private properties.
pub const BUILD_CLASS_PROPERTY: BuilderFn = |node, ctx, engine| {
    let mut fragment =
        build_slot(node, "meta", ctx, engine)?.append(build_slot(node, "key", ctx, engine)?);
    if node.has_slot("annotation") {
        fragment = fragment
            .append(Fragment::text(": "))
            .append(build_slot(node, "annotation", ctx, engine)?);
    }
    if node.has_slot("value") {
        fragment = fragment
            .append(Fragment::text(" = "))
            .append(build_slot(node, "value", ctx, engine)?);
    }
    Ok(fragment.append(Fragment::text(";")))
};

/// Member modifiers captured as text (`static`, `readonly`), trailing-space
/// separated; nothing when absent.
pub const BUILD_CLASS_PROPERTY_META: BuilderFn = |node, _ctx, _engine| {
    Ok(match node.text() {
        Some(modifiers) => Fragment::text(format!("{modifiers} ")),
        None => Fragment::nil(),
    })
};

/// `#name`
pub const BUILD_PRIVATE_NAME: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "#{}",
        node.text().unwrap_or_default()
    )))
};

// ============================================================================
// EXPRESSIONS
// ============================================================================

/// `left op right`; the operator lives in the node text. Serves binary,
/// logical, and assignment expressions.
pub const BUILD_INFIX: BuilderFn = |node, ctx, engine| {
    let operator = node.text().unwrap_or_default();
    Ok(build_slot(node, "left", ctx, engine)?
        .append(Fragment::text(format!(" {operator} ")))
        .append(build_slot(node, "right", ctx, engine)?)
        .group())
};

/// `test ? consequent : alternate`
pub const BUILD_CONDITIONAL: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "test", ctx, engine)?
        .append(Fragment::text(" ? "))
        .append(build_slot(node, "consequent", ctx, engine)?)
        .append(Fragment::text(" : "))
        .append(build_slot(node, "alternate", ctx, engine)?))
};

/// `callee(args)`
pub const BUILD_CALL: BuilderFn = |node, ctx, engine| {
    let args = join_slots(
        node,
        "arguments",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    Ok(build_slot(node, "callee", ctx, engine)?.append(delimited("(", args, ")")))
};

/// `callee?.(args)`
pub const BUILD_OPTIONAL_CALL: BuilderFn = |node, ctx, engine| {
    let args = join_slots(
        node,
        "arguments",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    Ok(build_slot(node, "callee", ctx, engine)?
        .append(Fragment::text("?."))
        .append(delimited("(", args, ")")))
};

/// `new callee(args)`
pub const BUILD_NEW: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("new ").append(BUILD_CALL(node, ctx, engine)?))
};

/// `import(argument)`
pub const BUILD_IMPORT_CALL: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("import(")
        .append(build_slot(node, "argument", ctx, engine)?)
        .append(Fragment::text(")")))
};

/// `object.prop` / `object[prop]`; the property node carries its own
/// punctuation.
pub const BUILD_MEMBER: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "object", ctx, engine)?
        .append(build_slot(node, "property", ctx, engine)?))
};

/// `.name`
pub const BUILD_STATIC_MEMBER_PROPERTY: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text(".").append(build_slot(node, "property", ctx, engine)?))
};

/// `[expr]`
pub const BUILD_COMPUTED_MEMBER_PROPERTY: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("[")
        .append(build_slot(node, "expression", ctx, engine)?)
        .append(Fragment::text("]")))
};

/// `new.target`, `import.meta`.
pub const BUILD_META_PROPERTY: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "meta", ctx, engine)?
        .append(Fragment::text("."))
        .append(build_slot(node, "property", ctx, engine)?))
};

/// `op argument`; word operators (`typeof`, `void`, `delete`) get a space.
pub const BUILD_UNARY: BuilderFn = |node, ctx, engine| {
    let operator = node.text().unwrap_or_default();
    let spelled = if operator.chars().all(|c| c.is_ascii_alphabetic()) && !operator.is_empty() {
        format!("{operator} ")
    } else {
        operator.to_string()
    };
    Ok(Fragment::text(spelled).append(build_slot(node, "argument", ctx, engine)?))
};

/// `++x` by default, `x++` with a `postfix` marker slot.
pub const BUILD_UPDATE: BuilderFn = |node, ctx, engine| {
    let operator = Fragment::text(node.text().unwrap_or_default());
    let argument = build_slot(node, "argument", ctx, engine)?;
    if node.has_slot("postfix") {
        return Ok(argument.append(operator));
    }
    Ok(operator.append(argument))
};

/// `await argument`
pub const BUILD_AWAIT: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("await ").append(build_slot(node, "argument", ctx, engine)?))
};

/// `yield`, `yield x`, `yield* gen()` with a `delegate` marker slot.
pub const BUILD_YIELD: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text("yield");
    if node.has_slot("delegate") {
        fragment = fragment.append(Fragment::text("*"));
    }
    if node.has_slot("argument") {
        fragment = fragment
            .append(Fragment::space())
            .append(build_slot(node, "argument", ctx, engine)?);
    }
    Ok(fragment)
};

/// `do block` as an expression.
pub const BUILD_DO_EXPRESSION: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("do ").append(build_slot(node, "body", ctx, engine)?))
};

/// `a, b, c`
pub const BUILD_SEQUENCE: BuilderFn =
    |node, ctx, engine| join_slots(node, "expressions", Fragment::text(", "), ctx, engine);

/// `[a, , b]` — holes print nothing between their commas.
pub const BUILD_ARRAY: BuilderFn = |node, ctx, engine| {
    let elements = join_slots(
        node,
        "elements",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    Ok(delimited("[", elements, "]"))
};

/// The gap in a sparse array.
pub const BUILD_ARRAY_HOLE: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::nil());

/// `...argument`; serves spread elements and spread properties.
pub const BUILD_SPREAD: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("...").append(build_slot(node, "argument", ctx, engine)?))
};

/// `this`
pub const BUILD_THIS: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::text("this"));

/// `super`
pub const BUILD_SUPER: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::text("super"));

/// `null`
pub const BUILD_NULL: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::text("null"));

/// Flow interop artifact; formats as its inner expression.
pub const BUILD_AMBIGUOUS_FLOW_CAST: BuilderFn =
    |node, ctx, engine| build_slot(node, "expression", ctx, engine);

// ============================================================================
// OBJECTS
// ============================================================================

/// `{ properties }`
pub const BUILD_OBJECT: BuilderFn = |node, ctx, engine| {
    let properties = join_slots(
        node,
        "properties",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    Ok(delimited("{", properties, "}"))
};

/// `key: value`
pub const BUILD_OBJECT_PROPERTY: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "key", ctx, engine)?
        .append(Fragment::text(": "))
        .append(build_slot(node, "value", ctx, engine)?))
};

/// `key(params) body` inside an object literal.
pub const BUILD_OBJECT_METHOD: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "key", ctx, engine)?
        .append(build_slot(node, "head", ctx, engine)?)
        .append(Fragment::space())
        .append(build_slot(node, "body", ctx, engine)?))
};

/// A plain property key; transparent wrapper over the key node.
pub const BUILD_STATIC_PROPERTY_KEY: BuilderFn =
    |node, ctx, engine| build_slot(node, "value", ctx, engine);

/// `[expr]` as a property key.
pub const BUILD_COMPUTED_PROPERTY_KEY: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("[")
        .append(build_slot(node, "value", ctx, engine)?)
        .append(Fragment::text("]")))
};

// ============================================================================
// LITERALS
// ============================================================================

/// `/pattern/flags`; the text carries the flags.
pub const BUILD_REGEXP_LITERAL: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("/")
        .append(build_slot(node, "expression", ctx, engine)?)
        .append(Fragment::text("/"))
        .append(Fragment::text(node.text().unwrap_or_default())))
};

/// `` `text ${expr} text` `` — quasis and expressions interleave in
/// declaration order.
pub const BUILD_TEMPLATE_LITERAL: BuilderFn = |node, ctx, engine| {
    let mut parts = vec![Fragment::text("`")];
    for (name, child) in node.children() {
        if name == "expressions" {
            parts.push(Fragment::text("${"));
            parts.push(engine.build(child, ctx)?);
            parts.push(Fragment::text("}"));
        } else {
            parts.push(engine.build(child, ctx)?);
        }
    }
    parts.push(Fragment::text("`"));
    Ok(Fragment::list(parts))
};

/// ``tag`quasi` ``
pub const BUILD_TAGGED_TEMPLATE: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "tag", ctx, engine)?.append(build_slot(node, "quasi", ctx, engine)?))
};

// ============================================================================
// PATTERNS
// ============================================================================

/// `[a, b]` as a destructuring target; serves binding and assignment
/// positions.
pub const BUILD_ARRAY_PATTERN: BuilderFn = |node, ctx, engine| {
    let elements = join_slots(
        node,
        "elements",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    Ok(delimited("[", elements, "]"))
};

/// `{ a, b: c }` as a destructuring target; serves binding and assignment
/// positions.
pub const BUILD_OBJECT_PATTERN: BuilderFn = |node, ctx, engine| {
    let properties = join_slots(
        node,
        "properties",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    Ok(delimited("{", properties, "}"))
};

/// `key: target`, or shorthand `key`; serves binding and assignment
/// positions.
pub const BUILD_OBJECT_PATTERN_PROPERTY: BuilderFn = |node, ctx, engine| {
    let key = build_slot(node, "key", ctx, engine)?;
    if !node.has_slot("value") {
        return Ok(key);
    }
    Ok(key
        .append(Fragment::text(": "))
        .append(build_slot(node, "value", ctx, engine)?))
};

/// `target = default`; serves binding and assignment positions.
pub const BUILD_DEFAULTED_PATTERN: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "left", ctx, engine)?
        .append(Fragment::text(" = "))
        .append(build_slot(node, "right", ctx, engine)?))
};

// ============================================================================
// MODULES
// ============================================================================

/// `import default, * as ns, { named } from "source";`
pub const BUILD_IMPORT: BuilderFn = |node, ctx, engine| {
    let mut specifiers = Vec::new();
    if node.has_slot("default") {
        specifiers.push(build_slot(node, "default", ctx, engine)?);
    }
    if node.has_slot("namespace") {
        specifiers.push(build_slot(node, "namespace", ctx, engine)?);
    }
    if node.has_slot("named") {
        let named = join_slots(
            node,
            "named",
            Fragment::text(",").append(Fragment::line_or_space()),
            ctx,
            engine,
        )?;
        specifiers.push(delimited("{", named, "}"));
    }

    let source = build_slot(node, "source", ctx, engine)?;
    if specifiers.is_empty() {
        // Bare side-effect import.
        return Ok(Fragment::text("import ")
            .append(source)
            .append(Fragment::text(";")));
    }
    Ok(Fragment::text("import ")
        .append(Fragment::join(Fragment::text(", "), specifiers))
        .append(Fragment::text(" from "))
        .append(source)
        .append(Fragment::text(";")))
};

/// The local binding of a default import.
pub const BUILD_IMPORT_DEFAULT_SPECIFIER: BuilderFn =
    |node, ctx, engine| build_slot(node, "local", ctx, engine);

/// `* as local`
pub const BUILD_IMPORT_NAMESPACE_SPECIFIER: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("* as ").append(build_slot(node, "local", ctx, engine)?))
};

/// `imported` or `imported as local`.
pub const BUILD_IMPORT_SPECIFIER: BuilderFn = |node, ctx, engine| {
    let imported = build_slot(node, "imported", ctx, engine)?;
    if !node.has_slot("local") {
        return Ok(imported);
    }
    Ok(imported
        .append(Fragment::text(" as "))
        .append(build_slot(node, "local", ctx, engine)?))
};

/// `export const x = 1;` or `export { a, b };`
pub const BUILD_EXPORT_LOCAL: BuilderFn = |node, ctx, engine| {
    if node.has_slot("declaration") {
        return Ok(Fragment::text("export ")
            .append(build_slot(node, "declaration", ctx, engine)?));
    }
    let specifiers = join_slots(
        node,
        "specifiers",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    Ok(Fragment::text("export ")
        .append(delimited("{", specifiers, "}"))
        .append(Fragment::text(";")))
};

/// `export default declaration`
pub const BUILD_EXPORT_DEFAULT: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("export default ")
        .append(build_slot(node, "declaration", ctx, engine)?))
};

/// `export * from "source";`
pub const BUILD_EXPORT_ALL: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("export * from ")
        .append(build_slot(node, "source", ctx, engine)?)
        .append(Fragment::text(";")))
};

/// `export { a, b } from "source";`
pub const BUILD_EXPORT_EXTERNAL: BuilderFn = |node, ctx, engine| {
    let specifiers = join_slots(
        node,
        "specifiers",
        Fragment::text(",").append(Fragment::line_or_space()),
        ctx,
        engine,
    )?;
    Ok(Fragment::text("export ")
        .append(delimited("{", specifiers, "}"))
        .append(Fragment::text(" from "))
        .append(build_slot(node, "source", ctx, engine)?)
        .append(Fragment::text(";")))
};

/// `local` or `local as exported`.
pub const BUILD_EXPORT_SPECIFIER: BuilderFn = |node, ctx, engine| {
    let local = build_slot(node, "local", ctx, engine)?;
    if !node.has_slot("exported") {
        return Ok(local);
    }
    Ok(local
        .append(Fragment::text(" as "))
        .append(build_slot(node, "exported", ctx, engine)?))
};

/// `* as exported` in an export clause.
pub const BUILD_EXPORT_NAMESPACE_SPECIFIER: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text("* as ").append(build_slot(node, "exported", ctx, engine)?))
};

/// The exported name of a default re-export.
pub const BUILD_EXPORT_DEFAULT_SPECIFIER: BuilderFn =
    |node, ctx, engine| build_slot(node, "exported", ctx, engine);

// ============================================================================
// REGULAR EXPRESSIONS
// ============================================================================

/// Fixed regexp atoms and class escapes, derived from the kind tag.
const REGEXP_ESCAPES: &[(&str, &str)] = &[
    ("JSRegExpAnyCharacter", "."),
    ("JSRegExpStartCharacter", "^"),
    ("JSRegExpEndCharacter", "$"),
    ("JSRegExpDigitCharacter", "\\d"),
    ("JSRegExpNonDigitCharacter", "\\D"),
    ("JSRegExpWordCharacter", "\\w"),
    ("JSRegExpNonWordCharacter", "\\W"),
    ("JSRegExpWhiteSpaceCharacter", "\\s"),
    ("JSRegExpNonWhiteSpaceCharacter", "\\S"),
    ("JSRegExpWordBoundaryCharacter", "\\b"),
    ("JSRegExpNonWordBoundaryCharacter", "\\B"),
];

/// One of the fixed escapes above.
pub const BUILD_REGEXP_ESCAPE: BuilderFn = |node, _ctx, _engine| {
    let escape = REGEXP_ESCAPES
        .iter()
        .find(|(kind, _)| *kind == node.kind())
        .map(|(_, escape)| *escape)
        .unwrap_or("");
    Ok(Fragment::text(escape))
};

/// `\cX`; the text is the control letter.
pub const BUILD_REGEXP_CONTROL: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "\\c{}",
        node.text().unwrap_or_default()
    )))
};

/// `a|b|c`
pub const BUILD_REGEXP_ALTERNATION: BuilderFn =
    |node, ctx, engine| join_slots(node, "alternatives", Fragment::text("|"), ctx, engine);

/// `abc` — adjacent regexp atoms.
pub const BUILD_REGEXP_SUB_EXPRESSION: BuilderFn = SEQUENCE_CHILDREN;

/// `x*`, `x{2,3}`; the text is the whole quantifier.
pub const BUILD_REGEXP_QUANTIFIED: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "target", ctx, engine)?
        .append(Fragment::text(node.text().unwrap_or_default())))
};

/// `(body)` or `(?<name>body)`; the text is the capture name.
pub const BUILD_REGEXP_GROUP_CAPTURE: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text("(");
    if let Some(name) = node.text() {
        fragment = fragment.append(Fragment::text(format!("?<{name}>")));
    }
    Ok(fragment
        .append(build_slot(node, "body", ctx, engine)?)
        .append(Fragment::text(")")))
};

/// `(?:body)`; the text can override the prefix for lookaround groups.
pub const BUILD_REGEXP_GROUP_NON_CAPTURE: BuilderFn = |node, ctx, engine| {
    Ok(Fragment::text(format!("(?{}", node.text().unwrap_or(":")))
        .append(build_slot(node, "body", ctx, engine)?)
        .append(Fragment::text(")")))
};

/// `[abc]` or `[^abc]` with an `invert` marker slot.
pub const BUILD_REGEXP_CHAR_SET: BuilderFn = |node, ctx, engine| {
    let mut fragment = Fragment::text("[");
    if node.has_slot("invert") {
        fragment = fragment.append(Fragment::text("^"));
    }
    let mut body = Vec::new();
    for child in node.slots_named("body") {
        body.push(engine.build(child, ctx)?);
    }
    Ok(fragment
        .append(Fragment::list(body))
        .append(Fragment::text("]")))
};

/// `a-z`
pub const BUILD_REGEXP_CHAR_SET_RANGE: BuilderFn = |node, ctx, engine| {
    Ok(build_slot(node, "start", ctx, engine)?
        .append(Fragment::text("-"))
        .append(build_slot(node, "end", ctx, engine)?))
};

/// `\k<name>`; the text is the group name.
pub const BUILD_REGEXP_NAMED_BACK_REFERENCE: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "\\k<{}>",
        node.text().unwrap_or_default()
    )))
};

/// `\1`; the text is the group number.
pub const BUILD_REGEXP_NUMERIC_BACK_REFERENCE: BuilderFn = |node, _ctx, _engine| {
    Ok(Fragment::text(format!(
        "\\{}",
        node.text().unwrap_or_default()
    )))
};

// ============================================================================
// REGISTRATION FUNCTION
// ============================================================================

/// Registers every script-grammar builder.
pub fn register(registry: &mut BuilderRegistry) -> Result<(), FormatError> {
    // Core
    registry.register("JSDirective", BUILD_DIRECTIVE)?;
    registry.register("JSInterpreterDirective", BUILD_INTERPRETER)?;
    registry.register("JSRoot", BUILD_ROOT)?;

    // Statements
    registry.register("JSBlockStatement", BUILD_BLOCK)?;
    registry.register("JSBreakStatement", KEYWORD_STATEMENT)?;
    registry.register("JSContinueStatement", KEYWORD_STATEMENT)?;
    registry.register("JSDebuggerStatement", KEYWORD_STATEMENT)?;
    registry.register("JSDoWhileStatement", BUILD_DO_WHILE)?;
    registry.register("JSEmptyStatement", BUILD_EMPTY_STATEMENT)?;
    registry.register("JSExpressionStatement", BUILD_EXPRESSION_STATEMENT)?;
    registry.register("JSForInStatement", BUILD_FOR_IN)?;
    registry.register("JSForOfStatement", BUILD_FOR_OF)?;
    registry.register("JSForStatement", BUILD_FOR)?;
    registry.register("JSFunctionDeclaration", BUILD_FUNCTION)?;
    registry.register("JSIfStatement", BUILD_IF)?;
    registry.register("JSLabeledStatement", BUILD_LABELED)?;
    registry.register("JSReturnStatement", KEYWORD_STATEMENT)?;
    registry.register("JSSwitchStatement", BUILD_SWITCH)?;
    registry.register("JSThrowStatement", KEYWORD_STATEMENT)?;
    registry.register("JSTryStatement", BUILD_TRY)?;
    registry.register("JSVariableDeclarationStatement", BUILD_VARIABLE_STATEMENT)?;
    registry.register("JSWhileStatement", BUILD_WHILE)?;
    registry.register("JSWithStatement", BUILD_WITH)?;

    // Expressions
    registry.register("JSArrayExpression", BUILD_ARRAY)?;
    registry.register("JSArrowFunctionExpression", BUILD_ARROW)?;
    registry.register("JSAssignmentExpression", BUILD_INFIX)?;
    registry.register("JSAwaitExpression", BUILD_AWAIT)?;
    registry.register("JSBinaryExpression", BUILD_INFIX)?;
    registry.register("JSCallExpression", BUILD_CALL)?;
    registry.register("JSConditionalExpression", BUILD_CONDITIONAL)?;
    registry.register("JSDoExpression", BUILD_DO_EXPRESSION)?;
    registry.register("JSFunctionExpression", BUILD_FUNCTION)?;
    registry.register("JSLogicalExpression", BUILD_INFIX)?;
    registry.register("JSMemberExpression", BUILD_MEMBER)?;
    registry.register("JSMetaProperty", BUILD_META_PROPERTY)?;
    registry.register("JSNewExpression", BUILD_NEW)?;
    registry.register("JSOptionalCallExpression", BUILD_OPTIONAL_CALL)?;
    registry.register("JSReferenceIdentifier", SOURCE_TEXT)?;
    registry.register("JSSequenceExpression", BUILD_SEQUENCE)?;
    registry.register("JSSuper", BUILD_SUPER)?;
    registry.register("JSTaggedTemplateExpression", BUILD_TAGGED_TEMPLATE)?;
    registry.register("JSThisExpression", BUILD_THIS)?;
    registry.register("JSUnaryExpression", BUILD_UNARY)?;
    registry.register("JSUpdateExpression", BUILD_UPDATE)?;
    registry.register("JSYieldExpression", BUILD_YIELD)?;

    // Literals
    registry.register("JSBigIntLiteral", SOURCE_TEXT)?;
    registry.register("JSBooleanLiteral", SOURCE_TEXT)?;
    registry.register("JSNullLiteral", BUILD_NULL)?;
    registry.register("JSNumericLiteral", SOURCE_TEXT)?;
    registry.register("JSRegExpLiteral", BUILD_REGEXP_LITERAL)?;
    registry.register("JSStringLiteral", SOURCE_TEXT)?;
    registry.register("JSTemplateLiteral", BUILD_TEMPLATE_LITERAL)?;

    // Objects
    registry.register("JSComputedPropertyKey", BUILD_COMPUTED_PROPERTY_KEY)?;
    registry.register("JSObjectExpression", BUILD_OBJECT)?;
    registry.register("JSObjectMethod", BUILD_OBJECT_METHOD)?;
    registry.register("JSObjectProperty", BUILD_OBJECT_PROPERTY)?;
    registry.register("JSSpreadProperty", BUILD_SPREAD)?;
    registry.register("JSStaticPropertyKey", BUILD_STATIC_PROPERTY_KEY)?;

    // Classes
    registry.register("JSClassDeclaration", BUILD_CLASS)?;
    registry.register("JSClassExpression", BUILD_CLASS)?;
    registry.register("JSClassHead", BUILD_CLASS_HEAD)?;
    registry.register("JSClassMethod", BUILD_CLASS_METHOD)?;
    registry.register("JSClassPrivateMethod", BUILD_CLASS_METHOD)?;
    registry.register("JSClassPrivateProperty", BUILD_CLASS_PROPERTY)?;
    registry.register("JSClassProperty", BUILD_CLASS_PROPERTY)?;
    registry.register("JSClassPropertyMeta", BUILD_CLASS_PROPERTY_META)?;
    registry.register("JSPrivateName", BUILD_PRIVATE_NAME)?;

    // Assignment and binding patterns
    registry.register("JSAssignmentArrayPattern", BUILD_ARRAY_PATTERN)?;
    registry.register("JSAssignmentAssignmentPattern", BUILD_DEFAULTED_PATTERN)?;
    registry.register("JSAssignmentIdentifier", SOURCE_TEXT)?;
    registry.register("JSAssignmentObjectPattern", BUILD_OBJECT_PATTERN)?;
    registry.register("JSAssignmentObjectPatternProperty", BUILD_OBJECT_PATTERN_PROPERTY)?;
    registry.register("JSBindingArrayPattern", BUILD_ARRAY_PATTERN)?;
    registry.register("JSBindingAssignmentPattern", BUILD_DEFAULTED_PATTERN)?;
    registry.register("JSBindingIdentifier", SOURCE_TEXT)?;
    registry.register("JSBindingObjectPattern", BUILD_OBJECT_PATTERN)?;
    registry.register("JSBindingObjectPatternProperty", BUILD_OBJECT_PATTERN_PROPERTY)?;
    registry.register("JSPatternMeta", SEQUENCE_CHILDREN)?;

    // Modules
    registry.register("JSExportAllDeclaration", BUILD_EXPORT_ALL)?;
    registry.register("JSExportDefaultDeclaration", BUILD_EXPORT_DEFAULT)?;
    registry.register("JSExportDefaultSpecifier", BUILD_EXPORT_DEFAULT_SPECIFIER)?;
    registry.register("JSExportExternalDeclaration", BUILD_EXPORT_EXTERNAL)?;
    registry.register("JSExportExternalSpecifier", BUILD_EXPORT_SPECIFIER)?;
    registry.register("JSExportLocalDeclaration", BUILD_EXPORT_LOCAL)?;
    registry.register("JSExportLocalSpecifier", BUILD_EXPORT_SPECIFIER)?;
    registry.register("JSExportNamespaceSpecifier", BUILD_EXPORT_NAMESPACE_SPECIFIER)?;
    registry.register("JSImportCall", BUILD_IMPORT_CALL)?;
    registry.register("JSImportDeclaration", BUILD_IMPORT)?;
    registry.register("JSImportDefaultSpecifier", BUILD_IMPORT_DEFAULT_SPECIFIER)?;
    registry.register("JSImportNamespaceSpecifier", BUILD_IMPORT_NAMESPACE_SPECIFIER)?;
    registry.register("JSImportSpecifier", BUILD_IMPORT_SPECIFIER)?;
    registry.register("JSImportSpecifierLocal", SEQUENCE_CHILDREN)?;

    // Auxiliary
    registry.register("JSArrayHole", BUILD_ARRAY_HOLE)?;
    registry.register("JSCatchClause", BUILD_CATCH)?;
    registry.register("JSComputedMemberProperty", BUILD_COMPUTED_MEMBER_PROPERTY)?;
    registry.register("JSFunctionHead", BUILD_FUNCTION_HEAD)?;
    registry.register("JSIdentifier", SOURCE_TEXT)?;
    registry.register("JSSpreadElement", BUILD_SPREAD)?;
    registry.register("JSStaticMemberProperty", BUILD_STATIC_MEMBER_PROPERTY)?;
    registry.register("JSSwitchCase", BUILD_SWITCH_CASE)?;
    registry.register("JSTemplateElement", SOURCE_TEXT)?;
    registry.register("JSVariableDeclaration", BUILD_VARIABLE_DECLARATION)?;
    registry.register("JSVariableDeclarator", BUILD_VARIABLE_DECLARATOR)?;

    // Flow interop artifact
    registry.register("JSAmbiguousFlowTypeCastExpression", BUILD_AMBIGUOUS_FLOW_CAST)?;

    // Regular-expression sub-grammar
    registry.register("JSRegExpAlternation", BUILD_REGEXP_ALTERNATION)?;
    registry.register("JSRegExpAnyCharacter", BUILD_REGEXP_ESCAPE)?;
    registry.register("JSRegExpCharacter", SOURCE_TEXT)?;
    registry.register("JSRegExpCharSet", BUILD_REGEXP_CHAR_SET)?;
    registry.register("JSRegExpCharSetRange", BUILD_REGEXP_CHAR_SET_RANGE)?;
    registry.register("JSRegExpControlCharacter", BUILD_REGEXP_CONTROL)?;
    registry.register("JSRegExpDigitCharacter", BUILD_REGEXP_ESCAPE)?;
    registry.register("JSRegExpEndCharacter", BUILD_REGEXP_ESCAPE)?;
    registry.register("JSRegExpGroupCapture", BUILD_REGEXP_GROUP_CAPTURE)?;
    registry.register("JSRegExpGroupNonCapture", BUILD_REGEXP_GROUP_NON_CAPTURE)?;
    registry.register("JSRegExpNamedBackReference", BUILD_REGEXP_NAMED_BACK_REFERENCE)?;
    registry.register("JSRegExpNonDigitCharacter", BUILD_REGEXP_ESCAPE)?;
    registry.register("JSRegExpNonWhiteSpaceCharacter", BUILD_REGEXP_ESCAPE)?;
    registry.register("JSRegExpNonWordBoundaryCharacter", BUILD_REGEXP_ESCAPE)?;
    registry.register("JSRegExpNonWordCharacter", BUILD_REGEXP_ESCAPE)?;
    registry.register("JSRegExpNumericBackReference", BUILD_REGEXP_NUMERIC_BACK_REFERENCE)?;
    registry.register("JSRegExpQuantified", BUILD_REGEXP_QUANTIFIED)?;
    registry.register("JSRegExpStartCharacter", BUILD_REGEXP_ESCAPE)?;
    registry.register("JSRegExpSubExpression", BUILD_REGEXP_SUB_EXPRESSION)?;
    registry.register("JSRegExpWhiteSpaceCharacter", BUILD_REGEXP_ESCAPE)?;
    registry.register("JSRegExpWordBoundaryCharacter", BUILD_REGEXP_ESCAPE)?;
    registry.register("JSRegExpWordCharacter", BUILD_REGEXP_ESCAPE)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Node, Span};
    use crate::engine::{
        format_node, Comment, CommentStore, FormatEngine, FormatOptions, PrintContext,
    };

    fn registry() -> BuilderRegistry {
        let mut registry = BuilderRegistry::new();
        register(&mut registry).unwrap();
        registry
    }

    fn reference(name: &str) -> Node {
        Node::new("JSReferenceIdentifier").with_text(name)
    }

    #[test]
    fn return_statements_carry_their_argument() {
        let registry = registry();
        let options = FormatOptions::default();

        let bare = Node::new("JSReturnStatement");
        assert_eq!(
            format_node(&registry, &bare, options).unwrap(),
            Fragment::text("return").append(Fragment::text(";"))
        );

        let with_value = Node::new("JSReturnStatement").with_slot("argument", reference("x"));
        assert_eq!(
            format_node(&registry, &with_value, options).unwrap(),
            Fragment::text("return")
                .append(Fragment::space())
                .append(Fragment::text("x"))
                .append(Fragment::text(";"))
        );
    }

    #[test]
    fn infix_expressions_read_the_operator_from_the_node() {
        let registry = registry();
        let node = Node::new("JSBinaryExpression").with_text("+")
            .with_slot("left", Node::new("JSNumericLiteral").with_text("1"))
            .with_slot("right", Node::new("JSNumericLiteral").with_text("2"));

        let fragment = format_node(&registry, &node, FormatOptions::default()).unwrap();
        assert_eq!(
            fragment,
            Fragment::text("1")
                .append(Fragment::text(" + "))
                .append(Fragment::text("2"))
                .group()
        );
    }

    #[test]
    fn word_unary_operators_get_a_space() {
        let registry = registry();
        let options = FormatOptions::default();

        let negate = Node::new("JSUnaryExpression").with_text("!").with_slot("argument", reference("ok"));
        assert_eq!(
            format_node(&registry, &negate, options).unwrap(),
            Fragment::text("!").append(Fragment::text("ok"))
        );

        let type_of =
            Node::new("JSUnaryExpression").with_text("typeof").with_slot("argument", reference("ok"));
        assert_eq!(
            format_node(&registry, &type_of, options).unwrap(),
            Fragment::text("typeof ").append(Fragment::text("ok"))
        );
    }

    #[test]
    fn update_expressions_honor_the_postfix_marker() {
        let registry = registry();
        let options = FormatOptions::default();

        let prefix = Node::new("JSUpdateExpression").with_text("++").with_slot("argument", reference("i"));
        assert_eq!(
            format_node(&registry, &prefix, options).unwrap(),
            Fragment::text("++").append(Fragment::text("i"))
        );

        let postfix = Node::new("JSUpdateExpression").with_text("++")
            .with_slot("argument", reference("i"))
            .with_slot("postfix", Node::new("JSPatternMeta"));
        assert_eq!(
            format_node(&registry, &postfix, options).unwrap(),
            Fragment::text("i").append(Fragment::text("++"))
        );
    }

    #[test]
    fn member_chains_concatenate_their_pieces() {
        let registry = registry();
        let inner = Node::new("JSMemberExpression")
            .with_slot("object", reference("config"))
            .with_slot(
                "property",
                Node::new("JSStaticMemberProperty")
                    .with_slot("property", Node::new("JSIdentifier").with_text("db")),
            );
        let outer = Node::new("JSMemberExpression")
            .with_slot("object", inner)
            .with_slot(
                "property",
                Node::new("JSComputedMemberProperty")
                    .with_slot("expression", Node::new("JSStringLiteral").with_text("\"host\"")),
            );

        let fragment = format_node(&registry, &outer, FormatOptions::default()).unwrap();
        let rendered = format!("{fragment:?}");
        for piece in ["config", ".", "db", "[", "\\\"host\\\"", "]"] {
            assert!(rendered.contains(piece), "missing {piece} in {rendered}");
        }
    }

    #[test]
    fn template_literals_interleave_quasis_and_expressions() {
        let registry = registry();
        let node = Node::new("JSTemplateLiteral")
            .with_slot("quasis", Node::new("JSTemplateElement").with_text("hello "))
            .with_slot("expressions", reference("name"))
            .with_slot("quasis", Node::new("JSTemplateElement").with_text("!"));

        let fragment = format_node(&registry, &node, FormatOptions::default()).unwrap();
        assert_eq!(
            fragment,
            Fragment::list(vec![
                Fragment::text("`"),
                Fragment::text("hello "),
                Fragment::text("${"),
                Fragment::text("name"),
                Fragment::text("}"),
                Fragment::text("!"),
                Fragment::text("`"),
            ])
        );
    }

    #[test]
    fn regexp_escapes_derive_from_the_kind() {
        let registry = registry();
        let options = FormatOptions::default();

        let digit = Node::new("JSRegExpDigitCharacter");
        assert_eq!(
            format_node(&registry, &digit, options).unwrap(),
            Fragment::text("\\d")
        );

        let boundary = Node::new("JSRegExpNonWordBoundaryCharacter");
        assert_eq!(
            format_node(&registry, &boundary, options).unwrap(),
            Fragment::text("\\B")
        );
    }

    #[test]
    fn sparse_arrays_keep_their_holes() {
        let registry = registry();
        let node = Node::new("JSArrayExpression")
            .with_slot("elements", Node::new("JSNumericLiteral").with_text("1"))
            .with_slot("elements", Node::new("JSArrayHole"))
            .with_slot("elements", Node::new("JSNumericLiteral").with_text("3"));

        let fragment = format_node(&registry, &node, FormatOptions::default()).unwrap();
        let rendered = format!("{fragment:?}");
        // Two separators for three elements, hole contributing nothing.
        assert_eq!(rendered.matches("\",\"").count(), 2);
    }

    #[test]
    fn attached_comments_print_ahead_of_their_statement() {
        let registry = registry();
        let mut comments = CommentStore::new();
        comments.attach(40, Comment::line(" pause here"));

        let root = Node::new("JSRoot").with_slot(
            "body",
            Node::new("JSDebuggerStatement").with_span(Span::new(40, 49)),
        );

        let mut ctx = PrintContext::with_comments(FormatOptions::default(), comments);
        let engine = FormatEngine::new(&registry);
        let rendered = format!("{:?}", engine.build(&root, &mut ctx).unwrap());
        assert!(rendered.contains("// pause here"));
        assert!(rendered.contains("debugger"));
    }
}
