use galley::ast::Node;
use galley::diagnostics::FormatError;
use galley::doc::Fragment;
use galley::engine::{format_node, FormatOptions};
use galley::registry::{BuilderFn, BuilderRegistry};

// ---
// Test Setup
// ---

const ECHO_KIND: BuilderFn = |node, _ctx, _engine| Ok(Fragment::text(node.kind().to_string()));
const FIRST: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::text("first"));
const SECOND: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::text("second"));

fn build_with(registry: &BuilderRegistry, kind: &str) -> Fragment {
    format_node(registry, &Node::new(kind), FormatOptions::default()).unwrap()
}

// ---
// Lifecycle
// ---

#[test]
fn test_registry_starts_empty() {
    let registry = BuilderRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.lookup("JSIdentifier").is_none());
}

#[test]
fn test_registration_then_lookup_round_trips_behaviorally() {
    let mut registry = BuilderRegistry::new();
    registry.register("JSIdentifier", ECHO_KIND).unwrap();

    assert!(registry.contains("JSIdentifier"));
    assert_eq!(
        build_with(&registry, "JSIdentifier"),
        Fragment::text("JSIdentifier")
    );
}

#[test]
fn test_one_builder_may_serve_many_kinds() {
    let mut registry = BuilderRegistry::new();
    registry.register("HTMLText", ECHO_KIND).unwrap();
    registry.register("JSXText", ECHO_KIND).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(build_with(&registry, "HTMLText"), Fragment::text("HTMLText"));
    assert_eq!(build_with(&registry, "JSXText"), Fragment::text("JSXText"));
}

// ---
// Duplicate Registration
// ---

#[test]
fn test_duplicate_registration_faults_and_names_the_kind() {
    let mut registry = BuilderRegistry::new();
    registry.register("CSSRoot", FIRST).unwrap();

    let err = registry.register("CSSRoot", SECOND).err().expect("should fault");
    match &err {
        FormatError::DuplicateRegistration { kind } => assert_eq!(kind, "CSSRoot"),
        other => panic!("wrong fault: {other:?}"),
    }
    assert!(err.to_string().contains("CSSRoot"));
}

#[test]
fn test_duplicate_registration_preserves_the_original_builder() {
    let mut registry = BuilderRegistry::new();
    registry.register("CSSRoot", FIRST).unwrap();
    let _ = registry.register("CSSRoot", SECOND);

    // No last-wins: the original mapping survives the failed attempt.
    assert_eq!(registry.len(), 1);
    assert_eq!(build_with(&registry, "CSSRoot"), Fragment::text("first"));
}

#[test]
fn test_same_builder_twice_for_one_kind_still_faults() {
    // Uniqueness is per kind, not per function value.
    let mut registry = BuilderRegistry::new();
    registry.register("CSSRoot", FIRST).unwrap();
    assert!(registry.register("CSSRoot", FIRST).is_err());
}

// ---
// Iteration
// ---

#[test]
fn test_iteration_reports_the_registered_kind_set() {
    let mut registry = BuilderRegistry::new();
    registry.register("CSSSelectorTag", ECHO_KIND).unwrap();
    registry.register("HTMLText", ECHO_KIND).unwrap();
    registry.register("JSIdentifier", ECHO_KIND).unwrap();

    let mut kinds: Vec<_> = registry.kinds().collect();
    kinds.sort();
    assert_eq!(kinds, vec!["CSSSelectorTag", "HTMLText", "JSIdentifier"]);

    let mut via_iter: Vec<_> = registry.iter().map(|(kind, _)| kind).collect();
    via_iter.sort();
    assert_eq!(via_iter, kinds);
}
