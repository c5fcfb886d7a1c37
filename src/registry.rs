//! # Galley: Builder Registry
//!
//! The lookup table at the heart of dispatch: at most one formatting builder
//! per node-kind tag, across every grammar the formatter understands. Tags
//! live in a single flat namespace, so one registry serves script, typed,
//! markup, and stylesheet nodes alike.
//!
//! ## Lifecycle
//!
//! A registry is created empty, populated synchronously during startup, and
//! treated as read-only for the rest of the run. [`build_default_registry`]
//! is the canonical constructor for production use; tests that need
//! isolation build their own small registries with [`BuilderRegistry::new`]
//! and [`BuilderRegistry::register`].
//!
//! Registry invariant: the registry is a single source of truth. Construct
//! it once at the entrypoint and pass it by reference to dispatch; never
//! construct a local or hidden registry mid-format.
//!
//! ## API summary
//!
//! | Method                          | Purpose                                   |
//! |---------------------------------|-------------------------------------------|
//! | [`BuilderRegistry::new`]        | Empty registry                            |
//! | [`BuilderRegistry::register`]   | Bind a builder to a kind; duplicates fail |
//! | [`BuilderRegistry::lookup`]     | Resolve a kind to its builder             |
//! | [`BuilderRegistry::contains`]   | Membership test                           |
//! | [`BuilderRegistry::len`]        | Number of registered kinds                |
//! | [`BuilderRegistry::kinds`]      | Iterate registered tags (audit tooling)   |
//! | [`BuilderRegistry::iter`]       | Iterate `(tag, builder)` pairs            |
//! | [`build_default_registry`]      | The full production registry              |

use im::HashMap;

use crate::ast::Node;
use crate::builders;
use crate::diagnostics::FormatError;
use crate::doc::Fragment;
use crate::engine::{FormatEngine, PrintContext};

/// The formatting contract every builder satisfies.
///
/// A builder receives the node to format, the mutable print context, and a
/// handle back into the engine for formatting child nodes. It returns the
/// node's print fragment, or a [`FormatError`] that aborts the whole format.
///
/// Builders are plain function pointers, so non-capturing closures coerce
/// directly:
///
/// ```rust
/// use galley::doc::Fragment;
/// use galley::registry::BuilderFn;
///
/// let echo: BuilderFn = |node, _ctx, _engine| Ok(Fragment::text(node.kind()));
/// ```
pub type BuilderFn =
    fn(&Node, &mut PrintContext, &FormatEngine) -> Result<Fragment, FormatError>;

/// Maps node-kind tags to their builders.
///
/// # Examples
///
/// ```rust
/// use galley::doc::Fragment;
/// use galley::registry::{BuilderFn, BuilderRegistry};
///
/// let leaf: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::text("this"));
/// let mut registry = BuilderRegistry::new();
/// registry.register("JSThisExpression", leaf).unwrap();
///
/// assert!(registry.contains("JSThisExpression"));
/// assert!(registry.lookup("JSThisExpression").is_some());
/// assert!(registry.lookup("JSNullLiteral").is_none());
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuilderRegistry {
    builders: HashMap<String, BuilderFn>,
}

impl BuilderRegistry {
    /// Creates an empty registry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use galley::registry::BuilderRegistry;
    /// let registry = BuilderRegistry::new();
    /// assert!(registry.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `builder` to `kind`.
    ///
    /// Registering a kind that already has a builder fails with
    /// [`FormatError::DuplicateRegistration`] and leaves the existing binding
    /// untouched. Population code propagates that error, so a duplicate
    /// aborts registry construction rather than silently shadowing a
    /// builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use galley::doc::Fragment;
    /// use galley::registry::{BuilderFn, BuilderRegistry};
    ///
    /// let b: BuilderFn = |_node, _ctx, _engine| Ok(Fragment::nil());
    /// let mut registry = BuilderRegistry::new();
    /// assert!(registry.register("JSArrayHole", b).is_ok());
    /// assert!(registry.register("JSArrayHole", b).is_err());
    /// ```
    pub fn register(&mut self, kind: &str, builder: BuilderFn) -> Result<(), FormatError> {
        // Guard clause: a second builder for the same kind is a population
        // bug, never a request to replace.
        if self.builders.contains_key(kind) {
            return Err(FormatError::duplicate_registration(kind));
        }

        self.builders.insert(kind.to_string(), builder);
        Ok(())
    }

    /// Resolves `kind` to its builder, or `None` when nothing is registered
    /// for it.
    ///
    /// Lookup is pure: it never registers, mutates, or falls back.
    pub fn lookup(&self, kind: &str) -> Option<BuilderFn> {
        self.builders.get(kind).copied()
    }

    /// True when `kind` has a registered builder.
    pub fn contains(&self, kind: &str) -> bool {
        self.builders.contains_key(kind)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// True when nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Iterates the registered kind tags, in no particular order.
    ///
    /// This exists for coverage tooling; dispatch itself only ever calls
    /// [`lookup`](Self::lookup).
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }

    /// Iterates `(tag, builder)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, BuilderFn)> {
        self.builders.iter().map(|(kind, builder)| (kind.as_str(), *builder))
    }
}

/// Builds the fully populated production registry, with every grammar's
/// builders registered.
///
/// # Examples
///
/// ```rust
/// use galley::registry::build_default_registry;
///
/// let registry = build_default_registry().unwrap();
/// assert!(registry.contains("JSRoot"));
/// assert!(registry.contains("CSSRoot"));
/// assert!(registry.contains("HTMLRoot"));
/// ```
#[inline]
pub fn build_default_registry() -> Result<BuilderRegistry, FormatError> {
    let mut registry = BuilderRegistry::new();
    builders::register_all(&mut registry)?;
    Ok(registry)
}
