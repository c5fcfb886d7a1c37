//! The builder library: one builder for every node kind the grammars can
//! produce.
//!
//! ## Module Structure
//!
//! | Module    | Covers                                              |
//! |-----------|-----------------------------------------------------|
//! | `helpers` | Shared construction helpers and kind-derived emitters |
//! | `common`  | Comments and the test-support wrapper                |
//! | `js`      | The script grammar                                  |
//! | `jsx`     | The JSX sub-grammar                                 |
//! | `ts`      | The typed superset                                  |
//! | `html`    | The markup grammar                                  |
//! | `css`     | The stylesheet grammar                              |
//!
//! ## Design Principles
//!
//! 1. **One registration site per grammar.** Each module owns a `register`
//!    function listing its kinds; [`register_all`] strings them together.
//!    A builder is a plain `fn` value, so one builder may serve many kinds,
//!    but no kind may be claimed twice.
//! 2. **Canonical input.** Builders assume the node shape the parser
//!    guarantees. A missing optional slot prints as nothing; it is never an
//!    error.
//! 3. **Recursion through the engine.** Builders never call each other for
//!    child nodes; they hand children back to the engine so dispatch,
//!    ancestor tracking, and unknown-kind faults stay in one place.

pub mod common;
pub mod css;
pub mod helpers;
pub mod html;
pub mod js;
pub mod jsx;
pub mod ts;

use crate::diagnostics::FormatError;
use crate::registry::BuilderRegistry;

/// Registers every builder in the library, one grammar at a time.
///
/// Population is all-or-nothing: the first duplicate kind aborts with
/// [`FormatError::DuplicateRegistration`] and the partially filled registry
/// should be discarded.
pub fn register_all(registry: &mut BuilderRegistry) -> Result<(), FormatError> {
    common::register(registry)?;
    js::register(registry)?;
    jsx::register(registry)?;
    ts::register(registry)?;
    html::register(registry)?;
    css::register(registry)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::kind;

    #[test]
    fn every_declared_kind_gets_exactly_one_builder() {
        let mut registry = BuilderRegistry::new();
        register_all(&mut registry).unwrap();
        assert_eq!(registry.len(), kind::all().len());
    }
}
