pub use crate::diagnostics::FormatError;
pub use crate::engine::{format_node, FormatEngine, FormatOptions, PrintContext};
pub use crate::registry::{build_default_registry, BuilderFn, BuilderRegistry};

pub mod ast;
pub mod builders;
pub mod cli;
pub mod diagnostics;
pub mod doc;
pub mod engine;
pub mod registry;
pub mod syntax;
