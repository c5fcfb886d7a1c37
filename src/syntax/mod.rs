//! Grammar metadata: the authoritative enumeration of node-kind tags and
//! their grouping into grammars.

pub mod kind;

pub use kind::Grammar;
