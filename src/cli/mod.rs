//! The command-line surface of the formatter core.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions: a builder-coverage audit, a kind-tag listing,
//! and a one-shot fragment build for a JSON-encoded node.

use std::{fs, path::PathBuf, process};

use clap::Parser;

use crate::ast::Node;
use crate::cli::args::{Command, GalleyArgs};
use crate::cli::output::{print_audit, print_kind_list};
use crate::engine::{format_node, FormatOptions};
use crate::registry::{build_default_registry, BuilderRegistry};
use crate::syntax::{kind, Grammar};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = GalleyArgs::parse();

    match args.command {
        Command::Audit => run_audit(),

        Command::Kinds { grammar } => run_kinds(grammar),

        Command::Build {
            file,
            indent_width,
            line_width,
            preserve_markup_whitespace,
        } => {
            let options = FormatOptions {
                indent_width,
                line_width,
                preserve_markup_whitespace,
            };
            run_build(&file, options);
        }
    }
}

// ============================================================================
// COVERAGE AUDIT
// ============================================================================

/// The outcome of diffing the registry's key set against the declared kinds.
#[derive(Debug, Default)]
pub struct AuditReport {
    /// Declared kinds with no registered builder.
    pub missing: Vec<String>,
    /// Registered kinds no grammar declares.
    pub orphaned: Vec<String>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.orphaned.is_empty()
    }
}

/// Diffs builder coverage in both directions: declared kinds without a
/// builder, and registered kinds no grammar declares.
pub fn audit_coverage(registry: &BuilderRegistry) -> AuditReport {
    let mut report = AuditReport::default();

    for tag in kind::all() {
        if !registry.contains(tag) {
            report.missing.push((*tag).to_string());
        }
    }
    for tag in registry.kinds() {
        if !kind::is_known(tag) {
            report.orphaned.push(tag.to_string());
        }
    }
    report.orphaned.sort();

    report
}

fn run_audit() {
    let registry = build_registry_or_exit();
    let report = audit_coverage(&registry);
    print_audit(&report, &registry);
    if !report.is_clean() {
        process::exit(1);
    }
}

// ============================================================================
// KIND LISTING
// ============================================================================

fn run_kinds(grammar: Option<String>) {
    let Some(name) = grammar else {
        print_kind_list(kind::all());
        return;
    };

    let Some(grammar) = Grammar::from_name(&name) else {
        eprintln!(
            "Unknown grammar '{name}'. Expected one of: common, script, typed, markup, stylesheet."
        );
        process::exit(1);
    };
    print_kind_list(grammar.kinds());
}

// ============================================================================
// ONE-SHOT FRAGMENT BUILD
// ============================================================================

fn run_build(file: &PathBuf, options: FormatOptions) {
    let source = read_file_or_exit(file);
    let node: Node = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error parsing node file {}: {e}", file.display());
        process::exit(1);
    });

    let registry = build_registry_or_exit();
    let fragment = format_node(&registry, &node, options).unwrap_or_else(|e| {
        // Let miette handle the rich error display.
        let report = miette::Report::new(e);
        eprintln!("{report:?}");
        process::exit(1);
    });

    let json = serde_json::to_string_pretty(&fragment).unwrap_or_else(|e| {
        eprintln!("Error serializing fragment: {e}");
        process::exit(1);
    });
    println!("{json}");
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn build_registry_or_exit() -> BuilderRegistry {
    build_default_registry().unwrap_or_else(|e| {
        let report = miette::Report::new(e);
        eprintln!("{report:?}");
        process::exit(1);
    })
}

fn read_file_or_exit(path: &PathBuf) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        process::exit(1);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_is_clean_for_the_default_registry() {
        let registry = build_default_registry().unwrap();
        let report = audit_coverage(&registry);
        assert!(report.is_clean(), "missing={:?} orphaned={:?}", report.missing, report.orphaned);
    }

    #[test]
    fn audit_flags_gaps_in_both_directions() {
        let mut registry = BuilderRegistry::new();
        registry
            .register("NotInAnyGrammar", |_, _, _| Ok(crate::doc::Fragment::nil()))
            .unwrap();

        let report = audit_coverage(&registry);
        assert!(!report.is_clean());
        assert_eq!(report.orphaned, vec!["NotInAnyGrammar".to_string()]);
        // Every declared kind is unregistered in this registry.
        assert_eq!(report.missing.len(), kind::all().len());
    }
}
