//! Handles all user-facing output for the CLI.
//!
//! By centralizing the printing logic here, every command colors and lays out
//! its reports the same way.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::AuditReport;
use crate::registry::BuilderRegistry;
use crate::syntax::Grammar;

/// Prints one kind tag per line.
pub fn print_kind_list(kinds: &[&str]) {
    for tag in kinds {
        println!("{tag}");
    }
}

/// Prints the coverage audit: per-grammar tallies first, then any gaps in
/// color, then a green all-clear when there are none.
pub fn print_audit(report: &AuditReport, registry: &BuilderRegistry) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    let _ = stdout.set_color(ColorSpec::new().set_bold(true));
    println!("Builder coverage audit");
    let _ = stdout.reset();

    for grammar in Grammar::ALL {
        let kinds = grammar.kinds();
        let covered = kinds.iter().filter(|tag| registry.contains(tag)).count();
        println!("  {:<10} {:>3}/{} kinds", grammar.name(), covered, kinds.len());
    }
    println!();

    print_audit_section(&mut stdout, &report.missing, Color::Red, "Missing builders");
    print_audit_section(
        &mut stdout,
        &report.orphaned,
        Color::Yellow,
        "Orphaned registrations",
    );

    if report.is_clean() {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
        println!(
            "Coverage audit passed: {} kinds, one builder each",
            registry.len()
        );
        let _ = stdout.reset();
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn print_audit_section(stdout: &mut StandardStream, items: &[String], color: Color, title: &str) {
    // Guard clause - skip empty sections
    if items.is_empty() {
        return;
    }

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    println!("{title}:");
    let _ = stdout.reset();
    for item in items {
        println!("  • {item}");
    }
    println!();
}
