//! Defines the command-line arguments and subcommands for the galley CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "galley",
    version,
    about = "The builder registry and dispatch core of a multi-language source-code formatter."
)]
pub struct GalleyArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Audit builder coverage against the declared node kinds.
    Audit,
    /// List every node kind, optionally restricted to one grammar.
    Kinds {
        /// Grammar to list: common, script, typed, markup, or stylesheet.
        #[arg(long)]
        grammar: Option<String>,
    },
    /// Build the layout fragment for a node read from a JSON file.
    Build {
        /// The path to the JSON-encoded node.
        #[arg(required = true)]
        file: PathBuf,
        /// Spaces per indentation level.
        #[arg(long, default_value_t = 2)]
        indent_width: usize,
        /// Preferred maximum line width in columns.
        #[arg(long, default_value_t = 80)]
        line_width: usize,
        /// Keep markup text runs exactly as written.
        #[arg(long)]
        preserve_markup_whitespace: bool,
    },
}
