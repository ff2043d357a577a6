//! CLI argument parsing for cfgtree.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use cfgtree::registry::{DEFAULT_DOCUMENT, DocumentKey};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default root directory holding one directory per namespace.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// cfgtree: inspect and edit path-addressed JSON config documents.
///
/// Documents live at `<root>/<namespace>/<document>.json`. Nodes are
/// addressed by dotted paths such as `graphics.resolution`.
#[derive(Parser, Debug)]
#[command(name = "cfgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Root directory holding namespace directories.
    #[arg(long, global = true, env = "CFGTREE_ROOT", default_value = DEFAULT_CONFIG_DIR)]
    pub root: PathBuf,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the namespace directory and an empty document if missing.
    Init(DocArgs),

    /// Print the JSON encoding of a node (the whole document by default).
    Show(ShowArgs),

    /// Print the value stored at a path.
    Get(PathArgs),

    /// Set the value at a path, creating the path if needed.
    ///
    /// The value is parsed as JSON when possible (`1080`, `true`, `"text"`,
    /// `[1, 2]`) and stored as a plain string otherwise.
    Set(ValueArgs),

    /// Append an element to the value at a path.
    ///
    /// A scalar becomes a two-element list on the first push.
    Push(ValueArgs),

    /// Create an empty node at a path.
    Add(PathArgs),

    /// Delete the node at a path.
    Del(PathArgs),
}

/// Selects one document.
#[derive(Args, Debug, Clone)]
pub struct DocArgs {
    /// Namespace owning the document.
    pub namespace: String,

    /// Document name within the namespace.
    #[arg(long, default_value = DEFAULT_DOCUMENT)]
    pub doc: String,
}

impl DocArgs {
    pub fn key(&self) -> DocumentKey {
        DocumentKey::with_document(&self.namespace, &self.doc)
    }
}

/// Arguments for the `show` command.
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// Dotted node path; omitted shows the whole document.
    #[arg(default_value = "")]
    pub path: String,
}

/// Arguments for commands addressing one node.
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// Dotted node path.
    pub path: String,
}

/// Arguments for commands writing a value.
#[derive(Args, Debug, Clone)]
pub struct ValueArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// Dotted node path.
    pub path: String,

    /// Value to store.
    pub value: String,
}
