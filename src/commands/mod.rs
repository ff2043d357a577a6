//! Command implementations for cfgtree.
//!
//! Every command works on one document through a [`ConfigRegistry`] rooted at
//! `--root`. Mutating commands load the document, apply the change and save it
//! back in full.

use crate::cli::{Command, DocArgs, PathArgs, ShowArgs, ValueArgs};
use cfgtree::error::{ConfigError, Result};
use cfgtree::registry::ConfigRegistry;
use cfgtree::value::Value;
use std::io::Write;


/// Dispatch a command against `registry`, writing user-facing output to `out`.
pub fn dispatch(registry: &mut ConfigRegistry, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Init(args) => cmd_init(registry, args, out),
        Command::Show(args) => cmd_show(registry, args, out),
        Command::Get(args) => cmd_get(registry, args, out),
        Command::Set(args) => cmd_set(registry, args),
        Command::Push(args) => cmd_push(registry, args),
        Command::Add(args) => cmd_add(registry, args),
        Command::Del(args) => cmd_del(registry, args),
    }
}

fn cmd_init(registry: &mut ConfigRegistry, args: DocArgs, out: &mut impl Write) -> Result<()> {
    let key = args.key();
    registry.ensure_root()?;
    registry.create_document(&key)?;
    write_line(out, &registry.document_path(&key).display().to_string())
}

fn cmd_show(registry: &mut ConfigRegistry, args: ShowArgs, out: &mut impl Write) -> Result<()> {
    let tree = registry.get_or_load(&args.doc.key());
    let node = tree
        .resolve(&args.path)
        .ok_or_else(|| ConfigError::NodeNotFound(args.path.clone()))?;
    write_line(out, &node.to_json_string()?)
}

fn cmd_get(registry: &mut ConfigRegistry, args: PathArgs, out: &mut impl Write) -> Result<()> {
    let tree = registry.get_or_load(&args.doc.key());
    let node = tree
        .resolve(&args.path)
        .ok_or_else(|| ConfigError::NodeNotFound(args.path.clone()))?;
    let value = node
        .value()
        .filter(|_| node.has_value())
        .ok_or_else(|| ConfigError::NoValue(args.path.clone()))?;
    write_line(out, &serde_json::to_string(value)?)
}

fn cmd_set(registry: &mut ConfigRegistry, args: ValueArgs) -> Result<()> {
    let key = args.doc.key();
    let tree = registry.get_or_load(&key);
    let id = tree.ensure_path(&args.path, false)?;
    if let Some(mut node) = tree.node_mut(id) {
        node.set_value(parse_value(&args.value));
    }
    registry.save(&key)
}

fn cmd_push(registry: &mut ConfigRegistry, args: ValueArgs) -> Result<()> {
    let key = args.doc.key();
    let tree = registry.get_or_load(&key);
    let id = tree.ensure_path(&args.path, false)?;
    if let Some(mut node) = tree.node_mut(id) {
        node.add_element(parse_value(&args.value));
    }
    registry.save(&key)
}

fn cmd_add(registry: &mut ConfigRegistry, args: PathArgs) -> Result<()> {
    let key = args.doc.key();
    registry.get_or_load(&key).ensure_path(&args.path, false)?;
    registry.save(&key)
}

fn cmd_del(registry: &mut ConfigRegistry, args: PathArgs) -> Result<()> {
    let key = args.doc.key();
    registry.get_or_load(&key).del_node(&args.path)?;
    registry.save(&key)
}

/// Interpret a command-line value.
///
/// JSON scalars keep their type, arrays become lists, objects are stored as
/// opaque JSON, and anything that is not valid JSON is a plain string.
pub(crate) fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => {
            Value::List(items.iter().map(Value::from_json).collect())
        }
        Ok(json) => Value::from_json(&json),
        Err(_) => Value::String(raw.to_string()),
    }
}

fn write_line(out: &mut impl Write, text: &str) -> Result<()> {
    writeln!(out, "{}", text).map_err(|e| ConfigError::Io {
        path: "<stdout>".into(),
        source: e,
    })
}
