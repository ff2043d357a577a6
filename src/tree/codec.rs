//! JSON encoding of config trees.
//!
//! Leaves never become native JSON arrays. A leaf is written as an object
//! keyed by element index (`{"0": ...}` for a scalar, `{"0": ..., "1": ...}`
//! for a list), which lets the decoder recognise a value node purely from
//! its keys being numeric.

use super::{ConfigTree, NodeId, NodeRef};
use crate::error::Result;
use crate::value::Value;
use regex::Regex;
use serde_json::Map;
use std::cmp::Ordering;
use std::sync::LazyLock;

static INDEX_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid index key regex"));

pub(crate) fn encode(node: NodeRef<'_>) -> serde_json::Value {
    let mut object = Map::new();
    match node.value() {
        Some(Value::List(items)) => {
            for (index, item) in items.iter().enumerate() {
                object.insert(index.to_string(), item.to_json());
            }
        }
        Some(scalar) => {
            object.insert("0".to_string(), scalar.to_json());
        }
        None => {
            for child in node.children() {
                object.insert(child.name().to_string(), encode(child));
            }
        }
    }
    serde_json::Value::Object(object)
}

/// Fill the (empty) node `id` from `object`.
pub(crate) fn decode_into(
    tree: &mut ConfigTree,
    id: NodeId,
    object: &Map<String, serde_json::Value>,
) -> Result<()> {
    if object.is_empty() {
        return Ok(());
    }

    if is_value_object(object) {
        let mut keys: Vec<&String> = object.keys().collect();
        keys.sort_by(|a, b| compare_index_keys(a, b));
        let items = keys
            .into_iter()
            .filter_map(|key| object.get(key))
            .map(Value::from_json)
            .collect();
        tree.data_mut(id).value = Some(Value::List(items));
        return Ok(());
    }

    for (key, json) in object {
        match json {
            serde_json::Value::Object(child_object) => {
                let child = tree.attach_child(id, key)?;
                decode_into(tree, child, child_object)?;
            }
            other => {
                let path = NodeRef::new(tree, id).full_path();
                let found = Value::from_json(other).type_name();
                tracing::warn!(
                    path = %path,
                    key = %key,
                    found,
                    "dropping non-object entry from config container"
                );
            }
        }
    }
    Ok(())
}

fn is_value_object(object: &Map<String, serde_json::Value>) -> bool {
    !object.is_empty() && object.keys().all(|key| INDEX_KEY_REGEX.is_match(key))
}

/// Order digit-only keys by the integer they spell, without parsing them into
/// a bounded integer type.
fn compare_index_keys(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
