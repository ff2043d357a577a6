//! Path-addressed configuration trees.
//!
//! A [`ConfigTree`] owns every node in a flat arena. Nodes refer to their
//! children and parent through [`NodeId`] handles, so the parent back-reference
//! never owns anything. Reads go through [`NodeRef`], mutation through
//! [`NodeMut`]; both are cheap views borrowed from the tree.
//!
//! Every node is a leaf (holds a [`Value`], no children), a container (named
//! children, no value) or empty. Setting a value discards the subtree; adding a
//! child under a leaf turns it back into a container.

mod codec;
mod node;

#[cfg(test)]
mod tests;

pub use node::{NodeMut, NodeRef};

use crate::error::{ConfigError, Result};
use crate::value::Value;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Most nodes a single tree can hold, root included.
pub const MAX_NODES: usize = u32::MAX as usize;

/// Stable handle to a node inside one [`ConfigTree`].
///
/// Handles to deleted nodes stay invalid even after their slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    fn index(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct NodeData {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) value: Option<Value>,
    pub(crate) children: IndexMap<String, NodeId>,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    live: bool,
    data: NodeData,
}

/// An in-memory configuration document.
#[derive(Debug, Clone)]
pub struct ConfigTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
}

impl Default for ConfigTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigTree {
    /// Create a tree holding a single empty root node.
    pub fn new() -> Self {
        let root_slot = Slot {
            generation: 0,
            live: true,
            data: NodeData::default(),
        };
        Self {
            slots: vec![root_slot],
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        }
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, self.root)
    }

    pub fn root_mut(&mut self) -> NodeMut<'_> {
        let root = self.root;
        NodeMut::new(self, root)
    }

    /// View a node by handle, or `None` if the handle is stale.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.contains(id).then(|| NodeRef::new(self, id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<NodeMut<'_>> {
        if self.contains(id) {
            Some(NodeMut::new(self, id))
        } else {
            None
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slots
            .get(id.index())
            .is_some_and(|slot| slot.live && slot.generation == id.generation)
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Resolve a dotted path from the root. An empty path selects the root.
    pub fn resolve(&self, path: &str) -> Option<NodeRef<'_>> {
        self.root().resolve(path)
    }

    pub fn resolve_mut(&mut self, path: &str) -> Option<NodeMut<'_>> {
        let id = self.resolve(path)?.id();
        Some(NodeMut::new(self, id))
    }

    /// Create every missing segment of `path` below the root.
    pub fn add_node(&mut self, path: &str) -> Result<NodeId> {
        self.root_mut().add_node(path)
    }

    pub fn ensure_path(&mut self, path: &str, overwrite: bool) -> Result<NodeId> {
        self.root_mut().ensure_path(path, overwrite)
    }

    pub fn del_node(&mut self, path: &str) -> Result<()> {
        self.root_mut().del_node(path)
    }

    /// Decode a whole document. `null` and `{}` give an empty tree.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        let mut tree = Self::new();
        match json {
            serde_json::Value::Null => {}
            serde_json::Value::Object(object) => {
                let root = tree.root;
                codec::decode_into(&mut tree, root, object)?;
            }
            other => return Err(ConfigError::NotAnObject(json_kind(other))),
        }
        Ok(tree)
    }

    /// Parse and decode a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Self::from_json(&json)
    }

    /// Encode the whole tree.
    pub fn to_json(&self) -> serde_json::Value {
        self.root().to_json()
    }

    /// Pretty-printed JSON text of the whole tree.
    pub fn to_json_string(&self) -> Result<String> {
        self.root().to_json_string()
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.slots[id.index()].data
    }

    pub(crate) fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.slots[id.index()].data
    }

    /// Look up `key` under `parent`, creating an empty node if absent.
    ///
    /// A parent that still holds a value becomes a container.
    pub(crate) fn child_or_insert(&mut self, parent: NodeId, key: &str) -> Result<NodeId> {
        if let Some(&existing) = self.data(parent).children.get(key) {
            return Ok(existing);
        }
        self.attach_child(parent, key)
    }

    /// Attach a fresh empty node under `parent`, replacing any child with the
    /// same key.
    pub(crate) fn attach_child(&mut self, parent: NodeId, key: &str) -> Result<NodeId> {
        let child = self.alloc(key, parent)?;
        if let Some(dropped) = self.data_mut(parent).value.take() {
            let path = NodeRef::new(self, parent).full_path();
            let value_type = dropped.type_name();
            tracing::debug!(path = %path, value_type, "converting config leaf into container");
        }
        if let Some(previous) = self.data_mut(parent).children.insert(key.to_string(), child) {
            self.release(previous);
        }
        Ok(child)
    }

    /// Detach `key` from `parent` and release its subtree.
    pub(crate) fn remove_child(&mut self, parent: NodeId, key: &str) -> bool {
        match self.data_mut(parent).children.shift_remove(key) {
            Some(child) => {
                self.release(child);
                true
            }
            None => false,
        }
    }

    /// Release every child of `id`, leaving its value untouched.
    pub(crate) fn clear_children(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.data_mut(id).children);
        for (_, child) in children {
            self.release(child);
        }
    }

    fn alloc(&mut self, name: &str, parent: NodeId) -> Result<NodeId> {
        let data = NodeData {
            name: name.to_string(),
            parent: Some(parent),
            ..NodeData::default()
        };
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.live = true;
                slot.data = data;
                Ok(NodeId {
                    index,
                    generation: slot.generation,
                })
            }
            None => {
                let index = next_slot_index(self.slots.len())?;
                self.slots.push(Slot {
                    generation: 0,
                    live: true,
                    data,
                });
                Ok(NodeId {
                    index,
                    generation: 0,
                })
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if !self.contains(current) {
                continue;
            }
            let slot = &mut self.slots[current.index()];
            let data = std::mem::take(&mut slot.data);
            slot.live = false;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(current.index);
            pending.extend(data.children.into_values());
        }
    }
}

impl Serialize for ConfigTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Index for a slot appended to an arena of `len` slots.
pub(crate) fn next_slot_index(len: usize) -> Result<u32> {
    if len >= MAX_NODES {
        return Err(ConfigError::TooManyNodes { limit: MAX_NODES });
    }
    Ok(len as u32)
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
