//! Borrowed node views.

use super::{ConfigTree, NodeData, NodeId, codec};
use crate::error::{ConfigError, Result};
use crate::value::{FromValue, Value};
use serde::de::DeserializeOwned;

/// Split a path for a mutating operation. Empty paths are rejected.
fn mutation_segments(path: &str) -> Result<std::str::Split<'_, char>> {
    if path.is_empty() {
        return Err(ConfigError::InvalidPath(path.to_string()));
    }
    Ok(path.split('.'))
}

/// Read-only view of one node.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a ConfigTree,
    id: NodeId,
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("path", &self.full_path())
            .field("value", &self.value())
            .field("children", &self.data().children.len())
            .finish()
    }
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a ConfigTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn data(&self) -> &'a NodeData {
        self.tree.data(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Key under the parent; empty for the root.
    pub fn name(&self) -> &'a str {
        &self.data().name
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.data().parent.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn is_root(&self) -> bool {
        self.data().parent.is_none()
    }

    /// Follow parent links up to the node without a parent.
    pub fn root(&self) -> NodeRef<'a> {
        let mut current = *self;
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Dotted path from the root (excluded) down to this node.
    pub fn full_path(&self) -> String {
        let mut names = Vec::new();
        let mut current = Some(*self);
        while let Some(node) = current {
            if !node.name().is_empty() {
                names.push(node.name());
            }
            current = node.parent();
        }
        names.reverse();
        names.join(".")
    }

    /// Walk `path` through child keys. An empty path selects this node.
    pub fn resolve(&self, path: &str) -> Option<NodeRef<'a>> {
        if path.is_empty() {
            return Some(*self);
        }
        let mut current = self.id;
        for segment in path.split('.') {
            current = *self.tree.data(current).children.get(segment)?;
        }
        Some(NodeRef::new(self.tree, current))
    }

    pub fn child(&self, key: &str) -> Option<NodeRef<'a>> {
        let id = *self.data().children.get(key)?;
        Some(NodeRef::new(self.tree, id))
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
        let tree = self.tree;
        self.data()
            .children
            .values()
            .map(move |&id| NodeRef::new(tree, id))
    }

    pub fn has_value(&self) -> bool {
        let data = self.data();
        data.value.is_some() && data.children.is_empty()
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.data().value.as_ref()
    }

    /// Typed read of the scalar, or of the first element of a list.
    ///
    /// Absence and a type mismatch both give `None`.
    pub fn get<T: FromValue>(&self) -> Option<T> {
        self.value()?.first_scalar().and_then(T::from_value)
    }

    /// Deserialize the element `get` would read into any serde type.
    pub fn get_as<T: DeserializeOwned>(&self) -> Option<T> {
        let element = self.value()?.first_scalar()?;
        serde_json::from_value(element.to_json()).ok()
    }

    pub fn get_string(&self) -> Option<String> {
        self.get()
    }

    pub fn get_int(&self) -> Option<i32> {
        self.get()
    }

    pub fn get_long(&self) -> Option<i64> {
        self.get()
    }

    pub fn get_bool(&self) -> Option<bool> {
        self.get()
    }

    pub fn get_double(&self) -> Option<f64> {
        self.get()
    }

    /// 1 for a scalar leaf, the element count for a list leaf, the child
    /// count otherwise.
    pub fn length(&self) -> usize {
        match self.value() {
            Some(Value::List(items)) => items.len(),
            Some(_) => 1,
            None => self.data().children.len(),
        }
    }

    /// Element `index` of a list leaf.
    pub fn get_element(&self, index: usize) -> Option<&'a Value> {
        self.value()?.as_list()?.get(index)
    }

    pub fn to_json(&self) -> serde_json::Value {
        codec::encode(*self)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

/// Mutable view of one node.
pub struct NodeMut<'a> {
    tree: &'a mut ConfigTree,
    id: NodeId,
}

impl<'a> NodeMut<'a> {
    pub(crate) fn new(tree: &'a mut ConfigTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn data_mut(&mut self) -> &mut NodeData {
        self.tree.data_mut(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn view(&self) -> NodeRef<'_> {
        NodeRef::new(self.tree, self.id)
    }

    pub fn into_ref(self) -> NodeRef<'a> {
        NodeRef::new(self.tree, self.id)
    }

    pub fn resolve_mut(&mut self, path: &str) -> Option<NodeMut<'_>> {
        let id = self.view().resolve(path)?.id();
        Some(NodeMut::new(self.tree, id))
    }

    /// Consume this view and continue at `path` below it.
    pub fn into_resolved(self, path: &str) -> Option<NodeMut<'a>> {
        let id = self.view().resolve(path)?.id();
        Some(NodeMut::new(self.tree, id))
    }

    /// Create every missing segment of `path` and return the last node.
    ///
    /// Existing nodes along the way are kept; a leaf on the way becomes a
    /// container.
    pub fn add_node(&mut self, path: &str) -> Result<NodeId> {
        let mut current = self.id;
        for segment in mutation_segments(path)? {
            current = self.tree.child_or_insert(current, segment)?;
        }
        tracing::debug!(path = %NodeRef::new(self.tree, current).full_path(), "added config node");
        Ok(current)
    }

    /// Make `path` exist.
    ///
    /// Without `overwrite` an existing target is returned untouched. With
    /// `overwrite` every missing segment is created as an empty container;
    /// nodes that already exist keep their values and children either way.
    pub fn ensure_path(&mut self, path: &str, overwrite: bool) -> Result<NodeId> {
        let segments = mutation_segments(path)?;
        if !overwrite {
            let mut existing = Some(self.id);
            for segment in segments {
                existing =
                    existing.and_then(|id| self.tree.data(id).children.get(segment).copied());
            }
            if let Some(id) = existing {
                return Ok(id);
            }
        }
        self.add_node(path)
    }

    /// Remove the last segment of `path` from its parent.
    ///
    /// A missing parent or a missing final key is not an error.
    pub fn del_node(&mut self, path: &str) -> Result<()> {
        let segments: Vec<&str> = mutation_segments(path)?.collect();
        let Some((last, parents)) = segments.split_last() else {
            return Ok(());
        };
        let mut parent = self.id;
        for segment in parents {
            match self.tree.data(parent).children.get(*segment) {
                Some(&next) => parent = next,
                None => return Ok(()),
            }
        }
        if self.tree.remove_child(parent, last) {
            tracing::debug!(path, "removed config node");
        }
        Ok(())
    }

    /// Store `value`, discarding any children.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.tree.clear_children(self.id);
        self.data_mut().value = Some(value.into());
    }

    /// Drop the value and every child.
    pub fn clear_value(&mut self) {
        self.tree.clear_children(self.id);
        self.data_mut().value = None;
    }

    /// Append an element.
    ///
    /// An unset node takes the element as its scalar value. A scalar is
    /// promoted to the list `[old, element]`. A list grows by one.
    pub fn add_element(&mut self, element: impl Into<Value>) {
        let element = element.into();
        let next = match self.data_mut().value.take() {
            None => {
                self.tree.clear_children(self.id);
                element
            }
            Some(Value::List(mut items)) => {
                items.push(element);
                Value::List(items)
            }
            Some(scalar) => Value::List(vec![scalar, element]),
        };
        self.data_mut().value = Some(next);
    }

    /// Replace element `index` of a list leaf. Non-list nodes are left alone.
    pub fn set_element(&mut self, element: impl Into<Value>, index: usize) -> Result<()> {
        if let Some(Value::List(items)) = &mut self.data_mut().value {
            let len = items.len();
            let slot = items
                .get_mut(index)
                .ok_or(ConfigError::IndexOutOfRange { index, len })?;
            *slot = element.into();
        }
        Ok(())
    }

    /// Remove element `index` of a list leaf and return it.
    ///
    /// Non-list nodes give `Ok(None)`. Removing the last element leaves an
    /// empty list behind.
    pub fn del_element(&mut self, index: usize) -> Result<Option<Value>> {
        match &mut self.data_mut().value {
            Some(Value::List(items)) => {
                if index >= items.len() {
                    return Err(ConfigError::IndexOutOfRange {
                        index,
                        len: items.len(),
                    });
                }
                Ok(Some(items.remove(index)))
            }
            _ => Ok(None),
        }
    }

    /// Decode `object` into a new child named `name`, replacing any existing
    /// child with that key.
    pub fn decode_child(
        &mut self,
        name: &str,
        object: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<NodeId> {
        let child = self.tree.attach_child(self.id, name)?;
        codec::decode_into(self.tree, child, object)?;
        Ok(child)
    }
}
