//! Registry of loaded config documents.
//!
//! A [`ConfigRegistry`] is the explicit context object callers pass around
//! instead of a process-wide table. It owns at most one [`ConfigTree`] per
//! [`DocumentKey`] and maps keys onto files:
//!
//! ```text
//! <root>/<namespace>/<document>.json
//! ```
//!
//! Loading never fails: a missing or corrupt document degrades to an empty tree
//! (logged at `warn`) so the owning component can keep running with defaults.

use crate::error::{ConfigError, Result};
use crate::storage::{FsStorage, Storage};
use crate::tree::ConfigTree;
use crate::value::{FromValue, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::path::{Path, PathBuf};

/// Document name used when a namespace has a single document.
pub const DEFAULT_DOCUMENT: &str = "config";

/// File extension of persisted documents.
pub const DOCUMENT_EXTENSION: &str = ".json";

/// Contents written for a freshly created document.
pub const EMPTY_DOCUMENT: &str = "{}";

/// Address of one document: a namespace plus a document name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentKey {
    pub namespace: String,
    pub document: String,
}

impl DocumentKey {
    /// The default document (`config`) of `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::with_document(namespace, DEFAULT_DOCUMENT)
    }

    /// A named document. A trailing `.json` on the name is dropped so
    /// `settings` and `settings.json` address the same file.
    pub fn with_document(namespace: impl Into<String>, document: impl Into<String>) -> Self {
        let document = document.into();
        let document = match document.strip_suffix(DOCUMENT_EXTENSION) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => document,
        };
        Self {
            namespace: namespace.into(),
            document,
        }
    }

    /// File name of the document, extension included.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.document, DOCUMENT_EXTENSION)
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.document)
    }
}

/// Loaded config documents keyed by namespace and document name.
pub struct ConfigRegistry {
    root: PathBuf,
    storage: Box<dyn Storage>,
    trees: HashMap<DocumentKey, ConfigTree>,
}

impl fmt::Debug for ConfigRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigRegistry")
            .field("root", &self.root)
            .field("loaded", &self.trees.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ConfigRegistry {
    /// Registry over the local filesystem rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_storage(root, FsStorage)
    }

    pub fn with_storage(root: impl Into<PathBuf>, storage: impl Storage + 'static) -> Self {
        Self {
            root: root.into(),
            storage: Box::new(storage),
            trees: HashMap::new(),
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet.
    pub fn ensure_root(&self) -> Result<()> {
        if !self.storage.exists(&self.root) {
            self.storage.create_dir_all(&self.root)?;
            tracing::info!(root = %self.root.display(), "created config root directory");
        }
        Ok(())
    }

    pub fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.root.join(namespace)
    }

    pub fn document_path(&self, key: &DocumentKey) -> PathBuf {
        self.namespace_path(&key.namespace).join(key.file_name())
    }

    pub fn namespace_exists(&self, namespace: &str) -> bool {
        self.storage.exists(&self.namespace_path(namespace))
    }

    /// True when the document file exists and is not a directory.
    pub fn document_exists(&self, key: &DocumentKey) -> bool {
        self.storage.is_file(&self.document_path(key))
    }

    pub fn create_namespace_dir(&self, namespace: &str) -> Result<()> {
        let dir = self.namespace_path(namespace);
        if !self.storage.exists(&dir) {
            self.storage.create_dir_all(&dir)?;
            tracing::debug!(dir = %dir.display(), "created namespace directory");
        }
        Ok(())
    }

    /// Create the namespace directory and an empty document. An existing
    /// document is left untouched.
    pub fn create_document(&self, key: &DocumentKey) -> Result<()> {
        self.create_namespace_dir(&key.namespace)?;
        let path = self.document_path(key);
        if !self.storage.exists(&path) {
            self.storage.write_text(&path, EMPTY_DOCUMENT)?;
            tracing::info!(path = %path.display(), "created config document");
        }
        Ok(())
    }

    /// Decode the document on disk without caching it.
    ///
    /// Returns `None` when the file is missing, unreadable or corrupt.
    pub fn read_document(&self, key: &DocumentKey) -> Option<ConfigTree> {
        let path = self.document_path(key);
        if !self.storage.is_file(&path) {
            return None;
        }
        match decode_file(self.storage.as_ref(), &path) {
            Ok(tree) => Some(tree),
            Err(e) => {
                tracing::warn!(document = %key, error = %e, "failed to read config document");
                None
            }
        }
    }

    /// Read the document into the registry, replacing any cached tree.
    pub fn load(&mut self, key: &DocumentKey) -> &mut ConfigTree {
        let tree = read_or_empty(self.storage.as_ref(), &self.document_path(key), key);
        match self.trees.entry(key.clone()) {
            Entry::Occupied(mut entry) => {
                entry.insert(tree);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(tree),
        }
    }

    /// The cached tree, loading it first if needed.
    pub fn get_or_load(&mut self, key: &DocumentKey) -> &mut ConfigTree {
        let path = self.document_path(key);
        let storage = &*self.storage;
        self.trees
            .entry(key.clone())
            .or_insert_with(|| read_or_empty(storage, &path, key))
    }

    pub fn tree(&self, key: &DocumentKey) -> Option<&ConfigTree> {
        self.trees.get(key)
    }

    pub fn tree_mut(&mut self, key: &DocumentKey) -> Option<&mut ConfigTree> {
        self.trees.get_mut(key)
    }

    /// Cache `tree` under `key`, returning the tree it replaced.
    pub fn insert(&mut self, key: DocumentKey, tree: ConfigTree) -> Option<ConfigTree> {
        self.trees.insert(key, tree)
    }

    /// Drop the cached tree without saving it.
    pub fn unload(&mut self, key: &DocumentKey) -> Option<ConfigTree> {
        self.trees.remove(key)
    }

    pub fn is_loaded(&self, key: &DocumentKey) -> bool {
        self.trees.contains_key(key)
    }

    pub fn loaded_keys(&self) -> impl Iterator<Item = &DocumentKey> {
        self.trees.keys()
    }

    /// Write the cached tree for `key` back to its document.
    pub fn save(&self, key: &DocumentKey) -> Result<()> {
        let tree = self
            .trees
            .get(key)
            .ok_or_else(|| ConfigError::NotLoaded(key.clone()))?;
        let path = self.document_path(key);
        self.storage.write_text(&path, &tree.to_json_string()?)?;
        tracing::debug!(document = %key, path = %path.display(), "saved config document");
        Ok(())
    }

    /// Cache `tree` under `key` and save it.
    pub fn save_tree(&mut self, key: &DocumentKey, tree: ConfigTree) -> Result<()> {
        self.trees.insert(key.clone(), tree);
        self.save(key)
    }

    /// Set the value of an existing node in a loaded document.
    pub fn set_value(
        &mut self,
        key: &DocumentKey,
        path: &str,
        value: impl Into<Value>,
    ) -> Result<()> {
        let tree = self
            .trees
            .get_mut(key)
            .ok_or_else(|| ConfigError::NotLoaded(key.clone()))?;
        match tree.resolve_mut(path) {
            Some(mut node) => {
                node.set_value(value);
                Ok(())
            }
            None => {
                tracing::warn!(document = %key, path, "config node does not exist");
                Err(ConfigError::NodeNotFound(path.to_string()))
            }
        }
    }

    /// Typed read from a loaded document. Missing document, missing node and
    /// type mismatch all give `None`.
    pub fn get_value<T: FromValue>(&self, key: &DocumentKey, path: &str) -> Option<T> {
        self.trees.get(key)?.resolve(path)?.get()
    }
}

fn read_or_empty(storage: &dyn Storage, path: &Path, key: &DocumentKey) -> ConfigTree {
    match decode_file(storage, path) {
        Ok(tree) => {
            tracing::debug!(document = %key, nodes = tree.node_count(), "loaded config document");
            tree
        }
        Err(e) => {
            tracing::warn!(
                document = %key,
                path = %path.display(),
                error = %e,
                "can't load config document, starting from an empty tree"
            );
            ConfigTree::new()
        }
    }
}

fn decode_file(storage: &dyn Storage, path: &Path) -> Result<ConfigTree> {
    let text = storage.read_text(path)?;
    ConfigTree::from_json_str(&text)
}
