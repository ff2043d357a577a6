//! cfgtree: path-addressed configuration trees persisted as JSON documents.
//!
//! Each component owns a namespace; each namespace holds one or more JSON
//! documents; each document decodes into a [`ConfigTree`] whose nodes are
//! addressed by dotted paths such as `graphics.resolution`.
//!
//! ```
//! use cfgtree::ConfigTree;
//!
//! let mut tree = ConfigTree::new();
//! tree.ensure_path("graphics.resolution", false)?;
//! tree.resolve_mut("graphics.resolution").unwrap().set_value(1080);
//!
//! assert_eq!(
//!     tree.to_json(),
//!     serde_json::json!({"graphics": {"resolution": {"0": 1080}}})
//! );
//! # Ok::<(), cfgtree::error::ConfigError>(())
//! ```

pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod registry;
pub mod storage;
pub mod tree;
pub mod value;

pub use error::{ConfigError, Result};
pub use registry::{ConfigRegistry, DocumentKey};
pub use storage::{FsStorage, MemoryStorage, Storage};
pub use tree::{ConfigTree, NodeId, NodeMut, NodeRef};
pub use value::{FromValue, Value};
