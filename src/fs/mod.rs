//! Filesystem utilities for cfgtree.
//!
//! Config documents are only ever replaced whole, through atomic writes, so a
//! crash mid-save leaves either the old or the new document on disk.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
