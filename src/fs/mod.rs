//! File System Module
//!
//! The in-memory directory tree and the engine that navigates and mutates it.

pub mod types;
pub mod in_memory_fs;

pub use types::*;
pub use in_memory_fs::InMemoryFs;
