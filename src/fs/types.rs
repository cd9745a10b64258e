//! File System Types
//!
//! Core types for the in-memory directory tree.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{name}'")]
    NotFound { name: String, operation: String },

    #[error("EINVAL: invalid source or destination, cp '{src}' '{dest}'")]
    InvalidCopy { src: String, dest: String },
}

impl FsError {
    pub(crate) fn not_found(name: &str, operation: &str) -> Self {
        FsError::NotFound {
            name: name.to_string(),
            operation: operation.to_string(),
        }
    }
}

/// Handle of a directory node inside the engine's arena.
///
/// A handle carries the generation of its slot, so a handle to a freed
/// directory never matches whatever later reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl DirId {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(self) -> usize {
        self.index
    }
}

/// A named content blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    pub content: String,
}

impl File {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// A file with empty content, as created by `touch`.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }
}

/// An owned directory subtree.
///
/// The engine stores directories in an arena; this type is what a subtree
/// looks like once detached from it (deep-clone snapshots, JSON dumps).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    pub name: String,
    pub subdirectories: Vec<Directory>,
    pub files: Vec<File>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subdirectories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Number of directories in this subtree, including itself.
    pub fn directory_count(&self) -> usize {
        1 + self.subdirectories.iter().map(Directory::directory_count).sum::<usize>()
    }

    /// Number of files anywhere in this subtree.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.subdirectories.iter().map(Directory::file_count).sum::<usize>()
    }
}

/// Outcome of resolving a path string against a starting directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Every segment matched.
    Complete(DirId),
    /// Resolution stopped at `reached` because `missing` named no subdirectory.
    Partial { reached: DirId, missing: String },
    /// The first step already failed; the path names nothing.
    Unresolved { missing: String },
}

impl Resolution {
    /// Directory the path lands on, following the partial-match policy.
    pub fn target(&self) -> Option<DirId> {
        match self {
            Resolution::Complete(id) => Some(*id),
            Resolution::Partial { reached, .. } => Some(*reached),
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Resolution::Complete(_))
    }
}

/// Immediate contents of one directory, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub name: String,
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Contents of {}:", self.name)?;
        for dir in &self.directories {
            writeln!(f, "{}/", dir)?;
        }
        for file in &self.files {
            writeln!(f, "{}", file)?;
        }
        Ok(())
    }
}

/// What `rm` actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removed {
    /// A directory was emptied in place; counts cover everything freed.
    DirectoryEmptied {
        id: DirId,
        directories: usize,
        files: usize,
    },
    /// A single file was removed from the current directory.
    File(File),
}

/// What `mv` did: the copy and the remove are reported separately because
/// the remove runs whether or not the copy succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moved {
    pub copied: Result<(), FsError>,
    pub removed: Result<Removed, FsError>,
}

impl Moved {
    pub fn is_ok(&self) -> bool {
        self.copied.is_ok() && self.removed.is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_nodes_are_empty() {
        let dir = Directory::new("docs");
        assert_eq!(dir.name, "docs");
        assert!(dir.subdirectories.is_empty());
        assert!(dir.files.is_empty());

        let file = File::empty("readme");
        assert_eq!(file.content, "");
    }

    #[test]
    fn test_subtree_counts() {
        let mut root = Directory::new("/");
        let mut a = Directory::new("a");
        a.files.push(File::new("x", "1"));
        a.subdirectories.push(Directory::new("b"));
        root.subdirectories.push(a);
        root.files.push(File::empty("y"));

        assert_eq!(root.directory_count(), 3);
        assert_eq!(root.file_count(), 2);
    }

    #[test]
    fn test_directory_json_shape() {
        let mut root = Directory::new("/");
        root.files.push(File::new("readme", "hi"));
        root.subdirectories.push(Directory::new("docs"));

        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["name"], "/");
        assert_eq!(json["files"][0]["content"], "hi");
        assert_eq!(json["subdirectories"][0]["name"], "docs");

        let back: Directory = serde_json::from_value(json).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn test_resolution_target() {
        let id = DirId::new(3, 0);
        assert_eq!(Resolution::Complete(id).target(), Some(id));
        let reached = DirId::new(1, 2);
        let partial = Resolution::Partial { reached, missing: "x".to_string() };
        assert_eq!(partial.target(), Some(reached));
        assert!(!partial.is_complete());
        let none = Resolution::Unresolved { missing: "x".to_string() };
        assert_eq!(none.target(), None);
    }

    #[test]
    fn test_listing_display() {
        let listing = Listing {
            name: "home".to_string(),
            directories: vec!["a".to_string(), "b".to_string()],
            files: vec!["notes".to_string()],
        };
        assert_eq!(listing.to_string(), "Contents of home:\na/\nb/\nnotes\n");
    }

    #[test]
    fn test_error_messages() {
        let err = FsError::not_found("readme", "cat");
        assert_eq!(err.to_string(), "ENOENT: no such file or directory, cat 'readme'");
    }
}
