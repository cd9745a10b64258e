//! In-Memory File System Implementation
//!
//! Directories live in an arena addressed by [`DirId`]. Each node keeps its
//! ordered subdirectory handles, its own files, and a back-reference to its
//! parent so that `..` and path reconstruction never search from the root.
//!
//! Freeing a slot bumps its generation, so handles held across an `rm` stop
//! resolving instead of aliasing whatever reuses the slot.

use std::mem;

use tracing::{debug, warn};

use super::types::*;

/// One directory node in the arena.
#[derive(Debug, Clone)]
struct DirNode {
    name: String,
    parent: Option<DirId>,
    subdirectories: Vec<DirId>,
    files: Vec<File>,
}

impl DirNode {
    fn new(name: impl Into<String>, parent: Option<DirId>) -> Self {
        Self {
            name: name.into(),
            parent,
            subdirectories: Vec::new(),
            files: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<DirNode>,
}

/// In-memory file system with a current directory.
#[derive(Debug, Clone)]
pub struct InMemoryFs {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: DirId,
    current: DirId,
}

impl InMemoryFs {
    /// Create a file system holding only the root directory `/`.
    pub fn new() -> Self {
        let root = DirId::new(0, 0);
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(DirNode::new("/", None)),
            }],
            free: Vec::new(),
            root,
            current: root,
        }
    }

    /// Create a file system whose root holds the contents of `tree`.
    ///
    /// The root keeps its name `/` whatever `tree.name` says.
    pub fn from_snapshot(tree: Directory) -> Self {
        let mut fs = Self::new();
        let root = fs.root;
        fs.node_mut(root).files = tree.files;
        for dir in tree.subdirectories {
            fs.graft(root, dir);
        }
        fs
    }

    pub fn root(&self) -> DirId {
        self.root
    }

    pub fn current(&self) -> DirId {
        self.current
    }

    /// Whether `id` still names a live directory.
    pub fn contains(&self, id: DirId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live directories, root included.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Whether the root holds no directories and no files.
    pub fn is_empty(&self) -> bool {
        let root = self.node(self.root);
        root.subdirectories.is_empty() && root.files.is_empty()
    }

    pub fn name(&self, id: DirId) -> Option<&str> {
        self.get(id).map(|node| node.name.as_str())
    }

    /// Parent of `id`; the root is its own parent.
    pub fn parent(&self, id: DirId) -> Option<DirId> {
        self.get(id).map(|node| node.parent.unwrap_or(self.root))
    }

    fn parent_of(&self, id: DirId) -> DirId {
        self.node(id).parent.unwrap_or(self.root)
    }

    /// Whether `ancestor` lies on the path from the root to `id` (inclusive).
    pub(crate) fn is_ancestor(&self, ancestor: DirId, id: DirId) -> bool {
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            if node == ancestor {
                return true;
            }
            cursor = self.node(node).parent;
        }
        false
    }

    // ========================================================================
    // Path resolution
    // ========================================================================

    /// Resolve `path` against the current directory.
    pub fn resolve(&self, path: &str) -> Resolution {
        self.resolve_from(self.current, path)
    }

    /// Resolve `path` against `start`, which must be live.
    ///
    /// `/` is the root and `..` the parent (the root's parent is the root).
    /// A leading `/` restarts from the root. Segments are matched against
    /// subdirectory names, first match wins. A missing segment stops the walk
    /// at the last directory reached; if nothing was reached yet the path is
    /// unresolved.
    pub(crate) fn resolve_from(&self, start: DirId, path: &str) -> Resolution {
        if path == "/" {
            return Resolution::Complete(self.root);
        }
        if path == ".." {
            return Resolution::Complete(self.parent_of(start));
        }

        let (mut cursor, relative, mut progressed) = match path.strip_prefix('/') {
            Some(rest) => (self.root, rest, true),
            None => (start, path, false),
        };

        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            if segment == ".." {
                cursor = self.parent_of(cursor);
                progressed = true;
                continue;
            }
            match self.find_subdirectory(cursor, segment) {
                Some(child) => {
                    cursor = child;
                    progressed = true;
                }
                None if progressed => {
                    debug!(path, missing = segment, reached = %self.dir_path(cursor), "partial resolution");
                    return Resolution::Partial {
                        reached: cursor,
                        missing: segment.to_string(),
                    };
                }
                None => {
                    return Resolution::Unresolved {
                        missing: segment.to_string(),
                    };
                }
            }
        }

        Resolution::Complete(cursor)
    }

    fn find_subdirectory(&self, dir: DirId, name: &str) -> Option<DirId> {
        self.node(dir)
            .subdirectories
            .iter()
            .copied()
            .find(|&child| self.node(child).name == name)
    }

    fn find_file(&self, dir: DirId, name: &str) -> Option<usize> {
        self.node(dir).files.iter().position(|f| f.name == name)
    }

    // ========================================================================
    // Directory & file operations
    // ========================================================================

    /// Append a new empty directory to the current directory.
    pub fn mkdir(&mut self, name: &str) -> DirId {
        let parent = self.current;
        let id = self.alloc(DirNode::new(name, Some(parent)));
        self.node_mut(parent).subdirectories.push(id);
        debug!(name, parent = %self.dir_path(parent), "mkdir");
        id
    }

    /// Move the current directory as far along `path` as it resolves.
    pub fn cd(&mut self, path: &str) -> Resolution {
        let resolution = self.resolve(path);
        if let Some(target) = resolution.target() {
            self.current = target;
        }
        resolution
    }

    /// List a directory; an empty path lists the current directory.
    pub fn ls(&self, path: &str) -> Result<Listing, FsError> {
        let target = if path.is_empty() {
            self.current
        } else {
            self.resolve(path)
                .target()
                .ok_or_else(|| FsError::not_found(path, "ls"))?
        };
        Ok(self.listing_of(target))
    }

    /// Immediate contents of `id`, directories first; `None` once `id` is freed.
    pub fn listing(&self, id: DirId) -> Option<Listing> {
        self.get(id).map(|_| self.listing_of(id))
    }

    fn listing_of(&self, id: DirId) -> Listing {
        let node = self.node(id);
        Listing {
            name: node.name.clone(),
            directories: node
                .subdirectories
                .iter()
                .map(|&child| self.node(child).name.clone())
                .collect(),
            files: node.files.iter().map(|f| f.name.clone()).collect(),
        }
    }

    /// Append a new empty file to the current directory.
    pub fn touch(&mut self, name: &str) {
        let current = self.current;
        self.node_mut(current).files.push(File::empty(name));
        debug!(name, "touch");
    }

    /// Overwrite the content of a file in the current directory.
    pub fn echo(&mut self, name: &str, content: &str) -> Result<(), FsError> {
        let current = self.current;
        let index = self
            .find_file(current, name)
            .ok_or_else(|| FsError::not_found(name, "echo"))?;
        self.node_mut(current).files[index].content = content.to_string();
        Ok(())
    }

    /// Content of a file in the current directory.
    pub fn cat(&self, name: &str) -> Result<&str, FsError> {
        let index = self
            .find_file(self.current, name)
            .ok_or_else(|| FsError::not_found(name, "cat"))?;
        Ok(self.node(self.current).files[index].content.as_str())
    }

    // ========================================================================
    // Copy, move, remove
    // ========================================================================

    /// Deep-copy the contents of `src` into `dest`.
    ///
    /// Both paths follow the partial-match policy. The source is snapshotted
    /// before anything is appended, so copying into a descendant of the
    /// source copies the pre-copy contents once.
    pub fn cp(&mut self, src: &str, dest: &str) -> Result<(), FsError> {
        let (Some(source), Some(destination)) =
            (self.resolve(src).target(), self.resolve(dest).target())
        else {
            return Err(FsError::InvalidCopy {
                src: src.to_string(),
                dest: dest.to_string(),
            });
        };

        let snapshot = self.subtree(source);
        debug!(
            from = %self.dir_path(source),
            to = %self.dir_path(destination),
            files = snapshot.file_count(),
            directories = snapshot.directory_count() - 1,
            "cp"
        );

        self.node_mut(destination).files.extend(snapshot.files);
        for dir in snapshot.subdirectories {
            self.graft(destination, dir);
        }
        Ok(())
    }

    /// Copy `src` into `dest`, then remove `src` by path.
    ///
    /// The remove runs even when the copy fails; both outcomes are reported.
    pub fn mv(&mut self, src: &str, dest: &str) -> Moved {
        let copied = self.cp(src, dest);
        let removed = self.rm(src);
        debug!(src, dest, copied = copied.is_ok(), removed = removed.is_ok(), "mv");
        Moved { copied, removed }
    }

    /// Remove by path.
    ///
    /// A path that resolves to a directory empties that directory in place;
    /// the directory node itself stays attached to its parent. Otherwise the
    /// path is taken as a file name in the current directory.
    pub fn rm(&mut self, path: &str) -> Result<Removed, FsError> {
        if let Some(target) = self.resolve(path).target() {
            let (directories, files) = self.clear(target);
            debug!(path = %self.dir_path(target), directories, files, "rm emptied directory");
            return Ok(Removed::DirectoryEmptied {
                id: target,
                directories,
                files,
            });
        }

        let current = self.current;
        let index = self
            .find_file(current, path)
            .ok_or_else(|| FsError::not_found(path, "rm"))?;
        let file = self.node_mut(current).files.remove(index);
        debug!(name = %file.name, "rm file");
        Ok(Removed::File(file))
    }

    /// Free everything below `target`, returning (directories, files) freed.
    fn clear(&mut self, target: DirId) -> (usize, usize) {
        if self.current != target && self.is_ancestor(target, self.current) {
            warn!(
                from = %self.dir_path(self.current),
                to = %self.dir_path(target),
                "current directory removed, moving up"
            );
            self.current = target;
        }

        let node = self.node_mut(target);
        let children = mem::take(&mut node.subdirectories);
        let mut files = mem::take(&mut node.files).len();
        let mut directories = 0;
        for child in children {
            let (d, f) = self.free_subtree(child);
            directories += d;
            files += f;
        }
        (directories, files)
    }

    fn free_subtree(&mut self, id: DirId) -> (usize, usize) {
        let Some(node) = self.release(id) else {
            return (0, 0);
        };

        let mut directories = 1;
        let mut files = node.files.len();
        for child in node.subdirectories {
            let (d, f) = self.free_subtree(child);
            directories += d;
            files += f;
        }
        (directories, files)
    }

    // ========================================================================
    // Paths and snapshots
    // ========================================================================

    /// Absolute path of the current directory.
    pub fn current_path(&self) -> String {
        self.dir_path(self.current)
    }

    /// Absolute path of `id`, `/` for the root; `None` once `id` is freed.
    pub fn path_of(&self, id: DirId) -> Option<String> {
        self.get(id).map(|_| self.dir_path(id))
    }

    fn dir_path(&self, id: DirId) -> String {
        let mut names = Vec::new();
        let mut cursor = id;
        while let Some(parent) = self.node(cursor).parent {
            names.push(self.node(cursor).name.as_str());
            cursor = parent;
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    /// Owned deep copy of the whole tree.
    pub fn snapshot(&self) -> Directory {
        self.subtree(self.root)
    }

    /// Owned deep copy of the subtree rooted at `id`; `None` once `id` is freed.
    pub fn snapshot_of(&self, id: DirId) -> Option<Directory> {
        self.get(id).map(|_| self.subtree(id))
    }

    fn subtree(&self, id: DirId) -> Directory {
        let node = self.node(id);
        Directory {
            name: node.name.clone(),
            subdirectories: node
                .subdirectories
                .iter()
                .map(|&child| self.subtree(child))
                .collect(),
            files: node.files.clone(),
        }
    }

    /// Attach an owned subtree as the last subdirectory of `parent`.
    fn graft(&mut self, parent: DirId, tree: Directory) -> DirId {
        let mut node = DirNode::new(tree.name, Some(parent));
        node.files = tree.files;
        let id = self.alloc(node);
        self.node_mut(parent).subdirectories.push(id);
        for child in tree.subdirectories {
            self.graft(id, child);
        }
        id
    }

    // ========================================================================
    // Arena
    // ========================================================================

    fn alloc(&mut self, node: DirNode) -> DirId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            return DirId::new(index, slot.generation);
        }
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        DirId::new(self.slots.len() - 1, 0)
    }

    /// Take the node out of its slot and retire every handle to it.
    fn release(&mut self, id: DirId) -> Option<DirNode> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(node)
    }

    fn get(&self, id: DirId) -> Option<&DirNode> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    /// # Panics
    ///
    /// Panics if `id` is stale. Only handles reachable from the root reach
    /// this point.
    fn node(&self, id: DirId) -> &DirNode {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale directory handle {:?}", id),
        }
    }

    fn node_mut(&mut self, id: DirId) -> &mut DirNode {
        match self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
        {
            Some(node) => node,
            None => panic!("stale directory handle {:?}", id),
        }
    }
}

impl Default for InMemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
