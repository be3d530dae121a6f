use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::path::{Path, PathBuf};

/// A file found directly inside a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// The file name, without any parent components.
    pub name: String,
    /// The parent directory's path joined with [`FileEntry::name`].
    pub path: PathBuf,
}

/// A snapshot of one directory and everything below it.
///
/// Nodes are produced by [`crate::build`] and never refreshed: files and
/// children reflect the filesystem at the moment the node was listed.
/// Each child exclusively owns its own subtree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryNode {
    /// The path this node was built from, as given (not canonicalized).
    pub path: PathBuf,
    /// Files directly inside this directory.
    pub files: Vec<FileEntry>,
    /// One node per immediate subdirectory.
    pub children: Vec<DirectoryNode>,
}

impl DirectoryNode {
    /// An empty node for `path`, not backed by any listing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            files: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The last segment of [`DirectoryNode::path`].
    ///
    /// Paths without a trailing normal segment (`/`, `.`, `..`) yield the
    /// whole path as given.
    pub fn name(&self) -> String {
        display_name(&self.path)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.children.is_empty()
    }

    /// Number of files in this directory and all of its descendants.
    pub fn file_count(&self) -> usize {
        self.descendants().map(|node| node.files.len()).sum()
    }

    /// Number of directories below this one, not counting itself.
    pub fn dir_count(&self) -> usize {
        self.descendants().count() - 1
    }

    /// Pre-order walk over this node and every node beneath it.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

impl Serialize for DirectoryNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DirectoryNode", 4)?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("files", &self.files)?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

/// Iterator returned by [`DirectoryNode::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a DirectoryNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a DirectoryNode;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DirectoryNode {
        let mut root = DirectoryNode::new("root");
        root.files.push(FileEntry {
            name: "a".into(),
            path: "root/a".into(),
        });
        let mut left = DirectoryNode::new("root/left");
        left.children.push(DirectoryNode::new("root/left/deep"));
        root.children.push(left);
        root.children.push(DirectoryNode::new("root/right"));
        root
    }

    #[test]
    fn name_is_last_segment() {
        assert_eq!(DirectoryNode::new("/tmp/some/dir").name(), "dir");
        assert_eq!(DirectoryNode::new("relative").name(), "relative");
        assert_eq!(DirectoryNode::new("trailing/slash/").name(), "slash");
        assert_eq!(DirectoryNode::new(".").name(), ".");
    }

    #[test]
    fn descendants_are_pre_order() {
        let root = sample();
        let names: Vec<_> = root.descendants().map(|n| n.name()).collect();
        assert_eq!(names, ["root", "left", "deep", "right"]);
        assert_eq!(root.dir_count(), 3);
        assert_eq!(root.file_count(), 1);
        assert!(!root.is_empty());
        assert!(root.children[1].is_empty());
    }

    #[test]
    fn serialized_node_carries_name() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["name"], "root");
        assert_eq!(value["files"][0]["name"], "a");
        assert_eq!(value["children"][0]["children"][0]["name"], "deep");
    }
}
