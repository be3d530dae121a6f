use serde::{Deserialize, Serialize};
use std::path::PathBuf;
/// Order in which the entries of one directory are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Whatever order the platform's directory listing reports.
    #[default]
    Filesystem,
    /// Byte-wise by entry name, identical across platforms.
    Name,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirTreeOptions {
    pub root: PathBuf,
    pub sort: SortOrder,
    pub follow_links: bool,
}
impl Default for DirTreeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            sort: SortOrder::Filesystem,
            follow_links: true,
        }
    }
}
#[derive(Debug, Default)]
pub struct DirTreeBuilder {
    options: DirTreeOptions,
}
impl DirTreeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DirTreeOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn sort(mut self, order: SortOrder) -> Self {
        self.options.sort = order;
        self
    }
    pub fn sort_by_name(self) -> Self {
        self.sort(SortOrder::Name)
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> DirTreeOptions {
        self.options
    }
}
