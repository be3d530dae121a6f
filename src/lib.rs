//! # dirtree
//!
//! `dirtree` walks a directory once, eagerly, and hands back an owned tree of
//! [`DirectoryNode`]s: the files directly inside each directory plus one child
//! node per subdirectory. The tree can be rendered as text similar to the
//! `tree` command, or serialized for other tools.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate (on by default).
//!
//! # Example
//!
//! ```no_run
//! use dirtree::{DirTreeBuilder, SortOrder, build_with, render};
//!
//! let options = DirTreeBuilder::new("./docs")
//!     .sort(SortOrder::Name)
//!     .build();
//!
//! let root = build_with(&options).expect("Failed to scan directory");
//!
//! print!("{}", render(&root));
//! for node in root.descendants() {
//!     println!("{}: {} files", node.path.display(), node.files.len());
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{build, build_with};
pub use error::DirTreeError;
pub use options::{DirTreeBuilder, DirTreeOptions, SortOrder};
pub use tree::render;
pub use types::{Descendants, DirectoryNode, FileEntry};
