//! Output formatting for built trees.
//!
//! Provides functions to format a [`DirectoryNode`] as tree text or JSON.

use crate::tree::render;
use crate::{DirTreeError, DirectoryNode};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tree,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Tree => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the tree into a string. `pretty` only affects JSON.
pub fn format_node(
    node: &DirectoryNode,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, DirTreeError> {
    match format {
        OutputFormat::Tree => Ok(render(node)),
        OutputFormat::Json => format_json(node, pretty),
    }
}

/// Writes the formatted tree to a file.
pub fn write_node_to_file(
    node: &DirectoryNode,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), DirTreeError> {
    let content = format_node(node, format, pretty)?;
    fs::write(&path, content).map_err(|e| DirTreeError::io(path.as_ref(), e))?;
    Ok(())
}

fn format_json(node: &DirectoryNode, pretty: bool) -> Result<String, DirTreeError> {
    let json = if pretty {
        serde_json::to_string_pretty(node)
    } else {
        serde_json::to_string(node)
    };
    json.map_err(|e| DirTreeError::Serialize(e.to_string()))
}
