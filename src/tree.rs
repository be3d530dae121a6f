//! Text rendering of a [`DirectoryNode`], in the style of the `tree` command.

use crate::types::DirectoryNode;
use std::fmt::{self, Write};

const BRANCH: &str = "├─";
const LAST_BRANCH: &str = "└─";
const LAST_INDENT: &str = "   ";
const CONTINUE_INDENT: &str = "│  ";

/// Position of a node among its parent's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Root,
    Sibling { index: usize, count: usize },
}

impl Position {
    fn is_last(self) -> bool {
        match self {
            Position::Root => true,
            Position::Sibling { index, count } => index + 1 == count,
        }
    }
}

/// Renders `node` and everything beneath it.
///
/// Directories appear as `/name`, files as `name` after a connector; every
/// line ends with `\n`. The node passed in is drawn as a root, without a
/// connector, so any subtree can be rendered on its own.
pub fn render(node: &DirectoryNode) -> String {
    let mut out = String::new();
    let _ = write_node(&mut out, node, "", Position::Root);
    out
}

fn write_node<W: Write>(
    out: &mut W,
    node: &DirectoryNode,
    indent: &str,
    position: Position,
) -> fmt::Result {
    out.write_str(indent)?;
    match position {
        Position::Root => {}
        _ if position.is_last() => out.write_str(LAST_BRANCH)?,
        _ => out.write_str(BRANCH)?,
    }
    writeln!(out, "/{}", node.name())?;

    let child_indent = if position.is_last() {
        format!("{indent}{LAST_INDENT}")
    } else {
        format!("{indent}{CONTINUE_INDENT}")
    };

    let file_count = node.files.len();
    for (i, file) in node.files.iter().enumerate() {
        let is_last_entry = i + 1 == file_count && node.children.is_empty();
        let connector = if is_last_entry { LAST_BRANCH } else { BRANCH };
        writeln!(out, "{child_indent}{connector} {}", file.name)?;
    }

    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate() {
        write_node(out, child, &child_indent, Position::Sibling { index, count })?;
    }
    Ok(())
}

impl fmt::Display for DirectoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, "", Position::Root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileEntry;

    fn file(dir: &str, name: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: format!("{dir}/{name}").into(),
        }
    }

    #[test]
    fn empty_directory_is_one_line() {
        assert_eq!(render(&DirectoryNode::new("proj")), "/proj\n");
    }

    #[test]
    fn last_file_gets_closing_connector() {
        let mut root = DirectoryNode::new("proj");
        root.files = vec![file("proj", "a"), file("proj", "b")];
        assert_eq!(render(&root), "/proj\n   ├─ a\n   └─ b\n");
    }

    #[test]
    fn files_before_last_subdirectory() {
        let mut sub = DirectoryNode::new("proj/sub");
        sub.files.push(file("proj/sub", "x"));
        let mut root = DirectoryNode::new("proj");
        root.files.push(file("proj", "a"));
        root.children.push(sub);
        assert_eq!(
            render(&root),
            "/proj\n   ├─ a\n   └─/sub\n      └─ x\n"
        );
    }

    #[test]
    fn non_last_sibling_draws_continuation_bar() {
        let mut first = DirectoryNode::new("r/first");
        first.files.push(file("r/first", "f"));
        let mut root = DirectoryNode::new("r");
        root.children = vec![first, DirectoryNode::new("r/second")];
        assert_eq!(
            render(&root),
            "/r\n   ├─/first\n   │  └─ f\n   └─/second\n"
        );
    }

    #[test]
    fn display_matches_render() {
        let mut root = DirectoryNode::new("r");
        root.files.push(file("r", "only"));
        root.children.push(DirectoryNode::new("r/child"));
        assert_eq!(root.to_string(), render(&root));
        assert_eq!(render(&root), render(&root));
    }

    #[test]
    fn subtree_renders_as_root() {
        let mut child = DirectoryNode::new("r/child");
        child.files.push(file("r/child", "x"));
        let mut root = DirectoryNode::new("r");
        root.children = vec![child, DirectoryNode::new("r/other")];
        assert_eq!(render(&root.children[0]), "/child\n   └─ x\n");
    }
}
