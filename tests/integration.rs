use dirtree::output::{self, OutputFormat};
use dirtree::{build_with, DirTreeBuilder, DirectoryNode};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("docs");
    fs::create_dir_all(root.join("api/v1")).unwrap();
    fs::create_dir(root.join("guide")).unwrap();
    fs::write(root.join("index.md"), "# docs").unwrap();
    fs::write(root.join("api/v1/users.md"), "").unwrap();
    fs::write(root.join("api/v1/groups.md"), "").unwrap();
    fs::write(root.join("guide/intro.md"), "").unwrap();
    let options = DirTreeBuilder::new(&root).sort_by_name().build();
    let node = build_with(&options).unwrap();

    let text = output::format_node(&node, OutputFormat::Tree, false).unwrap();
    let expected = "\
/docs
   ├─ index.md
   ├─/api
   │  └─/v1
   │     ├─ groups.md
   │     └─ users.md
   └─/guide
      └─ intro.md
";
    assert_eq!(text, expected);
    assert_eq!(node.to_string(), expected);

    let json = output::format_node(&node, OutputFormat::Json, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "docs");
    assert_eq!(value["children"][0]["children"][0]["files"][1]["name"], "users.md");
    let back: DirectoryNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);

    let out_path = dir.path().join(format!("tree.{}", OutputFormat::Tree.extension()));
    output::write_node_to_file(&node, OutputFormat::Tree, &out_path, false).unwrap();
    assert_eq!(fs::read_to_string(&out_path).unwrap(), expected);
}
