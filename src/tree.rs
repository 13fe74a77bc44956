//! Box-drawing rendering of a [`SnapshotTree`].

use crate::types::{SnapshotTree, TreeNode};
use std::fmt::Write;

/// Renders the tree the way the `tree` command does, starting with a
/// `<root-name>/` line. Directories carry a trailing `/`.
///
/// ```text
/// src/
/// ├── components/
/// │   └── Button.tsx
/// └── index.ts
/// ```
pub fn render_tree(tree: &SnapshotTree) -> String {
    let mut out = String::with_capacity(64 * (tree.stats.files + tree.stats.directories + 1));
    out.push_str(&tree.root_name);
    out.push_str("/\n");
    render_children(&tree.children, "", &mut out);
    out
}

fn render_children(nodes: &[TreeNode], prefix: &str, out: &mut String) {
    let count = nodes.len();
    for (i, node) in nodes.iter().enumerate() {
        render_node(node, prefix, i + 1 == count, out);
    }
}

fn render_node(node: &TreeNode, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { "└── " } else { "├── " };
    if node.entry.is_dir {
        let _ = writeln!(out, "{}{}{}/", prefix, connector, node.entry.name);
        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        render_children(&node.children, &child_prefix, out);
    } else {
        let _ = writeln!(out, "{}{}{}", prefix, connector, node.entry.name);
    }
}
