//! Indented text serializer.

use crate::tree::node::Node;
use crate::tree::stylesheet::Stylesheet;

/// Render a tree into indentation-delimited text.
///
/// One line per node at `depth * indent_unit`. Block nodes print their label,
/// declarations print `property value`, comments print their source text
/// with the indent prefixed to the first line only. Lines are joined with
/// `'\n'` and there is no trailing newline.
pub fn render(sheet: &Stylesheet, indent_unit: &str) -> String {
    let lines: Vec<String> = sheet
        .walk_depth_first()
        .into_iter()
        .filter_map(|(id, depth)| {
            let node = sheet.get(id)?;
            Some(format!("{}{}", indent_unit.repeat(depth), line(node)?))
        })
        .collect();
    lines.join("\n")
}

/// The unindented text of one node. `None` for the root.
fn line(node: &Node) -> Option<String> {
    match node {
        Node::Root => None,
        Node::Rule { label } => Some(label.clone()),
        Node::AtRule { prelude } => Some(prelude.clone()),
        Node::Declaration { property, value } => Some(format!("{property} {value}")),
        Node::Comment { text } | Node::Raw { text } => Some(text.clone()),
    }
}
