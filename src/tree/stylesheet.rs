//! The indentation tree: a slotmap arena with a single root.

use std::collections::HashMap;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{Node, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The converted stylesheet tree.
///
/// All nodes live in a single `SlotMap`. Children keep insertion order. Block
/// nodes also keep a label index so that a block whose key already exists
/// under the same parent resolves to the existing node instead of a sibling
/// duplicate.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    nodes: SlotMap<NodeId, Node>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    keyed: SecondaryMap<NodeId, HashMap<String, NodeId>>,
    root: NodeId,
}

impl Stylesheet {
    /// Create a tree holding only the root.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::Root);
        let mut children = SecondaryMap::new();
        children.insert(root, Vec::new());
        let mut keyed = SecondaryMap::new();
        keyed.insert(root, HashMap::new());
        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            keyed,
            root,
        }
    }

    /// Append a node under `parent` without any merge lookup.
    ///
    /// Block nodes inserted this way are still registered in the parent's
    /// label index.
    pub(crate) fn insert_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        debug_assert!(
            self.nodes.get(parent).is_some_and(Node::is_block),
            "parent must be an existing block node"
        );
        let key = node.key().map(str::to_string);
        let is_block = node.is_block();
        let id = self.nodes.insert(node);
        if is_block {
            self.children.insert(id, Vec::new());
            self.keyed.insert(id, HashMap::new());
        }
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        if let (Some(key), Some(index)) = (key, self.keyed.get_mut(parent)) {
            index.entry(key).or_insert(id);
        }
        id
    }

    /// Look up the child of `parent` keyed like `node`, or append `node`.
    ///
    /// Returns the node id and whether an existing node was reused.
    pub(crate) fn find_or_insert_block(&mut self, parent: NodeId, node: Node) -> (NodeId, bool) {
        if let Some(existing) = node.key().and_then(|key| self.find_child(parent, key)) {
            return (existing, true);
        }
        (self.insert_child(parent, node), false)
    }

    /// The child of `parent` whose merge key equals `key`.
    pub fn find_child(&self, parent: NodeId, key: &str) -> Option<NodeId> {
        self.keyed.get(parent)?.get(key).copied()
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Immutable access to a node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice for leaves and
    /// unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// The labels of every keyed node from the root down to `id` inclusive.
    pub fn key_path(&self, id: NodeId) -> Vec<&str> {
        let mut path: Vec<&str> = std::iter::once(id)
            .chain(self.ancestors(id))
            .filter_map(|n| self.get(n).and_then(Node::key))
            .collect();
        path.reverse();
        path
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.children(self.root).is_empty()
    }

    /// Pre-order depth-first traversal below the root, paired with each
    /// node's depth (root children are depth 0).
    pub fn walk_depth_first(&self) -> Vec<(NodeId, usize)> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, usize)> = self
            .children(self.root)
            .iter()
            .rev()
            .map(|&child| (child, 0))
            .collect();
        while let Some((current, depth)) = stack.pop() {
            result.push((current, depth));
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        result
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(label: &str) -> Node {
        Node::Rule {
            label: label.into(),
        }
    }

    fn decl(property: &str, value: &str) -> Node {
        Node::Declaration {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Build a small test tree:
    /// ```text
    ///   @media print
    ///     #a
    ///       color red
    ///   .b
    /// ```
    fn build_tree() -> (Stylesheet, NodeId, NodeId, NodeId, NodeId) {
        let mut sheet = Stylesheet::new();
        let root = sheet.root();
        let media = sheet.insert_child(
            root,
            Node::AtRule {
                prelude: "@media print".into(),
            },
        );
        let a = sheet.insert_child(media, rule("#a"));
        let color = sheet.insert_child(a, decl("color", "red"));
        let b = sheet.insert_child(root, rule(".b"));
        (sheet, media, a, color, b)
    }

    #[test]
    fn new_has_only_root() {
        let sheet = Stylesheet::new();
        assert_eq!(sheet.len(), 1);
        assert!(sheet.is_empty());
        assert_eq!(sheet.get(sheet.root()), Some(&Node::Root));
    }

    #[test]
    fn children_list() {
        let (sheet, media, a, color, b) = build_tree();
        assert_eq!(sheet.children(sheet.root()), &[media, b]);
        assert_eq!(sheet.children(a), &[color]);
        assert!(sheet.children(color).is_empty());
    }

    #[test]
    fn parent_and_ancestors() {
        let (sheet, media, a, color, _b) = build_tree();
        assert_eq!(sheet.parent(a), Some(media));
        assert_eq!(sheet.parent(sheet.root()), None);
        assert_eq!(sheet.ancestors(color), vec![a, media, sheet.root()]);
    }

    #[test]
    fn key_path() {
        let (sheet, _media, a, color, b) = build_tree();
        assert_eq!(sheet.key_path(a), vec!["@media print", "#a"]);
        assert_eq!(sheet.key_path(color), vec!["@media print", "#a"]);
        assert_eq!(sheet.key_path(b), vec![".b"]);
    }

    #[test]
    fn find_or_insert_reuses_existing() {
        let (mut sheet, media, a, ..) = build_tree();
        let (found, merged) = sheet.find_or_insert_block(media, rule("#a"));
        assert!(merged);
        assert_eq!(found, a);
        assert_eq!(sheet.children(media), &[a]);
    }

    #[test]
    fn find_or_insert_creates_new() {
        let (mut sheet, media, a, ..) = build_tree();
        let (created, merged) = sheet.find_or_insert_block(media, rule("#z"));
        assert!(!merged);
        assert_eq!(sheet.children(media), &[a, created]);
    }

    #[test]
    fn same_label_under_different_parents_is_distinct() {
        let (mut sheet, _media, a, ..) = build_tree();
        let root = sheet.root();
        let (top_a, merged) = sheet.find_or_insert_block(root, rule("#a"));
        assert!(!merged);
        assert_ne!(top_a, a);
    }

    #[test]
    fn walk_depth_first() {
        let (sheet, media, a, color, b) = build_tree();
        assert_eq!(
            sheet.walk_depth_first(),
            vec![(media, 0), (a, 1), (color, 2), (b, 0)]
        );
    }

    #[test]
    fn default_impl() {
        let sheet = Stylesheet::default();
        assert!(sheet.is_empty());
    }
}
