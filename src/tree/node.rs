//! Node types: NodeId, Node.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a stylesheet tree node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// A node in the indentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The single tree root. Never rendered.
    Root,
    /// One selector level, e.g. `#login_form`, `&.icon` or `+.error-message`.
    Rule { label: String },
    /// An at-rule header, e.g. `@media (max-width:400px)`.
    AtRule { prelude: String },
    /// `property value` leaf.
    Declaration { property: String, value: String },
    /// Comment leaf, byte-identical to the source.
    Comment { text: String },
    /// Opaque passthrough leaf.
    Raw { text: String },
}

impl Node {
    /// The merge key of a block node. Leaves and the root have none.
    pub fn key(&self) -> Option<&str> {
        match self {
            Node::Rule { label } => Some(label),
            Node::AtRule { prelude } => Some(prelude),
            _ => None,
        }
    }

    /// Whether this node can hold children.
    pub fn is_block(&self) -> bool {
        matches!(self, Node::Root | Node::Rule { .. } | Node::AtRule { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_of_blocks() {
        let rule = Node::Rule { label: "&.icon".into() };
        let at = Node::AtRule { prelude: "@media print".into() };
        assert_eq!(rule.key(), Some("&.icon"));
        assert_eq!(at.key(), Some("@media print"));
    }

    #[test]
    fn leaves_have_no_key() {
        let decl = Node::Declaration {
            property: "color".into(),
            value: "red".into(),
        };
        assert_eq!(decl.key(), None);
        assert_eq!(Node::Root.key(), None);
        assert_eq!(Node::Comment { text: "/**/".into() }.key(), None);
    }

    #[test]
    fn is_block() {
        assert!(Node::Root.is_block());
        assert!(Node::Rule { label: "a".into() }.is_block());
        assert!(!Node::Raw { text: "x".into() }.is_block());
    }
}
