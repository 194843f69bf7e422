//! Tree builder: token stream to [`Stylesheet`].
//!
//! Keeps an explicit stack of frames mirroring block nesting. A frame holds
//! every node the current block writes into; a comma-separated selector list
//! opens a frame with one target per selector.

use tracing::debug;

use crate::css::model::{Token, TokenKind};
use crate::css::selector::split_selector_list;
use crate::css::text::collapse_whitespace;

use super::node::{Node, NodeId};
use super::stylesheet::Stylesheet;

/// Build the indentation tree from tokens.
///
/// Building never fails: brace balance is the tokenizer's concern, and a
/// stray [`TokenKind::BlockClose`] at top level is ignored.
pub fn build(tokens: &[Token]) -> Stylesheet {
    let mut builder = Builder::new();
    for token in tokens {
        builder.accept(&token.kind);
    }
    builder.sheet
}

/// Header waiting for its `{`.
enum Header<'t> {
    Selector(&'t str),
    AtRule(&'t str),
}

struct Builder<'t> {
    sheet: Stylesheet,
    frames: Vec<Vec<NodeId>>,
    header: Option<Header<'t>>,
}

impl<'t> Builder<'t> {
    fn new() -> Self {
        let sheet = Stylesheet::new();
        let frames = vec![vec![sheet.root()]];
        Self {
            sheet,
            frames,
            header: None,
        }
    }

    fn targets(&self) -> Vec<NodeId> {
        self.frames.last().cloned().unwrap_or_default()
    }

    fn accept(&mut self, kind: &'t TokenKind) {
        match kind {
            TokenKind::Selector(text) => self.header = Some(Header::Selector(text)),
            TokenKind::AtRulePrelude(text) => self.header = Some(Header::AtRule(text)),
            TokenKind::BlockOpen => {
                let targets = match self.header.take() {
                    Some(Header::Selector(text)) => self.open_rule(text),
                    Some(Header::AtRule(prelude)) => self.open_at_rule(prelude),
                    None => self.targets(),
                };
                self.frames.push(targets);
            }
            TokenKind::BlockClose => {
                if self.frames.len() > 1 {
                    self.frames.pop();
                }
            }
            TokenKind::Declaration { property, value } => self.leaf(Node::Declaration {
                property: property.clone(),
                value: value.clone(),
            }),
            TokenKind::Comment(text) => self.leaf(Node::Comment { text: text.clone() }),
            TokenKind::Raw(text) => self.leaf(Node::Raw { text: text.clone() }),
        }
    }

    /// Descend one level per selector atom under every current target.
    fn open_rule(&mut self, text: &str) -> Vec<NodeId> {
        let selectors = split_selector_list(text);
        if selectors.is_empty() {
            return self.targets();
        }

        let mut innermost = Vec::new();
        for target in self.targets() {
            for segments in &selectors {
                let mut node = target;
                for label in segments.iter().flat_map(|segment| segment.labels()) {
                    node = self.block(node, Node::Rule { label });
                }
                if !innermost.contains(&node) {
                    innermost.push(node);
                }
            }
        }
        innermost
    }

    fn open_at_rule(&mut self, prelude: &str) -> Vec<NodeId> {
        let prelude = collapse_whitespace(prelude);
        self.targets()
            .into_iter()
            .map(|target| {
                self.block(
                    target,
                    Node::AtRule {
                        prelude: prelude.clone(),
                    },
                )
            })
            .collect()
    }

    fn block(&mut self, parent: NodeId, node: Node) -> NodeId {
        let (id, merged) = self.sheet.find_or_insert_block(parent, node);
        if merged {
            debug!(path = ?self.sheet.key_path(id), "merging block into existing node");
        }
        id
    }

    fn leaf(&mut self, node: Node) {
        for target in self.targets() {
            self.sheet.insert_child(target, node.clone());
        }
    }
}
