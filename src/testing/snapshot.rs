//! Snapshot helpers.
//!
//! Turn a [`Stylesheet`] into a plain-text outline that names every node's
//! kind, suitable for snapshot testing the tree independently of the
//! serializer.

use crate::tree::node::Node;
use crate::tree::stylesheet::Stylesheet;

/// Render an outline of the tree, two spaces per level.
///
/// Each line starts with the node kind (`rule`, `at-rule`, `decl`, `comment`,
/// `raw`). Comment and raw text is printed in `Debug` form so multi-line
/// comments stay on one line.
///
/// # Examples
///
/// ```
/// use css_nest::css::tokenizer::tokenize;
/// use css_nest::testing::outline;
/// use css_nest::tree::build;
///
/// let sheet = build(&tokenize("a { b: c; }").unwrap());
/// assert_eq!(outline(&sheet), "rule a\n  decl b: c");
/// ```
pub fn outline(sheet: &Stylesheet) -> String {
    sheet
        .walk_depth_first()
        .into_iter()
        .filter_map(|(id, depth)| {
            let entry = match sheet.get(id)? {
                Node::Root => return None,
                Node::Rule { label } => format!("rule {label}"),
                Node::AtRule { prelude } => format!("at-rule {prelude}"),
                Node::Declaration { property, value } => format!("decl {property}: {value}"),
                Node::Comment { text } => format!("comment {text:?}"),
                Node::Raw { text } => format!("raw {text:?}"),
            };
            Some(format!("{}{}", "  ".repeat(depth), entry))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::tokenizer::tokenize;
    use crate::tree::builder::build;

    fn outline_of(input: &str) -> String {
        let tokens = tokenize(input).unwrap_or_else(|e| panic!("tokenize failed: {e}"));
        outline(&build(&tokens))
    }

    #[test]
    fn test_outline_kinds() {
        assert_eq!(
            outline_of("@import 'x.css'; @media print { a { b: c; d } /* e\n f */ }"),
            "raw \"@import 'x.css'\"\nat-rule @media print\n  rule a\n    decl b: c\n    raw \"d\"\n  comment \"/* e\\n f */\""
        );
    }

    #[test]
    fn test_outline_empty() {
        assert_eq!(outline_of(""), "");
    }
}
