//! Indentation tree: slotmap-backed node arena with merge-by-label.

pub mod builder;
pub mod node;
pub mod stylesheet;

pub use builder::build;
pub use node::{Node, NodeId};
pub use stylesheet::Stylesheet;
