//! CSS front end: tokenizer, selector splitter, lexical model, errors.

pub mod error;
pub mod model;
pub mod selector;
pub(crate) mod text;
pub mod tokenizer;

pub use error::{BraceFault, Location, ParseError};
pub use model::{Combinator, SelectorSegment, Token, TokenKind};
