//! # css-nest
//!
//! Converts brace-based CSS into a nested, indentation-delimited stylesheet
//! (Stylus/Sass-like, no braces, no colons, no semicolons).
//!
//! ```text
//! @media (max-width:400px) {          @media (max-width:400px)
//!     #login_form .icon + .msg {  =>      #login_form
//!         padding: 20px;                      .icon
//!     }                                           +.msg
//! }                                                   padding 20px
//! ```
//!
//! Comments are copied verbatim, compound selectors nest with the `&`
//! attachment marker, and blocks that share a header under the same parent
//! (repeated `@media` queries, repeated selectors) are merged into one node.
//!
//! ## Pipeline
//!
//! - **[`css::tokenizer`]** — comment- and brace-aware tokenizer
//! - **[`css::selector`]** — selector splitter: segments and atoms
//! - **[`tree`]** — arena tree builder with merge-by-label
//! - **[`render`]** — indented serializer
//! - **[`convert()`]** — the single entry point tying everything together

// Front end
pub mod css;

// Tree and output
pub mod render;
pub mod tree;

// Entry point
pub mod config;
pub mod convert;

// Test support
pub mod testing;

pub use config::ConvertOptions;
pub use convert::{convert, convert_with};
pub use css::error::ParseError;
