//! Serializer: indentation tree to text.

pub mod serializer;

pub use serializer::render;
