//! Conversion pipeline: tokenize, build, render.

use tracing::debug_span;

use crate::config::ConvertOptions;
use crate::css::error::ParseError;
use crate::css::tokenizer::tokenize;
use crate::render::render;
use crate::tree::builder::build;

/// Convert CSS source into an indented stylesheet using tab indentation.
///
/// # Examples
///
/// ```
/// let out = css_nest::convert("a .b { color: red; }").unwrap();
/// assert_eq!(out, "a\n\t.b\n\t\tcolor red");
/// ```
pub fn convert(source: &str) -> Result<String, ParseError> {
    convert_with(source, &ConvertOptions::default())
}

/// Convert CSS source with explicit options.
///
/// Tokenizer errors are returned unchanged; no partial output is produced.
pub fn convert_with(source: &str, options: &ConvertOptions) -> Result<String, ParseError> {
    let span = debug_span!("convert", len = source.len());
    let _enter = span.enter();

    let tokens = tokenize(source)?;
    let sheet = build(&tokens);
    Ok(render(&sheet, &options.indent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::error::BraceFault;
    use crate::css::model::Token;
    use crate::tree::stylesheet::Stylesheet;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<Stylesheet>();
        assert_send_sync::<Token>();
        assert_send_sync::<ParseError>();
        assert_send_sync::<ConvertOptions>();
    }

    #[test]
    fn test_convert_simple() {
        assert_eq!(convert("a { b: c; }").unwrap(), "a\n\tb c");
    }

    #[test]
    fn test_convert_with_spaces() {
        let options = ConvertOptions::new().with_spaces(2);
        assert_eq!(
            convert_with("a { b { c: d; } }", &options).unwrap(),
            "a\n  b\n    c d"
        );
    }

    #[test]
    fn test_convert_propagates_error() {
        assert!(matches!(
            convert("a { b: c;"),
            Err(ParseError::UnbalancedBraces {
                fault: BraceFault::UnclosedBlock { depth: 1 },
                ..
            })
        ));
    }

    #[test]
    fn test_convert_empty() {
        assert_eq!(convert("").unwrap(), "");
    }
}
