//! Conversion options.

/// Configuration for a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Text prefixed once per nesting level.
    pub indent: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

impl ConvertOptions {
    /// Create a new default config (tab indentation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indent unit (builder).
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Indent with `width` spaces per level (builder).
    pub fn with_spaces(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tab() {
        assert_eq!(ConvertOptions::new().indent, "\t");
    }

    #[test]
    fn test_with_indent() {
        assert_eq!(ConvertOptions::new().with_indent("--").indent, "--");
    }

    #[test]
    fn test_with_spaces() {
        assert_eq!(ConvertOptions::new().with_spaces(4).indent, "    ");
    }
}
