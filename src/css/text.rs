//! Quote- and bracket-aware string helpers shared by the tokenizer and the
//! selector splitter.

/// Tracks whether a scan position sits inside a quoted string or a
/// parenthesized / bracketed group.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Nesting {
    quote: Option<char>,
    escaped: bool,
    depth: usize,
}

impl Nesting {
    /// Feed one character. Returns `true` if the character itself is at top
    /// level (outside quotes and brackets, not escaped).
    pub(crate) fn step(&mut self, ch: char) -> bool {
        if self.escaped {
            self.escaped = false;
            return false;
        }
        if ch == '\\' {
            self.escaped = true;
            return false;
        }
        if let Some(q) = self.quote {
            if ch == q {
                self.quote = None;
            }
            return false;
        }
        match ch {
            '"' | '\'' => {
                self.quote = Some(ch);
                false
            }
            '(' | '[' => {
                self.depth += 1;
                false
            }
            ')' | ']' => {
                self.depth = self.depth.saturating_sub(1);
                false
            }
            _ => self.depth == 0,
        }
    }

    /// Whether the next character would be read at top level.
    pub(crate) fn at_top_level(&self) -> bool {
        self.quote.is_none() && !self.escaped && self.depth == 0
    }

    /// Whether the scan is inside a quoted string.
    pub(crate) fn in_quote(&self) -> bool {
        self.quote.is_some()
    }
}

/// Byte index of the first top-level occurrence of `needle`.
pub(crate) fn find_top_level(text: &str, needle: char) -> Option<usize> {
    let mut nesting = Nesting::default();
    text.char_indices()
        .find(|&(_, ch)| nesting.step(ch) && ch == needle)
        .map(|(i, _)| i)
}

/// Split on every top-level occurrence of `separator`.
pub(crate) fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut nesting = Nesting::default();
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        if nesting.step(ch) && ch == separator {
            parts.push(&text[start..i]);
            start = i + ch.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Trim and collapse every whitespace run outside quoted strings into a
/// single space.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut nesting = Nesting::default();
    let mut pending_space = false;
    for ch in text.trim().chars() {
        let quoted = nesting.in_quote();
        nesting.step(ch);
        if ch.is_whitespace() && !quoted {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_top_level_skips_parens() {
        assert_eq!(find_top_level("background: url(a:b)", ':'), Some(10));
        assert_eq!(find_top_level("url(a:b)", ':'), None);
    }

    #[test]
    fn test_find_top_level_skips_quotes() {
        assert_eq!(find_top_level(r#"content: "a:b""#, ':'), Some(7));
        assert_eq!(find_top_level(r#""a:b""#, ':'), None);
    }

    #[test]
    fn test_find_top_level_skips_escape() {
        assert_eq!(find_top_level(r"a\:b", ':'), None);
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(split_top_level("a, b", ','), vec!["a", " b"]);
        assert_eq!(split_top_level(":is(a, b), c", ','), vec![":is(a, b)", " c"]);
        assert_eq!(split_top_level("a", ','), vec!["a"]);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_whitespace("@media  only\nscreen"), "@media only screen");
    }

    #[test]
    fn test_collapse_whitespace_keeps_quoted_runs() {
        assert_eq!(collapse_whitespace(r#"x   "a   b"  y"#), r#"x "a   b" y"#);
    }

    #[test]
    fn test_nesting_brackets() {
        let mut n = Nesting::default();
        assert!(n.step('a'));
        assert!(!n.step('['));
        assert!(!n.at_top_level());
        assert!(!n.step('x'));
        assert!(!n.step(']'));
        assert!(n.at_top_level());
    }
}
