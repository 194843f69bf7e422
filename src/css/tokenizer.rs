//! Comment- and brace-aware CSS tokenizer.
//!
//! Scanning happens in two layers:
//!
//! 1. A logos lexer splits the source into [`Lexeme`]s. Block comments and
//!    quoted strings are consumed whole by callbacks that scan for their
//!    terminator, so nothing inside them can act as a boundary.
//! 2. A [`Scanner`] accumulates text lexemes and turns them into structural
//!    [`Token`]s at each `{`, `}` and `;`.
//!
//! Comment priority: `/*` is two characters long, so it always wins against a
//! lone `/` text lexeme.

use logos::{Lexer, Logos};
use tracing::{debug, trace};

use crate::css::error::{BraceFault, ParseError};
use crate::css::model::{Token, TokenKind};
use crate::css::text::{collapse_whitespace, find_top_level, Nesting};

/// Low-level lexeme produced by the logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    /// `/* ... */`, scanned by [`block_comment`].
    #[token("/*", block_comment)]
    Comment,

    /// A quoted string, scanned by [`quoted`].
    #[token("\"", |lex| quoted(lex, '"'))]
    #[token("'", |lex| quoted(lex, '\''))]
    Quoted,

    /// Backslash escape such as `\{`. Never structural.
    #[regex(r"\\.")]
    #[token("\\")]
    Escape,

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// `;`
    #[token(";")]
    Semicolon,

    /// Anything else, including whitespace and a `/` that does not open a
    /// comment.
    #[regex(r#"[^{};"'/\\]+"#)]
    #[token("/")]
    Text,
}

/// Consume everything up to and including the next `*/`.
///
/// Returns `false` (a lexer error) when the comment is never closed.
fn block_comment(lex: &mut Lexer<Lexeme>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

/// Consume a string body up to the closing `quote`, honoring backslash
/// escapes. An unterminated string swallows the rest of the input.
fn quoted(lex: &mut Lexer<Lexeme>, quote: char) -> bool {
    let rest = lex.remainder();
    let mut escaped = false;
    for (i, ch) in rest.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            lex.bump(i + ch.len_utf8());
            return true;
        }
    }
    lex.bump(rest.len());
    true
}

/// Tokenize CSS source into structural [`Token`]s.
///
/// Fails with [`ParseError::UnbalancedBraces`] on a stray `}`, a block left
/// open at end of input, or an unterminated comment.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut scanner = Scanner::new(source);
    let mut lexer = Lexeme::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        match result {
            Ok(Lexeme::Comment) => scanner.comment(slice, span.start),
            Ok(Lexeme::BraceOpen) => scanner.open(span.start),
            Ok(Lexeme::BraceClose) => scanner.close(span.start)?,
            Ok(Lexeme::Semicolon) => scanner.semicolon(slice, span.start),
            Ok(Lexeme::Quoted | Lexeme::Escape | Lexeme::Text) => {
                scanner.text(slice, span.start)
            }
            Err(()) if slice.starts_with("/*") => {
                return Err(ParseError::unbalanced(
                    source,
                    span.start,
                    BraceFault::UnterminatedComment,
                ));
            }
            Err(()) => scanner.text(slice, span.start),
        }
    }

    scanner.finish()
}

/// Structural scanner state.
struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    /// Text seen since the last structural boundary.
    pending: String,
    /// Offset of the first non-whitespace character in `pending`.
    pending_start: Option<usize>,
    /// Paren/bracket/quote state of `pending`.
    nesting: Nesting,
    /// Offsets of every `{` not yet closed.
    open_blocks: Vec<usize>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            pending: String::new(),
            pending_start: None,
            nesting: Nesting::default(),
            open_blocks: Vec::new(),
        }
    }

    fn push(&mut self, kind: TokenKind, offset: usize) {
        trace!(?kind, offset, "token");
        self.tokens.push(Token::new(kind, offset));
    }

    fn text(&mut self, slice: &str, offset: usize) {
        if self.pending_start.is_none() {
            let leading = slice.len() - slice.trim_start().len();
            if leading < slice.len() {
                self.pending_start = Some(offset + leading);
            }
        }
        for ch in slice.chars() {
            self.nesting.step(ch);
        }
        self.pending.push_str(slice);
    }

    /// A `;` inside `(...)` or `[...]` is value text, e.g.
    /// `url(data:image/png;base64,...)`.
    fn semicolon(&mut self, slice: &str, offset: usize) {
        if self.nesting.at_top_level() {
            self.flush_statement();
        } else {
            self.text(slice, offset);
        }
    }

    /// Comments are emitted where they appear, ahead of any construct whose
    /// text they interrupt.
    fn comment(&mut self, slice: &str, offset: usize) {
        self.push(TokenKind::Comment(slice.to_string()), offset);
    }

    fn take_pending(&mut self, fallback: usize) -> (String, usize) {
        let text = self.pending.trim().to_string();
        let offset = self.pending_start.unwrap_or(fallback);
        self.pending.clear();
        self.pending_start = None;
        self.nesting = Nesting::default();
        (text, offset)
    }

    fn open(&mut self, offset: usize) {
        let (header, start) = self.take_pending(offset);
        let kind = if header.starts_with('@') {
            TokenKind::AtRulePrelude(header)
        } else {
            TokenKind::Selector(header)
        };
        self.push(kind, start);
        self.push(TokenKind::BlockOpen, offset);
        self.open_blocks.push(offset);
    }

    fn close(&mut self, offset: usize) -> Result<(), ParseError> {
        self.flush_statement();
        if self.open_blocks.pop().is_none() {
            return Err(ParseError::unbalanced(
                self.source,
                offset,
                BraceFault::UnexpectedClose,
            ));
        }
        self.push(TokenKind::BlockClose, offset);
        Ok(())
    }

    /// Turn pending text into a declaration or a raw leaf.
    fn flush_statement(&mut self) {
        let (text, start) = self.take_pending(0);
        if text.is_empty() {
            return;
        }
        let kind = classify_statement(&text);
        if matches!(kind, TokenKind::Raw(_)) && !text.starts_with('@') {
            debug!(offset = start, text = %text, "passing malformed declaration through");
        }
        self.push(kind, start);
    }

    fn finish(mut self) -> Result<Vec<Token>, ParseError> {
        self.flush_statement();
        if let Some(&innermost) = self.open_blocks.last() {
            return Err(ParseError::unbalanced(
                self.source,
                innermost,
                BraceFault::UnclosedBlock {
                    depth: self.open_blocks.len(),
                },
            ));
        }
        Ok(self.tokens)
    }
}

/// Classify `;`-terminated text as a declaration or raw text.
///
/// A declaration has a top-level `:` with a whitespace-free property before
/// it and a non-empty value after it.
fn classify_statement(text: &str) -> TokenKind {
    if text.starts_with('@') {
        return TokenKind::Raw(collapse_whitespace(text));
    }
    if let Some(colon) = find_top_level(text, ':') {
        let property = text[..colon].trim();
        let value = text[colon + 1..].trim();
        if !property.is_empty()
            && !value.is_empty()
            && !property.contains(char::is_whitespace)
        {
            return TokenKind::Declaration {
                property: property.to_string(),
                value: collapse_whitespace(value),
            };
        }
    }
    TokenKind::Raw(collapse_whitespace(text))
}
