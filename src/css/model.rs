//! CSS lexical model: Token, Combinator, SelectorSegment.

/// A structural item produced by the tokenizer.
///
/// Tokens are emitted in source order. Nesting is implicit in the
/// `BlockOpen` / `BlockClose` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A block comment, including its `/*` and `*/` delimiters, byte-identical
    /// to the source.
    Comment(String),
    /// At-rule prelude text before a `{`, e.g. `@media (max-width:400px)`.
    AtRulePrelude(String),
    /// Selector text before a `{`, e.g. `#login_form .error-message`.
    Selector(String),
    /// A `property: value` pair. Both sides are trimmed and the `;` is gone.
    Declaration { property: String, value: String },
    /// Text that is neither a declaration nor a block header: block-less
    /// at-rules (`@import url(a.css)`) and malformed declarations.
    Raw(String),
    /// `{`
    BlockOpen,
    /// `}`
    BlockClose,
}

/// A token together with the byte offset where its construct starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset in the source text.
    pub offset: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// The relationship between a selector segment and the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// First segment of a selector.
    None,
    /// Descendant combinator (whitespace): `A B`.
    Descendant,
    /// Child combinator: `A > B`.
    Child,
    /// Adjacent sibling combinator: `A + B`.
    AdjacentSibling,
    /// General sibling combinator: `A ~ B`.
    GeneralSibling,
}

impl Combinator {
    /// Map a combinator glyph to its combinator.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '>' => Some(Combinator::Child),
            '+' => Some(Combinator::AdjacentSibling),
            '~' => Some(Combinator::GeneralSibling),
            _ => None,
        }
    }

    /// The glyph rendered before the first atom of a segment. Empty for
    /// `None` and `Descendant`.
    pub fn glyph(self) -> &'static str {
        match self {
            Combinator::None | Combinator::Descendant => "",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

/// One compound selector and the combinator that precedes it.
///
/// For example, `+ .error-message.big` is a segment with combinator
/// `AdjacentSibling` and atoms `[".error-message", ".big"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorSegment {
    pub combinator: Combinator,
    /// Simple-selector atoms, each including its leading `.`, `#`, `:` or `[`.
    pub atoms: Vec<String>,
}

impl SelectorSegment {
    /// Create an empty segment with the given combinator.
    pub fn new(combinator: Combinator) -> Self {
        Self {
            combinator,
            atoms: Vec::new(),
        }
    }

    /// Rendered labels, one per atom: the first carries the combinator glyph,
    /// every later atom carries the `&` attachment marker.
    pub fn labels(&self) -> Vec<String> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| {
                if i == 0 {
                    format!("{}{}", self.combinator.glyph(), atom)
                } else {
                    format!("&{atom}")
                }
            })
            .collect()
    }
}
