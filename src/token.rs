use crate::span::Span;

/// The terminal alphabet of the lexer.
///
/// `Eof` is the repeatable end-of-input sentinel; `Illegal` classifies
/// anything the lexer recognizes but the grammar has no terminal for.
/// Neither ever carries an action table entry beyond what the grammar
/// explicitly defines, so both reject through the ordinary syntax-error
/// path.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum TokenKind {
    Eof,
    Illegal,
    Plus,
    Asterisk,
    Ident,
    LParens,
    RParens,
}

impl TokenKind {
    /// Classifies a maximal letter run: only `id` (any case) is a known
    /// identifier, everything else is `Illegal`.
    pub fn classify_word(word: &str) -> Self {
        if word.eq_ignore_ascii_case("id") {
            TokenKind::Ident
        } else {
            TokenKind::Illegal
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A classified token: its kind, the literal text it matched, and where
/// it sits in the source.
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new<S>(kind: TokenKind, text: S, span: Span) -> Self
    where
        S: ToString,
    {
        Self {
            kind,
            text: text.to_string(),
            span,
        }
    }

    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "EOF", span)
    }

    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}`", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::TokenKind;

    #[test]
    fn test_word_classification_is_case_insensitive() {
        assert_eq!(TokenKind::classify_word("id"), TokenKind::Ident);
        assert_eq!(TokenKind::classify_word("ID"), TokenKind::Ident);
        assert_eq!(TokenKind::classify_word("Id"), TokenKind::Ident);
        assert_eq!(TokenKind::classify_word("ident"), TokenKind::Illegal);
        assert_eq!(TokenKind::classify_word("x"), TokenKind::Illegal);
    }
}
