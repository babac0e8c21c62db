use std::iter::Peekable;
use std::str::Chars;

use crate::span::{NextColumn, NextLine, Span};
use crate::token::{Token, TokenKind};

pub mod traits {
    use crate::span::Span;
    use crate::token::Token;

    /// The pull contract between the engine and its token supplier.
    ///
    /// Synchronous, one token per call, no backtracking. Once the input
    /// is exhausted the source returns the end-of-input token on every
    /// subsequent call. Lexing never fails: unclassifiable text comes
    /// back as `Illegal` tokens and is rejected by the tables like any
    /// other unexpected terminal.
    pub trait TokenSource {
        fn next_token(&mut self) -> Token;

        /// Location of the most recently consumed character.
        fn span(&self) -> Span;
    }
}

/// A lexer over a source string.
///
/// Whitespace (space, tab, CR, LF) is insignificant and never surfaces.
/// `+ * ( )` lex as single-character tokens; a maximal run of ASCII
/// letters is an identifier candidate, classified `Ident` only when it
/// case-insensitively equals `id`; any other character is a
/// single-character `Illegal` token.
pub struct Lexer<'src> {
    chars: Peekable<Chars<'src>>,
    span: Span,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.chars().peekable(),
            span: Span::default(),
        }
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next().inspect(|&ch| {
            if ch == '\n' {
                self.span += NextLine;
            } else {
                self.span += NextColumn;
            }
        })
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.advance();
        }
    }

    fn lex_word(&mut self, first: char) -> Token {
        let start = self.span;
        let mut word = String::from(first);

        while matches!(self.chars.peek(), Some(ch) if ch.is_ascii_alphabetic()) {
            if let Some(ch) = self.advance() {
                word.push(ch);
            }
        }

        Token::new(TokenKind::classify_word(&word), word, start)
    }
}

impl traits::TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.advance() else {
            return Token::eof(self.span);
        };

        match ch {
            '+' => Token::new(TokenKind::Plus, ch, self.span),
            '*' => Token::new(TokenKind::Asterisk, ch, self.span),
            '(' => Token::new(TokenKind::LParens, ch, self.span),
            ')' => Token::new(TokenKind::RParens, ch, self.span),
            ch if ch.is_ascii_alphabetic() => self.lex_word(ch),
            ch => Token::new(TokenKind::Illegal, ch, self.span),
        }
    }

    fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::{traits::TokenSource as _, Lexer};
    use crate::span::Span;
    use crate::token::{Token, TokenKind};

    fn drain(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = vec![];
        loop {
            let token = lexer.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    #[test]
    fn test_lexer() {
        let tokens = drain("id + (id * id)");
        let expected = vec![
            Token::new(TokenKind::Ident, "id", Span::new(1, 1)),
            Token::new(TokenKind::Plus, "+", Span::new(1, 4)),
            Token::new(TokenKind::LParens, "(", Span::new(1, 6)),
            Token::new(TokenKind::Ident, "id", Span::new(1, 7)),
            Token::new(TokenKind::Asterisk, "*", Span::new(1, 10)),
            Token::new(TokenKind::Ident, "id", Span::new(1, 12)),
            Token::new(TokenKind::RParens, ")", Span::new(1, 14)),
            Token::eof(Span::new(1, 14)),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        let kinds = |s: &str| {
            drain(s)
                .into_iter()
                .map(|token| token.kind)
                .collect::<Vec<_>>()
        };

        assert_eq!(kinds(" id\t+\r\nid "), kinds("id+id"));
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("id");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_ident_classification_keeps_literal() {
        let tokens = drain("ID");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].text, "ID");
    }

    #[test]
    fn test_unknown_words_are_illegal() {
        let tokens = drain("ident");
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].text, "ident");
    }

    // only ASCII letters extend a word, so `_` stands alone
    #[test]
    fn test_underscore_is_not_a_letter() {
        let tokens = drain("id_");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].text, "_");
    }

    #[test]
    fn test_unknown_characters_are_illegal() {
        let tokens = drain("%");
        assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "%", Span::new(1, 1)));
    }

    #[test]
    fn test_spans_follow_lines() {
        let tokens = drain("id\n+ id");
        assert_eq!(tokens[0].span, Span::new(1, 1));
        assert_eq!(tokens[1].span, Span::new(2, 1));
        assert_eq!(tokens[2].span, Span::new(2, 3));
    }

    #[test]
    fn test_span_follows_the_last_consumed_character() {
        let mut lexer = Lexer::new("id + id");
        assert_eq!(lexer.span(), Span::default());

        lexer.next_token();
        assert_eq!(lexer.span(), Span::new(1, 2));

        lexer.next_token();
        assert_eq!(lexer.span(), Span::new(1, 4));

        lexer.next_token();
        assert!(lexer.next_token().is_eof());
        assert_eq!(lexer.span(), Span::new(1, 7));
    }
}
