use itertools::Itertools;
use thiserror::Error;

use crate::lr::action::Action;
use crate::lr::table::StateId;
use crate::rule::RuleIndex;
use crate::token::{Token, TokenKind};

/// A defect in the driving tables, detected while the parser was
/// following them.
///
/// None of these can arise from input text alone; they mean the action
/// table, goto table and rule table disagree with each other. The
/// parser reports them instead of panicking so a corrupted table set
/// degrades into an ordinary error at the call site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableFault {
    #[error("rule {index} is not in the rule table")]
    UnknownRule { index: RuleIndex },

    #[error("state {state} holds two actions under {kind} ({first} / {second})")]
    Conflict {
        state: StateId,
        kind: TokenKind,
        first: Action,
        second: Action,
    },

    #[error("rule {rule} expected {expected} on the stack, found {got}")]
    WrongSymbol {
        rule: RuleIndex,
        expected: String,
        got: String,
    },

    #[error("rule {rule} popped past the bottom of the stack")]
    Underflow { rule: RuleIndex },

    #[error("state {state} has no goto under {lhs}")]
    MissingGoto { state: StateId, lhs: String },

    #[error("state {state} is outside the table ({limit} states)")]
    StateOutOfRange { state: StateId, limit: usize },

    #[error("no terminal symbol declared for {kind}")]
    UnknownTerminal { kind: TokenKind },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "syntax error at {}: unexpected {token} in state {state}, expected one of {}",
        .token.span,
        .expected.iter().join(", ")
    )]
    Syntax {
        token: Token,
        state: StateId,
        expected: Vec<TokenKind>,
    },

    #[error("malformed parse table: {0}")]
    Table(#[from] TableFault),
}

impl ParseError {
    #[inline(always)]
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseError, TableFault};
    use crate::span::Span;
    use crate::token::{Token, TokenKind};

    #[test]
    fn test_syntax_error_names_the_token_and_state() {
        let error = ParseError::Syntax {
            token: Token::new(TokenKind::Plus, "+", Span::new(1, 1)),
            state: 0,
            expected: vec![TokenKind::Ident, TokenKind::LParens],
        };

        assert_eq!(
            error.to_string(),
            "syntax error at 1:1: unexpected Plus `+` in state 0, expected one of Ident, LParens"
        );
    }

    #[test]
    fn test_table_faults_wrap_into_parse_errors() {
        let error: ParseError = TableFault::UnknownRule { index: 9 }.into();

        assert!(!error.is_syntax());
        assert_eq!(
            error.to_string(),
            "malformed parse table: rule 9 is not in the rule table"
        );
    }
}
