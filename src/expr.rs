//! The arithmetic expression grammar and its SLR driving tables.
//!
//! ```grammar
//! 1. E := E + T
//! 2. E := T
//! 3. T := T * F
//! 4. T := F
//! 5. F := ( E )
//! 6. F := id
//! ```
//!
//! The automaton has twelve states; its tables are laid out row by
//! row below, the way the canonical collection orders them.

use crate::error::TableFault;
use crate::grammar::Grammar;
use crate::lr::action::Action;
use crate::lr::table::{SlrTable, StateId};
use crate::lr::LrParser;
use crate::rule;
use crate::rule::traits::RuleDefSlice;
use crate::rule::RuleSet;
use crate::symbol::Symbol;
use crate::token::TokenKind;

pub const GRAMMAR: Grammar<'static, 9, 6> = Grammar::new(
    [
        Symbol::term("id", TokenKind::Ident),
        Symbol::term("+", TokenKind::Plus),
        Symbol::term("*", TokenKind::Asterisk),
        Symbol::term("(", TokenKind::LParens),
        Symbol::term(")", TokenKind::RParens),
        Symbol::term("$", TokenKind::Eof),
        Symbol::nterm("E"),
        Symbol::nterm("T"),
        Symbol::nterm("F"),
    ],
    [
        rule!("E" => "E" "+" "T"),
        rule!("E" => "T"),
        rule!("T" => "T" "*" "F"),
        rule!("T" => "F"),
        rule!("F" => "(" "E" ")"),
        rule!("F" => "id"),
    ],
);

const STATE_COUNT: usize = 12;

const ACTIONS: &[(StateId, TokenKind, Action)] = &[
    (0, TokenKind::Ident, Action::Shift(5)),
    (0, TokenKind::LParens, Action::Shift(4)),
    (1, TokenKind::Plus, Action::Shift(6)),
    (1, TokenKind::Eof, Action::Accept),
    (2, TokenKind::Plus, Action::Reduce(2)),
    (2, TokenKind::Asterisk, Action::Shift(7)),
    (2, TokenKind::RParens, Action::Reduce(2)),
    (2, TokenKind::Eof, Action::Reduce(2)),
    (3, TokenKind::Plus, Action::Reduce(4)),
    (3, TokenKind::Asterisk, Action::Reduce(4)),
    (3, TokenKind::RParens, Action::Reduce(4)),
    (3, TokenKind::Eof, Action::Reduce(4)),
    (4, TokenKind::Ident, Action::Shift(5)),
    (4, TokenKind::LParens, Action::Shift(4)),
    (5, TokenKind::Plus, Action::Reduce(6)),
    (5, TokenKind::Asterisk, Action::Reduce(6)),
    (5, TokenKind::RParens, Action::Reduce(6)),
    (5, TokenKind::Eof, Action::Reduce(6)),
    (6, TokenKind::Ident, Action::Shift(5)),
    (6, TokenKind::LParens, Action::Shift(4)),
    (7, TokenKind::Ident, Action::Shift(5)),
    (7, TokenKind::LParens, Action::Shift(4)),
    (8, TokenKind::Plus, Action::Shift(6)),
    (8, TokenKind::RParens, Action::Shift(11)),
    (9, TokenKind::Plus, Action::Reduce(1)),
    (9, TokenKind::Asterisk, Action::Shift(7)),
    (9, TokenKind::RParens, Action::Reduce(1)),
    (9, TokenKind::Eof, Action::Reduce(1)),
    (10, TokenKind::Plus, Action::Reduce(3)),
    (10, TokenKind::Asterisk, Action::Reduce(3)),
    (10, TokenKind::RParens, Action::Reduce(3)),
    (10, TokenKind::Eof, Action::Reduce(3)),
    (11, TokenKind::Plus, Action::Reduce(5)),
    (11, TokenKind::Asterisk, Action::Reduce(5)),
    (11, TokenKind::RParens, Action::Reduce(5)),
    (11, TokenKind::Eof, Action::Reduce(5)),
];

const GOTOS: &[(StateId, &str, StateId)] = &[
    (0, "E", 1),
    (0, "T", 2),
    (0, "F", 3),
    (4, "E", 8),
    (4, "T", 2),
    (4, "F", 3),
    (6, "T", 9),
    (6, "F", 3),
    (7, "F", 10),
];

/// Builds the driving table, checked against the grammar.
pub fn table() -> Result<SlrTable<'static>, TableFault> {
    let table = SlrTable::new(&GRAMMAR, STATE_COUNT, ACTIONS, GOTOS)?;
    table.check_rules(GRAMMAR.as_rule_def_slice().len())?;

    Ok(table)
}

/// Builds a parser for the expression grammar.
pub fn parser() -> Result<LrParser<'static, SlrTable<'static>>, TableFault> {
    Ok(LrParser::new(RuleSet::new(&GRAMMAR), table()?))
}

#[cfg(test)]
mod tests {
    use super::{parser, table};

    #[test]
    fn test_the_parser_builds() {
        parser().expect("cannot build the expression parser");
    }

    #[test]
    fn test_the_table_renders_with_its_symbols() {
        let rendered = table().expect("cannot build the expression table").to_string();

        assert!(rendered.contains("id"));
        assert!(rendered.contains("s5"));
        assert!(rendered.contains("r6"));
        assert!(rendered.contains("acc"));
    }
}
