use prettytable::Table as PtTable;
use std::collections::HashMap;

use crate::error::TableFault;
use crate::lr::action::Action;
use crate::rule::RULE_NONE;
use crate::symbol::traits::SymbolSlice;
use crate::symbol::Symbol;
use crate::token::TokenKind;

/// Index of a row in the driving tables.
pub type StateId = usize;

pub mod traits {
    use crate::lr::action::Action;
    use crate::token::TokenKind;

    use super::StateId;

    /// Read access to a shift-reduce driving table.
    ///
    /// The parser only ever consults its tables through this trait, so
    /// it carries no knowledge of any particular grammar.
    pub trait ParseTable {
        fn state_count(&self) -> usize;

        /// The action for `kind` in `state`, if the table has one.
        /// An absent entry means the input is rejected here.
        fn action(&self, state: StateId, kind: TokenKind) -> Option<Action>;

        /// The state entered once a reduction to `lhs` has uncovered
        /// `state`.
        fn goto(&self, state: StateId, lhs: &str) -> Option<StateId>;

        /// The terminals with an action in `state`, in a stable order.
        fn expected(&self, state: StateId) -> Vec<TokenKind>;
    }
}

#[derive(Debug, Default, PartialEq)]
struct Row<'g> {
    actions: HashMap<TokenKind, Action>,
    gotos: HashMap<&'g str, StateId>,
}

/// A dense SLR driving table: one [`Row`] per automaton state, holding
/// that state's terminal actions and nonterminal gotos.
///
/// Construction validates the shape of the entries — every state and
/// shift or goto target must fall inside the table, every reduction
/// must name a rule the grammar defines, and no cell may hold two
/// actions. A table that survives [`SlrTable::new`] can still lie about
/// its grammar, which is why the parser double-checks every pop.
#[derive(PartialEq)]
pub struct SlrTable<'g> {
    symbols: &'g [Symbol<'g>],
    rows: Vec<Row<'g>>,
}

impl std::fmt::Debug for SlrTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl std::fmt::Display for SlrTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table = PtTable::new();

        table.add_row(
            ["#".to_string()]
                .into_iter()
                .chain(self.symbols.iter_terminals().map(|sym| sym.id.to_string()))
                .chain(
                    self.symbols
                        .iter_non_terminals()
                        .map(|sym| sym.id.to_string()),
                )
                .collect(),
        );

        for (id, row) in self.rows.iter().enumerate() {
            table.add_row(
                [id.to_string()]
                    .into_iter()
                    .chain(self.symbols.iter_terminals().map(|sym| {
                        sym.terminal()
                            .and_then(|kind| row.actions.get(&kind))
                            .map(ToString::to_string)
                            .unwrap_or_default()
                    }))
                    .chain(self.symbols.iter_non_terminals().map(|sym| {
                        row.gotos
                            .get(sym.id)
                            .map(ToString::to_string)
                            .unwrap_or_default()
                    }))
                    .collect(),
            );
        }

        write!(f, "{}", table)
    }
}

impl<'g> SlrTable<'g> {
    /// Builds a table over `grammar` from flat entry lists.
    ///
    /// `actions` holds `(state, lookahead, action)` triples and `gotos`
    /// holds `(state, lhs, target)` triples, in any order.
    pub fn new<G>(
        grammar: &'g G,
        state_count: usize,
        actions: &[(StateId, TokenKind, Action)],
        gotos: &[(StateId, &'g str, StateId)],
    ) -> Result<Self, TableFault>
    where
        G: SymbolSlice<'g>,
    {
        let mut rows: Vec<Row<'g>> = (0..state_count).map(|_| Row::default()).collect();

        for &(state, kind, action) in actions {
            let limit = state_count;
            let row = rows
                .get_mut(state)
                .ok_or(TableFault::StateOutOfRange { state, limit })?;

            match action {
                Action::Shift(target) if target >= limit => {
                    return Err(TableFault::StateOutOfRange {
                        state: target,
                        limit,
                    });
                }
                Action::Reduce(RULE_NONE) => {
                    return Err(TableFault::UnknownRule { index: RULE_NONE });
                }
                _ => {}
            }

            if let Some(first) = row.actions.insert(kind, action) {
                return Err(TableFault::Conflict {
                    state,
                    kind,
                    first,
                    second: action,
                });
            }
        }

        for &(state, lhs, target) in gotos {
            let limit = state_count;
            let row = rows
                .get_mut(state)
                .ok_or(TableFault::StateOutOfRange { state, limit })?;

            if target >= limit {
                return Err(TableFault::StateOutOfRange {
                    state: target,
                    limit,
                });
            }

            row.gotos.insert(lhs, target);
        }

        Ok(Self {
            symbols: grammar.as_symbol_slice(),
            rows,
        })
    }

    /// Checks every reduction against the rule table it will drive.
    pub fn check_rules(&self, rule_count: usize) -> Result<(), TableFault> {
        for row in &self.rows {
            for action in row.actions.values() {
                if let Action::Reduce(index) = *action {
                    if index == RULE_NONE || index > rule_count {
                        return Err(TableFault::UnknownRule { index });
                    }
                }
            }
        }

        Ok(())
    }
}

impl traits::ParseTable for SlrTable<'_> {
    fn state_count(&self) -> usize {
        self.rows.len()
    }

    fn action(&self, state: StateId, kind: TokenKind) -> Option<Action> {
        self.rows.get(state)?.actions.get(&kind).copied()
    }

    fn goto(&self, state: StateId, lhs: &str) -> Option<StateId> {
        self.rows.get(state)?.gotos.get(lhs).copied()
    }

    fn expected(&self, state: StateId) -> Vec<TokenKind> {
        let Some(row) = self.rows.get(state) else {
            return Vec::new();
        };

        self.symbols
            .iter_terminals()
            .filter_map(|sym| sym.terminal())
            .filter(|kind| row.actions.contains_key(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::traits::ParseTable;
    use super::SlrTable;
    use crate::error::TableFault;
    use crate::expr;
    use crate::lr::action::Action;
    use crate::token::TokenKind;

    #[test]
    fn test_the_expression_table_builds() {
        let table = expr::table().expect("cannot build the expression table");

        assert_eq!(table.state_count(), 12);
        assert_eq!(table.action(0, TokenKind::Ident), Some(Action::Shift(5)));
        assert_eq!(table.action(1, TokenKind::Eof), Some(Action::Accept));
        assert_eq!(table.action(5, TokenKind::Ident), None);
        assert_eq!(table.goto(4, "E"), Some(8));
        assert_eq!(table.goto(0, "X"), None);
    }

    #[test]
    fn test_rejects_a_shift_past_the_last_state() {
        let fault = SlrTable::new(
            &expr::GRAMMAR,
            2,
            &[(0, TokenKind::Ident, Action::Shift(2))],
            &[],
        )
        .unwrap_err();

        assert_eq!(fault, TableFault::StateOutOfRange { state: 2, limit: 2 });
    }

    #[test]
    fn test_rejects_an_action_row_out_of_range() {
        let fault = SlrTable::new(
            &expr::GRAMMAR,
            2,
            &[(5, TokenKind::Ident, Action::Shift(1))],
            &[],
        )
        .unwrap_err();

        assert_eq!(fault, TableFault::StateOutOfRange { state: 5, limit: 2 });
    }

    #[test]
    fn test_rejects_a_reduction_by_the_reserved_rule() {
        let fault = SlrTable::new(&expr::GRAMMAR, 2, &[(0, TokenKind::Eof, Action::Reduce(0))], &[])
            .unwrap_err();

        assert_eq!(fault, TableFault::UnknownRule { index: 0 });
    }

    #[test]
    fn test_rejects_two_actions_in_one_cell() {
        let fault = SlrTable::new(
            &expr::GRAMMAR,
            2,
            &[
                (0, TokenKind::Plus, Action::Shift(1)),
                (0, TokenKind::Plus, Action::Reduce(2)),
            ],
            &[],
        )
        .unwrap_err();

        assert_eq!(
            fault,
            TableFault::Conflict {
                state: 0,
                kind: TokenKind::Plus,
                first: Action::Shift(1),
                second: Action::Reduce(2),
            }
        );
    }

    #[test]
    fn test_expected_terminals_follow_the_grammar_order() {
        let table = expr::table().expect("cannot build the expression table");

        assert_eq!(
            table.expected(0),
            vec![TokenKind::Ident, TokenKind::LParens]
        );
        assert_eq!(
            table.expected(9),
            vec![TokenKind::Plus, TokenKind::Asterisk, TokenKind::RParens, TokenKind::Eof]
        );
    }
}
