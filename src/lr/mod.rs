use log::trace;

use crate::error::{ParseError, TableFault};
use crate::lexer::traits::TokenSource;
use crate::rule::{RuleIndex, RuleSet};
use crate::stack::ParseStack;
use crate::symbol::traits::SymbolSlice;
use crate::token::Token;
use crate::trace::ParseObserver;

pub mod action;
pub mod table;

pub use action::Action;
pub use table::{SlrTable, StateId};

use table::traits::ParseTable;

/// Work counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    pub shifts: usize,
    pub reductions: usize,
}

impl ParseStats {
    /// Total steps taken, counting the accept move with the shifts and
    /// reductions.
    pub fn steps(&self) -> usize {
        self.shifts + self.reductions + 1
    }
}

/// Proof of a successful run: the final stack and the work it took.
#[derive(Debug)]
pub struct Acceptance<'g> {
    pub stats: ParseStats,
    pub stack: ParseStack<'g>,
}

/// A table-driven shift-reduce parser.
///
/// The parser owns nothing about any particular grammar beyond the
/// rule set and table it was built with; every run keeps its stack and
/// lookahead in locals, so one parser can serve any number of runs.
pub struct LrParser<'g, T> {
    rules: RuleSet<'g>,
    table: T,
}

impl<'g, T> LrParser<'g, T>
where
    T: ParseTable,
{
    pub fn new(rules: RuleSet<'g>, table: T) -> Self {
        Self { rules, table }
    }

    /// Runs the recognizer over `source` until it accepts or rejects.
    ///
    /// Shifting pulls the next token; reductions and the final accept
    /// leave the lookahead in place. Rejections come in two kinds:
    /// [`ParseError::Syntax`] when the input is at fault, and
    /// [`ParseError::Table`] when the tables are.
    ///
    /// Termination holds for grammars without empty productions: every
    /// step either consumes a token or pops more than it pushes. An
    /// empty production could reduce forever without advancing; no
    /// runtime guard covers that case.
    pub fn parse<S, O>(&self, source: &mut S, observer: &mut O) -> Result<Acceptance<'g>, ParseError>
    where
        S: TokenSource,
        O: ParseObserver<'g>,
    {
        let mut stack = ParseStack::new(0);
        let mut stats = ParseStats::default();
        let mut lookahead = pull(source, observer);

        loop {
            let state = stack.top_state();

            let Some(action) = self.table.action(state, lookahead.kind) else {
                return Err(ParseError::Syntax {
                    expected: self.table.expected(state),
                    token: lookahead,
                    state,
                });
            };

            observer.step(&stack, action);
            trace!("state {}: {} under {}", state, action, lookahead);

            match action {
                Action::Shift(target) => {
                    self.shift(&mut stack, &lookahead, target)?;
                    stats.shifts += 1;
                    lookahead = pull(source, observer);
                }
                Action::Reduce(index) => {
                    self.reduce(&mut stack, index)?;
                    stats.reductions += 1;
                }
                Action::Accept => {
                    trace!("accepted after {} steps", stats.steps());
                    return Ok(Acceptance { stats, stack });
                }
            }
        }
    }

    /// Pushes the lookahead's symbol and enters `target`.
    fn shift(
        &self,
        stack: &mut ParseStack<'g>,
        token: &Token,
        target: StateId,
    ) -> Result<(), TableFault> {
        if target >= self.table.state_count() {
            return Err(TableFault::StateOutOfRange {
                state: target,
                limit: self.table.state_count(),
            });
        }

        let symbol = self
            .rules
            .get_terminal_by_kind(token.kind)
            .ok_or(TableFault::UnknownTerminal { kind: token.kind })?;

        stack.push_pair(symbol, &token.text, target);
        Ok(())
    }

    /// Pops the rule's right-hand side, right to left, then follows the
    /// uncovered state's goto under the rule's left-hand side.
    ///
    /// Every popped symbol is checked against the rule; a mismatch
    /// means the tables and the rule set disagree.
    fn reduce(&self, stack: &mut ParseStack<'g>, index: RuleIndex) -> Result<(), TableFault> {
        let rule = self
            .rules
            .get(index)
            .ok_or(TableFault::UnknownRule { index })?;

        for expected in rule.rhs.iter().rev() {
            let (symbol, _) = stack
                .pop_pair()
                .ok_or(TableFault::Underflow { rule: index })?;

            if symbol != *expected {
                return Err(TableFault::WrongSymbol {
                    rule: index,
                    expected: expected.id.to_string(),
                    got: symbol.id.to_string(),
                });
            }
        }

        let uncovered = stack.top_state();
        let target = self
            .table
            .goto(uncovered, rule.lhs.id)
            .ok_or_else(|| TableFault::MissingGoto {
                state: uncovered,
                lhs: rule.lhs.id.to_string(),
            })?;

        if target >= self.table.state_count() {
            return Err(TableFault::StateOutOfRange {
                state: target,
                limit: self.table.state_count(),
            });
        }

        stack.push_pair(rule.lhs, rule.lhs.id, target);
        Ok(())
    }
}

fn pull<'g, S, O>(source: &mut S, observer: &mut O) -> Token
where
    S: TokenSource,
    O: ParseObserver<'g>,
{
    let token = source.next_token();
    trace!("pulled {}", token);
    observer.token(&token);
    token
}

#[cfg(test)]
pub mod fixtures {
    use crate::lr::action::Action;
    use crate::lr::table::traits::ParseTable;
    use crate::lr::table::StateId;
    use crate::token::TokenKind;

    /// A hand-wired table for fault injection, free of the checks
    /// [`crate::lr::SlrTable::new`] performs.
    pub struct RawTable {
        pub states: usize,
        pub actions: Vec<(StateId, TokenKind, Action)>,
        pub gotos: Vec<(StateId, &'static str, StateId)>,
    }

    impl ParseTable for RawTable {
        fn state_count(&self) -> usize {
            self.states
        }

        fn action(&self, state: StateId, kind: TokenKind) -> Option<Action> {
            self.actions
                .iter()
                .find(|(s, k, _)| *s == state && *k == kind)
                .map(|(_, _, action)| *action)
        }

        fn goto(&self, state: StateId, lhs: &str) -> Option<StateId> {
            self.gotos
                .iter()
                .find(|(s, l, _)| *s == state && *l == lhs)
                .map(|(_, _, target)| *target)
        }

        fn expected(&self, state: StateId) -> Vec<TokenKind> {
            self.actions
                .iter()
                .filter(|(s, _, _)| *s == state)
                .map(|(_, kind, _)| *kind)
                .collect()
        }
    }
}
