//! A table-driven SLR recognizer.
//!
//! [`LrParser`] runs the classic shift-reduce loop over a stream of
//! tokens, driven entirely by an action table, a goto table and a rule
//! table. [`expr`] ships the worked arithmetic expression grammar with
//! its twelve-state tables; [`lexer::Lexer`] turns source text into
//! the matching tokens.
//!
//! ```
//! use slrparse::{expr, Lexer};
//!
//! let parser = expr::parser()?;
//! let accepted = parser.parse(&mut Lexer::new("id + (id * id)"), &mut ())?;
//!
//! assert_eq!(accepted.stats.steps(), 19);
//! # Ok::<(), slrparse::ParseError>(())
//! ```

pub mod error;
pub mod expr;
pub mod grammar;
pub mod lexer;
pub mod lr;
pub mod rule;
pub mod span;
pub mod stack;
pub mod symbol;
pub mod token;
pub mod trace;

pub use error::{ParseError, TableFault};
pub use grammar::Grammar;
pub use lexer::Lexer;
pub use lr::{Acceptance, Action, LrParser, ParseStats, SlrTable, StateId};
pub use rule::{Rule, RuleDef, RuleIndex, RuleSet, RULE_NONE};
pub use span::Span;
pub use stack::{ParseStack, StackItem};
pub use symbol::{Symbol, SymbolKind};
pub use token::{Token, TokenKind};
pub use trace::ParseObserver;

pub mod traits {
    pub use crate::grammar::traits::Grammar;
    pub use crate::lexer::traits::TokenSource;
    pub use crate::lr::table::traits::ParseTable;
    pub use crate::rule::traits::RuleDefSlice;
    pub use crate::symbol::traits::SymbolSlice;
    pub use crate::trace::ParseObserver;
}
