use itertools::Itertools;

use crate::lr::table::StateId;
use crate::symbol::Symbol;

/// One entry of the parse stack: an automaton state, or a grammar
/// symbol together with the literal text it matched (the token's text
/// for terminals, the rule's left-hand name for nonterminals).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackItem<'g> {
    State(StateId),
    Symbol { symbol: Symbol<'g>, text: String },
}

impl<'g> StackItem<'g> {
    pub fn symbol(symbol: Symbol<'g>, text: impl ToString) -> Self {
        Self::Symbol {
            symbol,
            text: text.to_string(),
        }
    }
}

impl std::fmt::Display for StackItem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackItem::State(state) => write!(f, "{}", state),
            StackItem::Symbol { text, .. } => write!(f, "{}", text),
        }
    }
}

/// The parse stack: a strictly alternating sequence
/// `State, Symbol, State, …` that begins and ends with a state.
///
/// The alternation is enforced by construction — entries are pushed and
/// popped in (symbol, state) pairs around the seed state, which never
/// leaves the stack. A failed pop reports `None` instead of panicking,
/// so malformed tables surface as structured faults upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStack<'g> {
    items: Vec<StackItem<'g>>,
}

impl<'g> ParseStack<'g> {
    /// A fresh stack holding only the initial state.
    pub fn new(start: StateId) -> Self {
        Self {
            items: vec![StackItem::State(start)],
        }
    }

    /// Pushes a symbol item and the state entered on top of it, as one
    /// shift or one goto does.
    pub fn push_pair(&mut self, symbol: Symbol<'g>, text: impl ToString, state: StateId) {
        self.items.push(StackItem::symbol(symbol, text));
        self.items.push(StackItem::State(state));
    }

    /// Pops the topmost (state, symbol) pair and returns the symbol
    /// entry, or `None` when only the seed state remains.
    pub fn pop_pair(&mut self) -> Option<(Symbol<'g>, String)> {
        if self.items.len() < 3 {
            return None;
        }

        let state = self.items.pop();
        debug_assert!(matches!(state, Some(StackItem::State(_))));

        match self.items.pop() {
            Some(StackItem::Symbol { symbol, text }) => Some((symbol, text)),
            _ => None,
        }
    }

    /// The state on top of the stack.
    pub fn top_state(&self) -> StateId {
        match self.items.last() {
            Some(StackItem::State(state)) => *state,
            // pushes and pops are paired, so a state is always on top
            _ => unreachable!("parse stack must end with a state"),
        }
    }

    pub fn items(&self) -> &[StackItem<'g>] {
        &self.items
    }

    pub fn depth(&self) -> usize {
        self.items.len()
    }
}

impl std::fmt::Display for ParseStack<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.items.iter().map(|item| item.to_string()).join(" | ")
        )
    }
}
