use itertools::Itertools;

use crate::grammar::traits::Grammar;
use crate::symbol::Symbol;

/// A rule's number in the grammar.
///
/// Rules are numbered from 1, the order the grammar declares them in.
/// Index 0 is reserved to mean "no reduction" and never resolves to a
/// rule.
pub type RuleIndex = usize;

/// The reserved "no reduction" rule index.
pub const RULE_NONE: RuleIndex = 0;

/// Defines a grammar rule
///
/// The declarative form, resolved against the grammar's symbol list
/// when a [`RuleSet`] is built.
/// X := A1..An
#[derive(Debug, PartialEq)]
pub struct RuleDef<'g> {
    pub lhs: &'g str,
    pub rhs: &'g [&'g str],
}

impl<'g> RuleDef<'g> {
    pub const fn new(lhs: &'g str, rhs: &'g [&'g str]) -> Self {
        Self { lhs, rhs }
    }
}

#[macro_export]
macro_rules! rule {
    ($lhs:literal => $($rhs:literal)*) => {
        $crate::RuleDef::new(
            $lhs,
            &[$($rhs),*]
        )
    };
}

pub mod traits {
    use crate::rule::RuleDef;

    pub trait RuleDefSlice<'g>: AsRef<[RuleDef<'g>]> {
        fn as_rule_def_slice(&self) -> &[RuleDef<'g>] {
            self.as_ref()
        }
    }

    impl<'g, T> RuleDefSlice<'g> for T where T: AsRef<[RuleDef<'g>]> {}
}

#[derive(Debug, Eq, PartialEq)]
/// A grammar rule with its symbols resolved.
///
/// # Example
/// (1) E => E + T
pub struct Rule<'g> {
    pub index: RuleIndex,
    pub lhs: Symbol<'g>,
    pub rhs: Vec<Symbol<'g>>,
}

impl std::fmt::Display for Rule<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}) {} => {}",
            self.index,
            self.lhs,
            self.rhs.iter().map(|sym| sym.to_string()).join(" ")
        )
    }
}

/// The resolved rules of one grammar, numbered from 1.
#[derive(Debug)]
pub struct RuleSet<'g> {
    rules: Vec<Rule<'g>>,
    symbols: &'g [Symbol<'g>],
}

impl<'g> AsRef<[Symbol<'g>]> for RuleSet<'g> {
    fn as_ref(&self) -> &[Symbol<'g>] {
        self.symbols
    }
}

impl<'g> RuleSet<'g> {
    pub fn new<G>(grammar: &'g G) -> Self
    where
        G: Grammar<'g>,
    {
        Self {
            rules: grammar.iter_rules().collect(),
            symbols: grammar.as_symbol_slice(),
        }
    }

    /// Iterate over all rules of the grammar.
    pub fn iter(&self) -> impl Iterator<Item = &Rule<'g>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up a rule by number. `RULE_NONE` and out-of-range indices
    /// resolve to nothing.
    pub fn get(&self, index: RuleIndex) -> Option<&Rule<'g>> {
        index.checked_sub(1).and_then(|i| self.rules.get(i))
    }
}
