use crate::rule::RuleDef;
use crate::symbol::Symbol;

pub mod traits {
    use crate::rule::traits::RuleDefSlice;
    use crate::rule::Rule;
    use crate::symbol::traits::SymbolSlice;

    pub trait Grammar<'g>: RuleDefSlice<'g> + SymbolSlice<'g> {
        /// Resolves the declared rules against the symbol list.
        ///
        /// Numbering starts at 1; index 0 stays reserved.
        fn iter_rules<'a>(&'a self) -> impl Iterator<Item = Rule<'g>> + 'a
        where
            'g: 'a,
        {
            self.as_rule_def_slice()
                .iter()
                .enumerate()
                .map(move |(i, def)| Rule {
                    index: i + 1,
                    lhs: self.sym(def.lhs),
                    rhs: def.rhs.iter().map(|id| self.sym(id)).collect(),
                })
        }
    }
}

#[derive(Debug, PartialEq)]
/// A grammar: the declarative symbol and rule lists one parser runs on.
///
/// # Example
///
/// For the grammar
///
/// ```grammar
/// 1. E := E + T
/// 2. E := T
/// 3. T := id
/// ```
///
/// ```
/// use slrparse::{rule, Grammar, Symbol, TokenKind};
///
/// const GRAMMAR: Grammar<'static, 4, 3> = Grammar::new(
///     [
///         Symbol::term("id", TokenKind::Ident),
///         Symbol::term("+", TokenKind::Plus),
///         Symbol::nterm("E"),
///         Symbol::nterm("T"),
///     ],
///     [
///         rule!("E" => "E" "+" "T"),
///         rule!("E" => "T"),
///         rule!("T" => "id"),
///     ],
/// );
/// ```
pub struct Grammar<'g, const NB_SYMBOLS: usize, const NB_RULES: usize> {
    rules: [RuleDef<'g>; NB_RULES],
    symbols: [Symbol<'g>; NB_SYMBOLS],
}

impl<'g, const NB_SYMBOLS: usize, const NB_RULES: usize> Grammar<'g, NB_SYMBOLS, NB_RULES> {
    pub const fn new(
        symbols: [Symbol<'g>; NB_SYMBOLS],
        rules: [RuleDef<'g>; NB_RULES],
    ) -> Self {
        Self { rules, symbols }
    }
}

impl<'g, const NB_SYMBOLS: usize, const NB_RULES: usize> AsRef<[Symbol<'g>]>
    for Grammar<'g, NB_SYMBOLS, NB_RULES>
{
    fn as_ref(&self) -> &[Symbol<'g>] {
        &self.symbols
    }
}

impl<'g, const NB_SYMBOLS: usize, const NB_RULES: usize> AsRef<[RuleDef<'g>]>
    for Grammar<'g, NB_SYMBOLS, NB_RULES>
{
    fn as_ref(&self) -> &[RuleDef<'g>] {
        &self.rules
    }
}

impl<'g, const NB_SYMBOLS: usize, const NB_RULES: usize> traits::Grammar<'g>
    for Grammar<'g, NB_SYMBOLS, NB_RULES>
{
}
