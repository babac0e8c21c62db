use crate::token::TokenKind;

#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum SymbolKind {
    /// A leaf of the grammar, tagged with the token kind that matches it.
    Terminal(TokenKind),
    NonTerminal,
}

/// A grammar symbol.
///
/// Symbols compare by identifier and kind, never by identity: two
/// occurrences of the terminal `id` are the same symbol wherever they
/// appear, which is what reduction matching relies on.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub struct Symbol<'g> {
    /// *Unique* identifier of the symbol within its grammar.
    pub id: &'g str,
    kind: SymbolKind,
}

impl std::fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<'g> Symbol<'g> {
    /// Creates a terminal symbol matching tokens of the given kind.
    pub const fn term(id: &'g str, kind: TokenKind) -> Self {
        Self {
            id,
            kind: SymbolKind::Terminal(kind),
        }
    }

    /// Creates a nonterminal symbol.
    pub const fn nterm(id: &'g str) -> Self {
        Self {
            id,
            kind: SymbolKind::NonTerminal,
        }
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, SymbolKind::Terminal(_))
    }

    /// The token kind this symbol matches, if it is a terminal.
    #[inline(always)]
    pub fn terminal(&self) -> Option<TokenKind> {
        match self.kind {
            SymbolKind::Terminal(kind) => Some(kind),
            SymbolKind::NonTerminal => None,
        }
    }
}

pub mod traits {
    use crate::symbol::Symbol;
    use crate::token::TokenKind;

    /// A trait to implement common lookups for objects holding symbols.
    pub trait SymbolSlice<'g>: AsRef<[Symbol<'g>]> {
        fn as_symbol_slice(&self) -> &[Symbol<'g>] {
            self.as_ref()
        }

        /// Resolves a symbol by identifier.
        ///
        /// Panics if the grammar does not define it: resolution only runs
        /// against trusted, compiled-in grammar data.
        fn sym(&self, id: &str) -> Symbol<'g> {
            self.get_symbol_by_id(id)
                .unwrap_or_else(|| panic!("the grammar does not include symbol {}", id))
        }

        fn get_symbol_by_id(&self, id: &str) -> Option<Symbol<'g>> {
            self.as_ref().iter().find(|sym| sym.id == id).copied()
        }

        /// The terminal symbol matching a token kind, if the grammar has one.
        fn get_terminal_by_kind(&self, kind: TokenKind) -> Option<Symbol<'g>> {
            self.as_ref()
                .iter()
                .find(|sym| sym.terminal() == Some(kind))
                .copied()
        }

        fn iter_terminals<'a>(&'a self) -> impl Iterator<Item = Symbol<'g>> + 'a
        where
            'g: 'a,
        {
            self.as_ref().iter().filter(|sym| sym.is_terminal()).copied()
        }

        fn iter_non_terminals<'a>(&'a self) -> impl Iterator<Item = Symbol<'g>> + 'a
        where
            'g: 'a,
        {
            self.as_ref()
                .iter()
                .filter(|sym| !sym.is_terminal())
                .copied()
        }
    }

    impl<'g, T> SymbolSlice<'g> for T where T: AsRef<[Symbol<'g>]> {}
}

#[cfg(test)]
mod tests {
    use super::{traits::SymbolSlice as _, Symbol};
    use crate::token::TokenKind;

    const SYMBOLS: [Symbol<'static>; 3] = [
        Symbol::term("id", TokenKind::Ident),
        Symbol::term("+", TokenKind::Plus),
        Symbol::nterm("E"),
    ];

    #[test]
    fn test_symbols_compare_by_id_and_kind() {
        assert_eq!(
            Symbol::term("id", TokenKind::Ident),
            Symbol::term("id", TokenKind::Ident)
        );
        assert_ne!(Symbol::term("E", TokenKind::Ident), Symbol::nterm("E"));
    }

    #[test]
    fn test_slice_lookups() {
        assert_eq!(SYMBOLS.sym("E"), Symbol::nterm("E"));
        assert_eq!(
            SYMBOLS.get_terminal_by_kind(TokenKind::Plus),
            Some(Symbol::term("+", TokenKind::Plus))
        );
        assert_eq!(SYMBOLS.get_terminal_by_kind(TokenKind::LParens), None);
        assert_eq!(SYMBOLS.iter_terminals().count(), 2);
        assert_eq!(SYMBOLS.iter_non_terminals().count(), 1);
    }
}
