use crate::lr::table::StateId;
use crate::rule::RuleIndex;

/// What the action table tells the parser to do with the current
/// lookahead in the current state. An absent entry is a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shift(StateId),
    Reduce(RuleIndex),
    Accept,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Shift(state) => write!(f, "s{}", state),
            Action::Reduce(rule) => write!(f, "r{}", rule),
            Action::Accept => write!(f, "acc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Action;

    #[test]
    fn test_display_uses_the_compact_notation() {
        assert_eq!(Action::Shift(7).to_string(), "s7");
        assert_eq!(Action::Reduce(4).to_string(), "r4");
        assert_eq!(Action::Accept.to_string(), "acc");
    }
}
