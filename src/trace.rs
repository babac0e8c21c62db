use crate::lr::action::Action;
use crate::stack::ParseStack;
use crate::token::Token;

/// A side channel onto the parser's moves.
///
/// The parser reports every token it pulls from its source and every
/// step it takes; an observer can record or print them but never
/// influences control flow. The unit observer `()` discards
/// everything.
pub trait ParseObserver<'g> {
    /// Called each time the parser pulls a token, including the final
    /// end-of-input sentinel.
    fn token(&mut self, token: &Token);

    /// Called once per step, with the stack as it looked when `action`
    /// was chosen.
    fn step(&mut self, stack: &ParseStack<'g>, action: Action);
}

impl<'g> ParseObserver<'g> for () {
    fn token(&mut self, _token: &Token) {}

    fn step(&mut self, _stack: &ParseStack<'g>, _action: Action) {}
}
