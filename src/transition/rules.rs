//! Input rules: what a key press or release does in each phase.

use super::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Press(Direction),
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Restart the clock on a new phase, optionally overriding its successor
    Begin(Phase, Option<Phase>),
    /// Change where the running phase leads once it completes
    Redirect(Phase),
}

use Direction::{Down, Left, Right, Up};
use Input::{Press, Release};
use Phase::{FadeIn, Idle, NextGame, NextSystem, PreviousGame, PreviousSystem, ShowSystem};

/// (phase, input) -> action. Pairs not listed are ignored.
pub const RULES: &[(Phase, Input, Action)] = &[
    // Systems: down walks forward, up walks backward
    (Idle, Press(Down), Action::Begin(FadeIn, Some(NextSystem))),
    (ShowSystem, Press(Down), Action::Begin(NextSystem, None)),
    (NextSystem, Press(Down), Action::Redirect(NextSystem)),
    (PreviousSystem, Press(Down), Action::Redirect(NextSystem)),
    (Idle, Press(Up), Action::Begin(FadeIn, Some(PreviousSystem))),
    (ShowSystem, Press(Up), Action::Begin(PreviousSystem, None)),
    (NextSystem, Press(Up), Action::Redirect(PreviousSystem)),
    (PreviousSystem, Press(Up), Action::Redirect(PreviousSystem)),
    // Games: right walks forward, left walks backward
    (Idle, Press(Right), Action::Begin(NextGame, None)),
    (NextGame, Press(Right), Action::Redirect(NextGame)),
    (PreviousGame, Press(Right), Action::Redirect(NextGame)),
    (Idle, Press(Left), Action::Begin(PreviousGame, None)),
    (NextGame, Press(Left), Action::Redirect(PreviousGame)),
    (PreviousGame, Press(Left), Action::Redirect(PreviousGame)),
    // Releasing settles on the resting phase
    (NextSystem, Release, Action::Redirect(ShowSystem)),
    (PreviousSystem, Release, Action::Redirect(ShowSystem)),
    (NextGame, Release, Action::Redirect(Idle)),
    (PreviousGame, Release, Action::Redirect(Idle)),
];

pub fn action(phase: Phase, input: Input) -> Option<Action> {
    RULES
        .iter()
        .find(|(p, i, _)| *p == phase && *i == input)
        .map(|&(_, _, action)| action)
}
