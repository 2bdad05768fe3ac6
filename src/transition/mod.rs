//! Transition state machine
//!
//! One transition is live at a time. It has a phase, a start time, a duration
//! and a queued successor. The successor can be redirected by input without
//! touching the running phase's timing, so a held key keeps chaining the
//! same animation and a release lets it settle.

pub mod rules;

pub use rules::{Action, Direction, Input};

use crate::systems::SystemRing;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    NextSystem,
    PreviousSystem,
    ShowSystem,
    FadeIn,
    FadeOut,
    NextGame,
    PreviousGame,
}

impl Phase {
    #[cfg(test)]
    pub const ALL: [Phase; 8] = [
        Phase::Idle,
        Phase::NextSystem,
        Phase::PreviousSystem,
        Phase::ShowSystem,
        Phase::FadeIn,
        Phase::FadeOut,
        Phase::NextGame,
        Phase::PreviousGame,
    ];

    pub fn duration_ms(self) -> u64 {
        match self {
            Phase::Idle
            | Phase::NextSystem
            | Phase::PreviousSystem
            | Phase::ShowSystem
            | Phase::FadeIn
            | Phase::FadeOut => 300,
            Phase::NextGame | Phase::PreviousGame => 150,
        }
    }

    /// Successor used when `begin` is not given one explicitly
    pub fn default_next(self) -> Phase {
        match self {
            Phase::Idle => Phase::Idle,
            Phase::FadeIn | Phase::NextSystem | Phase::PreviousSystem => Phase::ShowSystem,
            Phase::ShowSystem => Phase::FadeOut,
            Phase::FadeOut | Phase::NextGame | Phase::PreviousGame => Phase::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub phase: Phase,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub next: Phase,
}

impl Transition {
    fn starting(phase: Phase, next: Option<Phase>, now_ms: u64) -> Self {
        Self {
            phase,
            start_ms: now_ms,
            duration_ms: phase.duration_ms(),
            next: next.unwrap_or_else(|| phase.default_next()),
        }
    }

    /// Elapsed fraction in [0, 1]. Reads before `start_ms` count as 0.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms) as f32;
        (elapsed / self.duration_ms.max(1) as f32).clamp(0.0, 1.0)
    }
}

/// What the scene renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub phase: Phase,
    pub progress: f32,
}

impl Frame {
    pub fn new(phase: Phase, progress: f32) -> Self {
        Self {
            phase,
            progress: progress.clamp(0.0, 1.0),
        }
    }

    /// Signed conveyor progress: negative scrolls toward the next game
    pub fn game_progress(&self) -> f32 {
        let signed = match self.phase {
            Phase::NextGame => -self.progress,
            Phase::PreviousGame => self.progress,
            _ => 0.0,
        };
        signed.clamp(-1.0, 1.0)
    }
}

/// Owns the live transition and the system cursor
pub struct TransitionMachine {
    transition: Transition,
    systems: SystemRing,
}

impl TransitionMachine {
    pub fn new(systems: SystemRing, now_ms: u64) -> Self {
        Self {
            transition: Transition::starting(Phase::Idle, None, now_ms),
            systems,
        }
    }

    #[cfg(test)]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.transition.phase
    }

    pub fn systems(&self) -> &SystemRing {
        &self.systems
    }

    pub fn begin(&mut self, phase: Phase, next: Option<Phase>, now_ms: u64) {
        if phase != self.transition.phase {
            debug!(from = ?self.transition.phase, to = ?phase, next = ?next, "begin transition");
        }
        self.transition = Transition::starting(phase, next, now_ms);
    }

    pub fn queue_next(&mut self, phase: Phase) {
        if phase != self.transition.next {
            debug!(phase = ?self.transition.phase, next = ?phase, "redirect transition");
        }
        self.transition.next = phase;
    }

    /// Advance time. Completing a system slide moves the cursor, then the
    /// queued successor starts at `now_ms`. Returns the progress of the phase
    /// that was live on entry.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let progress = self.transition.progress(now_ms);
        if progress >= 1.0 {
            match self.transition.phase {
                Phase::NextSystem => {
                    self.systems.advance();
                    info!(system = %self.systems.current().name, "system selected");
                },
                Phase::PreviousSystem => {
                    self.systems.retreat();
                    info!(system = %self.systems.current().name, "system selected");
                },
                _ => {},
            }
            let next = self.transition.next;
            self.begin(next, None, now_ms);
        }
        progress
    }

    pub fn handle(&mut self, input: Input, now_ms: u64) {
        match rules::action(self.transition.phase, input) {
            Some(Action::Begin(phase, next)) => self.begin(phase, next, now_ms),
            Some(Action::Redirect(phase)) => self.queue_next(phase),
            None => trace!(phase = ?self.transition.phase, input = ?input, "input ignored"),
        }
    }

    pub fn frame(&self, now_ms: u64) -> Frame {
        Frame::new(self.transition.phase, self.transition.progress(now_ms))
    }
}
