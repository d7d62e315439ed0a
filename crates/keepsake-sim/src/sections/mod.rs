//! Page sections, each a small state machine.
//!
//! Sections never touch each other's state. The only value crossing a
//! section boundary is the visitor name, handed from the name gate to the
//! root controller by the engine.

pub mod audio;
pub mod controller;
pub mod decision;
pub mod gallery;
pub mod name_gate;
pub mod narrative;
pub mod reaction_game;

use keepsake_core::events::StageCue;

use crate::timeline::Timeline;

/// A deferred step, routed back to the section that scheduled it.
#[derive(Debug, Clone)]
pub enum Step {
    NameGate(name_gate::GateStep),
    Game(reaction_game::GameStep),
    Confetti(decision::ConfettiStep),
}

/// Per-call context handed to sections: the current tick, the timeline for
/// deferring work, and the cue outbox for this tick.
pub struct Frame<'a> {
    pub now: u64,
    pub timeline: &'a mut Timeline<Step>,
    pub cues: &'a mut Vec<StageCue>,
}

impl Frame<'_> {
    /// Schedule `step` to fire `delay_ticks` from now.
    pub fn after(&mut self, delay_ticks: u64, step: Step) -> crate::timeline::TaskHandle {
        self.timeline.schedule(self.now + delay_ticks, step)
    }

    pub fn cue(&mut self, cue: StageCue) {
        self.cues.push(cue);
    }
}
