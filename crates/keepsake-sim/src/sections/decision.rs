//! Proposal prompt: an evasive decline button and a one-way affirm.

use glam::Vec2;
use hecs::World;
use log::info;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use keepsake_core::constants::*;
use keepsake_core::events::StageCue;
use keepsake_core::state::DecisionView;
use keepsake_core::types::{secs_for, ticks_for, VisitorName};

use super::{Frame, Step};
use crate::timeline::{TaskHandle, Timeline};
use crate::world_setup;

/// A uniformly random offset inside the square `[-radius, radius)²`.
pub fn bounded_random_offset(rng: &mut impl Rng, radius: f32) -> Vec2 {
    if radius <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        rng.gen_range(-radius..radius),
        rng.gen_range(-radius..radius),
    )
}

#[derive(Debug, Clone)]
pub enum ConfettiStep {
    /// One firing of the repeating confetti task.
    Burst,
}

#[derive(Debug, Clone, Copy)]
struct ConfettiTask {
    handle: TaskHandle,
    ends_tick: u64,
}

#[derive(Debug, Default)]
pub struct DecisionPrompt {
    decline_offset: Vec2,
    accepted: bool,
    confetti: Option<ConfettiTask>,
    bursts_fired: u32,
}

impl DecisionPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn decline_offset(&self) -> Vec2 {
        self.decline_offset
    }

    pub fn confetti_active(&self) -> bool {
        self.confetti.is_some()
    }

    pub fn bursts_fired(&self) -> u32 {
        self.bursts_fired
    }

    /// Jump the decline button somewhere else. Never exhausts.
    pub fn approach_decline(&mut self, rng: &mut ChaCha8Rng) -> Vec2 {
        self.decline_offset = bounded_random_offset(rng, DECLINE_RANGE);
        self.decline_offset
    }

    /// Accept. Returns `true` only for the call that flipped the flag.
    pub fn affirm(&mut self, frame: &mut Frame<'_>, world: &mut World, rng: &mut ChaCha8Rng) -> bool {
        if self.accepted {
            return false;
        }
        self.accepted = true;
        info!("decision prompt: accepted");

        let handle = frame.after(
            ticks_for(CONFETTI_INTERVAL_SECS),
            Step::Confetti(ConfettiStep::Burst),
        );
        self.confetti = Some(ConfettiTask {
            handle,
            ends_tick: frame.now + ticks_for(CONFETTI_SECS),
        });
        world_setup::spawn_celebration(world, rng);
        true
    }

    /// Fire one confetti round, then re-arm until the task runs out of time.
    pub fn handle_step(
        &mut self,
        handle: TaskHandle,
        step: ConfettiStep,
        frame: &mut Frame<'_>,
        rng: &mut ChaCha8Rng,
    ) {
        match step {
            ConfettiStep::Burst => {
                let Some(task) = self.confetti else {
                    return;
                };
                if task.handle != handle {
                    return;
                }
                if frame.now >= task.ends_tick {
                    self.confetti = None;
                    return;
                }

                let remaining = secs_for(task.ends_tick - frame.now);
                let particle_count = (CONFETTI_MAX_PARTICLES * remaining / CONFETTI_SECS) as u32;
                for (lo, hi) in [CONFETTI_LEFT_X, CONFETTI_RIGHT_X] {
                    let origin = Vec2::new(rng.gen_range(lo..hi), rng.gen::<f32>() - 0.2);
                    frame.cue(StageCue::ConfettiBurst {
                        particle_count,
                        origin,
                    });
                }
                self.bursts_fired += 1;

                frame.timeline.schedule_as(
                    handle,
                    frame.now + ticks_for(CONFETTI_INTERVAL_SECS),
                    Step::Confetti(ConfettiStep::Burst),
                );
            }
        }
    }

    /// Cancel the confetti task so nothing fires after the prompt is gone.
    pub fn teardown(&mut self, timeline: &mut Timeline<Step>) {
        if let Some(task) = self.confetti.take() {
            timeline.cancel(task.handle);
        }
    }

    pub fn view(&self, name: Option<&VisitorName>) -> DecisionView {
        let name = name.map(VisitorName::as_str).unwrap_or_default();
        DecisionView {
            addressee: format!("{name}..."),
            question: PROPOSAL_QUESTION.to_string(),
            accepted: self.accepted,
            decline_offset: self.decline_offset,
            confetti_active: self.confetti_active(),
            celebration_title: self
                .accepted
                .then(|| format!("Happy Valentine’s Day {name} ❤️💋💐")),
            final_image: self.accepted.then(|| PROPOSAL_FINAL_IMAGE.to_string()),
        }
    }
}
