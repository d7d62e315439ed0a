//! Reaction mini-game: swing, shuttlecock flight, tiered recoil.
//!
//! A strike is a chain of deferred steps:
//!
//! 1. score the intensity and start the swing
//! 2. swing done: launch the shuttlecock
//! 3. impact at 85% of the flight: strike the target, pick the recoil tier,
//!    snap the shuttlecock back to its origin
//! 4. settle (single strikes) or pause and strike again (barrage)
//!
//! `GameLock` admits one sequence at a time; anything arriving while a
//! sequence runs is rejected, never queued. Every step carries the
//! generation it was scheduled under and `reset` advances the generation,
//! so steps already on the timeline become no-ops.

use log::{debug, info};

use keepsake_core::constants::*;
use keepsake_core::enums::*;
use keepsake_core::events::StageCue;
use keepsake_core::state::{GameView, MotionView};
use keepsake_core::tuning::StrikeTuning;
use keepsake_core::types::ticks_for;

use super::{Frame, Step};
use crate::timeline::{Generation, GenerationCounter};

#[derive(Debug, Clone)]
pub enum GameStep {
    SwingDone {
        generation: Generation,
        intensity: u64,
        in_batch: bool,
    },
    Impact {
        generation: Generation,
        intensity: u64,
        in_batch: bool,
    },
    Settle {
        generation: Generation,
    },
    BatchPause {
        generation: Generation,
    },
}

impl GameStep {
    fn generation(&self) -> Generation {
        match self {
            GameStep::SwingDone { generation, .. }
            | GameStep::Impact { generation, .. }
            | GameStep::Settle { generation }
            | GameStep::BatchPause { generation } => *generation,
        }
    }
}

/// Whether a strike or barrage request was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeOutcome {
    Started,
    Rejected,
}

#[derive(Debug, Clone, Copy)]
struct ActiveMotion {
    kind: MotionKind,
    started_tick: u64,
    ends_tick: u64,
}

/// Running animation per stage actor. An empty slot is the identity transform.
#[derive(Debug, Clone, Default)]
struct Motions {
    slots: [Option<ActiveMotion>; 4],
}

impl Motions {
    fn start(&mut self, actor: StageActor, kind: MotionKind, now: u64, secs: f64) {
        self.slots[actor.index()] = Some(ActiveMotion {
            kind,
            started_tick: now,
            ends_tick: now + ticks_for(secs),
        });
    }

    fn clear(&mut self, actor: StageActor) {
        self.slots[actor.index()] = None;
    }

    fn clear_all(&mut self) {
        self.slots = [None; 4];
    }

    fn views(&self, now: u64) -> Vec<MotionView> {
        StageActor::ALL
            .iter()
            .filter_map(|&actor| {
                let motion = self.slots[actor.index()]?;
                if now >= motion.ends_tick {
                    return None;
                }
                let span = (motion.ends_tick - motion.started_tick).max(1) as f64;
                Some(MotionView {
                    actor,
                    kind: motion.kind,
                    progress: now.saturating_sub(motion.started_tick) as f64 / span,
                })
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct ReactionGame {
    tuning: StrikeTuning,
    score: u64,
    combo: u32,
    message: String,
    pose: ActorPose,
    lock: GameLock,
    generation: GenerationCounter,
    /// Strikes begun in the running barrage.
    batch_strikes: u32,
    /// Strikes begun since construction; never reset.
    strikes_started: u64,
    motions: Motions,
}

impl ReactionGame {
    pub fn new(tuning: StrikeTuning) -> Self {
        Self {
            tuning,
            score: 0,
            combo: 0,
            message: String::new(),
            pose: ActorPose::Idle,
            lock: GameLock::Idle,
            generation: GenerationCounter::default(),
            batch_strikes: 0,
            strikes_started: 0,
            motions: Motions::default(),
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn pose(&self) -> ActorPose {
        self.pose
    }

    pub fn lock(&self) -> GameLock {
        self.lock
    }

    pub fn strikes_started(&self) -> u64 {
        self.strikes_started
    }

    pub fn tuning(&self) -> &StrikeTuning {
        &self.tuning
    }

    /// Start a single strike if nothing else is running.
    pub fn strike(&mut self, intensity: u64, frame: &mut Frame<'_>) -> StrikeOutcome {
        if self.lock != GameLock::Idle {
            debug!("reaction game: strike({intensity}) rejected, lock is {:?}", self.lock);
            return StrikeOutcome::Rejected;
        }
        self.lock = GameLock::Running;
        self.begin_strike(intensity, false, frame);
        StrikeOutcome::Started
    }

    /// Start a barrage of sentinel strikes if nothing else is running.
    pub fn barrage(&mut self, frame: &mut Frame<'_>) -> StrikeOutcome {
        if self.lock != GameLock::Idle {
            debug!("reaction game: barrage rejected, lock is {:?}", self.lock);
            return StrikeOutcome::Rejected;
        }
        info!(
            "reaction game: barrage of {} strikes",
            self.tuning.batch_strikes
        );
        self.lock = GameLock::BatchRunning;
        self.batch_strikes = 0;
        if self.tuning.batch_strikes == 0 {
            self.finish_barrage();
        } else {
            self.begin_strike(self.tuning.sentinel, true, frame);
        }
        StrikeOutcome::Started
    }

    /// Zero everything and orphan every in-flight step.
    pub fn reset(&mut self, frame: &mut Frame<'_>) {
        self.generation.advance();
        self.score = 0;
        self.combo = 0;
        self.message.clear();
        self.pose = ActorPose::Idle;
        self.lock = GameLock::Idle;
        self.batch_strikes = 0;
        self.motions.clear_all();
        frame.cue(StageCue::StageReset);
    }

    pub fn handle_step(&mut self, step: GameStep, frame: &mut Frame<'_>) {
        if !self.generation.is_current(step.generation()) {
            debug!("reaction game: dropping stale {step:?}");
            return;
        }
        match step {
            GameStep::SwingDone {
                intensity,
                in_batch,
                ..
            } => self.launch(intensity, in_batch, frame),
            GameStep::Impact {
                intensity,
                in_batch,
                ..
            } => self.impact(intensity, in_batch, frame),
            GameStep::Settle { .. } => self.settle(),
            GameStep::BatchPause { .. } => self.next_in_batch(frame),
        }
    }

    pub fn view(&self, now: u64) -> GameView {
        GameView {
            score: self.score,
            combo: self.combo,
            message: self.message.clone(),
            pose: self.pose,
            lock: self.lock,
            inputs_enabled: self.lock == GameLock::Idle,
            motions: self.motions.views(now),
        }
    }

    fn begin_strike(&mut self, intensity: u64, in_batch: bool, frame: &mut Frame<'_>) {
        self.strikes_started += 1;
        if in_batch {
            self.batch_strikes += 1;
        }
        self.score = self
            .score
            .saturating_add(self.tuning.contribution(intensity));

        self.motions
            .start(StageActor::Striker, MotionKind::Swing, frame.now, SWING_SECS);
        frame.cue(StageCue::Swing {
            duration_secs: SWING_SECS,
        });
        let generation = self.generation.current();
        frame.after(
            ticks_for(SWING_SECS),
            Step::Game(GameStep::SwingDone {
                generation,
                intensity,
                in_batch,
            }),
        );
    }

    fn launch(&mut self, intensity: u64, in_batch: bool, frame: &mut Frame<'_>) {
        let flight = self.tuning.projectile_secs(intensity);
        self.motions.start(
            StageActor::Projectile,
            MotionKind::ProjectileArc,
            frame.now,
            flight,
        );
        frame.cue(StageCue::ProjectileLaunch {
            duration_secs: flight,
        });
        let generation = self.generation.current();
        frame.after(
            ticks_for(flight * IMPACT_FRACTION),
            Step::Game(GameStep::Impact {
                generation,
                intensity,
                in_batch,
            }),
        );
    }

    fn impact(&mut self, intensity: u64, in_batch: bool, frame: &mut Frame<'_>) {
        self.pose = ActorPose::Struck;

        let tier = self.tuning.classify(intensity);
        if tier == HitTier::Ultra {
            self.motions.start(
                StageActor::Stage,
                MotionKind::ScreenShake,
                frame.now,
                SCREEN_SHAKE_SECS,
            );
            frame.cue(StageCue::ScreenShake {
                duration_secs: SCREEN_SHAKE_SECS,
            });
            self.combo += self.tuning.ultra_combo_step;
        }
        self.motions.start(
            StageActor::Target,
            MotionKind::Recoil(tier),
            frame.now,
            tier.recoil_secs(),
        );
        frame.cue(StageCue::Recoil {
            tier,
            duration_secs: tier.recoil_secs(),
        });
        self.message = tier.message().to_string();

        self.motions.clear(StageActor::Projectile);
        frame.cue(StageCue::ProjectileReset);

        let generation = self.generation.current();
        if in_batch {
            frame.after(
                ticks_for(BATCH_PAUSE_SECS),
                Step::Game(GameStep::BatchPause { generation }),
            );
        } else {
            frame.after(
                ticks_for(SETTLE_SECS),
                Step::Game(GameStep::Settle { generation }),
            );
        }
    }

    fn settle(&mut self) {
        self.pose = ActorPose::Idle;
        self.combo = 0;
        self.lock = GameLock::Idle;
    }

    fn next_in_batch(&mut self, frame: &mut Frame<'_>) {
        if self.batch_strikes < self.tuning.batch_strikes {
            self.begin_strike(self.tuning.sentinel, true, frame);
        } else {
            self.finish_barrage();
        }
    }

    fn finish_barrage(&mut self) {
        self.message = MESSAGE_BARRAGE_DONE.to_string();
        self.pose = ActorPose::Idle;
        self.lock = GameLock::Idle;
        self.batch_strikes = 0;
    }
}
