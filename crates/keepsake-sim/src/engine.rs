//! Experience engine.
//!
//! `ExperienceEngine` owns the section state machines, the step timeline and
//! the hecs world of decorations. It processes player commands, runs due
//! steps and systems, and produces `ExperienceSnapshot`s. Completely headless
//! (no Tauri dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use keepsake_core::commands::PlayerCommand;
use keepsake_core::enums::{DecorationLayer, Screen, Section};
use keepsake_core::events::StageCue;
use keepsake_core::state::ExperienceSnapshot;
use keepsake_core::tuning::StrikeTuning;
use keepsake_core::types::{SimTime, VisitorName};

use crate::sections::audio::{AudioBackend, AudioToggle};
use crate::sections::controller::RootController;
use crate::sections::decision::DecisionPrompt;
use crate::sections::gallery::MessageGallery;
use crate::sections::name_gate::NameGate;
use crate::sections::narrative::NarrativeReveal;
use crate::sections::reaction_game::ReactionGame;
use crate::sections::{Frame, Step};
use crate::systems;
use crate::timeline::Timeline;
use crate::world_setup;

/// Configuration for starting a new experience.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceConfig {
    /// RNG seed for determinism. Same seed = same experience.
    pub seed: u64,
    pub tuning: StrikeTuning,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: StrikeTuning::default(),
        }
    }
}

/// Every section the page hosts.
pub(crate) struct Sections {
    pub gate: NameGate,
    /// Mounted once the name is accepted.
    pub narrative: Option<NarrativeReveal>,
    pub game: ReactionGame,
    pub gallery: MessageGallery,
    pub decision: DecisionPrompt,
    pub audio: AudioToggle,
}

/// The experience engine. Owns the ECS world and all section state.
pub struct ExperienceEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    timeline: Timeline<Step>,
    cues: Vec<StageCue>,
    entity_buffer: Vec<hecs::Entity>,
    root: RootController,
    sections: Sections,
}

impl ExperienceEngine {
    /// Create an engine whose audio requests become `StageCue::Audio` cues.
    pub fn new(config: ExperienceConfig) -> Self {
        Self::with_audio(config, AudioToggle::default())
    }

    /// Create an engine that drives a custom audio backend.
    pub fn with_audio_backend(config: ExperienceConfig, backend: Box<dyn AudioBackend>) -> Self {
        Self::with_audio(config, AudioToggle::new(backend))
    }

    fn with_audio(config: ExperienceConfig, audio: AudioToggle) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        world_setup::setup_page(&mut world, &mut rng);

        Self {
            world,
            time: SimTime::default(),
            rng,
            command_queue: VecDeque::new(),
            timeline: Timeline::new(),
            cues: Vec::new(),
            entity_buffer: Vec::new(),
            root: RootController::new(),
            sections: Sections {
                gate: NameGate::new(),
                narrative: None,
                game: ReactionGame::new(config.tuning),
                gallery: MessageGallery::new(),
                decision: DecisionPrompt::new(),
                audio,
            },
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the experience by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> ExperienceSnapshot {
        self.process_commands();
        self.run_due_steps();
        self.run_systems();
        self.time.advance();

        let mut cues = std::mem::take(&mut self.cues);
        cues.extend(self.sections.audio.drain_cues());
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.root, &self.sections, cues)
    }

    /// Cancel outstanding tasks and stop the music. Nothing scheduled before
    /// teardown fires afterwards, including a strike sequence in flight.
    pub fn teardown(&mut self) {
        self.sections.decision.teardown(&mut self.timeline);
        self.timeline.clear();
        self.sections.audio.teardown();
        info!("experience engine: torn down at tick {}", self.time.tick);
    }

    /// Get the current screen.
    pub fn screen(&self) -> Screen {
        self.root.screen()
    }

    /// The accepted visitor name, if any.
    pub fn visitor_name(&self) -> Option<&VisitorName> {
        self.root.name()
    }

    /// Get the current time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of steps waiting on the timeline.
    pub fn pending_steps(&self) -> usize {
        self.timeline.len()
    }

    /// Get a read-only reference to the reaction game.
    pub fn game(&self) -> &ReactionGame {
        &self.sections.game
    }

    /// Get a read-only reference to the decision prompt.
    pub fn decision(&self) -> &DecisionPrompt {
        &self.sections.decision
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let now = self.time.tick;
        let mut frame = Frame {
            now,
            timeline: &mut self.timeline,
            cues: &mut self.cues,
        };

        match command {
            PlayerCommand::EditName { text } => self.sections.gate.edit(text),
            PlayerCommand::SubmitName => {
                if let Err(e) = self.sections.gate.submit(&mut frame) {
                    debug!("name gate: submit ignored: {e}");
                }
            }
            PlayerCommand::ToggleAudio => {
                self.sections.audio.toggle();
            }
            PlayerCommand::AudioPlaybackFailed { reason } => {
                self.sections.audio.report_failure(&reason);
            }
            story_command if self.root.screen() != Screen::Story => {
                debug!("experience engine: {story_command:?} ignored before the story starts");
            }
            PlayerCommand::Strike { intensity } => {
                self.sections.game.strike(intensity, &mut frame);
            }
            PlayerCommand::Barrage => {
                self.sections.game.barrage(&mut frame);
            }
            PlayerCommand::ResetGame => self.sections.game.reset(&mut frame),
            PlayerCommand::SectionVisible { section } => match section {
                Section::Gallery => self.sections.gallery.mark_visible(now),
                other => debug!("experience engine: {other:?} scrolled into view"),
            },
            PlayerCommand::ApproachDecline => {
                self.sections.decision.approach_decline(&mut self.rng);
            }
            PlayerCommand::Affirm => {
                self.sections
                    .decision
                    .affirm(&mut frame, &mut self.world, &mut self.rng);
            }
        }
    }

    /// Pop and dispatch every step due at the current tick, including steps
    /// scheduled with zero delay by the steps themselves.
    fn run_due_steps(&mut self) {
        let now = self.time.tick;
        while let Some((handle, step)) = self.timeline.pop_due(now) {
            if let Step::NameGate(step) = step {
                if let Some(name) = self.sections.gate.handle_step(step) {
                    self.unlock_story(name, now);
                }
                continue;
            }

            let mut frame = Frame {
                now,
                timeline: &mut self.timeline,
                cues: &mut self.cues,
            };
            match step {
                Step::Game(step) => self.sections.game.handle_step(step, &mut frame),
                Step::Confetti(step) => {
                    self.sections
                        .decision
                        .handle_step(handle, step, &mut frame, &mut self.rng)
                }
                Step::NameGate(_) => {}
            }
        }
    }

    fn unlock_story(&mut self, name: VisitorName, now: u64) {
        let narrative = NarrativeReveal::mount(&name, now);
        if self.root.accept_name(name) {
            self.sections.narrative = Some(narrative);
            world_setup::dismiss_layer(&mut self.world, DecorationLayer::OpeningBackdrop);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Start delays, drift and spin
        systems::drift::run(&mut self.world, &mut self.entity_buffer);
        // 2. Dismissed layers
        systems::cleanup::run(&mut self.world, &mut self.entity_buffer);
    }
}
