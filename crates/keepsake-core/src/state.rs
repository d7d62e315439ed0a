//! Experience snapshot: the complete visible state sent to the frontend each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::StageCue;
use crate::types::SimTime;

/// Complete experience state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceSnapshot {
    pub time: SimTime,
    pub screen: Screen,
    pub name_gate: NameGateView,
    /// Present once the story is mounted.
    pub narrative: Option<NarrativeView>,
    pub game: GameView,
    pub gallery: GalleryView,
    pub decision: DecisionView,
    pub audio: AudioView,
    pub decorations: Vec<DecorationView>,
    /// Cues produced during this tick.
    pub cues: Vec<StageCue>,
}

/// Name entry overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameGateView {
    pub draft: String,
    /// False while the trimmed draft is empty or after submission.
    pub can_submit: bool,
    pub phase: NameGatePhase,
}

/// Scrapbook narrative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrativeView {
    pub heading: String,
    pub caption: String,
    pub photo: String,
    /// The revealed prefix of the message.
    pub visible_text: String,
    pub revealed_chars: usize,
    pub total_chars: usize,
    pub complete: bool,
}

/// Reaction mini-game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameView {
    pub score: u64,
    pub combo: u32,
    pub message: String,
    pub pose: ActorPose,
    pub lock: GameLock,
    /// Strike and barrage buttons accept input.
    pub inputs_enabled: bool,
    pub motions: Vec<MotionView>,
}

/// An animation still running on a stage actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionView {
    pub actor: StageActor,
    pub kind: MotionKind,
    /// 0.0 at start, 1.0 when finished.
    pub progress: f64,
}

/// Message card grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryView {
    pub heading: String,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub text: String,
    pub tilt_degrees: f32,
    pub revealed: bool,
}

/// Proposal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionView {
    /// "{name}..." above the question.
    pub addressee: String,
    pub question: String,
    pub accepted: bool,
    /// Current jump of the decline button from its resting place (px).
    pub decline_offset: Vec2,
    pub confetti_active: bool,
    /// Shown after acceptance.
    pub celebration_title: Option<String>,
    pub final_image: Option<String>,
}

/// Music toggle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioView {
    /// Last requested state; not necessarily what the platform is doing.
    pub requested: AudioState,
    pub track: String,
    pub volume: f32,
}

/// One decorative sprite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecorationView {
    pub layer: DecorationLayer,
    pub glyph: String,
    /// Percent of the owning section.
    pub position: Vec2,
    pub rotation_degrees: f32,
    pub scale: f32,
    pub visible: bool,
}
