//! Enumeration types used throughout the experience.

use serde::{Deserialize, Serialize};

/// Which top-level screen the root controller shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Name entry overlay; nothing else is mounted.
    #[default]
    NameEntry,
    /// Narrative, game, gallery and proposal, in that order.
    Story,
}

/// Page sections the frontend can report as scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Narrative,
    Game,
    Gallery,
    Proposal,
}

/// Name gate lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameGatePhase {
    /// Accepting edits.
    #[default]
    Editing,
    /// Valid name submitted; exit animation running.
    Submitted,
    /// Name handed to the root controller.
    Completed,
}

/// Visual state of the target character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorPose {
    #[default]
    Idle,
    Struck,
}

/// Reentrancy guard for the reaction game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameLock {
    /// Ready to accept a strike or a barrage.
    #[default]
    Idle,
    /// A single strike sequence is in flight.
    Running,
    /// A barrage owns the game until its last strike lands.
    BatchRunning,
}

/// Recoil tier chosen at impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitTier {
    Ultra,
    Combo,
    Mercy,
    Standard,
}

/// Animated actors on the game stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageActor {
    /// The player character holding the racket.
    Striker,
    /// The shuttlecock.
    Projectile,
    /// The character being hit.
    Target,
    /// The whole game container.
    Stage,
}

impl StageActor {
    pub const ALL: [StageActor; 4] = [
        StageActor::Striker,
        StageActor::Projectile,
        StageActor::Target,
        StageActor::Stage,
    ];

    pub fn index(self) -> usize {
        match self {
            StageActor::Striker => 0,
            StageActor::Projectile => 1,
            StageActor::Target => 2,
            StageActor::Stage => 3,
        }
    }
}

/// Kind of animation currently applied to an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionKind {
    Swing,
    ProjectileArc,
    ScreenShake,
    Recoil(HitTier),
}

/// Last requested audio state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioState {
    #[default]
    Paused,
    Playing,
}

impl AudioState {
    pub fn toggled(self) -> Self {
        match self {
            AudioState::Paused => AudioState::Playing,
            AudioState::Playing => AudioState::Paused,
        }
    }
}

/// Audio request forwarded to the webview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioAction {
    Play,
    Pause,
}

/// Group a decoration belongs to; layers are spawned and dismissed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecorationLayer {
    /// Hearts floating behind the name gate.
    OpeningBackdrop,
    /// Hearts behind the message cards.
    GalleryBackdrop,
    /// Hearts behind the proposal.
    ProposalBackdrop,
    /// Treats and bubbles that appear once the proposal is accepted.
    Celebration,
}

/// What a decoration draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Heart,
    Chocolate,
    Rose,
    RedHeart,
    Bouquet,
    Sparkles,
    SparkleHeart,
}

impl Glyph {
    /// Treat glyphs cycled through by the celebration layer.
    pub const TREATS: [Glyph; 6] = [
        Glyph::Chocolate,
        Glyph::Rose,
        Glyph::RedHeart,
        Glyph::Bouquet,
        Glyph::Sparkles,
        Glyph::SparkleHeart,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Glyph::Heart => "♥",
            Glyph::Chocolate => "🍫",
            Glyph::Rose => "🌹",
            Glyph::RedHeart => "❤️",
            Glyph::Bouquet => "💐",
            Glyph::Sparkles => "✨",
            Glyph::SparkleHeart => "💖",
        }
    }
}
