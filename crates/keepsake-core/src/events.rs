//! One-shot stage cues emitted for the frontend's animation, confetti and
//! audio layers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// An instruction for the renderer. Cues are drained into the snapshot of the
/// tick that produced them and never repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StageCue {
    /// Name gate fades out.
    NameGateExit { duration_secs: f64 },
    /// Striker swings the racket.
    Swing { duration_secs: f64 },
    /// Shuttlecock leaves the racket on its arc.
    ProjectileLaunch { duration_secs: f64 },
    /// Shuttlecock snaps back to its origin without animating.
    ProjectileReset,
    /// Target reacts to the hit.
    Recoil { tier: HitTier, duration_secs: f64 },
    /// Whole game container shakes.
    ScreenShake { duration_secs: f64 },
    /// Game transforms return to identity.
    StageReset,
    /// One confetti burst. `origin` is a fraction of the viewport.
    ConfettiBurst { particle_count: u32, origin: Vec2 },
    /// Background music request.
    Audio {
        action: AudioAction,
        track: String,
        volume: f32,
        looping: bool,
    },
}
