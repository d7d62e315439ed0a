//! ECS components for decoration entities.
//!
//! Components are plain data structs with no methods.
//! Behaviour lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{DecorationLayer, Glyph};

/// A purely decorative sprite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Decoration {
    pub layer: DecorationLayer,
    pub glyph: Glyph,
    pub scale: f32,
}

/// Looping upward drift. Positions are percent of the owning section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drift {
    /// Where each loop starts over.
    pub origin: Vec2,
    pub position: Vec2,
    /// Percent per second.
    pub velocity: Vec2,
    /// Current rotation in degrees.
    pub rotation: f32,
    /// Degrees per second.
    pub spin: f32,
}

/// Not yet started; the drift waits until the delay runs out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dormant {
    pub remaining_secs: f32,
}

/// Marked for removal by the cleanup system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dismissed;
