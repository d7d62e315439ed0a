//! Experience engine for Keepsake.
//!
//! Owns the section state machines, the step timeline, and the hecs world of
//! decorations; advances at a fixed tick rate and produces
//! `ExperienceSnapshot`s for the frontend.

pub mod engine;
pub mod sections;
pub mod systems;
pub mod timeline;
pub mod world_setup;

pub use engine::{ExperienceConfig, ExperienceEngine};
pub use keepsake_core as core;

#[cfg(test)]
mod tests;
