//! ECS systems that operate on the decoration world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` when
//! read-only). Section state lives in the sections, not here.

pub mod cleanup;
pub mod drift;
pub mod snapshot;
