//! Core types and definitions for the Keepsake greeting experience.
//!
//! This crate defines the vocabulary shared across all other crates:
//! commands, stage cues, snapshot views, components, tuning, and constants.
//! It has no dependency on Tauri or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod tuning;
pub mod types;
