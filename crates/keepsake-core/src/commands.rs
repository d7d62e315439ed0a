//! Player commands sent from the frontend to the engine.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Section;

/// All possible visitor actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Name gate ---
    /// Replace the name draft with the current input text.
    EditName { text: String },
    /// Commit the draft. Ignored while the trimmed draft is empty.
    SubmitName,

    // --- Reaction game ---
    /// Swing at the target with the given intensity.
    Strike { intensity: u64 },
    /// Run the fixed sequence of sentinel strikes.
    Barrage,
    /// Zero the game and clear every transform.
    ResetGame,

    // --- Page ---
    /// A section scrolled into the viewport.
    SectionVisible { section: Section },

    // --- Decision prompt ---
    /// Pointer approached the decline button.
    ApproachDecline,
    /// Affirmative answer.
    Affirm,

    // --- Audio ---
    /// Flip background music.
    ToggleAudio,
    /// The webview could not start playback (autoplay policy, missing file).
    AudioPlaybackFailed { reason: String },
}
