//! Background music toggle.
//!
//! The toggle tracks the last *requested* state. Playback goes through an
//! [`AudioBackend`]; a failed start is logged and swallowed, and the
//! requested state still flips.

use log::{debug, warn};
use thiserror::Error;

use keepsake_core::constants::{AUDIO_TRACK, AUDIO_VOLUME};
use keepsake_core::enums::{AudioAction, AudioState};
use keepsake_core::events::StageCue;
use keepsake_core::state::AudioView;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("playback blocked by the platform: {0}")]
    Blocked(String),
    #[error("audio resource unavailable: {0}")]
    Unavailable(String),
}

/// The single looping track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSpec {
    pub asset: String,
    pub volume: f32,
    pub looping: bool,
}

impl Default for TrackSpec {
    fn default() -> Self {
        Self {
            asset: AUDIO_TRACK.to_string(),
            volume: AUDIO_VOLUME,
            looping: true,
        }
    }
}

/// Where play/pause requests go.
pub trait AudioBackend: Send {
    fn play(&mut self, track: &TrackSpec) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    /// Cues produced since the last call, for backends that delegate to the
    /// frontend.
    fn drain_cues(&mut self) -> Vec<StageCue> {
        Vec::new()
    }
}

/// Forwards requests to the webview as `StageCue::Audio`. Always succeeds
/// here; the webview reports real failures back as a command.
#[derive(Debug, Default)]
pub struct CueBackend {
    outbox: Vec<StageCue>,
}

impl CueBackend {
    fn push(&mut self, action: AudioAction, track: &TrackSpec) {
        self.outbox.push(StageCue::Audio {
            action,
            track: track.asset.clone(),
            volume: track.volume,
            looping: track.looping,
        });
    }
}

impl AudioBackend for CueBackend {
    fn play(&mut self, track: &TrackSpec) -> Result<(), PlaybackError> {
        self.push(AudioAction::Play, track);
        Ok(())
    }

    fn pause(&mut self) {
        self.push(AudioAction::Pause, &TrackSpec::default());
    }

    fn drain_cues(&mut self) -> Vec<StageCue> {
        std::mem::take(&mut self.outbox)
    }
}

pub struct AudioToggle {
    requested: AudioState,
    track: TrackSpec,
    backend: Box<dyn AudioBackend>,
}

impl Default for AudioToggle {
    fn default() -> Self {
        Self::new(Box::new(CueBackend::default()))
    }
}

impl AudioToggle {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            requested: AudioState::Paused,
            track: TrackSpec::default(),
            backend,
        }
    }

    pub fn requested(&self) -> AudioState {
        self.requested
    }

    /// Flip the requested state and forward it to the backend.
    pub fn toggle(&mut self) -> AudioState {
        match self.requested {
            AudioState::Playing => self.backend.pause(),
            AudioState::Paused => {
                if let Err(e) = self.backend.play(&self.track) {
                    warn!("audio play failed: {e}");
                }
            }
        }
        self.requested = self.requested.toggled();
        debug!("audio: requested {:?}", self.requested);
        self.requested
    }

    /// Failure reported by the frontend after the fact. Logged only.
    pub fn report_failure(&self, reason: &str) {
        warn!("audio play failed: {reason}");
    }

    /// Stop playback when the experience shuts down.
    pub fn teardown(&mut self) {
        if self.requested == AudioState::Playing {
            self.backend.pause();
            self.requested = AudioState::Paused;
        }
    }

    pub fn drain_cues(&mut self) -> Vec<StageCue> {
        self.backend.drain_cues()
    }

    pub fn view(&self) -> AudioView {
        AudioView {
            requested: self.requested,
            track: self.track.asset.clone(),
            volume: self.track.volume,
        }
    }
}
