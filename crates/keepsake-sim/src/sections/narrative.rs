//! Scrapbook narrative: a photo and a typewriter reveal of a personal line.
//!
//! Progress is a pure function of ticks since mount, so the reveal needs no
//! scheduled steps and cannot be restarted or skipped.

use keepsake_core::constants::*;
use keepsake_core::state::NarrativeView;
use keepsake_core::types::{ticks_for, VisitorName};

/// The revealed message for `name`.
pub fn narrative_text(name: &VisitorName) -> String {
    format!("Hey {name}, remember how it all started? It feels like just yesterday...")
}

#[derive(Debug, Clone)]
pub struct NarrativeReveal {
    text: String,
    total_chars: usize,
    mounted_tick: u64,
}

impl NarrativeReveal {
    pub fn mount(name: &VisitorName, now: u64) -> Self {
        let text = narrative_text(name);
        let total_chars = text.chars().count();
        Self {
            text,
            total_chars,
            mounted_tick: now,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Characters visible at `now`. The first appears after the mount delay,
    /// then one more every stagger interval.
    pub fn revealed_chars(&self, now: u64) -> usize {
        let start = self.mounted_tick + ticks_for(NARRATIVE_DELAY_SECS);
        if now < start {
            return 0;
        }
        let stagger = ticks_for(NARRATIVE_STAGGER_SECS).max(1);
        let shown = (now - start) / stagger + 1;
        usize::try_from(shown)
            .unwrap_or(usize::MAX)
            .min(self.total_chars)
    }

    pub fn is_complete(&self, now: u64) -> bool {
        self.revealed_chars(now) == self.total_chars
    }

    pub fn view(&self, now: u64) -> NarrativeView {
        let revealed_chars = self.revealed_chars(now);
        NarrativeView {
            heading: NARRATIVE_HEADING.to_string(),
            caption: NARRATIVE_CAPTION.to_string(),
            photo: NARRATIVE_PHOTO.to_string(),
            visible_text: self.text.chars().take(revealed_chars).collect(),
            revealed_chars,
            total_chars: self.total_chars,
            complete: revealed_chars == self.total_chars,
        }
    }
}
