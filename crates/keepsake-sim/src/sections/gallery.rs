//! Message card grid.

use keepsake_core::constants::*;
use keepsake_core::state::{CardView, GalleryView};
use keepsake_core::types::ticks_for;

#[derive(Debug, Default)]
pub struct MessageGallery {
    /// Tick the gallery first scrolled into view.
    entered_tick: Option<u64>,
}

impl MessageGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the first appearance in the viewport. Later calls are ignored
    /// so each card animates in exactly once.
    pub fn mark_visible(&mut self, now: u64) {
        if self.entered_tick.is_none() {
            self.entered_tick = Some(now);
        }
    }

    pub fn view(&self, now: u64) -> GalleryView {
        let cards = AFFIRMATIONS
            .iter()
            .enumerate()
            .map(|(index, text)| CardView {
                text: (*text).to_string(),
                tilt_degrees: if index % 2 == 0 {
                    CARD_TILT_DEGREES
                } else {
                    -CARD_TILT_DEGREES
                },
                revealed: self.entered_tick.is_some_and(|entered| {
                    now >= entered + ticks_for(index as f64 * CARD_REVEAL_STEP_SECS)
                }),
            })
            .collect();
        GalleryView {
            heading: GALLERY_HEADING.to_string(),
            cards,
        }
    }
}
