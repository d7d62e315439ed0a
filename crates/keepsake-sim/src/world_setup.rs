//! Decoration spawning: floating hearts behind sections and the celebration
//! layer that appears once the proposal is accepted.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use keepsake_core::components::{Decoration, Dismissed, Dormant, Drift};
use keepsake_core::constants::*;
use keepsake_core::enums::{DecorationLayer, Glyph};

/// How one group of decorations moves.
struct DriftProfile {
    glyphs: &'static [Glyph],
    /// Seconds for one bottom-to-top pass.
    period_secs: (f32, f32),
    /// Start delay; `None` scatters entities mid-flight instead.
    delay_secs: Option<(f32, f32)>,
    /// Degrees turned per pass.
    spin_per_pass: f32,
    scale: (f32, f32),
}

const OPENING_HEARTS: DriftProfile = DriftProfile {
    glyphs: &[Glyph::Heart],
    period_secs: (10.0, 20.0),
    delay_secs: Some((0.0, 5.0)),
    spin_per_pass: 0.0,
    scale: (0.5, 1.0),
};

const GALLERY_HEARTS: DriftProfile = DriftProfile {
    glyphs: &[Glyph::Heart],
    period_secs: (10.0, 20.0),
    delay_secs: Some((0.0, 5.0)),
    spin_per_pass: 360.0,
    scale: (0.5, 1.0),
};

const PROPOSAL_HEARTS: DriftProfile = DriftProfile {
    glyphs: &[Glyph::RedHeart],
    period_secs: (10.0, 25.0),
    delay_secs: None,
    spin_per_pass: 0.0,
    scale: (0.5, 1.0),
};

const CELEBRATION_TREATS: DriftProfile = DriftProfile {
    glyphs: &Glyph::TREATS,
    period_secs: (4.0, 12.0),
    delay_secs: Some((0.0, 2.0)),
    spin_per_pass: 720.0,
    scale: (1.0, 1.0),
};

const CELEBRATION_BUBBLES: DriftProfile = DriftProfile {
    glyphs: &[Glyph::SparkleHeart],
    period_secs: (3.0, 9.0),
    delay_secs: Some((0.0, 2.0)),
    spin_per_pass: 0.0,
    scale: (0.5, 1.5),
};

fn range(rng: &mut ChaCha8Rng, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

fn spawn_layer(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    layer: DecorationLayer,
    profile: &DriftProfile,
    count: usize,
) {
    let span = DECORATION_BOTTOM - DECORATION_TOP;
    for i in 0..count {
        let period = range(rng, profile.period_secs);
        let origin = Vec2::new(rng.gen_range(0.0..100.0), DECORATION_BOTTOM);
        let end_x = rng.gen_range(0.0..100.0);
        let velocity = Vec2::new((end_x - origin.x) / period, -span / period);
        let glyph = profile.glyphs[i % profile.glyphs.len()];
        let decoration = Decoration {
            layer,
            glyph,
            scale: range(rng, profile.scale),
        };

        match profile.delay_secs {
            Some(delay) => {
                let drift = Drift {
                    origin,
                    position: origin,
                    velocity,
                    rotation: 0.0,
                    spin: profile.spin_per_pass / period,
                };
                let remaining_secs = range(rng, delay);
                if remaining_secs > 0.0 {
                    world.spawn((decoration, drift, Dormant { remaining_secs }));
                } else {
                    world.spawn((decoration, drift));
                }
            }
            None => {
                let into_pass = rng.gen_range(0.0..period);
                let drift = Drift {
                    origin,
                    position: origin + velocity * into_pass,
                    velocity,
                    rotation: profile.spin_per_pass / period * into_pass,
                    spin: profile.spin_per_pass / period,
                };
                world.spawn((decoration, drift));
            }
        }
    }
}

/// Spawn every backdrop that exists from page load.
pub fn setup_page(world: &mut World, rng: &mut ChaCha8Rng) {
    spawn_layer(
        world,
        rng,
        DecorationLayer::OpeningBackdrop,
        &OPENING_HEARTS,
        OPENING_HEART_COUNT,
    );
    spawn_layer(
        world,
        rng,
        DecorationLayer::GalleryBackdrop,
        &GALLERY_HEARTS,
        GALLERY_HEART_COUNT,
    );
    spawn_layer(
        world,
        rng,
        DecorationLayer::ProposalBackdrop,
        &PROPOSAL_HEARTS,
        PROPOSAL_HEART_COUNT,
    );
}

/// Spawn the treats and glowing bubbles shown after acceptance.
pub fn spawn_celebration(world: &mut World, rng: &mut ChaCha8Rng) {
    spawn_layer(
        world,
        rng,
        DecorationLayer::Celebration,
        &CELEBRATION_TREATS,
        CELEBRATION_TREAT_COUNT,
    );
    spawn_layer(
        world,
        rng,
        DecorationLayer::Celebration,
        &CELEBRATION_BUBBLES,
        CELEBRATION_BUBBLE_COUNT,
    );
}

/// Mark every decoration of `layer` for the cleanup system.
pub fn dismiss_layer(world: &mut World, layer: DecorationLayer) {
    let doomed: Vec<Entity> = world
        .query::<&Decoration>()
        .iter()
        .filter(|(_, d)| d.layer == layer)
        .map(|(entity, _)| entity)
        .collect();
    for entity in doomed {
        let _ = world.insert_one(entity, Dismissed);
    }
}

/// Count decorations of `layer`.
pub fn layer_count(world: &World, layer: DecorationLayer) -> usize {
    world
        .query::<&Decoration>()
        .iter()
        .filter(|(_, d)| d.layer == layer)
        .count()
}
