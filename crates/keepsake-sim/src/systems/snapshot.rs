//! Snapshot system: reads the sections and the decoration world and builds a
//! complete `ExperienceSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use keepsake_core::components::{Decoration, Dormant, Drift};
use keepsake_core::events::StageCue;
use keepsake_core::state::{DecorationView, ExperienceSnapshot};
use keepsake_core::types::SimTime;

use crate::engine::Sections;
use crate::sections::controller::RootController;

/// Build a complete snapshot for the current tick.
pub(crate) fn build_snapshot(
    world: &World,
    time: &SimTime,
    root: &RootController,
    sections: &Sections,
    cues: Vec<StageCue>,
) -> ExperienceSnapshot {
    let now = time.tick;

    ExperienceSnapshot {
        time: *time,
        screen: root.screen(),
        name_gate: sections.gate.view(),
        narrative: sections.narrative.as_ref().map(|n| n.view(now)),
        game: sections.game.view(now),
        gallery: sections.gallery.view(now),
        decision: sections.decision.view(root.name()),
        audio: sections.audio.view(),
        decorations: build_decorations(world),
        cues,
    }
}

/// One view per decoration; dormant ones are reported but hidden.
fn build_decorations(world: &World) -> Vec<DecorationView> {
    world
        .query::<(&Decoration, &Drift, Option<&Dormant>)>()
        .iter()
        .map(|(_, (decoration, drift, dormant))| DecorationView {
            layer: decoration.layer,
            glyph: decoration.glyph.as_str().to_string(),
            position: drift.position,
            rotation_degrees: drift.rotation,
            scale: decoration.scale,
            visible: dormant.is_none(),
        })
        .collect()
}
