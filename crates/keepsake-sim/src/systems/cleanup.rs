//! Cleanup system: removes dismissed decorations.

use hecs::{Entity, World};

use keepsake_core::components::Dismissed;

/// Despawn everything marked `Dismissed`.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, _) in world.query_mut::<&Dismissed>() {
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
