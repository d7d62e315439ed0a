//! Drift system: wakes dormant decorations and floats the rest upward.

use hecs::{Entity, World};

use keepsake_core::components::{Dormant, Drift};
use keepsake_core::constants::{DECORATION_TOP, DT};

/// Count down start delays, then integrate position and rotation.
/// Decorations that leave the top of their section start the pass over.
pub fn run(world: &mut World, wake_buffer: &mut Vec<Entity>) {
    let dt = DT as f32;
    wake_buffer.clear();

    for (entity, (drift, dormant)) in world.query_mut::<(&mut Drift, Option<&mut Dormant>)>() {
        if let Some(dormant) = dormant {
            dormant.remaining_secs -= dt;
            if dormant.remaining_secs <= 0.0 {
                wake_buffer.push(entity);
            }
            continue;
        }

        drift.position += drift.velocity * dt;
        drift.rotation = (drift.rotation + drift.spin * dt).rem_euclid(360.0);
        if drift.position.y < DECORATION_TOP {
            drift.position = drift.origin;
            drift.rotation = 0.0;
        }
    }

    for entity in wake_buffer.drain(..) {
        let _ = world.remove_one::<Dormant>(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use keepsake_core::components::Decoration;
    use keepsake_core::constants::DECORATION_BOTTOM;
    use keepsake_core::enums::{DecorationLayer, Glyph};

    fn decoration() -> Decoration {
        Decoration {
            layer: DecorationLayer::OpeningBackdrop,
            glyph: Glyph::Heart,
            scale: 1.0,
        }
    }

    fn drift(velocity: Vec2) -> Drift {
        let origin = Vec2::new(50.0, DECORATION_BOTTOM);
        Drift {
            origin,
            position: origin,
            velocity,
            rotation: 0.0,
            spin: 60.0,
        }
    }

    #[test]
    fn test_dormant_waits_then_moves() {
        let mut world = World::new();
        let mut buffer = Vec::new();
        let e = world.spawn((
            decoration(),
            drift(Vec2::new(0.0, -12.0)),
            Dormant { remaining_secs: 0.45 },
        ));

        let mut ticks = 0;
        while world.get::<&Dormant>(e).is_ok() {
            run(&mut world, &mut buffer);
            ticks += 1;
            assert!(ticks <= 30, "still dormant after {ticks} ticks");
        }
        assert!(ticks >= 26);
        let y = world.get::<&Drift>(e).unwrap().position.y;
        assert_eq!(y, DECORATION_BOTTOM);

        run(&mut world, &mut buffer);
        let d = *world.get::<&Drift>(e).unwrap();
        assert!(d.position.y < DECORATION_BOTTOM);
        assert!(d.rotation > 0.0);
    }

    #[test]
    fn test_leaving_the_top_restarts_the_pass() {
        let mut world = World::new();
        let mut buffer = Vec::new();
        // 120 percent per second crosses the whole span in one second.
        let e = world.spawn((decoration(), drift(Vec2::new(0.0, -120.0))));

        let mut restarted = false;
        for _ in 0..80 {
            run(&mut world, &mut buffer);
            let d = *world.get::<&Drift>(e).unwrap();
            assert!(d.position.y >= DECORATION_TOP);
            if d.position.y == DECORATION_BOTTOM {
                restarted = true;
                assert_eq!(d.rotation, 0.0);
            }
        }
        assert!(restarted);
    }
}
