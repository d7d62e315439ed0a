//! Tests for the experience engine: command routing, step dispatch, and the
//! decoration world.

use keepsake_core::commands::PlayerCommand;
use keepsake_core::constants::*;
use keepsake_core::enums::*;
use keepsake_core::events::StageCue;
use keepsake_core::state::ExperienceSnapshot;

use crate::engine::{ExperienceConfig, ExperienceEngine};
use crate::world_setup::layer_count;

fn run(engine: &mut ExperienceEngine, ticks: u64) -> Vec<ExperienceSnapshot> {
    (0..ticks).map(|_| engine.tick()).collect()
}

fn cues(snapshots: &[ExperienceSnapshot]) -> Vec<StageCue> {
    snapshots.iter().flat_map(|s| s.cues.iter().cloned()).collect()
}

/// Enter a name and tick past the exit animation.
fn unlocked(name: &str) -> ExperienceEngine {
    let mut engine = ExperienceEngine::new(ExperienceConfig::default());
    engine.queue_commands([
        PlayerCommand::EditName {
            text: name.to_string(),
        },
        PlayerCommand::SubmitName,
    ]);
    run(&mut engine, 61);
    assert_eq!(engine.screen(), Screen::Story);
    engine
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = ExperienceConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = ExperienceEngine::new(config.clone());
    let mut engine_b = ExperienceEngine::new(config);

    let script = [
        PlayerCommand::EditName { text: "Ada".into() },
        PlayerCommand::SubmitName,
    ];
    engine_a.queue_commands(script.clone());
    engine_b.queue_commands(script);

    for tick in 0..400 {
        if tick == 100 {
            for engine in [&mut engine_a, &mut engine_b] {
                engine.queue_commands([
                    PlayerCommand::Strike { intensity: 10_000 },
                    PlayerCommand::ApproachDecline,
                    PlayerCommand::Affirm,
                ]);
            }
        }
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = ExperienceEngine::new(ExperienceConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = ExperienceEngine::new(ExperienceConfig {
        seed: 222,
        ..Default::default()
    });

    let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
    let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
    assert_ne!(json_a, json_b, "Decoration layout should depend on the seed");
}

// ---- Name gate and narrative ----

#[test]
fn test_blank_name_never_unlocks() {
    let mut engine = ExperienceEngine::new(ExperienceConfig::default());
    engine.queue_commands([
        PlayerCommand::EditName { text: "   ".into() },
        PlayerCommand::SubmitName,
    ]);
    let snaps = run(&mut engine, 120);
    let last = snaps.last().unwrap();
    assert_eq!(last.screen, Screen::NameEntry);
    assert_eq!(last.name_gate.phase, NameGatePhase::Editing);
    assert!(!last.name_gate.can_submit);
    assert!(last.narrative.is_none());
}

#[test]
fn test_name_is_trimmed_and_revealed_incrementally() {
    let mut engine = ExperienceEngine::new(ExperienceConfig::default());
    engine.queue_commands([
        PlayerCommand::EditName {
            text: "  Ada  ".into(),
        },
        PlayerCommand::SubmitName,
    ]);

    let first = engine.tick();
    assert_eq!(first.name_gate.phase, NameGatePhase::Submitted);
    assert!(first
        .cues
        .iter()
        .any(|c| matches!(c, StageCue::NameGateExit { .. })));

    // Still on the gate until the exit animation has played.
    let snaps = run(&mut engine, 59);
    assert_eq!(snaps.last().unwrap().screen, Screen::NameEntry);

    let unlocked = engine.tick();
    assert_eq!(unlocked.screen, Screen::Story);
    assert_eq!(engine.visitor_name().map(|n| n.as_str()), Some("Ada"));

    let expected = "Hey Ada, remember how it all started? It feels like just yesterday...";
    let mut last_shown = 0;
    let mut saw_partial = false;
    for snap in run(&mut engine, 400) {
        let narrative = snap.narrative.expect("narrative mounted");
        assert!(narrative.revealed_chars >= last_shown);
        assert!(expected.starts_with(&narrative.visible_text));
        if narrative.revealed_chars > 0 && !narrative.complete {
            saw_partial = true;
        }
        last_shown = narrative.revealed_chars;
    }
    assert!(saw_partial);
    assert_eq!(last_shown, expected.chars().count());
}

#[test]
fn test_opening_backdrop_removed_after_gate() {
    let engine = ExperienceEngine::new(ExperienceConfig::default());
    assert_eq!(
        layer_count(engine.world(), DecorationLayer::OpeningBackdrop),
        OPENING_HEART_COUNT
    );

    let engine = unlocked("Ada");
    assert_eq!(
        layer_count(engine.world(), DecorationLayer::OpeningBackdrop),
        0
    );
    assert_eq!(
        layer_count(engine.world(), DecorationLayer::GalleryBackdrop),
        GALLERY_HEART_COUNT
    );
    assert_eq!(
        layer_count(engine.world(), DecorationLayer::ProposalBackdrop),
        PROPOSAL_HEART_COUNT
    );
}

#[test]
fn test_story_commands_ignored_before_name() {
    let mut engine = ExperienceEngine::new(ExperienceConfig::default());
    engine.queue_commands([
        PlayerCommand::Strike { intensity: 100 },
        PlayerCommand::Affirm,
        PlayerCommand::SectionVisible {
            section: Section::Gallery,
        },
    ]);
    let snaps = run(&mut engine, 60);
    let last = snaps.last().unwrap();
    assert_eq!(last.game.score, 0);
    assert!(!last.decision.accepted);
    assert!(last.gallery.cards.iter().all(|c| !c.revealed));
    assert_eq!(engine.pending_steps(), 0);
}

// ---- Reaction game ----

#[test]
fn test_single_strike_sequence() {
    let mut engine = unlocked("Ada");
    engine.queue_command(PlayerCommand::Strike { intensity: 100 });

    let snaps = run(&mut engine, 27);
    assert_eq!(snaps[0].game.score, 100);
    assert_eq!(snaps[0].game.lock, GameLock::Running);
    assert!(!snaps[0].game.inputs_enabled);

    let impact = snaps.last().unwrap();
    assert_eq!(impact.game.pose, ActorPose::Struck);
    assert_eq!(impact.game.message, MESSAGE_STANDARD);
    assert_eq!(impact.game.combo, 0);
    assert!(!cues(&snaps)
        .iter()
        .any(|c| matches!(c, StageCue::ScreenShake { .. })));

    let settled = run(&mut engine, 48);
    let last = settled.last().unwrap();
    assert_eq!(last.game.pose, ActorPose::Idle);
    assert_eq!(last.game.lock, GameLock::Idle);
    assert_eq!(last.game.score, 100);
}

#[test]
fn test_ultra_strike_shakes_and_combos() {
    let mut engine = unlocked("Ada");
    engine.queue_command(PlayerCommand::Strike { intensity: 10_000 });

    let snaps = run(&mut engine, 21);
    let impact = snaps.last().unwrap();
    assert_eq!(impact.game.score, 10_000);
    assert_eq!(impact.game.combo, 5);
    assert_eq!(impact.game.message, MESSAGE_ULTRA);

    let all = cues(&snaps);
    assert!(all.iter().any(|c| matches!(c, StageCue::ScreenShake { .. })));
    assert!(all.iter().any(|c| matches!(
        c,
        StageCue::ProjectileLaunch { duration_secs } if *duration_secs == PROJECTILE_FAST_SECS
    )));

    let settled = run(&mut engine, 48);
    assert_eq!(settled.last().unwrap().game.combo, 0);
}

#[test]
fn test_strike_while_running_is_rejected() {
    let mut engine = unlocked("Ada");
    engine.queue_commands([
        PlayerCommand::Strike { intensity: 100 },
        PlayerCommand::Strike { intensity: 1_000 },
    ]);
    run(&mut engine, 5);
    engine.queue_command(PlayerCommand::Barrage);
    let snaps = run(&mut engine, 100);
    assert_eq!(snaps.last().unwrap().game.score, 100);
    assert_eq!(engine.game().strikes_started(), 1);
}

#[test]
fn test_barrage_runs_twenty_sentinel_strikes() {
    let mut engine = unlocked("Ada");
    engine.queue_command(PlayerCommand::Barrage);

    let snaps = run(&mut engine, 27);
    let first_hit = snaps.last().unwrap();
    assert_eq!(first_hit.game.lock, GameLock::BatchRunning);
    // 9999 sits in the combo band under the default thresholds.
    assert_eq!(first_hit.game.message, MESSAGE_COMBO);

    engine.queue_command(PlayerCommand::Strike { intensity: 100 });
    let snaps = run(&mut engine, 600);
    let last = snaps.last().unwrap();
    assert_eq!(last.game.score, 2_000);
    assert_eq!(last.game.message, MESSAGE_BARRAGE_DONE);
    assert_eq!(last.game.lock, GameLock::Idle);
    assert_eq!(last.game.pose, ActorPose::Idle);
    assert_eq!(engine.game().strikes_started(), 20);
}

#[test]
fn test_reset_mid_sequence_discards_pending_steps() {
    let mut engine = unlocked("Ada");
    engine.queue_command(PlayerCommand::Strike { intensity: 10_000 });
    run(&mut engine, 10);

    engine.queue_command(PlayerCommand::ResetGame);
    let snaps = run(&mut engine, 120);
    let after_reset = &snaps[0];
    assert_eq!(after_reset.game.score, 0);
    assert_eq!(after_reset.game.lock, GameLock::Idle);
    assert!(after_reset.game.motions.is_empty());
    assert!(after_reset
        .cues
        .iter()
        .any(|c| matches!(c, StageCue::StageReset)));

    // The impact that was already scheduled must not land.
    assert!(!cues(&snaps)
        .iter()
        .any(|c| matches!(c, StageCue::Recoil { .. } | StageCue::ScreenShake { .. })));
    let last = snaps.last().unwrap();
    assert_eq!(last.game.combo, 0);
    assert!(last.game.message.is_empty());
    assert_eq!(last.game.pose, ActorPose::Idle);
}

#[test]
fn test_reset_is_idempotent() {
    let mut engine = unlocked("Ada");
    engine.queue_commands([PlayerCommand::ResetGame, PlayerCommand::ResetGame]);
    let snap = engine.tick();
    assert_eq!(snap.game.score, 0);
    assert_eq!(snap.game.lock, GameLock::Idle);
    assert!(snap.game.inputs_enabled);
}

// ---- Gallery ----

#[test]
fn test_gallery_cards_reveal_in_order() {
    let mut engine = unlocked("Ada");
    engine.queue_command(PlayerCommand::SectionVisible {
        section: Section::Gallery,
    });
    let snaps = run(&mut engine, 40);

    let first = &snaps[0].gallery.cards;
    assert_eq!(first.len(), AFFIRMATIONS.len());
    assert!(first[0].revealed);
    assert!(!first[5].revealed);
    assert_eq!(first[0].tilt_degrees, CARD_TILT_DEGREES);
    assert_eq!(first[1].tilt_degrees, -CARD_TILT_DEGREES);

    assert!(snaps.last().unwrap().gallery.cards.iter().all(|c| c.revealed));
}

// ---- Decision ----

#[test]
fn test_decline_jumps_without_accepting() {
    let mut engine = unlocked("Ada");
    let mut offsets = Vec::new();
    for _ in 0..20 {
        engine.queue_command(PlayerCommand::ApproachDecline);
        let snap = engine.tick();
        assert!(!snap.decision.accepted);
        assert!(snap.decision.decline_offset.x.abs() <= DECLINE_RANGE);
        assert!(snap.decision.decline_offset.y.abs() <= DECLINE_RANGE);
        offsets.push(snap.decision.decline_offset);
    }
    offsets.dedup();
    assert!(offsets.len() > 1);
}

#[test]
fn test_affirm_twice_starts_one_celebration() {
    let mut engine = unlocked("Ada");
    engine.queue_commands([PlayerCommand::Affirm, PlayerCommand::Affirm]);
    let snap = engine.tick();
    assert!(snap.decision.accepted);
    assert!(snap.decision.confetti_active);
    assert_eq!(
        snap.decision.celebration_title.as_deref(),
        Some("Happy Valentine’s Day Ada ❤️💋💐")
    );
    assert_eq!(
        layer_count(engine.world(), DecorationLayer::Celebration),
        CELEBRATION_TREAT_COUNT + CELEBRATION_BUBBLE_COUNT
    );

    let snaps = run(&mut engine, 400);
    let bursts = cues(&snaps)
        .into_iter()
        .filter(|c| matches!(c, StageCue::ConfettiBurst { .. }))
        .count();
    assert_eq!(bursts, 38);
    assert!(!snaps.last().unwrap().decision.confetti_active);
    assert!(snaps.last().unwrap().decision.accepted);
}

#[test]
fn test_teardown_stops_confetti_and_audio() {
    let mut engine = unlocked("Ada");
    engine.queue_commands([PlayerCommand::ToggleAudio, PlayerCommand::Affirm]);
    run(&mut engine, 20);

    engine.teardown();
    assert_eq!(engine.pending_steps(), 0);

    let snaps = run(&mut engine, 400);
    let after = cues(&snaps);
    assert!(!after
        .iter()
        .any(|c| matches!(c, StageCue::ConfettiBurst { .. })));
    // The pause cue produced by teardown goes out with the next snapshot.
    assert!(matches!(
        after.first(),
        Some(StageCue::Audio {
            action: AudioAction::Pause,
            ..
        })
    ));
    assert_eq!(snaps[0].audio.requested, AudioState::Paused);
}

// ---- Audio ----

#[test]
fn test_audio_toggle_allowed_before_name() {
    let mut engine = ExperienceEngine::new(ExperienceConfig::default());
    engine.queue_command(PlayerCommand::ToggleAudio);
    let snap = engine.tick();
    assert_eq!(snap.audio.requested, AudioState::Playing);
    assert_eq!(snap.audio.track, AUDIO_TRACK);
    assert!(snap.cues.iter().any(|c| matches!(
        c,
        StageCue::Audio {
            action: AudioAction::Play,
            looping: true,
            ..
        }
    )));

    engine.queue_command(PlayerCommand::AudioPlaybackFailed {
        reason: "NotAllowedError".into(),
    });
    assert_eq!(engine.tick().audio.requested, AudioState::Playing);
}

// ---- Decorations ----

#[test]
fn test_dormant_decorations_become_visible() {
    let mut engine = ExperienceEngine::new(ExperienceConfig::default());
    let first = engine.tick();
    assert_eq!(
        first.decorations.len(),
        OPENING_HEART_COUNT + GALLERY_HEART_COUNT + PROPOSAL_HEART_COUNT
    );
    // Every start delay is under five seconds.
    let later = run(&mut engine, 301);
    assert!(later.last().unwrap().decorations.iter().all(|d| d.visible));
}
