//! Timing, tuning, and copy constants for the experience.
//!
//! Durations are in seconds and converted to ticks with
//! [`ticks_for`](crate::types::ticks_for).

/// Engine tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Name gate ---

/// Exit animation length between a valid submit and handing the name over.
pub const NAME_EXIT_SECS: f64 = 1.0;

pub const OPENING_HEADING: &str = "Before we start our story...";
pub const OPENING_PROMPT: &str = "Excuse me miss, may I know your name?";
pub const NAME_PLACEHOLDER: &str = "Your name...";
pub const NAME_SUBMIT_LABEL: &str = "Start Our Story";

// --- Narrative ---

/// Delay after mount before the first character appears.
pub const NARRATIVE_DELAY_SECS: f64 = 0.5;

/// Gap between consecutive revealed characters.
pub const NARRATIVE_STAGGER_SECS: f64 = 0.05;

pub const NARRATIVE_HEADING: &str = "Chapter One";
pub const NARRATIVE_CAPTION: &str = "Our Beginning 💕";
pub const NARRATIVE_PHOTO: &str = "couple_selfie.jpg";

// --- Reaction game ---

/// Reserved intensity that always scores a flat amount.
pub const SENTINEL_INTENSITY: u64 = 9999;

/// Score awarded for a sentinel strike.
pub const SENTINEL_SCORE: u64 = 100;

/// Intensity at or above which a strike is an ultra smash.
pub const ULTRA_THRESHOLD: u64 = 10_000;

/// Intensity at or above which (below ultra) a strike is a combo.
pub const COMBO_THRESHOLD: u64 = 1_000;

/// Combo increment applied by an ultra smash.
pub const ULTRA_COMBO_STEP: u32 = 5;

/// Number of sentinel strikes in a barrage.
pub const BATCH_STRIKES: u32 = 20;

/// Racket swing length.
pub const SWING_SECS: f64 = 0.12;

/// Projectile flight for ordinary strikes.
pub const PROJECTILE_SECS: f64 = 0.35;

/// Projectile flight for ultra strikes.
pub const PROJECTILE_FAST_SECS: f64 = 0.22;

/// Fraction of the projectile flight after which the target is struck.
pub const IMPACT_FRACTION: f64 = 0.85;

/// Time the target stays struck before a single strike settles.
pub const SETTLE_SECS: f64 = 0.8;

/// Pause between consecutive barrage strikes.
pub const BATCH_PAUSE_SECS: f64 = 0.04;

pub const SCREEN_SHAKE_SECS: f64 = 0.25;
pub const RECOIL_ULTRA_SECS: f64 = 0.5;
pub const RECOIL_COMBO_SECS: f64 = 0.5;
pub const RECOIL_MERCY_SECS: f64 = 0.15;
pub const RECOIL_STANDARD_SECS: f64 = 0.4;

pub const MESSAGE_ULTRA: &str = "ULTRA SMASH! 🔥";
pub const MESSAGE_COMBO: &str = "DIZZY COMBO! 💫";
pub const MESSAGE_MERCY: &str = "MERCY??? 😱";
pub const MESSAGE_STANDARD: &str = "He deserved that. ✨";
pub const MESSAGE_BARRAGE_DONE: &str = "He still loves you though! ❤️";

pub const GAME_SCORE_LABEL: &str = "MADNESS SCORE";
pub const GAME_TAUNT: &str =
    "How many times did RAM make you mad? Now beat the shi out of him 😤🏸";
pub const GAME_TARGET_LABEL: &str = "RAM";
pub const GAME_RESET_LABEL: &str = "Okay okay I'm sorry 😭";

/// Strike buttons shown under the stage: (intensity, label).
pub const STRIKE_BUTTONS: [(u64, &str); 3] = [
    (100, "SLIGHT MAD"),
    (1_000, "ANNOYED"),
    (10_000, "VERY MAD!"),
];
pub const BARRAGE_BUTTON_LABEL: &str = "EXPLODE!! 💥";

// --- Gallery ---

pub const GALLERY_HEADING: &str = "Things I Love About You 💗";

pub const AFFIRMATIONS: [&str; 6] = [
    "Your smile lights up my entire world 🌍",
    "How you have my back no matter what",
    "How you always care about me",
    "How you handle me, even when I’m being mean, dumb, or rage-baiting",
    "The way your eyes sparkle when you're happy ✨",
    "Everything about you, honestly. ❤️",
];

/// Tilt applied to cards, alternating sign by index (degrees).
pub const CARD_TILT_DEGREES: f32 = 2.0;

/// Reveal delay added per card index once the gallery is in view.
pub const CARD_REVEAL_STEP_SECS: f64 = 0.1;

// --- Decision prompt ---

/// Half-width of the square the decline button may jump within (px).
pub const DECLINE_RANGE: f32 = 300.0;

pub const PROPOSAL_QUESTION: &str = "Will you be my Valentine?";
pub const AFFIRM_LABEL: &str = "YES 💖";
pub const DECLINE_LABEL: &str = "NO 🙄";
pub const PROPOSAL_FINAL_IMAGE: &str = "outdoor_memory.jpg";

/// Total run time of the confetti task.
pub const CONFETTI_SECS: f64 = 5.0;

/// Gap between confetti firings.
pub const CONFETTI_INTERVAL_SECS: f64 = 0.25;

/// Particles per burst at the very start of the task.
pub const CONFETTI_MAX_PARTICLES: f64 = 50.0;

/// Horizontal origin range of the left burst (fraction of width).
pub const CONFETTI_LEFT_X: (f32, f32) = (0.1, 0.3);

/// Horizontal origin range of the right burst (fraction of width).
pub const CONFETTI_RIGHT_X: (f32, f32) = (0.7, 0.9);

// --- Audio ---

pub const AUDIO_TRACK: &str = "adore_you.mp3";
pub const AUDIO_VOLUME: f32 = 0.3;

// --- Decorations ---

/// Decorations drift upward through a band from the bottom edge to above the
/// top edge, in percent of the section.
pub const DECORATION_BOTTOM: f32 = 110.0;
pub const DECORATION_TOP: f32 = -10.0;

pub const OPENING_HEART_COUNT: usize = 20;
pub const GALLERY_HEART_COUNT: usize = 15;
pub const PROPOSAL_HEART_COUNT: usize = 25;
pub const CELEBRATION_TREAT_COUNT: usize = 30;
pub const CELEBRATION_BUBBLE_COUNT: usize = 20;
