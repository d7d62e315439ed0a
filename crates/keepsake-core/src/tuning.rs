//! Strike scoring and tier selection.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::HitTier;

/// Thresholds that decide how a strike scores and which recoil it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeTuning {
    /// Reserved intensity that always scores `sentinel_score`.
    pub sentinel: u64,
    pub sentinel_score: u64,
    /// Ultra tier lower bound; also selects the fast projectile.
    pub ultra_threshold: u64,
    /// Combo tier lower bound.
    pub combo_threshold: u64,
    /// Combo increment of an ultra hit.
    pub ultra_combo_step: u32,
    /// Strikes in a barrage.
    pub batch_strikes: u32,
}

impl Default for StrikeTuning {
    fn default() -> Self {
        Self {
            sentinel: SENTINEL_INTENSITY,
            sentinel_score: SENTINEL_SCORE,
            ultra_threshold: ULTRA_THRESHOLD,
            combo_threshold: COMBO_THRESHOLD,
            ultra_combo_step: ULTRA_COMBO_STEP,
            batch_strikes: BATCH_STRIKES,
        }
    }
}

impl StrikeTuning {
    /// Score added by a strike of `intensity`.
    pub fn contribution(&self, intensity: u64) -> u64 {
        if intensity == self.sentinel {
            self.sentinel_score
        } else {
            intensity
        }
    }

    /// Recoil tier for `intensity`.
    ///
    /// Branches are tested in a fixed order: ultra, combo, sentinel, default.
    /// The first match wins even when thresholds overlap the sentinel.
    pub fn classify(&self, intensity: u64) -> HitTier {
        if intensity >= self.ultra_threshold {
            HitTier::Ultra
        } else if intensity >= self.combo_threshold {
            HitTier::Combo
        } else if intensity == self.sentinel {
            HitTier::Mercy
        } else {
            HitTier::Standard
        }
    }

    /// Flight time of the shuttlecock for `intensity`.
    pub fn projectile_secs(&self, intensity: u64) -> f64 {
        if intensity >= self.ultra_threshold {
            PROJECTILE_FAST_SECS
        } else {
            PROJECTILE_SECS
        }
    }
}

impl HitTier {
    /// Banner shown when this tier lands.
    pub fn message(self) -> &'static str {
        match self {
            HitTier::Ultra => MESSAGE_ULTRA,
            HitTier::Combo => MESSAGE_COMBO,
            HitTier::Mercy => MESSAGE_MERCY,
            HitTier::Standard => MESSAGE_STANDARD,
        }
    }

    /// Length of the target's recoil animation.
    pub fn recoil_secs(self) -> f64 {
        match self {
            HitTier::Ultra => RECOIL_ULTRA_SECS,
            HitTier::Combo => RECOIL_COMBO_SECS,
            HitTier::Mercy => RECOIL_MERCY_SECS,
            HitTier::Standard => RECOIL_STANDARD_SECS,
        }
    }
}
