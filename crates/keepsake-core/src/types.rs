//! Fundamental value types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::TICK_RATE;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Whole ticks needed to cover `secs`, rounded up.
///
/// The small bias keeps exact multiples (0.05 s = 3 ticks) from rounding up
/// because of float noise.
pub fn ticks_for(secs: f64) -> u64 {
    let ticks = secs * TICK_RATE as f64 - 1e-9;
    if ticks <= 0.0 {
        0
    } else {
        ticks.ceil() as u64
    }
}

/// Seconds covered by `ticks`.
pub fn secs_for(ticks: u64) -> f64 {
    ticks as f64 / TICK_RATE as f64
}

/// Why a typed name was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is empty after trimming whitespace")]
    Blank,
}

/// A visitor's display name: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VisitorName(String);

impl VisitorName {
    /// Trim `raw` and accept it if anything is left.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NameError::Blank);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VisitorName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VisitorName> for String {
    fn from(name: VisitorName) -> Self {
        name.0
    }
}

impl fmt::Display for VisitorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
