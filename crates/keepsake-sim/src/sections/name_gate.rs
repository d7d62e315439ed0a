//! Name entry gate.
//!
//! Holds the draft, refuses blank submits, and hands the trimmed name over
//! once the exit animation has had time to play.

use log::debug;
use thiserror::Error;

use keepsake_core::constants::NAME_EXIT_SECS;
use keepsake_core::enums::NameGatePhase;
use keepsake_core::events::StageCue;
use keepsake_core::state::NameGateView;
use keepsake_core::types::{ticks_for, NameError, VisitorName};

use super::{Frame, Step};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error(transparent)]
    Invalid(#[from] NameError),
    #[error("a name was already submitted")]
    AlreadySubmitted,
}

#[derive(Debug, Clone)]
pub enum GateStep {
    /// Exit animation finished; release the name.
    Complete { name: VisitorName },
}

#[derive(Debug, Default)]
pub struct NameGate {
    draft: String,
    phase: NameGatePhase,
}

impl NameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn phase(&self) -> NameGatePhase {
        self.phase
    }

    /// Replace the draft. Ignored once a name has been submitted.
    pub fn edit(&mut self, text: String) {
        if self.phase != NameGatePhase::Editing {
            debug!("name gate: ignoring edit after submit");
            return;
        }
        self.draft = text;
    }

    /// Whether the commit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == NameGatePhase::Editing && VisitorName::parse(&self.draft).is_ok()
    }

    /// Commit the draft and start the exit animation.
    pub fn submit(&mut self, frame: &mut Frame<'_>) -> Result<(), GateError> {
        if self.phase != NameGatePhase::Editing {
            return Err(GateError::AlreadySubmitted);
        }
        let name = VisitorName::parse(&self.draft)?;
        self.phase = NameGatePhase::Submitted;
        frame.cue(StageCue::NameGateExit {
            duration_secs: NAME_EXIT_SECS,
        });
        frame.after(
            ticks_for(NAME_EXIT_SECS),
            Step::NameGate(GateStep::Complete { name }),
        );
        Ok(())
    }

    /// Returns the accepted name when the exit delay completes.
    pub fn handle_step(&mut self, step: GateStep) -> Option<VisitorName> {
        match step {
            GateStep::Complete { name } => {
                if self.phase != NameGatePhase::Submitted {
                    return None;
                }
                self.phase = NameGatePhase::Completed;
                Some(name)
            }
        }
    }

    pub fn view(&self) -> NameGateView {
        NameGateView {
            draft: self.draft.clone(),
            can_submit: self.can_submit(),
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Timeline;

    fn drain(gate: &mut NameGate, timeline: &mut Timeline<Step>, now: u64) -> Option<VisitorName> {
        let mut accepted = None;
        while let Some((_, step)) = timeline.pop_due(now) {
            if let Step::NameGate(step) = step {
                accepted = gate.handle_step(step).or(accepted);
            }
        }
        accepted
    }

    #[test]
    fn test_blank_draft_cannot_submit() {
        let mut gate = NameGate::new();
        let mut timeline = Timeline::new();
        let mut cues = Vec::new();
        for text in ["", "   ", "\t\n"] {
            gate.edit(text.to_string());
            assert!(!gate.can_submit());
            let mut frame = Frame {
                now: 0,
                timeline: &mut timeline,
                cues: &mut cues,
            };
            assert_eq!(
                gate.submit(&mut frame),
                Err(GateError::Invalid(NameError::Blank))
            );
        }
        assert!(timeline.is_empty());
        assert!(cues.is_empty());
        assert_eq!(gate.phase(), NameGatePhase::Editing);
    }

    #[test]
    fn test_submit_completes_after_exit_delay() {
        let mut gate = NameGate::new();
        let mut timeline = Timeline::new();
        let mut cues = Vec::new();
        gate.edit("  Ada  ".to_string());
        assert!(gate.can_submit());

        let mut frame = Frame {
            now: 10,
            timeline: &mut timeline,
            cues: &mut cues,
        };
        gate.submit(&mut frame).unwrap();
        assert_eq!(gate.phase(), NameGatePhase::Submitted);
        assert!(!gate.can_submit());

        assert!(drain(&mut gate, &mut timeline, 69).is_none());
        let name = drain(&mut gate, &mut timeline, 70).unwrap();
        assert_eq!(name.as_str(), "Ada");
        assert_eq!(gate.phase(), NameGatePhase::Completed);
    }

    #[test]
    fn test_second_submit_is_refused() {
        let mut gate = NameGate::new();
        let mut timeline = Timeline::new();
        let mut cues = Vec::new();
        gate.edit("Ada".to_string());
        let mut frame = Frame {
            now: 0,
            timeline: &mut timeline,
            cues: &mut cues,
        };
        gate.submit(&mut frame).unwrap();
        assert_eq!(gate.submit(&mut frame), Err(GateError::AlreadySubmitted));
        gate.edit("Someone else".to_string());
        assert_eq!(gate.draft(), "Ada");
        assert_eq!(timeline.len(), 1);
    }
}
