//! Wizard controller: step cursor, selections and generation lifecycle
//!
//! Every transition takes `&self` and returns a new `WizardState`, so the
//! renderer can treat the current snapshot as plain data.

pub mod types;

pub use types::*;

use crate::error::{GenerationError, WizardError};


/// Immutable snapshot of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// Current step; stays at `MarketSegment` while generating or failed
    pub step: WizardStep,
    pub phase: WizardPhase,
    pub selections: SelectionSet,
    /// Suggestions from the last successful generation
    pub suggestions: Vec<String>,
    /// Message shown in the error phase
    pub error: Option<String>,
    /// Last issued request id
    last_request_id: u64,
    /// Request whose outcome is still awaited
    in_flight: Option<u64>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Focus,
            phase: WizardPhase::Selecting,
            selections: SelectionSet::default(),
            suggestions: Vec::new(),
            error: None,
            last_request_id: 0,
            in_flight: None,
        }
    }

    /// Step cursor in [1, 8]
    pub fn cursor(&self) -> u8 {
        self.step.number()
    }

    /// True while a generation request is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == WizardPhase::Generating
    }

    /// Heading for the current step
    pub fn prompt(&self) -> &'static str {
        self.step.title()
    }

    /// Options for the current step
    pub fn options(&self) -> Vec<&'static str> {
        options_for(self.step, &self.selections)
    }

    /// Id of the request whose outcome is awaited, if any
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Record `value` for `step` and advance.
    ///
    /// Selecting the market segment moves to `Generating` and returns the
    /// request to hand to the generator instead of advancing the cursor.
    pub fn select_option(
        &self,
        step: WizardStep,
        value: impl Into<String>,
    ) -> Result<Transition, WizardError> {
        match self.phase {
            WizardPhase::Selecting => {}
            WizardPhase::Generating => return Err(WizardError::Busy),
            WizardPhase::Results | WizardPhase::Error => return Err(WizardError::NotSelecting),
        }

        if step != self.step {
            return Err(WizardError::StepMismatch {
                requested: step,
                current: self.step,
            });
        }

        let value = value.into();
        if value.trim().is_empty() {
            return Err(WizardError::BlankValue(step));
        }

        let mut next = self.clone();
        next.selections.set(step, value);

        if step == WizardStep::MarketSegment {
            let id = self.last_request_id.wrapping_add(1);
            next.last_request_id = id;
            next.in_flight = Some(id);
            next.phase = WizardPhase::Generating;
            next.error = None;
            next.suggestions.clear();

            tracing::debug!(request_id = id, "Selections complete, starting generation");

            let request = GenerationRequest {
                id,
                selections: next.selections.clone(),
            };
            return Ok(Transition {
                state: next,
                request: Some(request),
            });
        }

        if let Some(following) = step.next() {
            next.step = following;
        }
        Ok(Transition {
            state: next,
            request: None,
        })
    }

    /// Step back one prompt without clearing any selection.
    ///
    /// No-op on the first step, while generating, and in the error phase.
    pub fn go_back(&self) -> WizardState {
        let mut next = self.clone();
        match self.phase {
            WizardPhase::Generating | WizardPhase::Error => {}
            WizardPhase::Results => {
                next.step = WizardStep::MarketSegment;
                next.phase = WizardPhase::Selecting;
            }
            WizardPhase::Selecting => {
                if let Some(prev) = self.step.prev() {
                    next.step = prev;
                }
            }
        }
        next
    }

    /// Back to step 1 with nothing selected.
    ///
    /// An in-flight request keeps running; its outcome is ignored.
    pub fn reset(&self) -> WizardState {
        if self.in_flight.is_some() {
            tracing::debug!(request_id = ?self.in_flight, "Reset discards in-flight generation");
        }
        WizardState {
            last_request_id: self.last_request_id,
            ..WizardState::new()
        }
    }

    /// Apply the generator outcome for `request_id`.
    ///
    /// Outcomes for any request other than the one in flight are discarded.
    pub fn complete_generation(
        &self,
        request_id: u64,
        outcome: Result<Vec<String>, GenerationError>,
    ) -> WizardState {
        if self.in_flight != Some(request_id) {
            tracing::debug!(request_id, "Discarding stale generation outcome");
            return self.clone();
        }

        let mut next = self.clone();
        next.in_flight = None;
        match outcome {
            Ok(suggestions) => {
                next.suggestions = suggestions;
                next.error = None;
                next.step = WizardStep::Results;
                next.phase = WizardPhase::Results;
            }
            Err(e) => {
                next.error = Some(e.to_string());
                next.phase = WizardPhase::Error;
            }
        }
        next
    }
}
