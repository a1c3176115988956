//! Wizard screen: list cursors and rendering for each phase

use ratatui::{widgets::ListState, Frame};

use crate::wizard::{WizardPhase, WizardState, WizardStep};

pub mod steps;

#[cfg(test)]
mod tests;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// View-side state for the wizard.
///
/// Holds only what the controller does not: list highlights and the
/// loading spinner. Everything else is read from the `WizardState` passed
/// to `render`.
pub struct WizardScreen {
    /// Highlight in the options list of the current step
    pub(crate) option_state: ListState,
    /// Highlight in the suggestion list
    pub(crate) result_state: ListState,
    /// Step the option highlight belongs to
    shown_step: WizardStep,
    spinner_frame: usize,
    /// "provider/model" shown while generating
    pub(crate) provider_label: String,
}

impl WizardScreen {
    pub fn new(provider_label: impl Into<String>) -> Self {
        let mut option_state = ListState::default();
        option_state.select(Some(0));

        let mut result_state = ListState::default();
        result_state.select(Some(0));

        Self {
            option_state,
            result_state,
            shown_step: WizardStep::Focus,
            spinner_frame: 0,
            provider_label: provider_label.into(),
        }
    }

    /// Back to the highlights of a fresh wizard
    pub fn reset(&mut self) {
        self.option_state.select(Some(0));
        self.result_state.select(Some(0));
        self.shown_step = WizardStep::Focus;
        self.spinner_frame = 0;
    }

    /// Realign highlights after the controller changed step.
    ///
    /// Returning to a step highlights the option chosen there before.
    pub fn sync(&mut self, state: &WizardState) {
        if state.step == self.shown_step {
            return;
        }
        self.shown_step = state.step;

        if state.step == WizardStep::Results {
            self.result_state.select(Some(0));
            return;
        }

        let chosen = state.selections.get(state.step);
        let index = state
            .options()
            .iter()
            .position(|opt| *opt == chosen)
            .unwrap_or(0);
        self.option_state.select(Some(index));
    }

    /// Option under the highlight, if the current step has options
    pub fn highlighted_option(&self, state: &WizardState) -> Option<&'static str> {
        let index = self.option_state.selected()?;
        state.options().get(index).copied()
    }

    fn active_list(&mut self, state: &WizardState) -> Option<(&mut ListState, usize)> {
        match state.phase {
            WizardPhase::Selecting => Some((&mut self.option_state, state.options().len())),
            WizardPhase::Results => Some((&mut self.result_state, state.suggestions.len())),
            WizardPhase::Generating | WizardPhase::Error => None,
        }
    }

    /// Move to next item in list
    pub fn select_next(&mut self, state: &WizardState) {
        if let Some((list, len)) = self.active_list(state) {
            if len == 0 {
                return;
            }
            let i = list.selected().map_or(0, |i| (i + 1) % len);
            list.select(Some(i));
        }
    }

    /// Move to previous item in list
    pub fn select_prev(&mut self, state: &WizardState) {
        if let Some((list, len)) = self.active_list(state) {
            if len == 0 {
                return;
            }
            let i = list
                .selected()
                .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
            list.select(Some(i));
        }
    }

    /// Advance the loading spinner
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub(crate) fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Render the screen for the given snapshot
    pub fn render(&mut self, frame: &mut Frame, state: &WizardState) {
        self.sync(state);

        match state.phase {
            WizardPhase::Selecting => self.render_selection_step(frame, state),
            WizardPhase::Generating => self.render_generating_step(frame, state),
            WizardPhase::Results => self.render_results_step(frame, state),
            WizardPhase::Error => self.render_error_step(frame, state),
        }
    }
}
