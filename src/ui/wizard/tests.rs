//! Tests for the wizard screen

use ratatui::{backend::TestBackend, Terminal};

use super::WizardScreen;
use crate::error::GenerationError;
use crate::wizard::{WizardState, WizardStep};

fn draw(screen: &mut WizardScreen, state: &WizardState) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| screen.render(f, state)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn pick(state: &WizardState, value: &str) -> WizardState {
    state.select_option(state.step, value).unwrap().state
}

#[test]
fn test_first_step_shows_focus_heading_and_options() {
    let mut screen = WizardScreen::new("gemini/gemini-1.5-pro");
    let state = WizardState::new();

    let screen_text = draw(&mut screen, &state);
    assert!(screen_text.contains("Step 1 of 7"));
    assert!(screen_text.contains("primary focus of your start-up idea"));
    assert!(screen_text.contains("I am trying to solve a problem"));
}

#[test]
fn test_highlight_wraps_around() {
    let mut screen = WizardScreen::new("test");
    let state = WizardState::new();
    let len = state.options().len();

    screen.select_prev(&state);
    assert_eq!(screen.option_state.selected(), Some(len - 1));
    screen.select_next(&state);
    assert_eq!(screen.option_state.selected(), Some(0));
    assert_eq!(screen.highlighted_option(&state), Some(state.options()[0]));
}

#[test]
fn test_new_step_resets_highlight() {
    let mut screen = WizardScreen::new("test");
    let state = WizardState::new();
    screen.select_next(&state);
    screen.select_next(&state);

    let state = pick(&state, "I am trying to solve a problem");
    screen.sync(&state);
    assert_eq!(state.step, WizardStep::Industry);
    assert_eq!(screen.option_state.selected(), Some(0));
}

#[test]
fn test_going_back_highlights_previous_choice() {
    let mut screen = WizardScreen::new("test");
    let state = pick(&WizardState::new(), "I am trying to solve a problem");
    let state = pick(&state, "Healthcare");
    screen.sync(&state);

    let back = state.go_back();
    screen.sync(&back);
    let healthcare = back
        .options()
        .iter()
        .position(|opt| *opt == "Healthcare")
        .unwrap();
    assert_eq!(screen.option_state.selected(), Some(healthcare));
}

#[test]
fn test_sub_industry_options_follow_industry() {
    let mut screen = WizardScreen::new("test");
    let state = pick(&WizardState::new(), "I am trying to solve a problem");
    let state = pick(&state, "Healthcare");

    let screen_text = draw(&mut screen, &state);
    assert!(screen_text.contains("Dental Care"));
    assert!(!screen_text.contains("Animal Husbandry"));
    assert!(screen_text.contains("Industry: Healthcare"));
}

fn generating_state() -> WizardState {
    let mut state = WizardState::new();
    for step in WizardStep::selecting() {
        let first = state.options()[0];
        state = state.select_option(*step, first).unwrap().state;
    }
    state
}

#[test]
fn test_generating_shows_loading_indicator() {
    let mut screen = WizardScreen::new("gemini/gemini-1.5-pro");
    let state = generating_state();
    assert!(state.is_loading());

    let screen_text = draw(&mut screen, &state);
    assert!(screen_text.contains("Generating problems..."));
    assert!(screen_text.contains("gemini/gemini-1.5-pro"));

    // Navigation is inert while loading
    screen.select_next(&state);
    assert_eq!(screen.option_state.selected(), Some(0));
}

#[test]
fn test_results_list_is_numbered() {
    let mut screen = WizardScreen::new("test");
    let state = generating_state();
    let id = state.in_flight().unwrap();
    let state = state.complete_generation(
        id,
        Ok(vec!["Slow claims".to_string(), "No interoperability".to_string()]),
    );

    let screen_text = draw(&mut screen, &state);
    assert!(screen_text.contains(" 1. Slow claims"));
    assert!(screen_text.contains(" 2. No interoperability"));
    assert!(screen_text.contains("2 suggestions"));

    screen.select_next(&state);
    assert_eq!(screen.result_state.selected(), Some(1));
}

#[test]
fn test_error_shows_message() {
    let mut screen = WizardScreen::new("test");
    let state = generating_state();
    let id = state.in_flight().unwrap();
    let state = state.complete_generation(id, Err(GenerationError::NoText));

    let screen_text = draw(&mut screen, &state);
    assert!(screen_text.contains("Could not generate problems"));
    assert!(screen_text.contains("start over"));
}

#[test]
fn test_spinner_cycles() {
    let mut screen = WizardScreen::new("test");
    let first = screen.spinner();
    for _ in 0..super::SPINNER_FRAMES.len() {
        screen.tick();
    }
    assert_eq!(screen.spinner(), first);
}
