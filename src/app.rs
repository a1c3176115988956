use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::error::GenerationError;
use crate::generator::SuggestionGenerator;
use crate::ui::keybindings::{action_for, Action, ShortcutContext};
use crate::ui::{TerminalGuard, WizardScreen};
use crate::wizard::{GenerationRequest, WizardState};

/// Outcome of one spawned generation task
#[derive(Debug)]
struct GenerationOutcome {
    request_id: u64,
    result: Result<Vec<String>, GenerationError>,
}

pub struct App {
    config: Config,
    state: WizardState,
    screen: WizardScreen,
    generator: SuggestionGenerator,
    outcome_tx: mpsc::UnboundedSender<GenerationOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<GenerationOutcome>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, generator: SuggestionGenerator) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let screen = WizardScreen::new(format!(
            "{}/{}",
            generator.provider_name(),
            generator.model()
        ));

        Self {
            config,
            state: WizardState::new(),
            screen,
            generator,
            outcome_tx,
            outcome_rx,
            should_quit: false,
        }
    }

    /// Current wizard snapshot
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);
        tracing::info!(tick_rate_ms = self.config.ui.tick_rate_ms, "Wizard started");

        while !self.should_quit {
            terminal.draw(|f| self.screen.render(f, &self.state))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            self.drain_outcomes();
            if self.state.is_loading() {
                self.screen.tick();
            }
        }

        terminal.show_cursor()?;
        tracing::info!("Wizard closed");
        Ok(())
    }

    /// Apply every generation outcome that has arrived
    fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: GenerationOutcome) {
        self.state = self
            .state
            .complete_generation(outcome.request_id, outcome.result);
        self.screen.sync(&self.state);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let context = ShortcutContext::for_phase(self.state.phase);
        let Some(action) = action_for(context, key.code) else {
            return;
        };

        match action {
            Action::MoveUp => self.screen.select_prev(&self.state),
            Action::MoveDown => self.screen.select_next(&self.state),
            Action::Select => self.select_highlighted(),
            Action::Back => self.state = self.state.go_back(),
            Action::Reset => {
                tracing::info!("Wizard reset");
                self.state = self.state.reset();
                self.screen.reset();
            }
            Action::Quit => self.should_quit = true,
        }
        self.screen.sync(&self.state);
    }

    fn select_highlighted(&mut self) {
        let Some(value) = self.screen.highlighted_option(&self.state) else {
            return;
        };

        match self.state.select_option(self.state.step, value) {
            Ok(transition) => {
                self.state = transition.state;
                if let Some(request) = transition.request {
                    self.start_generation(request);
                }
            }
            Err(e) => tracing::warn!(error = %e, "Selection rejected"),
        }
    }

    /// Run the generator on its own task and report back over the channel
    fn start_generation(&self, request: GenerationRequest) {
        let generator = self.generator.clone();
        let tx = self.outcome_tx.clone();

        tokio::spawn(async move {
            let result = generator.generate(&request.selections).await;
            if tx
                .send(GenerationOutcome {
                    request_id: request.id,
                    result,
                })
                .is_err()
            {
                tracing::debug!(request_id = request.id, "Wizard closed before generation finished");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AiProvider, ApiError};
    use crate::wizard::{WizardPhase, WizardStep};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct NumberedProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AiProvider for NumberedProvider {
        fn name(&self) -> &str {
            "fake"
        }

        fn model(&self) -> &str {
            "fake-1"
        }

        fn is_configured(&self) -> bool {
            true
        }

        async fn generate(&self, _prompt: &str) -> Result<Option<String>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some("1. First problem\n2. Second problem\n".to_string()))
        }
    }

    fn app() -> (App, Arc<NumberedProvider>) {
        let provider = Arc::new(NumberedProvider {
            calls: AtomicUsize::new(0),
        });
        let generator = SuggestionGenerator::new(provider.clone());
        (App::new(Config::default(), generator), provider)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn walk_to_generation(app: &mut App) {
        for _ in WizardStep::selecting() {
            press(app, KeyCode::Enter);
        }
    }

    async fn wait_for_outcome(app: &mut App) {
        let outcome = app.outcome_rx.recv().await.expect("generation outcome");
        app.apply_outcome(outcome);
    }

    #[tokio::test]
    async fn test_enter_walks_steps_and_generates() {
        let (mut app, provider) = app();

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().cursor(), 2);
        assert_eq!(
            app.state().selections.focus,
            "I am trying to address a market gap"
        );

        for _ in 1..WizardStep::selecting().len() {
            press(&mut app, KeyCode::Enter);
        }
        assert!(app.state().is_loading());

        // Ignored while loading
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);
        assert!(app.state().is_loading());

        wait_for_outcome(&mut app).await;
        assert_eq!(app.state().cursor(), 8);
        assert_eq!(
            app.state().suggestions,
            vec!["First problem".to_string(), "Second problem".to_string()]
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_reset_while_generating_discards_outcome() {
        let (mut app, _provider) = app();
        walk_to_generation(&mut app);
        assert!(app.state().is_loading());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state().cursor(), 1);

        wait_for_outcome(&mut app).await;
        assert_eq!(app.state().phase, WizardPhase::Selecting);
        assert_eq!(app.state().cursor(), 1);
        assert!(app.state().suggestions.is_empty());
    }

    #[test]
    fn test_back_keeps_selection() {
        let (mut app, _provider) = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().cursor(), 3);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state().cursor(), 2);
        assert_eq!(app.state().selections.industry, "Agriculture");
    }

    #[test]
    fn test_quit_keys() {
        let (mut by_letter, _provider) = app();
        press(&mut by_letter, KeyCode::Char('q'));
        assert!(by_letter.should_quit);

        let (mut by_ctrl_c, _provider) = app();
        by_ctrl_c.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(by_ctrl_c.should_quit);
    }

    #[test]
    fn test_reset_on_first_step_restores_initial_highlight() {
        let (mut app, _provider) = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.screen.option_state.selected(), Some(2));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state().cursor(), 1);
        assert_eq!(app.screen.option_state.selected(), Some(0));
    }

    #[tokio::test]
    async fn test_reset_from_results_restores_initial_highlights() {
        let (mut app, _provider) = app();
        walk_to_generation(&mut app);
        wait_for_outcome(&mut app).await;
        press(&mut app, KeyCode::Down);
        assert_eq!(app.screen.result_state.selected(), Some(1));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state().cursor(), 1);
        assert_eq!(app.screen.option_state.selected(), Some(0));
        assert_eq!(app.screen.result_state.selected(), Some(0));
    }
}
