//! Generation failure message

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::{footer, wizard_block};
use crate::ui::keybindings::ShortcutContext;
use crate::ui::layout::centered_rect;
use crate::ui::wizard::WizardScreen;
use crate::wizard::WizardState;

impl WizardScreen {
    pub(crate) fn render_error_step(&mut self, frame: &mut Frame, state: &WizardState) {
        let area = centered_rect(60, 40, frame.area());
        frame.render_widget(Clear, area);

        let block = wizard_block("Error").border_style(Style::default().fg(Color::Red));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(3),    // Message
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        let message = state.error.as_deref().unwrap_or("Unknown error");
        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                "Could not generate problems",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Error: {message}")),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(body, chunks[0]);

        frame.render_widget(footer(ShortcutContext::Error), chunks[1]);
    }
}
