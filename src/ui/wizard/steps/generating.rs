//! Loading indicator while the generation request is in flight

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::{footer, heading, wizard_block};
use crate::ui::keybindings::ShortcutContext;
use crate::ui::layout::centered_rect;
use crate::ui::wizard::WizardScreen;
use crate::wizard::WizardState;

impl WizardScreen {
    pub(crate) fn render_generating_step(&mut self, frame: &mut Frame, state: &WizardState) {
        let area = centered_rect(60, 40, frame.area());
        frame.render_widget(Clear, area);

        let block = wizard_block("Generating");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Min(3),    // Spinner
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        frame.render_widget(heading(state.prompt()), chunks[0]);

        let body = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(self.spinner(), Style::default().fg(Color::Cyan)),
                Span::raw(" Generating problems..."),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("via {}", self.provider_label),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(body, chunks[1]);

        frame.render_widget(footer(ShortcutContext::Generating), chunks[2]);
    }
}
