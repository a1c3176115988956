//! Option list for steps 1 through 7

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::{footer, heading, wizard_block};
use crate::ui::keybindings::ShortcutContext;
use crate::ui::layout::centered_rect;
use crate::ui::wizard::WizardScreen;
use crate::wizard::{WizardState, WizardStep};

impl WizardScreen {
    pub(crate) fn render_selection_step(&mut self, frame: &mut Frame, state: &WizardState) {
        let area = centered_rect(70, 80, frame.area());
        frame.render_widget(Clear, area);

        let total = WizardStep::selecting().len();
        let block = wizard_block(&format!("Step {} of {}", state.cursor(), total));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let summary = choices_so_far(state);
        let summary_height = summary.len() as u16 + 1;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),              // Heading
                Constraint::Min(6),                 // Options list
                Constraint::Length(summary_height), // Choices so far
                Constraint::Length(1),              // Footer
            ])
            .split(inner);

        frame.render_widget(heading(state.prompt()), chunks[0]);

        let items: Vec<ListItem> = state
            .options()
            .into_iter()
            .map(|opt| ListItem::new(Line::from(opt)))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[1], &mut self.option_state);

        let summary = Paragraph::new(summary)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(summary, chunks[2]);

        frame.render_widget(footer(ShortcutContext::Selecting), chunks[3]);
    }
}

/// One dimmed line per field chosen before the current step
fn choices_so_far(state: &WizardState) -> Vec<Line<'static>> {
    WizardStep::selecting()
        .iter()
        .take_while(|step| **step != state.step)
        .map(|step| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", step.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    state.selections.get(*step).to_string(),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect()
}
