//! Suggested problems (step 8)

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem},
    Frame,
};

use super::{footer, heading, wizard_block};
use crate::ui::keybindings::ShortcutContext;
use crate::ui::layout::centered_rect;
use crate::ui::wizard::WizardScreen;
use crate::wizard::WizardState;

impl WizardScreen {
    pub(crate) fn render_results_step(&mut self, frame: &mut Frame, state: &WizardState) {
        let area = centered_rect(80, 80, frame.area());
        frame.render_widget(Clear, area);

        let block = wizard_block(&format!("{} suggestions", state.suggestions.len()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Min(5),    // Suggestions
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        frame.render_widget(heading(state.prompt()), chunks[0]);

        let items: Vec<ListItem> = state
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, problem)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::Cyan)),
                    Span::raw(problem.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[1], &mut self.result_state);

        frame.render_widget(footer(ShortcutContext::Results), chunks[2]);
    }
}
