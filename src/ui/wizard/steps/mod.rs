//! Render methods for each wizard phase

mod error;
mod generating;
mod results;
mod selection;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::keybindings::{shortcuts_for_context, ShortcutContext};

/// Outer frame shared by every phase
pub(crate) fn wizard_block(subtitle: &str) -> Block<'static> {
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "ideagen",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" - {subtitle} ")),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Centered bold heading line
pub(crate) fn heading(text: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center)
}

/// Key hints for the shortcuts active in `context`
pub(crate) fn footer(context: ShortcutContext) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, shortcut) in shortcuts_for_context(context).enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            shortcut.key_display(),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {}", shortcut.description)));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
