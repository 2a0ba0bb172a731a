//! Logs panel - tail of the in-memory log buffer
//!
//! Failed requests surface here as "Failed to <action>: <error>" lines; the
//! topic list itself never shows an error state.

use super::panel;
use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(visible);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(format_entry(entry, &app.theme)))
        .collect();

    let list = List::new(items).block(panel(" Logs ", &app.theme, false));
    f.render_widget(list, area);
}

fn format_entry<'a>(entry: &'a LogEntry, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            entry.timestamp.format("%H:%M:%S ").to_string(),
            Style::default().fg(theme.muted),
        ),
        Span::styled(
            format!("{:<5} ", entry.level.as_str()),
            level_style(entry.level, theme),
        ),
        Span::styled(
            entry.message.as_str(),
            Style::default().fg(theme.foreground),
        ),
    ])
}

fn level_style(level: LogLevel, theme: &Theme) -> Style {
    let color = match level {
        LogLevel::Error => theme.error,
        LogLevel::Warn => theme.warn,
        LogLevel::Info => theme.info,
        LogLevel::Debug | LogLevel::Trace => theme.debug,
    };
    Style::default().fg(color)
}
