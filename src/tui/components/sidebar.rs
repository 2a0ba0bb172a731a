// Online users sidebar (static placeholder list)

use super::panel;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const ONLINE_USERS: [&str; 3] = ["User 1", "User 2", "User 3"];

pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = ONLINE_USERS
        .iter()
        .map(|name| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(theme.online)),
                Span::styled(*name, Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(panel(" Online ", theme, false)),
        area,
    );
}
