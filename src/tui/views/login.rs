// Login gate - the only screen while signed out

use crate::tui::app::App;
use crate::tui::components::panel;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let key = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Not signed in",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", key),
            Span::raw(" to sign in, "),
            Span::styled("q", key),
            Span::raw(" to quit"),
        ]),
    ];

    let login = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.foreground))
        .block(panel(" topicdesk ", theme, true));

    f.render_widget(login, area);
}
