// Current-user panel (top right): email, optional name, logout hint

use super::{panel, truncate_to_width};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, bp: Breakpoint) {
    let theme = &app.theme;
    let Some(user) = app.current_user() else {
        return;
    };

    let inner = area.width.saturating_sub(2) as usize;
    let label = if bp == Breakpoint::Wide {
        format!("{} ({})", user.email, user.user_name)
    } else {
        user.email.clone()
    };

    let lines = vec![Line::from(vec![
        Span::styled("● ", Style::default().fg(theme.online)),
        Span::styled(
            truncate_to_width(&label, inner.saturating_sub(2)),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let block = panel("", theme, false)
        .title_bottom(Line::from(" [L] Logout ").alignment(Alignment::Right))
        .border_style(Style::default().fg(theme.danger));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
