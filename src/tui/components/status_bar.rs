// Status bar: uptime, topic count, pending requests, error count, backend
//
// Narrow terminals drop the backend origin and key hints.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let mut parts = vec![
        format!(" {}", app.uptime()),
        format!("{} topics", app.topics.len()),
    ];

    if app.in_flight > 0 {
        parts.push(format!("{} {} pending", app.spinner(), app.in_flight));
    }

    let errors = app.log_buffer.error_count();
    if errors > 0 {
        parts.push(format!("✗ {}", errors));
    }

    if bp != Breakpoint::Compact {
        parts.push(app.api_url.clone());
        parts.push("? help".to_string());
    }

    let status = Paragraph::new(parts.join(" │ ")).style(Style::default().fg(app.theme.muted));
    f.render_widget(status, area);
}
