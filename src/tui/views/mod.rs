// Views module - screen-level rendering
//
// Two screens share the same shell (logs panel and status bar):
// - Login: shown while nobody is signed in
// - Topics: header row (input + user panel), sidebar, topic list

mod login;
mod modal;

use super::app::App;
use super::layout::Breakpoint;
use crate::tui::components::{self, sidebar, status_bar, topics_panel, user_panel};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the logs panel, borders included
const LOGS_HEIGHT: u16 = 7;

/// Width of the user panel in the header row
const USER_PANEL_WIDTH: u16 = 36;

/// Called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(LOGS_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    if app.current_user().is_some() {
        render_topics_screen(f, chunks[0], app);
    } else {
        login::render(f, chunks[0], app);
    }

    components::logs_panel::render(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    if let Some(modal_state) = &app.modal {
        modal::render(f, modal_state, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}

fn render_topics_screen(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(USER_PANEL_WIDTH.min(area.width / 2)),
        ])
        .split(rows[0]);

    topics_panel::render_input(f, header[0], app);
    user_panel::render(f, header[1], app, bp);

    let sidebar_width = bp.sidebar_width();
    if sidebar_width == 0 {
        topics_panel::render_list(f, rows[1], app);
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
        .split(rows[1]);

    sidebar::render(f, body[0], &app.theme);
    topics_panel::render_list(f, body[1], app);
}
