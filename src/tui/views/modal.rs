// Modal overlay rendering: help and the rename dialog

use crate::tui::app::App;
use crate::tui::modal::{EditDialog, Modal};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::EditTopic(dialog) => render_edit(f, dialog, app),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn overlay_block<'a>(title: &'a str, footer: &'a str, app: &App) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight))
        .border_type(app.theme.border_type)
        .title(title)
        .title_bottom(Line::from(footer).centered())
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.input);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Topics", header_style)),
        kb("i, a", "Type a new topic"),
        kb("Enter", "Add topic (in input)"),
        kb("Esc", "Leave input"),
        kb("e", "Rename selected"),
        kb("d, Del", "Delete selected"),
        kb("r", "Reload list"),
        kb("y", "Copy selected title"),
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("↑/↓, j/k", "Move selection"),
        kb("Home/End", "Jump to first/last"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("L", "Log out"),
        kb("?", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.as_str(), key_style),
        ]),
    ]);

    let area = centered_rect(42, 24, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(overlay_block(" Help ", " Press ? or Esc to close ", app));
    f.render_widget(paragraph, area);
}

fn render_edit(f: &mut Frame, dialog: &EditDialog, app: &App) {
    let muted = Style::default().fg(app.theme.muted);

    let content = Text::from(vec![
        Line::from(vec![
            Span::styled("Was: ", muted),
            Span::styled(dialog.original.as_str(), muted),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled(dialog.buffer.as_str(), Style::default().fg(app.theme.input)),
            Span::styled("▏", Style::default().fg(app.theme.highlight)),
        ]),
    ]);

    let width = (f.area().width * 2 / 3).max(30);
    let area = centered_rect(width, 6, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(overlay_block(" Edit topic ", " [Enter] Save  [Esc] Cancel ", app));
    f.render_widget(paragraph, area);
}
