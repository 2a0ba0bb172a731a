//! Topics panel: the new-topic input and the list of topics
//!
//! The selected row carries the `[e] Edit  [d] Delete` controls. While a
//! fetch is in flight only the loading indicator is drawn.

use super::{panel, truncate_to_width};
use crate::tui::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const ROW_CONTROLS: &str = "[e] Edit  [d] Delete";
const PLACEHOLDER: &str = "Topic Title";

/// "Topics" heading with the title input and the add hint
pub fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Input && app.modal.is_none();

    let draft = app.topics.draft();
    let mut spans = if draft.is_empty() && !focused {
        vec![Span::styled(PLACEHOLDER, Style::default().fg(theme.muted))]
    } else {
        vec![Span::styled(draft, Style::default().fg(theme.input))]
    };
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.highlight)));
    }

    let hint = if focused {
        " [Enter] Add Topic  [Esc] Done "
    } else {
        " [i] New topic "
    };

    let block = panel(" Topics ", theme, focused)
        .title_bottom(Line::from(hint).alignment(Alignment::Right));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

pub fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::List && app.modal.is_none();
    let block = panel("", theme, focused);

    if app.topics.is_loading() {
        let loading = Paragraph::new(format!("{} Loading topics...", app.spinner()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted))
            .block(block);
        f.render_widget(loading, area);
        return;
    }

    if app.topics.is_empty() {
        let empty = Paragraph::new("No topics yet. Press i to add one.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner_width = area.width.saturating_sub(4) as usize;
    let controls_width = ROW_CONTROLS.width() + 2;

    let items: Vec<ListItem> = app
        .topics
        .topics()
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            if i == app.selected && focused {
                let title_width = inner_width.saturating_sub(controls_width);
                let title = truncate_to_width(&topic.title, title_width);
                let pad = title_width.saturating_sub(title.width()) + 2;
                ListItem::new(Line::from(vec![
                    Span::raw(title),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(ROW_CONTROLS, Style::default().fg(theme.muted)),
                ]))
            } else {
                ListItem::new(truncate_to_width(&topic.title, inner_width))
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(theme.foreground))
        .highlight_style(
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}
