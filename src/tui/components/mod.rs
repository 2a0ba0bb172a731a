// Components module - the pieces the topics screen is assembled from
//
// - Topics panel: header input and the topic list
// - Sidebar: static online-users list
// - User panel: signed-in email and logout hint
// - Logs panel, status bar, toast: shell rendered on every screen

pub mod logs_panel;
pub mod sidebar;
pub mod status_bar;
pub mod toast;
pub mod topics_panel;
pub mod user_panel;

pub use toast::Toast;

use crate::tui::theme::Theme;
use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use unicode_width::UnicodeWidthChar;

/// Bordered block in the theme's panel style
pub fn panel<'a>(title: &'a str, theme: &Theme, focused: bool) -> Block<'a> {
    let border = if focused { theme.highlight } else { theme.border };
    Block::default()
        .title(title)
        .title_style(Style::default().fg(theme.title))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border))
}

/// Cut `text` to at most `max` display columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let mut width = 0;
    let mut out = String::new();

    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            // Make room for the ellipsis
            while width + 1 > max {
                match out.pop() {
                    Some(last) => width -= last.width().unwrap_or(0),
                    None => return out,
                }
            }
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_leaves_short_text() {
        assert_eq!(truncate_to_width("Rust", 10), "Rust");
        assert_eq!(truncate_to_width("Rust", 4), "Rust");
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate_to_width("Ownership", 5), "Owne…");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK char is two columns
        assert_eq!(truncate_to_width("話題一覧", 5), "話題…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
