// Theme support for the TUI
//
// "auto" uses the terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    pub foreground: Color,
    /// `Color::Reset` keeps the terminal's own background
    pub background: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub title: Color,
    pub highlight: Color,

    pub selection: Color,
    pub selection_fg: Color,

    pub input: Color,
    pub online: Color,
    pub danger: Color,

    // Log levels
    pub error: Color,
    pub warn: Color,
    pub info: Color,
    pub debug: Color,
}

impl Theme {
    /// Load theme by name, falling back to "auto"
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            _ => Self::auto(),
        }
    }

    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            foreground: Color::White,
            background: Color::Reset,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_type: BorderType::Rounded,
            title: Color::Cyan,
            highlight: Color::Yellow,
            selection: Color::Blue,
            selection_fg: Color::White,
            input: Color::LightBlue,
            online: Color::Green,
            danger: Color::Red,
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Green,
            debug: Color::DarkGray,
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            muted: Color::Rgb(0x62, 0x72, 0xa4),
            border: Color::Rgb(0x44, 0x47, 0x5a),
            border_type: BorderType::Rounded,
            title: Color::Rgb(0xbd, 0x93, 0xf9),
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),
            selection: Color::Rgb(0x44, 0x47, 0x5a),
            selection_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
            input: Color::Rgb(0x8b, 0xe9, 0xfd),
            online: Color::Rgb(0x50, 0xfa, 0x7b),
            danger: Color::Rgb(0xff, 0x55, 0x55),
            error: Color::Rgb(0xff, 0x55, 0x55),
            warn: Color::Rgb(0xff, 0xb8, 0x6c),
            info: Color::Rgb(0x50, 0xfa, 0x7b),
            debug: Color::Rgb(0x62, 0x72, 0xa4),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            muted: Color::Rgb(0x4c, 0x56, 0x6a),
            border: Color::Rgb(0x43, 0x4c, 0x5e),
            border_type: BorderType::Plain,
            title: Color::Rgb(0x88, 0xc0, 0xd0),
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),
            selection: Color::Rgb(0x43, 0x4c, 0x5e),
            selection_fg: Color::Rgb(0xec, 0xef, 0xf4),
            input: Color::Rgb(0x81, 0xa1, 0xc1),
            online: Color::Rgb(0xa3, 0xbe, 0x8c),
            danger: Color::Rgb(0xbf, 0x61, 0x6a),
            error: Color::Rgb(0xbf, 0x61, 0x6a),
            warn: Color::Rgb(0xd0, 0x87, 0x70),
            info: Color::Rgb(0xa3, 0xbe, 0x8c),
            debug: Color::Rgb(0x4c, 0x56, 0x6a),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("Dracula").name, "dracula");
        assert_eq!(Theme::by_name("NORD").name, "nord");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_auto() {
        assert_eq!(Theme::by_name("solarized").name, "auto");
    }
}
