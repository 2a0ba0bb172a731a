/// Width classes for layout decisions, so render code has no bare column counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 70 cols: topics only, no sidebar
    Compact,
    /// 70-119 cols: sidebar with online users
    Normal,
    /// 120+ cols: wider sidebar, user name shown next to the email
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=69 => Breakpoint::Compact,
            70..=119 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Sidebar width in columns, zero when hidden
    pub fn sidebar_width(self) -> u16 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 18,
            Breakpoint::Wide => 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(69), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(70), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(119), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(120), Breakpoint::Wide);
    }

    #[test]
    fn compact_hides_sidebar() {
        assert_eq!(Breakpoint::Compact.sidebar_width(), 0);
        assert!(Breakpoint::Wide > Breakpoint::Normal);
    }
}
