// Key repeat gating for list-mode shortcuts
//
// Navigation keys repeat while held; action keys (delete, edit, logout)
// fire once per press. Terminals that never send Release events fall back
// to a short debounce so a held `d` can't delete a whole list.
//
// Text entry in the input box bypasses this entirely.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a held action key
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Fire on press only
    Once,

    /// Fire on press, then keep firing while held
    Repeat {
        initial_delay: Duration,
        interval: Duration,
    },
}

impl KeyBehavior {
    pub fn navigation() -> Self {
        Self::Repeat {
            initial_delay: Duration::from_millis(400),
            interval: Duration::from_millis(50),
        }
    }
}

#[derive(Debug, Default)]
struct Held {
    since: Option<Instant>,
    last_fired: Option<Instant>,
}

pub struct InputHandler {
    held: HashMap<KeyCode, Held>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: HashMap::new(),
            behaviors: HashMap::new(),
        }
    }

    pub fn configure(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Register a press; returns true when the bound action should run
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Once);
        let held = self.held.entry(key).or_default();

        let (Some(since), Some(last)) = (held.since, held.last_fired) else {
            held.since = Some(now);
            held.last_fired = Some(now);
            return true;
        };

        let fire = match behavior {
            KeyBehavior::Once => now.duration_since(last) >= ACTION_DEBOUNCE,
            KeyBehavior::Repeat {
                initial_delay,
                interval,
            } => now.duration_since(since) >= initial_delay && now.duration_since(last) >= interval,
        };

        if fire {
            held.last_fired = Some(now);
        }
        fire
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        let mut handler = Self::new();
        handler.configure(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::PageUp,
                KeyCode::PageDown,
            ],
            KeyBehavior::navigation(),
        );
        handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_key_fires_once_per_press() {
        let mut handler = InputHandler::default();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('d'), t0));
        assert!(!handler.press_at(KeyCode::Char('d'), t0 + Duration::from_millis(20)));

        handler.handle_key_release(KeyCode::Char('d'));
        assert!(handler.press_at(KeyCode::Char('d'), t0 + Duration::from_millis(40)));
    }

    #[test]
    fn test_action_key_debounce_without_release() {
        let mut handler = InputHandler::default();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('e'), t0));
        assert!(handler.press_at(KeyCode::Char('e'), t0 + ACTION_DEBOUNCE));
    }

    #[test]
    fn test_navigation_repeats_after_delay() {
        let mut handler = InputHandler::default();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Down, t0));
        assert!(!handler.press_at(KeyCode::Down, t0 + Duration::from_millis(100)));
        assert!(handler.press_at(KeyCode::Down, t0 + Duration::from_millis(400)));
        assert!(!handler.press_at(KeyCode::Down, t0 + Duration::from_millis(420)));
        assert!(handler.press_at(KeyCode::Down, t0 + Duration::from_millis(450)));
    }
}
