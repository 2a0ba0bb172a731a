// TUI module - Terminal User Interface
//
// Owns the terminal while running. The event loop multiplexes three sources:
// - Keyboard input
// - A redraw tick (spinner, toast expiry)
// - TopicEvents coming back from spawned backend requests

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod views;

use crate::api::TopicsApi;
use crate::events::TopicEvent;
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI until the user quits
pub async fn run_tui<A: TopicsApi + 'static>(mut app: App, api: Arc<A>) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app, api).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

async fn run_event_loop<A: TopicsApi + 'static>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: Arc<A>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::channel::<(u64, TopicEvent)>(64);
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    app.mount();

    loop {
        dispatch_requests(app, &api, &event_tx);

        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some((generation, topic_event)) = event_rx.recv() => {
                app.apply_from(generation, topic_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Spawn every queued request; results come back on `event_tx` stamped with
/// the session generation they were started in
fn dispatch_requests<A: TopicsApi + 'static>(
    app: &mut App,
    api: &Arc<A>,
    event_tx: &mpsc::Sender<(u64, TopicEvent)>,
) {
    let generation = app.generation();
    for request in app.take_requests() {
        tracing::debug!("Dispatching {}", request.action().describe());
        let api = Arc::clone(api);
        let tx = event_tx.clone();
        tokio::spawn(async move {
            let event = request.run(api.as_ref()).await;
            if tx.send((generation, event)).await.is_err() {
                tracing::debug!("UI closed before request finished");
            }
        });
    }
}

/// Layered dispatch: Ctrl+C → modal → login gate → input box → list keys
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return;
    }

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }

    // Modal and input box take presses and repeats alike (no debounce)
    if app.modal.is_some() {
        app.handle_modal_key(key_event.code);
        return;
    }

    if app.current_user().is_none() {
        handle_login_keys(app, key_event.code);
        return;
    }

    if app.focus == Focus::Input {
        handle_input_keys(app, key_event);
        return;
    }

    if key_event.kind == KeyEventKind::Press {
        handle_list_keys(app, key_event.code);
    }
}

fn handle_login_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.login(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_input_keys(app: &mut App, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Esc | KeyCode::Tab => app.focus = Focus::List,
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Backspace => {
            app.topics.draft_mut().pop();
        }
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.topics.draft_mut().push(c);
        }
        _ => {}
    }
}

fn handle_list_keys(app: &mut App, key: KeyCode) {
    if !app.handle_key_press(key) {
        return;
    }

    match key {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.modal = Some(modal::Modal::Help),
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => app.focus = Focus::Input,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Char('L') => app.logout(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::app::tests::test_app;
    use super::*;
    use crate::events::TopicRequest;
    use crate::topics::Topic;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
        handle_key_event(
            app,
            KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release),
        );
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn signed_in(label: &str) -> App {
        let mut app = test_app(label);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.take_requests().as_slice(), [TopicRequest::Fetch]));
        app.apply(TopicEvent::Fetched(vec![Topic::new("1", "A"), Topic::new("2", "B")]));
        app
    }

    #[test]
    fn test_login_gate_enter_signs_in() {
        let mut app = test_app("keys-login");
        press(&mut app, KeyCode::Char('d'));
        assert!(app.current_user().is_none());

        press(&mut app, KeyCode::Enter);
        assert!(app.current_user().is_some());
    }

    #[test]
    fn test_typing_repeated_letters_in_input() {
        let mut app = signed_in("keys-typing");
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.focus, Focus::Input);

        // Held keys arrive as repeated presses with no release in between
        for _ in 0..3 {
            handle_key_event(
                &mut app,
                KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE),
            );
        }
        type_text(&mut app, "ps");
        assert_eq!(app.topics.draft(), "ooops");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.take_requests().as_slice(),
            [TopicRequest::Add { title }] if title == "ooop"
        ));
    }

    #[test]
    fn test_list_keys_do_not_leak_into_draft() {
        let mut app = signed_in("keys-list");
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.topics.draft(), "");
        assert!(matches!(
            app.take_requests().as_slice(),
            [TopicRequest::Delete { id }] if id == "2"
        ));
    }

    #[test]
    fn test_edit_modal_captures_keys() {
        let mut app = signed_in("keys-modal");
        press(&mut app, KeyCode::Char('e'));
        assert!(app.modal.is_some());

        // 'q' goes to the dialog, not quit
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);

        assert!(app.modal.is_none());
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_logout_key_returns_to_login_gate() {
        let mut app = signed_in("keys-logout");
        press(&mut app, KeyCode::Char('L'));

        assert!(app.current_user().is_none());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_input() {
        let mut app = signed_in("keys-ctrl-c");
        press(&mut app, KeyCode::Char('i'));
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
