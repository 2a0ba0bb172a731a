// TUI application state
//
// App owns the local topic list and the session store. Requests are queued
// here and drained by the event loop, which runs them off the UI thread and
// feeds the resulting TopicEvent back through `apply_from`. Every sign-out
// starts a new session generation; results stamped with an older one are
// dropped.

use super::components::Toast;
use super::input::InputHandler;
use super::modal::{Modal, ModalAction};
use super::theme::Theme;
use crate::config::Config;
use crate::events::{TopicEvent, TopicRequest};
use crate::logging::LogBuffer;
use crate::session::{IdentityProvider, SessionStore, User};
use crate::topics::{validate_title, LoadState, Topic, TopicList};
use crossterm::event::KeyCode;
use std::time::Instant;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Which part of the topics screen receives plain keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    /// Typing goes into the new-topic draft
    Input,
}

pub struct App {
    pub topics: TopicList,
    pub session: SessionStore,
    identity: Box<dyn IdentityProvider>,

    pub selected: usize,
    pub focus: Focus,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,

    pub log_buffer: LogBuffer,
    pub theme: Theme,
    pub api_url: String,

    pub should_quit: bool,
    pub start_time: Instant,
    /// Requests spawned but not yet reconciled
    pub in_flight: usize,

    generation: u64,
    pending: Vec<TopicRequest>,
    input_handler: InputHandler,
    animation_frame: usize,
}

impl App {
    pub fn new(
        session: SessionStore,
        identity: Box<dyn IdentityProvider>,
        log_buffer: LogBuffer,
        config: &Config,
    ) -> Self {
        Self {
            topics: TopicList::default(),
            session,
            identity,
            selected: 0,
            focus: Focus::default(),
            modal: None,
            toast: None,
            log_buffer,
            theme: Theme::by_name(&config.theme),
            api_url: config.api_url.clone(),
            should_quit: false,
            start_time: Instant::now(),
            in_flight: 0,
            generation: 0,
            pending: Vec::new(),
            input_handler: InputHandler::default(),
            animation_frame: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request queue
    // ─────────────────────────────────────────────────────────────────────────

    /// Load the list once per sign-in; the list screen starts in loading state
    pub fn mount(&mut self) {
        if self.session.is_signed_in() && self.topics.state() == LoadState::Idle {
            self.request(TopicRequest::Fetch);
        }
    }

    pub fn request(&mut self, request: TopicRequest) {
        if matches!(request, TopicRequest::Fetch) {
            self.topics.begin_fetch();
        }
        self.in_flight += 1;
        self.pending.push(request);
    }

    /// Hand queued requests to the event loop
    pub fn take_requests(&mut self) -> Vec<TopicRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Session generation that requests taken now belong to
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Reconcile a finished request from the current session
    pub fn apply(&mut self, event: TopicEvent) {
        self.apply_from(self.generation, event);
    }

    /// Reconcile a finished request started in `generation`
    pub fn apply_from(&mut self, generation: u64, event: TopicEvent) {
        if generation != self.generation || !self.session.is_signed_in() {
            tracing::debug!("Dropping {} result after logout", event.action().describe());
            return;
        }

        self.in_flight = self.in_flight.saturating_sub(1);
        self.topics.apply(event);
        self.clamp_selection();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Topic actions
    // ─────────────────────────────────────────────────────────────────────────

    pub fn selected_topic(&self) -> Option<&Topic> {
        self.topics.get(self.selected)
    }

    /// Submit the draft; empty drafts raise an alert and send nothing
    pub fn submit_draft(&mut self) {
        match validate_title(self.topics.draft()) {
            Ok(title) => {
                let title = title.to_string();
                self.request(TopicRequest::Add { title });
            }
            Err(e) => self.show_toast(e.to_string()),
        }
    }

    pub fn open_edit(&mut self) {
        if let Some(topic) = self.selected_topic() {
            self.modal = Some(Modal::edit(topic));
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(topic) = self.selected_topic() {
            let id = topic.id.clone();
            self.request(TopicRequest::Delete { id });
        }
    }

    pub fn refresh(&mut self) {
        self.request(TopicRequest::Fetch);
    }

    pub fn copy_selected(&mut self) {
        let Some(title) = self.selected_topic().map(|t| t.title.clone()) else {
            return;
        };
        match super::clipboard::copy_text(&title) {
            Ok(()) => self.show_toast("Copied title"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("Clipboard unavailable");
            }
        }
    }

    /// Route a key to the open modal and act on what it returns
    pub fn handle_modal_key(&mut self, key: KeyCode) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };

        match modal.handle_input(key) {
            ModalAction::None => {}
            ModalAction::Close => self.modal = None,
            ModalAction::SubmitEdit { id, title } => {
                self.modal = None;
                self.request(TopicRequest::Edit { id, title });
            }
            ModalAction::Rejected(message) => self.show_toast(message),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    pub fn login(&mut self) {
        match self.session.login_with(self.identity.as_ref()) {
            Ok(()) => self.mount(),
            Err(e) => {
                tracing::error!("Failed to sign in: {:#}", e);
                self.show_toast("Sign-in failed");
            }
        }
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.session.logout() {
            tracing::error!("Failed to persist logout: {:#}", e);
        }
        self.generation += 1;
        self.pending.clear();
        self.in_flight = 0;
        self.topics.reset();
        self.selected = 0;
        self.focus = Focus::List;
        self.modal = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.topics.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.topics.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.topics.len() {
            self.select_last();
        }
    }

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Display helpers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Advance the spinner and expire the toast
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn spinner(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Uptime as HH:MM:SS
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        )
    }
}
