// Modal overlays: help and the rename dialog
//
// A modal owns its own key handling and reports back through ModalAction;
// App holds at most one Option<Modal> and acts on what comes back.

use crate::topics::{validate_title, Topic};
use crossterm::event::KeyCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Key consumed, nothing else to do
    None,
    Close,
    /// Rename confirmed with a non-empty title
    SubmitEdit { id: String, title: String },
    /// Input refused; the message is shown as a toast
    Rejected(String),
}

/// Rename dialog state, prefilled with the topic's current title
#[derive(Debug, Clone)]
pub struct EditDialog {
    pub id: String,
    pub original: String,
    pub buffer: String,
}

impl EditDialog {
    pub fn for_topic(topic: &Topic) -> Self {
        Self {
            id: topic.id.clone(),
            original: topic.title.clone(),
            buffer: topic.title.clone(),
        }
    }

    fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match key {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => match validate_title(&self.buffer) {
                Ok(title) => ModalAction::SubmitEdit {
                    id: self.id.clone(),
                    title: title.to_string(),
                },
                Err(e) => ModalAction::Rejected(e.to_string()),
            },
            KeyCode::Backspace => {
                self.buffer.pop();
                ModalAction::None
            }
            KeyCode::Char(c) => {
                self.buffer.push(c);
                ModalAction::None
            }
            _ => ModalAction::None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Modal {
    Help,
    EditTopic(EditDialog),
}

impl Modal {
    pub fn edit(topic: &Topic) -> Self {
        Modal::EditTopic(EditDialog::for_topic(topic))
    }

    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::EditTopic(dialog) => dialog.handle_input(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(modal: &mut Modal, text: &str) {
        for c in text.chars() {
            assert_eq!(modal.handle_input(KeyCode::Char(c)), ModalAction::None);
        }
    }

    #[test]
    fn test_edit_prefills_and_submits() {
        let mut modal = Modal::edit(&Topic::new("1", "A"));
        typed(&mut modal, "2");

        assert_eq!(
            modal.handle_input(KeyCode::Enter),
            ModalAction::SubmitEdit {
                id: "1".to_string(),
                title: "A2".to_string()
            }
        );
    }

    #[test]
    fn test_edit_rejects_empty_title() {
        let mut modal = Modal::edit(&Topic::new("1", "A"));
        assert_eq!(modal.handle_input(KeyCode::Backspace), ModalAction::None);

        assert_eq!(
            modal.handle_input(KeyCode::Enter),
            ModalAction::Rejected("Topic title cannot be empty.".to_string())
        );
    }

    #[test]
    fn test_edit_escape_cancels() {
        let mut modal = Modal::edit(&Topic::new("1", "A"));
        typed(&mut modal, "xyz");
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
    }

    #[test]
    fn test_help_closes_on_question_mark() {
        let mut modal = Modal::Help;
        assert_eq!(modal.handle_input(KeyCode::Char('j')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
    }
}
