//! Chat-style Q&A panel: an append-only message log rendered into
//! `#chatMessages`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Appended as the bot's reply when the Q&A round trip fails.
pub const ANSWER_FAILURE_MESSAGE: &str =
    "Sorry, I encountered an error processing your question.";

const MESSAGES_ID: &str = "chatMessages";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "user-message",
            Sender::Bot => "bot-message",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            text: text.to_string(),
        }
    }
}

/// Owns the message log; the DOM is a write-only projection of it.
pub struct ChatPanel {
    messages: Vec<ChatMessage>,
    document: Document,
}

impl ChatPanel {
    /// # Errors
    /// Returns a JsValue error if unable to access window or document.
    pub fn new() -> Result<Self, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document object available"))?;
        Ok(Self {
            messages: Vec::new(),
            document,
        })
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a message and render it, keeping the log scrolled to the
    /// newest entry.
    pub fn push(&mut self, sender: Sender, text: &str) -> Result<(), JsValue> {
        let message = ChatMessage::new(sender, text);

        if let Some(container) = self.document.get_element_by_id(MESSAGES_ID) {
            let bubble = self.document.create_element("div")?;
            bubble.set_class_name(&format!("message {}", message.sender.css_class()));
            bubble.set_text_content(Some(&message.text));
            container.append_child(&bubble)?;
            container.set_scroll_top(container.scroll_height());
        }

        self.messages.push(message);
        Ok(())
    }

    /// Drop the log, e.g. when a new document supersedes the session.
    pub fn clear(&mut self) -> Result<(), JsValue> {
        self.messages.clear();
        if let Some(container) = self.document.get_element_by_id(MESSAGES_ID) {
            container.set_inner_html("");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_css_classes() {
        assert_eq!(Sender::User.css_class(), "user-message");
        assert_eq!(Sender::Bot.css_class(), "bot-message");
    }

    #[test]
    fn test_chat_message_serializes() {
        let message = ChatMessage {
            id: "m1".into(),
            sender: Sender::Bot,
            text: "The notice period is 30 days.".into(),
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("Bot"));
        assert!(json.contains("30 days"));
    }
}
