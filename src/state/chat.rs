#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Delay before the canned reply lands, in milliseconds.
pub const AUTO_REPLY_DELAY_MS: u64 = 1000;

/// Body of the simulated support reply.
pub const AUTO_REPLY_BODY: &str = "Thanks for your message! Our team will get back to you shortly.";

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAuthor {
    Visitor,
    Bot,
}

/// A single message in the chat panel.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub author: ChatAuthor,
    pub body: String,
}

/// State for the simulated live-chat widget. There is no transport behind
/// it; replies come from a fixed-delay timer in the component.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Append a visitor message. Input is trimmed; whitespace-only input is
    /// rejected. The body is stored verbatim; rendering goes through text
    /// nodes, so markup in user input displays literally.
    pub fn push_visitor(&mut self, raw: &str) -> bool {
        let body = raw.trim();
        if body.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            author: ChatAuthor::Visitor,
            body: body.to_owned(),
        });
        true
    }

    /// Append the canned support reply.
    pub fn push_auto_reply(&mut self) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            author: ChatAuthor::Bot,
            body: AUTO_REPLY_BODY.to_owned(),
        });
    }
}
