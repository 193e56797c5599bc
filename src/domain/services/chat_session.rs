#[cfg(test)]
#[path = "chat_session_test.rs"]
mod tests;

use crate::domain::models::Author;
use crate::domain::models::ChatPrompt;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatTransport;
use crate::domain::models::Message;

pub const GREETING: &str = "Hello! Ask me anything about the weather or just say hi! 😊";

/// Transcript and request state behind the chat surface.
///
/// Only one request may be outstanding at a time: `begin_send` refuses new
/// input while `pending` is set, and `complete` clears it. Closing the chat
/// resets the transcript to the greeting and bumps `generation`, so a reply
/// that was still in flight for the old conversation is discarded when it
/// lands.
pub struct ChatSession {
    credential_override: Option<String>,
    generation: u64,
    open: bool,
    pending: bool,
    transcript: Vec<Message>,
}

impl Default for ChatSession {
    fn default() -> ChatSession {
        return ChatSession {
            credential_override: None,
            generation: 0,
            open: false,
            pending: false,
            transcript: vec![Message::new(Author::Assistant, GREETING)],
        };
    }
}

impl ChatSession {
    pub fn transcript(&self) -> &[Message] {
        return &self.transcript;
    }

    pub fn is_pending(&self) -> bool {
        return self.pending;
    }

    pub fn is_open(&self) -> bool {
        return self.open;
    }

    pub fn generation(&self) -> u64 {
        return self.generation;
    }

    pub fn has_credential_override(&self) -> bool {
        return self.credential_override.is_some();
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the chat and starts the next conversation from the greeting.
    /// The credential override is kept for the lifetime of the process.
    pub fn close(&mut self) {
        self.open = false;
        self.reset();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    fn reset(&mut self) {
        self.transcript = vec![Message::new(Author::Assistant, GREETING)];
        self.pending = false;
        self.generation += 1;
    }

    pub fn set_credential_override(&mut self, credential: Option<String>) {
        self.credential_override = credential
            .map(|key| return key.trim().to_string())
            .filter(|key| return !key.is_empty());
    }

    /// Appends the user's message and returns the request to dispatch, or
    /// `None` when the text is blank or a reply is still pending.
    pub fn begin_send(&mut self, text: &str, temperature: Option<f64>) -> Option<ChatRequest> {
        let text = text.trim();
        if text.is_empty() || self.pending {
            return None;
        }

        self.transcript.push(Message::new(Author::User, text));
        self.pending = true;

        return Some(ChatRequest {
            generation: self.generation,
            prompt: ChatPrompt::new(text, temperature),
            credential: self.credential_override.clone(),
        });
    }

    /// Appends the assistant's reply. Returns false and leaves the session
    /// untouched when the reply belongs to an earlier conversation.
    pub fn complete(&mut self, generation: u64, reply: &str) -> bool {
        if generation != self.generation || !self.pending {
            tracing::debug!(
                generation,
                current = self.generation,
                "Dropping stale chat reply"
            );
            return false;
        }

        self.transcript.push(Message::new(Author::Assistant, reply));
        self.pending = false;

        return true;
    }

    /// Runs a full request/response cycle in place. Returns whether the text
    /// was accepted.
    pub async fn send<T>(&mut self, text: &str, temperature: Option<f64>, transport: &T) -> bool
    where
        T: ChatTransport + ?Sized,
    {
        let request = match self.begin_send(text, temperature) {
            Some(request) => request,
            None => return false,
        };

        let reply = transport.ask(request.prompt, request.credential).await;
        self.complete(request.generation, &reply);

        return true;
    }
}
