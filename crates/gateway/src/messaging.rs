//! Messaging trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{GatewayError, Result};

/// A message captured by the in-memory messenger, for test assertions.
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub to: String,
    pub body: String,
}

/// Trait for the outbound messaging operations used by the pipeline.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends `body` to the destination number. Returns the message id
    /// assigned by the delivery service.
    async fn send(&self, to: &str, body: &str) -> Result<String>;
}

#[derive(Debug, Default)]
struct InMemoryMessengerState {
    messages: Vec<SentMessage>,
    next_id: u32,
    fail_on_send: bool,
}

/// In-memory messenger for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessenger {
    state: Arc<RwLock<InMemoryMessengerState>>,
}

impl InMemoryMessenger {
    /// Creates a new in-memory messenger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the messenger to fail on the next send call.
    pub fn set_fail_on_send(&self, fail: bool) {
        self.state.write().unwrap().fail_on_send = fail;
    }

    /// Returns the number of delivered messages.
    pub fn sent_count(&self) -> usize {
        self.state.read().unwrap().messages.len()
    }

    /// Returns the most recently delivered message.
    pub fn last_message(&self) -> Option<SentMessage> {
        self.state.read().unwrap().messages.last().cloned()
    }
}

#[async_trait]
impl Messenger for InMemoryMessenger {
    async fn send(&self, to: &str, body: &str) -> Result<String> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_send {
            return Err(GatewayError::Api {
                service: "messaging",
                detail: "send rejected".to_string(),
            });
        }

        state.next_id += 1;
        let sid = format!("SM-{:04}", state.next_id);
        state.messages.push(SentMessage {
            to: to.to_string(),
            body: body.to_string(),
        });

        Ok(sid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_captures_message() {
        let messenger = InMemoryMessenger::new();

        let sid = messenger.send("+40711222333", "hello").await.unwrap();
        assert_eq!(sid, "SM-0001");
        assert_eq!(messenger.sent_count(), 1);

        let last = messenger.last_message().unwrap();
        assert_eq!(last.to, "+40711222333");
        assert_eq!(last.body, "hello");
    }

    #[tokio::test]
    async fn sequential_message_ids() {
        let messenger = InMemoryMessenger::new();

        let first = messenger.send("+1", "a").await.unwrap();
        let second = messenger.send("+1", "b").await.unwrap();
        assert_eq!(first, "SM-0001");
        assert_eq!(second, "SM-0002");
    }

    #[tokio::test]
    async fn fail_on_send() {
        let messenger = InMemoryMessenger::new();
        messenger.set_fail_on_send(true);

        let result = messenger.send("+1", "a").await;
        assert!(result.is_err());
        assert_eq!(messenger.sent_count(), 0);
    }
}
