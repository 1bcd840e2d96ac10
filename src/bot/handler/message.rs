use crate::chat::context::ChatMessage;

use super::{Handler, PendingReply};

impl Handler {
    /// Handles text typed by the user. Blank input is dropped without
    /// touching the transcript or the conversation context.
    pub async fn on_message(&self, content: &str) -> Option<PendingReply> {
        let content = content.trim();
        if content.is_empty() {
            log::trace!("ignoring blank message");
            return None;
        }

        self.data
            .post(ChatMessage::user(content, self.data.clock.now()))
            .await;

        let reply = self.data.engine.lock().await.respond(content)?;
        let delay = self.typing_delay().await;

        Some(self.deliver(reply.text, reply.action, delay))
    }
}
