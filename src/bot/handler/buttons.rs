use crate::{
    bot::{error::BotError, quick::QuickAction},
    chat::context::ChatMessage,
};

use super::{Handler, PendingReply};

impl Handler {
    /// Quick-action buttons skip classification and leave the conversation
    /// context as it is.
    pub async fn on_quick_action(&self, id: &str) -> Result<PendingReply, BotError> {
        let action: QuickAction = id.parse()?;
        log::debug!("quick action {action}");

        self.data
            .post(ChatMessage::user(action.prompt(), self.data.clock.now()))
            .await;

        let delay = self.typing_delay().await;

        Ok(self.deliver(action.reply().to_string(), None, delay))
    }
}
