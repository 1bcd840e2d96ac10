use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    bot::{error::BotError, quick::QuickAction},
    chat::{context::ChatMessage, engine::UiAction},
};

use super::Handler;

/// A bot reply waiting out its typing delay.
pub struct PendingReply {
    token: CancellationToken,
    handle: JoinHandle<bool>,
}

impl PendingReply {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the reply task. `Ok(true)` when the reply was rendered,
    /// `Ok(false)` when it was cancelled first.
    pub async fn wait(self) -> Result<bool, BotError> {
        Ok(self.handle.await?)
    }
}

impl Handler {
    pub(super) fn deliver(
        &self,
        text: String,
        action: Option<UiAction>,
        delay: Duration,
    ) -> PendingReply {
        let token = CancellationToken::new();
        let id = self.data.register(token.clone());
        self.data.typing_started();

        log::debug!("reply {id} scheduled in {}ms", delay.as_millis());

        let handle = tokio::spawn({
            let data = self.data.clone();
            let token = token.clone();

            async move {
                let delivered = tokio::select! {
                    _ = token.cancelled() => {
                        log::debug!("reply {id} cancelled before delivery");
                        false
                    }
                    _ = data.clock.sleep(delay) => {
                        let message = ChatMessage::bot(text, data.clock.now());
                        data.post(message).await;

                        if let Some(UiAction::ShowQuickActions) = action {
                            data.sink.quick_actions(&QuickAction::ALL);
                        }
                        true
                    }
                };

                data.unregister(id);
                data.typing_finished();

                delivered
            }
        });

        PendingReply { token, handle }
    }
}
