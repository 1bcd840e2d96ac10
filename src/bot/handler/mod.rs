use std::sync::{
    Arc, Mutex as StdMutex,
    atomic::{AtomicU64, AtomicUsize, Ordering},
};

use indexmap::IndexMap;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

use crate::{
    chat::{
        context::{ChatMessage, Transcript},
        engine::ChatEngine,
    },
    config::structure::BotConfig,
};

use super::{clock::Clock, render::RenderSink};

mod buttons;
mod message;
mod reply;

pub use reply::PendingReply;

pub struct InnerData {
    pub config: BotConfig,
    pub engine: Mutex<ChatEngine>,
    pub transcript: RwLock<Transcript>,
    pub sink: Arc<dyn RenderSink>,
    pub clock: Arc<dyn Clock>,
    pending: StdMutex<IndexMap<u64, CancellationToken>>,
    next_id: AtomicU64,
    typing: AtomicUsize,
}
pub type Data = Arc<InnerData>;

impl InnerData {
    pub fn new(
        config: BotConfig,
        engine: ChatEngine,
        sink: Arc<dyn RenderSink>,
        clock: Arc<dyn Clock>,
    ) -> Data {
        Arc::new(Self {
            config,
            engine: Mutex::new(engine),
            transcript: RwLock::new(Transcript::new()),
            sink,
            clock,
            pending: StdMutex::new(IndexMap::new()),
            next_id: AtomicU64::new(0),
            typing: AtomicUsize::new(0),
        })
    }

    /// Appends to the transcript and draws the message. Both happen under
    /// the transcript lock so the drawn order matches the stored order.
    pub async fn post(&self, message: ChatMessage) {
        let mut transcript = self.transcript.write().await;
        self.sink.render(&message);
        transcript.push(message);
    }

    /// Tracks a new in-flight reply. With `cancel_pending` set, every earlier
    /// reply still waiting on its typing delay is cancelled first.
    fn register(&self, token: CancellationToken) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());

        if self.config.cancel_pending {
            for (earlier, superseded) in pending.drain(..) {
                log::debug!("superseding pending reply {earlier}");
                superseded.cancel();
            }
        }

        pending.insert(id, token);
        id
    }

    fn unregister(&self, id: u64) {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .shift_remove(&id);
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn cancel_all(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        for (id, token) in pending.drain(..) {
            log::debug!("cancelling pending reply {id}");
            token.cancel();
        }
    }

    fn typing_started(&self) {
        if self.typing.fetch_add(1, Ordering::SeqCst) == 0 {
            self.sink.typing(true);
        }
    }

    fn typing_finished(&self) {
        if self.typing.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.sink.typing(false);
        }
    }
}

pub struct Handler {
    pub data: Data,
}

impl Handler {
    pub fn new(data: Data) -> Self {
        Self { data }
    }

    /// Draws a typing delay from the configured range.
    async fn typing_delay(&self) -> std::time::Duration {
        let (min, max) = self.data.config.typing_delay_range();
        let millis = self.data.engine.lock().await.typing_delay(min, max);
        std::time::Duration::from_millis(millis)
    }
}
