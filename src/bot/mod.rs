use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use handler::{Handler, InnerData};

use crate::{
    chat::{
        context::{ChatMessage, ConversationContext, MessageRole, Transcript},
        engine::ChatEngine,
        knowledge::KnowledgeBase,
        random::{RandomSource, ThreadRandom},
    },
    config::structure::BotConfig,
    utils,
};

use clock::{Clock, SystemClock};
use error::BotError;

pub use handler::PendingReply;
pub use render::{HtmlSink, RenderSink, TerminalSink};

mod clock;
mod error;
mod handler;
mod quick;
mod render;

/// One chat widget session: owns the conversation, the transcript and the
/// open/closed state, and renders everything through its sink.
pub struct ChatBot {
    handler: Handler,
    open: AtomicBool,
}

impl ChatBot {
    pub async fn new(config: &BotConfig, sink: Arc<dyn RenderSink>) -> Self {
        Self::new_with(config, sink, None, None, None).await
    }

    pub async fn new_with(
        config: &BotConfig,
        sink: Arc<dyn RenderSink>,
        clock: Option<Arc<dyn Clock>>,
        random: Option<Box<dyn RandomSource>>,
        knowledge: Option<KnowledgeBase>,
    ) -> Self {
        let clock = clock.unwrap_or_else(|| Arc::new(SystemClock));
        let random = random.unwrap_or_else(|| match config.seed {
            Some(seed) => Box::new(ThreadRandom::seeded(seed)),
            None => Box::new(ThreadRandom::new()),
        });
        let knowledge = knowledge.unwrap_or_default();

        let engine = ChatEngine::new(knowledge, random, clock.now());
        let data = InnerData::new(config.clone(), engine, sink, clock);

        let welcome = format!(
            "👋 Hi! I'm {}, your learning assistant. Ask me about courses, grades, assignments or study tips!",
            config.name
        );
        data.post(ChatMessage::bot(welcome, data.clock.now())).await;

        log::info!("{} session started", config.name);

        Self {
            handler: Handler::new(data),
            open: AtomicBool::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    pub fn open(&self) {
        self.set_open(true);
    }

    /// Hides the widget. Pending replies keep running unless the session is
    /// configured to cancel them.
    pub fn close(&self) {
        self.set_open(false);
        if self.handler.data.config.cancel_pending {
            self.handler.data.cancel_all();
        }
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    fn set_open(&self, open: bool) {
        if self.open.swap(open, Ordering::SeqCst) != open {
            self.handler.data.sink.toggle(open);
        }
    }

    pub async fn send(&self, message: &str) -> Option<PendingReply> {
        self.handler.on_message(message).await
    }

    pub async fn quick_action(&self, id: &str) -> Result<PendingReply, BotError> {
        self.handler.on_quick_action(id).await
    }

    pub fn cancel_pending(&self) {
        self.handler.data.cancel_all();
    }

    pub fn pending(&self) -> usize {
        self.handler.data.pending_count()
    }

    /// Draws the whole transcript again, oldest message first.
    pub async fn replay(&self) {
        let transcript = self.handler.data.transcript.read().await;
        for message in transcript.iter() {
            self.handler.data.sink.render(message);
        }
    }

    pub async fn transcript(&self) -> Transcript {
        self.handler.data.transcript.read().await.clone()
    }

    pub async fn context(&self) -> ConversationContext {
        self.handler.data.engine.lock().await.context().clone()
    }

    pub async fn shutdown(&self) {
        let pending = self.pending();
        if pending > 0 {
            log::info!("dropping {pending} pending replies");
        }
        self.cancel_pending();

        let context = self.context().await;
        let length = context.session_length(self.handler.data.clock.now());
        let transcript = self.transcript().await;

        log::info!(
            "session ended after {} ({} questions, {} messages)",
            utils::time_to_string(length),
            transcript.count_role(MessageRole::User),
            transcript.len(),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Mutex, time::Duration};

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::chat::{context::Topic, random::FixedRandom};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Message(MessageRole, String),
        Typing(bool),
        QuickActions,
        Toggle(bool),
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<Event>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    impl RenderSink for RecordingSink {
        fn render(&self, message: &ChatMessage) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Message(message.role, message.content.clone()));
        }

        fn typing(&self, visible: bool) {
            self.events.lock().unwrap().push(Event::Typing(visible));
        }

        fn quick_actions(&self, _actions: &[quick::QuickAction]) {
            self.events.lock().unwrap().push(Event::QuickActions);
        }

        fn toggle(&self, open: bool) {
            self.events.lock().unwrap().push(Event::Toggle(open));
        }
    }

    /// Fixed timestamp; sleeping only yields.
    struct InstantClock(DateTime<Utc>);

    #[async_trait]
    impl Clock for InstantClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }

        async fn sleep(&self, _duration: Duration) {
            tokio::task::yield_now().await;
        }
    }

    /// Never finishes sleeping, so replies stay pending until cancelled.
    struct StuckClock;

    #[async_trait]
    impl Clock for StuckClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
        }

        async fn sleep(&self, _duration: Duration) {
            std::future::pending::<()>().await;
        }
    }

    async fn bot_with(
        config: BotConfig,
        clock: Arc<dyn Clock>,
    ) -> (ChatBot, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let bot = ChatBot::new_with(
            &config,
            sink.clone(),
            Some(clock),
            Some(Box::new(FixedRandom::default())),
            None,
        )
        .await;
        (bot, sink)
    }

    async fn bot() -> (ChatBot, Arc<RecordingSink>) {
        let clock = InstantClock(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap());
        bot_with(BotConfig::default(), Arc::new(clock)).await
    }

    #[tokio::test]
    async fn starts_with_a_welcome_message() {
        let (bot, sink) = bot().await;

        let transcript = bot.transcript().await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.iter().last().unwrap().role, MessageRole::Bot);
        assert!(transcript.iter().last().unwrap().content.contains("EduBot"));
        assert!(!bot.is_open());
        assert_eq!(sink.events().len(), 1);
    }

    #[tokio::test]
    async fn reply_is_rendered_after_the_user_message() {
        let (bot, sink) = bot().await;

        let pending = bot.send("tell me about python").await.unwrap();
        assert!(pending.wait().await.unwrap());

        let events = sink.events();
        assert_eq!(
            events[1],
            Event::Message(MessageRole::User, "tell me about python".to_string())
        );
        assert_eq!(events[2], Event::Typing(true));
        assert!(matches!(&events[3], Event::Message(MessageRole::Bot, text) if text.contains("Dr. Sarah Johnson")));
        assert_eq!(events[4], Event::Typing(false));
        assert_eq!(bot.transcript().await.len(), 3);
        assert_eq!(bot.pending(), 0);
    }

    #[tokio::test]
    async fn blank_input_changes_nothing() {
        let (bot, sink) = bot().await;
        bot.send("how many courses?").await.unwrap().wait().await.unwrap();
        let before = bot.transcript().await.len();

        assert!(bot.send("").await.is_none());
        assert!(bot.send("   ").await.is_none());

        assert_eq!(bot.transcript().await.len(), before);
        assert!(bot.context().await.is_topic(&Topic::CourseCount));
        assert!(!sink.events().contains(&Event::Message(MessageRole::User, String::new())));
    }

    #[tokio::test]
    async fn course_count_then_yes_lists_everything() {
        let (bot, _) = bot().await;

        bot.send("how many courses are available?")
            .await
            .unwrap()
            .wait()
            .await
            .unwrap();
        bot.send("yes").await.unwrap().wait().await.unwrap();

        let transcript = bot.transcript().await;
        let last = transcript.iter().rev().find(|m| m.role == MessageRole::Bot).unwrap();
        assert!(last.content.contains("Complete Course Catalog (20 courses)"));
        assert!(bot.context().await.is_topic(&Topic::Category(
            crate::chat::knowledge::Category::Courses
        )));
    }

    #[tokio::test]
    async fn quick_action_categories_reveal_buttons() {
        let (bot, sink) = bot().await;

        bot.send("where are my grades").await.unwrap().wait().await.unwrap();
        assert!(sink.events().contains(&Event::QuickActions));
    }

    #[tokio::test]
    async fn quick_actions_bypass_the_classifier() {
        let (bot, _) = bot().await;
        bot.send("how many courses").await.unwrap().wait().await.unwrap();

        let pending = bot.quick_action("tips").await.unwrap();
        assert!(pending.wait().await.unwrap());

        let transcript = bot.transcript().await;
        assert_eq!(
            transcript.iter().last().unwrap().content,
            quick::QuickAction::Tips.reply()
        );
        assert_eq!(
            transcript
                .iter()
                .rev()
                .find(|m| m.role == MessageRole::User)
                .unwrap()
                .content,
            "Give me some study tips"
        );
        // context untouched by the button
        assert!(bot.context().await.is_topic(&Topic::CourseCount));
    }

    #[tokio::test]
    async fn unknown_quick_action_is_rejected() {
        let (bot, _) = bot().await;
        let before = bot.transcript().await.len();

        let result = bot.quick_action("weather").await;
        assert!(matches!(result, Err(BotError::UnknownAction(_))));
        assert_eq!(bot.transcript().await.len(), before);
    }

    #[tokio::test]
    async fn overlapping_replies_all_render_by_default() {
        let (bot, _) = bot().await;

        let first = bot.send("hello").await.unwrap();
        let second = bot.send("thanks a lot").await.unwrap();

        assert!(first.wait().await.unwrap());
        assert!(second.wait().await.unwrap());

        let bot_messages = bot.transcript().await.count_role(MessageRole::Bot);
        assert_eq!(bot_messages, 3);
    }

    #[tokio::test]
    async fn cancel_pending_supersedes_earlier_replies() {
        let config = BotConfig {
            cancel_pending: true,
            ..Default::default()
        };
        let (bot, sink) = bot_with(config, Arc::new(StuckClock)).await;

        let first = bot.send("hello").await.unwrap();
        let second = bot.send("thanks").await.unwrap();
        assert_eq!(bot.pending(), 1);

        assert!(!first.wait().await.unwrap());

        second.cancel();
        assert!(!second.wait().await.unwrap());
        assert_eq!(bot.transcript().await.len(), 3);
        assert_eq!(sink.events().last(), Some(&Event::Typing(false)));
    }

    #[tokio::test]
    async fn close_cancels_only_when_configured() {
        let (bot, _) = bot_with(BotConfig::default(), Arc::new(StuckClock)).await;
        bot.open();
        let pending = bot.send("hello").await.unwrap();

        bot.close();
        assert_eq!(bot.pending(), 1);

        bot.cancel_pending();
        assert!(!pending.wait().await.unwrap());
        assert_eq!(bot.pending(), 0);
    }

    #[tokio::test]
    async fn replay_redraws_the_transcript_in_order() {
        let (bot, sink) = bot().await;
        bot.send("hello").await.unwrap().wait().await.unwrap();

        let messages = |events: Vec<Event>| {
            events
                .into_iter()
                .filter(|e| matches!(e, Event::Message(..)))
                .collect::<Vec<_>>()
        };
        let drawn = messages(sink.events());
        assert_eq!(drawn.len(), 3);

        bot.replay().await;
        let all = messages(sink.events());
        assert_eq!(all[3..], drawn[..]);
    }

    #[tokio::test]
    async fn pending_reply_can_be_cancelled_on_its_own() {
        let (bot, sink) = bot_with(BotConfig::default(), Arc::new(StuckClock)).await;
        let first = bot.send("hello").await.unwrap();
        let second = bot.send("where are my grades").await.unwrap();

        first.cancel();
        assert!(!first.wait().await.unwrap());
        assert_eq!(bot.pending(), 1);
        assert!(!sink.events().contains(&Event::Typing(false)));

        bot.cancel_pending();
        assert!(!second.wait().await.unwrap());
        assert_eq!(sink.events().last(), Some(&Event::Typing(false)));
    }

    #[tokio::test]
    async fn transcript_order_matches_render_order() {
        let (bot, sink) = bot().await;
        let replies = vec![
            bot.send("hello").await.unwrap(),
            bot.send("where are my grades").await.unwrap(),
            bot.send("thanks").await.unwrap(),
        ];
        for reply in replies {
            reply.wait().await.unwrap();
        }

        let rendered = sink
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Message(role, text) => Some((role, text)),
                _ => None,
            })
            .collect::<Vec<_>>();
        let stored = bot
            .transcript()
            .await
            .iter()
            .map(|m| (m.role, m.content.clone()))
            .collect::<Vec<_>>();
        assert_eq!(rendered, stored);
    }

    #[tokio::test]
    async fn toggle_renders_state_changes_once() {
        let (bot, sink) = bot().await;

        bot.toggle();
        bot.open();
        bot.toggle();

        let toggles = sink
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::Toggle(_)))
            .collect::<Vec<_>>();
        assert_eq!(toggles, vec![Event::Toggle(true), Event::Toggle(false)]);
    }
}
