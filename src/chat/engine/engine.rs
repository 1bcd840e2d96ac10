use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};

use crate::chat::{
    context::{ConversationContext, Topic},
    courses,
    knowledge::{Category, KnowledgeBase},
    random::RandomSource,
};

use super::{
    fallback,
    meta,
    reply::{FallbackKind, Intent, Reply, UiAction},
};

const AFFIRMATIVE: &[&str] = &["yes", "show", "complete", "list", "sure"];

/// Stateless classifier over a knowledge base. All conversational state
/// lives in the [`ConversationContext`] passed to [`Responder::respond`].
#[derive(Debug, Clone)]
pub struct Responder {
    knowledge: KnowledgeBase,
}

impl Responder {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Produces a reply for `message`, updating `context`.
    ///
    /// Returns `None` for empty or whitespace-only input, leaving the context
    /// untouched. Any other input always gets a reply.
    pub fn respond(
        &self,
        message: &str,
        context: &mut ConversationContext,
        random: &mut dyn RandomSource,
    ) -> Option<Reply> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        context.last_question = Some(message.to_string());

        let text = message.to_lowercase();
        let reply = self.classify(&text, context, random);

        log::debug!(
            "classified {message:?} as {:?} (topic: {:?})",
            reply.intent,
            context.current_topic
        );

        Some(reply)
    }

    fn classify(
        &self,
        text: &str,
        context: &mut ConversationContext,
        random: &mut dyn RandomSource,
    ) -> Reply {
        if let Some((kind, reply)) = meta::detect(text) {
            return Reply::new(reply, Intent::Meta(kind));
        }

        if text.contains("how many") && (text.contains("course") || text.contains("available")) {
            context.set_topic(Topic::CourseCount);
            return Reply::new(courses::statistics(), Intent::CourseCount);
        }

        if context.is_topic(&Topic::CourseCount) && AFFIRMATIVE.iter().any(|t| text.contains(t)) {
            context.set_topic(Topic::Category(Category::Courses));
            return Reply::new(courses::full_listing(), Intent::CourseCatalog);
        }

        if let Some(course) = courses::lookup(text) {
            context.set_topic(Topic::SpecificCourse(course.key.to_string()));
            return Reply::new(course.card(), Intent::SpecificCourse(course.key));
        }

        let matched = self.knowledge.matching(text);
        if matched.len() > 1 {
            return Reply::new(self.multi_topic(&matched), Intent::MultiTopic(matched));
        }

        if let Some((category, score)) = self.knowledge.best_match(text) {
            log::trace!("best category {category} with score {score}");
            if let Some(reply) = self.category_reply(category, random) {
                context.set_topic(Topic::Category(category));
                return reply;
            }
        }

        self.fallback(text, context, random)
    }

    fn category_reply(&self, category: Category, random: &mut dyn RandomSource) -> Option<Reply> {
        let entry = self.knowledge.get(category)?;
        let mut text = random.choose(&entry.responses)?.clone();

        if let Some(follow_up) = &entry.follow_up {
            text.push_str("\n\n");
            text.push_str(follow_up);
        }

        let action = entry.quick_actions.then_some(UiAction::ShowQuickActions);

        Some(Reply::new(text, Intent::Category(category)).with_action(action))
    }

    fn multi_topic(&self, categories: &[Category]) -> String {
        let mut text = String::from("🔍 **I noticed you asked about a few things:**\n\n");

        for category in categories {
            if let Some(entry) = self.knowledge.get(*category) {
                text.push_str(&format!("• **{}**: {}\n", category.label(), entry.summary));
            }
        }

        text.push_str("\nWhich one would you like to explore first?");
        text
    }

    fn fallback(
        &self,
        text: &str,
        context: &mut ConversationContext,
        random: &mut dyn RandomSource,
    ) -> Reply {
        if context.is_topic(&Topic::CourseCount) {
            context.set_topic(Topic::Category(Category::Courses));
            return Reply::new(
                courses::full_listing(),
                Intent::Fallback(FallbackKind::CourseList),
            );
        }

        if fallback::VAGUE_TOKENS.iter().any(|t| text.contains(t)) {
            return Reply::new(fallback::MENU, Intent::Fallback(FallbackKind::Menu));
        }

        if text.contains("course") || text.contains("class") {
            return Reply::new(fallback::CLARIFY, Intent::Fallback(FallbackKind::Clarify));
        }

        let generic = random
            .choose(fallback::GENERIC)
            .copied()
            .unwrap_or(fallback::GENERIC[0]);

        Reply::new(generic, Intent::Fallback(FallbackKind::Generic))
    }
}

/// A responder bound to one session's context and random source.
pub struct ChatEngine {
    responder: Responder,
    context: ConversationContext,
    random: Box<dyn RandomSource>,
}

impl ChatEngine {
    pub fn new(
        knowledge: KnowledgeBase,
        random: Box<dyn RandomSource>,
        session_start: DateTime<Utc>,
    ) -> Self {
        Self {
            responder: Responder::new(knowledge),
            context: ConversationContext::new(session_start),
            random,
        }
    }

    pub fn respond(&mut self, message: &str) -> Option<Reply> {
        self.responder
            .respond(message, &mut self.context, self.random.as_mut())
    }

    /// Typing delay in milliseconds, drawn from `min..=max`.
    pub fn typing_delay(&mut self, min: u64, max: u64) -> u64 {
        self.random.between(min, max)
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }
}

impl Deref for ChatEngine {
    type Target = ConversationContext;

    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

impl DerefMut for ChatEngine {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.context
    }
}
