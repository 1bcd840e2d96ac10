use std::fmt;

use chrono::{DateTime, Utc};

use crate::chat::knowledge::Category;

/// What the conversation is currently about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topic {
    Category(Category),
    CourseCount,
    /// Carries the key of the course whose card was shown.
    SpecificCourse(String),
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Category(category) => write!(f, "{category}"),
            Topic::CourseCount => write!(f, "course_count"),
            Topic::SpecificCourse(_) => write!(f, "specific_course"),
        }
    }
}

/// Per-session conversational state. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationContext {
    pub current_topic: Option<Topic>,
    pub last_question: Option<String>,
    pub session_start: DateTime<Utc>,
}

impl ConversationContext {
    pub fn new(session_start: DateTime<Utc>) -> Self {
        Self {
            current_topic: None,
            last_question: None,
            session_start,
        }
    }

    pub fn is_topic(&self, topic: &Topic) -> bool {
        self.current_topic.as_ref() == Some(topic)
    }

    pub fn set_topic(&mut self, topic: Topic) {
        log::debug!("topic changed: {:?} -> {topic}", self.current_topic);
        self.current_topic = Some(topic);
    }

    pub fn session_length(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.session_start
    }
}
