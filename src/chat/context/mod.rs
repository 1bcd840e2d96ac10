mod context;
mod message;

pub use context::{ConversationContext, Topic};
pub use message::{ChatMessage, MessageRole, Transcript};
