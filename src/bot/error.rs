use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("unknown quick action \"{0}\" (expected one of: courses, grades, help, tips)")]
    UnknownAction(String),

    #[error("reply task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
