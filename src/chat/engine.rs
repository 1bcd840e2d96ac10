mod engine;
mod fallback;
mod meta;
mod reply;

pub use engine::ChatEngine;
pub use reply::UiAction;
