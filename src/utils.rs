pub mod log;
mod misc;

pub use misc::time_to_string;
