use colog::format::CologStyle;
use env_logger::Builder;
use log::{Level, LevelFilter};

struct CustomLevelTokens;

impl CologStyle for CustomLevelTokens {
    fn level_token(&self, level: &Level) -> &str {
        match *level {
            Level::Error => "ERR",
            Level::Warn => "WRN",
            Level::Info => "INF",
            Level::Debug => "DBG",
            Level::Trace => "TRC",
        }
    }
}

pub struct Logger;

impl Logger {
    /// Logs go to stderr so they never interleave with the chat transcript
    /// on stdout. `RUST_LOG` still wins over `level` when set.
    pub fn init(level: Option<LevelFilter>) {
        Builder::new()
            .filter(Some("edubot"), level.unwrap_or(LevelFilter::Info))
            .filter(Some("tokio"), LevelFilter::Warn)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format(colog::formatter(CustomLevelTokens))
            .write_style(env_logger::WriteStyle::Auto)
            .init();
    }
}
