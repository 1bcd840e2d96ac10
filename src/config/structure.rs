use chrono_tz::Tz;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ChatBotConfigTOML {
    #[serde(default)]
    pub config: ChatBotConfigInner,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ChatBotConfigInner {
    pub bot: BotConfig,
    pub log: LogConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Html,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BotConfig {
    pub name: String,
    pub typing_delay_min_ms: u64,
    pub typing_delay_max_ms: u64,
    /// Cancel replies still waiting on their typing delay when a newer
    /// message arrives or the widget is closed.
    pub cancel_pending: bool,
    pub timezone: Option<Tz>,
    pub output: OutputFormat,
    /// Fixed seed for reply selection and typing delays, for reproducible
    /// sessions.
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "EduBot".to_string(),
            typing_delay_min_ms: 1000,
            typing_delay_max_ms: 2500,
            cancel_pending: false,
            timezone: None,
            output: OutputFormat::default(),
            seed: None,
        }
    }
}

impl BotConfig {
    pub fn typing_delay_range(&self) -> (u64, u64) {
        let (min, max) = (self.typing_delay_min_ms, self.typing_delay_max_ms);
        if min > max {
            log::warn!("typing delay range {min}..{max} is inverted, swapping");
            (max, min)
        } else {
            (min, max)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: Option<String>,
}

impl LogConfig {
    /// The configured level, `Ok(None)` when unset. An unknown level comes
    /// back as `Err` carrying the raw value so it can be reported once the
    /// logger is running.
    pub fn level_filter(&self) -> Result<Option<LevelFilter>, &str> {
        match self.level.as_deref() {
            None => Ok(None),
            Some(level) => level.parse().map(Some).map_err(|_| level),
        }
    }
}
