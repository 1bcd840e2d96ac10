use std::{io::Write, sync::Mutex};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use colored::Colorize;

use crate::chat::context::{ChatMessage, MessageRole};

use super::quick::QuickAction;

/// Where the chat widget draws itself.
pub trait RenderSink: Send + Sync {
    fn render(&self, message: &ChatMessage);

    fn typing(&self, visible: bool);

    fn quick_actions(&self, actions: &[QuickAction]);

    fn toggle(&self, open: bool);
}

fn local_time(time: DateTime<Utc>, timezone: Option<Tz>) -> String {
    match timezone {
        Some(timezone) => time.with_timezone(&timezone).format("%H:%M").to_string(),
        None => time.format("%H:%M").to_string(),
    }
}

/// Escapes text for insertion into HTML. `**bold**` markers and emoji are
/// left untouched; newlines become `<br>`.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            '\n' => escaped.push_str("<br>"),
            c => escaped.push(c),
        }
    }

    escaped
}

pub struct TerminalSink {
    name: String,
    timezone: Option<Tz>,
}

impl TerminalSink {
    pub fn new(name: impl Into<String>, timezone: Option<Tz>) -> Self {
        Self {
            name: name.into(),
            timezone,
        }
    }
}

impl RenderSink for TerminalSink {
    fn render(&self, message: &ChatMessage) {
        let time = format!("[{}]", local_time(message.sent_at, self.timezone)).dimmed();
        let label = match message.role {
            MessageRole::User => "you".cyan().bold(),
            MessageRole::Bot => self.name.green().bold(),
        };

        println!("{time} {label}: {}", message.content);
    }

    fn typing(&self, visible: bool) {
        if visible {
            println!("{}", format!("{} is typing...", self.name).dimmed().italic());
        }
    }

    fn quick_actions(&self, actions: &[QuickAction]) {
        let buttons = actions
            .iter()
            .map(|action| format!("/{action} ({})", action.label()))
            .collect::<Vec<_>>()
            .join("  ");

        println!("{}", format!("quick actions: {buttons}").yellow());
    }

    fn toggle(&self, open: bool) {
        let state = if open { "opened" } else { "closed" };
        println!("{}", format!("-- chat {state} --").dimmed());
    }
}

/// Writes the transcript as the HTML fragments a chat widget would append.
pub struct HtmlSink<W: Write + Send> {
    out: Mutex<W>,
    timezone: Option<Tz>,
}

impl<W: Write + Send> HtmlSink<W> {
    pub fn new(out: W, timezone: Option<Tz>) -> Self {
        Self {
            out: Mutex::new(out),
            timezone,
        }
    }

    fn write(&self, fragment: &str) {
        let Ok(mut out) = self.out.lock() else {
            log::error!("html sink poisoned, dropping fragment");
            return;
        };

        if let Err(why) = writeln!(out, "{fragment}").and_then(|_| out.flush()) {
            log::warn!("failed to write html fragment: {why:?}");
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> RenderSink for HtmlSink<W> {
    fn render(&self, message: &ChatMessage) {
        self.write(&format!(
            "<div class=\"message {}-message\"><div class=\"message-content\">{}</div><div class=\"message-time\">{}</div></div>",
            message.role,
            escape_html(&message.content),
            local_time(message.sent_at, self.timezone),
        ));
    }

    fn typing(&self, visible: bool) {
        self.write(&format!(
            "<div class=\"typing-indicator\" data-visible=\"{visible}\"></div>"
        ));
    }

    fn quick_actions(&self, actions: &[QuickAction]) {
        let buttons = actions
            .iter()
            .map(|action| {
                format!(
                    "<button class=\"quick-action\" data-action=\"{action}\">{}</button>",
                    escape_html(action.label())
                )
            })
            .collect::<String>();

        self.write(&format!("<div class=\"quick-actions\">{buttons}</div>"));
    }

    fn toggle(&self, open: bool) {
        self.write(&format!("<div class=\"chatbot-window\" data-open=\"{open}\"></div>"));
    }
}
