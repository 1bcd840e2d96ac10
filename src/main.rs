use std::{path::PathBuf, sync::Arc};

use bot::{ChatBot, HtmlSink, PendingReply, RenderSink, TerminalSink};
use config::{store::ChatBotConfig, structure::OutputFormat};
use tokio::io::{AsyncBufReadExt, BufReader};
use utils::log::Logger;

mod bot;
mod chat;
mod config;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    let mut config = ChatBotConfig::read(path)?;

    let level = config.log.level_filter();
    Logger::init(level.unwrap_or(None));
    if let Err(level) = level {
        log::warn!("unknown log level \"{level}\", falling back to info");
    }

    let sink: Arc<dyn RenderSink> = match config.bot.output {
        OutputFormat::Terminal => Arc::new(TerminalSink::new(
            config.bot.name.clone(),
            config.bot.timezone,
        )),
        OutputFormat::Html => Arc::new(HtmlSink::new(std::io::stdout(), config.bot.timezone)),
    };

    let bot = ChatBot::new(&config.bot, sink).await;
    bot.open();

    let mut pending: Vec<PendingReply> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        match line {
            "/quit" | "/exit" => break,
            "/open" => bot.open(),
            "/close" => bot.close(),
            "/toggle" => bot.toggle(),
            "/cancel" => pending.iter().for_each(PendingReply::cancel),
            "/history" => bot.replay().await,
            "/reload" => match config.update() {
                Ok(true) => log::info!("config changed on disk, restart to apply it"),
                Ok(false) => log::info!("config unchanged"),
                Err(why) => log::warn!("failed to reload config: {why:?}"),
            },
            command if command.starts_with('/') => match bot.quick_action(&command[1..]).await {
                Ok(reply) => pending.push(reply),
                Err(why) => log::warn!("{why}"),
            },
            message => {
                if let Some(reply) = bot.send(message).await {
                    pending.push(reply);
                }
            }
        }

        pending.retain(|reply| !reply.is_finished());
    }

    // let replies that are already typing finish before leaving
    let results = futures::future::join_all(pending.into_iter().map(PendingReply::wait)).await;
    for result in results {
        if let Err(why) = result {
            log::error!("{why:?}");
        }
    }

    bot.shutdown().await;

    Ok(())
}
