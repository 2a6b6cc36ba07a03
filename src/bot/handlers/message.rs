use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use crate::bot::commands::{self, Command};
use crate::bot::replies;
use crate::services::coordinator::EventCoordinator;
use crate::utils::logging::log_command_error;

/// Who issued a command and where.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub chat_id: i64,
    pub user_id: u64,
    pub username: String,
}

impl Invocation {
    pub fn from_message(msg: &Message) -> Self {
        let user = msg.from();
        Self {
            chat_id: msg.chat.id.0,
            user_id: user.map(|u| u.id.0).unwrap_or(0),
            username: user
                .and_then(|u| u.username.clone())
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    coordinator: Arc<EventCoordinator>,
) -> ResponseResult<()> {
    let who = Invocation::from_message(&msg);
    let command = format!("{cmd:?}");
    let result = dispatch(bot, msg, cmd, &coordinator).await;
    if let Err(e) = &result {
        log_command_error(&command, &who.username, who.user_id, who.chat_id, &e.to_string());
    }
    result
}

async fn dispatch(
    bot: Bot,
    msg: Message,
    cmd: Command,
    coordinator: &EventCoordinator,
) -> ResponseResult<()> {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            bot.send_message(msg.chat.id, replies::welcome())
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
        Command::Event(args) => {
            commands::event::handle_event(bot, msg, args, coordinator).await?;
        }
        Command::Exclude(args) => {
            commands::exclude::handle_exclude(bot, msg, args, coordinator).await?;
        }
        Command::Add(args) => {
            commands::add::handle_add(bot, msg, args, coordinator).await?;
        }
        Command::Done => {
            commands::done::handle_done(bot, msg, coordinator).await?;
        }
    }
    Ok(())
}
