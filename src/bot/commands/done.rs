use teloxide::prelude::*;
use teloxide::types::ParseMode;
use crate::bot::handlers::message::Invocation;
use crate::bot::replies;
use crate::services::coordinator::EventCoordinator;
use crate::utils::{
    feedback::{CommandFeedback, FeedbackType},
    logging::{log_command_rejected, log_command_start, log_command_success},
};

pub async fn handle_done(
    bot: Bot,
    msg: Message,
    coordinator: &EventCoordinator,
) -> ResponseResult<()> {
    let who = Invocation::from_message(&msg);
    log_command_start("done", &who.username, who.user_id, who.chat_id, None);

    match coordinator.finalize(who.chat_id) {
        Ok(available) => {
            bot.send_message(msg.chat.id, replies::resolved(&available))
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
            let details = format!("{} common slots", available.len());
            log_command_success("done", &who.username, who.user_id, who.chat_id, Some(&details));
        }
        Err(e) => {
            log_command_rejected("done", &who.username, who.user_id, who.chat_id, e.kind());
            CommandFeedback::new(bot, msg.chat.id)
                .send_markdown(FeedbackType::Error, &replies::scheduling_error(&e))
                .await?;
        }
    }

    Ok(())
}
