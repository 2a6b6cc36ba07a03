use teloxide::prelude::*;
use crate::bot::handlers::message::Invocation;
use crate::bot::replies::{self, ADD_EXAMPLE};
use crate::error::SchedulingError;
use crate::services::coordinator::EventCoordinator;
use crate::utils::{
    feedback::{CommandFeedback, FeedbackType},
    logging::{log_command_rejected, log_command_start, log_command_success},
};

pub async fn handle_add(
    bot: Bot,
    msg: Message,
    args: String,
    coordinator: &EventCoordinator,
) -> ResponseResult<()> {
    let who = Invocation::from_message(&msg);
    log_command_start("add", &who.username, who.user_id, who.chat_id, Some(&args));
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    if coordinator.event(who.chat_id).is_none() {
        log_command_rejected("add", &who.username, who.user_id, who.chat_id, "NoActiveEvent");
        let text = replies::scheduling_error(&SchedulingError::NoActiveEvent);
        feedback.send_markdown(FeedbackType::Error, &text).await?;
        return Ok(());
    }

    let raw = args.trim();
    if raw.is_empty() {
        feedback.usage_error("Укажите время, которое хотите добавить.", ADD_EXAMPLE).await?;
        return Ok(());
    }

    match coordinator.add_option(who.chat_id, raw) {
        Ok(point) => {
            feedback.send_markdown(FeedbackType::Success, &replies::added(&point)).await?;
            log_command_success("add", &who.username, who.user_id, who.chat_id, Some(&point.to_string()));
        }
        Err(e) => {
            log_command_rejected("add", &who.username, who.user_id, who.chat_id, e.kind());
            feedback.send_markdown(FeedbackType::Error, &replies::scheduling_error(&e)).await?;
        }
    }

    Ok(())
}
