use teloxide::prelude::*;
use crate::bot::handlers::message::Invocation;
use crate::bot::replies::{self, EXCLUDE_EXAMPLE};
use crate::error::SchedulingError;
use crate::services::coordinator::EventCoordinator;
use crate::utils::{
    feedback::{CommandFeedback, FeedbackType},
    logging::{log_command_rejected, log_command_start, log_command_success},
};

pub async fn handle_exclude(
    bot: Bot,
    msg: Message,
    args: String,
    coordinator: &EventCoordinator,
) -> ResponseResult<()> {
    let who = Invocation::from_message(&msg);
    log_command_start("exclude", &who.username, who.user_id, who.chat_id, Some(&args));
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    // No event trumps missing arguments, matching the order users hit them in
    if coordinator.event(who.chat_id).is_none() {
        log_command_rejected("exclude", &who.username, who.user_id, who.chat_id, "NoActiveEvent");
        let text = replies::scheduling_error(&SchedulingError::NoActiveEvent);
        feedback.send_markdown(FeedbackType::Error, &text).await?;
        return Ok(());
    }

    let raw = args.trim();
    if raw.is_empty() {
        feedback.usage_error("Укажите время, которое вам не подходит.", EXCLUDE_EXAMPLE).await?;
        return Ok(());
    }

    match coordinator.exclude_option(who.chat_id, who.user_id, raw) {
        Ok(point) => {
            feedback.send_markdown(FeedbackType::Success, &replies::excluded(&point)).await?;
            log_command_success("exclude", &who.username, who.user_id, who.chat_id, Some(&point.to_string()));
        }
        Err(e) => {
            log_command_rejected("exclude", &who.username, who.user_id, who.chat_id, e.kind());
            let feedback_type = match e {
                SchedulingError::OptionNotOffered { .. } => FeedbackType::Info,
                _ => FeedbackType::Error,
            };
            feedback.send_markdown(feedback_type, &replies::scheduling_error(&e)).await?;
        }
    }

    Ok(())
}
