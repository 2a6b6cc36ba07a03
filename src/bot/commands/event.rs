use teloxide::prelude::*;
use teloxide::types::ParseMode;
use crate::bot::handlers::message::Invocation;
use crate::bot::replies::{self, EVENT_EXAMPLE};
use crate::services::coordinator::EventCoordinator;
use crate::utils::{
    feedback::CommandFeedback,
    logging::{log_command_rejected, log_command_start, log_command_success, log_validation_error},
    validation::split_proposal_args,
};

pub async fn handle_event(
    bot: Bot,
    msg: Message,
    args: String,
    coordinator: &EventCoordinator,
) -> ResponseResult<()> {
    let who = Invocation::from_message(&msg);
    log_command_start("event", &who.username, who.user_id, who.chat_id, Some(&args));
    let feedback = CommandFeedback::new(bot.clone(), msg.chat.id);

    // Validate up front so the user sees which part is wrong
    if let Err(e) = split_proposal_args(&args) {
        log_validation_error("event", "args", &args, &e.to_string(), who.chat_id);
        feedback.usage_error("Укажите название и даты через «|».", EVENT_EXAMPLE).await?;
        return Ok(());
    }

    match coordinator.propose_from_args(who.chat_id, &args) {
        Ok(proposal) => {
            bot.send_message(msg.chat.id, replies::event_created(&proposal))
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
            let details = format!(
                "'{}' with {} options, {} rejected",
                proposal.event.name,
                proposal.event.options.len(),
                proposal.rejected.len()
            );
            log_command_success("event", &who.username, who.user_id, who.chat_id, Some(&details));
        }
        Err(e) => {
            log_command_rejected("event", &who.username, who.user_id, who.chat_id, e.kind());
            feedback
                .send_markdown(crate::utils::feedback::FeedbackType::Error, &replies::scheduling_error(&e))
                .await?;
        }
    }

    Ok(())
}
