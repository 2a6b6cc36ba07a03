use teloxide::prelude::*;
use crate::utils::feedback::CommandFeedback;

pub async fn handle_general_message(
    bot: Bot,
    msg: Message,
) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        // Only malformed commands get a reply; ordinary chatter is ignored
        if text.starts_with('/') {
            let command = text.split_whitespace().next().unwrap_or(text);
            CommandFeedback::new(bot, msg.chat.id)
                .info(&format!("Неизвестная команда: {command}. Список команд: /help"))
                .await?;
        }
    }

    Ok(())
}
