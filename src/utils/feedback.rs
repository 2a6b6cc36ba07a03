use teloxide::prelude::*;
use teloxide::types::ParseMode;
use crate::utils::markdown::escape_markdown;

/// Feedback types for different command outcomes
#[derive(Debug, Clone)]
pub enum FeedbackType {
    Success,
    Error,
    Info,
}

impl FeedbackType {
    fn emoji(&self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
        }
    }
}

/// Centralized reply helper for bot commands
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Send plain text, escaping everything
    pub async fn send(&self, feedback_type: FeedbackType, message: &str) -> ResponseResult<Message> {
        self.send_markdown(feedback_type, &escape_markdown(message)).await
    }

    /// Send text that is already valid MarkdownV2
    pub async fn send_markdown(&self, feedback_type: FeedbackType, markdown: &str) -> ResponseResult<Message> {
        let formatted_message = format!("{} {}", feedback_type.emoji(), markdown);

        self.bot
            .send_message(self.chat_id, formatted_message)
            .parse_mode(ParseMode::MarkdownV2)
            .await
    }

    /// Send info feedback
    pub async fn info(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Info, message).await
    }

    /// Send validation error with a usage hint rendered as code
    pub async fn usage_error(&self, error: &str, example: &str) -> ResponseResult<Message> {
        let message = format!(
            "{}\n\n💡 {} {}",
            escape_markdown(error),
            escape_markdown("Пример:"),
            crate::utils::markdown::inline_code(example)
        );
        self.send_markdown(FeedbackType::Error, &message).await
    }
}
