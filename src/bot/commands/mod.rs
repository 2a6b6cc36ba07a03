pub mod add;
pub mod done;
pub mod event;
pub mod exclude;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Команды бота:")]
pub enum Command {
    #[command(description = "Показать эту справку")]
    Help,
    #[command(description = "Начать работу с ботом")]
    Start,
    #[command(description = "Создать событие: Название | 31 января 20:00, 1 февраля 18:00")]
    Event(String),
    #[command(description = "Исключить неподходящее время: 31 января 20:00")]
    Exclude(String),
    #[command(description = "Предложить ещё один вариант: 2 февраля 19:00")]
    Add(String),
    #[command(description = "Завершить опрос и показать общее время")]
    Done,
}
