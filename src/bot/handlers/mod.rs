pub mod general_message;
pub mod message;

use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};
use crate::services::coordinator::EventCoordinator;

type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub struct BotHandler {
    pub coordinator: Arc<EventCoordinator>,
}

impl BotHandler {
    pub fn new(coordinator: Arc<EventCoordinator>) -> Self {
        Self { coordinator }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let coordinator = self.coordinator.clone();

        Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: crate::bot::commands::Command| {
                        let coordinator = coordinator.clone();
                        async move {
                            message::command_handler(bot, msg, cmd, coordinator)
                                .await
                                .map_err(HandlerError::from)
                        }
                    }),
            )
            .branch(dptree::endpoint(|bot: Bot, msg: Message| async move {
                general_message::handle_general_message(bot, msg)
                    .await
                    .map_err(HandlerError::from)
            }))
    }
}
