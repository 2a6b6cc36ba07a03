use super::{ChatKey, Event, EventStore};
use crate::utils::logging::log_store_operation;
use std::collections::HashMap;

/// Volatile store; everything is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: HashMap<ChatKey, Event>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStore for InMemoryEventStore {
    fn get(&self, chat: ChatKey) -> Option<Event> {
        self.events.get(&chat).cloned()
    }

    fn set(&mut self, chat: ChatKey, event: Event) {
        let details = format!("chat {} options={}", chat, event.options.len());
        log_store_operation("SET", Some(&details));
        self.events.insert(chat, event);
    }

    fn delete(&mut self, chat: ChatKey) -> Option<Event> {
        let removed = self.events.remove(&chat);
        let details = format!("chat {} existed={}", chat, removed.is_some());
        log_store_operation("DELETE", Some(&details));
        removed
    }

    fn len(&self) -> usize {
        self.events.len()
    }
}
