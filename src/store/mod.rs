pub mod memory;
pub mod models;

pub use memory::InMemoryEventStore;
pub use models::{ChatKey, Event, ParticipantId};

/// Storage for the live event of each chat.
///
/// Implementations hold plain data; the coordinator serialises access, so
/// methods take `&mut self` and never need internal locking.
pub trait EventStore: Send {
    /// Returns a copy of the chat's live event.
    fn get(&self, chat: ChatKey) -> Option<Event>;

    /// Stores `event` as the chat's live event, replacing any previous one.
    fn set(&mut self, chat: ChatKey, event: Event);

    /// Removes the chat's live event, returning it if there was one.
    fn delete(&mut self, chat: ChatKey) -> Option<Event>;

    /// Number of chats with a live event.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
