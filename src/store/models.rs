use crate::utils::datetime::TimePoint;
use std::collections::{HashMap, HashSet};

/// Key identifying the chat an event belongs to.
pub type ChatKey = i64;
/// Key identifying a participant within a chat.
pub type ParticipantId = u64;

/// One chat's scheduling poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub options: HashSet<TimePoint>,
    pub exclusions: HashMap<ParticipantId, HashSet<TimePoint>>,
}

impl Event {
    pub fn new(name: impl Into<String>, options: HashSet<TimePoint>) -> Self {
        Self {
            name: name.into(),
            options,
            exclusions: HashMap::new(),
        }
    }

    /// Candidate slots in chronological order.
    pub fn sorted_options(&self) -> Vec<TimePoint> {
        let mut options: Vec<TimePoint> = self.options.iter().copied().collect();
        options.sort();
        options
    }

    /// Slots `participant` has ruled out, empty if they have excluded nothing.
    pub fn exclusions_for(&self, participant: ParticipantId) -> HashSet<TimePoint> {
        self.exclusions
            .get(&participant)
            .cloned()
            .unwrap_or_default()
    }

    /// Options nobody excluded, sorted chronologically.
    pub fn available(&self) -> Vec<TimePoint> {
        let mut available: Vec<TimePoint> = self
            .options
            .iter()
            .filter(|option| !self.exclusions.values().any(|set| set.contains(option)))
            .copied()
            .collect();
        available.sort();
        available
    }
}
