//! The per-chat scheduling poll.
//!
//! An [`EventCoordinator`] owns an [`EventStore`] behind a single mutex. Each
//! operation takes the lock once, reads the chat's event, and writes back only
//! on success, so a refused command never leaves a partial change behind and
//! concurrent commands for one chat cannot interleave.

use crate::error::{SchedulingError, SchedulingResult};
use crate::store::{ChatKey, Event, EventStore, InMemoryEventStore, ParticipantId};
use crate::utils::datetime::{Clock, SystemClock, TimePoint, parse_time_point_at};
use crate::utils::validation::{split_option_list, split_proposal_args, validate_event_name};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// Outcome of a successful proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub event: Event,
    /// Inputs that did not parse, in the order they were given.
    pub rejected: Vec<String>,
}

pub struct EventCoordinator<S: EventStore = InMemoryEventStore> {
    store: Mutex<S>,
    clock: Box<dyn Clock>,
}

impl EventCoordinator<InMemoryEventStore> {
    /// Coordinator over a fresh in-memory store and the host clock.
    pub fn in_memory() -> Self {
        Self::new(InMemoryEventStore::new(), SystemClock)
    }
}

impl<S: EventStore> EventCoordinator<S> {
    pub fn new(store: S, clock: impl Clock + 'static) -> Self {
        Self {
            store: Mutex::new(store),
            clock: Box::new(clock),
        }
    }

    fn store(&self) -> MutexGuard<'_, S> {
        // The store holds plain data, so a panic elsewhere cannot leave it torn.
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn parse(&self, raw: &str) -> Option<TimePoint> {
        parse_time_point_at(raw, self.clock.now())
    }

    /// Starts a new poll for `chat`, replacing any live one.
    ///
    /// `raw_options` is a comma-separated list of date expressions. Fails with
    /// [`SchedulingError::NoValidDates`] if none of them parse, or
    /// [`SchedulingError::MalformedProposal`] if `name` is blank; either way
    /// the previous event (if any) is kept.
    pub fn propose(&self, chat: ChatKey, name: &str, raw_options: &str) -> SchedulingResult<Proposal> {
        let name = name.trim();
        if validate_event_name(name).is_err() {
            return Err(SchedulingError::MalformedProposal);
        }

        let mut options = HashSet::new();
        let mut rejected = Vec::new();

        for raw in split_option_list(raw_options) {
            match self.parse(&raw) {
                Some(point) => {
                    options.insert(point);
                }
                None => rejected.push(raw),
            }
        }

        if options.is_empty() {
            return Err(SchedulingError::NoValidDates);
        }

        let event = Event::new(name, options);
        self.store().set(chat, event.clone());
        tracing::debug!(
            "Event '{}' proposed in chat {} with {} options, {} rejected",
            name,
            chat,
            event.options.len(),
            rejected.len()
        );

        Ok(Proposal { event, rejected })
    }

    /// Like [`propose`](Self::propose) but takes the raw
    /// `"<name> | <dates>"` argument string.
    pub fn propose_from_args(&self, chat: ChatKey, args: &str) -> SchedulingResult<Proposal> {
        let (name, options) =
            split_proposal_args(args).map_err(|_| SchedulingError::MalformedProposal)?;
        self.propose(chat, &name, &options)
    }

    /// Records that `participant` cannot make the slot described by `raw`.
    ///
    /// Excluding a slot twice is harmless. A slot that parses but is not on
    /// offer fails with [`SchedulingError::OptionNotOffered`] carrying `raw`, so
    /// the caller can suggest adding it instead.
    pub fn exclude_option(
        &self,
        chat: ChatKey,
        participant: ParticipantId,
        raw: &str,
    ) -> SchedulingResult<TimePoint> {
        let mut store = self.store();
        let mut event = store.get(chat).ok_or(SchedulingError::NoActiveEvent)?;
        let point = self
            .parse(raw)
            .ok_or_else(|| SchedulingError::unparsable(raw))?;

        if !event.options.contains(&point) {
            return Err(SchedulingError::not_offered(raw));
        }

        event.exclusions.entry(participant).or_default().insert(point);
        store.set(chat, event);
        Ok(point)
    }

    /// Adds the slot described by `raw` to the live event's options.
    pub fn add_option(&self, chat: ChatKey, raw: &str) -> SchedulingResult<TimePoint> {
        let mut store = self.store();
        let mut event = store.get(chat).ok_or(SchedulingError::NoActiveEvent)?;
        let point = self
            .parse(raw)
            .ok_or_else(|| SchedulingError::unparsable(raw))?;

        if event.options.insert(point) {
            store.set(chat, event);
        }
        Ok(point)
    }

    /// Closes the chat's poll and returns the slots nobody excluded, sorted.
    ///
    /// An empty list means there is no common time; the event is removed
    /// either way.
    pub fn finalize(&self, chat: ChatKey) -> SchedulingResult<Vec<TimePoint>> {
        let event = self
            .store()
            .delete(chat)
            .ok_or(SchedulingError::NoActiveEvent)?;
        Ok(event.available())
    }

    /// Snapshot of the chat's live event.
    pub fn event(&self, chat: ChatKey) -> Option<Event> {
        self.store().get(chat)
    }

    /// Number of chats with a live event.
    pub fn active_events(&self) -> usize {
        self.store().len()
    }
}
