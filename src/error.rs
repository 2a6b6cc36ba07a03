//! Errors returned by scheduling operations.
//!
//! Every variant describes a user-input problem the chat layer turns into
//! guidance; none of them leaves the event store modified.

use thiserror::Error;

/// Result type for scheduling operations.
pub type SchedulingResult<T> = Result<T, SchedulingError>;

/// Ways a scheduling command can be refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    /// None of the proposed dates could be parsed.
    #[error("no valid dates in proposal")]
    NoValidDates,

    /// The chat has no live event.
    #[error("no active event in this chat")]
    NoActiveEvent,

    /// The date text could not be parsed.
    #[error("could not parse date: {raw}")]
    UnparsableDate { raw: String },

    /// The date parsed but is not one of the event's options.
    #[error("option not offered: {raw}")]
    OptionNotOffered { raw: String },

    /// Proposal arguments lack a name or the `|` delimiter.
    #[error("proposal must look like '<name> | <dates>'")]
    MalformedProposal,
}

impl SchedulingError {
    /// Creates an unparsable date error.
    pub fn unparsable(raw: impl Into<String>) -> Self {
        Self::UnparsableDate { raw: raw.into() }
    }

    /// Creates an option not offered error.
    pub fn not_offered(raw: impl Into<String>) -> Self {
        Self::OptionNotOffered { raw: raw.into() }
    }

    /// Short machine-friendly tag, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoValidDates => "NoValidDates",
            Self::NoActiveEvent => "NoActiveEvent",
            Self::UnparsableDate { .. } => "UnparsableDate",
            Self::OptionNotOffered { .. } => "OptionNotOffered",
            Self::MalformedProposal => "MalformedProposal",
        }
    }
}
