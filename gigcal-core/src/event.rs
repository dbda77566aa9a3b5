//! The event data model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A titled occurrence at a point in time with a location string.
///
/// Events carry no identity field; an event is addressed by its position in
/// the [`EventStore`](crate::EventStore). Empty strings are valid everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    /// Wall-clock date and time, no timezone semantics.
    pub time: NaiveDateTime,
    pub location: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        time: NaiveDateTime,
        location: impl Into<String>,
    ) -> Self {
        Event {
            title: title.into(),
            time,
            location: location.into(),
        }
    }

    /// The sentinel used when an events file carries an unparsable time:
    /// the Unix epoch, 1970-01-01 00:00:00.
    pub fn default_time() -> NaiveDateTime {
        chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.naive_utc()
    }
}
