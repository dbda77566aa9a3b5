//! The in-memory event collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GigcalError, GigcalResult};
use crate::event::Event;

/// An ordered collection of events for one session.
///
/// Insertion order is preserved and duplicates are permitted; an event's
/// position is its only handle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Event> {
        self.events.get_mut(index)
    }

    /// Append an event to the end of the collection.
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Remove and return the event at `index`, shifting later events left.
    ///
    /// An out-of-range index leaves the collection unchanged.
    pub fn remove_at(&mut self, index: usize) -> GigcalResult<Event> {
        if index >= self.events.len() {
            return Err(GigcalError::InvalidIndex {
                index,
                len: self.events.len(),
            });
        }
        Ok(self.events.remove(index))
    }

    /// All events whose calendar date equals `date`, ignoring time-of-day,
    /// in their stored order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.time.date() == date).collect()
    }

    /// Append every event from `other`, preserving the order of both stores.
    pub fn merge(&mut self, other: EventStore) {
        self.events.extend(other.events);
    }
}
