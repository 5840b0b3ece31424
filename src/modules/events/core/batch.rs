use crate::modules::events::core::event::Event;
use serde::{Deserialize, Serialize};

/// The JSON array of events carried by a single ingest request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch(Vec<Event>);

impl Batch {
    pub fn new(events: Vec<Event>) -> Self {
        Self(events)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One acknowledgement per event, in the order the events were sent.
    pub fn acks(&self) -> Vec<EventAck> {
        vec![EventAck::ACCEPTED; self.len()]
    }

    pub fn into_events(self) -> Vec<Event> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAck {
    pub status: u16,
}

impl EventAck {
    pub const ACCEPTED: Self = Self { status: 202 };
}
