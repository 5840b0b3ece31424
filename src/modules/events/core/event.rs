use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// One submitted event. Its shape belongs to the sender and is never inspected.
/// Numbers keep their literal text, so integers wider than 64 bits survive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(pub Json);

impl From<Json> for Event {
    fn from(value: Json) -> Self {
        Self(value)
    }
}
