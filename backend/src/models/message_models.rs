use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact form submission as it sits in the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: u64, // assigned on append, strictly increasing within a file
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>, // when the server received it
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Newest first. Equal timestamps fall back to the id so the order is stable.
pub fn sort_newest_first(messages: &mut [ContactMessage]) {
    messages.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.id.cmp(&a.id))
    });
}
