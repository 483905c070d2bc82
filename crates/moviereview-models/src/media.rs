use serde::{Deserialize, Serialize};

use crate::ids::new_id;

/// Attributes shared by every kind of catalogued media.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Media {
    id: String,
    name: String,
    genre: String,
}

impl Media {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            genre: genre.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }
}
