use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ui_constants::MAX_TITLE_CHARS;

/// Stable card identity. Seed cards carry short fixed ids, user-added cards get a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CardId,
    pub title: String,
    #[serde(default, rename = "liked")]
    pub initial_liked: bool,
}

impl CardRecord {
    pub fn new(id: impl Into<CardId>, title: impl Into<String>, initial_liked: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            initial_liked,
        }
    }

    /// Builds a fresh unliked card from user input.
    /// Returns None when the title is blank after trimming.
    pub fn from_input(input: &str) -> Option<Self> {
        let title = normalize_title(input)?;
        Some(Self {
            id: CardId::generate(),
            title,
            initial_liked: false,
        })
    }
}

/// Trims and clamps a title to `MAX_TITLE_CHARS` characters.
pub fn normalize_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_TITLE_CHARS).collect())
}
