use strum::Display;

use super::card::CardId;

/// Notification a card sends up to its gallery.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CardEvent {
    LikeChanged { id: CardId, liked: bool },
    Deleted { id: CardId },
}

impl CardEvent {
    pub fn id(&self) -> &CardId {
        match self {
            CardEvent::LikeChanged { id, .. } | CardEvent::Deleted { id } => id,
        }
    }
}
