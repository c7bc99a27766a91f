// Delete confirmation as a request/decision pair instead of a blocking prompt.
// The view keeps the request alive across frames until the user answers.

use super::card::CardId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub card_id: CardId,
    pub title: String,
}

impl DeleteConfirmation {
    pub fn prompt(&self) -> String {
        format!("Delete \"{}\"?", self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Declined,
}
