// Single card: owns its like state, persists it, and reports changes to the gallery.

use std::sync::mpsc::Sender;

use strum::{Display, EnumIter};

use super::card::CardId;
use super::confirm::{Decision, DeleteConfirmation};
use super::event::CardEvent;
use super::storage::LikeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum LikeState {
    #[strum(serialize = "liked")]
    Liked,
    #[strum(serialize = "not liked")]
    NotLiked,
}

impl LikeState {
    pub fn from_bool(liked: bool) -> Self {
        if liked {
            LikeState::Liked
        } else {
            LikeState::NotLiked
        }
    }

    pub fn is_liked(self) -> bool {
        self == LikeState::Liked
    }

    pub fn toggled(self) -> Self {
        match self {
            LikeState::Liked => LikeState::NotLiked,
            LikeState::NotLiked => LikeState::Liked,
        }
    }
}

/// What the gallery hands a card. A missing sender disables that feature;
/// without `on_delete` no delete control is drawn.
#[derive(Debug, Clone)]
pub struct CardProps {
    pub card_id: CardId,
    pub title: String,
    pub initial_liked: bool,
    pub on_like_change: Option<Sender<CardEvent>>,
    pub on_delete: Option<Sender<CardEvent>>,
}

impl CardProps {
    pub fn new(card_id: CardId, title: impl Into<String>) -> Self {
        Self {
            card_id,
            title: title.into(),
            initial_liked: false,
            on_like_change: None,
            on_delete: None,
        }
    }
}

#[derive(Debug)]
pub struct Card {
    props: CardProps,
    state: LikeState,
    fault_armed: bool,
}

impl Card {
    /// Resolves the starting state once: persisted flag wins over `initial_liked`.
    pub fn mount(props: CardProps, store: &LikeStore) -> Self {
        let liked = store.resolve(&props.card_id, props.initial_liked);
        Self {
            props,
            state: LikeState::from_bool(liked),
            fault_armed: false,
        }
    }

    pub fn id(&self) -> &CardId {
        &self.props.card_id
    }

    pub fn title(&self) -> &str {
        &self.props.title
    }

    pub fn state(&self) -> LikeState {
        self.state
    }

    pub fn is_liked(&self) -> bool {
        self.state.is_liked()
    }

    pub fn can_delete(&self) -> bool {
        self.props.on_delete.is_some()
    }

    pub fn toggle_like(&mut self, store: &mut LikeStore) -> LikeState {
        self.state = self.state.toggled();
        let liked = self.state.is_liked();
        store.set(&self.props.card_id, liked);
        if let Some(tx) = &self.props.on_like_change {
            let _ = tx.send(CardEvent::LikeChanged {
                id: self.props.card_id.clone(),
                liked,
            });
        }
        log::info!("Card \"{}\" is now {}", self.props.title, self.state);
        self.state
    }

    /// First step of deletion. None when this card has no delete handler.
    pub fn request_delete(&self) -> Option<DeleteConfirmation> {
        self.props.on_delete.as_ref()?;
        Some(DeleteConfirmation {
            card_id: self.props.card_id.clone(),
            title: self.props.title.clone(),
        })
    }

    /// Second step of deletion. Returns true when the card was deleted.
    pub fn resolve_delete(&self, decision: Decision, store: &mut LikeStore) -> bool {
        let Some(tx) = &self.props.on_delete else {
            return false;
        };
        if decision != Decision::Confirmed {
            log::debug!("Delete of \"{}\" declined", self.props.title);
            return false;
        }
        store.remove(&self.props.card_id);
        let _ = tx.send(CardEvent::Deleted {
            id: self.props.card_id.clone(),
        });
        true
    }

    /// Makes the next render of this card fail once.
    pub fn arm_fault(&mut self) {
        log::warn!("Render fault armed on card \"{}\"", self.props.title);
        self.fault_armed = true;
    }

    pub fn take_fault(&mut self) -> bool {
        std::mem::take(&mut self.fault_armed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use strum::IntoEnumIterator;

    fn props(id: &str, initial_liked: bool) -> CardProps {
        CardProps {
            initial_liked,
            ..CardProps::new(CardId::new(id), format!("Card {id}"))
        }
    }

    #[test]
    fn persisted_flag_overrides_default() {
        let mut store = LikeStore::in_memory();
        store.set(&CardId::new("1"), false);
        store.set(&CardId::new("2"), true);

        assert!(!Card::mount(props("1", true), &store).is_liked());
        assert!(Card::mount(props("2", false), &store).is_liked());
        assert!(Card::mount(props("3", true), &store).is_liked());
    }

    #[test]
    fn double_toggle_restores_original() {
        for start in LikeState::iter() {
            let mut store = LikeStore::in_memory();
            let mut card = Card::mount(props("x", start.is_liked()), &store);

            card.toggle_like(&mut store);
            assert_eq!(card.state(), start.toggled());
            assert_eq!(store.get(card.id()), Some(!start.is_liked()));

            card.toggle_like(&mut store);
            assert_eq!(card.state(), start);
            assert_eq!(store.get(card.id()), Some(start.is_liked()));
        }
    }

    #[test]
    fn toggle_reports_to_listener() {
        let (tx, rx) = mpsc::channel();
        let mut store = LikeStore::in_memory();
        let mut card = Card::mount(
            CardProps {
                on_like_change: Some(tx),
                ..props("7", false)
            },
            &store,
        );
        card.toggle_like(&mut store);
        assert_eq!(
            rx.try_recv().unwrap(),
            CardEvent::LikeChanged {
                id: CardId::new("7"),
                liked: true
            }
        );
    }

    #[test]
    fn toggle_without_listener_still_persists() {
        let mut store = LikeStore::in_memory();
        let mut card = Card::mount(props("8", false), &store);
        assert_eq!(card.toggle_like(&mut store), LikeState::Liked);
        assert_eq!(store.get(&CardId::new("8")), Some(true));
    }

    #[test]
    fn delete_needs_a_handler() {
        let store = LikeStore::in_memory();
        let card = Card::mount(props("1", false), &store);
        assert!(!card.can_delete());
        assert!(card.request_delete().is_none());
    }

    #[test]
    fn declined_delete_keeps_everything() {
        let (tx, rx) = mpsc::channel();
        let mut store = LikeStore::in_memory();
        store.set(&CardId::new("1"), true);
        let card = Card::mount(
            CardProps {
                on_delete: Some(tx),
                ..props("1", false)
            },
            &store,
        );
        let req = card.request_delete().unwrap();
        assert_eq!(req.prompt(), "Delete \"Card 1\"?");

        assert!(!card.resolve_delete(Decision::Declined, &mut store));
        assert_eq!(store.get(&CardId::new("1")), Some(true));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn confirmed_delete_clears_flag_and_notifies() {
        let (tx, rx) = mpsc::channel();
        let mut store = LikeStore::in_memory();
        store.set(&CardId::new("1"), true);
        let card = Card::mount(
            CardProps {
                on_delete: Some(tx),
                ..props("1", false)
            },
            &store,
        );
        assert!(card.resolve_delete(Decision::Confirmed, &mut store));
        assert_eq!(store.raw(&CardId::new("1")), None);
        assert_eq!(
            rx.try_recv().unwrap(),
            CardEvent::Deleted {
                id: CardId::new("1")
            }
        );
    }

    #[test]
    fn armed_fault_fires_once() {
        let store = LikeStore::in_memory();
        let mut card = Card::mount(props("1", false), &store);
        assert!(!card.take_fault());
        card.arm_fault();
        assert!(card.take_fault());
        assert!(!card.take_fault());
    }
}
