// Gallery container: authoritative card list, aggregate liked-set, add form state
// and the receiving end of card events.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use super::card::{CardId, CardRecord};
use super::confirm::{Decision, DeleteConfirmation};
use super::error::RenderError;
use super::event::CardEvent;
use super::item::{Card, CardProps};
use super::storage::LikeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub liked: usize,
    pub not_liked: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AddMode {
    #[default]
    Idle,
    Editing { input: String },
}

pub struct Gallery {
    cards: Vec<CardRecord>,
    mounted: HashMap<CardId, Card>,
    liked: HashSet<CardId>,
    add_mode: AddMode,
    allow_delete: bool,
    tx: mpsc::Sender<CardEvent>,
    rx: mpsc::Receiver<CardEvent>,
}

impl Gallery {
    /// Loads `seed` and resolves the liked-set from persisted flags.
    pub fn new(seed: Vec<CardRecord>, store: &LikeStore) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut gallery = Self {
            cards: Vec::new(),
            mounted: HashMap::new(),
            liked: HashSet::new(),
            add_mode: AddMode::Idle,
            allow_delete: true,
            tx,
            rx,
        };
        gallery.initialize(seed, store);
        gallery
    }

    pub fn with_delete(mut self, allow_delete: bool) -> Self {
        self.allow_delete = allow_delete;
        self.mounted.clear();
        self
    }

    pub fn initialize(&mut self, seed: Vec<CardRecord>, store: &LikeStore) {
        let mut seen = HashSet::new();
        self.cards = seed
            .into_iter()
            .filter(|c| {
                let fresh = seen.insert(c.id.clone());
                if !fresh {
                    log::warn!("Skipping duplicate seed card id {}", c.id);
                }
                fresh
            })
            .collect();
        self.mounted.clear();
        self.resync(store);
        log::info!(
            "Gallery initialized with {} cards ({} liked)",
            self.cards.len(),
            self.liked.len()
        );
    }

    /// Rebuilds the liked-set from persisted flags of the current list.
    pub fn resync(&mut self, store: &LikeStore) {
        self.liked = self
            .cards
            .iter()
            .filter(|c| store.resolve(&c.id, c.initial_liked))
            .map(|c| c.id.clone())
            .collect();
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[cfg(test)]
    pub fn liked_ids(&self) -> &HashSet<CardId> {
        &self.liked
    }

    pub fn stats(&self) -> Stats {
        let total = self.cards.len();
        let liked = self.liked.len();
        Stats {
            total,
            liked,
            not_liked: total.saturating_sub(liked),
        }
    }

    fn props_for(&self, record: &CardRecord) -> CardProps {
        CardProps {
            initial_liked: record.initial_liked,
            on_like_change: Some(self.tx.clone()),
            on_delete: self.allow_delete.then(|| self.tx.clone()),
            ..CardProps::new(record.id.clone(), record.title.clone())
        }
    }

    /// Mounts card state for records that do not have one yet.
    pub fn mount_cards(&mut self, store: &LikeStore) {
        for record in &self.cards {
            if self.mounted.contains_key(&record.id) {
                continue;
            }
            let card = Card::mount(self.props_for(record), store);
            self.mounted.insert(record.id.clone(), card);
        }
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.mounted.get(id)
    }

    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.mounted.get_mut(id)
    }

    /// Visits mounted cards in display order, stopping at the first error.
    pub fn try_for_each_card<F>(&mut self, mut f: F) -> Result<(), RenderError>
    where
        F: FnMut(&mut Card) -> Result<(), RenderError>,
    {
        for record in &self.cards {
            if let Some(card) = self.mounted.get_mut(&record.id) {
                f(card)?;
            }
        }
        Ok(())
    }

    pub fn add_mode(&self) -> &AddMode {
        &self.add_mode
    }

    pub fn begin_add(&mut self) {
        if self.add_mode == AddMode::Idle {
            self.add_mode = AddMode::Editing {
                input: String::new(),
            };
        }
    }

    /// Pending input while the add form is open.
    pub fn input_mut(&mut self) -> Option<&mut String> {
        match &mut self.add_mode {
            AddMode::Editing { input } => Some(input),
            AddMode::Idle => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        matches!(&self.add_mode, AddMode::Editing { input } if !input.trim().is_empty())
    }

    pub fn cancel_add(&mut self) {
        self.add_mode = AddMode::Idle;
    }

    /// Adds a card from the pending input. Blank input leaves the form open.
    pub fn submit_add(&mut self, store: &LikeStore) -> Option<CardId> {
        let input = match &self.add_mode {
            AddMode::Editing { input } => input.clone(),
            AddMode::Idle => return None,
        };
        self.add_card(&input, store)
    }

    /// Appends an unliked card titled `title` (trimmed). No-op on blank titles.
    pub fn add_card(&mut self, title: &str, store: &LikeStore) -> Option<CardId> {
        let record = CardRecord::from_input(title)?;
        let id = record.id.clone();
        log::info!("Added card \"{}\" ({})", record.title, id);
        self.cards.push(record);
        self.add_mode = AddMode::Idle;
        self.mount_cards(store);
        self.resync(store);
        Some(id)
    }

    /// Removes the card with `id`. Returns false when no such card exists.
    pub fn delete_card(&mut self, id: &CardId, store: &LikeStore) -> bool {
        let Some(pos) = self.cards.iter().position(|c| &c.id == id) else {
            log::debug!("Delete ignored, no card {id}");
            return false;
        };
        let removed = self.cards.remove(pos);
        self.mounted.remove(id);
        self.liked.remove(id);
        self.resync(store);
        log::info!("Deleted card \"{}\" ({})", removed.title, id);
        true
    }

    pub fn report_like_change(&mut self, id: &CardId, liked: bool) {
        if !self.cards.iter().any(|c| &c.id == id) {
            log::debug!("Like change for unknown card {id} ignored");
            return;
        }
        if liked {
            self.liked.insert(id.clone());
        } else {
            self.liked.remove(id);
        }
    }

    pub fn toggle_like(&mut self, id: &CardId, store: &mut LikeStore) -> bool {
        let Some(card) = self.mounted.get_mut(id) else {
            return false;
        };
        card.toggle_like(store);
        self.poll_events(store);
        true
    }

    pub fn request_delete(&self, id: &CardId) -> Option<DeleteConfirmation> {
        self.card(id)?.request_delete()
    }

    /// Applies the user's answer to a pending delete confirmation.
    pub fn resolve_delete(
        &mut self,
        confirmation: &DeleteConfirmation,
        decision: Decision,
        store: &mut LikeStore,
    ) -> bool {
        let Some(card) = self.mounted.get(&confirmation.card_id) else {
            return false;
        };
        let deleted = card.resolve_delete(decision, store);
        self.poll_events(store);
        deleted
    }

    /// Drains card events. Returns how many were handled.
    pub fn poll_events(&mut self, store: &LikeStore) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.rx.try_recv() {
            log::debug!("Card event {event} for {}", event.id());
            match event {
                CardEvent::LikeChanged { id, liked } => self.report_like_change(&id, liked),
                CardEvent::Deleted { id } => {
                    self.delete_card(&id, store);
                }
            }
            handled += 1;
        }
        handled
    }
}
