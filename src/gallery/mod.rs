// Card gallery domain: records, per-card like state, persistence and the container model.
// Nothing here touches egui; views/ draws this state and feeds user intents back in.

pub mod card;
pub mod confirm;
pub mod error;
pub mod event;
pub mod item;
pub mod model;
pub mod seed;
pub mod storage;

pub use card::{CardId, CardRecord};
pub use confirm::{Decision, DeleteConfirmation};
pub use error::{RenderError, StoreError};
pub use item::Card;
pub use model::{AddMode, Gallery, Stats};
pub use storage::{FileStore, LikeStore};
