//! Persisted history and favorites.
//!
//! The [`Library`] keeps two ordered lists of [`Metaphor`]s, each under its
//! own storage key:
//! - **history**: newest first, capped at [`MAX_HISTORY_ITEMS`]; older entries
//!   fall off the end silently
//! - **favorites**: newest first, unbounded
//!
//! The lists hold independent copies of the same metaphor. Toggling a
//! favorite rewrites both copies, and every operation returns the full
//! updated list(s) so callers replace their view wholesale.
//!
//! Persistence is best-effort: unreadable lists load as empty and failed
//! writes are logged, while the returned lists still carry the update.

use crate::core::state::Metaphor;
use crate::core::storage::{load_json, save_json, Storage};
use std::sync::Arc;

pub const MAX_HISTORY_ITEMS: usize = 10;

pub const HISTORY_KEY: &str = "metaphorever-history";
pub const FAVORITES_KEY: &str = "metaphorever-favorites";

/// Both lists after a favorite toggle
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteToggle {
    pub favorites: Vec<Metaphor>,
    pub history: Vec<Metaphor>,
}

pub struct Library {
    storage: Arc<dyn Storage>,
}

impl Library {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn history(&self) -> Vec<Metaphor> {
        self.load_list(HISTORY_KEY)
    }

    pub fn favorites(&self) -> Vec<Metaphor> {
        self.load_list(FAVORITES_KEY)
    }

    pub fn append_to_history(&self, metaphor: Metaphor) -> Vec<Metaphor> {
        let mut history = self.history();
        history.retain(|m| m.id != metaphor.id);
        history.insert(0, metaphor);
        history.truncate(MAX_HISTORY_ITEMS);

        self.save_list(HISTORY_KEY, &history);
        history
    }

    pub fn toggle_favorite(&self, metaphor: &Metaphor) -> FavoriteToggle {
        let updated = metaphor.toggled();

        let mut favorites = self.favorites();
        favorites.retain(|m| m.id != updated.id);
        if updated.is_favorite {
            favorites.insert(0, updated.clone());
        }

        let mut history = self.history();
        for entry in history.iter_mut().filter(|m| m.id == updated.id) {
            *entry = updated.clone();
        }
        history.truncate(MAX_HISTORY_ITEMS);

        log::debug!(
            "Toggled favorite for '{}' to {} ({} favorites)",
            updated.id,
            updated.is_favorite,
            favorites.len()
        );

        self.save_list(FAVORITES_KEY, &favorites);
        self.save_list(HISTORY_KEY, &history);

        FavoriteToggle { favorites, history }
    }

    fn load_list(&self, key: &str) -> Vec<Metaphor> {
        match load_json(self.storage.as_ref(), key) {
            Ok(Some(list)) => list,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to load '{key}', using an empty list: {e}");
                Vec::new()
            }
        }
    }

    fn save_list(&self, key: &str, list: &[Metaphor]) {
        if let Err(e) = save_json(self.storage.as_ref(), key, list) {
            log::error!("Failed to save '{key}' (continuing in memory): {e}");
        }
    }
}
