//! Form/List Controller
//!
//! Owns the ephemeral screen state: two free-text input fields and the
//! currently displayed item list. Mediates between user input and the
//! storage adapter; the only business logic here is input validation.
//!
//! Storage failures never propagate out of the controller: they are
//! logged and the screen state is left exactly as it was (fields keep
//! their values, the list keeps its previous contents). Callers observe
//! what happened through the returned [`SaveOutcome`].

use crate::item::{Item, parse_quantity};
use crate::storage::SqliteStore;

/// Why a save attempt was skipped without touching the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Name field was empty after trimming
    EmptyName,
    /// Quantity field did not parse as a base-10 integer
    InvalidQuantity,
}

/// Settled result of one save action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Item persisted and the list refreshed; both fields cleared
    Saved { id: i64 },
    /// Validation failed; no insert was attempted
    Rejected(Rejection),
    /// The store rejected the insert or the refresh; state unchanged
    Failed,
}

/// The form-and-list screen.
///
/// Constructed once with an already-initialized store (the store handle
/// is passed explicitly, not reached through ambient state).
pub struct ItemScreen {
    store: SqliteStore,
    /// Name input field, as typed
    pub name_input: String,
    /// Quantity input field, as typed (free text, parsed on save)
    pub quantity_input: String,
    /// Items currently displayed
    pub items: Vec<Item>,
}

impl ItemScreen {
    pub fn new(store: SqliteStore) -> Self {
        Self {
            store,
            name_input: String::new(),
            quantity_input: String::new(),
            items: Vec::new(),
        }
    }

    /// Load the list once at screen start.
    ///
    /// On a fetch failure the error is logged and the list stays empty.
    pub fn mount(&mut self) {
        match self.store.fetch_all() {
            Ok(items) => self.items = items,
            Err(e) => tracing::error!("Failed to load items on mount: {}", e),
        }
    }

    /// Run one save action: validate, insert, refresh, clear the fields.
    ///
    /// The insert always settles before the refresh is issued. Validation
    /// rejects are silent no-ops (logged at debug); storage failures are
    /// logged and leave every field and the list untouched.
    pub fn save(&mut self) -> SaveOutcome {
        let name = self.name_input.trim();
        if name.is_empty() {
            tracing::debug!("Save skipped: empty name");
            return SaveOutcome::Rejected(Rejection::EmptyName);
        }

        let quantity = match parse_quantity(&self.quantity_input) {
            Some(q) => q,
            None => {
                tracing::debug!(
                    "Save skipped: quantity {:?} is not an integer",
                    self.quantity_input
                );
                return SaveOutcome::Rejected(Rejection::InvalidQuantity);
            }
        };

        let id = match self.store.insert_item(name, quantity) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Failed to insert item: {}", e);
                return SaveOutcome::Failed;
            }
        };

        match self.store.fetch_all() {
            Ok(items) => {
                self.items = items;
                self.name_input.clear();
                self.quantity_input.clear();
                SaveOutcome::Saved { id }
            }
            Err(e) => {
                tracing::error!("Failed to refresh items after insert: {}", e);
                SaveOutcome::Failed
            }
        }
    }
}
