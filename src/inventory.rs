use log::debug;

use crate::FinderError;

/// Result of an `add_item` call that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The normalized item was appended
    Added(String),
    /// The input was blank after trimming
    Ignored,
}

/// The ingredients the user has on hand
///
/// Entries are trimmed and lower-cased on the way in, so equality here is
/// case-insensitive equality of the raw input. Order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, raw: &str) -> Result<AddOutcome, FinderError> {
        let item = normalize(raw);
        if item.is_empty() {
            return Ok(AddOutcome::Ignored);
        }

        if self.contains(&item) {
            debug!("Rejected duplicate inventory item '{}'", item);
            return Err(FinderError::DuplicateItem(item));
        }

        debug!("Added '{}' to inventory", item);
        self.items.push(item.clone());
        Ok(AddOutcome::Added(item))
    }

    /// Remove the exact matching entry; returns whether anything was removed
    pub fn remove_item(&mut self, item: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|existing| existing != item);
        before != self.items.len()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Comma-joined list, as sent in the `ingredients` query parameter
    pub fn joined(&self) -> String {
        self.items.join(",")
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
