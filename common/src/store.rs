use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::{ClosetItem, ItemId};

/// Coarse state of the most recent bulk fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    #[default]
    Unloaded,
    Loading,
    /// Last fetch succeeded.
    Idle,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("an item with id {0} already exists")]
    DuplicateId(ItemId),
    #[error("no numeric item ids left to allocate")]
    IdSpaceExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("failed to load items: {0}")]
    Backend(String),
}

/// Handed out by [`ItemStore::begin_fetch`]; only the latest ticket's result
/// is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// In-memory collection of closet items.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<ClosetItem>,
    status: LoadStatus,
    last_error: Option<String>,
    fetch_generation: u64,
    /// Highest numeric id seen so far.
    highest_id: Option<u64>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ClosetItem] {
        &self.items
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn get(&self, id: &ItemId) -> Option<&ClosetItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_item(&mut self, item: ClosetItem) -> Result<(), StoreError> {
        if self.get(&item.id).is_some() {
            return Err(StoreError::DuplicateId(item.id));
        }
        self.reserve_id(&item.id);
        self.items.push(item);
        Ok(())
    }

    /// Absent ids are ignored.
    pub fn remove_item(&mut self, id: &ItemId) {
        self.items.retain(|i| &i.id != id);
    }

    /// Replace the item with the same id in place. Returns false, changing
    /// nothing, when no such item exists.
    pub fn update_item(&mut self, item: ClosetItem) -> bool {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn replace_all(&mut self, items: Vec<ClosetItem>) {
        for item in &items {
            self.reserve_id(&item.id);
        }
        self.items = items;
    }

    /// A numeric id higher than any this store has seen. Fails once an id of
    /// `u64::MAX` has been seen, since every higher id would be out of range.
    pub fn allocate_id(&mut self) -> Result<ItemId, StoreError> {
        let next = match self.highest_id {
            Some(n) => n.checked_add(1).ok_or(StoreError::IdSpaceExhausted)?,
            None => 1,
        };
        self.highest_id = Some(next);
        Ok(ItemId(next.to_string()))
    }

    fn reserve_id(&mut self, id: &ItemId) {
        if let Ok(n) = id.0.parse::<u64>() {
            self.highest_id = self.highest_id.max(Some(n));
        }
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_generation += 1;
        self.status = LoadStatus::Loading;
        tracing::debug!(generation = self.fetch_generation, "item fetch started");
        FetchTicket(self.fetch_generation)
    }

    /// Apply a fetch result. Results for superseded tickets are dropped.
    /// Returns whether the result was applied.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<ClosetItem>, FetchError>,
    ) -> bool {
        if ticket.0 != self.fetch_generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.fetch_generation,
                "ignoring stale fetch result"
            );
            return false;
        }
        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "items loaded");
                self.replace_all(items);
                self.status = LoadStatus::Idle;
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("item fetch failed: {e}");
                self.status = LoadStatus::Error;
                self.last_error = Some(e.to_string());
            }
        }
        true
    }
}
