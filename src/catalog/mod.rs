// SPDX-License-Identifier: MPL-2.0
//! Catalog module: the read-only, ordered set of media records for a session.
//!
//! The catalog is loaded once (see [`loader`]) and never mutated afterwards.
//! Items are shared as `Arc` so filtered result lists and viewer snapshots
//! can reference them without copying record data.

pub mod item;
pub mod loader;

pub use item::{MediaItem, MediaKind, METADATA_PLACEHOLDER};
pub use loader::{embedded_catalog, load_catalog, parse_catalog_document};

use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Top-level shape of the catalog document.
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    pub items: Vec<MediaItem>,
}

/// The full ordered collection of media records available to a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Arc<MediaItem>>,
}

impl Catalog {
    /// Builds a catalog from raw items, preserving their order.
    ///
    /// Duplicate ids violate the catalog invariant; the first occurrence
    /// wins and later ones are dropped with a logged warning, since the
    /// catalog is read-only input and refusing it would only break the
    /// fallback path.
    #[must_use]
    pub fn from_items(items: Vec<MediaItem>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        let mut unique = Vec::with_capacity(items.len());
        for item in items {
            if seen.insert(item.id.clone()) {
                unique.push(Arc::new(item));
            } else {
                eprintln!("Dropping catalog item with duplicate id: {}", item.id);
            }
        }
        Self { items: unique }
    }

    /// Returns all items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[Arc<MediaItem>] {
        &self.items
    }

    /// Returns the item with the given id, if present.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<Arc<MediaItem>> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    /// Returns the number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct years present in the catalog, newest first.
    ///
    /// Used to populate the date filter dropdown. Years are the first four
    /// bytes of `created`; values too short or split mid-character there
    /// contribute nothing.
    #[must_use]
    pub fn years(&self) -> Vec<String> {
        let mut years: Vec<String> = self
            .items
            .iter()
            .filter_map(|item| item.created.get(..4))
            .map(str::to_string)
            .collect();
        years.sort();
        years.dedup();
        years.reverse();
        years
    }

    /// Distinct model labels present in the catalog, ascending.
    ///
    /// Items without a model do not contribute an entry.
    #[must_use]
    pub fn models(&self) -> Vec<String> {
        let mut models: Vec<String> = self
            .items
            .iter()
            .filter_map(|item| item.model.clone())
            .collect();
        models.sort();
        models.dedup();
        models
    }
}
