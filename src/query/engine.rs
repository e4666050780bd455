// SPDX-License-Identifier: MPL-2.0
//! The filter + sort pipeline.
//!
//! [`filter_and_sort`] is a pure function from (catalog items, criteria) to
//! an ordered result list. Filtering applies the criteria's AND-combined
//! clauses; sorting is stable so ties keep their catalog order.
//!
//! Items whose `created` value does not parse as a date compare as earliest
//! under both date orderings, which places them last under `Newest` and
//! first under `Oldest`.

use crate::catalog::MediaItem;
use crate::query::criteria::{FilterCriteria, SortMode};
use std::cmp::Ordering;
use std::sync::Arc;

/// Filters `items` by `criteria` and sorts the survivors.
///
/// Returns a new list of shared handles; the input order is never mutated.
/// An empty input yields an empty result.
#[must_use]
pub fn filter_and_sort(items: &[Arc<MediaItem>], criteria: &FilterCriteria) -> Vec<Arc<MediaItem>> {
    let mut results: Vec<Arc<MediaItem>> = items
        .iter()
        .filter(|item| criteria.matches(item))
        .cloned()
        .collect();
    results.sort_by(|a, b| compare_items(a, b, criteria.sort));
    results
}

/// Comparator behind every sort mode. Exposed so the loader can apply the
/// default newest-first ordering at catalog build time.
#[must_use]
pub fn compare_items(a: &MediaItem, b: &MediaItem, mode: SortMode) -> Ordering {
    match mode {
        SortMode::Newest => b.created_date().cmp(&a.created_date()),
        SortMode::Oldest => a.created_date().cmp(&b.created_date()),
        SortMode::NameAsc => name_key(a).cmp(&name_key(b)),
        SortMode::NameDesc => name_key(b).cmp(&name_key(a)),
    }
}

// Case-insensitive stand-in for locale collation; deterministic everywhere.
fn name_key(item: &MediaItem) -> String {
    item.name.to_lowercase()
}
