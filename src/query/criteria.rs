// SPDX-License-Identifier: MPL-2.0
//! Filter criteria for the query engine.
//!
//! Criteria are ephemeral: the presentation layer rebuilds them from its
//! controls on every input event and hands them to the session. All active
//! clauses are AND-combined; an item passes only if every one matches.

use crate::catalog::{MediaItem, MediaKind};

/// Filter on the media kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    /// Match every kind.
    #[default]
    All,
    /// Match a single kind exactly.
    Only(MediaKind),
}

impl KindFilter {
    /// Returns `true` if this filter matches the given kind.
    #[must_use]
    pub fn matches(&self, kind: MediaKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(wanted) => *wanted == kind,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, KindFilter::All)
    }
}

/// Result ordering applied after filtering. Sorting is stable, so items
/// with equal keys keep their catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Descending by `created`; the default.
    #[default]
    Newest,
    /// Ascending by `created`.
    Oldest,
    /// Ascending by `name`, case-insensitive.
    NameAsc,
    /// Descending by `name`, case-insensitive.
    NameDesc,
}

/// Combined filter criteria with AND logic.
///
/// String-valued clauses treat both `None` and an empty string as inactive,
/// mirroring an unselected dropdown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring search over name, prompt, model, and tags.
    pub search: String,
    /// Media kind clause.
    pub kind: KindFilter,
    /// Year (`"2024"`) or year-month (`"2024-12"`) prefix of `created`.
    pub date_prefix: Option<String>,
    /// Exact model label; items without a model never match an active clause.
    pub model: Option<String>,
    /// Exact `dimensions` label.
    pub aspect: Option<String>,
    /// At most one active tag; the item must carry it.
    pub active_tag: Option<String>,
    /// Result ordering.
    pub sort: SortMode,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl FilterCriteria {
    /// Returns `true` if the item passes every active clause.
    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        if !self.kind.matches(item.kind) {
            return false;
        }
        if let Some(tag) = active(&self.active_tag) {
            if !item.has_tag(tag) {
                return false;
            }
        }
        if let Some(prefix) = active(&self.date_prefix) {
            if !item.created_matches(prefix) {
                return false;
            }
        }
        if let Some(model) = active(&self.model) {
            if item.model.as_deref() != Some(model) {
                return false;
            }
        }
        if let Some(aspect) = active(&self.aspect) {
            if item.dimensions != aspect {
                return false;
            }
        }
        let term = self.search.trim().to_lowercase();
        if !term.is_empty() && !item.searchable_text().contains(&term) {
            return false;
        }
        true
    }

    /// Returns `true` if any clause narrows the result (sort mode aside).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || self.kind.is_active()
            || active(&self.date_prefix).is_some()
            || active(&self.model).is_some()
            || active(&self.aspect).is_some()
            || active(&self.active_tag).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> MediaItem {
        MediaItem {
            id: "a1".to_string(),
            name: "Cyberpunk Hover Bike".to_string(),
            kind: MediaKind::Image,
            source: "midjourney".to_string(),
            model: Some("Midjourney v7".to_string()),
            url: None,
            cdn_url: None,
            thumbnail_url: None,
            prompt: Some("sleek industrial black hover bike".to_string()),
            parameters: None,
            dimensions: "21:9".to_string(),
            created: "2024-12-14".to_string(),
            tags: vec!["sci-fi".to_string(), "vehicle".to_string()],
        }
    }

    #[test]
    fn default_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.matches(&item()));
        assert!(!criteria.is_active());
    }

    #[test]
    fn kind_clause_requires_exact_kind() {
        let criteria = FilterCriteria {
            kind: KindFilter::Only(MediaKind::Video),
            ..FilterCriteria::default()
        };
        assert!(!criteria.matches(&item()));

        let criteria = FilterCriteria {
            kind: KindFilter::Only(MediaKind::Image),
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&item()));
    }

    #[test]
    fn tag_clause_requires_membership() {
        let criteria = FilterCriteria {
            active_tag: Some("vehicle".to_string()),
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&item()));

        let criteria = FilterCriteria {
            active_tag: Some("portrait".to_string()),
            ..FilterCriteria::default()
        };
        assert!(!criteria.matches(&item()));
    }

    #[test]
    fn date_clause_compares_year_and_year_month_prefixes() {
        let year = FilterCriteria {
            date_prefix: Some("2024".to_string()),
            ..FilterCriteria::default()
        };
        assert!(year.matches(&item()));

        let month = FilterCriteria {
            date_prefix: Some("2024-12".to_string()),
            ..FilterCriteria::default()
        };
        assert!(month.matches(&item()));

        let wrong_month = FilterCriteria {
            date_prefix: Some("2024-11".to_string()),
            ..FilterCriteria::default()
        };
        assert!(!wrong_month.matches(&item()));
    }

    #[test]
    fn model_clause_never_matches_items_without_a_model() {
        let criteria = FilterCriteria {
            model: Some("Midjourney v7".to_string()),
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&item()));

        let mut modelless = item();
        modelless.model = None;
        assert!(!criteria.matches(&modelless));
    }

    #[test]
    fn empty_string_clauses_are_inactive() {
        let criteria = FilterCriteria {
            model: Some(String::new()),
            aspect: Some(String::new()),
            date_prefix: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&item()));
        assert!(!criteria.is_active());
    }

    #[test]
    fn aspect_clause_requires_exact_dimensions() {
        let criteria = FilterCriteria {
            aspect: Some("21:9".to_string()),
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&item()));

        let criteria = FilterCriteria {
            aspect: Some("3:2".to_string()),
            ..FilterCriteria::default()
        };
        assert!(!criteria.matches(&item()));
    }

    #[test]
    fn search_clause_is_case_insensitive_and_trimmed() {
        let criteria = FilterCriteria {
            search: "  HOVER  ".to_string(),
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&item()));
    }

    #[test]
    fn search_clause_covers_tags_and_model() {
        let by_tag = FilterCriteria {
            search: "sci-fi".to_string(),
            ..FilterCriteria::default()
        };
        assert!(by_tag.matches(&item()));

        let by_model = FilterCriteria {
            search: "midjourney v7".to_string(),
            ..FilterCriteria::default()
        };
        assert!(by_model.matches(&item()));
    }

    #[test]
    fn all_active_clauses_are_and_combined() {
        let criteria = FilterCriteria {
            kind: KindFilter::Only(MediaKind::Image),
            active_tag: Some("sci-fi".to_string()),
            search: "bike".to_string(),
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&item()));

        let mut wrong_kind = item();
        wrong_kind.kind = MediaKind::Video;
        assert!(!criteria.matches(&wrong_kind));
    }
}
