// SPDX-License-Identifier: MPL-2.0
//! Core catalog item types.
//!
//! These types represent pure data without any presentation dependencies.
//! A [`MediaItem`] is deserialized directly from the catalog document and is
//! read-only for the lifetime of a session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display fallback for optional free-text metadata.
pub const METADATA_PLACEHOLDER: &str = "Not available";

/// The kind of media an item holds.
///
/// This is a closed variant over the catalog's `type` field so that
/// kind-specific rendering decisions are exhaustively checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Static image rendered from `cdn_url`.
    Image,
    /// Video clip; the grid shows `thumbnail_url` or a placeholder.
    Video,
    /// Audio track, possibly with a companion video file.
    Music,
}

impl MediaKind {
    /// Returns the catalog document spelling of this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Music => "music",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single media record from the catalog.
///
/// `id` is an opaque identifier, unique across the catalog. `created` is a
/// `YYYY-MM-DD` date string: its first 4 characters are the year and its
/// first 7 the year-month, which the date filter compares as plain prefixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdn_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    pub dimensions: String,
    pub created: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MediaItem {
    /// Parses `created` as an ISO date.
    ///
    /// Returns `None` for malformed values; the sort comparators place those
    /// as earliest so ordering stays deterministic.
    #[must_use]
    pub fn created_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.created, "%Y-%m-%d").ok()
    }

    /// Returns `true` if `created` starts with the given year or year-month
    /// prefix (e.g. `"2024"` or `"2024-12"`).
    #[must_use]
    pub fn created_matches(&self, prefix: &str) -> bool {
        self.created.starts_with(prefix)
    }

    /// Checks whether this item carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Lower-cased haystack for keyword search: name, prompt, model
    /// (empty when absent), and all tags, joined by spaces.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3 + self.tags.len());
        parts.push(self.name.as_str());
        parts.push(self.prompt.as_deref().unwrap_or(""));
        parts.push(self.model.as_deref().unwrap_or(""));
        for tag in &self.tags {
            parts.push(tag.as_str());
        }
        parts.join(" ").to_lowercase()
    }

    /// The label shown where the generator matters: the model when present,
    /// otherwise the media kind.
    #[must_use]
    pub fn display_model(&self) -> &str {
        self.model.as_deref().unwrap_or_else(|| self.kind.as_str())
    }

    /// Prompt text for display, with a placeholder when absent.
    #[must_use]
    pub fn display_prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(METADATA_PLACEHOLDER)
    }

    /// Generation parameters for display, with a placeholder when absent.
    #[must_use]
    pub fn display_parameters(&self) -> &str {
        self.parameters.as_deref().unwrap_or(METADATA_PLACEHOLDER)
    }
}
