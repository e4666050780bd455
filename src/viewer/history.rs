// SPDX-License-Identifier: MPL-2.0
//! Navigable-history port and the address-bar entry codec.
//!
//! The browser keeps exactly one piece of state in the address bar: an
//! optional `view` query parameter carrying the id of the item currently
//! open in the viewer. [`HistoryPort`] is the seam the viewer pushes
//! entries through; the presentation layer adapts it to whatever history
//! mechanism its host offers. [`InMemoryHistory`] is the reference
//! implementation, with explicit back/forward for tests and headless use.

/// Query parameter carrying the viewed item's id.
pub const VIEW_PARAM: &str = "view";

/// Encodes a history entry as a query string: `view=<id>` when the viewer
/// is open, an empty string when it is closed.
///
/// Ids are opaque strings; the characters that would break the query-string
/// structure (`%`, `&`, `=`) are percent-escaped so every id round-trips
/// through [`decode_view_param`].
#[must_use]
pub fn encode_view_param(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{VIEW_PARAM}={}", escape_value(id)),
        None => String::new(),
    }
}

/// Extracts the viewed item id from a query string, if present.
///
/// Accepts full query strings (`a=b&view=xyz`) with or without a leading
/// `?`. An empty `view` value counts as absent.
#[must_use]
pub fn decode_view_param(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.strip_prefix(VIEW_PARAM))
        .filter_map(|rest| rest.strip_prefix('='))
        .find(|value| !value.is_empty())
        .map(unescape_value)
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            '&' => escaped.push_str("%26"),
            '=' => escaped.push_str("%3D"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn unescape_value(value: &str) -> String {
    value
        .replace("%3D", "=")
        .replace("%26", "&")
        .replace("%25", "%")
}

/// Where the viewer records its open/closed state.
///
/// `push` appends a new navigable entry; `current` reads the entry the
/// history cursor points at. Implementations must round-trip: pushing an
/// entry and reading it back yields the same value.
pub trait HistoryPort {
    /// Pushes a new entry: `Some(id)` when an item is viewed, `None` when
    /// the viewer closed.
    fn push(&mut self, entry: Option<&str>);

    /// The entry at the current history position.
    fn current(&self) -> Option<String>;
}

/// In-memory history stack with a movable cursor.
///
/// Mirrors browser semantics: pushing while the cursor is mid-stack
/// discards the forward entries, and back/forward move the cursor without
/// growing the stack.
#[derive(Debug, Clone)]
pub struct InMemoryHistory {
    entries: Vec<Option<String>>,
    position: usize,
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHistory {
    /// Creates a history whose initial entry is "viewer closed".
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![None],
            position: 0,
        }
    }

    /// Moves back one entry and returns the entry now current.
    /// Returns `None` at the start of the stack (no navigation happened).
    pub fn back(&mut self) -> Option<Option<String>> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(self.entries[self.position].clone())
    }

    /// Moves forward one entry and returns the entry now current.
    /// Returns `None` at the end of the stack.
    pub fn forward(&mut self) -> Option<Option<String>> {
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        Some(self.entries[self.position].clone())
    }

    /// Number of entries on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the stack holds at least the initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistoryPort for InMemoryHistory {
    fn push(&mut self, entry: Option<&str>) {
        self.entries.truncate(self.position + 1);
        self.entries.push(entry.map(str::to_string));
        self.position = self.entries.len() - 1;
    }

    fn current(&self) -> Option<String> {
        self.entries[self.position].clone()
    }
}
