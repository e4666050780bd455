// SPDX-License-Identifier: MPL-2.0
//! The detail-viewer state machine.
//!
//! The viewer is either `Closed` or `Open` on an index into a snapshot of
//! the filtered result list taken at open time. The snapshot is the
//! navigation domain for next/previous: later filter changes do not move
//! an already-open viewer. Every open-like transition pushes a history
//! entry through the [`HistoryPort`] unless it was itself caused by a
//! history navigation event, which keeps back/forward from spawning
//! duplicate entries.

pub mod history;
pub mod input;

pub use history::{HistoryPort, InMemoryHistory};
pub use input::{Key, NavDirection, ViewerCommand, WheelAccumulator};

use crate::catalog::{Catalog, MediaItem};
use std::sync::Arc;

/// Discriminant of the machine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerState {
    Closed,
    /// Open at `index` into the snapshot list captured on open.
    Open { index: usize },
}

/// Snapshot of viewer state for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerInfo {
    pub open: bool,
    /// The item on display, if any.
    pub current_item: Option<Arc<MediaItem>>,
    /// 0-indexed position within the snapshot list, if open.
    pub index: Option<usize>,
    /// Length of the snapshot list the viewer navigates.
    pub total: usize,
    /// Previous button enablement; disabled at index 0 and when closed.
    pub previous_enabled: bool,
    /// Next button enablement; disabled at the last index and when closed.
    pub next_enabled: bool,
}

/// Viewer state machine bound to a history port.
#[derive(Debug, Clone)]
pub struct Viewer<H: HistoryPort> {
    state: ViewerState,
    snapshot: Vec<Arc<MediaItem>>,
    history: H,
}

impl<H: HistoryPort> Viewer<H> {
    /// Creates a closed viewer.
    pub fn new(history: H) -> Self {
        Self {
            state: ViewerState::Closed,
            snapshot: Vec::new(),
            history,
        }
    }

    /// Returns `true` while an item is on display.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    /// The machine state discriminant.
    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// The item currently on display, if open.
    #[must_use]
    pub fn current_item(&self) -> Option<&Arc<MediaItem>> {
        match self.state {
            ViewerState::Open { index } => self.snapshot.get(index),
            ViewerState::Closed => None,
        }
    }

    /// The snapshot list captured when the viewer opened.
    #[must_use]
    pub fn snapshot(&self) -> &[Arc<MediaItem>] {
        &self.snapshot
    }

    /// Read access to the history port (startup restore, tests).
    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access to the history port, for driving external
    /// back/forward navigation.
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Opens the viewer at `index` into `snapshot`.
    ///
    /// Valid from any state. An index outside the snapshot is ignored.
    /// Pushes a history entry for the item unless `push_history` is false —
    /// it must be false exactly when the open is driven by a history
    /// navigation event.
    pub fn open(&mut self, snapshot: Vec<Arc<MediaItem>>, index: usize, push_history: bool) {
        let Some(item) = snapshot.get(index) else {
            return;
        };
        if push_history {
            self.history.push(Some(&item.id));
        }
        self.snapshot = snapshot;
        self.state = ViewerState::Open { index };
    }

    /// Closes the viewer. No-op when already closed.
    ///
    /// Pushes a cleared history entry unless `push_history` is false (same
    /// suppression rule as [`Viewer::open`]).
    pub fn close(&mut self, push_history: bool) {
        if !self.is_open() {
            return;
        }
        if push_history {
            self.history.push(None);
        }
        self.state = ViewerState::Closed;
        self.snapshot.clear();
    }

    /// Advances to the next item in the snapshot; no-op at the last index
    /// or when closed. Re-runs the open side effects (history push).
    pub fn show_next(&mut self) {
        if let ViewerState::Open { index } = self.state {
            if index + 1 < self.snapshot.len() {
                self.reopen_at(index + 1);
            }
        }
    }

    /// Steps back to the previous item; no-op at index 0 or when closed.
    pub fn show_previous(&mut self) {
        if let ViewerState::Open { index } = self.state {
            if index > 0 {
                self.reopen_at(index - 1);
            }
        }
    }

    fn reopen_at(&mut self, index: usize) {
        if let Some(item) = self.snapshot.get(index) {
            self.history.push(Some(&item.id));
            self.state = ViewerState::Open { index };
        }
    }

    /// Applies an external history navigation event (back/forward).
    ///
    /// The entry's id is resolved against the catalog and located in the
    /// current filtered list; a hit opens the viewer there, anything else —
    /// unknown id, id filtered out, cleared entry — closes it. No history
    /// entry is pushed either way: the event already moved the cursor.
    pub fn apply_history_entry(
        &mut self,
        entry: Option<&str>,
        catalog: &Catalog,
        filtered: &[Arc<MediaItem>],
    ) {
        let resolved = entry
            .and_then(|id| catalog.find_by_id(id))
            .and_then(|item| filtered.iter().position(|i| i.id == item.id));
        match resolved {
            Some(index) => self.open(filtered.to_vec(), index, false),
            None => self.close(false),
        }
    }

    /// Snapshot of the viewer state for rendering.
    #[must_use]
    pub fn info(&self) -> ViewerInfo {
        match self.state {
            ViewerState::Open { index } => ViewerInfo {
                open: true,
                current_item: self.snapshot.get(index).cloned(),
                index: Some(index),
                total: self.snapshot.len(),
                previous_enabled: index > 0,
                next_enabled: index + 1 < self.snapshot.len(),
            },
            ViewerState::Closed => ViewerInfo {
                open: false,
                current_item: None,
                index: None,
                total: 0,
                previous_enabled: false,
                next_enabled: false,
            },
        }
    }
}
