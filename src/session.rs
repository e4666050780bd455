// SPDX-License-Identifier: MPL-2.0
//! The gallery session: one object owning catalog, criteria, page, and
//! viewer, with a command surface for the presentation layer.
//!
//! There are no ambient globals; everything a render pass needs lives here.
//! The presentation layer calls the `on_*` commands in response to user
//! input and history events, then calls [`GallerySession::render`] and
//! draws the returned [`RenderFrame`]. Every filter change resets to page 1
//! and recomputes the filtered result list; the viewer keeps navigating its
//! own snapshot until it is closed or re-opened.

use crate::catalog::{Catalog, MediaItem};
use crate::config::{Config, NavigationScope};
use crate::query::criteria::FilterCriteria;
use crate::query::{engine, pagination};
use crate::viewer::input::{
    command_for_key, wheel_should_navigate, Key, NavDirection, ScrollRegion, SearchDebouncer,
    ViewerCommand, WheelAccumulator,
};
use crate::viewer::{HistoryPort, Viewer, ViewerInfo};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Everything the presentation layer needs for one render pass.
#[derive(Debug, Clone)]
pub struct RenderFrame {
    /// The current page of the filtered result list, in display order.
    pub items: Vec<Arc<MediaItem>>,
    /// Pagination controls; `None` when one page or fewer.
    pub pagination: Option<pagination::PaginationControls>,
    /// Viewer state and nav-button enablement.
    pub viewer: ViewerInfo,
    /// Size of the whole filtered result list (not just this page).
    pub total_filtered: usize,
    /// True when no item passes the active filters; the presentation layer
    /// shows its empty-state indicator instead of a grid.
    pub empty: bool,
}

/// Session state machine for one gallery instance.
#[derive(Debug)]
pub struct GallerySession<H: HistoryPort> {
    catalog: Catalog,
    criteria: FilterCriteria,
    page: usize,
    page_size: usize,
    navigation_scope: NavigationScope,
    filtered: Vec<Arc<MediaItem>>,
    viewer: Viewer<H>,
    wheel: WheelAccumulator,
    search_debouncer: SearchDebouncer,
}

impl<H: HistoryPort> GallerySession<H> {
    /// Creates a session over a loaded catalog.
    #[must_use]
    pub fn new(catalog: Catalog, config: &Config, history: H) -> Self {
        let criteria = FilterCriteria::default();
        let filtered = engine::filter_and_sort(catalog.items(), &criteria);
        Self {
            catalog,
            criteria,
            page: 1,
            page_size: config.effective_page_size(),
            navigation_scope: config.effective_navigation_scope(),
            filtered,
            viewer: Viewer::new(history),
            wheel: WheelAccumulator::new(config.effective_wheel_threshold()),
            search_debouncer: SearchDebouncer::new(Duration::from_millis(
                config.effective_search_debounce_ms(),
            )),
        }
    }

    /// The catalog backing this session.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active filter criteria.
    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The current 1-indexed page.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// The full filtered result list in its sorted order.
    #[must_use]
    pub fn filtered_items(&self) -> &[Arc<MediaItem>] {
        &self.filtered
    }

    /// The viewer state machine.
    #[must_use]
    pub fn viewer(&self) -> &Viewer<H> {
        &self.viewer
    }

    /// Mutable history access, for adapters that drive back/forward.
    pub fn history_mut(&mut self) -> &mut H {
        self.viewer.history_mut()
    }

    /// Replaces the filter criteria, resets to page 1, and recomputes the
    /// result list. The viewer, if open, keeps its snapshot.
    pub fn on_filter_changed(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
        self.refresh();
    }

    /// Clears every filter back to defaults (the reset button).
    pub fn on_filters_reset(&mut self) {
        self.on_filter_changed(FilterCriteria::default());
    }

    /// Moves to the given 1-indexed page, clamped to the valid range.
    pub fn on_page_requested(&mut self, page: usize) {
        let total = self.total_pages().max(1);
        self.page = page.clamp(1, total);
    }

    /// Opens the viewer on the item at `index` into the filtered result
    /// list. Out-of-range indexes are ignored.
    ///
    /// With the default scope the snapshot spans the whole filtered list;
    /// with [`NavigationScope::CurrentPage`] it covers only the page the
    /// item is on, so next/previous stop at page edges.
    pub fn on_viewer_open(&mut self, index: usize) {
        if index >= self.filtered.len() {
            return;
        }
        match self.navigation_scope {
            NavigationScope::FilteredList => {
                self.viewer.open(self.filtered.clone(), index, true);
            }
            NavigationScope::CurrentPage => {
                let start = (self.page - 1) * self.page_size;
                let slice = pagination::paginate(&self.filtered, self.page_size, self.page);
                if let Some(local) = index.checked_sub(start) {
                    if local < slice.len() {
                        self.viewer.open(slice.to_vec(), local, true);
                    }
                }
            }
        }
    }

    /// Dispatches a viewer command from any input path.
    pub fn on_viewer_command(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::ShowPrevious => self.viewer.show_previous(),
            ViewerCommand::ShowNext => self.viewer.show_next(),
            ViewerCommand::Close => {
                self.viewer.close(true);
                self.wheel.reset();
            }
        }
    }

    /// Handles a key press; ignored while the viewer is closed.
    pub fn on_key(&mut self, key: Key) {
        if let Some(command) = command_for_key(key, self.viewer.is_open()) {
            self.on_viewer_command(command);
        }
    }

    /// Handles a wheel event inside the viewer overlay.
    ///
    /// `over_metadata` and `region` describe the pointer position relative
    /// to the scrollable metadata area; a region that wants to scroll
    /// natively suppresses navigation and leaves the accumulator untouched.
    pub fn on_wheel(&mut self, delta: f32, over_metadata: bool, region: Option<&ScrollRegion>) {
        if !self.viewer.is_open() {
            return;
        }
        if !wheel_should_navigate(over_metadata, region, delta) {
            return;
        }
        match self.wheel.accumulate(delta) {
            Some(NavDirection::Next) => self.viewer.show_next(),
            Some(NavDirection::Previous) => self.viewer.show_previous(),
            None => {}
        }
    }

    /// Records a search keystroke; the term takes effect only after the
    /// quiet period (see [`GallerySession::poll_search`]).
    pub fn on_search_input(&mut self, term: &str, now: Instant) {
        self.search_debouncer.input(term, now);
    }

    /// Applies a debounced search term once its quiet period has elapsed.
    /// Returns `true` when the result list changed and a re-render is due.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        if let Some(term) = self.search_debouncer.poll(now) {
            self.criteria.search = term;
            self.page = 1;
            self.refresh();
            return true;
        }
        false
    }

    /// Selects a tag, e.g. from the viewer's tag list.
    ///
    /// Compound transition: an open viewer closes normally (history entry
    /// pushed), then the tag becomes the active tag filter and the page
    /// resets to 1.
    pub fn on_tag_selected(&mut self, tag: &str) {
        self.viewer.close(true);
        self.criteria.active_tag = Some(tag.to_string());
        self.page = 1;
        self.refresh();
    }

    /// Applies an external history navigation event (back/forward).
    pub fn on_history_event(&mut self, entry: Option<&str>) {
        self.viewer
            .apply_history_entry(entry, &self.catalog, &self.filtered);
    }

    /// Reconstructs viewer state from the current history entry, used once
    /// at startup so a shared link opens on the right item.
    pub fn restore_from_history(&mut self) {
        let entry = self.viewer.history().current();
        self.on_history_event(entry.as_deref());
    }

    /// Number of pages for the current result list.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.page_size)
    }

    /// Produces the descriptors for one render pass.
    #[must_use]
    pub fn render(&self) -> RenderFrame {
        let items = pagination::paginate(&self.filtered, self.page_size, self.page).to_vec();
        RenderFrame {
            items,
            pagination: pagination::controls(self.total_pages(), self.page),
            viewer: self.viewer.info(),
            total_filtered: self.filtered.len(),
            empty: self.filtered.is_empty(),
        }
    }

    fn refresh(&mut self) {
        self.filtered = engine::filter_and_sort(self.catalog.items(), &self.criteria);
    }
}
