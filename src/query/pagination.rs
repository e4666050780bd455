// SPDX-License-Identifier: MPL-2.0
//! Page slicing and pagination control descriptors.
//!
//! Pages are 1-indexed. Slicing is forgiving — an out-of-range page yields
//! an empty slice, never an error — while the control descriptor is only
//! produced when there is more than one page, so a single-page result list
//! renders without pagination chrome.

/// Maximum numbered buttons shown at once, centered on the current page.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One entry in the numbered-button strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A numbered page button; `active` marks the current page.
    Page { number: usize, active: bool },
    /// A gap between the visible window and a boundary page button.
    Ellipsis,
}

/// Everything the presentation layer needs to draw pagination controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    /// Previous button enablement; disabled on the first page.
    pub previous_enabled: bool,
    /// Next button enablement; disabled on the last page.
    pub next_enabled: bool,
    /// Numbered buttons and ellipses, in display order.
    pub tokens: Vec<PageToken>,
    pub current_page: usize,
    pub total_pages: usize,
}

/// Number of pages needed for `len` items; zero for an empty list.
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Returns the 1-indexed `page` slice of `results`, clipped to bounds.
///
/// Page 0, a zero page size, or a page past the end all yield an empty
/// slice; the caller clamps the page when rendering controls.
#[must_use]
pub fn paginate<T>(results: &[T], page_size: usize, page: usize) -> &[T] {
    if page_size == 0 || page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= results.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(results.len());
    &results[start..end]
}

/// Builds the control descriptor, or `None` when controls are hidden
/// (one page or fewer).
///
/// The numbered window holds at most [`MAX_VISIBLE_PAGES`] buttons centered
/// on the current page and clamped to the valid range. When the window does
/// not reach page 1 a leading first-page button is added (with an ellipsis
/// if the gap is wider than one page); the trailing boundary is symmetric.
#[must_use]
pub fn controls(total_pages: usize, current_page: usize) -> Option<PaginationControls> {
    if total_pages <= 1 {
        return None;
    }
    let current_page = current_page.clamp(1, total_pages);

    let mut start_page = current_page.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end_page = (start_page + MAX_VISIBLE_PAGES - 1).min(total_pages);
    if end_page - start_page < MAX_VISIBLE_PAGES - 1 {
        start_page = end_page.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }

    let mut tokens = Vec::new();
    if start_page > 1 {
        tokens.push(PageToken::Page {
            number: 1,
            active: false,
        });
        if start_page > 2 {
            tokens.push(PageToken::Ellipsis);
        }
    }
    for number in start_page..=end_page {
        tokens.push(PageToken::Page {
            number,
            active: number == current_page,
        });
    }
    if end_page < total_pages {
        if end_page < total_pages - 1 {
            tokens.push(PageToken::Ellipsis);
        }
        tokens.push(PageToken::Page {
            number: total_pages,
            active: false,
        });
    }

    Some(PaginationControls {
        previous_enabled: current_page > 1,
        next_enabled: current_page < total_pages,
        tokens,
        current_page,
        total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(controls: &PaginationControls) -> Vec<Option<usize>> {
        controls
            .tokens
            .iter()
            .map(|token| match token {
                PageToken::Page { number, .. } => Some(*number),
                PageToken::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 30), 0);
        assert_eq!(total_pages(1, 30), 1);
        assert_eq!(total_pages(30, 30), 1);
        assert_eq!(total_pages(31, 30), 2);
        assert_eq!(total_pages(90, 30), 3);
    }

    #[test]
    fn paginate_returns_requested_slice() {
        let items: Vec<usize> = (0..10).collect();
        assert_eq!(paginate(&items, 3, 1), &[0, 1, 2]);
        assert_eq!(paginate(&items, 3, 2), &[3, 4, 5]);
        assert_eq!(paginate(&items, 3, 4), &[9]);
    }

    #[test]
    fn paginate_is_empty_out_of_range() {
        let items: Vec<usize> = (0..10).collect();
        assert!(paginate(&items, 3, 0).is_empty());
        assert!(paginate(&items, 3, 5).is_empty());
        assert!(paginate(&items, 0, 1).is_empty());
        let empty: Vec<usize> = Vec::new();
        assert!(paginate(&empty, 3, 1).is_empty());
    }

    #[test]
    fn paginate_never_exceeds_page_size() {
        let items: Vec<usize> = (0..100).collect();
        for page in 1..=total_pages(items.len(), 7) {
            assert!(paginate(&items, 7, page).len() <= 7);
        }
    }

    #[test]
    fn concatenated_pages_reproduce_the_full_list() {
        let items: Vec<usize> = (0..100).collect();
        let mut rebuilt = Vec::new();
        for page in 1..=total_pages(items.len(), 7) {
            rebuilt.extend_from_slice(paginate(&items, 7, page));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn controls_hidden_for_single_page() {
        assert!(controls(0, 1).is_none());
        assert!(controls(1, 1).is_none());
    }

    #[test]
    fn controls_window_is_centered_on_current_page() {
        let c = controls(10, 5).expect("controls expected");
        assert_eq!(
            numbers(&c),
            vec![
                Some(1),
                None,
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                None,
                Some(10)
            ]
        );
        assert!(c.previous_enabled);
        assert!(c.next_enabled);
    }

    #[test]
    fn controls_clamp_at_the_start() {
        let c = controls(10, 1).expect("controls expected");
        assert_eq!(
            numbers(&c),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(10)]
        );
        assert!(!c.previous_enabled);
        assert!(c.next_enabled);
    }

    #[test]
    fn controls_clamp_at_the_end() {
        let c = controls(10, 10).expect("controls expected");
        assert_eq!(
            numbers(&c),
            vec![Some(1), None, Some(6), Some(7), Some(8), Some(9), Some(10)]
        );
        assert!(c.previous_enabled);
        assert!(!c.next_enabled);
    }

    #[test]
    fn adjacent_boundary_pages_skip_the_ellipsis() {
        // Window 2..=6: page 1 borders the window, no leading ellipsis.
        let c = controls(7, 4).expect("controls expected");
        assert_eq!(
            numbers(&c),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7)]
        );
    }

    #[test]
    fn small_page_counts_show_every_page() {
        let c = controls(3, 2).expect("controls expected");
        assert_eq!(numbers(&c), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn active_flag_marks_only_the_current_page() {
        let c = controls(10, 5).expect("controls expected");
        let active: Vec<usize> = c
            .tokens
            .iter()
            .filter_map(|token| match token {
                PageToken::Page {
                    number,
                    active: true,
                } => Some(*number),
                _ => None,
            })
            .collect();
        assert_eq!(active, vec![5]);
    }

    #[test]
    fn out_of_range_current_page_is_clamped() {
        let c = controls(4, 9).expect("controls expected");
        assert_eq!(c.current_page, 4);
        assert!(!c.next_enabled);
    }
}
