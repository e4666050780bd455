// SPDX-License-Identifier: MPL-2.0
//! Query services over the catalog (read-side only).
//!
//! Everything here is pure: the same catalog and criteria always produce
//! the same result list, and nothing in this module mutates session state.
//!
//! - [`criteria`]: filter criteria and sort modes
//! - [`engine`]: the filter + stable-sort pipeline
//! - [`pagination`]: page slicing and pagination control descriptors

pub mod criteria;
pub mod engine;
pub mod pagination;

pub use criteria::{FilterCriteria, KindFilter, SortMode};
pub use engine::filter_and_sort;
pub use pagination::{paginate, total_pages, PageToken, PaginationControls};
