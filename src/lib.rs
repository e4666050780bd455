// SPDX-License-Identifier: MPL-2.0
//! `galleria` is the core of a client-side media gallery browser.
//!
//! It loads a read-only catalog of media items (images, videos, music),
//! answers filter/search/sort/pagination queries over it, and drives a
//! history-aware detail viewer with keyboard and wheel navigation. The
//! presentation layer is an external collaborator: it invokes the command
//! surface on [`session::GallerySession`] and renders the descriptors the
//! session emits.

#![doc(html_root_url = "https://docs.rs/galleria/0.2.0")]

pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
pub mod session;
pub mod viewer;
