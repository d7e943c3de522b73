// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a minimal video catalog viewer built with the Iced GUI framework.
//!
//! It renders a static navigation bar over a two-column content area whose
//! right column lists the videos of a built-in catalog. The catalog is
//! injected into the application root at startup and flows unchanged into
//! the list view.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ui;
