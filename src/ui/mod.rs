// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern. The
//! views here are stateless: each takes a `ViewContext` borrowing what it
//! needs and returns an `Element`.
//!
//! - [`navbar`] - Static navigation bar
//! - [`video_list`] - Catalog list view
//! - [`styles`] - Centralized container styling
//! - [`design_tokens`] - Design system constants (spacing, sizing, typography)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod navbar;
pub mod styles;
pub mod theming;
pub mod video_list;
