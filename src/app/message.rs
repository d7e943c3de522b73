// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
///
/// The UI defines no interactions, so there is nothing to dispatch: the enum
/// stays uninhabited and the update loop is a total match over it.
#[derive(Debug, Clone)]
pub enum Message {}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional override for the settings file location.
    pub config_path: Option<PathBuf>,
}
