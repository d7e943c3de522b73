// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the injected video catalog and the theme preference
//! loaded from the settings file. Rendering is a pure function of that
//! state: the catalog flows unchanged from here into the video list view,
//! and no message can mutate it.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::config;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::path::Path;
use tracing::{info, warn};

/// Title shown in the window chrome and the navigation bar.
pub const APP_TITLE: &str = "IcedReel";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    catalog: Catalog,
    theme_mode: ThemeMode,
}

/// Builds the window settings
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop with
/// the built-in catalog.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, Catalog::builtin())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Loads the settings file, falling back to defaults on any failure so a
/// broken config never prevents startup.
fn load_config(override_path: Option<&Path>) -> config::Config {
    let loaded = match override_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };

    loaded.unwrap_or_else(|err| {
        warn!(%err, "failed to load settings, using defaults");
        config::Config::default()
    })
}

impl App {
    /// Initializes application state from `Flags` and the injected catalog.
    fn new(flags: Flags, catalog: Catalog) -> (Self, Task<Message>) {
        let config = load_config(flags.config_path.as_deref());

        info!(videos = catalog.len(), "starting with built-in catalog");

        let app = App {
            catalog,
            theme_mode: config.theme_mode,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {}
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            catalog: &self.catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoRecord;
    use tempfile::tempdir;

    /// Flags pointing at an empty temp dir so tests never read the real
    /// settings file.
    fn isolated_flags() -> (tempfile::TempDir, Flags) {
        let dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_path: Some(dir.path().join("settings.toml")),
        };
        (dir, flags)
    }

    #[test]
    fn new_keeps_the_injected_catalog() {
        let (_dir, flags) = isolated_flags();
        let catalog = Catalog::new(vec![VideoRecord::new(1, "A"), VideoRecord::new(2, "B")]);

        let (app, _task) = App::new(flags, catalog.clone());

        assert_eq!(app.catalog, catalog);
        let titles: Vec<&str> = app
            .catalog
            .records()
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn new_with_empty_catalog_renders() {
        let (_dir, flags) = isolated_flags();
        let (app, _task) = App::new(flags, Catalog::default());

        assert!(app.catalog.records().is_empty());
        let _element = app.view();
    }

    #[test]
    fn rendering_twice_leaves_state_untouched() {
        let (_dir, flags) = isolated_flags();
        let (app, _task) = App::new(flags, Catalog::builtin());
        let before = app.catalog.clone();

        let _first = app.view();
        let _second = app.view();

        assert_eq!(app.catalog, before);
    }

    #[test]
    fn theme_follows_the_configured_mode() {
        let app = App {
            catalog: Catalog::default(),
            theme_mode: ThemeMode::Light,
        };
        assert_eq!(app.theme(), Theme::Light);

        let app = App {
            catalog: Catalog::default(),
            theme_mode: ThemeMode::Dark,
        };
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn title_is_the_app_name() {
        let app = App {
            catalog: Catalog::default(),
            theme_mode: ThemeMode::Dark,
        };
        assert_eq!(app.title(), "IcedReel");
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let (_dir, flags) = isolated_flags();
        let (app, _task) = App::new(flags, Catalog::default());

        assert_eq!(app.theme_mode, ThemeMode::System);
    }
}
