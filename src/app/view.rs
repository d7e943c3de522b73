// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that composes the navigation
//! bar and the two-column content region. The right column hosts the video
//! list, fed the catalog's records unchanged.

use super::Message;
use crate::catalog::Catalog;
use crate::ui::design_tokens::spacing;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::video_list::{self, ViewContext as VideoListViewContext};
use iced::{
    widget::{Column, Container, Row, Space},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
}

/// Renders the full application tree: one navigation region on top of one
/// content region.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        title: super::APP_TITLE,
    });

    Column::new()
        .push(navbar_view)
        .push(view_content(ctx.catalog))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build the content region: an empty left column and a right column holding
/// the video list.
fn view_content(catalog: &Catalog) -> Element<'_, Message> {
    let list = video_list::view(VideoListViewContext {
        videos: catalog.records(),
    });

    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Space::new()
                .width(Length::FillPortion(7))
                .height(Length::Shrink),
        )
        .push(Container::new(list).width(Length::FillPortion(5)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_with_builtin_catalog() {
        let catalog = Catalog::builtin();
        let _element = view(ViewContext { catalog: &catalog });
    }

    #[test]
    fn view_renders_with_empty_catalog() {
        let catalog = Catalog::default();
        let _element = view(ViewContext { catalog: &catalog });
    }

    #[test]
    fn context_forwards_the_catalog_records() {
        let catalog = Catalog::builtin();
        let ctx = ViewContext { catalog: &catalog };
        assert!(std::ptr::eq(
            ctx.catalog.records().as_ptr(),
            catalog.records().as_ptr()
        ));
    }
}
