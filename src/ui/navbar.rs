// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level chrome.
//!
//! The bar is purely presentational: it shows the application title in a
//! toolbar container at the top of the window and emits no messages.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Container, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub title: &'a str,
}

/// Render the navigation bar.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.title).size(typography::TITLE_MD);

    Container::new(title)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .padding([spacing::XS, spacing::SM])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::toolbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let ctx = ViewContext { title: "IcedReel" };
        let _element: Element<'_, ()> = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_empty_title() {
        let ctx = ViewContext { title: "" };
        let _element: Element<'_, ()> = view(ctx);
    }
}
