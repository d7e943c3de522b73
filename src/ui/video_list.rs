// SPDX-License-Identifier: MPL-2.0
//! Presentational list view for the video catalog.
//!
//! The view receives an ordered slice of records and renders one row per
//! record, in slice order. It holds no state and emits no messages.

use crate::catalog::VideoRecord;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the video list.
pub struct ViewContext<'a> {
    /// Records to display, in rendering order.
    pub videos: &'a [VideoRecord],
}

/// Render the video list, one row per record.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XS).width(Length::Fill);

    for record in ctx.videos {
        list = list.push(row_view(record));
    }

    list.into()
}

/// Build a single list row showing the record's title and identifier.
fn row_view<'a, Message: 'a>(record: &'a VideoRecord) -> Element<'a, Message> {
    let title = Text::new(record.title.as_str()).size(typography::BODY);
    let id_badge = Text::new(format!("#{}", record.id)).size(typography::CAPTION);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(id_badge);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::list_row)
        .into()
}
