// SPDX-License-Identifier: MPL-2.0
//! Full-window screensaver shown while the dashboard is idle.
//!
//! The layer is opaque, both visually and for input: nothing underneath
//! receives clicks while it is up. Activity is still observed at the event
//! subscription level, which is what dismisses it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{opaque, svg, Column, Container, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the screensaver.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub clock: &'a str,
}

/// Renders the screensaver layer.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let artwork = svg(icons::screensaver())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover)
        .opacity(opacity::OVERLAY_STRONG);

    let caption = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.clock.to_owned()).size(typography::DISPLAY))
        .push(Text::new(ctx.i18n.tr("screensaver-hint")).size(typography::BODY_LG));

    let foreground = Container::new(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom);

    let layer = Container::new(Stack::new().push(artwork).push(foreground))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::screensaver);

    opaque(layer)
}
