// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for the top of the dashboard.
//!
//! The bar shows the wall clock on the left and the status icons on the
//! right. Status icons open their modal and render selected while it is open.
//! The battery indicator is display-only.

use crate::ui::components::StatusIcon;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::state::{Action, ModalKind, ViewState};
use crate::ui::styles;
use chrono::NaiveTime;
use iced::{
    alignment::Vertical,
    widget::{Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub view_state: &'a ViewState,
    /// Pre-formatted `HH:MM` label.
    pub clock: &'a str,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenNotification,
    OpenHealth,
    OpenSetting,
}

impl From<Message> for Action {
    fn from(message: Message) -> Self {
        match message {
            Message::OpenNotification => Action::Open(ModalKind::Notification),
            Message::OpenHealth => Action::Open(ModalKind::Health),
            Message::OpenSetting => Action::Open(ModalKind::Setting),
        }
    }
}

/// Process a navbar message against the store.
pub fn update(message: Message, view_state: &mut ViewState) {
    view_state.apply(message.into());
}

/// Formats the wall clock shown in the bar.
#[must_use]
pub fn clock_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let clock = Text::new(ctx.clock.to_owned()).size(typography::TITLE_MD);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(clock)
        .push(Space::new().width(Length::Fill))
        .push(status_bar(ctx.view_state));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn status_bar<'a>(view_state: &ViewState) -> Element<'a, Message> {
    let notification = StatusIcon::new(icons::notification(), sizing::ICON_STATUS)
        .selected(view_state.is_open(ModalKind::Notification))
        .on_press(Message::OpenNotification);

    let health = StatusIcon::new(icons::heart(), sizing::ICON_STATUS)
        .selected(view_state.is_open(ModalKind::Health))
        .on_press(Message::OpenHealth);

    let battery = StatusIcon::<Message>::new(icons::battery_charge(), sizing::ICON_STATUS);

    let setting = StatusIcon::new(icons::setting(), sizing::ICON_STATUS)
        .selected(view_state.is_open(ModalKind::Setting))
        .on_press(Message::OpenSetting);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(notification.view())
        .push(health.view())
        .push(battery.view())
        .push(setting.view())
        .into()
}
