// SPDX-License-Identifier: MPL-2.0
//! Home screen: the tile box in the middle and the feature dock at the bottom.
//!
//! Tiles open their modal; dock icons flip their feature flag and render
//! dimmed while the feature is off.

use crate::i18n::fluent::I18n;
use crate::ui::components::Icon;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::state::{Action, ModalKind, ToggleKind, ViewState};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{svg, Column, Container, Row};
use iced::{Element, Length};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view_state: &'a ViewState,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenMessage,
    OpenEmergency,
    Toggle(ToggleKind),
}

impl From<Message> for Action {
    fn from(message: Message) -> Self {
        match message {
            Message::OpenMessage => Action::Open(ModalKind::Message),
            Message::OpenEmergency => Action::Open(ModalKind::Emergency),
            Message::Toggle(kind) => Action::Toggle(kind),
        }
    }
}

/// Process a home message against the store.
pub fn update(message: Message, view_state: &mut ViewState) {
    view_state.apply(message.into());
}

/// Render the tile box above the dock.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .spacing(spacing::LG)
        .push(icon_box(ctx.i18n))
        .push(dock(ctx.view_state))
        .into()
}

fn icon_box<'a>(i18n: &I18n) -> Element<'a, Message> {
    let tiles = Row::new()
        .spacing(spacing::XXL)
        .align_y(Vertical::Center)
        .push(tile(i18n, Message::OpenMessage).view())
        .push(tile(i18n, Message::OpenEmergency).view());

    Container::new(tiles)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Home tiles carry no feature flag and keep the full-opacity look.
fn tile(i18n: &I18n, message: Message) -> Icon<Message> {
    let (handle, label_key) = match message {
        Message::OpenEmergency => (icons::emergency(), "home-icon-emergency"),
        _ => (icons::message(), "home-icon-message"),
    };
    Icon::new(handle, sizing::ICON_TILE, message).label(i18n.tr(label_key))
}

fn dock<'a>(view_state: &ViewState) -> Element<'a, Message> {
    let row = ToggleKind::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XL), |row, kind| {
            row.push(
                Icon::new(dock_icon(kind), sizing::ICON_DOCK, Message::Toggle(kind))
                    .enabled(view_state.is_enabled(kind))
                    .view(),
            )
        })
        .align_y(Vertical::Center);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DOCK_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::dock)
        .into()
}

fn dock_icon(kind: ToggleKind) -> svg::Handle {
    match kind {
        ToggleKind::Alert => icons::alert(),
        ToggleKind::Camera => icons::camera(),
        ToggleKind::Drive => icons::car(),
        ToggleKind::Mic => icons::microphone(),
    }
}
