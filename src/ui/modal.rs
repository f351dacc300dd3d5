// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs layered over the dashboard.
//!
//! Every open modal is drawn as a card with a title bar, an "X" button and a
//! message. Cards stack in declaration order above a dimmed backdrop that
//! swallows pointer input. Any close source closes every modal at once.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{Action, ModalKind, ViewState};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length, Padding};

/// Messages emitted by the modal layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The "X" button of any card, or the Escape key.
    CloseAll,
}

impl From<Message> for Action {
    fn from(message: Message) -> Self {
        match message {
            Message::CloseAll => Action::CloseAllModals,
        }
    }
}

/// Process a modal message against the store.
pub fn update(message: Message, view_state: &mut ViewState) {
    view_state.apply(message.into());
}

/// Fluent key of the card title for `kind`.
#[must_use]
pub fn title_key(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Message => "modal-message-title",
        ModalKind::Emergency => "modal-emergency-title",
        ModalKind::Notification => "modal-notification-title",
        ModalKind::Health => "modal-health-title",
        ModalKind::Setting => "modal-setting-title",
    }
}

/// Fluent key of the card body for `kind`.
#[must_use]
pub fn message_key(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Message => "modal-message-message",
        ModalKind::Emergency => "modal-emergency-message",
        ModalKind::Notification => "modal-notification-message",
        ModalKind::Health => "modal-health-message",
        ModalKind::Setting => "modal-setting-message",
    }
}

/// Contextual data needed to render the modal page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view_state: &'a ViewState,
}

/// Renders every open modal, or `None` when all are closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.view_state.any_modal_open() {
        return None;
    }

    let backdrop = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop);

    let stack = ctx
        .view_state
        .open_modals()
        .enumerate()
        .fold(Stack::new().push(backdrop), |stack, (depth, kind)| {
            stack.push(positioned_card(ctx.i18n, kind, depth))
        })
        .width(Length::Fill)
        .height(Length::Fill);

    Some(opaque(stack))
}

/// Centers the card and shifts each deeper card down and right so titles of
/// the cards beneath remain visible.
fn positioned_card<'a>(i18n: &I18n, kind: ModalKind, depth: usize) -> Element<'a, Message> {
    let offset = spacing::LG * depth as f32;

    Container::new(card(i18n, kind))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: offset,
            left: offset,
            ..Padding::ZERO
        })
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// A single MessageModal card.
fn card<'a>(i18n: &I18n, kind: ModalKind) -> Element<'a, Message> {
    let close = button(Text::new(i18n.tr("modal-close-button")).size(typography::BODY_LG))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::close)
        .on_press(Message::CloseAll);

    let title_bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr(title_key(kind)))
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(close);

    let body = Text::new(i18n.tr(message_key(kind))).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title_bar)
        .push(body);

    Container::new(content)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::modal_card)
        .into()
}
