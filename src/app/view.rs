// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: navbar and home screen, open modals, screensaver.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::home::{self, ViewContext as HomeViewContext};
use crate::ui::modal::{self, ViewContext as ModalViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::screensaver::{self, ViewContext as ScreensaverViewContext};
use crate::ui::state::ViewState;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view_state: &'a ViewState,
    pub clock: &'a str,
    pub idle: bool,
}

/// Renders the dashboard and its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        view_state: ctx.view_state,
        clock: ctx.clock,
    })
    .map(Message::Navbar);

    let home_view = home::view(HomeViewContext {
        i18n: ctx.i18n,
        view_state: ctx.view_state,
    })
    .map(Message::Home);

    let dashboard = Column::new()
        .push(navbar_view)
        .push(home_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(dashboard);

    if let Some(modals) = modal::view(ModalViewContext {
        i18n: ctx.i18n,
        view_state: ctx.view_state,
    }) {
        layers = layers.push(modals.map(Message::Modal));
    }

    if ctx.idle {
        layers = layers.push(screensaver::view(ScreensaverViewContext {
            i18n: ctx.i18n,
            clock: ctx.clock,
        }));
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
