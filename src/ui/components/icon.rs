// SPDX-License-Identifier: MPL-2.0
//! Icon buttons used on the home screen, the dock and the status bar.
//!
//! Both widgets are stateless: the caller passes the boolean that drives the
//! look and the message to emit on press.

use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, svg, Column, Svg, Text};
use iced::{Element, Length};

/// Look of a home tile or dock icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAppearance {
    Enabled,
    Disabled,
}

impl IconAppearance {
    #[must_use]
    pub fn from_state(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    /// Opacity applied to the artwork.
    #[must_use]
    pub fn opacity(self) -> f32 {
        match self {
            Self::Enabled => opacity::OPAQUE,
            Self::Disabled => opacity::ICON_DISABLED,
        }
    }
}

/// Look of a status bar icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAppearance {
    Selected,
    Unselected,
}

impl StatusAppearance {
    #[must_use]
    pub fn from_state(selected: bool) -> Self {
        if selected {
            Self::Selected
        } else {
            Self::Unselected
        }
    }
}

/// Home tile or dock icon: artwork plus an optional caption.
pub struct Icon<Message> {
    handle: svg::Handle,
    size: f32,
    label: Option<String>,
    appearance: IconAppearance,
    on_press: Message,
}

impl<Message: Clone> Icon<Message> {
    pub fn new(handle: svg::Handle, size: f32, on_press: Message) -> Self {
        Self {
            handle,
            size,
            label: None,
            appearance: IconAppearance::Enabled,
            on_press,
        }
    }

    /// Adds a caption under the artwork (home tiles).
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the enabled/disabled look from the feature flag.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.appearance = IconAppearance::from_state(enabled);
        self
    }

    #[must_use]
    pub fn appearance(&self) -> IconAppearance {
        self.appearance
    }

    pub fn view<'a>(self) -> Element<'a, Message>
    where
        Message: 'a,
    {
        let artwork: Svg<'a> = svg(self.handle)
            .width(Length::Fixed(self.size))
            .height(Length::Fixed(self.size))
            .opacity(self.appearance.opacity())
            .style(styles::overlay::icon_tint);

        let mut content = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(artwork);

        if let Some(label) = self.label {
            content = content.push(Text::new(label).size(typography::BODY_LG));
        }

        button(content)
            .padding(spacing::SM)
            .style(styles::button::icon)
            .on_press(self.on_press)
            .into()
    }
}

/// Status bar icon. Without a message it is display-only (battery).
pub struct StatusIcon<Message> {
    handle: svg::Handle,
    size: f32,
    appearance: StatusAppearance,
    on_press: Option<Message>,
}

impl<Message: Clone> StatusIcon<Message> {
    pub fn new(handle: svg::Handle, size: f32) -> Self {
        Self {
            handle,
            size,
            appearance: StatusAppearance::Unselected,
            on_press: None,
        }
    }

    /// Sets the selected look from the bound modal flag.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.appearance = StatusAppearance::from_state(selected);
        self
    }

    #[must_use]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    #[must_use]
    pub fn appearance(&self) -> StatusAppearance {
        self.appearance
    }

    pub fn view<'a>(self) -> Element<'a, Message>
    where
        Message: 'a,
    {
        let artwork: Svg<'a> = svg(self.handle)
            .width(Length::Fixed(self.size))
            .height(Length::Fixed(self.size))
            .style(styles::overlay::icon_tint);

        let style = match self.appearance {
            StatusAppearance::Selected => styles::button::selected,
            StatusAppearance::Unselected => styles::button::unselected,
        };

        button(artwork)
            .padding(spacing::XXS)
            .style(style)
            .on_press_maybe(self.on_press)
            .into()
    }
}
