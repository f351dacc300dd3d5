// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use kiosk_dash::ui::components::{IconAppearance, StatusAppearance};
    use kiosk_dash::ui::design_tokens::{opacity, palette, sizing, spacing};
    use kiosk_dash::ui::styles::{button, container, overlay};
    use kiosk_dash::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::icon(&theme, iced::widget::button::Status::Active);
        let _ = button::selected(&theme, iced::widget::button::Status::Hovered);
        let _ = button::unselected(&theme, iced::widget::button::Status::Pressed);
        let _ = button::close(&theme, iced::widget::button::Status::Active);
    }

    #[test]
    fn container_styles_follow_theme() {
        let light = container::modal_card(&Theme::Light);
        let dark = container::modal_card(&Theme::Dark);
        assert_ne!(light.background, dark.background);

        let _ = container::navbar(&Theme::Dark);
        let _ = container::dock(&Theme::Dark);
    }

    #[test]
    fn screensaver_is_fully_opaque() {
        let style = overlay::screensaver(&Theme::Light);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::BLACK))
        );

        let backdrop = overlay::backdrop(&Theme::Light);
        match backdrop.background {
            Some(iced::Background::Color(color)) => {
                assert!(color.a > opacity::TRANSPARENT && color.a < opacity::OPAQUE);
            }
            other => panic!("unexpected backdrop background: {other:?}"),
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        assert!(sizing::ICON_TILE > sizing::ICON_STATUS);
    }

    #[test]
    fn disabled_icons_are_dimmed() {
        assert_eq!(IconAppearance::Disabled.opacity(), opacity::ICON_DISABLED);
        assert_eq!(IconAppearance::Enabled.opacity(), opacity::OPAQUE);
        assert_ne!(
            StatusAppearance::from_state(true),
            StatusAppearance::from_state(false)
        );
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
