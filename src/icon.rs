// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Uses the project SVG and rasterizes it at runtime to produce a RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized window icon.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a 128x128 RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    const SVG_SOURCE: &str = include_str!("../assets/branding/kiosk_dash.svg");

    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(t) => t,
        Err(err) => {
            tracing::warn!(error = %err, "window icon SVG could not be parsed");
            return None;
        }
    };

    let pixmap = rasterize(&tree, ICON_SIZE)?;
    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}

fn rasterize(tree: &usvg::Tree, target: u32) -> Option<tiny_skia::Pixmap> {
    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branding_svg_rasterizes_to_requested_size() {
        let source = include_str!("../assets/branding/kiosk_dash.svg");
        let tree = usvg::Tree::from_data(source.as_bytes(), &usvg::Options::default())
            .expect("embedded SVG should parse");

        let pixmap = rasterize(&tree, 32).expect("rasterize");

        assert_eq!(pixmap.width(), 32);
        assert_eq!(pixmap.height(), 32);
        assert!(pixmap.data().iter().any(|&byte| byte != 0));
    }

    #[test]
    fn window_icon_is_available() {
        assert!(load_window_icon().is_some());
    }
}
