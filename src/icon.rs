// SPDX-License-Identifier: MPL-2.0
//! Window icon.
//! The branding SVG is embedded and rasterized at startup.

use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SVG: &[u8] = include_bytes!("../assets/branding/iced_atlas.svg");

/// Edge length of the rasterized icon, in pixels.
pub const ICON_SIZE: u32 = 128;

/// Renders the embedded icon to straight-alpha RGBA, scaled to fit a
/// `size` x `size` square. Returns `None` if parsing or rendering fails.
#[must_use]
pub fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(ICON_SVG, &usvg::Options::default()).ok()?;

    let document = tree.size();
    let scale = (size as f32 / document.width()).min(size as f32 / document.height());
    let dx = (size as f32 - document.width() * scale) / 2.0;
    let dy = (size as f32 - document.height() * scale) / 2.0;
    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(dx, dy);

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(
        pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let c = pixel.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect(),
    )
}

/// Window title bar icon, or `None` when the icon cannot be produced.
#[must_use]
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize(ICON_SIZE)?;
    match icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(error) => {
            tracing::warn!(%error, "window icon rejected");
            None
        }
    }
}
