//! SVG rasterization to PNG via resvg.

use heatmap_common::{HeatmapError, HeatmapResult};
use tracing::debug;

use crate::png::create_png;

/// Rasterize an SVG document and encode it as PNG.
///
/// `scale` multiplies the document's own width and height; text is drawn
/// with whatever system fonts are available.
pub fn rasterize(svg: &str, scale: f32) -> HeatmapResult<Vec<u8>> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(HeatmapError::RenderError(format!(
            "invalid raster scale {}",
            scale
        )));
    }

    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| HeatmapError::RenderError(format!("SVG parse failed: {}", e)))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        HeatmapError::RenderError(format!("cannot allocate {}x{} pixmap", width, height))
    })?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha, PNG wants straight alpha
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    debug!(width, height, "Rasterized SVG");
    create_png(&rgba, width as usize, height as usize)
}
