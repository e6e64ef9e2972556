//! Drawing-surface contract and the render pass over growth segments.

use crate::types::{Rgb, Segment};
use glam::Vec2;

/// A 2-D stroke target that keeps its pixels between frames.
///
/// Paths are built with [`Surface::begin_stroke`], [`Surface::move_to`] and
/// [`Surface::line_to`] and painted by [`Surface::stroke`] with round caps.
pub trait Surface {
    /// Size in pixels as `(width, height)`.
    fn size(&self) -> (usize, usize);

    fn begin_stroke(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    /// Paints the current path. `alpha` is in `[0, 1]`.
    fn stroke(&mut self, color: Rgb, alpha: f32, width: f32);

    /// Fills the whole surface with an opaque colour.
    fn fill(&mut self, color: Rgb);

    /// Changes the pixel size, keeping the overlapping part of what was
    /// already drawn. New area is filled with `background`.
    fn resize(&mut self, width: usize, height: usize, background: Rgb);
}

/// Rounds an opacity to the two decimals carried by the colour channel.
#[inline]
pub fn quantize_alpha(alpha: f32) -> f32 {
    (alpha.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

/// Draws each segment as its own stroke, in order.
pub fn render_segments<S: Surface + ?Sized>(surface: &mut S, segments: &[Segment], ink: Rgb) {
    for seg in segments {
        surface.begin_stroke();
        surface.move_to(seg.from);
        surface.line_to(seg.to);
        surface.stroke(ink, quantize_alpha(seg.alpha), seg.width);
    }
}

/// Erases the surface to its base colour.
pub fn clear_surface<S: Surface + ?Sized>(surface: &mut S, background: Rgb) {
    surface.fill(background);
}
