//! Software raster canvas implementing [`Surface`].
//!
//! Pixels persist between frames, so each growth segment only has to be
//! painted once. The buffer is uploaded to an egui texture for display.

use frost_core::{render::Surface, types::Rgb};
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 4]>,
    path: Vec<Vec2>,
}

impl Canvas {
    /// Creates a canvas of at least 1x1 pixels filled with `background`.
    pub fn new(width: usize, height: usize, background: Rgb) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![opaque(background); width * height],
            path: Vec::with_capacity(2),
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width, self.height],
            self.pixels.as_flattened(),
        )
    }

    /// Paints an anti-aliased, round-capped line from `a` to `b`.
    fn stamp_segment(&mut self, a: Vec2, b: Vec2, color: Rgb, alpha: f32, width: f32) {
        let radius = 0.5 * width;
        let pad = radius + 1.0;
        let lo = a.min(b) - Vec2::splat(pad);
        let hi = a.max(b) + Vec2::splat(pad);

        let x0 = lo.x.floor().max(0.0) as usize;
        let y0 = lo.y.floor().max(0.0) as usize;
        let x1 = (hi.x.ceil().max(0.0) as usize).min(self.width);
        let y1 = (hi.y.ceil().max(0.0) as usize).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let centre = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (radius + 0.5 - distance_to_segment(centre, a, b)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let idx = y * self.width + x;
                    self.pixels[idx] = blend(self.pixels[idx], color, alpha * coverage);
                }
            }
        }
    }
}

impl Surface for Canvas {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn begin_stroke(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        self.path.clear();
        self.path.push(p);
    }

    fn line_to(&mut self, p: Vec2) {
        self.path.push(p);
    }

    fn stroke(&mut self, color: Rgb, alpha: f32, width: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 || width <= 0.0 {
            return;
        }
        let path = std::mem::take(&mut self.path);
        match path.as_slice() {
            [] => {}
            [p] => self.stamp_segment(*p, *p, color, alpha, width),
            pts => {
                for pair in pts.windows(2) {
                    self.stamp_segment(pair[0], pair[1], color, alpha, width);
                }
            }
        }
        self.path = path;
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(opaque(color));
    }

    fn resize(&mut self, width: usize, height: usize, background: Rgb) {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return;
        }

        let mut pixels = vec![opaque(background); width * height];
        let keep_w = width.min(self.width);
        for y in 0..height.min(self.height) {
            let src = y * self.width;
            let dst = y * width;
            pixels[dst..dst + keep_w].copy_from_slice(&self.pixels[src..src + keep_w]);
        }

        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }
}

fn opaque(c: Rgb) -> [u8; 4] {
    [c.r, c.g, c.b, 255]
}

/// Source-over blend of `color` at `alpha` onto an opaque pixel.
fn blend(dst: [u8; 4], color: Rgb, alpha: f32) -> [u8; 4] {
    let mix = |d: u8, s: u8| (s as f32 * alpha + d as f32 * (1.0 - alpha)).round() as u8;
    [mix(dst[0], color.r), mix(dst[1], color.g), mix(dst[2], color.b), 255]
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 < 1e-8 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
