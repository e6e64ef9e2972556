//! Interactive frost-crystal canvas built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the live branch collection,
//! the pointer sampler and the raster [`Canvas`], and implements
//! [`eframe::App`] to drive one simulation tick per repaint.

use crate::canvas::Canvas;
use eframe::App;
use frost_core::{
    branch::Branch,
    config::Config,
    input::{PointerEvent, SeedSampler},
    random::RngSource,
    render::{self, Surface},
    seed, simulation,
};
use glam::Vec2;
use rand::rngs::ThreadRng;
use tracing::debug;

const INITIAL_SIZE: (usize, usize) = (800, 600);

/// Main application state for the interactive viewer.
///
/// The per-frame update is:
/// 1. Match the canvas to the central panel, keeping drawn pixels.
/// 2. Feed drag input through the [`SeedSampler`], planting crystals.
/// 3. If `running`, advance every live branch once and paint the segments.
/// 4. Upload the canvas to the texture if anything changed and display it.
///
/// ### Fields
/// - `branches` - Live branch collection, moved through [`simulation::tick`].
/// - `sampler` - Converts the pointer path into seed positions.
/// - `canvas` - Persistent raster the segments are painted on.
/// - `texture` - GPU copy of `canvas`, created on the first frame.
/// - `dirty` - Whether `canvas` changed since the last upload.
pub struct Viewer {
    cfg: Config,
    rng: RngSource<ThreadRng>,

    branches: Vec<Branch>,
    sampler: SeedSampler,
    canvas: Canvas,
    texture: Option<egui::TextureHandle>,
    dirty: bool,

    running: bool,
    crystals_planted: u64,
    segments_drawn: u64,
}

impl Viewer {
    /// Creates a viewer with an empty, background-filled canvas.
    pub fn new() -> Self {
        let cfg = Config::default();
        Self {
            cfg,
            rng: RngSource::new(rand::rng()),
            branches: Vec::new(),
            sampler: SeedSampler::new(cfg.spawn_distance),
            canvas: Canvas::new(INITIAL_SIZE.0, INITIAL_SIZE.1, cfg.background),
            texture: None,
            dirty: true,
            running: true,
            crystals_planted: 0,
            segments_drawn: 0,
        }
    }

    /// Routes one pointer event, planting a crystal when the sampler asks.
    fn handle_pointer(&mut self, event: PointerEvent) {
        if let Some(pos) = self.sampler.handle(event) {
            self.plant(pos);
        }
    }

    fn plant(&mut self, pos: Vec2) {
        seed::plant(&mut self.branches, pos, &self.cfg, &mut self.rng);
        self.crystals_planted += 1;
    }

    /// Advances all live branches by one frame and paints what they traced.
    fn step_once(&mut self) {
        if self.branches.is_empty() {
            return;
        }
        let branches = std::mem::take(&mut self.branches);
        let tick = simulation::tick(branches, &self.cfg, &mut self.rng);

        render::render_segments(&mut self.canvas, &tick.segments, self.cfg.ink);
        self.segments_drawn += tick.segments.len() as u64;
        self.dirty |= !tick.segments.is_empty();
        self.branches = tick.branches;
    }

    /// Drops every live branch and repaints the canvas background.
    fn clear(&mut self) {
        self.branches.clear();
        render::clear_surface(&mut self.canvas, self.cfg.background);
        self.dirty = true;
        debug!("canvas cleared");
    }

    /// Resizes the canvas to `size` pixels, keeping what was drawn.
    fn sync_canvas_size(&mut self, size: (usize, usize)) {
        if self.canvas.size() != size {
            self.canvas.resize(size.0, size.1, self.cfg.background);
            self.dirty = true;
            debug!(width = size.0, height = size.1, "canvas resized");
        }
    }

    /// Ends a drag, first feeding the release position as a final move.
    ///
    /// egui reports the release frame without `dragged()`, so the last
    /// stretch of travel would otherwise never reach the sampler.
    fn finish_drag(&mut self, last: Option<Vec2>) {
        if let Some(p) = last {
            self.handle_pointer(PointerEvent::Move(p));
        }
        self.handle_pointer(PointerEvent::End);
    }

    /// Physical pixel size of the canvas backing `rect`.
    fn canvas_size(rect: egui::Rect, ppp: f32) -> (usize, usize) {
        (
            (rect.width() * ppp).round().max(1.0) as usize,
            (rect.height() * ppp).round().max(1.0) as usize,
        )
    }

    /// Converts a screen position in points to canvas pixels.
    fn screen_to_canvas(p: egui::Pos2, rect: egui::Rect, ppp: f32) -> Vec2 {
        Vec2::new((p.x - rect.min.x) * ppp, (p.y - rect.min.y) * ppp)
    }

    fn upload_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_none() {
            self.texture = Some(ctx.load_texture(
                "frost-canvas",
                self.canvas.to_color_image(),
                egui::TextureOptions::LINEAR,
            ));
        } else if self.dirty
            && let Some(tex) = self.texture.as_mut()
        {
            tex.set(self.canvas.to_color_image(), egui::TextureOptions::LINEAR);
        }
        self.dirty = false;
    }

    /// Builds the top panel (run toggle, single step, clear).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    self.step_once();
                }

                if ui.button("Clear").clicked() {
                    self.clear();
                }

                ui.separator();
                ui.label("Drag on the canvas to plant frost.");
            });
        });
    }

    /// Builds the bottom status bar.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("segments = {}", self.segments_drawn));
                ui.label(format!("crystals = {}", self.crystals_planted));
                ui.separator();
                ui.label(format!("live branches = {}", self.branches.len()));
            });
        });
    }

    /// Builds the central panel: input, simulation tick and canvas display.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
                let rect = response.rect;
                let ppp = ctx.pixels_per_point();

                self.sync_canvas_size(Self::canvas_size(rect, ppp));

                let pos = response
                    .interact_pointer_pos()
                    .map(|p| Self::screen_to_canvas(p, rect, ppp));
                if response.drag_started()
                    && let Some(p) = pos
                {
                    self.handle_pointer(PointerEvent::Start(p));
                } else if response.dragged()
                    && let Some(p) = pos
                {
                    self.handle_pointer(PointerEvent::Move(p));
                }
                if response.drag_stopped() {
                    self.finish_drag(pos);
                }

                if self.running {
                    self.step_once();
                }

                self.upload_texture(ctx);
                if let Some(tex) = &self.texture {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    ui.painter_at(rect)
                        .image(tex.id(), rect, uv, egui::Color32::WHITE);
                }
            });

        ctx.request_repaint();
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
