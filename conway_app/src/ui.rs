// ui.rs - Draws the grid and controls, and turns input into grid edits

use eframe::egui;
use egui::{Color32, PointerButton, Rect, Sense, Stroke};
use std::time::Instant;

use crate::app::GameOfLife;
use crate::config::{CELL_SPACING, DEFAULT_CELL_SIZE, MAX_INTERVAL_SECS};
use crate::input::Camera;
use crate::patterns::PATTERNS;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.update_generation();
        }

        let now = Instant::now();
        if self.timer.poll(now) {
            self.update_generation();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        egui::TopBottomPanel::bottom("stats").show(ctx, |ui| {
            let live_cells = self.grid.population();
            let total = self.grid.width() * self.grid.height();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.generation));
                if let Some(since) = self.repeating_since {
                    ui.label(format!("(repeating since {})", since));
                }
                ui.separator();
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                if total > 0 {
                    let percent = live_cells as f32 / total as f32 * 100.0;
                    ui.label(format!("Population: {:.1}%", percent));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ui);
        });

        if let Some(wait) = self.timer.time_until_next(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

impl GameOfLife {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.timer.is_running() { "⏸ Stop" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.toggle_running();
            }

            if ui.button("⏭ Step").clicked() {
                self.update_generation();
            }

            if ui.button("⏹ Clear").clicked() {
                self.timer.stop();
                self.clear_grid();
            }

            if ui.button("🎲 Random").clicked() {
                self.timer.stop();
                self.apply_random_pattern();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.timer.stop();
                self.apply_selected_pattern();
            }
        });

        ui.horizontal(|ui| {
            let mut secs = self.timer.interval().as_secs_f32();
            let slider = egui::Slider::new(&mut secs, 0.0..=MAX_INTERVAL_SECS).show_value(false);
            if ui.add(slider).changed() {
                self.set_interval_secs(secs);
            }
            ui.label(format!("Speed: {:.2}s", secs));

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });

        ui.label("Left drag paints cells, right drag pans, scroll zooms, Space steps once.");
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas = response.rect;
        let camera = self.camera.get_or_insert_with(|| {
            let (width, height) = (self.grid.width(), self.grid.height());
            Camera::centered(width, height, DEFAULT_CELL_SIZE, canvas.size())
        });

        // Camera
        if response.dragged_by(PointerButton::Secondary) {
            camera.pan(response.drag_delta());
        }
        if let Some(hover) = response.hover_pos() {
            let scroll = ui.input(|i| i.scroll_delta.y);
            if scroll != 0.0 {
                camera.zoom(scroll, hover - canvas.min);
            }
        }
        let camera = *camera;

        // Painting
        let primary_down = ui.input(|i| i.pointer.primary_down());
        match response.interact_pointer_pos() {
            Some(pos) if primary_down && canvas.contains(pos) => {
                let (x, y) = camera.cell_at(canvas.min, pos);
                self.paint(x, y);
            }
            _ if !primary_down => self.brush.release(),
            _ => {}
        }

        painter.rect_filled(canvas, 0.0, Color32::from_gray(25));
        for (x, y, alive) in self.grid.cells() {
            let rect = camera.cell_rect(canvas.min, x, y, CELL_SPACING);
            if !canvas.intersects(rect) {
                continue;
            }
            let color = if alive { self.live_color } else { self.dead_color };
            painter.rect_filled(rect, 0.0, color);
        }

        let (grid_width, grid_height) = (self.grid.width() as i32, self.grid.height() as i32);
        let border = Rect::from_min_max(
            camera.cell_rect(canvas.min, 0, 0, 0.0).min,
            camera.cell_rect(canvas.min, grid_width, grid_height, 0.0).min,
        );
        painter.rect_stroke(border, 0.0, Stroke::new(1.0, Color32::from_gray(90)));
    }
}
