// ui.rs - egui frame loop: controls, grid interaction, result display

use eframe::egui;
use egui::Color32;
use pathgrid::{DrawMode, ALGORITHMS};

use crate::render;
use crate::PathgridApp;

const FOUND_GREEN: Color32 = Color32::from_rgb(0x2f, 0x85, 0x5a);
const ERROR_RED: Color32 = Color32::from_rgb(0xc5, 0x30, 0x30);

impl eframe::App for PathgridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_animation(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pathfinding Grid Visualizer");

            // Controls
            ui.horizontal(|ui| {
                ui.label("Draw:");
                for mode in [DrawMode::Wall, DrawMode::Start, DrawMode::End] {
                    ui.selectable_value(&mut self.input.draw_mode, mode, mode.label());
                }

                ui.separator();

                ui.label("Algorithm:");
                egui::ComboBox::from_id_source("algorithm_selector")
                    .selected_text(self.algorithm.clone())
                    .show_ui(ui, |ui| {
                        for algorithm in ALGORITHMS {
                            ui.selectable_value(
                                &mut self.algorithm,
                                algorithm.to_string(),
                                *algorithm,
                            );
                        }
                    });

                ui.separator();

                // Run/clear stay disabled while a replay is playing
                let idle = !self.player.is_active();
                if ui.add_enabled(idle, egui::Button::new("▶ Find Path")).clicked() {
                    self.start_run();
                }
                if ui.add_enabled(idle, egui::Button::new("⏹ Clear")).clicked() {
                    self.clear();
                }
            });

            ui.separator();
            ui.label("Click to place the selected element. Hold and drag to paint walls.");
            ui.separator();

            // Draw the grid
            let (response, painter) =
                ui.allocate_painter(render::grid_extent(), egui::Sense::click_and_drag());
            let origin = response.rect.min;

            render::paint_grid(&painter, origin, &self.grid);

            // Map pointer activity onto the input controller; edits are
            // ignored while a replay is active
            if !self.player.is_active() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some(cell) = render::cell_at(origin, pos) {
                        if response.drag_started() || response.clicked() {
                            self.input.pointer_down(&mut self.grid, cell);
                        } else if response.dragged() {
                            self.input.pointer_moved(&mut self.grid, cell);
                        }
                    }
                }
                if response.clicked() || response.drag_released() {
                    self.input.pointer_up();
                }
                if !response.hovered() {
                    self.input.pointer_left();
                }
            }

            ui.separator();

            // Error and result summary
            if let Some(error) = &self.error {
                ui.colored_label(ERROR_RED, error);
            }
            if let Some(summary) = self.summary {
                ui.horizontal(|ui| {
                    if summary.found {
                        ui.colored_label(FOUND_GREEN, "✓ Path Found!");
                        ui.label(format!("Path length: {}", summary.path_len));
                    } else {
                        ui.colored_label(ERROR_RED, "✗ No Path Found");
                        ui.label("Path length: N/A");
                    }
                    ui.label(format!("Cells explored: {}", summary.explored_count));
                });
            }
        });

        // Keep frames coming while a replay is playing
        if self.player.is_active() {
            ctx.request_repaint();
        }
    }
}
