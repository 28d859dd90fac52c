// ui.rs - eframe front-end: controls, keyboard, painting and drawing

use eframe::egui;
use egui::{Color32, Key, Pos2, Rect, Vec2};
use std::time::{Duration, Instant};

use conway::{Boundary, Cell, CellTransition, PATTERNS};

use crate::GameOfLife;

// Digit keys load presets in library order: 1..9 then 0.
const PRESET_KEYS: [Key; 10] = [
    Key::Num1, Key::Num2, Key::Num3, Key::Num4, Key::Num5,
    Key::Num6, Key::Num7, Key::Num8, Key::Num9, Key::Num0,
];

/// Grid coordinate under a pointer position, if any.
pub fn cell_at(origin: Pos2, pos: Pos2, cell_size: f32, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let row = (offset.y / cell_size) as usize;
    let col = (offset.x / cell_size) as usize;
    (row < rows && col < cols).then_some((row, col))
}

impl GameOfLife {
    fn cell_color(&self, cell: Cell, transition: Option<CellTransition>) -> Color32 {
        match (cell, transition) {
            (_, Some(CellTransition::Dying)) => self.dying_color,
            (Cell::Alive, _) => self.live_color,
            (Cell::Dead, _) => self.dead_color,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let pressed = |key: Key| ctx.input(|i| i.key_pressed(key));

        if pressed(Key::Space) && self.state.toggle_running() {
            self.last_update = Instant::now();
        }
        if pressed(Key::ArrowRight) {
            self.state.pause();
            self.step();
        }
        if pressed(Key::S) {
            self.save();
        }
        if pressed(Key::L) {
            self.load();
        }
        if pressed(Key::X) {
            self.clear_grid();
        }
        for (index, key) in PRESET_KEYS.into_iter().enumerate() {
            if pressed(key) {
                self.load_pattern(index);
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.state.is_running() { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() && self.state.toggle_running() {
                self.last_update = Instant::now();
            }

            if ui.button("⏭ Step").clicked() {
                self.state.pause();
                self.step();
            }

            if ui.button("⏹ Clear").clicked() {
                self.clear_grid();
            }

            if ui.button("💾 Save").clicked() {
                self.save();
            }

            if ui.button("📂 Load").clicked() {
                self.load();
            }

            ui.separator();

            // Pattern dropdown
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.load_pattern(self.selected_pattern);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
            }

            ui.separator();

            let mut boundary = self.state.boundary();
            ui.radio_value(&mut boundary, Boundary::Clamped, "Clamped");
            ui.radio_value(&mut boundary, Boundary::Toroidal, "Toroidal");
            self.state.set_boundary(boundary);

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dying:");
            ui.color_edit_button_srgba(&mut self.dying_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let size = self.config.cell_size;
        let (rows, cols) = self.state.grid().dimensions();
        let total_size = Vec2::new(cols as f32 * size, rows as f32 * size);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());
        let origin = response.rect.min;

        // Left button paints, right button erases
        let (pointer, primary, secondary) = ui.input(|i| {
            (i.pointer.interact_pos(), i.pointer.primary_down(), i.pointer.secondary_down())
        });
        if response.hovered() || response.dragged() {
            let paint = match (primary, secondary) {
                (true, _) => Some(Cell::Alive),
                (false, true) => Some(Cell::Dead),
                _ => None,
            };
            if let (Some(cell), Some((row, col))) =
                (paint, pointer.and_then(|pos| cell_at(origin, pos, size, rows, cols)))
            {
                if self.state.paint(row, col, cell).is_ok() {
                    self.transitions = None;
                }
            }
        }

        painter.rect_filled(response.rect, 0.0, self.grid_color);

        let grid = self.state.grid();
        for (row, col, cell) in grid.iter() {
            let transition = self.transitions.as_ref().and_then(|t| t.get(row, col));
            let min = origin + Vec2::new(col as f32 * size, row as f32 * size);
            let rect = Rect::from_min_size(min, Vec2::splat(size - 1.0));
            painter.rect_filled(rect, 0.0, self.cell_color(cell, transition));
        }
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        let grid = self.state.grid();
        let cells = grid.rows() * grid.cols();
        let live_cells = grid.population();

        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.state.generation()));
            ui.separator();
            ui.label(format!("Live cells: {live_cells}"));
            ui.label(format!(
                "Population: {:.1}%",
                live_cells as f32 * 100.0 / cells.max(1) as f32
            ));
            ui.separator();
            ui.label(self.status.as_str());
        });
    }
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // Auto-update if running
        if self.state.is_running() && self.last_update.elapsed() >= self.update_interval {
            self.step();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| self.board(ui));
        });

        if self.state.is_running() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn pixel_maps_to_cell_by_division() {
        let origin = pos2(10.0, 20.0);
        assert_eq!(cell_at(origin, pos2(10.0, 20.0), 10.0, 64, 96), Some((0, 0)));
        assert_eq!(cell_at(origin, pos2(35.0, 49.9), 10.0, 64, 96), Some((2, 2)));
        assert_eq!(cell_at(origin, pos2(969.0, 659.0), 10.0, 64, 96), Some((63, 95)));
    }

    #[test]
    fn pixel_outside_board_maps_to_nothing() {
        let origin = pos2(0.0, 0.0);
        assert_eq!(cell_at(origin, pos2(-1.0, 5.0), 10.0, 4, 4), None);
        assert_eq!(cell_at(origin, pos2(40.0, 5.0), 10.0, 4, 4), None);
        assert_eq!(cell_at(origin, pos2(5.0, 40.0), 10.0, 4, 4), None);
    }

    #[test]
    fn dying_cells_use_their_own_color() {
        let mut app = GameOfLife::new(conway::LifeConfig::default());
        app.dying_color = Color32::RED;
        assert_eq!(app.cell_color(Cell::Dead, Some(CellTransition::Dying)), Color32::RED);
        assert_eq!(app.cell_color(Cell::Alive, Some(CellTransition::Born)), app.live_color);
        assert_eq!(app.cell_color(Cell::Dead, None), app.dead_color);
    }

    #[test]
    fn failed_load_reports_without_changing_state() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = GameOfLife::new(conway::LifeConfig {
            save_path: dir.path().join("absent.json"),
            ..Default::default()
        });
        app.load_pattern(0);
        let before = app.state.clone();
        app.load();
        assert!(app.status.starts_with("Error:"));
        assert_eq!(app.state, before);
    }
}
