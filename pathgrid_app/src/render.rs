// render.rs - Stateless painter: grid state in, filled squares out

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};
use pathgrid::{CellState, Coord, GridModel, GRID_SIZE};

pub const CELL_SIZE: f32 = 15.0;

const GRID_LINE: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0);

/// Fixed color per cell role.
pub fn cell_color(state: CellState) -> Color32 {
    match state {
        CellState::Empty => Color32::WHITE,
        CellState::Wall => Color32::from_rgb(0x2d, 0x37, 0x48),
        CellState::Start => Color32::from_rgb(0x48, 0xbb, 0x78),
        CellState::End => Color32::from_rgb(0xf5, 0x65, 0x65),
        CellState::Explored => Color32::from_rgb(0x90, 0xcd, 0xf4),
        CellState::Path => Color32::from_rgb(0xfb, 0xbf, 0x24),
    }
}

pub fn grid_extent() -> Vec2 {
    Vec2::splat(CELL_SIZE * GRID_SIZE as f32)
}

/// Paints every cell: filled square plus a light grid-line border.
pub fn paint_grid(painter: &egui::Painter, origin: Pos2, grid: &GridModel) {
    for (y, row) in grid.cells().iter().enumerate() {
        for (x, state) in row.iter().enumerate() {
            let rect = cell_rect(origin, x, y);
            painter.rect_filled(rect, 0.0, cell_color(*state));
            painter.rect_stroke(rect, 0.0, Stroke::new(0.5, GRID_LINE));
        }
    }
}

fn cell_rect(origin: Pos2, x: usize, y: usize) -> Rect {
    let min = egui::pos2(
        origin.x + x as f32 * CELL_SIZE,
        origin.y + y as f32 * CELL_SIZE,
    );
    Rect::from_min_size(min, Vec2::splat(CELL_SIZE))
}

/// Grid coordinate under a screen position, if any.
pub fn cell_at(origin: Pos2, pos: Pos2) -> Option<Coord> {
    let dx = pos.x - origin.x;
    let dy = pos.y - origin.y;
    if dx < 0.0 || dy < 0.0 {
        return None;
    }
    let c = Coord::new((dx / CELL_SIZE) as usize, (dy / CELL_SIZE) as usize);
    c.in_bounds().then_some(c)
}
