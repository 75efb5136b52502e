// input.rs - Pointer and mode-selection handling for grid edits

use crate::grid::{Coord, GridModel};

/// How pointer interactions mutate the grid. Exactly one mode is active at
/// a time; it starts at `Wall` and only changes on explicit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    #[default]
    Wall,
    Start,
    End,
}

impl DrawMode {
    pub fn label(&self) -> &'static str {
        match self {
            DrawMode::Wall => "Wall",
            DrawMode::Start => "Start",
            DrawMode::End => "End",
        }
    }
}

/// Translates pointer events into grid mutations.
///
/// A press applies the active mode at the pressed cell; while the button is
/// held, moves in wall mode keep painting walls (but never erase, so a drag
/// cannot undo itself). Moves in start/end mode do nothing, endpoints are
/// placed by discrete clicks only.
#[derive(Debug, Default)]
pub struct InputController {
    pub draw_mode: DrawMode,
    is_painting: bool,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_mode(&mut self, mode: DrawMode) {
        self.draw_mode = mode;
    }

    pub fn is_painting(&self) -> bool {
        self.is_painting
    }

    pub fn pointer_down(&mut self, grid: &mut GridModel, c: Coord) {
        self.is_painting = true;
        grid.set_cell(c, self.draw_mode);
    }

    pub fn pointer_moved(&mut self, grid: &mut GridModel, c: Coord) {
        if self.is_painting && self.draw_mode == DrawMode::Wall {
            grid.paint_wall(c);
        }
    }

    pub fn pointer_up(&mut self) {
        self.is_painting = false;
    }

    pub fn pointer_left(&mut self) {
        self.is_painting = false;
    }
}
