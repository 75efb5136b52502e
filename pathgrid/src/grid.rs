// grid.rs - Cell states and the grid model for the pathfinding visualizer

use serde::{Deserialize, Serialize};

use crate::error::RunError;
use crate::input::DrawMode;

// Compile-time grid size configuration
pub const GRID_SIZE: usize = 40;                      // Fixed 40x40 playing area
pub const DEFAULT_START: Coord = Coord { x: 5, y: 5 };
pub const DEFAULT_END: Coord = Coord { x: GRID_SIZE - 6, y: GRID_SIZE - 6 };

pub type CellRow = [CellState; GRID_SIZE];
pub type Cells = [CellRow; GRID_SIZE];

/// What a single grid cell currently represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Explored,
    Path,
}

/// Zero-based grid coordinate, `x` and `y` in `[0, GRID_SIZE)`.
/// Serializes as `{"x": .., "y": ..}` to match the solver's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }
}

/// Owns the cell array plus the start/end role coordinates.
///
/// The coordinates are not independent storage: if `start` is set, the cell
/// at that coordinate holds `CellState::Start` (same for `end`). Every
/// mutation goes through the methods below, which keep both views in sync.
pub struct GridModel {
    cells: Cells,
    start: Option<Coord>,
    end: Option<Coord>,
}

impl Default for GridModel {
    fn default() -> Self {
        let mut grid = Self {
            cells: [[CellState::Empty; GRID_SIZE]; GRID_SIZE],
            start: None,
            end: None,
        };
        grid.reset();
        grid
    }
}

impl GridModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to all-empty with the default start and end placement.
    pub fn reset(&mut self) {
        self.cells = [[CellState::Empty; GRID_SIZE]; GRID_SIZE];
        self.start = Some(DEFAULT_START);
        self.end = Some(DEFAULT_END);
        self.cells[DEFAULT_START.y][DEFAULT_START.x] = CellState::Start;
        self.cells[DEFAULT_END.y][DEFAULT_END.x] = CellState::End;
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn cell(&self, c: Coord) -> Option<CellState> {
        c.in_bounds().then(|| self.cells[c.y][c.x])
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// Applies a user edit at `c` according to the active draw mode.
    /// Out-of-bounds coordinates are ignored.
    ///
    /// Start/End placement is rejected on cells holding the other role or a
    /// wall; a successful placement moves the role, reverting the previous
    /// cell to empty. Wall mode toggles: empty/explored/path cells become
    /// walls, walls revert to empty, start/end cells are left alone.
    pub fn set_cell(&mut self, c: Coord, mode: DrawMode) {
        let Some(current) = self.cell(c) else {
            return;
        };

        match mode {
            DrawMode::Start => {
                if current == CellState::End || current == CellState::Wall {
                    return;
                }
                if let Some(old) = self.start {
                    if self.cells[old.y][old.x] == CellState::Start {
                        self.cells[old.y][old.x] = CellState::Empty;
                    }
                }
                self.start = Some(c);
                self.cells[c.y][c.x] = CellState::Start;
            }
            DrawMode::End => {
                if current == CellState::Start || current == CellState::Wall {
                    return;
                }
                if let Some(old) = self.end {
                    if self.cells[old.y][old.x] == CellState::End {
                        self.cells[old.y][old.x] = CellState::Empty;
                    }
                }
                self.end = Some(c);
                self.cells[c.y][c.x] = CellState::End;
            }
            DrawMode::Wall => match current {
                CellState::Empty | CellState::Explored | CellState::Path => {
                    self.cells[c.y][c.x] = CellState::Wall;
                }
                CellState::Wall => {
                    self.cells[c.y][c.x] = CellState::Empty;
                }
                CellState::Start | CellState::End => {}
            },
        }
    }

    /// Drag-painting variant of wall placement: converts empty/explored/path
    /// cells to walls but never toggles a wall back, so sweeping over the
    /// same cells twice does not erase them.
    pub fn paint_wall(&mut self, c: Coord) {
        if let Some(CellState::Empty | CellState::Explored | CellState::Path) = self.cell(c) {
            self.cells[c.y][c.x] = CellState::Wall;
        }
    }

    /// Reverts every explored/path cell back to empty. Idempotent.
    pub fn clear_search_state(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                if matches!(cell, CellState::Explored | CellState::Path) {
                    *cell = CellState::Empty;
                }
            }
        }
    }

    /// Wall-only view of the grid for solve requests: 1 = wall, 0 = open.
    pub fn to_binary_matrix(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| u8::from(*cell == CellState::Wall))
                    .collect()
            })
            .collect()
    }

    /// Checks that both endpoints exist and still hold their role, returning
    /// their coordinates. Runs before any solve request is sent.
    pub fn validated_endpoints(&self) -> Result<(Coord, Coord), RunError> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(RunError::MissingEndpoints);
        };
        if self.cells[start.y][start.x] != CellState::Start {
            return Err(RunError::StaleEndpoint { role: "start" });
        }
        if self.cells[end.y][end.x] != CellState::End {
            return Err(RunError::StaleEndpoint { role: "end" });
        }
        Ok((start, end))
    }

    /// Marks `c` as explored if it is currently empty. Returns whether the
    /// cell actually changed, so the replay can skip already-painted cells
    /// without spending a frame delay on them.
    pub(crate) fn mark_explored(&mut self, c: Coord) -> bool {
        if self.cell(c) == Some(CellState::Empty) {
            self.cells[c.y][c.x] = CellState::Explored;
            true
        } else {
            false
        }
    }

    pub(crate) fn mark_path(&mut self, c: Coord) {
        if c.in_bounds() {
            self.cells[c.y][c.x] = CellState::Path;
        }
    }
}
