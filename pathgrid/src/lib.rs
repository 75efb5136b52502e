//! Core logic for the pathfinding grid visualizer: the editable grid model,
//! pointer-input handling, the solver HTTP client, and the two-phase replay
//! of a solver trace. Rendering lives in `pathgrid_app`; this crate has no
//! GUI dependency and is driven entirely through explicit calls.

pub mod animate;
pub mod error;
pub mod grid;
pub mod input;
pub mod solver;

pub use animate::{AnimationPlayer, PlayerState, RunSummary, EXPLORE_STEP, PATH_STEP};
pub use error::RunError;
pub use grid::{CellState, Coord, GridModel, GRID_SIZE};
pub use input::{DrawMode, InputController};
pub use solver::{SolveClient, SolveRequest, SolveResult, ALGORITHMS, DEFAULT_BASE_URL};
