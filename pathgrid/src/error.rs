// error.rs - Everything that can abort a solve-and-replay run

use thiserror::Error;

/// Failures surfaced at the run boundary. None of these are fatal: the grid
/// keeps its pre-run state and the run can be retried after correcting it.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Please set both start and end points")]
    MissingEndpoints,

    /// The recorded start/end coordinate no longer holds its role.
    #[error("{role} point is invalid. Please set the {role} point again.")]
    StaleEndpoint { role: &'static str },

    #[error("could not reach the solver: {0}")]
    Network(#[from] reqwest::Error),

    /// The solver reported a failure; its message is passed through verbatim.
    #[error("{0}")]
    Solver(String),

    /// The solver referenced a cell outside the grid. Treated as a contract
    /// violation and rejected before any cell is painted.
    #[error("solver returned out-of-bounds cell ({x}, {y})")]
    OutOfBounds { x: usize, y: usize },
}
