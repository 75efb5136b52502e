// solver.rs - Wire types and HTTP client for the external pathfinding solver

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RunError;
use crate::grid::Coord;

/// Algorithm identifiers the solver understands.
pub const ALGORITHMS: &[&str] = &["astar", "dijkstra", "greedy"];

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const FIND_PATH_ROUTE: &str = "/api/find-path";

/// Body of a solve request. The grid is the wall-only 0/1 matrix from
/// `GridModel::to_binary_matrix`.
#[derive(Debug, Clone, Serialize)]
pub struct SolveRequest {
    pub grid: Vec<Vec<u8>>,
    pub start: Coord,
    pub end: Coord,
    pub algorithm: String,
}

/// Successful solver response. `explored` is in visitation order and drives
/// the first animation phase; `path` runs start to end inclusive and is
/// empty when no path exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResult {
    pub found: bool,
    pub explored: Vec<Coord>,
    pub path: Vec<Coord>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Thin client over the solver endpoint. One request per run; no retries,
/// no timeout beyond the transport's own.
pub struct SolveClient {
    http: reqwest::Client,
    find_path_url: String,
}

impl SolveClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            find_path_url: format!("{}{}", base_url.trim_end_matches('/'), FIND_PATH_ROUTE),
        }
    }

    /// Submits the grid and returns the solver's trace.
    ///
    /// Transport failures map to `RunError::Network`; a non-2xx status or an
    /// explicit `error` field map to `RunError::Solver` with the solver's
    /// message surfaced verbatim.
    pub async fn submit(&self, request: &SolveRequest) -> Result<SolveResult, RunError> {
        debug!(url = %self.find_path_url, algorithm = %request.algorithm, "submitting solve request");

        let response = self.http.post(&self.find_path_url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("solver returned status {status}"));
            return Err(RunError::Solver(message));
        }

        // A 2xx body may still carry an explicit error field
        if let Ok(err) = serde_json::from_str::<ErrorBody>(&body) {
            return Err(RunError::Solver(err.error));
        }

        serde_json::from_str(&body)
            .map_err(|e| RunError::Solver(format!("invalid solver response: {e}")))
    }
}
