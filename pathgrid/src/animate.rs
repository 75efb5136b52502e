// animate.rs - Two-phase replay of a solver trace over the grid

use std::time::Duration;

use tracing::info;

use crate::error::RunError;
use crate::grid::GridModel;
use crate::solver::SolveResult;

/// Delay between explored-cell steps.
pub const EXPLORE_STEP: Duration = Duration::from_millis(10);
/// Delay between path-cell steps.
pub const PATH_STEP: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Exploring,
    PathDrawing,
    Done,
}

/// Summary shown once a replay finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub found: bool,
    /// Full path length, start and end cells included.
    pub path_len: usize,
    pub explored_count: usize,
}

/// Replays a solve result cell by cell: first the explored set in visitation
/// order, then the path interior. The caller owns the clock; each `tick`
/// applies one visible mutation and reports how long to wait before the next.
#[derive(Debug, Default)]
pub struct AnimationPlayer {
    state: PlayerState,
    result: Option<SolveResult>,
    cursor: usize,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// True while a replay still has steps to play.
    pub fn is_active(&self) -> bool {
        matches!(self.state, PlayerState::Exploring | PlayerState::PathDrawing)
    }

    /// Starts a replay. Every coordinate the solver returned is bounds-checked
    /// up front: a stray coordinate is a contract violation and must fail
    /// before any cell is painted, leaving the grid in its pre-run state.
    pub fn begin(&mut self, result: SolveResult) -> Result<(), RunError> {
        debug_assert!(!self.is_active(), "run control must be disabled during a replay");

        for c in result.explored.iter().chain(result.path.iter()) {
            if !c.in_bounds() {
                return Err(RunError::OutOfBounds { x: c.x, y: c.y });
            }
        }

        info!(
            found = result.found,
            explored = result.explored.len(),
            path = result.path.len(),
            "starting replay"
        );
        self.result = Some(result);
        self.cursor = 0;
        self.state = PlayerState::Exploring;
        Ok(())
    }

    /// Advances the replay by one visible step.
    ///
    /// Returns the delay to wait before calling again, or `None` once the
    /// replay is done (or was never started). Explored coordinates whose cell
    /// is no longer empty are skipped without consuming a delay, so the
    /// animation order stays exactly the solver's visitation order.
    pub fn tick(&mut self, grid: &mut GridModel) -> Option<Duration> {
        let result = self.result.as_ref()?;

        loop {
            match self.state {
                PlayerState::Exploring => {
                    if self.cursor < result.explored.len() {
                        let c = result.explored[self.cursor];
                        self.cursor += 1;
                        if grid.mark_explored(c) {
                            return Some(EXPLORE_STEP);
                        }
                        // Already-painted cell: move straight on
                    } else if result.found && !result.path.is_empty() {
                        // Skip the start cell, it keeps its role color
                        self.cursor = 1;
                        self.state = PlayerState::PathDrawing;
                    } else {
                        self.state = PlayerState::Done;
                        return None;
                    }
                }
                PlayerState::PathDrawing => {
                    // Stop short of the end cell for the same reason
                    if self.cursor + 1 < result.path.len() {
                        let c = result.path[self.cursor];
                        self.cursor += 1;
                        grid.mark_path(c);
                        return Some(PATH_STEP);
                    }
                    self.state = PlayerState::Done;
                    return None;
                }
                PlayerState::Idle | PlayerState::Done => return None,
            }
        }
    }

    /// Available once the replay reached `Done`.
    pub fn summary(&self) -> Option<RunSummary> {
        if self.state != PlayerState::Done {
            return None;
        }
        self.result.as_ref().map(|r| RunSummary {
            found: r.found,
            path_len: r.path.len(),
            explored_count: r.explored.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CellState, Coord, GridModel};
    use crate::input::DrawMode;

    fn drain(player: &mut AnimationPlayer, grid: &mut GridModel) -> Vec<Duration> {
        let mut delays = Vec::new();
        while let Some(delay) = player.tick(grid) {
            delays.push(delay);
        }
        delays
    }

    fn result(found: bool, explored: Vec<Coord>, path: Vec<Coord>) -> SolveResult {
        SolveResult { found, explored, path }
    }

    #[test]
    fn explored_cells_paint_in_visitation_order() {
        let mut grid = GridModel::new();
        let mut player = AnimationPlayer::new();

        let explored = vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)];
        player.begin(result(false, explored.clone(), vec![])).unwrap();

        // One mutation per tick, in order
        for (i, c) in explored.iter().enumerate() {
            assert_eq!(player.tick(&mut grid), Some(EXPLORE_STEP), "step {i}");
            assert_eq!(grid.cell(*c), Some(CellState::Explored));
            // Later cells untouched until their turn
            for later in &explored[i + 1..] {
                assert_eq!(grid.cell(*later), Some(CellState::Empty));
            }
        }
        assert_eq!(player.tick(&mut grid), None);
        assert_eq!(player.state(), PlayerState::Done);
    }

    #[test]
    fn non_empty_cells_are_skipped_without_delay() {
        let mut grid = GridModel::new();
        grid.set_cell(Coord::new(1, 0), DrawMode::Wall);
        let mut player = AnimationPlayer::new();

        player
            .begin(result(
                false,
                vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
                vec![],
            ))
            .unwrap();

        // Second tick must jump over the wall cell and paint (2,0)
        assert_eq!(player.tick(&mut grid), Some(EXPLORE_STEP));
        assert_eq!(player.tick(&mut grid), Some(EXPLORE_STEP));
        assert_eq!(grid.cell(Coord::new(1, 0)), Some(CellState::Wall));
        assert_eq!(grid.cell(Coord::new(2, 0)), Some(CellState::Explored));
        assert_eq!(player.tick(&mut grid), None);
    }

    #[test]
    fn not_found_never_paints_path() {
        let mut grid = GridModel::new();
        let mut player = AnimationPlayer::new();

        player
            .begin(result(false, vec![Coord::new(0, 0), Coord::new(1, 0)], vec![]))
            .unwrap();
        drain(&mut player, &mut grid);

        assert!(grid.cells().iter().flatten().all(|c| *c != CellState::Path));
        let summary = player.summary().unwrap();
        assert!(!summary.found);
        assert_eq!(summary.path_len, 0);
        assert_eq!(summary.explored_count, 2);
    }

    #[test]
    fn path_phase_skips_endpoints_and_uses_slower_cadence() {
        let mut grid = GridModel::new();
        let mut player = AnimationPlayer::new();

        let path = vec![
            Coord::new(5, 5),  // start
            Coord::new(6, 5),
            Coord::new(7, 5),
            Coord::new(8, 5),  // pretend end
        ];
        player
            .begin(result(true, vec![Coord::new(6, 5), Coord::new(7, 5)], path))
            .unwrap();

        let delays = drain(&mut player, &mut grid);
        assert_eq!(
            delays,
            vec![EXPLORE_STEP, EXPLORE_STEP, PATH_STEP, PATH_STEP]
        );

        // Interior cells turn to path, endpoints keep their colors
        assert_eq!(grid.cell(Coord::new(6, 5)), Some(CellState::Path));
        assert_eq!(grid.cell(Coord::new(7, 5)), Some(CellState::Path));
        assert_eq!(grid.cell(Coord::new(5, 5)), Some(CellState::Start));
        assert_eq!(grid.cell(Coord::new(8, 5)), Some(CellState::Empty));

        assert_eq!(player.summary().unwrap().path_len, 4);
    }

    #[test]
    fn single_cell_path_finishes_without_path_steps() {
        let mut grid = GridModel::new();
        let mut player = AnimationPlayer::new();

        player
            .begin(result(true, vec![Coord::new(5, 5)], vec![Coord::new(5, 5)]))
            .unwrap();
        let delays = drain(&mut player, &mut grid);

        // Start cell is non-empty so even the explore step is skipped
        assert!(delays.is_empty());
        assert_eq!(player.state(), PlayerState::Done);
    }

    #[test]
    fn out_of_bounds_result_fails_before_any_mutation() {
        let mut grid = GridModel::new();
        let snapshot = *grid.cells();
        let mut player = AnimationPlayer::new();

        let err = player
            .begin(result(
                true,
                vec![Coord::new(0, 0), Coord::new(40, 12)],
                vec![],
            ))
            .unwrap_err();

        assert!(matches!(err, RunError::OutOfBounds { x: 40, y: 12 }));
        assert_eq!(player.state(), PlayerState::Idle);
        assert_eq!(*grid.cells(), snapshot);
        assert_eq!(player.tick(&mut grid), None);
    }

    #[test]
    fn summary_is_absent_until_done() {
        let mut grid = GridModel::new();
        let mut player = AnimationPlayer::new();
        assert!(player.summary().is_none());

        player
            .begin(result(false, vec![Coord::new(0, 0)], vec![]))
            .unwrap();
        assert!(player.summary().is_none());

        drain(&mut player, &mut grid);
        assert!(player.summary().is_some());
    }

    #[test]
    fn rerun_replays_over_cleared_grid() {
        let mut grid = GridModel::new();
        let mut player = AnimationPlayer::new();

        player
            .begin(result(false, vec![Coord::new(0, 0)], vec![]))
            .unwrap();
        drain(&mut player, &mut grid);

        // The run boundary clears search state before starting again
        grid.clear_search_state();
        player
            .begin(result(false, vec![Coord::new(0, 0)], vec![]))
            .unwrap();
        let delays = drain(&mut player, &mut grid);

        assert_eq!(delays, vec![EXPLORE_STEP]);
        assert_eq!(grid.cell(Coord::new(0, 0)), Some(CellState::Explored));
    }
}
