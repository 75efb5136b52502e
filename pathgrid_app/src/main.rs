// main.rs - Desktop app for the pathfinding grid visualizer
// Owns the application state; ui.rs drives it, render.rs paints it.

use std::time::Instant;

use eframe::egui;
use pathgrid::{
    AnimationPlayer, GridModel, InputController, RunSummary, SolveClient, SolveRequest,
    DEFAULT_BASE_URL,
};
use tracing::{error, info};

mod render;
mod ui;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pathfinding Grid Visualizer",
        options,
        Box::new(|_cc| Box::new(PathgridApp::default())),
    )
}

pub struct PathgridApp {
    pub grid: GridModel,
    pub input: InputController,
    pub player: AnimationPlayer,
    pub algorithm: String,
    pub error: Option<String>,
    pub summary: Option<RunSummary>,
    next_step_at: Option<Instant>,

    client: SolveClient,
    runtime: tokio::runtime::Runtime,
}

impl Default for PathgridApp {
    fn default() -> Self {
        let base_url = std::env::var("PATHGRID_SOLVER_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        info!(%base_url, "using solver");

        Self {
            grid: GridModel::new(),
            input: InputController::new(),
            player: AnimationPlayer::new(),
            algorithm: "astar".to_string(),
            error: None,
            summary: None,
            next_step_at: None,
            client: SolveClient::new(&base_url),
            runtime: tokio::runtime::Runtime::new().expect("tokio runtime"),
        }
    }
}

impl PathgridApp {
    /// Run boundary: clear leftover search state, validate endpoints, submit,
    /// then hand the result to the replay. Any failure leaves the grid as it
    /// was and surfaces its message; the run control comes back either way.
    pub fn start_run(&mut self) {
        self.error = None;
        self.summary = None;
        self.grid.clear_search_state();

        let outcome = self.grid.validated_endpoints().and_then(|(start, end)| {
            let request = SolveRequest {
                grid: self.grid.to_binary_matrix(),
                start,
                end,
                algorithm: self.algorithm.clone(),
            };
            info!(algorithm = %self.algorithm, "running pathfinding");
            let result = self.runtime.block_on(self.client.submit(&request))?;
            self.player.begin(result)
        });

        match outcome {
            Ok(()) => self.next_step_at = Some(Instant::now()),
            Err(err) => {
                error!("run failed: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn clear(&mut self) {
        self.grid.clear_search_state();
        self.error = None;
        self.summary = None;
    }

    /// Called once per frame: plays the next replay step when its delay has
    /// elapsed and schedules a repaint for the one after.
    pub fn pump_animation(&mut self, ctx: &egui::Context) {
        if !self.player.is_active() {
            return;
        }

        let due = self.next_step_at.is_none_or(|at| Instant::now() >= at);
        if due {
            match self.player.tick(&mut self.grid) {
                Some(delay) => {
                    self.next_step_at = Some(Instant::now() + delay);
                    ctx.request_repaint_after(delay);
                }
                None => {
                    self.next_step_at = None;
                    self.summary = self.player.summary();
                    ctx.request_repaint();
                }
            }
        } else if let Some(at) = self.next_step_at {
            ctx.request_repaint_after(at.saturating_duration_since(Instant::now()));
        }
    }
}
