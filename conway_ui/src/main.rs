// main.rs - Interactive Conway's Game of Life
// Window, input and drawing only; the simulation lives in the `conway` crate.

use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use conway::{LifeConfig, LifeError, SimulationState, TransitionMap};

mod ui;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = LifeConfig::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "falling back to default config");
        LifeConfig::default()
    });
    info!(rows = config.rows, cols = config.cols, boundary = ?config.boundary, "starting");

    let (width, height) = config.canvas_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width.max(640.0) + 16.0, height + 140.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(config))),
    )
}

pub struct GameOfLife {
    pub state: SimulationState,
    pub config: LifeConfig,
    /// Transitions of the last step, cleared by any edit.
    pub transitions: Option<TransitionMap>,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub selected_pattern: usize,
    pub status: String,
    pub live_color: Color32,
    pub dying_color: Color32,
    pub dead_color: Color32,
    pub grid_color: Color32,
}

impl GameOfLife {
    pub fn new(config: LifeConfig) -> Self {
        Self {
            state: SimulationState::new(config.rows, config.cols, config.boundary),
            update_interval: Duration::from_millis(config.update_interval_ms),
            config,
            transitions: None,
            last_update: Instant::now(),
            selected_pattern: 0,
            status: String::from("Ready"),
            live_color: Color32::from_rgb(255, 255, 255),
            dying_color: Color32::from_rgb(10, 10, 10),
            dead_color: Color32::from_rgb(10, 10, 10),
            grid_color: Color32::from_rgb(60, 60, 60),
        }
    }

    pub fn step(&mut self) {
        self.transitions = Some(self.state.step());
        self.last_update = Instant::now();
    }

    pub fn clear_grid(&mut self) {
        self.state.clear();
        self.transitions = None;
        self.status = String::from("Erased grid");
    }

    pub fn save(&mut self) {
        let path = self.config.save_path.clone();
        let result = self.state.save_file(&path).map_err(LifeError::from);
        self.report(result, format!("Saved to {}", path.display()));
    }

    pub fn load(&mut self) {
        let path = self.config.save_path.clone();
        let result = self.state.load_file(&path).map_err(LifeError::from);
        self.report(result, format!("Loaded from {}", path.display()));
    }

    pub fn load_pattern(&mut self, index: usize) {
        let Some(pattern) = conway::PATTERNS.get(index) else {
            return;
        };
        self.selected_pattern = index;
        let result = self.state.load_preset(pattern.id).map_err(LifeError::from);
        self.report(result, format!("Loaded preset {}", pattern.name));
    }

    /// Surface a command's outcome in the status bar; failures never abort
    /// the session.
    fn report(&mut self, result: Result<(), LifeError>, success: String) {
        match result {
            Ok(()) => {
                self.transitions = None;
                self.status = success;
            }
            Err(err) => {
                warn!(error = %err, "command failed");
                self.status = format!("Error: {err}");
            }
        }
    }
}
