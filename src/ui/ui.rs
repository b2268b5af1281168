use crate::simulation::ecosystem::Ecosystem;
use crate::simulation::params::Params;
use egui_macroquad::egui;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

/// UI-side state: pause/speed controls and plot histories.
pub struct UIState {
    /// Population samples for the time-series plot.
    pub population_history: VecDeque<(f64, f64)>,
    /// Hanging-apple samples for the time-series plot.
    pub apple_history: VecDeque<(f64, f64)>,
    /// Whether the simulation is paused.
    pub paused: bool,
    /// Ticks run per rendered frame.
    pub steps_per_frame: usize,
    last_sample_time: f32,
    sample_interval: f32,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

impl UIState {
    /// Creates the UI state with default controls and empty histories.
    pub fn new() -> Self {
        Self {
            population_history: VecDeque::new(),
            apple_history: VecDeque::new(),
            paused: false,
            steps_per_frame: 1,
            last_sample_time: 0.0,
            sample_interval: 10.0, // Sample every 10 ticks
        }
    }

    /// Samples the ecosystem into the plot histories at the sample interval.
    pub fn update_history(&mut self, ecosystem: &Ecosystem) {
        if ecosystem.time - self.last_sample_time >= self.sample_interval {
            self.last_sample_time = ecosystem.time;

            self.population_history
                .push_back((ecosystem.time as f64, ecosystem.creatures.len() as f64));
            self.apple_history
                .push_back((ecosystem.time as f64, ecosystem.apple_count() as f64));

            if self.population_history.len() > MAX_HISTORY_POINTS {
                self.population_history.pop_front();
            }
            if self.apple_history.len() > MAX_HISTORY_POINTS {
                self.apple_history.pop_front();
            }
        }
    }
}

/// Draws all egui panels for this frame.
pub fn draw_ui(state: &mut UIState, ecosystem: &Ecosystem, params: &Params) {
    egui_macroquad::ui(|egui_ctx| {
        super::stats::draw_stats_panel(egui_ctx, state, ecosystem, params);
        super::events::draw_events_panel(egui_ctx, ecosystem);
    });
}

/// Flushes the egui draw data to the screen.
pub fn process_egui() {
    egui_macroquad::draw();
}
