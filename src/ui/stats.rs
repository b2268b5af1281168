use crate::simulation::ecosystem::Ecosystem;
use crate::simulation::params::Params;
use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::VecDeque;

use super::ui::UIState;

pub(super) fn draw_stats_panel(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    ecosystem: &Ecosystem,
    params: &Params,
) {
    egui::SidePanel::right("stats_panel")
        .default_width(260.0)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Simulation Stats");
            ui.separator();

            ui.horizontal(|ui| {
                let button_text = if state.paused {
                    "▶ Resume"
                } else {
                    "⏸ Pause"
                };
                if ui.button(button_text).clicked() {
                    state.paused = !state.paused;
                }
            });

            ui.label("Ticks per frame");
            ui.add(egui::Slider::new(&mut state.steps_per_frame, 1..=20));

            ui.separator();

            ui.label(format!("Tick: {:.0}", ecosystem.time));
            ui.label(format!(
                "Creatures: {}/{}",
                ecosystem.creatures.len(),
                params.max_creatures
            ));
            ui.label(format!("Trees: {}", ecosystem.trees.len()));
            ui.label(format!("Apples: {}", ecosystem.apple_count()));
            ui.label(format!("Ponds: {}", ecosystem.ponds.len()));
            ui.label(format!("Pending regrowth: {}", ecosystem.pending.len()));

            ui.separator();

            ui.label(format!("Births: {}", ecosystem.stats.total_births));
            ui.label(format!("Deaths: {}", ecosystem.stats.total_deaths));
            ui.label(format!("Apples eaten: {}", ecosystem.stats.apples_eaten));
            ui.label(format!(
                "Peak population: {}",
                ecosystem.stats.peak_population
            ));

            ui.separator();

            ui.label("Population");
            draw_time_series_plot(
                ui,
                "population_plot",
                &state.population_history,
                "tick",
                "creatures",
            );

            ui.separator();

            ui.label("Apples on trees");
            draw_time_series_plot(ui, "apple_plot", &state.apple_history, "tick", "apples");
        });
}

fn draw_time_series_plot(
    ui: &mut egui::Ui,
    id: &str,
    data: &VecDeque<(f64, f64)>,
    x_label: &str,
    y_label: &str,
) {
    if data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
    let line = Line::new(points);

    Plot::new(id)
        .height(120.0)
        .show_axes([true, true])
        .label_formatter(|_name, value| {
            format!("{}: {:.1}\n{}: {:.2}", x_label, value.x, y_label, value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
