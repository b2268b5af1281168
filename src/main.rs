use glade::graphics;
use glade::simulation::ecosystem::Ecosystem;
use glade::simulation::params::Params;
use glade::ui;
use macroquad::prelude::*;

const CONFIG_PATH: &str = "glade.json";

#[macroquad::main("Glade")]
async fn main() {
    let mut genesis = true;

    let mut state: Option<Ecosystem> = None;
    let mut ui_state = ui::UIState::new();

    let params = if std::path::Path::new(CONFIG_PATH).exists() {
        match Params::load_from_file(CONFIG_PATH) {
            Ok(params) => params,
            Err(e) => {
                eprintln!("Could not read {CONFIG_PATH} ({e}), using default parameters");
                Params::default()
            }
        }
    } else {
        Params::default()
    };

    println!("Starting glade ecosystem simulation");

    loop {
        if genesis {
            clear_background(LIGHTGRAY);
            let text = "Start a new glade by pressing Enter";
            let font_size = 30.0;

            let text_size = measure_text(text, None, font_size as _, 1.0);
            draw_text(
                text,
                screen_width() / 2. - text_size.width / 2.,
                screen_height() / 2. - text_size.height / 2.,
                font_size,
                DARKGRAY,
            );

            if is_key_down(KeyCode::Enter) {
                genesis = false;

                state = Some(Ecosystem::new(&params));
            }
            next_frame().await;
            continue;
        }

        // grass
        clear_background(Color::from_rgba(144, 238, 144, 255));

        if let Some(ref mut state) = state {
            if !ui_state.paused {
                for _ in 0..ui_state.steps_per_frame {
                    state.step(&params);
                }
            }
            ui_state.update_history(state);

            graphics::draw_ponds(state, &params);
            graphics::draw_trees(state, &params);
            graphics::draw_creatures(state, &params);

            ui::draw_ui(&mut ui_state, state, &params);
            ui::process_egui();
        }

        next_frame().await
    }
}
