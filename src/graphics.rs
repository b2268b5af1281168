use crate::simulation::creature::Antenna;
use crate::simulation::ecosystem::Ecosystem;
use crate::simulation::params::Params;
use macroquad::prelude::*;
use ndarray::Array1;

const BODY_RADIUS: f32 = 8.0;
const APPLE_RADIUS: f32 = 3.5;
const TRUNK_WIDTH: f32 = 8.0;
const CROWN_RADIUS: f32 = 26.0;

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

impl ToScreen for Array1<f32> {
    type Output = Array1<f32>;
    fn to_screen(&self, params: &Params) -> Array1<f32> {
        let screen_w = screen_width();
        let screen_h = screen_height();
        let scale_x = screen_w / params.world_width;
        let scale_y = screen_h / params.world_height;
        Array1::from_vec(vec![self[0] * scale_x, self[1] * scale_y])
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        let screen_w = screen_width();
        let screen_h = screen_height();
        let scale_x = screen_w / params.world_width;
        let scale_y = screen_h / params.world_height;
        let scale = scale_x.min(scale_y);
        self * scale
    }
}

pub fn draw_ponds(state: &Ecosystem, params: &Params) {
    state.ponds.iter().for_each(|pond| {
        let screen_pos = pond.pos.to_screen(params);
        let screen_radius = pond.radius.to_screen(params);
        draw_circle(
            screen_pos[0],
            screen_pos[1],
            screen_radius,
            Color::from_rgba(65, 105, 225, 255),
        );
        // water effect ring
        draw_circle_lines(
            screen_pos[0],
            screen_pos[1],
            screen_radius * 0.8,
            1.5,
            Color::from_rgba(135, 206, 235, 255),
        );
    });
}

pub fn draw_trees(state: &Ecosystem, params: &Params) {
    state.trees.iter().for_each(|tree| {
        let screen_pos = tree.pos.to_screen(params);
        let crown_offset = params.crown_offset.to_screen(params);

        let trunk_width = TRUNK_WIDTH.to_screen(params);
        draw_rectangle(
            screen_pos[0] - trunk_width / 2.0,
            screen_pos[1] - crown_offset,
            trunk_width,
            crown_offset,
            Color::from_rgba(110, 74, 42, 255),
        );

        draw_circle(
            screen_pos[0],
            screen_pos[1] - crown_offset,
            CROWN_RADIUS.to_screen(params),
            Color::from_rgba(34, 120, 34, 255),
        );

        for apple in &tree.apples {
            let apple_pos = apple.pos.to_screen(params);
            draw_circle(
                apple_pos[0],
                apple_pos[1],
                APPLE_RADIUS.to_screen(params),
                Color::from_rgba(220, 30, 30, 255),
            );
        }
    });
}

pub fn draw_creatures(state: &Ecosystem, params: &Params) {
    state.creatures.iter().for_each(|creature| {
        let screen_pos = creature.pos.to_screen(params);
        let screen_radius = BODY_RADIUS.to_screen(params);

        // line to the current target
        if let Some(target) = &creature.target {
            let target_pos = target.to_screen(params);
            draw_line(
                screen_pos[0],
                screen_pos[1],
                target_pos[0],
                target_pos[1],
                1.0,
                Color::from_rgba(60, 60, 60, 60),
            );
        }

        // apple-detection range
        draw_circle_lines(
            screen_pos[0],
            screen_pos[1],
            creature.view_range.to_screen(params),
            1.0,
            Color::from_rgba(173, 216, 230, 80),
        );

        draw_circle(
            screen_pos[0],
            screen_pos[1],
            screen_radius,
            Color::from_rgba(222, 184, 135, 255),
        );

        draw_antennae(creature.antenna, &screen_pos, screen_radius);

        // need bars above the body, hunger over thirst
        let bar_width = 20.0;
        let bar_height = 3.0;
        let bar_x = screen_pos[0] - bar_width / 2.0;
        let hunger_bar_y = screen_pos[1] - screen_radius - 10.0;
        let thirst_bar_y = screen_pos[1] - screen_radius - 5.0;

        draw_need_bar(
            bar_x,
            hunger_bar_y,
            bar_width,
            bar_height,
            creature.hunger / params.need_max,
            Color::from_rgba(255, 0, 0, 255),
        );
        draw_need_bar(
            bar_x,
            thirst_bar_y,
            bar_width,
            bar_height,
            creature.thirst / params.need_max,
            Color::from_rgba(0, 0, 255, 255),
        );

        let id_text = format!("#{}", creature.id);
        let id_text_size = measure_text(&id_text, None, 9, 1.0);
        draw_text(
            &id_text,
            screen_pos[0] - id_text_size.width / 2.0,
            hunger_bar_y - 4.0,
            9.0,
            BLACK,
        );
    });
}

fn draw_need_bar(x: f32, y: f32, width: f32, height: f32, fill: f32, color: Color) {
    draw_rectangle(x, y, width, height, Color::from_rgba(255, 255, 255, 200));
    draw_rectangle(x, y, width * fill.clamp(0.0, 1.0), height, color);
}

fn draw_antennae(antenna: Antenna, screen_pos: &Array1<f32>, body_radius: f32) {
    let stalk = body_radius * 0.9;
    for side in [-1.0f32, 1.0] {
        let base_x = screen_pos[0] + side * body_radius * 0.5;
        let base_y = screen_pos[1] - body_radius * 0.8;
        let tip_y = base_y - stalk;
        draw_line(base_x, base_y, base_x, tip_y, 1.0, BLACK);
        match antenna {
            Antenna::Round => draw_circle(base_x, tip_y, 2.0, BLACK),
            Antenna::Square => draw_rectangle(base_x - 2.0, tip_y - 2.0, 4.0, 4.0, BLACK),
        }
    }
}
