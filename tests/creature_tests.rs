#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use glade::simulation::creature::{Behavior, Creature};
use glade::simulation::params::Params;
use glade::simulation::pond::Pond;
use glade::simulation::tree::{Apple, AppleTree};
use ndarray::Array1;

fn create_test_params() -> Params {
    Params::default()
}

fn creature_at(x: f32, y: f32) -> Creature {
    let mut creature = Creature::new_random(0, &create_test_params());
    creature.pos = Array1::from_vec(vec![x, y]);
    creature.target = None;
    creature
}

fn tree_with_apples(x: f32, y: f32, apples: &[(f32, f32)]) -> AppleTree {
    AppleTree {
        pos: Array1::from_vec(vec![x, y]),
        apples: apples
            .iter()
            .map(|&(ax, ay)| Apple {
                pos: Array1::from_vec(vec![ax, ay]),
            })
            .collect(),
    }
}

fn far_pond() -> Vec<Pond> {
    vec![Pond::new(Array1::from_vec(vec![10_000.0, 10_000.0]), 40.0)]
}

#[test]
fn test_moves_exactly_speed_toward_target() {
    let mut creature = creature_at(0.0, 0.0);
    creature.speed = 5.0;
    creature.target = Some(Array1::from_vec(vec![100.0, 0.0]));

    creature.advance();

    assert_eq!(creature.pos[0], 5.0);
    assert_eq!(creature.pos[1], 0.0);
    assert!(creature.target.is_some());
}

#[test]
fn test_snaps_onto_target_and_clears_it() {
    let mut creature = creature_at(96.0, 0.0);
    creature.speed = 5.0;
    creature.target = Some(Array1::from_vec(vec![100.0, 0.0]));

    creature.advance();

    assert_eq!(creature.pos[0], 100.0);
    assert_eq!(creature.pos[1], 0.0);
    assert!(creature.target.is_none());
}

#[test]
fn test_displacement_is_bounded_by_speed() {
    let mut creature = creature_at(0.0, 0.0);
    creature.speed = 1.0;
    creature.target = Some(Array1::from_vec(vec![10.0, 10.0]));

    creature.advance();

    let displacement = (creature.pos[0].powi(2) + creature.pos[1].powi(2)).sqrt();
    assert!((displacement - creature.speed).abs() < 1e-3);
    assert!(creature.target.is_some());
}

#[test]
fn test_advance_without_target_is_a_noop() {
    let mut creature = creature_at(33.0, 44.0);
    creature.speed = 5.0;

    creature.advance();

    assert_eq!(creature.pos[0], 33.0);
    assert_eq!(creature.pos[1], 44.0);
}

#[test]
fn test_hungry_creature_targets_nearest_apple() {
    let params = create_test_params();
    let mut creature = creature_at(0.0, 0.0);
    creature.view_range = 150.0;
    creature.hunger = 80.0;
    creature.thirst = 75.0; // hungrier than thirsty, food wins

    let trees = vec![
        tree_with_apples(60.0, 50.0, &[(60.0, 0.0)]),
        tree_with_apples(40.0, 50.0, &[(40.0, 0.0)]),
    ];

    creature.choose_goal(&trees, &far_pond(), &params);

    assert_eq!(creature.behavior, Behavior::SeekingFood);
    let target = creature.target.expect("should target an apple");
    assert_eq!(target[0], 40.0);
    assert_eq!(target[1], 0.0);
}

#[test]
fn test_first_found_apple_wins_distance_ties() {
    let params = create_test_params();
    let mut creature = creature_at(0.0, 0.0);
    creature.view_range = 150.0;
    creature.hunger = 80.0;
    creature.thirst = 0.0;

    let trees = vec![
        tree_with_apples(50.0, 50.0, &[(50.0, 0.0)]),
        tree_with_apples(0.0, 100.0, &[(0.0, 50.0)]),
    ];

    creature.choose_goal(&trees, &far_pond(), &params);

    let target = creature.target.expect("should target an apple");
    assert_eq!(target[0], 50.0);
    assert_eq!(target[1], 0.0);
}

#[test]
fn test_apple_beyond_view_range_falls_back_to_wandering_target() {
    let params = create_test_params();
    let mut creature = creature_at(400.0, 300.0);
    creature.view_range = 100.0;
    creature.hunger = 80.0;
    creature.thirst = 0.0;

    let trees = vec![tree_with_apples(5_000.0, 5_000.0, &[(5_000.0, 5_000.0)])];

    creature.choose_goal(&trees, &far_pond(), &params);

    // Still in food-seeking mode, but heading somewhere random in bounds
    assert_eq!(creature.behavior, Behavior::SeekingFood);
    let target = creature.target.expect("should have a fallback target");
    assert!(target[0] >= params.wander_margin);
    assert!(target[0] <= params.world_width - params.wander_margin);
    assert!(target[1] >= params.wander_margin);
    assert!(target[1] <= params.world_height - params.wander_margin);
}

#[test]
fn test_thirsty_creature_targets_nearest_pond() {
    let params = create_test_params();
    let mut creature = creature_at(0.0, 0.0);
    creature.hunger = 60.0;
    creature.thirst = 80.0;

    let ponds = vec![
        Pond::new(Array1::from_vec(vec![300.0, 0.0]), 40.0),
        Pond::new(Array1::from_vec(vec![100.0, 0.0]), 40.0),
    ];

    creature.choose_goal(&[], &ponds, &params);

    assert_eq!(creature.behavior, Behavior::SeekingWater);
    let target = creature.target.expect("should target a pond");
    assert_eq!(target[0], 100.0);
    assert_eq!(target[1], 0.0);
}

#[test]
fn test_content_creature_wanders_within_bounds() {
    let params = create_test_params();
    let mut creature = creature_at(400.0, 300.0);
    creature.hunger = 50.0;
    creature.thirst = 50.0;

    creature.choose_goal(&[], &far_pond(), &params);

    assert_eq!(creature.behavior, Behavior::Wandering);
    let target = creature.target.expect("should pick a wander target");
    assert!(target[0] >= params.wander_margin);
    assert!(target[0] <= params.world_width - params.wander_margin);
    assert!(target[1] >= params.wander_margin);
    assert!(target[1] <= params.world_height - params.wander_margin);
}

#[test]
fn test_content_creature_keeps_existing_target() {
    let params = create_test_params();
    let mut creature = creature_at(0.0, 0.0);
    creature.hunger = 10.0;
    creature.thirst = 10.0;
    creature.target = Some(Array1::from_vec(vec![30.0, 30.0]));

    creature.choose_goal(&[], &far_pond(), &params);

    let target = creature.target.expect("target should survive");
    assert_eq!(target[0], 30.0);
    assert_eq!(target[1], 30.0);
}

#[test]
fn test_needs_clamp_at_saturation() {
    let params = create_test_params();
    let mut creature = creature_at(0.0, 0.0);
    creature.hunger = 50.0;
    creature.thirst = params.need_max;

    creature.tick_needs(&params);

    assert!((creature.hunger - 50.1).abs() < 1e-4);
    assert_eq!(creature.thirst, params.need_max);
    assert!(creature.is_starved(&params));
}

#[test]
fn test_offspring_stays_within_perturbation_bounds() {
    let params = create_test_params();
    let mut parent = creature_at(400.0, 300.0);
    parent.speed = 2.0;
    parent.view_range = 150.0;

    for i in 0..200 {
        let child = parent.offspring(1000 + i, &params);

        assert_eq!(child.antenna, parent.antenna);
        assert_eq!(child.hunger, 50.0);
        assert_eq!(child.thirst, 50.0);
        assert!(child.target.is_none());
        assert!((child.speed - parent.speed).abs() <= params.speed_jitter);
        assert!((child.view_range - parent.view_range).abs() <= params.view_range_jitter);
        assert!((child.pos[0] - parent.pos[0]).abs() <= params.offspring_offset);
        assert!((child.pos[1] - parent.pos[1]).abs() <= params.offspring_offset);
    }
}

#[test]
fn test_offspring_traits_respect_floors() {
    let params = create_test_params();
    let mut parent = creature_at(400.0, 300.0);
    parent.speed = params.speed_floor;
    parent.view_range = params.view_range_floor;

    for i in 0..200 {
        let child = parent.offspring(2000 + i, &params);

        assert!(child.speed >= params.speed_floor);
        assert!(child.speed <= parent.speed + params.speed_jitter);
        assert!(child.view_range >= params.view_range_floor);
        assert!(child.view_range <= parent.view_range + params.view_range_jitter);
    }
}
