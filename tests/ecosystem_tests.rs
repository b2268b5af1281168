#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use glade::simulation::ecosystem::Ecosystem;
use glade::simulation::params::Params;

fn create_test_params() -> Params {
    Params::default()
}

#[test]
fn test_ecosystem_creation() {
    let params = create_test_params();
    let ecosystem = Ecosystem::new(&params);

    assert_eq!(ecosystem.creatures.len(), params.n_creatures);
    assert!(ecosystem.trees.len() >= params.n_trees_min);
    assert!(ecosystem.trees.len() <= params.n_trees_max);
    assert!(ecosystem.ponds.len() >= params.n_ponds_min);
    assert!(ecosystem.ponds.len() <= params.n_ponds_max);
    assert_eq!(ecosystem.time, 0.0);
    assert!(ecosystem.pending.is_empty());

    // Check that creatures are initialized with valid properties
    for creature in &ecosystem.creatures {
        assert_eq!(creature.hunger, 50.0);
        assert_eq!(creature.thirst, 50.0);
        assert!(creature.speed >= params.speed_min && creature.speed < params.speed_max);
        assert!(
            creature.view_range >= params.view_range_min
                && creature.view_range < params.view_range_max
        );
        assert!(creature.target.is_none());
    }

    // Every tree starts at apple capacity
    for tree in &ecosystem.trees {
        assert_eq!(tree.apples.len(), params.max_apples);
    }
}

#[test]
fn test_needs_stay_clamped() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params);

    for _ in 0..200 {
        ecosystem.step(&params);
        for creature in &ecosystem.creatures {
            assert!(creature.hunger >= 0.0 && creature.hunger <= params.need_max);
            assert!(creature.thirst >= 0.0 && creature.thirst <= params.need_max);
        }
    }
}

#[test]
fn test_starved_creatures_are_removed() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params);

    let initial_count = ecosystem.creatures.len();
    for creature in &mut ecosystem.creatures {
        creature.hunger = params.need_max;
    }

    ecosystem.step(&params);

    assert!(ecosystem.creatures.is_empty());
    assert_eq!(ecosystem.stats.total_deaths, initial_count);
}

#[test]
fn test_apple_consumption_resets_hunger() {
    let mut params = create_test_params();
    params.birth_rate = 0.0;
    let mut ecosystem = Ecosystem::new(&params);

    // One motionless creature parked on an apple
    ecosystem.creatures.truncate(1);
    let apple_pos = ecosystem.trees[0].apples[0].pos.clone();
    let creature = &mut ecosystem.creatures[0];
    creature.pos = apple_pos;
    creature.speed = 0.0;
    creature.hunger = 60.0;
    creature.thirst = 0.0;

    ecosystem.step(&params);

    assert_eq!(ecosystem.creatures[0].hunger, 0.0);
    assert_eq!(ecosystem.trees[0].apples.len(), params.max_apples - 1);
    assert_eq!(ecosystem.stats.apples_eaten, 1);
    assert_eq!(ecosystem.pending.len(), 1);
}

#[test]
fn test_apple_regrows_after_delay() {
    let mut params = create_test_params();
    params.birth_rate = 0.0;
    let mut ecosystem = Ecosystem::new(&params);

    ecosystem.creatures.truncate(1);
    let apple_pos = ecosystem.trees[0].apples[0].pos.clone();
    let creature = &mut ecosystem.creatures[0];
    creature.pos = apple_pos;
    creature.speed = 0.0;
    creature.hunger = 60.0;
    creature.thirst = 0.0;

    // Consumption tick
    ecosystem.step(&params);
    assert_eq!(ecosystem.trees[0].apples.len(), params.max_apples - 1);

    // The tree stays below capacity until the regrowth delay elapses
    for _ in 0..(params.regrowth_delay as usize - 1) {
        ecosystem.step(&params);
        assert_eq!(ecosystem.trees[0].apples.len(), params.max_apples - 1);
    }

    ecosystem.step(&params);
    assert_eq!(ecosystem.trees[0].apples.len(), params.max_apples);
    assert!(ecosystem.pending.is_empty());
}

#[test]
fn test_pond_resets_thirst_without_depleting() {
    let mut params = create_test_params();
    params.birth_rate = 0.0;
    let mut ecosystem = Ecosystem::new(&params);

    ecosystem.creatures.truncate(1);
    let pond_pos = ecosystem.ponds[0].pos.clone();
    let creature = &mut ecosystem.creatures[0];
    creature.pos = pond_pos;
    creature.speed = 0.0;
    creature.hunger = 0.0;
    creature.thirst = 60.0;

    ecosystem.step(&params);
    assert_eq!(ecosystem.creatures[0].thirst, 0.0);

    // Drinking again on a later tick works just the same
    ecosystem.creatures[0].thirst = 80.0;
    ecosystem.step(&params);
    assert_eq!(ecosystem.creatures[0].thirst, 0.0);
}

#[test]
fn test_reproduction_respects_population_cap() {
    let mut params = create_test_params();
    params.birth_rate = 1.0;
    let mut ecosystem = Ecosystem::new(&params);

    // Fully sated founders stay fertile for the whole run; needs only drift
    // up by 0.1 per tick. Children start at 50/50 and stay infertile, so
    // some birth attempts fizzle, but 60 ticks is plenty to reach the cap.
    for creature in &mut ecosystem.creatures {
        creature.hunger = 0.0;
        creature.thirst = 0.0;
    }

    for _ in 0..60 {
        ecosystem.step(&params);
        assert!(ecosystem.creatures.len() <= params.max_creatures);
    }

    assert_eq!(ecosystem.creatures.len(), params.max_creatures);
    assert_eq!(
        ecosystem.stats.total_births,
        params.max_creatures - params.n_creatures
    );
    assert_eq!(ecosystem.stats.peak_population, params.max_creatures);
}

#[test]
fn test_no_reproduction_while_needy() {
    let mut params = create_test_params();
    params.birth_rate = 1.0;
    let mut ecosystem = Ecosystem::new(&params);

    for creature in &mut ecosystem.creatures {
        creature.hunger = 90.0;
        creature.thirst = 0.0;
    }

    ecosystem.step(&params);

    // Every candidate parent was too hungry
    assert_eq!(ecosystem.stats.total_births, 0);
    assert_eq!(ecosystem.creatures.len(), params.n_creatures);
}
