//! Main ecosystem simulation with per-tick creature updates.
//!
//! The ecosystem manages all creatures, trees, and ponds. It handles:
//! - Creature need/goal/movement updates and starvation cleanup
//! - Probabilistic reproduction under a population cap
//! - Apple consumption and pond drinking against moved positions
//! - Deferred apple regrowth through the scheduled-event queue

use ndarray::Array1;
use rand::Rng;

use super::creature::Creature;
use super::event_log::{EventKind, EventLog};
use super::events::{self, EventQueue, ScheduledAction};
use super::geometric_utils::point_distance;
use super::locatable::Locatable;
use super::params::Params;
use super::pond::Pond;
use super::stats::SimulationStats;
use super::tree::AppleTree;

/// The main ecosystem containing all simulation state.
///
/// Owns the mutable creature population, the stationary trees and ponds, the
/// queue of deferred regrowth actions, and the bookkeeping shown in the UI.
#[derive(Debug)]
pub struct Ecosystem {
    /// All living creatures in the simulation.
    pub creatures: Vec<Creature>,
    /// Apple trees.
    pub trees: Vec<AppleTree>,
    /// Ponds.
    pub ponds: Vec<Pond>,
    /// Simulation time in ticks.
    pub time: f32,
    /// Deferred actions waiting for their fire time.
    pub pending: EventQueue,
    /// Recent events for the UI feed.
    pub event_log: EventLog,
    /// Lifetime counters.
    pub stats: SimulationStats,
    /// Next id handed to a newborn creature.
    next_creature_id: usize,
}

impl Ecosystem {
    /// Creates a new ecosystem with random creatures, trees, and ponds.
    ///
    /// Trees and ponds are placed by rejection sampling against the minimum
    /// separation distances. Sampling is bounded: once the attempt limit is
    /// exhausted the constraint is relaxed and a warning printed, so a
    /// cramped configuration cannot loop forever.
    pub fn new(params: &Params) -> Self {
        let mut rng = rand::rng();

        let mut creatures = Vec::with_capacity(params.n_creatures);
        for id in 0..params.n_creatures {
            creatures.push(Creature::new_random(id, params));
        }

        let n_trees = rng.random_range(params.n_trees_min..=params.n_trees_max);
        let mut trees: Vec<AppleTree> = Vec::with_capacity(n_trees);
        for _ in 0..n_trees {
            let pos = place_separated(params, &mut rng, |candidate| {
                separated_from(candidate, &trees, params.tree_spacing)
            });
            trees.push(AppleTree::new(pos, params));
        }

        let n_ponds = rng.random_range(params.n_ponds_min..=params.n_ponds_max);
        let mut ponds: Vec<Pond> = Vec::with_capacity(n_ponds);
        for _ in 0..n_ponds {
            let pos = place_separated(params, &mut rng, |candidate| {
                separated_from(candidate, &trees, params.pond_tree_spacing)
                    && separated_from(candidate, &ponds, params.pond_spacing)
            });
            ponds.push(Pond::new(pos, params.pond_radius));
        }

        Self {
            creatures,
            trees,
            ponds,
            time: 0.0,
            pending: EventQueue::new(),
            event_log: EventLog::default(),
            stats: SimulationStats::default(),
            next_creature_id: params.n_creatures,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Order within a tick: due deferred actions fire first, then every
    /// creature updates (needs, starvation removal, goal, movement), then a
    /// reproduction attempt, then tree and pond effects run against the
    /// moved positions.
    pub fn step(&mut self, params: &Params) {
        self.time += 1.0;

        // Regrowth lands before creatures look for food this tick
        let due = self.pending.drain_due(self.time);
        events::apply_events(self, params, due);

        let trees = &self.trees;
        let ponds = &self.ponds;
        let event_log = &mut self.event_log;
        let stats = &mut self.stats;
        let time = self.time;
        self.creatures.retain_mut(|creature| {
            creature.tick_needs(params);
            if creature.is_starved(params) {
                stats.total_deaths += 1;
                event_log.log(
                    time,
                    format!("creature {} starved", creature.id),
                    EventKind::Death,
                );
                return false;
            }
            creature.choose_goal(trees, ponds, params);
            creature.advance();
            true
        });

        self.reproduce(params);

        for tree_idx in 0..self.trees.len() {
            let eaten = self.trees[tree_idx].feed(&mut self.creatures, params);
            for creature_id in eaten {
                self.stats.apples_eaten += 1;
                self.pending.schedule(
                    self.time + params.regrowth_delay,
                    ScheduledAction::RegrowApple { tree: tree_idx },
                );
                self.event_log.log(
                    self.time,
                    format!("creature {} ate an apple", creature_id),
                    EventKind::Meal,
                );
            }
        }

        for pond in &self.ponds {
            let drank = pond.water(&mut self.creatures, params);
            for creature_id in drank {
                self.event_log.log(
                    self.time,
                    format!("creature {} drank", creature_id),
                    EventKind::Drink,
                );
            }
        }

        self.stats.record_population(self.creatures.len());
    }

    /// Total apples currently hanging across all trees.
    pub fn apple_count(&self) -> usize {
        self.trees.iter().map(|tree| tree.apples.len()).sum()
    }

    // One attempt per tick: a random creature may bear a child while the
    // population is below the cap and both of its needs are low.
    fn reproduce(&mut self, params: &Params) {
        if self.creatures.len() >= params.max_creatures || self.creatures.is_empty() {
            return;
        }
        let mut rng = rand::rng();
        if rng.random::<f32>() >= params.birth_rate {
            return;
        }

        let parent = &self.creatures[rng.random_range(0..self.creatures.len())];
        if parent.is_wellfed(params) {
            let parent_id = parent.id;
            let child = parent.offspring(self.next_creature_id, params);
            self.next_creature_id += 1;
            self.stats.total_births += 1;
            self.event_log.log(
                self.time,
                format!("creature {} born to {}", child.id, parent_id),
                EventKind::Birth,
            );
            self.creatures.push(child);
        }
    }
}

/// Draws random sites until one satisfies the separation predicate, up to the
/// configured attempt limit. The last candidate is accepted once the limit
/// runs out.
fn place_separated(
    params: &Params,
    rng: &mut impl Rng,
    is_valid: impl Fn(&Array1<f32>) -> bool,
) -> Array1<f32> {
    let mut candidate = random_site(params, rng);
    for _ in 0..params.max_placement_attempts {
        if is_valid(&candidate) {
            return candidate;
        }
        candidate = random_site(params, rng);
    }
    eprintln!(
        "placement: no valid site after {} attempts, relaxing separation",
        params.max_placement_attempts
    );
    candidate
}

fn random_site(params: &Params, rng: &mut impl Rng) -> Array1<f32> {
    Array1::from_vec(vec![
        rng.random_range(params.spawn_margin..params.world_width - params.spawn_margin),
        rng.random_range(params.spawn_margin..params.world_height - params.spawn_margin),
    ])
}

fn separated_from<T: Locatable>(candidate: &Array1<f32>, items: &[T], min_distance: f32) -> bool {
    items
        .iter()
        .all(|item| point_distance(candidate, item.pos()) >= min_distance)
}
