//! Creature behavior, state, and lifecycle management.
//!
//! Creatures track hunger and thirst, pick goals based on need thresholds,
//! and move toward their current target a bounded distance per tick.

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;

use super::geometric_utils::point_distance;
use super::locatable::Locatable;
use super::params::Params;
use super::pond::Pond;
use super::tree::AppleTree;

/// Hunger and thirst level every creature starts with.
const INITIAL_NEED: f32 = 50.0;

/// Cosmetic antenna shape, inherited unchanged by offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Antenna {
    /// Rounded antenna tips.
    Round,
    /// Squared antenna tips.
    Square,
}

/// What a creature is currently trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Strolling toward an arbitrary point.
    Wandering,
    /// Heading for an apple (or searching for one).
    SeekingFood,
    /// Heading for a pond.
    SeekingWater,
}

/// A simulated creature.
///
/// Creatures can:
/// - Wander to random targets when their needs are met
/// - Seek the nearest visible apple once hungry enough
/// - Seek the nearest pond once thirsty enough
/// - Reproduce when well fed, passing on jittered traits
/// - Starve when hunger or thirst saturates
#[derive(Debug, Clone)]
pub struct Creature {
    /// Unique identifier for this creature.
    pub id: usize,
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Cosmetic antenna shape.
    pub antenna: Antenna,
    /// Distance covered per tick while moving.
    pub speed: f32,
    /// Radius within which apples are detected.
    pub view_range: f32,
    /// Hunger level, clamped to [0, 100]. 100 is lethal.
    pub hunger: f32,
    /// Thirst level, clamped to [0, 100]. 100 is lethal.
    pub thirst: f32,
    /// Point currently moved toward, if any.
    pub target: Option<Array1<f32>>,
    /// Current behavior state.
    pub behavior: Behavior,
}

impl Creature {
    /// Creates a new creature at a random position inside the spawn margin,
    /// with random antenna shape, speed, and view range.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `params` - Simulation parameters providing bounds and trait ranges
    pub fn new_random(id: usize, params: &Params) -> Self {
        let mut rng = rand::rng();
        let span = Array1::from_vec(vec![
            params.world_width - 2.0 * params.spawn_margin,
            params.world_height - 2.0 * params.spawn_margin,
        ]);
        Self {
            id,
            pos: Array1::random(2, Uniform::new(0., 1.)) * &span + params.spawn_margin,
            antenna: if rng.random_bool(0.5) {
                Antenna::Round
            } else {
                Antenna::Square
            },
            speed: rng.random_range(params.speed_min..params.speed_max),
            view_range: rng.random_range(params.view_range_min..params.view_range_max),
            hunger: INITIAL_NEED,
            thirst: INITIAL_NEED,
            target: None,
            behavior: Behavior::Wandering,
        }
    }

    /// Raises hunger and thirst by their per-tick rates, clamped to the
    /// saturation value.
    pub fn tick_needs(&mut self, params: &Params) {
        self.hunger = (self.hunger + params.hunger_rate).min(params.need_max);
        self.thirst = (self.thirst + params.thirst_rate).min(params.need_max);
    }

    /// Checks whether either need has saturated.
    ///
    /// # Returns
    ///
    /// `true` if hunger or thirst has reached the lethal maximum.
    pub fn is_starved(&self, params: &Params) -> bool {
        self.hunger >= params.need_max || self.thirst >= params.need_max
    }

    /// Checks whether both needs are low enough to reproduce.
    pub fn is_wellfed(&self, params: &Params) -> bool {
        self.hunger < params.fertility_threshold && self.thirst < params.fertility_threshold
    }

    /// Picks the creature's goal for this tick.
    ///
    /// Priority order: food when hunger has crossed the seek threshold and
    /// exceeds thirst, then water when thirst has crossed the threshold, then
    /// a random wander target when no target is set. A food seeker with no
    /// apple in view falls back to a random target but keeps the seeking
    /// state until an apple turns up.
    pub fn choose_goal(&mut self, trees: &[AppleTree], ponds: &[Pond], params: &Params) {
        if self.hunger >= params.seek_threshold && self.hunger > self.thirst {
            self.behavior = Behavior::SeekingFood;
            match self.nearest_apple(trees) {
                Some(apple_pos) => self.target = Some(apple_pos),
                None => self.set_random_target(params),
            }
        } else if self.thirst >= params.seek_threshold {
            self.behavior = Behavior::SeekingWater;
            if let Some(pond) = self.nearest_pond(ponds) {
                self.target = Some(pond.pos.clone());
            }
        } else if self.target.is_none() {
            self.behavior = Behavior::Wandering;
            self.set_random_target(params);
        }
    }

    /// Finds the nearest apple within view range across all trees.
    ///
    /// Strict less-than comparison: the first apple found at the minimum
    /// distance wins ties, in tree order then apple order.
    ///
    /// # Returns
    ///
    /// The position of the nearest visible apple, or `None` if no apple is
    /// within view range.
    pub fn nearest_apple(&self, trees: &[AppleTree]) -> Option<Array1<f32>> {
        let mut nearest = None;
        let mut nearest_distance = f32::INFINITY;

        for tree in trees {
            for apple in &tree.apples {
                let distance = point_distance(&self.pos, &apple.pos);
                if distance < nearest_distance && distance <= self.view_range {
                    nearest_distance = distance;
                    nearest = Some(apple.pos.clone());
                }
            }
        }

        nearest
    }

    fn nearest_pond<'a>(&self, ponds: &'a [Pond]) -> Option<&'a Pond> {
        let mut nearest = None;
        let mut nearest_distance = f32::INFINITY;

        for pond in ponds {
            let distance = point_distance(&self.pos, &pond.pos);
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest = Some(pond);
            }
        }

        nearest
    }

    /// Sets a uniformly random target inside the wander margin.
    pub fn set_random_target(&mut self, params: &Params) {
        let span = Array1::from_vec(vec![
            params.world_width - 2.0 * params.wander_margin,
            params.world_height - 2.0 * params.wander_margin,
        ]);
        self.target = Some(Array1::random(2, Uniform::new(0., 1.)) * &span + params.wander_margin);
    }

    /// Moves up to `speed` units straight toward the current target.
    ///
    /// When the remaining distance is within one step, the creature snaps
    /// exactly onto the target and the target is cleared. Without a target
    /// this is a no-op.
    pub fn advance(&mut self) {
        let Some(target) = &self.target else {
            return;
        };

        let distance = point_distance(&self.pos, target);
        if distance > self.speed {
            let step = (target - &self.pos) / distance * self.speed;
            self.pos += &step;
        } else {
            self.pos = target.clone();
            self.target = None;
        }
    }

    /// Spawns a child next to this creature.
    ///
    /// The child inherits the antenna shape; position is offset by up to the
    /// configured amount per axis, speed and view range are perturbed within
    /// their jitter bounds and clamped to their floors. Needs start at the
    /// usual initial level.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier for the child
    /// * `params` - Simulation parameters providing jitter bounds
    pub fn offspring(&self, id: usize, params: &Params) -> Self {
        let mut rng = rand::rng();
        Self {
            id,
            pos: Array1::from_vec(vec![
                self.pos[0] + rng.random_range(-params.offspring_offset..params.offspring_offset),
                self.pos[1] + rng.random_range(-params.offspring_offset..params.offspring_offset),
            ]),
            antenna: self.antenna,
            speed: (self.speed + rng.random_range(-params.speed_jitter..params.speed_jitter))
                .max(params.speed_floor),
            view_range: (self.view_range
                + rng.random_range(-params.view_range_jitter..params.view_range_jitter))
            .max(params.view_range_floor),
            hunger: INITIAL_NEED,
            thirst: INITIAL_NEED,
            target: None,
            behavior: Behavior::Wandering,
        }
    }
}

impl Locatable for Creature {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}
