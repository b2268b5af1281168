//! Apple trees and the apples they carry.
//!
//! Each tree owns a bounded pool of apples. Apples grow in an upper arc above
//! the trunk, disappear when a hungry creature stands next to them, and grow
//! back after a delay handled by the ecosystem's event queue.

use ndarray::Array1;
use rand::Rng;

use super::creature::Creature;
use super::geometric_utils::{offset_polar, point_distance};
use super::locatable::Locatable;
use super::params::Params;

/// A single apple, owned by exactly one tree.
#[derive(Debug, Clone)]
pub struct Apple {
    /// Position in 2D space.
    pub pos: Array1<f32>,
}

/// A stationary tree carrying up to `max_apples` apples.
#[derive(Debug, Clone)]
pub struct AppleTree {
    /// Trunk position in 2D space.
    pub pos: Array1<f32>,
    /// Apples currently hanging on the tree.
    pub apples: Vec<Apple>,
}

impl AppleTree {
    /// Creates a tree at the given position, filled to capacity with apples.
    pub fn new(pos: Array1<f32>, params: &Params) -> Self {
        let mut tree = Self {
            pos,
            apples: Vec::with_capacity(params.max_apples),
        };
        while tree.apples.len() < params.max_apples {
            tree.grow_apple(params);
        }
        tree
    }

    /// Grows one apple at a random spot in the crown arc.
    ///
    /// The crown center sits `crown_offset` above the trunk; the apple is
    /// placed at a random angle within the arc and a random radial distance
    /// from the crown center.
    pub fn grow_apple(&mut self, params: &Params) {
        let mut rng = rand::rng();
        let angle = rng.random_range(-params.apple_arc..params.apple_arc);
        let radius = rng.random_range(params.apple_radial_min..params.apple_radial_max);
        let crown = Array1::from_vec(vec![self.pos[0], self.pos[1] - params.crown_offset]);
        self.apples.push(Apple {
            pos: offset_polar(&crown, angle, radius),
        });
    }

    /// Grows one apple if the tree is below capacity, otherwise does nothing.
    ///
    /// This is the regrowth entry point fired from the event queue; checking
    /// capacity at fire time makes stale regrowth events harmless.
    pub fn try_regrow(&mut self, params: &Params) {
        if self.apples.len() < params.max_apples {
            self.grow_apple(params);
        }
    }

    /// Lets hungry creatures eat adjacent apples.
    ///
    /// Creatures are visited in order; each apple within `eat_radius` of a
    /// creature whose hunger exceeds the eat threshold is removed and that
    /// creature's hunger resets to 0. Removal is atomic, so an apple eaten by
    /// an earlier creature is gone for later ones in the same pass.
    ///
    /// # Returns
    ///
    /// The ids of creatures that ate, one entry per apple consumed.
    pub fn feed(&mut self, creatures: &mut [Creature], params: &Params) -> Vec<usize> {
        let mut eaten = Vec::new();
        for creature in creatures.iter_mut() {
            self.apples.retain(|apple| {
                let distance = point_distance(&creature.pos, &apple.pos);
                if distance < params.eat_radius && creature.hunger > params.eat_threshold {
                    creature.hunger = 0.0;
                    eaten.push(creature.id);
                    false
                } else {
                    true
                }
            });
        }
        eaten
    }
}

impl Locatable for Apple {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}

impl Locatable for AppleTree {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}
