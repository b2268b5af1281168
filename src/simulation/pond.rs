//! Ponds that creatures drink from.

use ndarray::Array1;

use super::creature::Creature;
use super::geometric_utils::point_distance;
use super::locatable::Locatable;
use super::params::Params;

/// A stationary circular hydration zone.
///
/// Ponds hold no consumable resource: any number of creatures can drink from
/// the same pond in the same tick, every tick, without depleting it.
#[derive(Debug, Clone)]
pub struct Pond {
    /// Center position in 2D space.
    pub pos: Array1<f32>,
    /// Radius within which creatures can drink.
    pub radius: f32,
}

impl Pond {
    /// Creates a pond at the given position.
    pub fn new(pos: Array1<f32>, radius: f32) -> Self {
        Self { pos, radius }
    }

    /// Lets thirsty creatures inside the radius drink.
    ///
    /// Each creature within the pond radius whose thirst exceeds the drink
    /// threshold has its thirst reset to 0.
    ///
    /// # Returns
    ///
    /// The ids of creatures that drank this tick.
    pub fn water(&self, creatures: &mut [Creature], params: &Params) -> Vec<usize> {
        let mut drank = Vec::new();
        for creature in creatures.iter_mut() {
            let distance = point_distance(&creature.pos, &self.pos);
            if distance < self.radius && creature.thirst > params.drink_threshold {
                creature.thirst = 0.0;
                drank.push(creature.id);
            }
        }
        drank
    }
}

impl Locatable for Pond {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}
