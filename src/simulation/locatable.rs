//! Trait for entities that occupy a point in the world.
//!
//! This trait provides a common interface for all entities in the simulation
//! that have a position, so placement checks and tests can treat them
//! uniformly.

use ndarray::Array1;

/// Trait for entities with a position in 2D space.
pub trait Locatable {
    /// Returns a reference to the entity's position.
    ///
    /// # Returns
    ///
    /// A reference to the 2D position vector.
    fn pos(&self) -> &Array1<f32>;

    /// Returns a mutable reference to the entity's position.
    ///
    /// # Returns
    ///
    /// A mutable reference to the 2D position vector.
    fn pos_mut(&mut self) -> &mut Array1<f32>;
}
