//! # Glade - Ecosystem Simulation
//!
//! A simulation of creatures roaming a small 2D world. Creatures get hungrier
//! and thirstier over time, seek out apples and pond water once a need crosses
//! its threshold, reproduce when well fed, and starve when a need saturates.
//!
//! ## Features
//!
//! - Need-driven behavior states (wandering, seeking food, seeking water)
//! - Apple trees with a bounded apple pool and delayed regrowth
//! - Ponds that hydrate any creature inside their radius
//! - Probabilistic reproduction with inherited, jittered traits
//! - Scheduled-event queue for deferred regrowth
//! - Real-time visualization with egui/macroquad
//!
//! ## Core Modules
//!
//! - [`simulation::creature`] - Creature behavior and state
//! - [`simulation::tree`] - Apple trees and their apples
//! - [`simulation::pond`] - Hydration zones
//! - [`simulation::ecosystem`] - Main simulation logic
//! - [`simulation::events`] - Scheduled-event queue for deferred effects

/// Core simulation logic and data structures.
pub mod simulation {
    /// Creature behavior, state, and lifecycle.
    pub mod creature;
    /// Main ecosystem simulation state and per-tick orchestration.
    pub mod ecosystem;
    /// Display log of recent simulation events.
    pub mod event_log;
    /// Scheduled-event queue for deferred state updates.
    pub mod events;
    /// Geometric utility functions for distance calculations.
    pub mod geometric_utils;
    /// Trait for locatable entities with a position in 2D space.
    ///
    /// The [`locatable::Locatable`] trait is implemented by all entities that
    /// occupy a point in the world (Creature, AppleTree, Apple, Pond).
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// Ponds that creatures drink from.
    pub mod pond;
    /// Lifetime simulation counters.
    pub mod stats;
    /// Apple trees that creatures eat from.
    pub mod tree;
}

/// World rendering with macroquad.
pub mod graphics;
/// egui panels: stats, plots, and the event feed.
pub mod ui;
