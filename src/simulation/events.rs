//! Scheduled-event queue for deferred simulation effects.
//!
//! Apple regrowth fires a fixed delay after consumption. Instead of
//! free-running timers mutating state from outside the tick, deferred actions
//! are queued as (fire time, action) entries and drained at the start of each
//! tick, then applied serially.

use super::ecosystem::Ecosystem;
use super::params::Params;

/// Deferred actions that modify simulation state when their time arrives.
#[derive(Debug, Clone)]
pub enum ScheduledAction {
    /// A tree regrows one apple, capacity permitting.
    RegrowApple {
        /// Index of the tree in the ecosystem's tree vector.
        tree: usize,
    },
}

/// A deferred action paired with the simulation time it becomes due.
#[derive(Debug, Clone)]
pub struct ScheduledEvent {
    /// Simulation time at which the action fires.
    pub fire_time: f32,
    /// The action to apply.
    pub action: ScheduledAction,
}

/// Queue collecting deferred actions until their fire time arrives.
#[derive(Debug)]
pub struct EventQueue {
    events: Vec<ScheduledEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Schedules an action to fire at the given simulation time.
    pub fn schedule(&mut self, fire_time: f32, action: ScheduledAction) {
        self.events.push(ScheduledEvent { fire_time, action });
    }

    /// Removes and returns every event whose fire time has arrived.
    ///
    /// Events due at exactly `now` are included. Remaining events stay queued.
    pub fn drain_due(&mut self, now: f32) -> Vec<ScheduledEvent> {
        let (due, pending) = std::mem::take(&mut self.events)
            .into_iter()
            .partition(|event| event.fire_time <= now);
        self.events = pending;
        due
    }

    /// Number of events still pending.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Checks whether no events are pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Applies drained events to the ecosystem state.
///
/// A regrowth aimed at a tree index that no longer exists is skipped; capacity
/// is re-checked by the tree itself at fire time.
pub fn apply_events(state: &mut Ecosystem, params: &Params, events: Vec<ScheduledEvent>) {
    for event in events {
        match event.action {
            ScheduledAction::RegrowApple { tree } => {
                if let Some(tree) = state.trees.get_mut(tree) {
                    tree.try_regrow(params);
                }
            }
        }
    }
}
