//! Discrete-event core: a clock, an event trait, a priority queue, and a runner.
//!
//! Nothing in this module knows about warehouses. A [`Simulation`] drives any implementor of
//! [`SimState`] through time by popping [`Event`]s from an [`EventQueue`] in ascending order of
//! execution time, breaking ties by scheduling order so that runs are reproducible. Model code
//! plugs in through the two traits; [`Minutes`] is the clock everything shares.

mod clock;
mod events;
mod simulation;

pub use clock::Minutes;
pub use events::event_traits::{Event, OkEvent};
pub use events::EventQueue;
pub use simulation::{SimState, Simulation};
