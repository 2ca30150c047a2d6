//! # Overview
//!
//! waresim is a discrete-event simulation of one month inside a pharmaceutical distribution
//! warehouse. Orders arrive on an even clock and compete for a bounded pool of picking
//! operators; an optional loading yard feeds inbound and outbound trucks through bounded dock
//! pools. A run produces throughput, cycle-time, wait, and utilization figures, and keeps the
//! raw per-order timestamps around for anything the headline report leaves out.
//!
//! The crate splits in two:
//!
//! * [`engine`] is a small general-purpose discrete-event core: the [`Minutes`] clock, the
//!   [`Event`] trait, a priority queue with deterministic tie-breaking, and the
//!   [`Simulation`] runner. Nothing in it knows about warehouses.
//! * Everything else is the warehouse built on that core. A [`SimulationConfig`] describes a
//!   scenario, [`WarehouseSimulation`] validates it, wires up the initial events, and runs the
//!   month, and a [`KpiSummary`] carries the results out.
//!
//! Two knobs drive most experiments: `staff_count`, the size of the operator pool, and
//! `efficiency_multiplier`, which scales the effective per-order picking time. Sweeping them
//! against a fixed monthly demand answers the sizing questions the model exists for.
//!
//! Randomness is confined to the loading yard. Order arrivals and picking times are
//! deterministic, so order-side results repeat exactly from run to run; give [`DockParams`] a
//! fixed seed and the yard repeats too.
//!
//! [`Event`]: engine::Event
//! [`Simulation`]: engine::Simulation

mod config;
mod driver;
pub mod engine;
mod error;
mod model;

pub use config::{ArrivalPolicy, DockParams, HorizonPolicy, SimulationConfig, WorkloadProfile};
pub use driver::WarehouseSimulation;
pub use engine::Minutes;
pub use error::{Error, Result};
pub use model::resources::ResourcePool;
pub use model::stats::{DockKpiSummary, KpiSummary, OrderRecord};
