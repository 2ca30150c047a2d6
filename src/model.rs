//! Warehouse model: the shared state plus the event types that advance it.
//!
//! Split by concern: [`orders`] holds the deterministic picking flow, [`docks`] the random truck
//! traffic, [`resources`] the pool both of them queue on, and [`stats`] the observations and the
//! reports derived from them. Events only ever touch [`Warehouse`] fields; wiring up the initial
//! events is the driver's job.

pub(crate) mod docks;
pub(crate) mod orders;
pub(crate) mod resources;
pub(crate) mod stats;

use crate::engine::{EventQueue, Minutes, OkEvent, SimState};
use docks::{Direction, DockYard};
use orders::OrderFlow;
use stats::{DockKpiSummary, KpiSummary, StatsCollector};

/// Shared state for one simulated month of warehouse operations.
#[derive(Debug)]
pub(crate) struct Warehouse {
    pub flow: OrderFlow,
    /// Present when the run models loading-dock traffic.
    pub docks: Option<DockYard>,
    pub stats: StatsCollector,
    /// Raised by [`EndEvent`]; stops the run before the queue drains.
    pub complete: bool,
}

impl Warehouse {
    /// Fold the raw observations into the headline report as of time `now`.
    pub(crate) fn summary(&self, now: Minutes) -> KpiSummary {
        let docks = self.docks.as_ref().map(|yard| DockKpiSummary {
            inbound_trucks_served: self.stats.tally(Direction::Inbound).served(),
            outbound_trucks_served: self.stats.tally(Direction::Outbound).served(),
            avg_inbound_wait_min: self.stats.tally(Direction::Inbound).avg_wait_min(),
            avg_outbound_wait_min: self.stats.tally(Direction::Outbound).avg_wait_min(),
            max_inbound_wait_min: self.stats.tally(Direction::Inbound).max_wait_min(),
            max_outbound_wait_min: self.stats.tally(Direction::Outbound).max_wait_min(),
            inbound_dock_utilization: yard.inbound.docks.utilization(now),
            outbound_dock_utilization: yard.outbound.docks.utilization(now),
        });
        KpiSummary {
            achieved_throughput: self.stats.completed_orders(),
            avg_cycle_time_min: self.stats.avg_cycle_time_min(),
            operator_utilization: self.flow.operators.utilization(now),
            peak_operators_busy: self.flow.operators.peak_in_use(),
            docks,
        }
    }
}

impl SimState for Warehouse {
    fn is_complete(&self, _: Minutes) -> bool {
        self.complete
    }
}

/// Closing time. Stops the run at the horizon; anything still in flight stays unfinished.
///
/// Scheduled before any other event, so work landing exactly on the horizon loses the tie and
/// goes unexecuted.
#[derive(Debug)]
pub(crate) struct EndEvent;

impl OkEvent<Warehouse> for EndEvent {
    fn execute(&mut self, state: &mut Warehouse, _: &mut EventQueue<Warehouse>) {
        state.complete = true;
    }
}
