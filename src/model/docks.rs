use crate::config::DockParams;
use crate::engine::{Event, EventQueue, Minutes};
use crate::model::resources::ResourcePool;
use crate::model::Warehouse;
use log::trace;
use rand::distr::{Distribution, Uniform};
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Truck arrival spacing is multiplied by a factor drawn uniformly from this range.
const ARRIVAL_JITTER: (f64, f64) = (0.8, 1.2);
/// Unloading an inbound truck occupies a dock for this many minutes.
const INBOUND_DOCK_TIME_MIN: (f64, f64) = (90.0, 150.0);
/// Loading an outbound truck occupies a dock for this many minutes.
const OUTBOUND_DOCK_TIME_MIN: (f64, f64) = (60.0, 120.0);

/// Which way freight moves through a dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Inbound,
    Outbound,
}

/// A truck waiting for or occupying a dock.
///
/// The dock time is drawn when the truck arrives, not when it reaches a dock, so two runs that
/// share a seed see identical trucks no matter how many docks each run has.
#[derive(Debug)]
pub(crate) struct Truck {
    pub arrival_time: Minutes,
    pub dock_time_min: f64,
}

/// One direction's share of the yard: its dock pool, arrival spacing, and dock-time range.
#[derive(Debug)]
pub(crate) struct DockSide {
    pub docks: ResourcePool<Truck>,
    interval_min: f64,
    dock_time_distr: Uniform<f64>,
}

impl DockSide {
    fn new(dock_count: usize, interval_min: f64, dock_time_range: (f64, f64)) -> Self {
        Self {
            docks: ResourcePool::new(dock_count),
            interval_min,
            dock_time_distr: Uniform::new_inclusive(dock_time_range.0, dock_time_range.1)
                .expect("dock time ranges are ordered"),
        }
    }
}

/// Both directions of loading-dock traffic plus the generator driving their randomness.
///
/// Draws for the two directions interleave on the single generator in event order, so a fixed
/// seed reproduces the whole yard exactly.
#[derive(Debug)]
pub(crate) struct DockYard {
    pub inbound: DockSide,
    pub outbound: DockSide,
    jitter_distr: Uniform<f64>,
    rng: Pcg64,
    /// No truck arrives at or past this instant.
    cutoff: Minutes,
}

impl DockYard {
    pub(crate) fn new(params: &DockParams, cutoff: Minutes) -> Self {
        let rng = match params.rng_seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_rng(&mut rand::rng()),
        };
        Self {
            inbound: DockSide::new(
                params.inbound_docks,
                params.inbound_truck_interval_min,
                INBOUND_DOCK_TIME_MIN,
            ),
            outbound: DockSide::new(
                params.outbound_docks,
                params.outbound_truck_interval_min,
                OUTBOUND_DOCK_TIME_MIN,
            ),
            jitter_distr: Uniform::new_inclusive(ARRIVAL_JITTER.0, ARRIVAL_JITTER.1)
                .expect("jitter bounds are ordered"),
            rng,
            cutoff,
        }
    }

    fn side_mut(&mut self, direction: Direction) -> &mut DockSide {
        match direction {
            Direction::Inbound => &mut self.inbound,
            Direction::Outbound => &mut self.outbound,
        }
    }

    /// Draw the dock time for a truck arriving now.
    fn draw_dock_time(&mut self, direction: Direction) -> f64 {
        let distr = match direction {
            Direction::Inbound => &self.inbound.dock_time_distr,
            Direction::Outbound => &self.outbound.dock_time_distr,
        };
        distr.sample(&mut self.rng)
    }

    /// The arrival instant for `direction` following one at `now`, or `None` once the jittered
    /// gap would land at or past the cutoff. The jitter is drawn either way, so the generator
    /// advances identically across capacity variants.
    pub(crate) fn next_arrival_after(&mut self, direction: Direction, now: Minutes) -> Option<Minutes> {
        let jitter = self.jitter_distr.sample(&mut self.rng);
        let interval = match direction {
            Direction::Inbound => self.inbound.interval_min,
            Direction::Outbound => self.outbound.interval_min,
        };
        let next = now + interval * jitter;
        if next < self.cutoff {
            Some(next)
        } else {
            None
        }
    }
}

/// A truck pulls into the yard, claims or queues for a dock, then books the arrival after it.
#[derive(Debug)]
pub(crate) struct TruckArrivalEvent {
    pub direction: Direction,
}

impl Event<Warehouse> for TruckArrivalEvent {
    fn execute(&mut self, state: &mut Warehouse, queue: &mut EventQueue<Warehouse>) -> crate::Result {
        let now = queue.current_time();
        let yard = match state.docks.as_mut() {
            Some(yard) => yard,
            // never scheduled without a yard; keep the event total anyway
            None => return Ok(()),
        };

        let dock_time_min = yard.draw_dock_time(self.direction);
        let truck = Truck {
            arrival_time: now,
            dock_time_min,
        };
        if let Some(truck) = yard.side_mut(self.direction).docks.acquire(truck, now) {
            state.stats.tally_mut(self.direction).record_wait(now - truck.arrival_time);
            TruckServiceEvent::schedule(truck, self.direction, queue)?;
        }

        if let Some(at) = yard.next_arrival_after(self.direction, now) {
            queue.schedule(TruckArrivalEvent { direction: self.direction }, at)?;
        }
        Ok(())
    }
}

/// A truck finishes loading or unloading and frees its dock.
#[derive(Debug)]
pub(crate) struct TruckServiceEvent {
    direction: Direction,
}

impl TruckServiceEvent {
    /// Start dock service for `truck` at the current clock time, scheduling its departure when
    /// the dock time elapses.
    fn schedule(truck: Truck, direction: Direction, queue: &mut EventQueue<Warehouse>) -> crate::Result {
        queue.schedule_with_delay(TruckServiceEvent { direction }, truck.dock_time_min)
    }
}

impl Event<Warehouse> for TruckServiceEvent {
    fn execute(&mut self, state: &mut Warehouse, queue: &mut EventQueue<Warehouse>) -> crate::Result {
        let now = queue.current_time();
        state.stats.tally_mut(self.direction).record_served();
        trace!("{:?} truck departed at {}", self.direction, now);

        let yard = match state.docks.as_mut() {
            Some(yard) => yard,
            None => return Ok(()),
        };
        if let Some(next) = yard.side_mut(self.direction).docks.release(now) {
            state.stats.tally_mut(self.direction).record_wait(now - next.arrival_time);
            TruckServiceEvent::schedule(next, self.direction, queue)?;
        }
        Ok(())
    }
}
