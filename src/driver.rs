use crate::config::{ArrivalPolicy, HorizonPolicy, SimulationConfig};
use crate::engine::{Minutes, Simulation};
use crate::model::docks::{Direction, DockYard, TruckArrivalEvent};
use crate::model::orders::{ArrivalEvent, OrderFlow, OrderSource};
use crate::model::resources::ResourcePool;
use crate::model::stats::{KpiSummary, OrderRecord, StatsCollector};
use crate::model::{EndEvent, Warehouse};
use log::debug;

/// A fully wired warehouse run: validated configuration, initial events scheduled, ready to go.
///
/// Build one from a [`SimulationConfig`], call [`run()`], then read the [`summary()`] or walk
/// the per-order [`order_log()`] for anything the headline report leaves out.
///
/// [`run()`]: WarehouseSimulation::run
/// [`summary()`]: WarehouseSimulation::summary
/// [`order_log()`]: WarehouseSimulation::order_log
#[derive(Debug)]
pub struct WarehouseSimulation {
    sim: Simulation<Warehouse>,
}

impl WarehouseSimulation {
    /// Validate `config` and schedule the initial events.
    ///
    /// The first order arrives at time zero. Truck arrivals, when docks are configured, each
    /// start one jittered interval in. Under [`HorizonPolicy::SafetyFactor`] the closing-time
    /// event goes in before anything else, so it wins ties at the horizon; under
    /// [`HorizonPolicy::Drain`] there is no closing event and the queue simply empties.
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem found by [`SimulationConfig::validate()`].
    pub fn new(config: SimulationConfig) -> crate::Result<Self> {
        config.validate()?;

        let nominal_min = config.workload.nominal_duration_min();
        let (horizon, cutoff) = match config.horizon {
            HorizonPolicy::SafetyFactor(factor) => {
                let horizon = Minutes(nominal_min * factor);
                (Some(horizon), horizon)
            }
            HorizonPolicy::Drain => (None, Minutes(nominal_min)),
        };

        let source = match config.arrivals {
            ArrivalPolicy::Bounded => OrderSource::Bounded {
                remaining: config.workload.monthly_order_target,
            },
            ArrivalPolicy::Unbounded => OrderSource::Continuous { cutoff },
        };
        // never read when the plan holds no orders
        let arrival_interval_min = if config.workload.monthly_order_target == 0 {
            0.0
        } else {
            config.workload.arrival_interval_min()
        };

        let warehouse = Warehouse {
            flow: OrderFlow {
                operators: ResourcePool::new(config.staff_count),
                arrival_interval_min,
                service_time_min: config.service_time_min(),
                source,
            },
            docks: config.docks.as_ref().map(|params| DockYard::new(params, cutoff)),
            stats: StatsCollector::default(),
            complete: false,
        };

        let mut sim = Simulation::new(warehouse, Minutes::ZERO);
        if let Some(horizon) = horizon {
            sim.schedule(EndEvent, horizon)?;
        }
        if let Some(at) = sim.state_mut().flow.first_arrival() {
            sim.schedule(ArrivalEvent, at)?;
        }
        for direction in [Direction::Inbound, Direction::Outbound] {
            let at = match sim.state_mut().docks.as_mut() {
                Some(yard) => yard.next_arrival_after(direction, Minutes::ZERO),
                None => None,
            };
            if let Some(at) = at {
                sim.schedule(TruckArrivalEvent { direction }, at)?;
            }
        }

        debug!(
            "configured warehouse run: {} operators, {:.2} min per order, horizon {:?}",
            config.staff_count,
            config.service_time_min(),
            horizon
        );
        Ok(WarehouseSimulation { sim })
    }

    /// Execute the run to completion.
    ///
    /// Returns when the closing-time event fires or the event queue drains, whichever comes
    /// first.
    ///
    /// # Errors
    ///
    /// Bubbles up any [`Error::EventInPast`] produced while events schedule their followups.
    ///
    /// [`Error::EventInPast`]: crate::Error::EventInPast
    pub fn run(&mut self) -> crate::Result {
        debug!("starting {}", self.sim);
        self.sim.run()?;
        debug!(
            "finished at {}: {} orders completed",
            self.current_time(),
            self.sim.state().stats.completed_orders()
        );
        Ok(())
    }

    /// Headline results as of the current clock time.
    pub fn summary(&self) -> KpiSummary {
        self.sim.state().summary(self.current_time())
    }

    /// Timestamps for every completed order, in completion order.
    pub fn order_log(&self) -> &[OrderRecord] {
        self.sim.state().stats.order_log()
    }

    /// The simulation clock: time zero before [`run()`], the instant of the last executed event
    /// afterwards.
    ///
    /// [`run()`]: WarehouseSimulation::run
    pub fn current_time(&self) -> Minutes {
        self.sim.event_queue().current_time()
    }
}
