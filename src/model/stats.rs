use crate::engine::Minutes;
use crate::model::docks::Direction;
use serde::Serialize;

/// Timestamps for one order that completed picking.
///
/// Wait and cycle times are derived rather than stored, keeping the three instants the single
/// source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderRecord {
    /// When the order joined the queue for an operator.
    pub arrival_time: Minutes,
    /// When an operator actually started picking it.
    pub service_start_time: Minutes,
    /// When picking finished.
    pub completion_time: Minutes,
}

impl OrderRecord {
    /// Minutes from arrival to completion.
    pub fn cycle_time_min(&self) -> f64 {
        self.completion_time - self.arrival_time
    }

    /// Minutes spent waiting for an operator.
    pub fn wait_time_min(&self) -> f64 {
        self.service_start_time - self.arrival_time
    }
}

/// Wait and throughput tallies for one direction of dock traffic.
///
/// Waits are recorded at the moment a truck is granted a dock, so trucks still in line when the
/// run ends appear in neither the wait list nor the served count.
#[derive(Debug, Default)]
pub(crate) struct TruckTally {
    served: u64,
    waits: Vec<f64>,
}

impl TruckTally {
    pub(crate) fn record_wait(&mut self, wait_min: f64) {
        self.waits.push(wait_min);
    }

    pub(crate) fn record_served(&mut self) {
        self.served += 1;
    }

    pub(crate) fn served(&self) -> u64 {
        self.served
    }

    pub(crate) fn avg_wait_min(&self) -> f64 {
        mean(&self.waits)
    }

    pub(crate) fn max_wait_min(&self) -> f64 {
        self.waits.iter().copied().fold(0.0, f64::max)
    }
}

/// Raw observations accumulated over a run, folded into a [`KpiSummary`] at reporting time.
#[derive(Debug, Default)]
pub(crate) struct StatsCollector {
    order_log: Vec<OrderRecord>,
    inbound: TruckTally,
    outbound: TruckTally,
}

impl StatsCollector {
    pub(crate) fn log_order(&mut self, record: OrderRecord) {
        self.order_log.push(record);
    }

    pub(crate) fn tally(&self, direction: Direction) -> &TruckTally {
        match direction {
            Direction::Inbound => &self.inbound,
            Direction::Outbound => &self.outbound,
        }
    }

    pub(crate) fn tally_mut(&mut self, direction: Direction) -> &mut TruckTally {
        match direction {
            Direction::Inbound => &mut self.inbound,
            Direction::Outbound => &mut self.outbound,
        }
    }

    pub(crate) fn order_log(&self) -> &[OrderRecord] {
        &self.order_log
    }

    pub(crate) fn completed_orders(&self) -> usize {
        self.order_log.len()
    }

    pub(crate) fn avg_cycle_time_min(&self) -> f64 {
        if self.order_log.is_empty() {
            return 0.0;
        }
        let total: f64 = self.order_log.iter().map(OrderRecord::cycle_time_min).sum();
        total / self.order_log.len() as f64
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Headline results for one simulated month.
///
/// Serializable so sweep drivers can dump rows straight into JSON or CSV writers. Averages are
/// zero, not `NaN`, when nothing was observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    /// Orders fully picked before the run ended.
    pub achieved_throughput: usize,
    /// Mean minutes from order arrival to completion.
    pub avg_cycle_time_min: f64,
    /// Fraction of the available operator-minutes spent picking.
    pub operator_utilization: f64,
    /// Most operators simultaneously busy at any instant.
    pub peak_operators_busy: usize,
    /// Loading-dock results, present when the run modeled dock traffic.
    pub docks: Option<DockKpiSummary>,
}

/// Loading-dock results for one simulated month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DockKpiSummary {
    /// Inbound trucks fully unloaded before the run ended.
    pub inbound_trucks_served: u64,
    /// Outbound trucks fully loaded before the run ended.
    pub outbound_trucks_served: u64,
    /// Mean minutes inbound trucks waited for a dock, over trucks that got one.
    pub avg_inbound_wait_min: f64,
    /// Mean minutes outbound trucks waited for a dock, over trucks that got one.
    pub avg_outbound_wait_min: f64,
    /// Longest single inbound wait for a dock.
    pub max_inbound_wait_min: f64,
    /// Longest single outbound wait for a dock.
    pub max_outbound_wait_min: f64,
    /// Fraction of the available inbound dock-minutes occupied by trucks.
    pub inbound_dock_utilization: f64,
    /// Fraction of the available outbound dock-minutes occupied by trucks.
    pub outbound_dock_utilization: f64,
}
