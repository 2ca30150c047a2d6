use crate::engine::{Event, EventQueue, Minutes};
use crate::model::resources::ResourcePool;
use crate::model::stats::OrderRecord;
use crate::model::Warehouse;
use log::trace;

/// An order waiting for or undergoing picking. Carries only its arrival instant; everything
/// else about an order is uniform.
#[derive(Debug)]
pub(crate) struct Order {
    pub arrival_time: Minutes,
}

/// How the stream of order arrivals ends.
#[derive(Debug)]
pub(crate) enum OrderSource {
    /// Exactly this many orders remain to be generated.
    Bounded { remaining: u32 },
    /// Orders keep coming until the next arrival would land at or past the cutoff.
    Continuous { cutoff: Minutes },
}

/// Order-picking side of the warehouse: the operator pool plus the arrival plan.
#[derive(Debug)]
pub(crate) struct OrderFlow {
    pub operators: ResourcePool<Order>,
    /// Evenly spaced gap between consecutive order arrivals.
    pub arrival_interval_min: f64,
    /// Effective per-order picking duration, efficiency already applied.
    pub service_time_min: f64,
    pub source: OrderSource,
}

impl OrderFlow {
    /// The instant of the very first arrival, or `None` when the plan holds no orders at all.
    /// Consumes one order from a bounded plan.
    pub(crate) fn first_arrival(&mut self) -> Option<Minutes> {
        match &mut self.source {
            OrderSource::Bounded { remaining } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                Some(Minutes::ZERO)
            }
            OrderSource::Continuous { .. } => Some(Minutes::ZERO),
        }
    }

    /// The arrival instant following one at `now`, or `None` once the plan is exhausted.
    fn next_arrival_after(&mut self, now: Minutes) -> Option<Minutes> {
        let interval = self.arrival_interval_min;
        match &mut self.source {
            OrderSource::Bounded { remaining } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                Some(now + interval)
            }
            OrderSource::Continuous { cutoff } => {
                let next = now + interval;
                if next < *cutoff {
                    Some(next)
                } else {
                    None
                }
            }
        }
    }
}

/// A new order joins the picking queue, then books the arrival after it.
#[derive(Debug)]
pub(crate) struct ArrivalEvent;

impl Event<Warehouse> for ArrivalEvent {
    fn execute(&mut self, state: &mut Warehouse, queue: &mut EventQueue<Warehouse>) -> crate::Result {
        let now = queue.current_time();
        let order = Order { arrival_time: now };
        if let Some(order) = state.flow.operators.acquire(order, now) {
            ServiceEvent::schedule(order, state, queue)?;
        }
        if let Some(at) = state.flow.next_arrival_after(now) {
            queue.schedule(ArrivalEvent, at)?;
        }
        Ok(())
    }
}

/// An operator finishes picking one order.
#[derive(Debug)]
pub(crate) struct ServiceEvent {
    arrival_time: Minutes,
    service_start_time: Minutes,
}

impl ServiceEvent {
    /// Start service for `order` at the current clock time, scheduling its completion one
    /// service time out.
    pub(crate) fn schedule(order: Order, state: &Warehouse, queue: &mut EventQueue<Warehouse>) -> crate::Result {
        let event = ServiceEvent {
            arrival_time: order.arrival_time,
            service_start_time: queue.current_time(),
        };
        queue.schedule_with_delay(event, state.flow.service_time_min)
    }
}

impl Event<Warehouse> for ServiceEvent {
    fn execute(&mut self, state: &mut Warehouse, queue: &mut EventQueue<Warehouse>) -> crate::Result {
        let now = queue.current_time();
        let record = OrderRecord {
            arrival_time: self.arrival_time,
            service_start_time: self.service_start_time,
            completion_time: now,
        };
        trace!(
            "order picked at {} after {:.2} min in the warehouse",
            now,
            record.cycle_time_min()
        );
        state.stats.log_order(record);

        if let Some(next) = state.flow.operators.release(now) {
            ServiceEvent::schedule(next, state, queue)?;
        }
        Ok(())
    }
}
