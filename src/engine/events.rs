mod event_holder;
pub(super) mod event_traits;

use crate::engine::{Minutes, SimState};
use crate::Error;
use event_holder::EventHolder;
use event_traits::Event;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Priority queue of scheduled events.
///
/// Events execute in ascending order of execution time, with ties broken by the order in which
/// they were scheduled. The tiebreaker pins down the observed execution order for events that
/// share an instant, which keeps runs reproducible.
///
/// Popping is not part of the public interface; events leave the queue only inside
/// [`Simulation::run()`].
///
/// The scheduling methods compare the desired execution time against the current clock time and
/// refuse to rewind: scheduling an event for a time that has already passed returns
/// [`Error::EventInPast`] without modifying the queue, as rewinding the clock in a discrete-event
/// simulation almost always indicates a logical bug at the call site.
///
/// [`Simulation::run()`]: crate::engine::Simulation::run
/// [`Error::EventInPast`]: crate::Error::EventInPast
#[derive(Debug, Default)]
pub struct EventQueue<State>
where
    State: SimState,
{
    events: BinaryHeap<Reverse<EventHolder<State>>>,
    clock: Minutes,
    events_added: usize,
}

impl<State> EventQueue<State>
where
    State: SimState,
{
    /// Construct a new [`EventQueue`] with no scheduled events and a clock initialized to the
    /// provided time.
    pub(crate) fn new(start_time: Minutes) -> Self {
        Self {
            events: BinaryHeap::default(),
            clock: start_time,
            events_added: 0,
        }
    }

    /// Schedule the provided event at the specified time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EventInPast`] if `time` is less than the current clock time, with no
    /// modifications to the queue.
    ///
    /// [`Error::EventInPast`]: crate::Error::EventInPast
    pub fn schedule<EventType>(&mut self, event: EventType, time: Minutes) -> crate::Result
    where
        EventType: Event<State> + 'static,
    {
        if time < self.clock {
            return Err(Error::EventInPast {
                scheduled: time,
                now: self.clock,
            });
        }

        let insertion_sequence = self.events_added;
        self.events_added += 1;
        self.events.push(Reverse(EventHolder {
            execution_time: time,
            event: Box::new(event),
            insertion_sequence,
        }));
        Ok(())
    }

    /// Schedule the provided event after the specified delay, measured in minutes from the
    /// current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EventInPast`] if the delay is negative enough to land before the current
    /// clock time, with no modifications to the queue.
    ///
    /// [`Error::EventInPast`]: crate::Error::EventInPast
    pub fn schedule_with_delay<EventType>(&mut self, event: EventType, delay_min: f64) -> crate::Result
    where
        EventType: Event<State> + 'static,
    {
        let time = self.clock + delay_min;
        self.schedule(event, time)
    }

    /// Crate-internal pop. Advances the clock to the execution time of the popped event.
    pub(crate) fn next(&mut self) -> Option<Box<dyn Event<State>>> {
        if let Some(event_holder) = self.events.pop() {
            self.clock = event_holder.0.execution_time;
            Some(event_holder.0.event)
        } else {
            None
        }
    }

    /// The current clock time, equal to the execution time of the most recently popped event.
    pub fn current_time(&self) -> Minutes {
        self.clock
    }

    /// Number of events still waiting to execute.
    pub fn pending(&self) -> usize {
        self.events.len()
    }
}
