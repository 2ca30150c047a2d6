use super::{Event, EventQueue};
use crate::engine::Minutes;

use std::fmt::{Display, Formatter};

/// State shared by every event in a simulation.
///
/// The single provided method lets the running simulation ask whether it should stop before the
/// event queue runs dry. The default implementation always answers no, which suits models that
/// naturally drain their queues.
pub trait SimState {
    /// Reports whether the simulation has reached a stopping condition. [`Simulation::run()`]
    /// checks this before popping each event and returns as soon as the answer is true.
    ///
    /// [`Simulation::run()`]: Simulation::run
    // expect that most implementations will make use of the argument even
    // though the default doesn't
    #[allow(unused_variables)]
    fn is_complete(&self, now: Minutes) -> bool {
        false
    }
}

/// Contains the event queue and other state belonging to a simulation.
///
/// A [`Simulation`] owns both its state and its event queue, providing shared and mutable access
/// to each so clients can set up and tear down instances as needed - for example, scheduling
/// initial events or reading the final state back out.
///
/// The expected workflow:
///
/// 1. Initialize a struct that implements [`SimState`].
/// 2. Pass this struct and the start time to [`new()`].
/// 3. Schedule at least one initial event.
/// 4. Call [`run()`]. Handle any error it might return.
/// 5. Use the [`state()`] accessor to finish processing the results.
///
/// [`new()`]: Simulation::new
/// [`run()`]: Simulation::run
/// [`state()`]: Simulation::state
#[derive(Debug, Default)]
pub struct Simulation<State>
where
    State: SimState,
{
    /// A priority queue of events that have been scheduled to execute, ordered ascending by
    /// execution time.
    event_queue: EventQueue<State>,
    /// The current shared state of the simulation. Exclusive access will be granted to each
    /// event that executes.
    state: State,
}

impl<State> Simulation<State>
where
    State: SimState,
{
    /// Initialize a [`Simulation`] with the provided starting state and an event queue with its
    /// clock set to the provided starting time.
    pub fn new(initial_state: State, start_time: Minutes) -> Self {
        Self {
            event_queue: EventQueue::new(start_time),
            state: initial_state,
        }
    }

    /// Execute events from the priority queue, one at a time, in ascending order by execution
    /// time.
    ///
    /// Follows this loop:
    ///
    /// 1. Does [`state.is_complete()`] return true? If so, return `Ok(())`.
    /// 2. Attempt to pop the next event from the queue. If there isn't one, return `Ok(())`.
    /// 3. Pass exclusive references to the state and event queue to [`event.execute()`].
    ///     1. If an error is returned, forward it as-is to the caller.
    ///     2. Otherwise, go back to step 1.
    ///
    /// # Errors
    ///
    /// Any error encountered while executing an event is passed back to the caller unchanged,
    /// leaving unexecuted events in the queue. In practice this means [`Error::EventInPast`]
    /// bubbling out of an event that tried to schedule a followup before the current clock time.
    ///
    /// [`state.is_complete()`]: SimState::is_complete
    /// [`event.execute()`]: Event::execute
    /// [`Error::EventInPast`]: crate::Error::EventInPast
    pub fn run(&mut self) -> crate::Result {
        loop {
            if self.state.is_complete(self.event_queue.current_time()) {
                return Ok(());
            }

            let mut event = match self.event_queue.next() {
                Some(event) => event,
                None => return Ok(()),
            };
            event.execute(&mut self.state, &mut self.event_queue)?;
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
        self.event_queue.schedule(event, time)
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
        self.event_queue.schedule_with_delay(event, delay_min)
    }

    /// Get a shared reference to the simulation state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Get an exclusive reference to the simulation state.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Get a shared reference to the event queue.
    pub fn event_queue(&self) -> &EventQueue<State> {
        &self.event_queue
    }

    /// Get an exclusive reference to the event queue.
    pub fn event_queue_mut(&mut self) -> &mut EventQueue<State> {
        &mut self.event_queue
    }
}

impl<State> Display for Simulation<State>
where
    State: SimState,
{
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "simulation at {} with {} events pending",
            self.event_queue.current_time(),
            self.event_queue.pending()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OkEvent;

    #[derive(Debug)]
    struct State {
        executed_event_values: Vec<u32>,
        complete: bool,
    }

    impl SimState for State {
        fn is_complete(&self, _: Minutes) -> bool {
            self.complete
        }
    }

    #[derive(Debug)]
    struct TestEvent {
        value: u32,
    }

    impl Event<State> for TestEvent {
        fn execute(&mut self, state: &mut State, _: &mut EventQueue<State>) -> crate::Result {
            state.executed_event_values.push(self.value);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct CompletionEvent;

    impl OkEvent<State> for CompletionEvent {
        fn execute(&mut self, state: &mut State, _: &mut EventQueue<State>) {
            state.complete = true;
        }
    }

    fn setup() -> Simulation<State> {
        let mut sim = Simulation::new(
            State {
                executed_event_values: Vec::with_capacity(4),
                complete: false,
            },
            Minutes::ZERO,
        );

        let events = [TestEvent { value: 1 }, TestEvent { value: 3 }, TestEvent { value: 2 }];
        for (i, event) in events.into_iter().enumerate() {
            sim.schedule(event, Minutes(2.0 * i as f64)).unwrap();
        }
        sim
    }

    #[test]
    fn simulation_executes_events_in_time_order() {
        let mut sim = setup();
        sim.run().unwrap();

        assert_eq!(
            vec![1, 3, 2],
            sim.state.executed_event_values,
            "events did not execute in correct order"
        );
    }

    #[test]
    fn tied_events_execute_in_scheduling_order() {
        let mut sim = Simulation::new(
            State {
                executed_event_values: Vec::with_capacity(3),
                complete: false,
            },
            Minutes::ZERO,
        );
        for value in [7, 8, 9] {
            sim.schedule(TestEvent { value }, Minutes(5.0)).unwrap();
        }
        sim.run().unwrap();

        assert_eq!(
            vec![7, 8, 9],
            sim.state.executed_event_values,
            "tied events did not execute in scheduling order"
        );
    }

    #[test]
    fn simulation_stops_with_events_still_in_queue() {
        let mut sim = setup();
        sim.schedule(CompletionEvent, Minutes(3.0)).unwrap();
        sim.run().unwrap();

        assert_eq!(
            vec![1, 3],
            sim.state.executed_event_values,
            "simulation did not terminate at completion event"
        );
        assert_eq!(1, sim.event_queue().pending(), "unexecuted event should stay queued");
    }

    #[test]
    fn scheduling_in_the_past_is_rejected() {
        let mut sim = setup();
        sim.run().unwrap();

        let result = sim.schedule(TestEvent { value: 4 }, Minutes(1.0));
        assert_eq!(
            Err(crate::Error::EventInPast {
                scheduled: Minutes(1.0),
                now: Minutes(4.0),
            }),
            result
        );
    }

    #[test]
    fn delay_is_relative_to_the_current_clock() {
        let mut sim = setup();
        sim.run().unwrap();

        sim.schedule_with_delay(TestEvent { value: 4 }, 1.5).unwrap();
        sim.run().unwrap();

        assert_eq!(Minutes(5.5), sim.event_queue().current_time());
        assert_eq!(vec![1, 3, 2, 4], sim.state.executed_event_values);
    }
}
