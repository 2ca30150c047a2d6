use super::EventQueue;
use crate::engine::SimState;
use std::fmt::Debug;

/// A state change that occurs at a scheduled point in simulation time.
///
/// Implementors describe what happens when the event fires: mutate the shared state, read the
/// clock, schedule followup events. [`Simulation::run()`] invokes [`execute()`] for each
/// scheduled event in time order, handing out exclusive access to both the state and the queue,
/// so no interior mutability is needed to get work done.
///
/// Requiring implementors to be [`Debug`] keeps the contents of an [`EventQueue`] printable for
/// diagnostics.
///
/// [`Simulation::run()`]: crate::engine::Simulation::run
/// [`execute()`]: Event::execute
pub trait Event<State>: Debug
where
    State: SimState,
{
    /// Update the simulation according to the specific type of event. The clock on `queue` will
    /// already read this event's execution time when this method is invoked.
    ///
    /// # Errors
    ///
    /// Implementations are expected to be fallible; [`Simulation::run()`] halts and bubbles any
    /// error back up to the caller unchanged, rather than losing it somewhere deep in the event
    /// loop. Infallible implementations may prefer the [`OkEvent`] trait.
    ///
    /// [`Simulation::run()`]: crate::engine::Simulation::run
    fn execute(&mut self, state: &mut State, queue: &mut EventQueue<State>) -> crate::Result;
}

/// An [`Event`] that is guaranteed not to return an error on execution.
///
/// The [`execute()`] method on this trait differs from [`Event::execute()`] only by omitting the
/// return type. An implementation of [`Event`] is provided for all implementors of this trait,
/// which simply invokes [`OkEvent::execute()`] then returns `Ok(())`.
///
/// [`execute()`]: OkEvent::execute
pub trait OkEvent<State>: Debug
where
    State: SimState,
{
    /// Update the simulation according to the specific type of event. The clock on `queue` will
    /// already read this event's execution time when this method is invoked.
    fn execute(&mut self, state: &mut State, queue: &mut EventQueue<State>);
}

impl<State, OkEventType> Event<State> for OkEventType
where
    State: SimState,
    OkEventType: OkEvent<State>,
{
    fn execute(&mut self, state: &mut State, queue: &mut EventQueue<State>) -> crate::Result {
        OkEvent::execute(self, state, queue);
        Ok(())
    }
}
