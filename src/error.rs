use crate::engine::Minutes;

/// Errors that may be encountered while configuring or executing a simulation.
///
/// The configuration variants come out of [`SimulationConfig::validate()`] before any event is
/// scheduled, so a run that starts executing has already passed every parameter check.
///
/// [`EventInPast`] originates from the scheduling interface on the [`EventQueue`] and indicates
/// that an event's requested execution time is prior to the queue's current time. This error
/// likely corresponds to a logical bug on the calling side, e.g. forgetting to add an offset to
/// the current time when scheduling a followup event.
///
/// [`SimulationConfig::validate()`]: crate::SimulationConfig::validate
/// [`EventQueue`]: crate::engine::EventQueue
/// [`EventInPast`]: Error::EventInPast
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The operator pool cannot be empty.
    #[error("staff_count must be at least 1")]
    ZeroStaff,

    /// Efficiency rescales service times and so must be a positive, finite factor.
    #[error("efficiency_multiplier must be positive and finite, got {0}")]
    InvalidEfficiency(f64),

    /// A duration or interval parameter was zero, negative, or not finite.
    #[error("{name} must be positive and finite, got {value}")]
    InvalidDuration { name: &'static str, value: f64 },

    /// The working month cannot span zero days.
    #[error("working_days_per_month must be at least 1")]
    ZeroWorkingDays,

    /// Dock traffic was requested with no capacity on one side of the yard.
    #[error("dock counts must be at least 1 in each direction")]
    ZeroDockCapacity,

    /// Open-ended arrivals still derive their spacing from the monthly target.
    #[error("unbounded arrivals require a monthly_order_target of at least 1")]
    UnboundedWithoutTarget,

    /// The event queue rejected an event that would have been scheduled for a time that has
    /// already passed.
    #[error("cannot schedule an event at {scheduled}, the clock already reads {now}")]
    EventInPast { scheduled: Minutes, now: Minutes },
}

/// Result type used throughout the crate. The success type defaults to `()` for the many
/// operations that only signal whether they worked.
pub type Result<T = ()> = std::result::Result<T, Error>;
