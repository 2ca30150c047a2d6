use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Everything that varies between warehouse runs.
///
/// The two headline knobs are [`staff_count`] and [`efficiency_multiplier`]: sweeping them
/// against a fixed [`WorkloadProfile`] answers staffing and automation questions. The remaining
/// fields select how arrivals end, how the run ends, and whether the loading yard is modeled at
/// all.
///
/// Construct with struct-update syntax over [`Default::default()`], which describes a fully
/// staffed baseline month, then call [`validate()`] - or hand the config straight to
/// [`WarehouseSimulation::new()`], which validates first.
///
/// [`staff_count`]: SimulationConfig::staff_count
/// [`efficiency_multiplier`]: SimulationConfig::efficiency_multiplier
/// [`validate()`]: SimulationConfig::validate
/// [`WarehouseSimulation::new()`]: crate::WarehouseSimulation::new
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of picking operators on shift. Must be at least 1.
    pub staff_count: usize,
    /// Scales picking speed: effective service time is the base time divided by this factor.
    /// Must be positive and finite.
    pub efficiency_multiplier: f64,
    /// The demand the month is expected to absorb.
    pub workload: WorkloadProfile,
    /// Whether order arrivals stop at the monthly target or keep coming.
    pub arrivals: ArrivalPolicy,
    /// How the run decides it is over.
    pub horizon: HorizonPolicy,
    /// Loading-dock traffic, modeled only when present.
    pub docks: Option<DockParams>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            staff_count: 100,
            efficiency_multiplier: 1.0,
            workload: WorkloadProfile::default(),
            arrivals: ArrivalPolicy::Bounded,
            horizon: HorizonPolicy::default(),
            docks: None,
        }
    }
}

impl SimulationConfig {
    /// Check every parameter, reporting the first problem found.
    ///
    /// # Errors
    ///
    /// * [`Error::ZeroStaff`] when [`staff_count`] is zero.
    /// * [`Error::InvalidEfficiency`] when [`efficiency_multiplier`] is not positive and finite.
    /// * [`Error::InvalidDuration`] when any duration, interval, or factor is not positive and
    ///   finite.
    /// * [`Error::ZeroWorkingDays`] when the workload spans no working days.
    /// * [`Error::UnboundedWithoutTarget`] when unbounded arrivals leave no way to derive their
    ///   spacing.
    /// * [`Error::ZeroDockCapacity`] when docks are requested with an empty side.
    ///
    /// [`staff_count`]: SimulationConfig::staff_count
    /// [`efficiency_multiplier`]: SimulationConfig::efficiency_multiplier
    pub fn validate(&self) -> Result {
        if self.staff_count == 0 {
            return Err(Error::ZeroStaff);
        }
        if !(self.efficiency_multiplier.is_finite() && self.efficiency_multiplier > 0.0) {
            return Err(Error::InvalidEfficiency(self.efficiency_multiplier));
        }
        check_duration("base_service_minutes", self.workload.base_service_minutes)?;
        check_duration("minutes_per_working_day", self.workload.minutes_per_working_day)?;
        if self.workload.working_days_per_month == 0 {
            return Err(Error::ZeroWorkingDays);
        }
        if let HorizonPolicy::SafetyFactor(factor) = self.horizon {
            check_duration("safety factor", factor)?;
        }
        if self.arrivals == ArrivalPolicy::Unbounded && self.workload.monthly_order_target == 0 {
            return Err(Error::UnboundedWithoutTarget);
        }
        if let Some(docks) = &self.docks {
            if docks.inbound_docks == 0 || docks.outbound_docks == 0 {
                return Err(Error::ZeroDockCapacity);
            }
            check_duration("inbound_truck_interval_min", docks.inbound_truck_interval_min)?;
            check_duration("outbound_truck_interval_min", docks.outbound_truck_interval_min)?;
        }
        Ok(())
    }

    /// Effective minutes of operator time per order, efficiency applied.
    pub fn service_time_min(&self) -> f64 {
        self.workload.base_service_minutes / self.efficiency_multiplier
    }
}

fn check_duration(name: &'static str, value: f64) -> Result {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDuration { name, value })
    }
}

/// The monthly demand a warehouse is sized against.
///
/// Defaults describe the reference site: 10000 orders over a 20-day working month of 8-hour
/// days, each order taking 15 minutes of operator time at baseline efficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadProfile {
    /// Minutes of operator time per order before the efficiency multiplier applies.
    pub base_service_minutes: f64,
    /// Orders the month is expected to absorb. Also fixes the arrival spacing.
    pub monthly_order_target: u32,
    /// Working days in the simulated month.
    pub working_days_per_month: u32,
    /// Shift length per working day, in minutes.
    pub minutes_per_working_day: f64,
}

impl Default for WorkloadProfile {
    fn default() -> Self {
        Self {
            base_service_minutes: 15.0,
            monthly_order_target: 10_000,
            working_days_per_month: 20,
            minutes_per_working_day: 480.0,
        }
    }
}

impl WorkloadProfile {
    /// Total working minutes in the nominal month.
    pub fn nominal_duration_min(&self) -> f64 {
        f64::from(self.working_days_per_month) * self.minutes_per_working_day
    }

    /// Evenly spaced gap between consecutive order arrivals.
    ///
    /// Meaningful only when the target is at least 1; validation rejects the one configuration
    /// that would consult it otherwise.
    pub fn arrival_interval_min(&self) -> f64 {
        self.nominal_duration_min() / f64::from(self.monthly_order_target)
    }
}

/// Whether order arrivals stop at the monthly target or keep coming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrivalPolicy {
    /// Generate exactly the monthly target, then stop.
    Bounded,
    /// Keep generating at the same spacing for as long as the clock runs. Measures capacity
    /// rather than performance against a fixed demand.
    Unbounded,
}

/// How a run decides it is over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HorizonPolicy {
    /// Hard-stop the clock at the nominal month length times this factor. Work still in flight
    /// at that instant goes unfinished, which is what lets a run fall short of its target.
    SafetyFactor(f64),
    /// No hard stop: arrivals cease at the nominal month close and the run continues until the
    /// last order completes. Reports how long clearing the month really takes.
    Drain,
}

impl Default for HorizonPolicy {
    fn default() -> Self {
        HorizonPolicy::SafetyFactor(1.5)
    }
}

/// Loading-dock traffic parameters.
///
/// Trucks queue for docks exactly like orders queue for operators, but their arrival spacing is
/// jittered and their dock times are drawn from direction-specific ranges, so this is the one
/// random corner of the model. A fixed [`rng_seed`] makes the yard reproducible and lets two
/// runs differing only in dock counts see the same trucks.
///
/// [`rng_seed`]: DockParams::rng_seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockParams {
    /// Docks available to arriving (unloading) trucks.
    pub inbound_docks: usize,
    /// Docks available to departing (loading) trucks.
    pub outbound_docks: usize,
    /// Nominal minutes between inbound truck arrivals, before jitter.
    pub inbound_truck_interval_min: f64,
    /// Nominal minutes between outbound truck arrivals, before jitter.
    pub outbound_truck_interval_min: f64,
    /// Seed for the yard's random number generator; `None` seeds from the system.
    pub rng_seed: Option<u64>,
}

impl Default for DockParams {
    fn default() -> Self {
        Self {
            inbound_docks: 4,
            outbound_docks: 4,
            inbound_truck_interval_min: 60.0,
            outbound_truck_interval_min: 45.0,
            rng_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Ok(()), SimulationConfig::default().validate());
    }

    #[test]
    fn default_config_with_docks_is_valid() {
        let config = SimulationConfig {
            docks: Some(DockParams::default()),
            ..SimulationConfig::default()
        };
        assert_eq!(Ok(()), config.validate());
    }

    #[test]
    fn rejects_zero_staff() {
        let config = SimulationConfig {
            staff_count: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(Err(Error::ZeroStaff), config.validate());
    }

    #[test]
    fn rejects_bad_efficiency() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SimulationConfig {
                efficiency_multiplier: bad,
                ..SimulationConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(Error::InvalidEfficiency(_))),
                "{bad} should not validate"
            );
        }
    }

    #[test]
    fn rejects_nonpositive_durations() {
        let config = SimulationConfig {
            workload: WorkloadProfile {
                base_service_minutes: 0.0,
                ..WorkloadProfile::default()
            },
            ..SimulationConfig::default()
        };
        assert_eq!(
            Err(Error::InvalidDuration {
                name: "base_service_minutes",
                value: 0.0,
            }),
            config.validate()
        );
    }

    #[test]
    fn rejects_zero_working_days() {
        let config = SimulationConfig {
            workload: WorkloadProfile {
                working_days_per_month: 0,
                ..WorkloadProfile::default()
            },
            ..SimulationConfig::default()
        };
        assert_eq!(Err(Error::ZeroWorkingDays), config.validate());
    }

    #[test]
    fn rejects_unbounded_arrivals_without_a_target() {
        let config = SimulationConfig {
            arrivals: ArrivalPolicy::Unbounded,
            workload: WorkloadProfile {
                monthly_order_target: 0,
                ..WorkloadProfile::default()
            },
            ..SimulationConfig::default()
        };
        assert_eq!(Err(Error::UnboundedWithoutTarget), config.validate());
    }

    #[test]
    fn bounded_arrivals_allow_a_zero_target() {
        let config = SimulationConfig {
            workload: WorkloadProfile {
                monthly_order_target: 0,
                ..WorkloadProfile::default()
            },
            ..SimulationConfig::default()
        };
        assert_eq!(Ok(()), config.validate());
    }

    #[test]
    fn rejects_empty_dock_sides() {
        let config = SimulationConfig {
            docks: Some(DockParams {
                outbound_docks: 0,
                ..DockParams::default()
            }),
            ..SimulationConfig::default()
        };
        assert_eq!(Err(Error::ZeroDockCapacity), config.validate());
    }

    #[test]
    fn rejects_a_nonpositive_safety_factor() {
        let config = SimulationConfig {
            horizon: HorizonPolicy::SafetyFactor(-1.5),
            ..SimulationConfig::default()
        };
        assert_eq!(
            Err(Error::InvalidDuration {
                name: "safety factor",
                value: -1.5,
            }),
            config.validate()
        );
    }

    #[test]
    fn derives_the_reference_site_timings() {
        let workload = WorkloadProfile::default();
        assert_eq!(9600.0, workload.nominal_duration_min());
        assert_eq!(0.96, workload.arrival_interval_min());

        let config = SimulationConfig {
            efficiency_multiplier: 1.25,
            ..SimulationConfig::default()
        };
        assert_eq!(12.0, config.service_time_min());
    }
}
