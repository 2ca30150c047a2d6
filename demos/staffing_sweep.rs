//! Sweep operator headcount and picking efficiency against the reference month
//! (10000 orders over 20 eight-hour days, 15 min of operator time per order) and
//! print the KPIs each scenario achieves.
//!
//! The order side of the model is deterministic, so the table repeats exactly
//! from run to run. Set RUST_LOG=waresim=debug for a running commentary.

use waresim::{KpiSummary, SimulationConfig, WarehouseSimulation};

fn run_scenario(staff_count: usize, efficiency_multiplier: f64) -> KpiSummary {
    let config = SimulationConfig {
        staff_count,
        efficiency_multiplier,
        ..SimulationConfig::default()
    };
    let mut sim = WarehouseSimulation::new(config).expect("scenario parameters should validate");
    sim.run().expect("run should complete normally");
    sim.summary()
}

fn main() {
    env_logger::init();

    println!(
        "{:>6} {:>11} {:>11} {:>15} {:>13} {:>5}",
        "staff", "efficiency", "throughput", "avg cycle (min)", "utilization", "peak"
    );
    for &staff_count in &[1, 5, 10, 16, 25, 75] {
        for &efficiency_multiplier in &[0.8, 1.0, 1.25] {
            let summary = run_scenario(staff_count, efficiency_multiplier);
            println!(
                "{:>6} {:>11.2} {:>11} {:>15.2} {:>13.3} {:>5}",
                staff_count,
                efficiency_multiplier,
                summary.achieved_throughput,
                summary.avg_cycle_time_min,
                summary.operator_utilization,
                summary.peak_operators_busy
            );
        }
    }
}
