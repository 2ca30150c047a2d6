//! Feed the same month of truck traffic through yards with different inbound
//! dock counts and compare the waits each one produces.
//!
//! Dock times are drawn when a truck arrives rather than when it reaches a
//! dock, so every configuration below faces an identical truck stream and the
//! differences in the output come from capacity alone. Draw a fresh seed per
//! invocation to see a different month; the comparison itself holds for any
//! seed.

use waresim::{DockParams, SimulationConfig, WarehouseSimulation};

fn run_yard(seed: u64, inbound_docks: usize) -> waresim::DockKpiSummary {
    let config = SimulationConfig {
        staff_count: 75,
        docks: Some(DockParams {
            inbound_docks,
            rng_seed: Some(seed),
            ..DockParams::default()
        }),
        ..SimulationConfig::default()
    };
    let mut sim = WarehouseSimulation::new(config).expect("scenario parameters should validate");
    sim.run().expect("run should complete normally");
    sim.summary().docks.expect("dock KPIs should be present")
}

fn main() {
    env_logger::init();

    let seed: u64 = rand::random();
    println!("Comparing inbound dock counts using the seed {seed}:");
    for inbound_docks in [2, 3, 4] {
        let docks = run_yard(seed, inbound_docks);
        println!(
            "{} inbound docks served {} trucks, waiting {:.1} min on average \
             and {:.1} min at worst, at {:.0}% occupancy",
            inbound_docks,
            docks.inbound_trucks_served,
            docks.avg_inbound_wait_min,
            docks.max_inbound_wait_min,
            docks.inbound_dock_utilization * 100.0
        );
    }
}
