//! Simulation statistics collection and reporting.
//!
//! This module tracks what happened during a testbench run. It provides:
//! 1. **Edges:** Rising and falling clock edges generated.
//! 2. **Register activity:** Rising edges classified as reset, load, or shift.
//! 3. **Observation:** Asynchronous reset events and recorded samples.

use std::time::Instant;

/// Counters accumulated by a [`Testbench`](crate::sim::Testbench).
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Rising clock edges (register update events).
    pub rising_edges: u64,
    /// Falling clock edges (time only).
    pub falling_edges: u64,

    /// Rising edges where reset was asserted.
    pub reset_edges: u64,
    /// Rising edges that captured the parallel input.
    pub load_edges: u64,
    /// Rising edges that shifted the register.
    pub shift_edges: u64,

    /// Immediate clears triggered by asserting an asynchronous reset.
    pub async_resets: u64,
    /// Serial output samples recorded.
    pub samples: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            rising_edges: 0,
            falling_edges: 0,
            reset_edges: 0,
            load_edges: 0,
            shift_edges: 0,
            async_resets: 0,
            samples: 0,
        }
    }
}

impl SimStats {
    /// Prints all statistics to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.rising_edges.max(1);

        println!("\n==========================================================");
        println!("PISO SHIFT REGISTER SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.6} s");
        println!("sim_cycles               {}", self.rising_edges);
        println!("sim_falling_edges        {}", self.falling_edges);
        println!("----------------------------------------------------------");
        println!(
            "edges.reset              {:<10} {:.2}%",
            self.reset_edges,
            self.reset_edges as f64 / cyc as f64 * 100.0
        );
        println!(
            "edges.load               {:<10} {:.2}%",
            self.load_edges,
            self.load_edges as f64 / cyc as f64 * 100.0
        );
        println!(
            "edges.shift              {:<10} {:.2}%",
            self.shift_edges,
            self.shift_edges as f64 / cyc as f64 * 100.0
        );
        println!("async_resets             {}", self.async_resets);
        println!("samples                  {}", self.samples);
        println!("==========================================================");
    }
}
