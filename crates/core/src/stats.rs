//! Simulation statistics collection and reporting.
//!
//! This module tracks what a loaded circuit contains and how much work the
//! simulation has done. It provides:
//! 1. **Circuit shape:** Gate, inert gate, wire, touchable wire and crossing counts.
//! 2. **Activity:** Ticks run, ticks dropped by the real-time driver, gate activations and toggles.
//! 3. **Reporting:** A sectioned report and a one-line status summary.

use std::time::Instant;

/// Simulation statistics for one circuit.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of gates extracted.
    pub gates: usize,
    /// Gates missing an input or output wire.
    pub inert_gates: usize,
    /// Number of wires extracted.
    pub wires: usize,
    /// Wires not driven by any gate.
    pub touchable_wires: usize,
    /// Distinct crossing pixels.
    pub crossings: usize,

    /// Simulation ticks completed.
    pub ticks: u64,
    /// Ticks the real-time driver skipped to catch up.
    pub ticks_dropped: u64,
    /// Gate evaluations that raised their output buffer.
    pub gate_activations: u64,
    /// Successful toggles of touchable wires.
    pub toggles: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            gates: 0,
            inert_gates: 0,
            wires: 0,
            touchable_wires: 0,
            crossings: 0,
            ticks: 0,
            ticks_dropped: 0,
            gate_activations: 0,
            toggles: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"circuit"`, `"activity"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "circuit", "activity"];

impl SimStats {
    /// Fresh statistics for a circuit of the given shape; activity counters start at zero.
    pub fn for_circuit(
        gates: usize,
        inert_gates: usize,
        wires: usize,
        touchable_wires: usize,
        crossings: usize,
    ) -> Self {
        Self {
            gates,
            inert_gates,
            wires,
            touchable_wires,
            crossings,
            ..Self::default()
        }
    }

    /// One-line status, e.g. `Gates: 3 | Wires: 5 | Ticks: 120`.
    pub fn summary_line(&self) -> String {
        format!(
            "Gates: {} | Wires: {} | Ticks: {}",
            self.gates, self.wires, self.ticks
        )
    }

    /// Ticks per host second since the statistics were created.
    pub fn tick_rate(&self) -> f64 {
        let seconds = self.start_time.elapsed().as_secs_f64();
        if seconds > 0.0 {
            self.ticks as f64 / seconds
        } else {
            0.0
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let ticks = self.ticks.max(1);

        if want("summary") {
            println!("\n==========================================================");
            println!("BLUEPRINT SIMULATION STATISTICS");
            println!("==========================================================");
            println!(
                "host_seconds             {:.4} s",
                self.start_time.elapsed().as_secs_f64()
            );
            println!("sim_ticks                {}", self.ticks);
            println!("sim_tick_rate            {:.2} Hz", self.tick_rate());
            println!("----------------------------------------------------------");
        }
        if want("circuit") {
            println!("CIRCUIT");
            println!("  gates                  {}", self.gates);
            println!("  gates.inert            {}", self.inert_gates);
            println!("  wires                  {}", self.wires);
            println!("  wires.touchable        {}", self.touchable_wires);
            println!("  crossings              {}", self.crossings);
            println!("----------------------------------------------------------");
        }
        if want("activity") {
            println!("ACTIVITY");
            println!(
                "  gate.activations       {} ({:.2} per tick)",
                self.gate_activations,
                self.gate_activations as f64 / ticks as f64
            );
            println!("  ticks.dropped          {}", self.ticks_dropped);
            println!("  toggles                {}", self.toggles);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
