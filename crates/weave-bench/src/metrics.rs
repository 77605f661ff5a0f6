//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Relaxation strategy name.
    pub strategy: String,
    pub point_count: usize,
    pub stick_count: usize,
    /// Number of steps executed.
    pub steps: u64,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    pub min_step_time: f64,
    pub max_step_time: f64,
    /// Final kinetic energy (approaches zero once the cloth settles).
    pub final_kinetic_energy: f64,
    /// Largest relative stick stretch at the end.
    pub max_strain: f32,
    /// Mean last-pass residual over all steps.
    pub avg_residual: f32,
    /// Largest point displacement from its initial position.
    pub max_displacement: f32,
}

impl BenchmarkMetrics {
    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,strategy,point_count,stick_count,steps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,final_ke,max_strain,avg_residual,max_displacement".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6},{:.6},{:.4}",
            self.scenario,
            self.strategy,
            self.point_count,
            self.stick_count,
            self.steps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.final_kinetic_energy,
            self.max_strain,
            self.avg_residual,
            self.max_displacement,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
