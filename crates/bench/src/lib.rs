use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;

/// Sampling presets shared by the workspace's bench targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Runtime {
    /// Cheap per-iteration work: point queries, small builds.
    Short,
    /// Whole-structure passes: drains, full traversals.
    Long,
}

impl Runtime {
    const fn settings(self) -> (usize, u64, u64) {
        // (samples, warm-up ms, measurement ms)
        match self {
            Runtime::Short => (15, 100, 300),
            Runtime::Long => (10, 500, 1_500),
        }
    }
}

pub fn configure<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, runtime: Runtime) {
    let (samples, warm_up_ms, measure_ms) = runtime.settings();
    group.sample_size(samples);
    group.warm_up_time(Duration::from_millis(warm_up_ms));
    group.measurement_time(Duration::from_millis(measure_ms));
}
