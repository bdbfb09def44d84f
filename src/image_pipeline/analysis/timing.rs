use std::time::{Duration, Instant};
use tracing::info;

/// One measured stage of an analysis run.
#[derive(Debug, Clone, Copy)]
pub struct StepTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Wall-clock durations of the stages of one analysis run, in execution order.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` and records its duration under `name`.
    pub fn measure<T>(&mut self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let value = f();
        self.steps.push(StepTiming { name, duration: started.elapsed() });
        value
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Summed duration of every step recorded under `name`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        let mut matching = self.steps.iter().filter(|s| s.name == name).peekable();
        matching.peek()?;
        Some(matching.map(|s| s.duration).sum())
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    /// Logs each stage with its share of the run and the per-stage throughput
    /// for a frame of `pixel_count` pixels.
    pub fn log_summary(&self, pixel_count: usize) {
        let total = self.total_duration().as_secs_f64();
        let megapixels = pixel_count as f64 / 1e6;
        for step in &self.steps {
            let secs = step.duration.as_secs_f64();
            let share = if total > 0.0 { secs / total * 100.0 } else { 0.0 };
            let throughput = if secs > 0.0 { megapixels / secs } else { f64::INFINITY };
            info!(
                "{:<20} {:>9.3}ms ({:>5.1}%) {:>9.1} MP/s",
                step.name,
                secs * 1000.0,
                share,
                throughput
            );
        }
        info!("{:<20} {:>9.3}ms", "total", total * 1000.0);
    }
}
