use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub description: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_ms")]
    pub average_duration: Duration,
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        (duration.as_secs_f64() * 1000.0).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = f64::deserialize(deserializer)?;
        Ok(Duration::from_secs_f64(millis.max(0.0) / 1000.0))
    }
}

/// Run `scenario` `iterations` times, each against a fresh fixture.
pub fn run_scenario(scenario: &Scenario, iterations: usize, verbose: bool) -> ScenarioResult {
    let iterations = iterations.max(1);
    let mut failures = Vec::new();
    let mut elapsed = Duration::ZERO;

    for iteration in 1..=iterations {
        let started = Instant::now();
        let outcome = scenario.run();
        elapsed += started.elapsed();
        match outcome {
            Ok(()) => {
                log::debug!("{} iteration {iteration} passed", scenario.key);
            }
            Err(err) => {
                let message = format!("iteration {iteration}: {err:#}");
                if verbose {
                    eprintln!("   {} {message}", scenario.key);
                }
                log::warn!("{} {message}", scenario.key);
                failures.push(message);
            }
        }
    }

    let divisor = u32::try_from(iterations).unwrap_or(u32::MAX);
    ScenarioResult {
        scenario: scenario.key.to_string(),
        description: scenario.description.to_string(),
        passed: failures.is_empty(),
        iterations_run: iterations,
        successful_iterations: iterations - failures.len(),
        failures,
        average_duration: elapsed / divisor,
    }
}
