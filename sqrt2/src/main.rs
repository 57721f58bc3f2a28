mod approximation;

use approximation::Approximation;
use genetic_controller::logging::{EvolutionLogger, ReportingLevel, Stats};
use genetic_controller::stopping::{after_iterations, either, when_best_reaches};
use genetic_controller::{Candidate, GeneticController, InvalidPopulationError, RankOrder};

use std::error::Error;

use rayon::prelude::*;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search settings, read from a RON file
/// when one is passed as the first argument.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct SearchConfig {
    population_size: usize,
    trials: usize,
    target: f64,
    tolerance: f64,
    max_iterations: u64,
    order: RankOrder,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            population_size: 20,
            trials: 500,
            target: 2.0,
            tolerance: 1e-9,
            max_iterations: 200,
            order: RankOrder::Ascending,
        }
    }
}

impl SearchConfig {
    /// The value a candidate must reach for the search
    /// to count as solved, in the configured rank order.
    fn threshold(&self) -> f64 {
        match self.order {
            RankOrder::Ascending => self.tolerance,
            RankOrder::Descending => 1.0 / (1.0 + self.tolerance),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sqrt2=info,genetic_controller=warn")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ron::from_str(&std::fs::read_to_string(path)?)?,
        None => SearchConfig::default(),
    };
    info!(?config, "starting search");

    stress_test(&config)?;
    logged_run(&config)?;
    Ok(())
}

fn new_controller(
    config: &SearchConfig,
) -> Result<GeneticController<Approximation>, InvalidPopulationError> {
    let mut rng = rand::thread_rng();
    let population = (0..config.population_size)
        .map(|_| Approximation::random(config.target, config.order, &mut rng))
        .collect();
    GeneticController::new(population, config.order)
}

/// Runs one search, returning the number of generations
/// it took to reach the tolerance, if it did.
fn run_trial(config: &SearchConfig) -> Result<Option<u64>, InvalidPopulationError> {
    let mut controller = new_controller(config)?;
    let threshold = config.threshold();
    let solved = {
        let best = controller.run_until(either(
            when_best_reaches(threshold),
            after_iterations(config.max_iterations),
        ));
        !config.order.is_better(threshold, best.value())
    };
    Ok(solved.then(|| controller.iterations()))
}

fn stress_test(config: &SearchConfig) -> Result<(), InvalidPopulationError> {
    let generations: Vec<Option<u64>> = (0..config.trials)
        .into_par_iter()
        .map(|_| run_trial(config))
        .collect::<Result<_, _>>()?;

    let failures = generations.iter().filter(|g| g.is_none()).count();
    info!(
        "Successful run generation count {:?}, {}% failure rate over {} trials",
        Stats::from(generations.iter().flatten().map(|&g| g as f64)),
        failures as f64 * 100.0 / config.trials.max(1) as f64,
        config.trials
    );
    Ok(())
}

fn logged_run(config: &SearchConfig) -> Result<(), Box<dyn Error>> {
    let mut controller = new_controller(config)?;
    let mut logger = EvolutionLogger::new(ReportingLevel::Champion);
    let mut stop = either(
        when_best_reaches(config.threshold()),
        after_iterations(config.max_iterations),
    );
    let champion = controller
        .run_until(|c| {
            logger.log(c);
            stop(c)
        })
        .clone();

    if let Some(log) = logger.last() {
        println!("{}", log);
    }
    println!(
        "Champion after {} generations (error {:e}):\n{}",
        controller.iterations(),
        champion.error(),
        ron::ser::to_string_pretty(&champion, PrettyConfig::new())?
    );
    Ok(())
}
