use super::{GeneticController, RankOrder};
use crate::Candidate;

use std::fmt;

/// Defines different possible reporting levels for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportingLevel {
    /// Clones the entire population.
    AllCandidates,
    /// Clones only the best-ranked candidate.
    Champion,
    /// Clones no candidates.
    NoCandidates,
}

/// A snapshot of a controller's population.
#[derive(Clone, Debug)]
pub struct Log<C> {
    pub iteration: u64,
    pub order: RankOrder,
    pub population_size: usize,
    pub sample: GenerationMemberRecord<C>,
    pub values: Stats,
}

impl<C> fmt::Display for Log<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Log {{\n\
            \titeration: {}\n\
            \torder: {}\n\
            \tpopulation_size: {}\n\
            \tvalues: {:?}\n\
            }}",
            self.iteration, self.order, self.population_size, self.values
        )
    }
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub maximum: f64,
    pub minimum: f64,
    pub mean: f64,
    pub median: f64,
}

impl Stats {
    /// Returns statistics about numbers in a sequence.
    ///
    /// An empty sequence yields NaN for every statistic.
    ///
    /// # Examples
    /// ```
    /// use genetic_controller::logging::Stats;
    ///
    /// let stats = Stats::from([-2.0, -1.0, 0.5, 1.0, 1.5].iter().copied());
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    /// ```
    pub fn from(data: impl Iterator<Item = f64>) -> Stats {
        let mut data: Vec<f64> = data.collect();
        if data.is_empty() {
            return Stats {
                maximum: f64::NAN,
                minimum: f64::NAN,
                mean: f64::NAN,
                median: f64::NAN,
            };
        }
        data.sort_unstable_by(f64::total_cmp);
        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Stats {
            maximum: data[data.len() - 1],
            minimum: data[0],
            mean: data.iter().sum::<f64>() / data.len() as f64,
            median,
        }
    }
}

/// A reporting-level dependant store
/// of candidates from a population.
#[derive(Clone, Debug)]
pub enum GenerationMemberRecord<C> {
    /// The whole population, in rank order.
    Population(Vec<C>),
    /// Only the candidate at rank 0.
    Champion(C),
    /// Empty.
    None,
}

/// A log of the evolution of a population over time.
#[derive(Clone, Debug)]
pub struct EvolutionLogger<C> {
    reporting_level: ReportingLevel,
    logs: Vec<Log<C>>,
}

impl<C: Candidate + Clone> EvolutionLogger<C> {
    /// Returns a logger with the appropiate reporting level.
    pub fn new(reporting_level: ReportingLevel) -> EvolutionLogger<C> {
        EvolutionLogger {
            reporting_level,
            logs: vec![],
        }
    }

    /// Store a snapshot of a controller's population.
    ///
    /// # Examples
    /// ```
    /// # use genetic_controller::{Candidate, GeneticController, RankOrder};
    /// # #[derive(Clone)]
    /// # struct Point(f64);
    /// # impl Candidate for Point {
    /// #     fn value(&self) -> f64 { self.0 }
    /// #     fn breed_with(&self, other: &Self) -> Self { Point((self.0 + other.0) / 2.0 + 1.0) }
    /// # }
    /// use genetic_controller::logging::{EvolutionLogger, ReportingLevel};
    ///
    /// let population = [1.0, 0.0, 2.0, -1.0].into_iter().map(Point).collect();
    /// let mut controller = GeneticController::new(population, RankOrder::Descending).unwrap();
    /// let mut logger = EvolutionLogger::new(ReportingLevel::Champion);
    ///
    /// controller.run_until(|c| {
    ///     logger.log(c);
    ///     c.iterations() == 3
    /// });
    ///
    /// assert_eq!(logger.iter().count(), 4);
    /// for log in logger.iter() {
    ///     println!("{}", log);
    /// }
    /// ```
    pub fn log(&mut self, controller: &GeneticController<C>) {
        let population = controller.population();
        self.logs.push(Log {
            iteration: controller.iterations(),
            order: controller.order(),
            population_size: population.len(),
            sample: match self.reporting_level {
                ReportingLevel::AllCandidates => {
                    GenerationMemberRecord::Population(population.to_vec())
                }
                ReportingLevel::Champion => {
                    GenerationMemberRecord::Champion(controller.best().clone())
                }
                ReportingLevel::NoCandidates => GenerationMemberRecord::None,
            },
            values: Stats::from(population.iter().map(Candidate::value)),
        })
    }

    /// Iterate over all logged snapshots.
    pub fn iter(&self) -> impl Iterator<Item = &Log<C>> {
        self.logs.iter()
    }

    /// Returns the most recent snapshot, if any.
    pub fn last(&self) -> Option<&Log<C>> {
        self.logs.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[derive(Clone, Debug, PartialEq)]
    struct Point(f64);

    impl Candidate for Point {
        fn value(&self) -> f64 {
            self.0
        }

        fn breed_with(&self, other: &Self) -> Self {
            Point((self.0 + other.0) / 2.0 + 1.0)
        }
    }

    fn ranked_controller() -> GeneticController<Point> {
        let population = [1.0, 0.0, 2.0, -1.0].into_iter().map(Point).collect();
        let mut controller = GeneticController::new(population, RankOrder::Descending).unwrap();
        controller.rank();
        controller
    }

    #[test]
    fn stats_even_length_median() {
        let stats = Stats::from([4.0, 1.0, 3.0, 2.0].into_iter());
        assert_relative_eq!(stats.median, 2.5);
        assert_relative_eq!(stats.mean, 2.5);
        assert_eq!(stats.maximum, 4.0);
        assert_eq!(stats.minimum, 1.0);
    }

    #[test]
    fn stats_empty() {
        let stats = Stats::from(std::iter::empty());
        assert!(stats.maximum.is_nan() && stats.median.is_nan());
    }

    #[test]
    fn logs_by_reporting_level() {
        let controller = ranked_controller();

        let mut all = EvolutionLogger::new(ReportingLevel::AllCandidates);
        all.log(&controller);
        match &all.last().unwrap().sample {
            GenerationMemberRecord::Population(p) => {
                assert_eq!(p, &[Point(2.0), Point(1.0), Point(0.0), Point(-1.0)])
            }
            other => panic!("unexpected sample {:?}", other),
        }

        let mut champion = EvolutionLogger::new(ReportingLevel::Champion);
        champion.log(&controller);
        match &champion.last().unwrap().sample {
            GenerationMemberRecord::Champion(c) => assert_eq!(c, &Point(2.0)),
            other => panic!("unexpected sample {:?}", other),
        }

        let mut none = EvolutionLogger::new(ReportingLevel::NoCandidates);
        none.log(&controller);
        let log = none.last().unwrap();
        assert!(matches!(log.sample, GenerationMemberRecord::None));
        assert_eq!(log.population_size, 4);
        assert_eq!(log.order, RankOrder::Descending);
        assert_relative_eq!(log.values.mean, 0.5);
    }

    #[test]
    fn logs_follow_iterations() {
        let mut controller = ranked_controller();
        let mut logger = EvolutionLogger::new(ReportingLevel::NoCandidates);
        controller.run_until(|c| {
            logger.log(c);
            c.iterations() == 2
        });
        let iterations: Vec<u64> = logger.iter().map(|l| l.iteration).collect();
        assert_eq!(iterations, [0, 1, 2]);
        assert_eq!(logger.iter().nth(1).unwrap().values.maximum, 2.5);
        assert!(logger.last().unwrap().to_string().contains("iteration: 2"));
    }
}
