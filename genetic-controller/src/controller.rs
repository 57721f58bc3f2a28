//! A GeneticController owns a ranked population
//! of candidates and evolves it one generation
//! at a time, until a caller-supplied condition
//! is met.
mod errors;
pub mod logging;
mod ranking;
pub mod stopping;

use crate::Candidate;
pub use errors::{InvalidPopulationError, ParseRankOrderError};
pub use ranking::RankOrder;

use tracing::{debug, info, trace};

/// An evolving population of candidates.
///
/// Each generation, the better half of the population
/// survives unchanged and the worse half is replaced by
/// offspring of adjacent-ranked pairs.
#[derive(Clone, Debug)]
pub struct GeneticController<C> {
    population: Vec<C>,
    order: RankOrder,
    iterations: u64,
}

impl<C: Candidate> GeneticController<C> {
    /// Creates a new controller owning `population`,
    /// ranked according to `order`.
    ///
    /// The population is not ranked until [`rank`],
    /// [`run_until`] or [`generations`] is called.
    ///
    /// # Errors
    /// Returns an error if the population is empty or
    /// has an odd number of candidates.
    ///
    /// [`rank`]: GeneticController::rank
    /// [`run_until`]: GeneticController::run_until
    /// [`generations`]: GeneticController::generations
    ///
    /// # Examples
    /// ```
    /// use genetic_controller::{Candidate, GeneticController, InvalidPopulationError, RankOrder};
    ///
    /// #[derive(Debug)]
    /// struct Point(f64);
    ///
    /// impl Candidate for Point {
    ///     fn value(&self) -> f64 {
    ///         self.0
    ///     }
    ///
    ///     fn breed_with(&self, other: &Self) -> Self {
    ///         Point((self.0 + other.0) / 2.0)
    ///     }
    /// }
    ///
    /// let controller = GeneticController::new(vec![Point(1.0), Point(2.0)], RankOrder::Descending);
    /// assert!(controller.is_ok());
    ///
    /// let odd = GeneticController::new(vec![Point(1.0)], RankOrder::Descending);
    /// assert_eq!(odd.unwrap_err(), InvalidPopulationError::OddLength(1));
    /// ```
    pub fn new(
        population: Vec<C>,
        order: RankOrder,
    ) -> Result<GeneticController<C>, InvalidPopulationError> {
        match population.len() {
            0 => return Err(InvalidPopulationError::Empty),
            n if n % 2 != 0 => return Err(InvalidPopulationError::OddLength(n)),
            _ => {}
        }
        debug!(size = population.len(), %order, "created genetic controller");
        Ok(GeneticController {
            population,
            order,
            iterations: 0,
        })
    }

    /// Sorts the population from best to worst.
    ///
    /// Candidates with equal values may end up
    /// in any relative order.
    pub fn rank(&mut self) {
        let order = self.order;
        self.population
            .sort_unstable_by(|a, b| order.compare(a.value(), b.value()));
        trace!(best = self.best().value(), "ranked population");
    }

    /// Advances the population by one generation.
    ///
    /// The candidate at rank `i` is bred with the one at
    /// rank `i + 1`, for every `i` in the better half. The
    /// offspring replace the worse half, and the result
    /// is re-ranked.
    ///
    /// The population is expected to be ranked already;
    /// it is not re-ranked before pairing.
    ///
    /// If breeding panics, the previous generation
    /// is left in place.
    ///
    /// # Examples
    /// ```
    /// # use genetic_controller::{Candidate, GeneticController, RankOrder};
    /// # struct Point(f64);
    /// # impl Candidate for Point {
    /// #     fn value(&self) -> f64 { self.0 }
    /// #     fn breed_with(&self, other: &Self) -> Self { Point((self.0 + other.0) / 2.0 + 1.0) }
    /// # }
    /// let population = [1.0, 0.0, 2.0, -1.0].into_iter().map(Point).collect();
    /// let mut controller = GeneticController::new(population, RankOrder::Descending).unwrap();
    ///
    /// controller.rank();
    /// controller.breed();
    ///
    /// let values: Vec<f64> = controller.population().iter().map(Point::value).collect();
    /// assert_eq!(values, [2.5, 2.0, 1.5, 1.0]);
    /// ```
    pub fn breed(&mut self) {
        let half = self.population.len() / 2;
        let offspring: Vec<C> = self.population[..=half]
            .windows(2)
            .map(|pair| pair[0].breed_with(&pair[1]))
            .collect();
        self.population.truncate(half);
        self.population.extend(offspring);
        self.rank();
    }

    /// Ranks the population, then breeds it until
    /// `stop` returns `true`, and returns the best
    /// candidate.
    ///
    /// `stop` is checked before every generation, including
    /// the first, so a condition that already holds causes
    /// no breeding at all. The iteration counter increases by
    /// one per generation bred.
    ///
    /// This never returns if `stop` never holds; bounding
    /// the run is up to the caller (see [`stopping`]).
    ///
    /// [`stopping`]: crate::stopping
    ///
    /// # Examples
    /// ```
    /// # use genetic_controller::{Candidate, GeneticController, RankOrder};
    /// # struct Point(f64);
    /// # impl Candidate for Point {
    /// #     fn value(&self) -> f64 { self.0 }
    /// #     fn breed_with(&self, other: &Self) -> Self { Point((self.0 + other.0) / 2.0 + 1.0) }
    /// # }
    /// let population = [1.0, 0.0, 2.0, -1.0].into_iter().map(Point).collect();
    /// let mut controller = GeneticController::new(population, RankOrder::Descending).unwrap();
    ///
    /// let best = controller.run_until(|c| c.best().value() > 25.0);
    /// assert!(best.value() > 25.0);
    /// ```
    pub fn run_until<P>(&mut self, mut stop: P) -> &C
    where
        P: FnMut(&GeneticController<C>) -> bool,
    {
        self.rank();
        while !stop(self) {
            self.iterations += 1;
            self.breed();
            debug!(
                iteration = self.iterations,
                best = self.best().value(),
                "bred generation"
            );
        }
        info!(
            iterations = self.iterations,
            best = self.best().value(),
            "stopping condition met"
        );
        self.best()
    }

    /// Ranks the population and returns an iterator that
    /// breeds one generation per step, yielding the new
    /// iteration count and best value.
    ///
    /// The iterator is unbounded.
    ///
    /// # Examples
    /// ```
    /// # use genetic_controller::{Candidate, GeneticController, RankOrder};
    /// # struct Point(f64);
    /// # impl Candidate for Point {
    /// #     fn value(&self) -> f64 { self.0 }
    /// #     fn breed_with(&self, other: &Self) -> Self { Point((self.0 + other.0) / 2.0 + 1.0) }
    /// # }
    /// let population = [1.0, 0.0, 2.0, -1.0].into_iter().map(Point).collect();
    /// let mut controller = GeneticController::new(population, RankOrder::Descending).unwrap();
    ///
    /// let (iteration, best) = controller.generations().find(|&(_, best)| best > 10.0).unwrap();
    /// assert!(best > 10.0);
    /// assert_eq!(controller.iterations(), iteration);
    /// ```
    pub fn generations(&mut self) -> Generations<'_, C> {
        self.rank();
        Generations { controller: self }
    }

    /// Returns the candidate at rank 0.
    ///
    /// Only meaningful once the population has been ranked.
    pub fn best(&self) -> &C {
        &self.population[0]
    }

    /// Returns the population, in its current order.
    pub fn population(&self) -> &[C] {
        &self.population
    }

    /// Returns the number of generations bred by the run loop.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Returns the controller's rank order.
    pub fn order(&self) -> RankOrder {
        self.order
    }

    /// Consumes the controller, returning its population.
    pub fn into_population(self) -> Vec<C> {
        self.population
    }
}

/// Iterator over successive generations of a
/// [`GeneticController`]. See [`GeneticController::generations`].
pub struct Generations<'a, C> {
    controller: &'a mut GeneticController<C>,
}

impl<C: Candidate> Iterator for Generations<'_, C> {
    type Item = (u64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.controller.iterations += 1;
        self.controller.breed();
        Some((
            self.controller.iterations,
            self.controller.best().value(),
        ))
    }
}
