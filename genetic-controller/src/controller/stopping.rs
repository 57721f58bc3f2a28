//! Ready-made stopping conditions for
//! [`GeneticController::run_until`].
//!
//! Nothing here is applied implicitly; a run stops only
//! when the condition handed to `run_until` says so.
//!
//! # Examples
//! ```
//! # use genetic_controller::{Candidate, GeneticController, RankOrder};
//! # struct Point(f64);
//! # impl Candidate for Point {
//! #     fn value(&self) -> f64 { self.0 }
//! #     fn breed_with(&self, other: &Self) -> Self { Point((self.0 + other.0) / 2.0) }
//! # }
//! use genetic_controller::stopping::{after_iterations, either, when_best_reaches};
//!
//! let population = [1.0, 0.0, 2.0, -1.0].into_iter().map(Point).collect();
//! let mut controller = GeneticController::new(population, RankOrder::Descending).unwrap();
//!
//! // Averaging never beats the initial maximum, so the iteration cap ends the run.
//! let best = controller.run_until(either(when_best_reaches(100.0), after_iterations(20)));
//! assert_eq!(best.value(), 2.0);
//! assert_eq!(controller.iterations(), 20);
//! ```
use super::GeneticController;
use crate::Candidate;

use std::cmp::Ordering;
use std::time::{Duration, Instant};

/// Holds once `n` generations have been bred.
pub fn after_iterations<C: Candidate>(n: u64) -> impl FnMut(&GeneticController<C>) -> bool {
    move |controller: &GeneticController<C>| controller.iterations() >= n
}

/// Holds once the best candidate is at least as good as
/// `threshold` under the controller's rank order.
pub fn when_best_reaches<C: Candidate>(threshold: f64) -> impl FnMut(&GeneticController<C>) -> bool {
    move |controller: &GeneticController<C>| {
        controller
            .order()
            .compare(controller.best().value(), threshold)
            != Ordering::Greater
    }
}

/// Holds once the best candidate is strictly better
/// than `threshold` under the controller's rank order.
pub fn when_best_beyond<C: Candidate>(threshold: f64) -> impl FnMut(&GeneticController<C>) -> bool {
    move |controller: &GeneticController<C>| {
        controller
            .order()
            .is_better(controller.best().value(), threshold)
    }
}

/// Holds once the wall clock passes `deadline`.
pub fn at_deadline<C: Candidate>(deadline: Instant) -> impl FnMut(&GeneticController<C>) -> bool {
    move |_: &GeneticController<C>| Instant::now() >= deadline
}

/// Holds once `budget` has elapsed since this call.
pub fn within<C: Candidate>(budget: Duration) -> impl FnMut(&GeneticController<C>) -> bool {
    at_deadline(Instant::now() + budget)
}

/// Holds when either condition holds. `first`
/// is checked before `second`, which is skipped
/// when `first` holds.
pub fn either<C, A, B>(mut first: A, mut second: B) -> impl FnMut(&GeneticController<C>) -> bool
where
    C: Candidate,
    A: FnMut(&GeneticController<C>) -> bool,
    B: FnMut(&GeneticController<C>) -> bool,
{
    move |controller: &GeneticController<C>| first(controller) || second(controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RankOrder;

    struct Point(f64);

    impl Candidate for Point {
        fn value(&self) -> f64 {
            self.0
        }

        fn breed_with(&self, other: &Self) -> Self {
            Point((self.0 + other.0) / 2.0 + 1.0)
        }
    }

    fn controller(order: RankOrder) -> GeneticController<Point> {
        let population = [1.0, 0.0, 2.0, -1.0].into_iter().map(Point).collect();
        let mut controller = GeneticController::new(population, order).unwrap();
        controller.rank();
        controller
    }

    #[test]
    fn iteration_cap() {
        let mut c = controller(RankOrder::Descending);
        c.run_until(after_iterations(7));
        assert_eq!(c.iterations(), 7);
    }

    #[test]
    fn threshold_respects_order() {
        let c = controller(RankOrder::Descending);
        assert!(when_best_reaches(2.0)(&c));
        assert!(!when_best_beyond(2.0)(&c));
        assert!(when_best_beyond(1.9)(&c));

        let c = controller(RankOrder::Ascending);
        assert!(when_best_reaches(-1.0)(&c));
        assert!(!when_best_beyond(-1.0)(&c));
        assert!(!when_best_reaches(-1.5)(&c));
    }

    #[test]
    fn threshold_stops_run() {
        let mut c = controller(RankOrder::Descending);
        let best = c.run_until(when_best_beyond(25.0)).value();
        assert!(best > 25.0);
    }

    #[test]
    fn expired_deadline_stops_immediately() {
        let mut c = controller(RankOrder::Descending);
        c.run_until(at_deadline(Instant::now()));
        assert_eq!(c.iterations(), 0);
    }

    #[test]
    fn either_short_circuits() {
        let c = controller(RankOrder::Descending);
        let mut second_checked = false;
        let mut condition = either(|_: &GeneticController<Point>| true, |_: &GeneticController<Point>| {
            second_checked = true;
            false
        });
        assert!(condition(&c));
        drop(condition);
        assert!(!second_checked);
    }
}
