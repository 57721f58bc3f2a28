//! A generational optimization loop over user-defined candidates.
//!
//! A [`GeneticController`] ranks a population of [`Candidate`]s by
//! their fitness value, keeps the better half, replaces the worse half
//! with offspring of adjacent-ranked pairs, and repeats until a
//! caller-supplied condition holds. How a candidate scores itself and
//! how two candidates produce offspring is entirely up to the
//! implementor of the `Candidate` trait.
//!
//! Whether lower or higher values are better is chosen per controller
//! through [`RankOrder`].
//!
//! Generational snapshots can be recorded with the
//! [`logging::EvolutionLogger`], and the [`stopping`] module
//! supplies common stopping conditions.
//!
//! # Example usage: maximizing a value
//! ```
//! use genetic_controller::{Candidate, GeneticController, RankOrder};
//!
//! #[derive(Debug)]
//! struct Guess(f64);
//!
//! impl Candidate for Guess {
//!     fn value(&self) -> f64 {
//!         self.0
//!     }
//!
//!     // Children average their parents, plus a little.
//!     fn breed_with(&self, other: &Self) -> Self {
//!         Guess((self.0 + other.0) / 2.0 + 1.0)
//!     }
//! }
//!
//! fn main() {
//!     let population = vec![Guess(1.0), Guess(0.0), Guess(2.0), Guess(-1.0)];
//!
//!     let mut controller = match GeneticController::new(population, RankOrder::Descending) {
//!         Ok(controller) => controller,
//!         Err(e) => {
//!             eprintln!("{}", e);
//!             return;
//!         }
//!     };
//!
//!     let best = controller.run_until(|c| c.best().value() > 25.0);
//!     println!("Found {:?}", best);
//!     println!("Generations bred: {}", controller.iterations());
//! }
//! ```

mod candidate;
mod controller;

pub use candidate::*;
pub use controller::*;
