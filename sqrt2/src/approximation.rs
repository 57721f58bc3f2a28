use genetic_controller::{Candidate, RankOrder};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A guess at the square root of `target`.
///
/// Scored by its squared error when ranked ascending, or by a
/// closeness score in (0, 1] when ranked descending, so either
/// rank order drives the search towards the root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Approximation {
    pub x: f64,
    pub target: f64,
    pub order: RankOrder,
}

impl Approximation {
    /// Returns a guess drawn uniformly from `[0, max(target, 1)]`.
    pub fn random(target: f64, order: RankOrder, rng: &mut impl Rng) -> Approximation {
        Approximation {
            x: rng.gen_range(0.0..=target.max(1.0)),
            target,
            order,
        }
    }

    pub fn error(&self) -> f64 {
        (self.x * self.x - self.target).abs()
    }
}

impl Candidate for Approximation {
    fn value(&self) -> f64 {
        match self.order {
            RankOrder::Ascending => self.error(),
            RankOrder::Descending => 1.0 / (1.0 + self.error()),
        }
    }

    fn breed_with(&self, other: &Self) -> Self {
        // Jitter around the midpoint, proportional to how far
        // apart the parents are so the search narrows as they converge.
        let spread = (self.x - other.x).abs() + f64::EPSILON;
        let jitter = rand::thread_rng().gen_range(-spread..=spread);
        Approximation {
            x: (self.x + other.x) / 2.0 + jitter,
            target: self.target,
            order: self.order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_match_order() {
        let exact = Approximation {
            x: 3.0,
            target: 9.0,
            order: RankOrder::Ascending,
        };
        assert_eq!(exact.value(), 0.0);

        let off = Approximation {
            x: 2.0,
            target: 9.0,
            order: RankOrder::Descending,
        };
        assert_eq!(off.value(), 1.0 / 6.0);
    }

    #[test]
    fn offspring_stay_between_jittered_parents() {
        let a = Approximation {
            x: 1.0,
            target: 2.0,
            order: RankOrder::Ascending,
        };
        let b = Approximation { x: 2.0, ..a.clone() };
        for _ in 0..100 {
            let child = a.breed_with(&b);
            assert!(child.x >= 0.5 - 1e-9 && child.x <= 2.5 + 1e-9);
            assert_eq!(child.target, 2.0);
        }
    }
}
