use super::errors::ParseRankOrderError;

use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Direction in which candidates are ranked.
///
/// Each controller owns its own order, so
/// controllers ranking in opposite directions
/// can coexist freely.
///
/// # Examples
/// ```
/// use genetic_controller::RankOrder;
///
/// let order: RankOrder = "ascending".parse().unwrap();
/// assert!(order.is_better(-1.0, 0.0));
/// assert_eq!(order.to_string(), "ascending");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankOrder {
    /// Lower values are better.
    Ascending,
    /// Higher values are better.
    #[default]
    Descending,
}

impl RankOrder {
    /// Compares two fitness values, returning `Less`
    /// if `a` should be ranked before `b`.
    ///
    /// NaN is ranked after every number under both
    /// orders, which keeps the comparison total.
    ///
    /// # Examples
    /// ```
    /// use genetic_controller::RankOrder;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(RankOrder::Descending.compare(2.0, 1.0), Ordering::Less);
    /// assert_eq!(RankOrder::Ascending.compare(2.0, 1.0), Ordering::Greater);
    /// assert_eq!(RankOrder::Descending.compare(f64::NAN, 1.0), Ordering::Greater);
    /// ```
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let natural = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
                match self {
                    RankOrder::Ascending => natural,
                    RankOrder::Descending => natural.reverse(),
                }
            }
        }
    }

    /// Returns `true` if `a` ranks strictly before `b`.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    fn as_str(self) -> &'static str {
        match self {
            RankOrder::Ascending => "ascending",
            RankOrder::Descending => "descending",
        }
    }
}

impl fmt::Display for RankOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankOrder {
    type Err = ParseRankOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" => Ok(RankOrder::Ascending),
            "descending" => Ok(RankOrder::Descending),
            _ => Err(ParseRankOrderError(s.to_string())),
        }
    }
}
