use thiserror::Error;

/// Returned when a controller is constructed
/// with a population it cannot evolve.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPopulationError {
    /// The population has no candidates.
    #[error("invalid population length: 0")]
    Empty,
    /// Breeding replaces exactly half of the population,
    /// so its length must be even.
    #[error("invalid population length: {0} (must be even)")]
    OddLength(usize),
}

/// Returned when parsing an unknown rank order name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown rank order {0:?}, expected \"ascending\" or \"descending\"")]
pub struct ParseRankOrderError(pub String);
