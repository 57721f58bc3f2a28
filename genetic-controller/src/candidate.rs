/// An interface for candidates that can be evolved
/// by a [`GeneticController`].
///
/// The controller never inspects a candidate beyond
/// these two methods, so any representation works.
///
/// [`GeneticController`]: crate::GeneticController
pub trait Candidate {
    /// Returns the candidate's fitness value.
    ///
    /// Whether higher or lower is better is decided
    /// by the controller's [`RankOrder`].
    ///
    /// [`RankOrder`]: crate::RankOrder
    fn value(&self) -> f64;

    /// Combines two candidates and returns a "child" candidate.
    ///
    /// Neither parent should be modified; the offspring
    /// is a new, independently owned value.
    fn breed_with(&self, other: &Self) -> Self;
}
