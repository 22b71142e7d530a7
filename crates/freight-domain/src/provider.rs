//! Distance lookup collaborator

/// Road distance oracle between two catalog cities.
///
/// Implementations must be symmetric and side-effect free. `None` means the
/// pair is unknown, and such a pair is never treated as a match.
pub trait DistanceProvider {
    /// Distance in km between `from` and `to`
    fn distance(&self, from: &str, to: &str) -> Option<f64>;
}

impl<F> DistanceProvider for F
where
    F: Fn(&str, &str) -> Option<f64>,
{
    fn distance(&self, from: &str, to: &str) -> Option<f64> {
        self(from, to)
    }
}
