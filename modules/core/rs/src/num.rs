use std::cmp::Ordering;
use std::fmt::Debug;

/// T values are float numbers that can be accumulated as an alignment loss.
/// Infinity is a legal loss and marks paths that must never be taken.
pub trait Loss: ::num::Float + Debug + Default {
    /// Total order over losses, ascending. NaN is ranked after every other value.
    fn cmp_loss(&self, other: &Self) -> Ordering {
        match self.partial_cmp(other) {
            Some(ordering) => ordering,
            None => self.is_nan().cmp(&other.is_nan()),
        }
    }
}

impl<T: ::num::Float + Debug + Default> Loss for T {}
