use std::ops::Sub;

use derive_getters::Getters;
use eyre::{Result, ensure};
use num::{NumCast, ToPrimitive};

use crate::pairwise::alignment::Item;

use super::{Distance, Loss};

/// Absolute difference between numeric elements, `|a - b|`.
///
/// Skips cost a fixed penalty, set independently for each side. By default both penalties are
/// infinite, i.e. every element must be matched. Elements that can't be represented as a loss
/// value are never paired.
#[derive(Copy, Clone, PartialEq, Debug, Getters)]
pub struct Difference<L: Loss> {
    /// Penalty for skipping an element of the second sequence (the first one contributes nothing)
    skip_first: L,
    /// Penalty for skipping an element of the first sequence (the second one contributes nothing)
    skip_second: L,
}

impl<L: Loss> Default for Difference<L> {
    fn default() -> Self {
        Difference {
            skip_first: L::infinity(),
            skip_second: L::infinity(),
        }
    }
}

impl<L: Loss> Difference<L> {
    pub fn new() -> Self {
        Self::default()
    }

    fn validate(penalty: L) -> Result<L> {
        ensure!(
            !penalty.is_nan() && penalty >= L::zero(),
            "Skip penalty must be a non-negative number, got {penalty:?}"
        );
        Ok(penalty)
    }

    pub fn set_skip_first(&mut self, penalty: L) -> Result<&mut Self> {
        self.skip_first = Self::validate(penalty)?;
        Ok(self)
    }

    pub fn set_skip_second(&mut self, penalty: L) -> Result<&mut Self> {
        self.skip_second = Self::validate(penalty)?;
        Ok(self)
    }

    /// Same penalty for both sides.
    pub fn set_skip(&mut self, penalty: L) -> Result<&mut Self> {
        self.set_skip_first(penalty)?.set_skip_second(penalty)
    }
}

impl<T, L> Distance<T, L> for Difference<L>
where
    T: ToPrimitive + PartialOrd + Sub<Output = T> + Copy,
    L: Loss,
{
    #[inline(always)]
    fn distance(&self, first: Option<Item<'_, T>>, second: Option<Item<'_, T>>) -> Option<L> {
        match (first, second) {
            (Some(a), Some(b)) => {
                // Subtract in the element type, large integers don't survive a float cast
                let (a, b) = (*a.value, *b.value);
                let diff = if a >= b { a - b } else { b - a };
                diff.to_f64().and_then(NumCast::from)
            }
            (None, Some(_)) => Some(self.skip_first),
            (Some(_), None) => Some(self.skip_second),
            (None, None) => None,
        }
    }
}
