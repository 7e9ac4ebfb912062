use std::cmp::Ordering;

use derive_getters::{Dissolve, Getters};

use crate::Loss;
use crate::pairwise::scoring::Distance;

use super::aligned::{Aligned, Item};

/// A global alignment between two sequences: the aligned pairs and their cumulative loss.
///
/// `loss` is the sum of the costs of all pairs. Pairs rejected by the distance function are
/// not stored, but their infinite cost is carried by the loss.
#[derive(PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<'a, T, L: Loss> {
    pairs: Vec<Aligned<'a, T>>,
    loss: L,
}

impl<T, L: Loss> Clone for Alignment<'_, T, L> {
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
            loss: self.loss,
        }
    }
}

impl<T, L: Loss> Default for Alignment<'_, T, L> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<'a, T, L: Loss> Alignment<'a, T, L> {
    /// The empty alignment with zero loss, the identity element of `combine`.
    pub fn identity() -> Self {
        Self {
            pairs: Vec::new(),
            loss: L::zero(),
        }
    }

    /// The empty alignment with infinite loss, produced by a forbidden pairing.
    pub fn forbidden() -> Self {
        Self {
            pairs: Vec::new(),
            loss: L::infinity(),
        }
    }

    /// Alignment of a single pair with a known cost. `None` marks a forbidden pairing.
    pub fn single(pair: Aligned<'a, T>, cost: Option<L>) -> Self {
        match cost {
            Some(loss) => Self {
                pairs: vec![pair],
                loss,
            },
            None => Self::forbidden(),
        }
    }

    /// Alignment of a single pair scored by the given distance function.
    pub fn from_pair<D: Distance<T, L> + ?Sized>(pair: Aligned<'a, T>, distance: &D) -> Self {
        let cost = distance.distance(pair.first(), pair.second());
        Self::single(pair, cost)
    }

    /// Concatenates the pairs (self first) and sums the losses.
    pub fn combine(mut self, other: Self) -> Self {
        self.pairs.extend(other.pairs);
        self.loss = self.loss + other.loss;
        self
    }

    /// Orders alignments by loss alone, ascending.
    pub fn cmp_by_loss(&self, other: &Self) -> Ordering {
        self.loss.cmp_loss(&other.loss)
    }

    /// Strictly lower loss. Equal losses are never better, the earlier candidate is kept.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.cmp_by_loss(other) == Ordering::Less
    }

    /// Returns `false` if the loss is infinite, i.e. every path went through a forbidden
    /// pairing or an infinite cost.
    pub fn is_feasible(&self) -> bool {
        self.loss.is_finite()
    }

    /// Number of stored aligned pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs where both sequences contributed an element.
    pub fn matches(&self) -> impl Iterator<Item = (Item<'a, T>, Item<'a, T>)> + '_ {
        self.pairs
            .iter()
            .filter_map(|pair| Some((pair.first()?, pair.second()?)))
    }

    /// The same alignment with the roles of the sequences swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            pairs: self.pairs.iter().map(Aligned::mirrored).collect(),
            loss: self.loss,
        }
    }
}
