use derive_more::Constructor;
use eyre::{Result, ensure};

use crate::Alignable;

use super::op::Op;

/// An element of one of the aligned sequences together with its zero-based offset.
#[derive(Eq, PartialEq, Debug, Hash, Constructor)]
pub struct Item<'a, T> {
    pub offset: usize,
    pub value: &'a T,
}

impl<T> Clone for Item<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Item<'_, T> {}

/// A single aligned pair. `None` marks the side that contributed nothing (a skip).
/// Guaranteed to hold at least one element.
#[derive(Eq, PartialEq, Debug, Hash)]
pub struct Aligned<'a, T> {
    first: Option<Item<'a, T>>,
    second: Option<Item<'a, T>>,
}

impl<T> Clone for Aligned<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Aligned<'_, T> {}

impl<'a, T> Aligned<'a, T> {
    pub fn new(first: Option<Item<'a, T>>, second: Option<Item<'a, T>>) -> Result<Self> {
        ensure!(
            first.is_some() || second.is_some(),
            "Aligned pair must contain at least one element"
        );
        Ok(Self { first, second })
    }

    pub fn matched(first: Item<'a, T>, second: Item<'a, T>) -> Self {
        Self {
            first: Some(first),
            second: Some(second),
        }
    }

    pub fn skip_first(second: Item<'a, T>) -> Self {
        Self {
            first: None,
            second: Some(second),
        }
    }

    pub fn skip_second(first: Item<'a, T>) -> Self {
        Self {
            first: Some(first),
            second: None,
        }
    }

    /// Pair created by applying `op` at offsets (`seq1pos`, `seq2pos`).
    /// The offsets consumed by the operation must be valid for the sequences.
    pub fn at<S1, S2>(op: Op, seq1: &'a S1, seq1pos: usize, seq2: &'a S2, seq2pos: usize) -> Self
    where
        S1: Alignable<Symbol = T> + ?Sized,
        S2: Alignable<Symbol = T> + ?Sized,
    {
        let first = move || Item::new(seq1pos, seq1.at(seq1pos));
        let second = move || Item::new(seq2pos, seq2.at(seq2pos));
        match op {
            Op::Match => Self::matched(first(), second()),
            Op::SkipFirst => Self::skip_first(second()),
            Op::SkipSecond => Self::skip_second(first()),
        }
    }

    /// Element contributed by the first sequence, `None` if it was skipped.
    pub fn first(&self) -> Option<Item<'a, T>> {
        self.first
    }

    /// Element contributed by the second sequence, `None` if it was skipped.
    pub fn second(&self) -> Option<Item<'a, T>> {
        self.second
    }

    /// The alignment operation that produced the pair.
    pub fn op(&self) -> Op {
        match (self.first, self.second) {
            (Some(_), Some(_)) => Op::Match,
            (None, _) => Op::SkipFirst,
            (_, None) => Op::SkipSecond,
        }
    }

    pub fn is_match(&self) -> bool {
        self.op() == Op::Match
    }

    pub fn is_skip_first(&self) -> bool {
        self.op() == Op::SkipFirst
    }

    pub fn is_skip_second(&self) -> bool {
        self.op() == Op::SkipSecond
    }

    /// The pair with the two sides swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}
