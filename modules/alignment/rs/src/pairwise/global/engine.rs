use std::marker::PhantomData;
use std::ops::Sub;

use derive_more::{Display, Error};
use eyre::Result;
use num::ToPrimitive;

use crate::pairwise::alignment::{Aligned, Alignment, Op};
use crate::pairwise::scoring::{Difference, Distance};
use crate::{Alignable, Loss};

use super::memo::{Cell, Memo};
use super::tracer::Tracer;

/// Maximum supported length of each aligned sequence.
pub const MAX_SEQUENCE_LEN: usize = 900;

/// Which of the two aligned sequences.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Display)]
pub enum Sequence {
    #[display("first")]
    First,
    #[display("second")]
    Second,
}

/// A sequence is longer than [`MAX_SEQUENCE_LEN`]. Raised before any computation.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Display, Error)]
#[display(
    "The {sequence} sequence is too long ({len} > {limit} elements); consider splitting it in pieces"
)]
pub struct InputTooLarge {
    pub sequence: Sequence,
    pub len: usize,
    pub limit: usize,
}

impl InputTooLarge {
    fn check(sequence: Sequence, len: usize) -> Result<()> {
        if len > MAX_SEQUENCE_LEN {
            return Err(InputTooLarge {
                sequence,
                len,
                limit: MAX_SEQUENCE_LEN,
            }
            .into());
        }
        Ok(())
    }
}

/// Global (end-to-end) aligner minimizing the total loss under the given distance function.
///
/// The memo table is built bottom-up, from the ends of both sequences towards their starts,
/// and only lives for the duration of one `align` call.
pub struct Engine<T, L, D, Tr = ()>
where
    L: Loss,
    D: Distance<T, L>,
    Tr: Tracer<L>,
{
    distance: D,
    tracer: Tr,
    _phantom: PhantomData<fn(&T) -> L>,
}

impl<T, L, D> Engine<T, L, D>
where
    L: Loss,
    D: Distance<T, L>,
{
    pub fn new(distance: D) -> Self {
        Self {
            distance,
            tracer: (),
            _phantom: Default::default(),
        }
    }
}

impl<T, L, D, Tr> Engine<T, L, D, Tr>
where
    L: Loss,
    D: Distance<T, L>,
    Tr: Tracer<L>,
{
    pub fn with_tracer<NewTr: Tracer<L>>(self, tracer: NewTr) -> Engine<T, L, D, NewTr> {
        Engine {
            distance: self.distance,
            tracer,
            _phantom: Default::default(),
        }
    }

    pub fn with_distance(&mut self, distance: D) {
        self.distance = distance;
    }

    pub fn distance(&self) -> &D {
        &self.distance
    }

    pub fn tracer(&mut self) -> &mut Tr {
        &mut self.tracer
    }

    /// Optimal global alignment of `seq1` and `seq2`.
    ///
    /// Fails only if one of the sequences is longer than [`MAX_SEQUENCE_LEN`]. An alignment
    /// with an infinite loss is a valid result: every path contains a forbidden pairing.
    pub fn align<'a, S1, S2>(&mut self, seq1: &'a S1, seq2: &'a S2) -> Result<Alignment<'a, T, L>>
    where
        T: 'a,
        S1: Alignable<Symbol = T> + ?Sized,
        S2: Alignable<Symbol = T> + ?Sized,
    {
        InputTooLarge::check(Sequence::First, seq1.len())?;
        InputTooLarge::check(Sequence::Second, seq2.len())?;

        let (len1, len2) = (seq1.len(), seq2.len());
        log::debug!("Aligning sequences of length {len1} and {len2}");
        self.tracer.start(len1, len2);

        let mut memo = Memo::new(len1, len2);
        for row in (0..=len1).rev() {
            for col in (0..=len2).rev() {
                let cell = self.settle(seq1, seq2, &memo, row, col);
                self.tracer.cell(row, col, cell.op, cell.loss);
                memo.set(row, col, cell);
            }
        }

        // Right fold keeps the summation order of the memo table: cost + suffix loss
        let result = memo
            .path()
            .into_iter()
            .rev()
            .map(|(row, col, op, cost)| {
                Alignment::single(Aligned::at(op, seq1, row, seq2, col), cost)
            })
            .fold(Alignment::identity(), |suffix, step| step.combine(suffix));
        debug_assert!(result.loss().cmp_loss(&memo.loss(0, 0)).is_eq());

        self.tracer.finish(*result.loss());
        Ok(result)
    }

    /// Best move from the cell (`row`, `col`). All cells reachable from it must be settled.
    fn settle<S1, S2>(
        &mut self,
        seq1: &S1,
        seq2: &S2,
        memo: &Memo<L>,
        row: usize,
        col: usize,
    ) -> Cell<L>
    where
        S1: Alignable<Symbol = T> + ?Sized,
        S2: Alignable<Symbol = T> + ?Sized,
    {
        let (len1, len2) = (seq1.len(), seq2.len());

        // Candidates are evaluated in priority order and replaced only by strictly better ones
        let mut best: Option<Cell<L>> = None;
        for op in Op::PRIORITY {
            let (nrow, ncol) = op.next(row, col);
            if nrow > len1 || ncol > len2 {
                continue;
            }

            let pair = Aligned::at(op, seq1, row, seq2, col);
            let cost = self.distance.distance(pair.first(), pair.second());
            if cost.is_none() {
                self.tracer.forbidden(row, col, op);
            }

            let candidate = Cell {
                loss: cost.unwrap_or_else(L::infinity) + memo.loss(nrow, ncol),
                op: Some(op),
                cost,
            };
            best = match best {
                Some(current) if !candidate.is_better_than(&current) => Some(current),
                _ => Some(candidate),
            };
        }
        best.unwrap_or_else(Cell::terminal)
    }
}

/// Aligns numeric sequences by absolute difference with skips forbidden.
pub fn align<'a, T, S1, S2>(seq1: &'a S1, seq2: &'a S2) -> Result<Alignment<'a, T, f64>>
where
    T: ToPrimitive + PartialOrd + Sub<Output = T> + Copy + 'a,
    S1: Alignable<Symbol = T> + ?Sized,
    S2: Alignable<Symbol = T> + ?Sized,
{
    align_with(seq1, seq2, Difference::default())
}

/// Aligns two sequences with a custom distance function.
pub fn align_with<'a, T, L, D, S1, S2>(
    seq1: &'a S1,
    seq2: &'a S2,
    distance: D,
) -> Result<Alignment<'a, T, L>>
where
    T: 'a,
    L: Loss,
    D: Distance<T, L>,
    S1: Alignable<Symbol = T> + ?Sized,
    S2: Alignable<Symbol = T> + ?Sized,
{
    Engine::new(distance).align(seq1, seq2)
}
