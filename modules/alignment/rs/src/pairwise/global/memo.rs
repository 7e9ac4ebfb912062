use crate::Loss;
use crate::pairwise::alignment::Op;

/// Best way to align the suffixes starting at a given pair of offsets.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Cell<L: Loss> {
    /// Loss of the optimal alignment of the suffixes
    pub loss: L,
    /// First move of that alignment, `None` when both suffixes are empty
    pub op: Option<Op>,
    /// Cost of the pair created by `op`, `None` if the distance function forbade it
    pub cost: Option<L>,
}

impl<L: Loss> Cell<L> {
    /// Both sequences are exhausted.
    pub fn terminal() -> Self {
        Self {
            loss: L::zero(),
            op: None,
            cost: Some(L::zero()),
        }
    }

    /// Strictly lower loss. Keeps the earlier candidate on ties.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.loss.cmp_loss(&other.loss).is_lt()
    }
}

/// Memo table over all (offset in seq1, offset in seq2) pairs, `(len1 + 1) x (len2 + 1)` cells.
/// Each cell is written exactly once.
#[derive(Clone, Debug)]
pub struct Memo<L: Loss> {
    cols: usize,
    cells: Vec<Option<Cell<L>>>,
}

impl<L: Loss> Memo<L> {
    pub fn new(len1: usize, len2: usize) -> Self {
        let cols = len2 + 1;
        Self {
            cols,
            cells: vec![None; (len1 + 1) * cols],
        }
    }

    #[inline(always)]
    fn index(&self, seq1: usize, seq2: usize) -> usize {
        debug_assert!(seq2 < self.cols && seq1 < self.cells.len() / self.cols);
        seq1 * self.cols + seq2
    }

    #[inline(always)]
    pub fn get(&self, seq1: usize, seq2: usize) -> Option<&Cell<L>> {
        self.cells[self.index(seq1, seq2)].as_ref()
    }

    /// Loss stored in a cell. Must only be called for computed cells.
    #[inline(always)]
    pub fn loss(&self, seq1: usize, seq2: usize) -> L {
        let cell = self.get(seq1, seq2);
        debug_assert!(cell.is_some(), "({seq1}, {seq2}) is read before it was computed");
        cell.map_or(L::infinity(), |x| x.loss)
    }

    #[inline(always)]
    pub fn set(&mut self, seq1: usize, seq2: usize, cell: Cell<L>) {
        let index = self.index(seq1, seq2);
        debug_assert!(self.cells[index].is_none(), "({seq1}, {seq2}) is computed twice");
        self.cells[index] = Some(cell);
    }

    /// Moves of the optimal path from (0, 0) to the terminal cell, with their costs.
    pub fn path(&self) -> Vec<(usize, usize, Op, Option<L>)> {
        let rows = self.cells.len() / self.cols;
        let mut path = Vec::with_capacity(rows + self.cols);

        let (mut seq1, mut seq2) = (0, 0);
        while let Some(Cell {
            op: Some(op), cost, ..
        }) = self.get(seq1, seq2)
        {
            path.push((seq1, seq2, *op, *cost));
            op.apply(&mut seq1, &mut seq2);
        }
        debug_assert_eq!((seq1 + 1, seq2 + 1), (rows, self.cols));
        path
    }
}
