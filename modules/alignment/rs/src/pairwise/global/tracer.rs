use crate::Loss;
use crate::pairwise::alignment::Op;

// The global aligner fills the memo table cell-by-cell and
// notifies the tracer about each settled cell

#[allow(unused_variables)]
pub trait Tracer<L: Loss> {
    /// Called once the input passed all checks, before the first cell is computed.
    fn start(&mut self, len1: usize, len2: usize) {}

    /// A candidate move from the cell was rejected by the distance function.
    fn forbidden(&mut self, seq1: usize, seq2: usize, op: Op) {}

    /// The cell got its final value. `op` is `None` only for the terminal cell.
    fn cell(&mut self, seq1: usize, seq2: usize, op: Option<Op>, loss: L) {}

    /// Called with the loss of the returned alignment.
    fn finish(&mut self, loss: L) {}
}

impl<L: Loss> Tracer<L> for () {}

impl<L: Loss, T: Tracer<L> + ?Sized> Tracer<L> for &mut T {
    #[inline(always)]
    fn start(&mut self, len1: usize, len2: usize) {
        (**self).start(len1, len2);
    }

    #[inline(always)]
    fn forbidden(&mut self, seq1: usize, seq2: usize, op: Op) {
        (**self).forbidden(seq1, seq2, op);
    }

    #[inline(always)]
    fn cell(&mut self, seq1: usize, seq2: usize, op: Option<Op>, loss: L) {
        (**self).cell(seq1, seq2, op, loss);
    }

    #[inline(always)]
    fn finish(&mut self, loss: L) {
        (**self).finish(loss);
    }
}

/// Reports the progress of the aligner through the `log` facade.
/// Cells are logged at the trace level, the run summary at the debug level.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub struct LogTracer {
    cells: usize,
    forbidden: usize,
}

impl<L: Loss> Tracer<L> for LogTracer {
    fn start(&mut self, len1: usize, len2: usize) {
        self.cells = 0;
        self.forbidden = 0;
        log::debug!("Global alignment of {len1} x {len2} elements started");
    }

    fn forbidden(&mut self, seq1: usize, seq2: usize, op: Op) {
        self.forbidden += 1;
        log::trace!("({seq1}, {seq2}): {op:?} is forbidden");
    }

    fn cell(&mut self, seq1: usize, seq2: usize, op: Option<Op>, loss: L) {
        self.cells += 1;
        log::trace!("({seq1}, {seq2}) = {loss:?} via {op:?}");
    }

    fn finish(&mut self, loss: L) {
        log::debug!(
            "Global alignment finished with loss {loss:?} ({} cells, {} forbidden moves)",
            self.cells,
            self.forbidden
        );
    }
}
