/// `Op` represents a single move through the alignment grid.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Both sequences contribute an element
    Match,
    /// The first sequence contributes nothing, only the second one advances
    SkipFirst,
    /// The second sequence contributes nothing, only the first one advances
    SkipSecond,
}

impl Op {
    /// All operations in the order they are evaluated by the aligners.
    /// Among equally good candidates the earliest one wins.
    pub const PRIORITY: [Op; 3] = [Op::Match, Op::SkipFirst, Op::SkipSecond];

    /// Applies the operation to the given sequence offsets.
    pub fn apply(&self, seq1: &mut usize, seq2: &mut usize) {
        match self {
            Op::Match => {
                *seq1 += 1;
                *seq2 += 1;
            }
            Op::SkipFirst => *seq2 += 1,
            Op::SkipSecond => *seq1 += 1,
        };
    }

    /// Returns the offsets reached from (`seq1`, `seq2`) after the operation.
    pub fn next(&self, mut seq1: usize, mut seq2: usize) -> (usize, usize) {
        self.apply(&mut seq1, &mut seq2);
        (seq1, seq2)
    }
}
