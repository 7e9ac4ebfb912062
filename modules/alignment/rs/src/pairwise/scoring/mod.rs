pub use difference::Difference;

pub use crate::Loss;
use crate::pairwise::alignment::Item;

mod difference;

/// Cost of putting two elements, or an element and a skip (`None`), into one aligned pair.
///
/// Returns `None` if the pairing is forbidden. Aligners treat a forbidden pairing as an infinite
/// cost and drop the pair from the alignment. Costs must be non-negative; infinity is allowed.
/// The two arguments are never `None` simultaneously.
pub trait Distance<T, L: Loss> {
    fn distance(&self, first: Option<Item<'_, T>>, second: Option<Item<'_, T>>) -> Option<L>;
}

/// Any closure over element values (offsets are not visible) is a distance.
impl<T, L, F> Distance<T, L> for F
where
    L: Loss,
    F: Fn(Option<&T>, Option<&T>) -> Option<L>,
{
    #[inline(always)]
    fn distance(&self, first: Option<Item<'_, T>>, second: Option<Item<'_, T>>) -> Option<L> {
        self(first.map(|x| x.value), second.map(|x| x.value))
    }
}
