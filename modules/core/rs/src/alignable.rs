// Instead of making a custom trait here I must support Rust builtin traits for containers
// once they are ready: https://internals.rust-lang.org/t/traits-that-should-be-in-std-but-arent/3002

use derive_more::Constructor;

/// Trait for ordered, indexable sequences that can be aligned.
pub trait Alignable {
    /// The type of individual elements being aligned.
    type Symbol;

    /// Returns true if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the sequence.
    fn len(&self) -> usize;

    /// Returns the element at the given offset.
    fn at(&self, pos: usize) -> &Self::Symbol;

    /// Return the reversed view of the sequence.
    fn reversed(&self) -> Reversed<'_, Self> {
        Reversed::new(self)
    }
}

impl<T> Alignable for [T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T, const N: usize> Alignable for [T; N] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

/// A helper struct that reverses the order of an alignable sequence.
#[derive(Constructor, Debug)]
pub struct Reversed<'a, T: Alignable + ?Sized> {
    base: &'a T,
}

impl<T: Alignable + ?Sized> Clone for Reversed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Alignable + ?Sized> Copy for Reversed<'_, T> {}

impl<T: Alignable + ?Sized> Alignable for Reversed<'_, T> {
    type Symbol = T::Symbol;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.base.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        self.base.at(self.base.len() - pos - 1)
    }
}
