use std::ops::Add;

use crate::accumulate::Accumulate;
use crate::args::SliceArgs;
use crate::islice::ISlice;
use crate::until_error::UntilError;

/// The primitives as iterator adapters.
///
/// Implemented for every iterator, so they compose in method-call position:
/// `range(100).islice(args).accumulate()`.
pub trait SequenceExt: Iterator + Sized {
    /// See [`crate::islice()`].
    fn islice(self, args: SliceArgs) -> ISlice<Self> {
        ISlice::new(self, args)
    }

    /// Running sums.
    fn accumulate(self) -> Accumulate<Self, fn(Self::Item, Self::Item) -> Self::Item>
    where
        Self::Item: Add<Output = Self::Item> + Clone,
    {
        crate::accumulate::accumulate(self)
    }

    /// Running results of `combine`.
    fn accumulate_with<F>(self, combine: F) -> Accumulate<Self, F>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        Accumulate::new(self, combine)
    }

    /// Yield the first error, then stop.
    fn until_error(self) -> UntilError<Self> {
        UntilError::new(self)
    }
}

impl<I: Iterator> SequenceExt for I {}
