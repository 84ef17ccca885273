use crate::args::SliceArgs;

/// A window over an underlying sequence, selected by position and stride.
///
/// The underlying sequence is advanced for every element the slice looks
/// at, whether it ends up being yielded or skipped. To keep using the
/// underlying sequence afterwards, lend it with [`Iterator::by_ref`]: it
/// then continues right after the last element the slice consumed.
///
/// ```
/// use lazyseq_core::{islice, range, SliceArgs};
///
/// let mut numbers = range(10);
/// let head = islice(numbers.by_ref(), SliceArgs::stop(3)).collect::<Vec<i32>>();
/// assert_eq!(head, vec![0, 1, 2]);
/// assert_eq!(numbers.collect::<Vec<_>>(), vec![3, 4, 5, 6, 7, 8, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct ISlice<I> {
    iter: I,
    // how many elements have been drawn from `iter`
    position: usize,
    // position of the next element to yield, never beyond `stop`
    next_index: usize,
    stop: Option<usize>,
    step: usize,
    done: bool,
}

impl<I: Iterator> ISlice<I> {
    pub fn new(iter: I, args: SliceArgs) -> Self {
        ISlice {
            iter,
            position: 0,
            next_index: args.start_index(),
            stop: args.stop_index(),
            step: args.step_size(),
            done: false,
        }
    }

    fn finish(&mut self) -> Option<I::Item> {
        self.done = true;
        None
    }
}

/// Slice `iter` according to `args`.
pub fn islice<I: IntoIterator>(iter: I, args: SliceArgs) -> ISlice<I::IntoIter> {
    ISlice::new(iter.into_iter(), args)
}

impl<I: Iterator> Iterator for ISlice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        // skip ahead to the next selected position
        while self.position < self.next_index {
            if self.iter.next().is_none() {
                return self.finish();
            }
            self.position += 1;
        }
        if self.stop.is_some_and(|stop| self.position >= stop) {
            return self.finish();
        }
        let Some(item) = self.iter.next() else {
            return self.finish();
        };
        self.position += 1;
        // skipping for the following element never goes past `stop`
        let next_index = self.next_index.saturating_add(self.step);
        self.next_index = match self.stop {
            Some(stop) if next_index > stop => stop,
            _ => next_index,
        };
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (_, upper) = self.iter.size_hint();
        let available = upper.map(|upper| self.position.saturating_add(upper));
        let end = match (self.stop, available) {
            (Some(stop), Some(available)) => Some(stop.min(available)),
            (Some(stop), None) => Some(stop),
            (None, available) => available,
        };
        let remaining = end.map(|end| {
            if end > self.next_index {
                (end - self.next_index).div_ceil(self.step)
            } else {
                0
            }
        });
        (0, remaining)
    }
}

impl<I: Iterator> std::iter::FusedIterator for ISlice<I> {}
