use crate::args::RangeArgs;
use crate::error;

/// A number an arithmetic sequence can run over.
pub trait RangeNumber: Copy + PartialOrd + num_traits::Num {
    /// Add `step`, or `None` if the result doesn't fit.
    fn checked_step(self, step: Self) -> Option<Self>;

    /// How many values lie in `[start, stop)` going by `step`, if that can be
    /// computed exactly.
    fn steps_between(start: Self, stop: Self, step: Self) -> Option<usize>;

    /// Size hint for counting from `start` by `step` until the value no
    /// longer fits.
    fn steps_until_overflow(start: Self, step: Self) -> (usize, Option<usize>);
}

macro_rules! range_number_integer {
    ($($t:ty),*) => {
        $(
            impl RangeNumber for $t {
                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }

                fn steps_between(start: Self, stop: Self, step: Self) -> Option<usize> {
                    let start = i128::try_from(start).ok()?;
                    let stop = i128::try_from(stop).ok()?;
                    let step = i128::try_from(step).ok()?;
                    let distance = stop.checked_sub(start)?;
                    if (step > 0 && distance <= 0) || (step < 0 && distance >= 0) {
                        return Some(0);
                    }
                    // ceiling of distance / step; both have the same sign
                    let count = distance.checked_add(step - step.signum())? / step;
                    usize::try_from(count).ok()
                }

                fn steps_until_overflow(start: Self, step: Self) -> (usize, Option<usize>) {
                    if step == 0 {
                        return (usize::MAX, None);
                    }
                    let limit = if step > 0 { <$t>::MAX } else { <$t>::MIN };
                    let exact = || -> Option<usize> {
                        let start = i128::try_from(start).ok()?;
                        let step = i128::try_from(step).ok()?;
                        let limit = i128::try_from(limit).ok()?;
                        // `start` itself plus every whole step that still fits
                        let count = (limit.checked_sub(start)? / step).checked_add(1)?;
                        usize::try_from(count).ok()
                    };
                    match exact() {
                        Some(n) => (n, Some(n)),
                        None => (0, None),
                    }
                }
            }
        )*
    };
}

macro_rules! range_number_float {
    ($($t:ty),*) => {
        $(
            impl RangeNumber for $t {
                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }

                fn steps_between(_start: Self, _stop: Self, _step: Self) -> Option<usize> {
                    None
                }

                // reals saturate at infinity instead of overflowing
                fn steps_until_overflow(_start: Self, _step: Self) -> (usize, Option<usize>) {
                    (usize::MAX, None)
                }
            }
        )*
    };
}

range_number_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
range_number_float!(f32, f64);

/// An arithmetic sequence: `start, start + step, ...` up to but not
/// including `stop`.
///
/// With a positive step it runs while the current value is below `stop`,
/// with a negative step while it is above. If `start` already lies beyond
/// `stop` in the direction of `step`, the sequence is empty.
#[derive(Debug, Clone)]
pub struct Range<N> {
    current: Option<N>,
    stop: N,
    step: N,
}

impl<N: RangeNumber> Range<N> {
    /// Construct a range. Fails if `step` is zero.
    pub fn new(start: N, stop: N, step: N) -> error::Result<Self> {
        Ok(Self::from_args(RangeArgs::new(start, stop, step)?))
    }

    /// `start` up to `stop` with a step of one.
    pub fn between(start: N, stop: N) -> Self {
        Range {
            current: Some(start),
            stop,
            step: N::one(),
        }
    }

    pub fn from_args(args: RangeArgs<N>) -> Self {
        Range {
            current: Some(args.start),
            stop: args.stop,
            step: args.step,
        }
    }

    fn in_bounds(&self, current: N) -> bool {
        let zero = N::zero();
        // comparisons with NaN are false, so a NaN anywhere ends the range
        if self.step > zero {
            current < self.stop
        } else if self.step < zero {
            current > self.stop
        } else {
            false
        }
    }
}

/// `0` up to `stop`.
pub fn range<N: RangeNumber>(stop: N) -> Range<N> {
    Range::between(N::zero(), stop)
}

impl<N: RangeNumber> Iterator for Range<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.current?;
        if !self.in_bounds(current) {
            self.current = None;
            return None;
        }
        // overflowing past the numeric range also crosses `stop`
        self.current = current.checked_step(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            None => (0, Some(0)),
            Some(current) => match N::steps_between(current, self.stop, self.step) {
                Some(n) => (n, Some(n)),
                None => (0, None),
            },
        }
    }
}

impl<N: RangeNumber> std::iter::FusedIterator for Range<N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_only() {
        assert_eq!(range(5).collect::<Vec<i64>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_step() {
        let r = Range::new(0, 10, 3).unwrap();
        assert_eq!(r.collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_negative_step() {
        let r = Range::new(5, -5, -3).unwrap();
        assert_eq!(r.collect::<Vec<_>>(), vec![5, 2, -1, -4]);
    }

    #[test]
    fn test_start_beyond_stop() {
        assert_eq!(Range::between(1, 0).count(), 0);
        assert_eq!(Range::new(0, 10, -1).unwrap().count(), 0);
        assert_eq!(range(-3).count(), 0);
    }

    #[test]
    fn test_zero_step_fails() {
        assert!(Range::new(1, 2, 0).is_err());
    }

    #[test]
    fn test_size_hint_is_exact() {
        let r = Range::new(0, 10, 3).unwrap();
        assert_eq!(r.size_hint(), (4, Some(4)));
        let r = Range::new(-10, -100, -50).unwrap();
        assert_eq!(r.size_hint(), (2, Some(2)));
        let mut r = range(2);
        r.next();
        r.next();
        assert_eq!(r.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_overflow_ends_range() {
        let r = Range::new(i8::MAX - 1, i8::MAX, 5).unwrap();
        assert_eq!(r.collect::<Vec<_>>(), vec![i8::MAX - 1]);
        let r = Range::new(120i8, 127, 3).unwrap();
        assert_eq!(r.collect::<Vec<_>>(), vec![120, 123, 126]);
    }

    #[test]
    fn test_reals() {
        let r = Range::new(0.0, 1.0, 0.25).unwrap();
        assert_eq!(r.collect::<Vec<_>>(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_nan_is_empty() {
        assert_eq!(Range::between(0.0, f64::NAN).count(), 0);
    }

    #[test]
    fn test_fresh_cursor_per_construction() {
        let mut a = range(3);
        a.next();
        let b = range(3);
        assert_eq!(b.collect::<Vec<i32>>(), vec![0, 1, 2]);
        assert_eq!(a.collect::<Vec<i32>>(), vec![1, 2]);
    }
}
