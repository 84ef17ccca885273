use crate::range::RangeNumber;

/// An unbounded counter: `start, start + step, ...`.
///
/// It only ends if the next value no longer fits the number type. A zero
/// step repeats `start` forever.
#[derive(Debug, Clone)]
pub struct Count<N> {
    current: Option<N>,
    step: N,
}

impl<N: RangeNumber> Count<N> {
    pub fn new(start: N, step: N) -> Self {
        Count {
            current: Some(start),
            step,
        }
    }
}

/// Count up from zero by one.
pub fn count<N: RangeNumber>() -> Count<N> {
    Count::new(N::zero(), N::one())
}

impl<N: RangeNumber> Iterator for Count<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.current?;
        self.current = current.checked_step(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(current) => N::steps_until_overflow(current, self.step),
            None => (0, Some(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        let c = count::<i64>();
        assert_eq!(c.take(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_count_step() {
        let c = Count::new(10, -5);
        assert_eq!(c.take(3).collect::<Vec<_>>(), vec![10, 5, 0]);
    }

    #[test]
    fn test_zero_step_repeats() {
        let c = Count::new(7, 0);
        assert_eq!(c.take(3).collect::<Vec<_>>(), vec![7, 7, 7]);
    }

    #[test]
    fn test_overflow_ends() {
        let c = Count::new(i8::MAX - 1, 1);
        assert_eq!(c.collect::<Vec<_>>(), vec![i8::MAX - 1, i8::MAX]);
        let c = Count::new(i8::MIN + 2, -1);
        assert_eq!(c.collect::<Vec<_>>(), vec![-126, -127, -128]);
    }

    #[test]
    fn test_size_hint_never_overstates() {
        let mut c = Count::new(i8::MAX - 1, 1);
        assert_eq!(c.size_hint(), (2, Some(2)));
        c.next();
        assert_eq!(c.size_hint(), (1, Some(1)));
        c.next();
        assert_eq!(c.size_hint(), (0, Some(0)));
        assert_eq!(Count::new(250u8, 3).size_hint(), (2, Some(2)));
        assert_eq!(Count::new(0i8, -50).size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_size_hint_without_end() {
        assert_eq!(Count::new(7, 0).size_hint(), (usize::MAX, None));
        assert_eq!(Count::new(0.0, 1.0).size_hint(), (usize::MAX, None));
        // the distance to the end doesn't fit an i128
        assert_eq!(Count::new(i128::MIN, 1).size_hint(), (0, None));
    }
}
