/// Stop after the first error.
///
/// A sequence that hits an error partway through yields that error once and
/// then nothing more, the way a failing generator can't be resumed.
#[derive(Debug, Clone)]
pub struct UntilError<I> {
    iter: I,
    failed: bool,
}

impl<I> UntilError<I> {
    pub fn new(iter: I) -> Self {
        UntilError {
            iter,
            failed: false,
        }
    }
}

impl<I, T, E> Iterator for UntilError<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.iter.next()?;
        if item.is_err() {
            self.failed = true;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            // an error may cut things short
            (0, self.iter.size_hint().1)
        }
    }
}
