/// Concatenation of sources.
///
/// Each source is turned into an iterator only once the previous one is
/// exhausted, and is dropped as soon as it runs dry; an exhausted source is
/// never pulled again.
pub struct Chain<S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    sources: S,
    current: Option<<S::Item as IntoIterator>::IntoIter>,
}

impl<S> Chain<S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    pub fn new(sources: S) -> Self {
        Chain {
            sources,
            current: None,
        }
    }
}

/// Chain the given sources together, in order.
///
/// Because the sources themselves are only pulled one at a time, this
/// works equally well for a list of sources and for a lazily produced
/// sequence of sources.
pub fn chain<S>(sources: S) -> Chain<S::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Chain::new(sources.into_iter())
}

impl<S> Iterator for Chain<S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // if the active source has more, supply that
            if let Some(current) = &mut self.current {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                self.current = None;
            }
            // if not, move on to the next source; none left means we're done
            let source = self.sources.next()?;
            self.current = Some(source.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // the active source is a lower bound; the pending sources are unknown
        let lower = self
            .current
            .as_ref()
            .map_or(0, |current| current.size_hint().0);
        match self.sources.size_hint() {
            (0, Some(0)) => (
                lower,
                self.current
                    .as_ref()
                    .map_or(Some(0), |current| current.size_hint().1),
            ),
            _ => (lower, None),
        }
    }
}

impl<S> std::fmt::Debug for Chain<S>
where
    S: Iterator + std::fmt::Debug,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::IntoIter: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("sources", &self.sources)
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenates() {
        let c = chain(["abc".chars(), "def".chars()]);
        assert_eq!(c.collect::<String>(), "abcdef");
    }

    #[test]
    fn test_no_sources() {
        let c = chain(Vec::<Vec<i32>>::new());
        assert_eq!(c.count(), 0);
    }

    #[test]
    fn test_empty_sources_skipped() {
        let c = chain(vec![vec![], vec![1], vec![], vec![], vec![2, 3]]);
        assert_eq!(c.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_sources_reached_lazily() {
        let mut opened = Vec::new();
        let sources = (0..3).map(|i| {
            opened.push(i);
            vec![i; 2]
        });
        let mut c = chain(sources);
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.next(), Some(1));
        drop(c);
        assert_eq!(opened, vec![0, 1]);
    }

    #[test]
    fn test_size_hint() {
        let mut c = chain(vec![vec![1, 2], vec![3]]);
        assert_eq!(c.size_hint(), (0, None));
        c.next();
        c.next();
        c.next();
        assert_eq!(c.size_hint(), (0, Some(0)));
    }
}
