use std::ops::Add;

/// Running results of folding a combiner over a sequence.
///
/// The first value is the first element unchanged. Each later value is
/// `combine(previous, element)`. The combiner is called exactly once per
/// element after the first, in sequence order, and only when the value is
/// pulled.
#[derive(Debug, Clone)]
pub struct Accumulate<I, F>
where
    I: Iterator,
{
    iter: I,
    combine: F,
    total: Option<I::Item>,
}

impl<I, F> Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    pub fn new(iter: I, combine: F) -> Self {
        Accumulate {
            iter,
            combine,
            total: None,
        }
    }
}

fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Running sums.
pub fn accumulate<I>(iter: I) -> Accumulate<I::IntoIter, fn(I::Item, I::Item) -> I::Item>
where
    I: IntoIterator,
    I::Item: Add<Output = I::Item> + Clone,
{
    let add: fn(I::Item, I::Item) -> I::Item = add::<I::Item>;
    Accumulate::new(iter.into_iter(), add)
}

/// Running results of `combine`.
pub fn accumulate_with<I, F>(iter: I, combine: F) -> Accumulate<I::IntoIter, F>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    Accumulate::new(iter.into_iter(), combine)
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        let total = match self.total.take() {
            Some(total) => (self.combine)(total, item),
            None => item,
        };
        self.total = Some(total.clone());
        Some(total)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_sums() {
        let sums = accumulate(0..10).collect::<Vec<_>>();
        assert_eq!(sums, vec![0, 1, 3, 6, 10, 15, 21, 28, 36, 45]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(accumulate(Vec::<i32>::new()).count(), 0);
    }

    #[test]
    fn test_single_element_unchanged() {
        let mut calls = 0;
        let result = accumulate_with(vec![7], |a, b| {
            calls += 1;
            a + b
        })
        .collect::<Vec<_>>();
        assert_eq!(result, vec![7]);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_min_max_product() {
        let s = [2, 8, 9, 5, 7, 0, 3, 4, 1, 6];
        assert_eq!(
            accumulate_with(s, std::cmp::min).collect::<Vec<_>>(),
            vec![2, 2, 2, 2, 2, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            accumulate_with(s, std::cmp::max).collect::<Vec<_>>(),
            vec![2, 8, 9, 9, 9, 9, 9, 9, 9, 9]
        );
        assert_eq!(
            accumulate_with(s, |a, b| a * b).collect::<Vec<_>>(),
            vec![2, 16, 144, 720, 5040, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_combiner_sees_elements_in_order() {
        let mut seen = Vec::new();
        let result = accumulate_with(vec![1, 2, 3, 4], |total, item| {
            seen.push((total, item));
            item
        })
        .collect::<Vec<_>>();
        assert_eq!(result, vec![1, 2, 3, 4]);
        assert_eq!(seen, vec![(1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_strings() {
        let words = accumulate_with(vec!["a", "b", "c"].into_iter().map(String::from), |a, b| {
            a + &b
        });
        assert_eq!(words.collect::<Vec<_>>(), vec!["a", "ab", "abc"]);
    }
}
