//! The primitives driven by untyped arguments.
//!
//! These resolve and check their arguments the way a dynamically typed host
//! would: how many were passed decides what they mean, and anything of the
//! wrong type or value is rejected before an iterator is handed out.

use std::iter::{Map, Once};

use tracing::debug;

use crate::accumulate::Accumulate;
use crate::args::{NumberCountArgs, NumberRangeArgs, SliceArgs};
use crate::chain::Chain;
use crate::count::Count;
use crate::error;
use crate::islice::ISlice;
use crate::range::Range;
use crate::until_error::UntilError;
use crate::value::{op_add, Value, ValueIter};

/// An arithmetic sequence over integers or reals.
#[derive(Debug, Clone)]
pub enum NumberRange {
    Integer(Range<i64>),
    Double(Range<f64>),
}

impl Iterator for NumberRange {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match self {
            NumberRange::Integer(range) => range.next().map(Value::from),
            NumberRange::Double(range) => range.next().map(Value::from),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            NumberRange::Integer(range) => range.size_hint(),
            NumberRange::Double(range) => range.size_hint(),
        }
    }
}

/// `range(stop)`, `range(start, stop)` or `range(start, stop, step)`.
pub fn range(args: &[Value]) -> error::Result<NumberRange> {
    let args = NumberRangeArgs::from_values(args)?;
    debug!(?args, "range");
    Ok(match args {
        NumberRangeArgs::Integer(args) => NumberRange::Integer(Range::from_args(args)),
        NumberRangeArgs::Double(args) => NumberRange::Double(Range::from_args(args)),
    })
}

/// An unbounded counter over integers or reals.
#[derive(Debug, Clone)]
pub enum NumberCount {
    Integer(Count<i64>),
    Double(Count<f64>),
}

impl Iterator for NumberCount {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match self {
            NumberCount::Integer(count) => count.next().map(Value::from),
            NumberCount::Double(count) => count.next().map(Value::from),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            NumberCount::Integer(count) => count.size_hint(),
            NumberCount::Double(count) => count.size_hint(),
        }
    }
}

/// `count()`, `count(start)` or `count(start, step)`.
pub fn count(args: &[Value]) -> error::Result<NumberCount> {
    let args = NumberCountArgs::from_values(args)?;
    debug!(?args, "count");
    Ok(match args {
        NumberCountArgs::Integer { start, step } => NumberCount::Integer(Count::new(start, step)),
        NumberCountArgs::Double { start, step } => NumberCount::Double(Count::new(start, step)),
    })
}

/// `islice(iter)`, `islice(iter, stop)`, `islice(iter, start, stop)` or
/// `islice(iter, start, stop, step)`.
///
/// The slice advances `iter`; pass `iter.by_ref()` to keep using it.
pub fn islice<I: IntoIterator>(iter: I, args: &[Value]) -> error::Result<ISlice<I::IntoIter>> {
    let args = SliceArgs::from_values(args)?;
    debug!(?args, "islice");
    Ok(ISlice::new(iter.into_iter(), args))
}

/// One source of a chain.
///
/// A source without the sequence capability turns into a single error,
/// which surfaces only when the chain gets to it.
#[derive(Debug, Clone)]
pub enum SourceIter {
    Items(ValueIter),
    Erroring(Once<error::Result<Value>>),
}

impl SourceIter {
    pub fn new(value: Value) -> Self {
        match value.try_iter() {
            Ok(iter) => SourceIter::Items(iter),
            Err(error) => {
                debug!(%value, "chain reached a source that is not iterable");
                SourceIter::Erroring(std::iter::once(Err(error)))
            }
        }
    }
}

impl Iterator for SourceIter {
    type Item = error::Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SourceIter::Items(iter) => iter.next().map(Ok),
            SourceIter::Erroring(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SourceIter::Items(iter) => iter.size_hint(),
            SourceIter::Erroring(iter) => iter.size_hint(),
        }
    }
}

/// A chain of untyped sources. It ends after the first error.
pub type ValueChain<S> = UntilError<Chain<Map<S, fn(Value) -> SourceIter>>>;

fn value_chain<S: Iterator<Item = Value>>(sources: S) -> ValueChain<S> {
    let source_iter: fn(Value) -> SourceIter = SourceIter::new;
    UntilError::new(Chain::new(sources.map(source_iter)))
}

/// `chain(source, ...)`.
///
/// Each source is checked for the sequence capability only once the chain
/// reaches it.
pub fn chain(sources: Vec<Value>) -> ValueChain<std::vec::IntoIter<Value>> {
    debug!(sources = sources.len(), "chain");
    value_chain(sources.into_iter())
}

/// `chain_from_iterable(sources)`: chain the members of a single iterable.
///
/// The outer value has to be iterable right away; its members are checked
/// lazily, as with [`chain`].
pub fn chain_from_iterable(sources: &Value) -> error::Result<ValueChain<ValueIter>> {
    let sources = sources.try_iter()?;
    debug!("chain_from_iterable");
    Ok(value_chain(sources))
}

/// `accumulate(source)`: running sums over an iterable value.
pub fn accumulate(source: &Value) -> error::Result<impl Iterator<Item = error::Result<Value>>> {
    accumulate_with(source, op_add)
}

/// `accumulate(source, combine)`.
pub fn accumulate_with<F>(
    source: &Value,
    combine: F,
) -> error::Result<impl Iterator<Item = error::Result<Value>>>
where
    F: FnMut(Value, Value) -> error::Result<Value>,
{
    let iter = source.try_iter()?;
    debug!(%source, "accumulate");
    Ok(accumulate_values(iter, combine))
}

/// Running results of `combine` over a sequence of values that is already
/// known to be iterable, such as the output of [`range`].
///
/// A failing combiner ends the sequence after yielding its error.
pub fn accumulate_values<I, F>(
    iter: I,
    mut combine: F,
) -> impl Iterator<Item = error::Result<Value>>
where
    I: IntoIterator<Item = Value>,
    F: FnMut(Value, Value) -> error::Result<Value>,
{
    let items = iter.into_iter().map(Ok);
    UntilError::new(Accumulate::new(
        items,
        move |total: error::Result<Value>, item: error::Result<Value>| combine(total?, item?),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn values(iter: impl Iterator<Item = Value>) -> Vec<Value> {
        iter.collect()
    }

    #[test]
    fn test_integer_range() {
        let r = range(&[Value::from(0), Value::from(10), Value::from(3)]).unwrap();
        assert_eq!(
            values(r),
            vec![Value::from(0), Value::from(3), Value::from(6), Value::from(9)]
        );
    }

    #[test]
    fn test_real_range() {
        let r = range(&[Value::from(0.5), Value::from(2)]).unwrap();
        assert_eq!(values(r), vec![Value::from(0.5), Value::from(1.5)]);
    }

    #[test]
    fn test_source_iter_errors_once() {
        let mut source = SourceIter::new(Value::from(2));
        assert_eq!(
            source.next(),
            Some(Err(Error::Type("2 is not iterable".to_string())))
        );
        assert_eq!(source.next(), None);
    }

    #[test]
    fn test_chain_stops_after_error() {
        let sources = vec![Value::from("ab"), Value::from(2), Value::from("cd")];
        let result = chain(sources).collect::<Vec<_>>();
        assert_eq!(
            result,
            vec![
                Ok(Value::from("a")),
                Ok(Value::from("b")),
                Err(Error::Type("2 is not iterable".to_string())),
            ]
        );
    }

    #[test]
    fn test_accumulate_combiner_error_ends() {
        let source = Value::from(vec![Value::from(1), Value::Null, Value::from(2)]);
        let result = accumulate(&source).unwrap().collect::<Vec<_>>();
        assert_eq!(
            result,
            vec![
                Ok(Value::from(1)),
                Err(Error::Type("cannot add 1 and null".to_string())),
            ]
        );
    }

    #[test]
    fn test_count_reals() {
        let c = count(&[Value::from(0.5), Value::from(0.25)]).unwrap();
        assert_eq!(
            c.take(3).collect::<Vec<_>>(),
            vec![Value::from(0.5), Value::from(0.75), Value::from(1.0)]
        );
    }
}
