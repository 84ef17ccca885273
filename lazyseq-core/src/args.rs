//! Argument resolution and validation.
//!
//! The primitives take their numeric parameters positionally, with the
//! meaning of each position depending on how many were supplied. Resolution
//! happens here, eagerly, before any iterator exists, so a malformed call
//! never produces a sequence.

use crate::error::{Error, Result};
use crate::range::RangeNumber;
use crate::value::Value;

/// Resolved `start`, `stop` and `step` of an arithmetic sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeArgs<N> {
    pub start: N,
    pub stop: N,
    pub step: N,
}

impl<N: RangeNumber> RangeArgs<N> {
    pub fn new(start: N, stop: N, step: N) -> Result<Self> {
        if step.is_zero() {
            return Err(Error::zero_step());
        }
        Ok(RangeArgs { start, stop, step })
    }
}

/// Range arguments resolved from untyped values.
///
/// If every argument is an integer the range runs over integers, otherwise
/// over reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberRangeArgs {
    Integer(RangeArgs<i64>),
    Double(RangeArgs<f64>),
}

impl NumberRangeArgs {
    /// Resolve `(stop)`, `(start, stop)` or `(start, stop, step)`.
    ///
    /// Each supplied argument is first checked under the name of its
    /// position, so `range("spam")` complains about `start`, even though a
    /// lone argument ends up meaning `stop`.
    pub fn from_values(args: &[Value]) -> Result<Self> {
        let args = supplied(args);
        check_arity("range", args, 3)?;
        let absent = Value::Absent;
        let start = args.first().unwrap_or(&absent);
        number("start", start)?;
        if let Some(stop) = args.get(1) {
            number("stop", stop)?;
        }
        if let Some(step) = args.get(2) {
            number("step", step)?;
        }
        let zero = Value::Integer(0);
        let one = Value::Integer(1);
        let (start, stop, step) = match args {
            [] | [_] => (&zero, start, &one),
            [start, stop] => (start, stop, &one),
            [start, stop, step, ..] => (start, stop, step),
        };
        numbers(start, stop, step)
    }
}

fn numbers(start: &Value, stop: &Value, step: &Value) -> Result<NumberRangeArgs> {
    match (start, stop, step) {
        (Value::Integer(start), Value::Integer(stop), Value::Integer(step)) => Ok(
            NumberRangeArgs::Integer(RangeArgs::new(*start, *stop, *step)?),
        ),
        _ => {
            // every argument has been checked to be a number already
            let real = |value: &Value| value.to_f64().unwrap_or(f64::NAN);
            Ok(NumberRangeArgs::Double(RangeArgs::new(
                real(start),
                real(stop),
                real(step),
            )?))
        }
    }
}

/// Resolved `start` and `step` of an unbounded counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberCountArgs {
    Integer { start: i64, step: i64 },
    Double { start: f64, step: f64 },
}

impl NumberCountArgs {
    /// Resolve `()`, `(start)` or `(start, step)`. A zero step is allowed; the
    /// counter then repeats `start`.
    pub fn from_values(args: &[Value]) -> Result<Self> {
        let args = supplied(args);
        check_arity("count", args, 2)?;
        let (zero, one) = (Value::Integer(0), Value::Integer(1));
        let start = args.first().unwrap_or(&zero);
        let step = args.get(1).unwrap_or(&one);
        number("start", start)?;
        number("step", step)?;
        match (start, step) {
            (Value::Integer(start), Value::Integer(step)) => Ok(NumberCountArgs::Integer {
                start: *start,
                step: *step,
            }),
            _ => Ok(NumberCountArgs::Double {
                start: start.to_f64().unwrap_or(f64::NAN),
                step: step.to_f64().unwrap_or(f64::NAN),
            }),
        }
    }
}

/// Resolved bounds of a slice view.
///
/// `stop` is `None` when there is no upper limit. `step` is at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliceArgs {
    start: usize,
    stop: Option<usize>,
    step: usize,
}

impl Default for SliceArgs {
    fn default() -> Self {
        SliceArgs {
            start: 0,
            stop: None,
            step: 1,
        }
    }
}

impl SliceArgs {
    pub fn new(start: usize, stop: Option<usize>, step: usize) -> Result<Self> {
        if step == 0 {
            return Err(Error::zero_step());
        }
        Ok(SliceArgs { start, stop, step })
    }

    /// The first `stop` elements.
    pub fn stop(stop: usize) -> Self {
        SliceArgs {
            stop: Some(stop),
            ..Default::default()
        }
    }

    /// Elements from `start` up to, not including, `stop`.
    pub fn between(start: usize, stop: usize) -> Self {
        SliceArgs {
            start,
            stop: Some(stop),
            step: 1,
        }
    }

    pub fn start_index(&self) -> usize {
        self.start
    }

    pub fn stop_index(&self) -> Option<usize> {
        self.stop
    }

    pub fn step_size(&self) -> usize {
        self.step
    }

    /// Resolve `()`, `(stop)`, `(start, stop)` or `(start, stop, step)`.
    ///
    /// `null` is accepted for any of them and means the default: start at
    /// zero, no upper limit, a step of one. Positive infinity is also
    /// accepted as an unbounded `stop`.
    pub fn from_values(args: &[Value]) -> Result<Self> {
        let args = supplied(args);
        check_arity("islice", args, 3)?;
        let (start, stop, step) = match args {
            [] => (None, None, None),
            [stop] => (None, Some(stop), None),
            [start, stop] => (Some(start), Some(stop), None),
            [start, stop, step, ..] => (Some(start), Some(stop), Some(step)),
        };
        let start = match start {
            Some(start) => bound("start", start)?.unwrap_or(0),
            None => 0,
        };
        let stop = match stop {
            Some(stop) => bound("stop", stop)?,
            None => None,
        };
        let step = match step {
            Some(step) => slice_step(step)?,
            None => 1,
        };
        SliceArgs::new(start, stop, step)
    }
}

// trailing absent arguments were simply not passed
fn supplied(args: &[Value]) -> &[Value] {
    let len = args
        .iter()
        .rposition(|value| !value.is_absent())
        .map_or(0, |i| i + 1);
    &args[..len]
}

fn check_arity(name: &str, args: &[Value], max: usize) -> Result<()> {
    if args.len() > max {
        return Err(Error::Type(format!(
            "{name} expected at most {max} arguments, got {}",
            args.len()
        )));
    }
    Ok(())
}

fn number(name: &str, value: &Value) -> Result<()> {
    if value.is_number() {
        Ok(())
    } else {
        Err(Error::not_a_number(name))
    }
}

// `None` for a missing or unbounded bound
fn bound(name: &str, value: &Value) -> Result<Option<usize>> {
    if matches!(value, Value::Null | Value::Absent) {
        return Ok(None);
    }
    number(name, value)?;
    if let Some(d) = value.to_f64() {
        if d == f64::INFINITY && name == "stop" {
            return Ok(None);
        }
    }
    if !value.is_integer() {
        return Err(Error::not_an_integer(name));
    }
    if value.to_f64().is_some_and(|d| d < 0.0) {
        return Err(Error::not_positive(name));
    }
    Ok(Some(to_index(value)))
}

fn slice_step(value: &Value) -> Result<usize> {
    if matches!(value, Value::Null | Value::Absent) {
        return Ok(1);
    }
    number("step", value)?;
    if !value.is_integer() {
        return Err(Error::not_an_integer("step"));
    }
    match value.to_f64() {
        Some(d) if d == 0.0 => Err(Error::zero_step()),
        Some(d) if d < 0.0 => Err(Error::not_positive("step")),
        _ => Ok(to_index(value)),
    }
}

// non-negative integral value; anything too large saturates
fn to_index(value: &Value) -> usize {
    value
        .to_i64()
        .and_then(|i| usize::try_from(i).ok())
        .unwrap_or(usize::MAX)
}
