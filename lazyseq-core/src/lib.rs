//! Lazy sequence primitives.
//!
//! Four generators, each producing values strictly on demand:
//!
//! - [`range()`]: an arithmetic progression.
//! - [`chain()`]: the concatenation of several sources.
//! - [`islice()`]: a window over another sequence by position and stride.
//! - [`accumulate()`]: running results of a combining function.
//!
//! Plus [`count()`], an unbounded counter, handy as a source.
//!
//! The generic versions work with any Rust iterator. The [`dynamic`] module
//! offers the same primitives taking untyped [`Value`] arguments, with
//! overload resolution and the argument checks a dynamically typed caller
//! needs.

mod accumulate;
mod args;
mod chain;
mod count;
pub mod dynamic;
pub mod error;
mod ext;
mod islice;
mod range;
mod until_error;
pub mod value;

pub use accumulate::{accumulate, accumulate_with, Accumulate};
pub use args::{NumberCountArgs, NumberRangeArgs, RangeArgs, SliceArgs};
pub use chain::{chain, Chain};
pub use count::{count, Count};
pub use error::{Error, ErrorKind, Result};
pub use ext::SequenceExt;
pub use islice::{islice, ISlice};
pub use range::{range, Range, RangeNumber};
pub use until_error::UntilError;
pub use value::Value;
