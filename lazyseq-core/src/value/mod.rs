//! Dynamic values.
//!
//! The primitives can be driven with untyped values, the way a dynamically
//! typed host would call them. Arguments then need runtime checks: is this
//! a number, an integer, something that can be iterated?
mod iter;
mod op;
mod value_core;

pub use iter::ValueIter;
pub use op::{op_add, op_max, op_min, op_multiply};
pub use value_core::Value;
