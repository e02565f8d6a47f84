//! Runtime threshold parsing.
//!
//! Runtime preferences are written as `<H>h<M>m<S>s` (for example
//! `"1h45m0s"`). [`parse_runtime`] converts them to fractional minutes so
//! they can be compared against a movie's whole-minute runtime.

mod parser;

pub use parser::parse_runtime;
