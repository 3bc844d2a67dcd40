//! This crate provides a closed numeric interval `[lower, upper]` over
//! `f64`, with endpoint-wise arithmetic, set-like operations and parsing
//! from human-readable notation.
//!
//! Both bounds of an [`Interval`] are always ordered (`lower <= upper`) and
//! never NaN; an infinite bound represents an open (unbounded) side.  The
//! type is a small immutable `Copy` value: every operation returns a new
//! interval, so values can be shared freely across threads.
//!
//! The construction surface mirrors the many shapes ranged data shows up in:
//!
//!  |Input                         |Constructor                    |Result
//!  |------------------------------|-------------------------------|--------------
//!  | nothing                      |[`Interval::unbounded`]        |`[-inf, +inf]`
//!  | one finite number            |[`Interval::single`]           |`[v, v]`
//!  | one non-finite number        |[`Interval::single`]           |`[-inf, +inf]`
//!  | two numbers, any order       |[`Interval::new`]              |`[min, max]`
//!  | optional bounds              |[`Interval::from_bounds`]      |missing side is infinite
//!  | iterator of exactly two      |[`Interval::try_from_iter`]    |fails with [`Error::InvalidArity`]
//!  | text                         |`str::parse`                   |see below
//!
//! # Textual notation
//!
//! Any of `[ ] ( )` may enclose the bounds, in any combination (purely
//! cosmetic, no open/closed semantics).  The separator is one of `, ; : |`.
//! A bound that is empty, `none`, `null`, `nan` or an infinity token is
//! undefined and becomes the corresponding infinity.  Integer bounds accept
//! the `0x`, `0o` and `0b` radix prefixes.
//!
//! ```
//! use interval_arith::Interval;
//!
//! assert_eq!("[3,10]".parse::<Interval>().unwrap(), Interval::new(3.0, 10.0));
//! assert_eq!("(,5]".parse::<Interval>().unwrap(), Interval::from_bounds(None, Some(5.0)));
//! assert_eq!("[nan,nan]".parse::<Interval>().unwrap(), Interval::unbounded());
//! assert_eq!("[0x10,0b11]".parse::<Interval>().unwrap(), Interval::new(3.0, 16.0));
//! ```
//!
//! # A note on arithmetic
//!
//! Binary operators apply **endpoint-wise**: the lower bounds are combined,
//! the upper bounds are combined, and the result is re-ordered.  This is not
//! interval arithmetic in the rigorous sense: for multiplication, division
//! and powers the true enclosure is the min/max over all four bound
//! combinations, which this crate deliberately does not compute.  When an
//! interval straddles zero the result may not enclose all products:
//!
//! ```
//! use interval_arith::Interval;
//!
//! let a = Interval::new(-2.0, 3.0);
//! // Endpoint-wise square: does not contain 0.0 even though -2*3 = -6 is
//! // a possible product.
//! assert_eq!(a * a, Interval::new(4.0, 9.0));
//! ```
//!
//! Callers needing guaranteed enclosures should use a dedicated interval
//! arithmetic library with directed rounding.

mod convert;
mod errors;
mod intervals;
mod ops;
mod parse;

pub use crate::errors::Error;
pub use crate::intervals::Interval;
