// Copyright (c) 2026 the stepline developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Lazy, forward-only sequence generators over generic numeric domains.
//!
//! Two generator families live here:
//!
//! - [`step::StepRange`]: integral stepped sequences whose exact element
//!   count is computed up front, without floating point, from
//!   `(start, end, step, include_end)`.
//! - [`linear::Linspace`]: interpolated sequences subdividing `[a, b]`
//!   into `n` equal parts over any additive, scalable domain, with four
//!   boundary inclusion modes.
//!
//! Both hand out value-type cursors: every call to `iter` yields fresh,
//! independent iteration state derived from the immutable descriptor.

use num_traits::PrimInt;
use std::fmt::{Debug, Display};

pub mod generate;
pub mod linear;
pub mod step;

pub use generate::{Generate, GenerateIter, generate};
pub use linear::{Boundary, LinearDomain, Linspace, LinspaceIter, linspace};
pub use step::{StepIter, StepRange, countdown, range, range_step, range_step_inclusive, range_to};

/// Capability bundle for the integral domain of a [`step::StepRange`].
///
/// Blanket-implemented for every primitive integer, signed or unsigned,
/// of any width.
pub trait StepDomain: PrimInt + Send + Sync + Debug + Display {}
impl<T> StepDomain for T where T: PrimInt + Send + Sync + Debug + Display {}
