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

//! # Interpolated Sequences (linspace)
//!
//! A [`Linspace`] subdivides the interval between two endpoint values
//! `a` and `b` into `n` equal parts and lazily produces the subdivision
//! points selected by a [`Boundary`] mode.
//!
//! Elements are computed by direct interpolation,
//!
//! ```text
//! x_i = a * ((n - i) / n) + b * (i / n)        for i in [first, last]
//! ```
//!
//! never by repeatedly adding a step value. Repeated addition accumulates
//! rounding error proportional to the number of steps taken; the direct
//! formula keeps every element one scaling away from its true value, and
//! it reproduces `a` and `b` exactly at `i = 0` and `i = n` because the
//! other term's weight vanishes there. It also makes the sequence exactly
//! reversal-symmetric: swapping `a` and `b` reverses the produced values
//! bit for bit.
//!
//! The domain is anything with addition, subtraction, and scaling by a
//! floating-point scalar ([`LinearDomain`]): plain floats, complex
//! numbers, componentwise vectors.

use num_traits::{Float, NumCast, PrimInt};
use std::iter::FusedIterator;
use std::ops::{Add, Mul, Sub};

/// A continuously interpolable domain: an additive group with a scalar
/// action.
///
/// Implemented for `f32` and `f64` here; user types (complex numbers,
/// componentwise vectors) implement it by choosing the scalar type their
/// scaling operator accepts.
pub trait LinearDomain:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Self::Scalar, Output = Self>
{
    /// Scalar type the subdivision weights are computed in.
    type Scalar: Float;
}

impl LinearDomain for f32 {
    type Scalar = f32;
}

impl LinearDomain for f64 {
    type Scalar = f64;
}

/// Which of the interval endpoints a [`Linspace`] produces.
///
/// For `n` subdivisions the mode resolves to an inclusive index window
/// `[first, last]` inside `[0, n]`:
///
/// | mode        | first | last  | element count |
/// |-------------|-------|-------|---------------|
/// | `Closed`    | 0     | n     | n + 1         |
/// | `RightOpen` | 0     | n - 1 | n             |
/// | `LeftOpen`  | 1     | n     | n             |
/// | `Open`      | 1     | n - 1 | n - 1         |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Both endpoints included: `[a, b]`.
    #[default]
    Closed,
    /// End excluded: `[a, b)`.
    RightOpen,
    /// Start excluded: `(a, b]`.
    LeftOpen,
    /// Both endpoints excluded: `(a, b)`.
    Open,
}

impl Boundary {
    /// Resolves this mode to the inclusive index window `[first, last]`
    /// for `n` subdivisions.
    ///
    /// An empty window comes out as `last < first` (`Open` with `n == 1`
    /// resolves to `(1, 0)`). Expects `n >= 1`; [`Linspace::new`]
    /// normalizes its subdivision count before resolving.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepline_core::linear::Boundary;
    ///
    /// assert_eq!(Boundary::Closed.index_window(4), (0, 4));
    /// assert_eq!(Boundary::Open.index_window(4), (1, 3));
    /// ```
    #[inline]
    pub fn index_window(self, n: u64) -> (u64, u64) {
        let without_start = matches!(self, Boundary::LeftOpen | Boundary::Open);
        let without_end = matches!(self, Boundary::RightOpen | Boundary::Open);
        (without_start as u64, n.saturating_sub(without_end as u64))
    }
}

/// An interpolated sequence of evenly spaced values between `a` and `b`.
///
/// # Examples
///
/// ```
/// use stepline_core::linear::{Boundary, linspace};
///
/// let xs: Vec<f64> = linspace(0.0, 2.0, 4, Boundary::Closed).iter().collect();
/// assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
///
/// let xs: Vec<f64> = linspace(0.0, 2.0, 4, Boundary::Open).iter().collect();
/// assert_eq!(xs, vec![0.5, 1.0, 1.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linspace<T: LinearDomain> {
    a: T,
    b: T,
    n: u64,
    mode: Boundary,
    first: u64,
    last: u64,
}

impl<T: LinearDomain> Linspace<T> {
    /// Creates a sequence subdividing `[a, b]` into `n` equal parts.
    ///
    /// A subdivision count below 1 cannot honor any endpoint-inclusion
    /// mode; it normalizes to `n = 1` with [`Boundary::Open`], which is
    /// the empty sequence. Construction never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepline_core::linear::{Boundary, Linspace};
    ///
    /// let l = Linspace::new(1.0, 2.0, 4, Boundary::Closed);
    /// assert_eq!(l.len(), 5);
    /// assert!(Linspace::new(1.0, 2.0, 0, Boundary::Closed).is_empty());
    /// assert!(Linspace::new(1.0, 2.0, -1, Boundary::Closed).is_empty());
    /// ```
    #[inline]
    pub fn new<N: PrimInt>(a: T, b: T, n: N, mode: Boundary) -> Self {
        let (n, mode) = if n < N::one() {
            (N::one(), Boundary::Open)
        } else {
            (n, mode)
        };
        let n = n.to_u64().unwrap_or(u64::MAX);
        let (first, last) = mode.index_window(n);
        Self {
            a,
            b,
            n,
            mode,
            first,
            last,
        }
    }

    /// Returns the start endpoint `a`.
    #[inline]
    pub fn start(&self) -> T {
        self.a
    }

    /// Returns the end endpoint `b`.
    #[inline]
    pub fn end(&self) -> T {
        self.b
    }

    /// Returns the (normalized) number of subdivisions.
    #[inline]
    pub fn subdivisions(&self) -> u64 {
        self.n
    }

    /// Returns the (normalized) boundary mode.
    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.mode
    }

    /// Returns the number of elements the sequence produces.
    #[inline]
    pub fn len(&self) -> u64 {
        self.last.saturating_add(1).saturating_sub(self.first)
    }

    /// Checks whether the sequence produces no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }

    /// Returns a fresh cursor positioned at the first selected index.
    #[inline]
    pub fn iter(&self) -> LinspaceIter<T> {
        LinspaceIter {
            seq: *self,
            i: self.first,
        }
    }

    /// The `i`-th subdivision point, directly interpolated.
    #[inline]
    fn element(&self, i: u64) -> T {
        let n: T::Scalar = scalar(self.n);
        let i: T::Scalar = scalar(i);
        self.a * ((n - i) / n) + self.b * (i / n)
    }
}

impl<T: LinearDomain> IntoIterator for Linspace<T> {
    type Item = T;
    type IntoIter = LinspaceIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: LinearDomain> IntoIterator for &Linspace<T> {
    type Item = T;
    type IntoIter = LinspaceIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An interpolated sequence between `a` and `b`; see [`Linspace::new`].
///
/// # Examples
///
/// ```
/// use stepline_core::linear::{Boundary, linspace};
///
/// let xs: Vec<f64> = linspace(0.0, 1.0, 3, Boundary::Closed).iter().collect();
/// assert_eq!(xs, vec![0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]);
/// ```
#[inline]
pub fn linspace<T: LinearDomain, N: PrimInt>(a: T, b: T, n: N, mode: Boundary) -> Linspace<T> {
    Linspace::new(a, b, n, mode)
}

/// A value-type cursor over a [`Linspace`].
///
/// Position is the current subdivision index, so cursor equality is
/// position equality, as with [`crate::step::StepIter`].
#[derive(Debug, Clone, Copy)]
pub struct LinspaceIter<T: LinearDomain> {
    seq: Linspace<T>,
    i: u64,
}

impl<T: LinearDomain> Iterator for LinspaceIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.i > self.seq.last {
            return None;
        }
        let x = self.seq.element(self.i);
        self.i += 1;
        Some(x)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.last.saturating_add(1).saturating_sub(self.i);
        let n = usize::try_from(remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl<T: LinearDomain> ExactSizeIterator for LinspaceIter<T> {}

impl<T: LinearDomain> FusedIterator for LinspaceIter<T> {}

impl<T: LinearDomain> PartialEq for LinspaceIter<T> {
    /// Cursors compare by position (subdivision index), not by value.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.i == other.i
    }
}

impl<T: LinearDomain> Eq for LinspaceIter<T> {}

/// Widens a subdivision index into the domain's scalar type.
#[inline]
fn scalar<F: Float>(x: u64) -> F {
    <F as NumCast>::from(x).expect("subdivision index must convert to the scalar type")
}
