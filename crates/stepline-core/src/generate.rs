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

//! # Generic Accumulation Sequences
//!
//! [`generate`] is the lowest-level sequence primitive: a start value, an
//! explicit element count, and an increment applied by compound
//! assignment between yields. The start/step model is not tied to
//! arithmetic progressions; any `T: AddAssign<S>` works, so the same
//! generator that produces `0, 2, 4, ..` also produces
//! `"|", "|=", "|==", ..` by repeated suffix concatenation.

use num_traits::PrimInt;
use std::iter::FusedIterator;
use std::ops::AddAssign;

/// An accumulation sequence: `start` followed by `count - 1` compound
/// additions of `step`.
///
/// # Examples
///
/// ```
/// use stepline_core::generate::generate;
///
/// let v: Vec<i32> = generate(8, 5, -2).iter().collect();
/// assert_eq!(v, vec![8, 6, 4, 2, 0]);
///
/// let v: Vec<String> = generate("|".to_string(), 3, "=").iter().collect();
/// assert_eq!(v, vec!["|", "|=", "|=="]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Generate<T, S> {
    start: T,
    count: u128,
    step: S,
}

impl<T, S> Generate<T, S> {
    /// Returns the exact number of elements the sequence produces.
    #[inline]
    pub fn len(&self) -> u128 {
        self.count
    }

    /// Checks whether the sequence produces no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns a fresh, independent cursor positioned at `start`.
    #[inline]
    pub fn iter(&self) -> GenerateIter<T, S>
    where
        T: Clone,
        S: Clone,
    {
        GenerateIter {
            value: self.start.clone(),
            remaining: self.count,
            step: self.step.clone(),
        }
    }
}

/// Creates an accumulation sequence of exactly `count` elements.
///
/// `count` may be any integral type; a negative count normalizes to an
/// empty sequence. A zero step simply repeats `start` `count` times.
///
/// # Examples
///
/// ```
/// use stepline_core::generate::generate;
///
/// assert_eq!(generate(0, 5, 1).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// assert!(generate(0, -3, 1).is_empty());
/// ```
#[inline]
pub fn generate<T, S, N>(start: T, count: N, step: S) -> Generate<T, S>
where
    T: Clone + AddAssign<S>,
    S: Clone,
    N: PrimInt,
{
    Generate {
        start,
        count: count.to_u128().unwrap_or(0),
        step,
    }
}

/// A value-type cursor over a [`Generate`] sequence.
#[derive(Debug, Clone)]
pub struct GenerateIter<T, S> {
    value: T,
    remaining: u128,
    step: S,
}

impl<T, S> Iterator for GenerateIter<T, S>
where
    T: Clone + AddAssign<S>,
    S: Clone,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let value = self.value.clone();
        // The increment is applied between yields only; the accumulator is
        // never advanced past the final element.
        if self.remaining > 0 {
            self.value += self.step.clone();
        }
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T, S> FusedIterator for GenerateIter<T, S>
where
    T: Clone + AddAssign<S>,
    S: Clone,
{
}

impl<T, S> IntoIterator for Generate<T, S>
where
    T: Clone + AddAssign<S>,
    S: Clone,
{
    type Item = T;
    type IntoIter = GenerateIter<T, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        GenerateIter {
            value: self.start,
            remaining: self.count,
            step: self.step,
        }
    }
}

impl<T, S> IntoIterator for &Generate<T, S>
where
    T: Clone + AddAssign<S>,
    S: Clone,
{
    type Item = T;
    type IntoIter = GenerateIter<T, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
