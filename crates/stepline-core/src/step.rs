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

//! # Integral Stepped Sequences
//!
//! A [`StepRange`] describes the sequence `start, start+step, start+2*step, ...`
//! over an integral domain. Its exact element count is computed once at
//! construction, in integer arithmetic, from `(start, end, step, include_end)`;
//! iteration then runs on a plain countdown instead of comparing values
//! against the end bound. That makes the end-of-sequence test exact even
//! when the step overshoots the end, and it lets a signed step drive an
//! unsigned domain (`range_step(9u32, 0, -2)` is well-formed).
//!
//! Every degenerate parameter combination normalizes to a well-defined,
//! usually empty, sequence:
//!
//! - zero step: at most one element (`start`, iff `start == end` and the
//!   end is requested);
//! - step pointing away from `end`: always empty;
//! - `start == end` without `include_end`: empty.
//!
//! Construction never fails for integral inputs.

use crate::StepDomain;
use num_traits::{NumCast, PrimInt};
use std::iter::FusedIterator;

/// An integral stepped sequence with a precomputed element count.
///
/// The descriptor is immutable; every call to [`StepRange::iter`] (or
/// `IntoIterator`) derives fresh, independent cursor state from it.
///
/// # Examples
///
/// ```
/// use stepline_core::step::StepRange;
///
/// let r = StepRange::new(0, 10, 2, false);
/// assert_eq!(r.len(), 5);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
///
/// let r = StepRange::new(0, 10, 2, true);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8, 10]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepRange<T> {
    start: T,
    count: u128,
    stride: u128,
    backwards: bool,
}

impl<T: StepDomain> StepRange<T> {
    /// Creates a stepped sequence from `start` towards `end`.
    ///
    /// The element count is fixed here, ahead of iteration:
    ///
    /// - base count is `|end - start| / |step|` (truncating);
    /// - with `include_end`, one more element so the end value is always
    ///   produced when it is reachable in the stepping direction;
    /// - without `include_end`, one more element only when the step does
    ///   not land exactly on `end` (the sequence stops at the last value
    ///   at or before `end`, one step short of overshooting it).
    ///
    /// A zero step yields `[start]` iff `start == end && include_end`,
    /// otherwise nothing. A step pointing away from `end` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepline_core::step::StepRange;
    ///
    /// // 9 is not reachable with step 2; the range still covers [0, 9).
    /// assert_eq!(
    ///     StepRange::new(0, 9, 2, false).iter().collect::<Vec<_>>(),
    ///     vec![0, 2, 4, 6, 8]
    /// );
    /// // Wrong-direction step normalizes to an empty sequence.
    /// assert!(StepRange::new(0, 10, -2, false).is_empty());
    /// ```
    #[inline]
    pub fn new<S: PrimInt>(start: T, end: T, step: S, include_end: bool) -> Self {
        Self {
            start,
            count: element_count(start, end, step, include_end),
            stride: step_magnitude(step),
            backwards: step < S::zero(),
        }
    }

    /// Returns the first value of the sequence (even if the sequence is empty).
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

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

    /// Returns a fresh cursor positioned at the first element.
    ///
    /// Cursors are value types: two cursors obtained from the same
    /// descriptor advance independently.
    #[inline]
    pub fn iter(&self) -> StepIter<T> {
        StepIter {
            value: self.start,
            remaining: self.count,
            stride: self.stride,
            backwards: self.backwards,
        }
    }
}

impl<T: StepDomain> IntoIterator for StepRange<T> {
    type Item = T;
    type IntoIter = StepIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: StepDomain> IntoIterator for &StepRange<T> {
    type Item = T;
    type IntoIter = StepIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The sequence `0, 1, .., n-1`.
///
/// # Examples
///
/// ```
/// use stepline_core::step::range_to;
///
/// assert_eq!(range_to(5).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// assert!(range_to(0).is_empty());
/// ```
#[inline]
pub fn range_to<T: StepDomain>(n: T) -> StepRange<T> {
    StepRange::new(T::zero(), n, T::one(), false)
}

/// The sequence `start, start+1, .., end-1`.
///
/// # Examples
///
/// ```
/// use stepline_core::step::range;
///
/// assert_eq!(range(5, 10).iter().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
/// ```
#[inline]
pub fn range<T: StepDomain>(start: T, end: T) -> StepRange<T> {
    StepRange::new(start, end, T::one(), false)
}

/// A stepped sequence from `start` towards `end`, end excluded.
///
/// When the step does not divide the distance evenly, the sequence ends
/// with the last value before `end` is overshot; see [`StepRange::new`].
///
/// # Examples
///
/// ```
/// use stepline_core::step::range_step;
///
/// assert_eq!(range_step(10, 0, -2).iter().collect::<Vec<_>>(), vec![10, 8, 6, 4, 2]);
/// assert_eq!(range_step(9u32, 0, -2).iter().collect::<Vec<_>>(), vec![9, 7, 5, 3, 1]);
/// ```
#[inline]
pub fn range_step<T: StepDomain, S: PrimInt>(start: T, end: T, step: S) -> StepRange<T> {
    StepRange::new(start, end, step, false)
}

/// A stepped sequence from `start` towards `end`, end included whenever
/// it is reachable in the stepping direction.
///
/// # Examples
///
/// ```
/// use stepline_core::step::range_step_inclusive;
///
/// assert_eq!(
///     range_step_inclusive(0, 10, 2).iter().collect::<Vec<_>>(),
///     vec![0, 2, 4, 6, 8, 10]
/// );
/// ```
#[inline]
pub fn range_step_inclusive<T: StepDomain, S: PrimInt>(start: T, end: T, step: S) -> StepRange<T> {
    StepRange::new(start, end, step, true)
}

/// The descending sequence `n-1, n-2, .., 0`; empty for `n == 0`.
///
/// Safe for unsigned `n`: the `n == 0` case never computes `n - 1`.
///
/// # Examples
///
/// ```
/// use stepline_core::step::countdown;
///
/// assert_eq!(countdown(5u32).iter().collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
/// assert!(countdown(0u32).is_empty());
/// ```
#[inline]
pub fn countdown<T: StepDomain>(n: T) -> StepRange<T> {
    let start = if n.is_zero() { T::zero() } else { n - T::one() };
    StepRange::new(start, T::zero(), -1i8, !n.is_zero())
}

/// A value-type cursor over a [`StepRange`].
///
/// Position is tracked as the remaining element count, so two cursors
/// compare equal iff they are the same number of elements from the end;
/// in particular all exhausted cursors compare equal.
#[derive(Debug, Clone, Copy)]
pub struct StepIter<T> {
    value: T,
    remaining: u128,
    stride: u128,
    backwards: bool,
}

impl<T: StepDomain> Iterator for StepIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let value = self.value;
        // Advance only between yields: the value never moves past the
        // final element, so an unsigned countdown cannot wrap below zero.
        if self.remaining > 0 {
            self.value = advance(self.value, self.stride, self.backwards);
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

impl<T: StepDomain> FusedIterator for StepIter<T> {}

impl<T> PartialEq for StepIter<T> {
    /// Cursors compare by position (remaining count), not by value.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.remaining == other.remaining
    }
}

impl<T> Eq for StepIter<T> {}

/// Exact element count for `(start, end, step, include_end)`, computed
/// in widened integer arithmetic so full-width signed spans cannot
/// overflow.
fn element_count<T: StepDomain, S: PrimInt>(start: T, end: T, step: S, include_end: bool) -> u128 {
    let degenerate = (start == end && include_end) as u128;
    if step.is_zero() {
        return degenerate;
    }
    let backwards = step < S::zero();
    if (end < start) != backwards {
        return degenerate;
    }
    let dist = distance(start, end);
    let mag = step_magnitude(step);
    let mut n = dist / mag;
    if include_end {
        n = n.saturating_add(1);
    } else if n * mag != dist {
        // Stepping would stop short of `end` without landing on it; one
        // more element keeps the half-open convention of "stop at or just
        // past the last value before end".
        n += 1;
    }
    n
}

/// `|b - a|` as an unsigned 128-bit magnitude.
fn distance<T: StepDomain>(a: T, b: T) -> u128 {
    let (lo, hi) = if b < a { (b, a) } else { (a, b) };
    match (lo.to_i128(), hi.to_i128()) {
        (Some(lo), Some(hi)) => hi.abs_diff(lo),
        // Only u128 values beyond i128::MAX land here.
        _ => hi
            .to_u128()
            .unwrap_or(u128::MAX)
            .saturating_sub(lo.to_u128().unwrap_or(0)),
    }
}

/// `|step|` as an unsigned 128-bit magnitude.
fn step_magnitude<S: PrimInt>(step: S) -> u128 {
    match step.to_i128() {
        Some(s) => s.unsigned_abs(),
        None => step.to_u128().unwrap_or(u128::MAX),
    }
}

/// `value ± mag` in widened arithmetic, narrowed back to the domain.
///
/// The step magnitude may exceed the domain type (`range_step(-100i8,
/// 100i8, 150i32)` steps an `i8` domain by 150), so the sum is formed in
/// 128-bit arithmetic and only the result is converted back. The cursor
/// calls this only when another element follows, and the precomputed
/// count guarantees every such element lies between the range bounds, so
/// the narrowing conversion cannot fail on a reachable advance.
fn advance<T: StepDomain>(value: T, mag: u128, backwards: bool) -> T {
    let next = match value.to_i128() {
        Some(v) => {
            let v = if backwards {
                v.checked_sub_unsigned(mag)
            } else {
                v.checked_add_unsigned(mag)
            };
            v.and_then(<T as NumCast>::from)
        }
        // Only u128 values beyond i128::MAX land here.
        None => {
            let v = value.to_u128().unwrap_or(u128::MAX);
            let v = if backwards {
                v.checked_sub(mag)
            } else {
                v.checked_add(mag)
            };
            v.and_then(<T as NumCast>::from)
        }
    };
    next.unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: StepDomain>(r: StepRange<T>) -> Vec<T> {
        r.iter().collect()
    }

    #[test]
    fn test_range_to_zero_is_empty() {
        assert!(range_to(0).is_empty());
        assert_eq!(collect(range_to(0)), Vec::<i32>::new());
    }

    #[test]
    fn test_range_to_five() {
        assert_eq!(collect(range_to(5)), vec![0, 1, 2, 3, 4]);
        assert_eq!(range_to(5).len(), 5);
    }

    #[test]
    fn test_range_to_unsigned() {
        assert_eq!(collect(range_to(5u32)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_range_with_start() {
        assert_eq!(collect(range(5, 10)), vec![5, 6, 7, 8, 9]);
        assert_eq!(collect(range(0, 5)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_range_step_down_unit() {
        assert_eq!(collect(range_step(5, 0, -1)), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_countdown() {
        assert_eq!(collect(countdown(5)), vec![4, 3, 2, 1, 0]);
        assert!(countdown(0).is_empty());
    }

    #[test]
    fn test_countdown_unsigned_no_underflow() {
        assert_eq!(collect(countdown(5u32)), vec![4, 3, 2, 1, 0]);
        assert!(countdown(0u32).is_empty());
        assert_eq!(collect(countdown(1u8)), vec![0]);
    }

    #[test]
    fn test_range_step_even_division() {
        assert_eq!(collect(range_step(0, 10, 2)), vec![0, 2, 4, 6, 8]);
        assert_eq!(
            collect(range_step_inclusive(0, 10, 2)),
            vec![0, 2, 4, 6, 8, 10]
        );
    }

    #[test]
    fn test_range_step_overshoot() {
        // 9 is unreachable with step 2: exclusive and inclusive agree.
        assert_eq!(collect(range_step(0, 9, 2)), vec![0, 2, 4, 6, 8]);
        assert_eq!(collect(range_step_inclusive(0, 9, 2)), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_range_step_larger_than_span() {
        assert_eq!(collect(range_step(0, 1, 2)), vec![0]);
        assert_eq!(collect(range_step_inclusive(0, 1, 2)), vec![0]);
    }

    #[test]
    fn test_range_step_descending() {
        assert_eq!(collect(range_step(9, 0, -2)), vec![9, 7, 5, 3, 1]);
        assert_eq!(collect(range_step_inclusive(9, 0, -2)), vec![9, 7, 5, 3, 1]);
        assert_eq!(collect(range_step(10, 0, -2)), vec![10, 8, 6, 4, 2]);
        assert_eq!(
            collect(range_step_inclusive(10, 0, -2)),
            vec![10, 8, 6, 4, 2, 0]
        );
    }

    #[test]
    fn test_range_step_descending_unsigned_domain() {
        assert_eq!(collect(range_step(9u32, 0, -2)), vec![9, 7, 5, 3, 1]);
        assert_eq!(
            collect(range_step_inclusive(9u32, 0, -2)),
            vec![9, 7, 5, 3, 1]
        );
        assert_eq!(collect(range_step(10u32, 0, -2)), vec![10, 8, 6, 4, 2]);
        assert_eq!(
            collect(range_step_inclusive(10u32, 0, -2)),
            vec![10, 8, 6, 4, 2, 0]
        );
    }

    #[test]
    fn test_wrong_direction_is_empty() {
        assert!(range_step(0, 10, -2).is_empty());
        assert!(range_step(10, 0, 2).is_empty());
        assert!(range_step_inclusive(0, 10, -2).is_empty());
        assert!(range_step_inclusive(10, 0, 2).is_empty());
    }

    #[test]
    fn test_zero_step_is_empty() {
        assert!(range_step(0, 10, 0).is_empty());
        assert!(range_step(10, 0, 0).is_empty());
        assert!(range_step_inclusive(0, 10, 0).is_empty());
        assert!(range_step_inclusive(9, 0, 0).is_empty());
    }

    #[test]
    fn test_zero_step_equal_bounds() {
        assert!(range_step(1, 1, 0).is_empty());
        assert_eq!(collect(range_step_inclusive(1, 1, 0)), vec![1]);
    }

    #[test]
    fn test_equal_bounds_nonzero_step() {
        assert!(range_step(1, 1, 2).is_empty());
        assert_eq!(collect(range_step_inclusive(1, 1, 2)), vec![1]);
    }

    #[test]
    fn test_count_matches_ceil_division() {
        for start in [0i64, 3, 17] {
            for end in [start, start + 1, start + 7, start + 60] {
                for step in [1i64, 2, 3, 7, 11] {
                    let expected = ((end - start) as u64).div_ceil(step as u64) as u128;
                    let r = range_step(start, end, step);
                    assert_eq!(r.len(), expected, "range_step({start}, {end}, {step})");
                    assert_eq!(r.iter().count() as u128, r.len());

                    let inclusive_extra = ((end - start) % step == 0) as u128;
                    assert_eq!(
                        range_step_inclusive(start, end, step).len(),
                        expected + inclusive_extra
                    );
                }
            }
        }
    }

    #[test]
    fn test_step_magnitude_wider_than_domain_type() {
        // The step does not fit i8, but every element it reaches does.
        let r = range_step(-100i8, 100i8, 150i32);
        assert_eq!(r.len(), 2);
        assert_eq!(collect(r), vec![-100, 50]);

        let r = range_step(200u8, 0u8, -150i32);
        assert_eq!(r.len(), 2);
        assert_eq!(collect(r), vec![200, 50]);

        // Magnitude wider than the whole domain: one element at most.
        assert_eq!(collect(range_step(0i8, 100i8, 1000i32)), vec![0]);
        assert_eq!(collect(range_step_inclusive(0i8, 100i8, 1000i32)), vec![0]);
    }

    #[test]
    fn test_full_width_signed_span() {
        let r = range_step(i8::MIN, i8::MAX, 1);
        assert_eq!(r.len(), 255);
        let v = collect(r);
        assert_eq!(v.first(), Some(&i8::MIN));
        assert_eq!(v.last(), Some(&(i8::MAX - 1)));

        let r = range_step_inclusive(i8::MIN, i8::MAX, 1);
        assert_eq!(r.len(), 256);
        assert_eq!(r.iter().last(), Some(i8::MAX));
    }

    #[test]
    fn test_cursors_are_independent() {
        let r = range_to(5);
        let mut a = r.iter();
        let b = r.iter();
        assert_eq!(a.next(), Some(0));
        assert_eq!(a.next(), Some(1));
        assert_eq!(b.collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_cursor_equality_by_position() {
        let r = range_to(5);
        let mut i1 = r.iter();
        let mut i2 = r.iter();
        assert_eq!(i1, i2);
        let _ = i1.next();
        assert_ne!(i1, i2);
        let _ = i2.next();
        assert_eq!(i1, i2);
    }

    #[test]
    fn test_exhausted_cursors_compare_equal() {
        let mut a = range_to(2).iter();
        let mut b = range_to(7).iter();
        while a.next().is_some() {}
        while b.next().is_some() {}
        assert_eq!(a, b);
    }

    #[test]
    fn test_size_hint_exact() {
        let mut it = range_step(0, 10, 2).iter();
        assert_eq!(it.size_hint(), (5, Some(5)));
        let _ = it.next();
        assert_eq!(it.size_hint(), (4, Some(4)));
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut it = range_to(1).iter();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iterator_by_ref_and_value() {
        let r = range_to(3);
        let by_ref: Vec<_> = (&r).into_iter().collect();
        let by_val: Vec<_> = r.into_iter().collect();
        assert_eq!(by_ref, by_val);
    }

    #[test]
    fn test_step_magnitude_widening() {
        assert_eq!(step_magnitude(-2i32), 2);
        assert_eq!(step_magnitude(2u64), 2);
        assert_eq!(step_magnitude(i128::MIN), 1u128 << 127);
    }

    #[test]
    fn test_distance_widening() {
        assert_eq!(distance(i8::MIN, i8::MAX), 255);
        assert_eq!(distance(3u8, 9u8), 6);
        assert_eq!(distance(9i32, -9i32), 18);
    }
}
