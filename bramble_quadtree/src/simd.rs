// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vectorized rectangle/point kernels with a scalar fallback.
//!
//! Every kernel makes the identical accept/reject decision on every target:
//! the SSE2 path is instruction-level parallelism only, never a precision
//! relaxation. SSE2 is part of the x86_64 baseline, so the compile-time cfg
//! is the feature check; all other targets (and builds without the `simd`
//! feature) take the scalar path.
//!
//! Like the rest of the crate, the kernels assume no NaN coordinates.

use crate::types::{Point, Rect};

/// Whether two rectangles overlap. Sharing only an edge counts as overlap.
///
/// Same decision as [`Rect::intersects`].
#[inline]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        sse2::rects_intersect(a, b)
    }
    #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
    {
        a.intersects(b)
    }
}

/// Whether the point lies inside the rectangle (boundary inclusive).
///
/// Same decision as [`Rect::contains`].
#[inline]
pub fn point_in_rect(p: Point, r: &Rect) -> bool {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        sse2::point_in_rect(p, r)
    }
    #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
    {
        r.contains(p)
    }
}

/// The tight bounding box of a point set, or `None` when the set is empty.
///
/// The vector path reduces four points per loop iteration with a scalar tail
/// for the remainder; short inputs go straight to the scalar fold.
#[inline]
pub fn bounds_of(points: &[Point]) -> Option<Rect> {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        sse2::bounds_of(points)
    }
    #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
    {
        scalar_bounds_of(points)
    }
}

/// Scalar min/max fold over the point set.
fn scalar_bounds_of(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let mut r = Rect::new(first.x, first.y, first.x, first.y);
    for p in rest {
        r.min_x = r.min_x.min(p.x);
        r.min_y = r.min_y.min(p.y);
        r.max_x = r.max_x.max(p.x);
        r.max_y = r.max_y.max(p.y);
    }
    Some(r)
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[allow(
    unsafe_code,
    reason = "SSE2 intrinsics; SSE2 is part of the x86_64 baseline"
)]
mod sse2 {
    use core::arch::x86_64::{
        __m128, _mm_cmple_ps, _mm_cvtss_f32, _mm_load_ps, _mm_loadu_ps, _mm_max_ps, _mm_min_ps,
        _mm_movemask_ps, _mm_set_ps, _mm_shuffle_ps,
    };

    use super::scalar_bounds_of;
    use crate::types::{Point, Rect};

    #[inline]
    fn load(r: &Rect) -> __m128 {
        // SAFETY: `Rect` is `repr(C, align(16))` with four f32 fields, so the
        // reference is a valid 16-byte-aligned source for an aligned load.
        unsafe { _mm_load_ps((r as *const Rect).cast::<f32>()) }
    }

    #[inline]
    fn lane0(v: __m128) -> f32 {
        // SAFETY: extract from a value already in a register.
        unsafe { _mm_cvtss_f32(v) }
    }

    #[inline]
    fn lane1(v: __m128) -> f32 {
        // SAFETY: shuffle/extract on a value already in a register.
        unsafe { _mm_cvtss_f32(_mm_shuffle_ps::<0x55>(v, v)) }
    }

    /// One lane-wise `<=` answers all four separating-axis tests at once:
    /// overlap iff `a.min <= b.max` and `b.min <= a.max` on both axes.
    #[inline]
    pub(super) fn rects_intersect(a: &Rect, b: &Rect) -> bool {
        let av = load(a);
        let bv = load(b);
        // SAFETY: plain SSE register ops; no memory access.
        unsafe {
            // lhs = [a.min_x, a.min_y, b.min_x, b.min_y]
            // rhs = [b.max_x, b.max_y, a.max_x, a.max_y]
            let lhs = _mm_shuffle_ps::<0x44>(av, bv);
            let rhs = _mm_shuffle_ps::<0xEE>(bv, av);
            _mm_movemask_ps(_mm_cmple_ps(lhs, rhs)) == 0b1111
        }
    }

    /// Containment as a single lane-wise `<=`:
    /// `[min_x, min_y, x, y] <= [x, y, max_x, max_y]`.
    #[inline]
    pub(super) fn point_in_rect(p: Point, r: &Rect) -> bool {
        let rv = load(r);
        // SAFETY: plain SSE register ops; no memory access.
        unsafe {
            let pv = _mm_set_ps(p.y, p.x, p.y, p.x); // lanes [x, y, x, y]
            let lhs = _mm_shuffle_ps::<0x44>(rv, pv);
            let rhs = _mm_shuffle_ps::<0xE4>(pv, rv);
            _mm_movemask_ps(_mm_cmple_ps(lhs, rhs)) == 0b1111
        }
    }

    /// Batched min/max reduction: two 128-bit loads cover four points per
    /// iteration; the interleaved `[x, y, x, y]` accumulators are folded into
    /// lanes 0/1 at the end, and any trailing points are folded in scalar.
    pub(super) fn bounds_of(points: &[Point]) -> Option<Rect> {
        let len = points.len();
        if len < 4 {
            return scalar_bounds_of(points);
        }
        let ptr = points.as_ptr().cast::<f32>();
        // SAFETY: `Point` is `repr(C)` with two f32 fields, so `points` is
        // `2 * len` contiguous f32 lanes; the loop only loads offsets
        // `i * 2 + 4 <= 2 * len - 4`, which stay in bounds.
        let (mins, maxs, tail) = unsafe {
            let first = _mm_loadu_ps(ptr);
            let second = _mm_loadu_ps(ptr.add(4));
            let mut mins = _mm_min_ps(first, second);
            let mut maxs = _mm_max_ps(first, second);
            let mut i = 4;
            while i + 4 <= len {
                let a = _mm_loadu_ps(ptr.add(i * 2));
                let b = _mm_loadu_ps(ptr.add(i * 2 + 4));
                mins = _mm_min_ps(mins, _mm_min_ps(a, b));
                maxs = _mm_max_ps(maxs, _mm_max_ps(a, b));
                i += 4;
            }
            // Fold the two interleaved point columns together: lanes 0/1 then
            // hold the running (x, y) minimum and maximum.
            let mins = _mm_min_ps(mins, _mm_shuffle_ps::<0x4E>(mins, mins));
            let maxs = _mm_max_ps(maxs, _mm_shuffle_ps::<0x4E>(maxs, maxs));
            (mins, maxs, i)
        };
        let mut r = Rect::new(lane0(mins), lane1(mins), lane0(maxs), lane1(maxs));
        for p in &points[tail..] {
            r.min_x = r.min_x.min(p.x);
            r.min_y = r.min_y.min(p.y);
            r.max_x = r.max_x.max(p.x);
            r.max_y = r.max_y.max(p.y);
        }
        Some(r)
    }
}
