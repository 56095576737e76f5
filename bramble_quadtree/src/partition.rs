// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-place unstable partitioning used by the tree builder.

/// Partition `slice` in place so that every element satisfying `pred` precedes
/// every element that does not, returning the length of the first group.
///
/// The partition is unstable (relative order within a group is not preserved)
/// and runs in O(len) with at most one swap per element.
pub fn partition_in_place<T, F>(slice: &mut [T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let mut lo = 0;
    let mut hi = slice.len();
    while lo < hi {
        if pred(&slice[lo]) {
            lo += 1;
        } else {
            hi -= 1;
            slice.swap(lo, hi);
        }
    }
    lo
}
