//! In-place quicksort built on the Lomuto partition scheme.
//!
//! The partition always pivots on the last element of the range, no
//! randomization. That makes the sort deterministic, at the price of
//! quadratic time on already sorted input. The driver recurses into the
//! smaller side of each split and iterates on the larger one, which caps
//! the stack depth logarithmically even then.

use std::cmp::Ordering;

sort_impl!("lomuto_quicksort_unstable");

/// Sorts `v` in place, smallest first. See [`sort_by`].
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts `v` in place under `compare`.
///
/// Uses constant auxiliary memory beyond the recursion stack, in contrast
/// to the allocating sorts in this crate. Elements that compare equal may
/// change their relative order.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }

    quicksort(v, 0, v.len() - 1, &mut compare);
}

fn quicksort<T, F>(v: &mut [T], mut lo: usize, mut hi: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while lo < hi {
        let split = partition(v, lo, hi, &mut *compare);

        // Recurse into the smaller side, continue with the larger one.
        if split - lo < hi - split {
            if split > lo {
                quicksort(v, lo, split - 1, compare);
            }
            lo = split + 1;
        } else {
            if split < hi {
                quicksort(v, split + 1, hi, compare);
            }
            // `split > lo` holds here, the branch above covers split == lo.
            hi = split - 1;
        }
    }
}

/// Partitions `v[lo..=hi]` in place around the value at `hi`, the pivot.
///
/// On return the pivot sits at the returned index: everything before it in
/// the range compares strictly less than it, everything after it compares
/// greater or equal. Single pass, constant extra memory.
///
/// ```
/// use sort_classic::{cmp_standard, partition};
///
/// let mut v = [3, 1, 4, 1, 5];
/// assert_eq!(partition(&mut v, 0, 4, cmp_standard), 4);
/// ```
///
/// # Panics
///
/// Panics unless `lo <= hi < v.len()`.
pub fn partition<T, F>(v: &mut [T], lo: usize, hi: usize, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    assert!(
        lo <= hi && hi < v.len(),
        "invalid partition range [{lo}, {hi}] for slice of length {}",
        v.len()
    );

    // The pivot stays at hi during the scan, everything strictly less than
    // it is swapped down to the boundary.
    let mut boundary = lo;

    for idx in lo..hi {
        if compare(&v[idx], &v[hi]) == Ordering::Less {
            v.swap(boundary, idx);
            boundary += 1;
        }
    }

    v.swap(boundary, hi);

    boundary
}
