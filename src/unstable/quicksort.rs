//! Recursive quicksort that copies into a new `Vec`.
//!
//! Partitions around a randomly chosen pivot into less/equal/greater
//! buckets, sorts the outer two recursively and concatenates. The random
//! pivot keeps presorted and adversarial inputs at the expected
//! O(n * log(n)) instead of the deterministic quadratic worst case.

use std::cmp::Ordering;

use rand::Rng;

sort_impl!("quicksort_unstable");

/// Returns a sorted copy of `v`, smallest first. See [`quick_sorted_by`].
#[inline]
pub fn quick_sorted<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    quick_sorted_by(v, |a, b| a.cmp(b))
}

/// Returns a copy of `v` sorted under `compare`, leaving `v` untouched.
///
/// Elements that compare equal may change their relative order; this sort
/// makes no stability promise. Pivots are drawn from [`rand::thread_rng`],
/// use [`quick_sorted_by_rng`] to control them.
pub fn quick_sorted_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sorted_by_rng(v, compare, &mut rand::thread_rng())
}

/// Like [`quick_sorted_by`] with an explicit pivot source, so that runs can
/// be reproduced from a seeded generator.
pub fn quick_sorted_by_rng<T, F, R>(v: &[T], mut compare: F, rng: &mut R) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    quicksort(v, &mut compare, rng)
}

/// Sorts `v` in place by overwriting it with its sorted copy.
#[inline]
pub fn sort<T: Ord + Clone>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts `v` in place under `compare`. See [`quick_sorted_by`].
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let sorted = quick_sorted_by(v, compare);

    for (slot, val) in v.iter_mut().zip(sorted) {
        *slot = val;
    }
}

fn quicksort<T, F, R>(v: &[T], compare: &mut F, rng: &mut R) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    if v.len() < 2 {
        return v.to_vec();
    }

    let pivot_pos = rng.gen_range(0..v.len());
    let pivot = &v[pivot_pos];

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for (pos, elem) in v.iter().enumerate() {
        if pos == pivot_pos {
            // The pivot lands in `equal` unconditionally. Both recursive
            // calls stay strictly smaller than `v`, so the sort terminates
            // even if `compare` is not a total order.
            equal.push(elem.clone());
            continue;
        }

        match compare(elem, pivot) {
            Ordering::Less => less.push(elem.clone()),
            Ordering::Equal => equal.push(elem.clone()),
            Ordering::Greater => greater.push(elem.clone()),
        }
    }

    let mut sorted = quicksort(&less, compare, rng);
    sorted.reserve(equal.len() + greater.len());
    sorted.extend(equal);
    sorted.extend(quicksort(&greater, compare, rng));

    sorted
}
