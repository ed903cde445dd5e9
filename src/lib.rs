//! Comparator-driven implementations of the classic comparison sorts: a
//! stable recursive merge sort, a copying three-way quicksort with random
//! pivots and an in-place quicksort built on the Lomuto partition scheme.
//!
//! Every entry point comes in two flavors, one ordering by [`Ord`] and a
//! `_by` variant taking an explicit comparator `FnMut(&T, &T) -> Ordering`.
//! The comparator must describe a total order. If it does not, the resulting
//! order is unspecified, but every sort still yields a permutation of its
//! input.
//!
//! ```
//! use sort_classic::{cmp_reverse, merge_sorted, quick_sorted_by};
//!
//! assert_eq!(merge_sorted(&[1, 5, 3, 2, 6, 6, 6]), vec![1, 2, 3, 5, 6, 6, 6]);
//! assert_eq!(quick_sorted_by(&[0, 1], cmp_reverse), vec![1, 0]);
//! ```

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod cmp;
pub mod stable;
pub mod unstable;

pub use cmp::{cmp_last_digit, cmp_reverse, cmp_standard};
pub use stable::mergesort::{merge, merge_by, merge_sorted, merge_sorted_by};
pub use unstable::lomuto::{partition, sort as quick_sort, sort_by as quick_sort_by};
pub use unstable::quicksort::{quick_sorted, quick_sorted_by, quick_sorted_by_rng};
