/// Interface the generic test suite drives a sort implementation through.
///
/// Copying sorts bridge by writing their result back into `arr`, hence the
/// `Clone` bound.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
