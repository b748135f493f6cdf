//! Basic recursive quicksort, in-place and unstable.

use std::cmp::Ordering;
use std::mem;

mod quicksort;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    quicksort::quicksort(v, &mut is_less);
}
