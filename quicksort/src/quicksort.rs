/// Sorts `v` recursively.
///
/// The pivot is always the last element of the current sub-slice, so inputs
/// that are already sorted degrade to `O(N^2)` comparisons with `O(N)`
/// recursion depth. That is the accepted worst case of this scheme, the
/// average case stays `O(N x log(N))`.
pub(crate) fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        let (v_without_pivot, pivot) = v.split_at_mut(len - 1);
        let num_le = partition_lomuto(v_without_pivot, &pivot[0], is_less);

        // Place the pivot between the two partitions.
        v.swap(num_le, len - 1);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(num_le);
        let right = &mut right[1..];

        // Recurse into the left side.
        quicksort(left, is_less);

        // Continue with the right side.
        v = right;
    }
}

/// Takes the input slice `v` and re-arranges elements such that all elements
/// that compare true for `!is_less(pivot, elem)` are on the left side of `v`,
/// followed by the elements greater than the pivot.
///
/// Returns the size of the left side. Elements equal to the pivot count as
/// part of the left side.
fn partition_lomuto<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut num_le = 0;
    for i in 0..v.len() {
        if !is_less(pivot, &v[i]) {
            v.swap(num_le, i);
            num_le += 1;
        }
    }

    num_le
}
