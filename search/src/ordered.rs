//! Bisection over ascending-sorted slices.
//!
//! The midpoint sequence is that of the inclusive `low..=high` formulation
//! (`mid = floor((low + high) / 2)`), carried here with an exclusive upper
//! bound so the bounds never underflow. Keeping the midpoint sequence fixed
//! matters for runs of equal elements: the index returned is whichever
//! equal element is visited first, not the leftmost or rightmost one.
//!
//! Sortedness is a caller precondition and is not checked. An unsorted
//! slice yields an arbitrary index or `None`, never a panic.

use std::cmp::Ordering;

/// Returns the index of an element equal to `target` in the ascending-sorted
/// `seq`, or `None` if no such element exists.
///
/// Elements are compared with `==` and `>` only, so `T` needs no more than
/// [`PartialOrd`]. A visited element that is neither equal to nor greater
/// than `target` (including incomparable values such as `NaN`) moves the
/// search right.
///
/// ```
/// use myutils_search::search;
///
/// assert_eq!(search(&[1, 3, 5, 7, 9], &7), Some(3));
/// assert_eq!(search(&[1, 3, 5, 7, 9], &2), None);
/// assert_eq!(search::<i32>(&[], &2), None);
/// ```
#[must_use]
pub fn search<T: PartialOrd>(seq: &[T], target: &T) -> Option<usize> {
    search_by(seq, |pick| {
        if pick == target {
            Ordering::Equal
        } else if pick > target {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    })
}

/// Bisection driven by a comparator.
///
/// `f` reports how the visited element orders relative to the wanted one:
/// `Greater` continues in the left half, `Less` in the right half, and
/// `Equal` ends the search at the visited index.
#[must_use]
pub fn search_by<T, F>(seq: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0usize;
    let mut high = seq.len();

    while low < high {
        // Same midpoint as floor((low + (high - 1)) / 2), without overflow.
        let mid = low + (high - low - 1) / 2;
        match f(&seq[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Greater => high = mid,
            Ordering::Less => low = mid + 1,
        }
    }

    None
}

/// Bisection over a slice sorted ascending by the key `f` extracts.
#[must_use]
pub fn search_by_key<T, K, F>(seq: &[T], key: &K, mut f: F) -> Option<usize>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    search_by(seq, |elem| {
        let k = f(elem);
        if k == *key {
            Ordering::Equal
        } else if k > *key {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    })
}
