//! Carving arithmetic progressions back into a shuffled array.
//!
//! A [`Progression`] names a closed value range and where its values should
//! land: value `v` belongs at index `start + step * (v - first)`. Carving moves
//! those values into place with swaps and leaves everything else where the
//! shuffle put it, yielding a partially sorted, adversarial key order.

/// A closed value range `first..=last` laid out from `start` with stride `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progression {
    pub first: i32,
    pub last: i32,
    pub start: i32,
    pub step: i32,
}

impl Progression {
    pub fn new(first: i32, last: i32, start: i32, step: i32) -> Self {
        Progression { first, last, start, step }
    }

    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.first <= value && value <= self.last
    }

    /// Canonical index of `value`. Computed wide so that values outside the
    /// range cannot overflow.
    #[inline]
    pub fn destination(&self, value: i32) -> i64 {
        self.start as i64 + self.step as i64 * (value as i64 - self.first as i64)
    }

    /// Whether carving into an array of `len` slots stays in bounds and gives
    /// every value of the range its own slot.
    pub fn fits(&self, len: usize) -> bool {
        if self.last < self.first {
            return true;
        }
        if self.step == 0 && self.last != self.first {
            return false;
        }
        let len = len as i64;
        let ends = [self.destination(self.first), self.destination(self.last)];
        ends.iter().all(|&index| 0 <= index && index < len)
    }

    /// Parks every value of the range at its destination.
    ///
    /// After a swap the same slot is examined again, since it now holds a value
    /// that has not been looked at. A parked value is never moved again because
    /// no other value shares its destination.
    pub fn carve(&self, array: &mut [i32]) {
        debug_assert!(self.fits(array.len()), "{:?} does not fit {} slots", self, array.len());

        let mut i = 0;
        while i < array.len() {
            let value = array[i];
            let destination = self.destination(value);
            if destination == i as i64 || !self.contains(value) {
                i += 1;
            } else {
                array.swap(i, destination as usize);
            }
        }
    }
}

/// The four carves applied to every random-mode array of length `len`, in order.
///
/// Ranges start at 25%, 50%, 75% and 85% of `len`, each 5% wide, and land at
/// 10% ascending, 10% descending, 50% descending by 4 and 40% ascending by 5.
/// Destinations of later carves overlap earlier ones, so their order matters.
pub fn adversarial(len: usize) -> [Progression; 4] {
    let len = len as i32;
    let width = len / 20;
    [
        Progression::new(len / 4, len / 4 + width, len / 10, 1),
        Progression::new(len / 2, len / 2 + width, len / 10, -1),
        Progression::new(3 * len / 4, 3 * len / 4 + width, len / 2, -4),
        Progression::new(17 * len / 20, 17 * len / 20 + width, 2 * len / 5, 5),
    ]
}
