//! Seeded shuffling of the working array.
//!
//! Every function here draws from the underlying `rand()` in a fixed order, so
//! a workload is reproducible from its seed alone. The arithmetic deliberately
//! mirrors 32-bit C `int` behavior, quirks included.

use rand::RngCore;

/// Three raw draws combined as `r1 * r2 + r3` with 32-bit wrapping arithmetic.
///
/// The product widens the range of a narrow generator such as the MSVC one.
/// With a 31-bit generator the product wraps and the result may be negative.
#[inline]
pub fn next_random<R: RngCore>(rng: &mut R) -> i32 {
    let first = rng.next_u32() as i32;
    let second = rng.next_u32() as i32;
    let third = rng.next_u32() as i32;
    first.wrapping_mul(second).wrapping_add(third)
}

/// A value in `low..=high`, or `low` when the range is empty or a single value.
///
/// The offset is a truncating remainder, so it carries the sign of the draw.
/// A negative offset is subtracted rather than wrapped, which keeps the result
/// in range but skews it toward `low`.
#[inline]
pub fn next_random_in<R: RngCore>(rng: &mut R, low: i32, high: i32) -> i32 {
    if high <= low {
        return low;
    }
    let span = high as i64 - low as i64 + 1;
    let offset = next_random(rng) as i64 % span;
    let value = if offset < 0 {
        low as i64 - offset
    } else {
        low as i64 + offset
    };
    value as i32
}

/// One left-to-right pass swapping each slot with a slot drawn from the whole
/// slice. Earlier slots may be disturbed again, unlike Fisher-Yates.
pub fn randomize<R: RngCore>(rng: &mut R, array: &mut [i32]) {
    let high = array.len() as i32 - 1;
    for i in 0..array.len() {
        let j = next_random_in(rng, 0, high) as usize;
        array.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GlibcRand, MsvcRand};
    use proptest::prelude::*;

    fn is_permutation(array: &[i32]) -> bool {
        let mut seen = vec![false; array.len()];
        for &v in array {
            if v < 0 || v as usize >= array.len() || seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
        true
    }

    #[test]
    fn test_next_random_combines_three_draws() {
        // srand(42) yields 175, 400, 17869, 30056, 16083, ...
        let mut rng = MsvcRand::new(42);
        assert_eq!(next_random(&mut rng), 175 * 400 + 17869);
        let mut reference = MsvcRand::new(42);
        for _ in 0..3 {
            reference.next_u32();
        }
        let expected = (reference.next_u32() as i32)
            .wrapping_mul(reference.next_u32() as i32)
            .wrapping_add(reference.next_u32() as i32);
        assert_eq!(next_random(&mut rng), expected);
    }

    #[test]
    fn test_next_random_wraps_with_glibc() {
        let mut rng = GlibcRand::new(1);
        let draws: Vec<i32> = (0..4).map(|_| next_random(&mut rng)).collect();
        assert_eq!(draws, vec![317610771, 1825971554, 897729377, -1024525155]);
    }

    #[test]
    fn test_negative_offset_is_subtracted() {
        let mut rng = GlibcRand::new(1);
        let values: Vec<i32> = (0..4).map(|_| next_random_in(&mut rng, 0, 999)).collect();
        // The fourth draw is -1024525155, whose remainder is -155.
        assert_eq!(values, vec![771, 554, 377, 155]);
    }

    #[test]
    fn test_next_random_in_stays_in_range() {
        let mut rng = GlibcRand::new(3);
        for _ in 0..10_000 {
            let v = next_random_in(&mut rng, -20, 20);
            assert!((-20..=20).contains(&v));
        }
    }

    #[test]
    fn test_randomize_small_lengths() {
        let mut rng = MsvcRand::new(42);
        let mut empty: Vec<i32> = Vec::new();
        randomize(&mut rng, &mut empty);
        assert!(empty.is_empty());

        let mut single = vec![0];
        randomize(&mut rng, &mut single);
        assert_eq!(single, vec![0]);
    }

    #[test]
    fn test_randomize_is_deterministic() {
        let mut a: Vec<i32> = (0..1000).collect();
        let mut b = a.clone();
        randomize(&mut MsvcRand::new(42), &mut a);
        randomize(&mut MsvcRand::new(42), &mut b);
        assert_eq!(a, b);
        assert_ne!(a, (0..1000).collect::<Vec<i32>>());
    }

    proptest! {
        #[test]
        fn degenerate_range_returns_low(seed in any::<u32>(), skip in 0usize..50, low in any::<i32>(), below in 0i32..1000) {
            let mut rng = GlibcRand::new(seed);
            for _ in 0..skip {
                rng.next_u32();
            }
            let high = low.saturating_sub(below);
            prop_assert_eq!(next_random_in(&mut rng, low, high), low);
        }

        #[test]
        fn randomize_keeps_a_permutation(seed in any::<u32>(), len in 0usize..5000, glibc in any::<bool>()) {
            let mut array: Vec<i32> = (0..len as i32).collect();
            if glibc {
                randomize(&mut GlibcRand::new(seed), &mut array);
            } else {
                randomize(&mut MsvcRand::new(seed), &mut array);
            }
            prop_assert!(is_permutation(&array));
        }
    }
}
