/// Array lengths visited by a run, `start..=stop` in steps of `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub start: usize,
    pub stop: usize,
    pub step: usize,
}

/// Lengths of the adversarial random workload.
pub const RANDOM: Schedule = Schedule { start: 1000, stop: 1_000_000, step: 3000 };

/// Lengths of the sequential workload.
pub const SEQUENTIAL: Schedule = Schedule { start: 100, stop: 2000, step: 100 };

impl Schedule {
    pub fn lengths(&self) -> impl Iterator<Item = usize> {
        (self.start..=self.stop).step_by(self.step.max(1))
    }

    /// The longest length actually visited, which sizes the working array.
    pub fn max_len(&self) -> usize {
        self.lengths().last().unwrap_or(0)
    }
}

/// How many finds per subset element a block of radius `radius` emits.
///
/// Small subsets get many passes, large ones only a couple, so every block
/// stays within a similar order of output size.
pub fn iterations(radius: usize) -> usize {
    if radius <= 100 {
        1000
    } else if radius >= 500_000 {
        2
    } else if radius >= 200_000 {
        5
    } else if radius >= 100_000 {
        20
    } else {
        100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_schedule() {
        let lengths: Vec<usize> = RANDOM.lengths().collect();
        assert_eq!(lengths.first(), Some(&1000));
        assert_eq!(lengths[1], 4000);
        assert_eq!(lengths.len(), 334);
        assert_eq!(RANDOM.max_len(), 1_000_000);
    }

    #[test]
    fn test_sequential_schedule() {
        let lengths: Vec<usize> = SEQUENTIAL.lengths().collect();
        assert_eq!(lengths, (1..=20).map(|n| n * 100).collect::<Vec<usize>>());
        assert_eq!(SEQUENTIAL.max_len(), 2000);
    }

    #[test]
    fn test_iterations_tiers() {
        assert_eq!(iterations(10), 1000);
        assert_eq!(iterations(100), 1000);
        assert_eq!(iterations(101), 100);
        assert_eq!(iterations(99_999), 100);
        assert_eq!(iterations(100_000), 20);
        assert_eq!(iterations(199_999), 20);
        assert_eq!(iterations(200_000), 5);
        assert_eq!(iterations(499_999), 5);
        assert_eq!(iterations(500_000), 2);
        assert_eq!(iterations(1_000_000), 2);
    }
}
