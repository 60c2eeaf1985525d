//! The working array, its generator, and the block-by-block token emission.

use crate::error::Result;
use crate::manifest::BlockSummary;
use crate::permute::{next_random_in, randomize};
use crate::progression::{adversarial, Progression};
use crate::schedule::{iterations, Schedule};
use crate::write;
use rand::RngCore;
use std::io::Write;
use tracing::debug;

/// Upper bound on the working array length.
pub const MAX_LEN: usize = 10_000_000;

/// Owned state of a random run: one reusable buffer and the generator that
/// shuffles and samples it.
///
/// The generator is seeded once and never reseeded, so every block depends on
/// all blocks emitted before it.
pub struct Workload<R> {
    rng: R,
    array: Vec<i32>,
}

impl<R: RngCore> Workload<R> {
    /// A workload whose buffer can hold `capacity` keys without reallocating.
    pub fn new(rng: R, capacity: usize) -> Self {
        Workload {
            rng,
            array: Vec::with_capacity(capacity.min(MAX_LEN)),
        }
    }

    pub fn array(&self) -> &[i32] {
        &self.array
    }

    /// Refills the buffer with the identity permutation of `len` keys.
    pub fn reset(&mut self, len: usize) {
        debug_assert!(len <= MAX_LEN);
        self.array.clear();
        self.array.extend(0..len as i32);
    }

    pub fn randomize(&mut self) {
        randomize(&mut self.rng, &mut self.array);
    }

    pub fn carve(&mut self, progression: &Progression) {
        progression.carve(&mut self.array);
    }

    /// A key drawn, with replacement, from the first `radius` slots.
    pub fn sample(&mut self, radius: usize) -> i32 {
        let index = next_random_in(&mut self.rng, 0, radius as i32 - 1);
        self.array[index as usize]
    }

    /// Builds and emits one block of `len` keys.
    ///
    /// Inserts come out in reverse slot order. Finds are drawn from the first
    /// `min(subset_size, len)` slots, after a second shuffle unless `last` is set.
    pub fn block<W: Write>(
        &mut self,
        out: &mut W,
        len: usize,
        subset_size: usize,
        last: bool,
    ) -> Result<BlockSummary> {
        self.reset(len);
        self.randomize();
        for progression in adversarial(len).iter() {
            self.carve(progression);
        }

        write::marker(out, len)?;
        for &key in self.array.iter().rev() {
            write::insert(out, key)?;
        }

        if !last {
            self.randomize();
        }

        let radius = subset_size.min(len);
        let iterations = iterations(radius);
        let finds = iterations * radius;
        for _ in 0..finds {
            let key = self.sample(radius);
            write::find(out, key)?;
        }

        debug!(len, radius, iterations, "emitted block");
        Ok(BlockSummary {
            length: len,
            inserts: len,
            finds,
            radius,
            iterations,
        })
    }

    /// Emits one block per length of `schedule`.
    pub fn run<W: Write>(
        &mut self,
        out: &mut W,
        schedule: &Schedule,
        subset_size: usize,
        last: bool,
    ) -> Result<Vec<BlockSummary>> {
        schedule
            .lengths()
            .map(|len| self.block(out, len, subset_size, last))
            .collect()
    }
}

/// The non-adversarial workload: ascending inserts of `1..=n`, then two
/// ascending passes of finds over the lower half. Uses no randomness.
pub fn run_sequential<W: Write>(out: &mut W, schedule: &Schedule) -> Result<Vec<BlockSummary>> {
    let mut blocks = Vec::new();
    for len in schedule.lengths() {
        write::marker(out, len)?;
        for key in 1..=len as i32 {
            write::insert(out, key)?;
        }
        let half = len as i32 / 2;
        for _ in 0..2 {
            for key in 1..=half {
                write::find(out, key)?;
            }
        }
        blocks.push(BlockSummary {
            length: len,
            inserts: len,
            finds: 2 * half as usize,
            radius: half as usize,
            iterations: 2,
        });
    }
    Ok(blocks)
}
