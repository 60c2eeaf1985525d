// Reimplementations of the two C library `rand()` generators workloads are
// historically produced with. The platform `rand()` differs between C runtimes,
// so both are carried here to keep output byte-identical for a given seed.

use core::fmt;
use rand_core::{impls, Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

// Multiplier and increment of the Microsoft C runtime LCG.
const MSVC_MULTIPLIER: u32 = 214013;
const MSVC_INCREMENT: u32 = 2531011;

// glibc TYPE_3: x**31 + x**3 + 1, seeded with the Park-Miller "minimal standard" LCG.
const GLIBC_DEGREE: usize = 31;
const GLIBC_SEPARATION: usize = 3;
const GLIBC_DISCARD: usize = 310;
const PARK_MILLER_MODULUS: i64 = 2147483647;

/// Which C runtime's `rand()` drives the workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Msvc,
    Glibc,
}

impl Default for Flavor {
    fn default() -> Self {
        Flavor::Msvc
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Flavor::Msvc => write!(f, "msvc"),
            Flavor::Glibc => write!(f, "glibc"),
        }
    }
}

/// The Microsoft C runtime `rand()`.
///
/// A 32-bit LCG whose output is bits 16..30 of the state, so every value
/// lies in `0..=32767`.
#[derive(Clone, PartialEq, Eq)]
pub struct MsvcRand {
    state: u32,
}

impl MsvcRand {
    pub const RAND_MAX: u32 = 0x7fff;

    /// Equivalent to `srand(seed)`.
    pub fn new(seed: u32) -> Self {
        MsvcRand { state: seed }
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MSVC_MULTIPLIER)
            .wrapping_add(MSVC_INCREMENT);
    }
}

impl fmt::Debug for MsvcRand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MsvcRand {{}}")
    }
}

impl RngCore for MsvcRand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.step();
        (self.state >> 16) & Self::RAND_MAX
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MsvcRand {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        MsvcRand::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        MsvcRand::new(state as u32)
    }
}

/// The glibc `rand()` with its default TYPE_3 state.
///
/// An additive lagged Fibonacci generator, `r[i] = r[i-31] + r[i-3]`, whose
/// output drops the low bit, so every value lies in `0..=2^31-1`.
#[derive(Clone, PartialEq, Eq)]
pub struct GlibcRand {
    table: [u32; GLIBC_DEGREE],
    // Index of r[i-31], the oldest entry.
    front: usize,
}

impl GlibcRand {
    pub const RAND_MAX: u32 = 0x7fff_ffff;

    /// Equivalent to `srand(seed)`.
    pub fn new(seed: u32) -> Self {
        // srand(0) is documented to behave like srand(1).
        let seed = if seed == 0 { 1 } else { seed };

        let mut r = [0i64; GLIBC_DEGREE + GLIBC_SEPARATION];
        r[0] = seed as i32 as i64;
        for i in 1..GLIBC_DEGREE {
            // Schrage's method, as the C code does it to stay within 32 bits.
            let hi = r[i - 1] / 127773;
            let lo = r[i - 1] % 127773;
            let mut word = 16807 * lo - 2836 * hi;
            if word < 0 {
                word += PARK_MILLER_MODULUS;
            }
            r[i] = word;
        }
        for i in GLIBC_DEGREE..GLIBC_DEGREE + GLIBC_SEPARATION {
            r[i] = r[i - GLIBC_DEGREE];
        }

        let mut table = [0u32; GLIBC_DEGREE];
        for (slot, value) in table.iter_mut().zip(&r[GLIBC_SEPARATION..]) {
            *slot = *value as u32;
        }

        let mut rng = GlibcRand { table, front: 0 };
        for _ in 0..GLIBC_DISCARD {
            rng.step();
        }
        rng
    }

    #[inline]
    fn step(&mut self) -> u32 {
        let lag = (self.front + GLIBC_DEGREE - GLIBC_SEPARATION) % GLIBC_DEGREE;
        let next = self.table[self.front].wrapping_add(self.table[lag]);
        self.table[self.front] = next;
        self.front = (self.front + 1) % GLIBC_DEGREE;
        next
    }
}

impl fmt::Debug for GlibcRand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GlibcRand {{}}")
    }
}

impl RngCore for GlibcRand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.step() >> 1
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for GlibcRand {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        GlibcRand::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        GlibcRand::new(state as u32)
    }
}
