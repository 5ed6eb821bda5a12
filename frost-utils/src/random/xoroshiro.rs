//! The Xoroshiro128++ generator.

use crate::random::{PositionalRandom, Random, RandomSource, RandomSplitter, get_seed};

/// Xoroshiro128++, the generator modern world generation seeds from.
pub struct Xoroshiro {
    seed_lo: u64,
    seed_hi: u64,
}

/// Derives [`Xoroshiro`] generators from positions.
pub struct XoroshiroSplitter {
    seed_lo: u64,
    seed_hi: u64,
}

// Ratios used in the mix functions
const GOLDEN_RATIO_64: u64 = 0x9E37_79B9_7F4A_7C15;
const SILVER_RATIO_64: u64 = 0x6A09_E667_F3BC_C909;

impl Xoroshiro {
    /// Creates a generator from a 64 bit seed, mixing it into 128 bits of state.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let (lo, hi) = Self::upgrade_seed_to_128_bit(seed);
        let lo = mix_stafford_13(lo);
        let hi = mix_stafford_13(hi);
        Self::new(lo, hi)
    }

    fn new(lo: u64, hi: u64) -> Self {
        // An all zero state would only ever produce zeros.
        let (lo, hi) = if (lo | hi) == 0 {
            (GOLDEN_RATIO_64, SILVER_RATIO_64)
        } else {
            (lo, hi)
        };
        Self {
            seed_lo: lo,
            seed_hi: hi,
        }
    }

    fn upgrade_seed_to_128_bit(seed: u64) -> (u64, u64) {
        let lo = seed ^ SILVER_RATIO_64;
        let hi = lo.wrapping_add(GOLDEN_RATIO_64);
        (lo, hi)
    }

    fn next_random(&mut self) -> u64 {
        let l = self.seed_lo;
        let m = self.seed_hi;
        let n = l.wrapping_add(m).rotate_left(17).wrapping_add(l);
        let m = m ^ l;
        self.seed_lo = l.rotate_left(49) ^ m ^ (m << 21);
        self.seed_hi = m.rotate_left(28);
        n
    }
}

fn mix_stafford_13(z: u64) -> u64 {
    let z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl Random for Xoroshiro {
    fn fork(&mut self) -> Self {
        Self::new(self.next_random(), self.next_random())
    }

    fn next_i32(&mut self) -> i32 {
        self.next_random() as i32
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");
        // Lemire's multiply-shift with rejection of the biased low range.
        let bound = bound as u64;
        let mut m = (self.next_i32() as u64 & 0xFFFF_FFFF).wrapping_mul(bound);
        if m & 0xFFFF_FFFF < bound {
            let threshold = (bound.wrapping_neg() & 0xFFFF_FFFF) % bound;
            while m & 0xFFFF_FFFF < threshold {
                m = (self.next_i32() as u64 & 0xFFFF_FFFF).wrapping_mul(bound);
            }
        }
        (m >> 32) as i32
    }

    fn next_i64(&mut self) -> i64 {
        self.next_random() as i64
    }

    fn next_positional(&mut self) -> RandomSplitter {
        RandomSplitter::Xoroshiro(XoroshiroSplitter {
            seed_lo: self.next_random(),
            seed_hi: self.next_random(),
        })
    }
}

impl PositionalRandom for XoroshiroSplitter {
    fn at(&self, x: i32, y: i32, z: i32) -> RandomSource {
        let l = get_seed(x, y, z) as u64;
        RandomSource::Xoroshiro(Xoroshiro::new(l ^ self.seed_lo, self.seed_hi))
    }

    fn with_seed(&self, seed: u64) -> RandomSource {
        RandomSource::Xoroshiro(Xoroshiro::new(seed ^ self.seed_lo, seed ^ self.seed_hi))
    }
}
