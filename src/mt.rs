//! The 32-bit Mersenne Twister, a.k.a. MT19937.
//!
//! Unlike [`rand::rngs::StdRng`], the algorithm is fixed: a given seed yields
//! the same sequence as any other conforming MT19937, e.g. C++'s
//! `std::mt19937`.
//!
//! > **Note**
//! > MT19937 is _not_ cryptographically secure and does not implement
//! > [`rand::CryptoRng`].
use rand::{Error, RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// the seed used by [`Mt19937::default`]
pub const DEFAULT_SEED: u32 = 5489;

/// a Mersenne Twister engine with a period of $2^{19937} - 1$
#[derive(Clone)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// builds an engine whose state is initialized from a single 32-bit seed
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }

        Self { state, index: N }
    }

    // regenerates the whole block of N words at once
    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    /// the seed is read as a little-endian `u32`
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use rand::{RngCore, SeedableRng};

    use super::{Mt19937, DEFAULT_SEED};

    #[test]
    fn first_output_of_default_seed() {
        assert_eq!(Mt19937::default().next_u32(), 3_499_211_612);
    }

    #[test]
    fn ten_thousandth_output_of_default_seed() {
        let mut rng = Mt19937::default();
        for _ in 0..9_999 {
            rng.next_u32();
        }
        assert_eq!(rng.next_u32(), 4_123_659_995);
    }

    #[test]
    fn from_seed_is_little_endian() {
        let mut a = Mt19937::from_seed(DEFAULT_SEED.to_le_bytes());
        let mut b = Mt19937::new(DEFAULT_SEED);
        for _ in 0..1_000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn u64_is_two_consecutive_words() {
        let mut words = Mt19937::new(42);
        let mut wide = Mt19937::new(42);

        let lo = words.next_u32() as u64;
        let hi = words.next_u32() as u64;
        assert_eq!(wide.next_u64(), lo | (hi << 32));
    }

    #[test]
    fn fill_bytes_with_partial_word() {
        let mut words = Mt19937::new(7);
        let mut bytes = Mt19937::new(7);

        let mut dest = [0u8; 6];
        bytes.fill_bytes(&mut dest);

        let first = words.next_u32().to_le_bytes();
        let second = words.next_u32().to_le_bytes();
        assert_eq!(dest[..4], first);
        assert_eq!(dest[4..], second[..2]);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Mt19937::new(1);
        let mut b = Mt19937::new(2);
        let a = (0..16).map(|_| a.next_u32()).collect::<Vec<_>>();
        let b = (0..16).map(|_| b.next_u32()).collect::<Vec<_>>();
        assert_ne!(a, b);
    }
}
