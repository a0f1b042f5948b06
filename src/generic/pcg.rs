/*!
A simple pseudorandom number generator.

A PCG32 (XSH-RR) generator implemented against the [rand_core] traits, kept
in the library so every [context](crate::context) owns an explicit,
independently seeded stream rather than drawing from process-global state.

PCG was chosen as the source of (pseudo)random numbers as it is simple,
fast, and has some nice supporting documentation at
<https://www.pcg-random.org/>.

Seeding derives both the state and the stream increment from the eight seed
bytes, so distinct seeds diverge from the first output onwards.
*/

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// Mixing constant used to spread seed bits into the stream increment.
const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// State and increment.
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let base = u64::from_le_bytes(seed);

        // The increment must be odd for the generator to achieve full period.
        let mut pcg = Self {
            state: 0,
            inc: ((base ^ STREAM_MIX) << 1) | 1,
        };
        pcg.state = base.wrapping_add(pcg.inc);
        pcg.next_u32();
        pcg
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_stream() {
        let mut first = Pcg32::seed_from_u64(73);
        let mut second = Pcg32::seed_from_u64(73);
        for _ in 0..32 {
            assert_eq!(first.next_u32(), second.next_u32());
        }
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut first = Pcg32::seed_from_u64(2);
        let mut second = Pcg32::seed_from_u64(3);
        let first_stream = (0..8).map(|_| first.next_u32()).collect::<Vec<_>>();
        let second_stream = (0..8).map(|_| second.next_u32()).collect::<Vec<_>>();
        assert_ne!(first_stream, second_stream);
    }

    #[test]
    fn range_bounds() {
        let mut pcg = Pcg32::seed_from_u64(97);
        for _ in 0..512 {
            let sample: usize = pcg.gen_range(0..7);
            assert!(sample < 7);
        }
    }
}
