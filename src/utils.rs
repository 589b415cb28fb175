//! Small shared helpers: the low-bit mask table, plus the test-vector
//! builders used by the unit tests, the integration tests and the benches.
use crate::queue::BitQueue;
use crate::SeqBitVector;
use itertools::Itertools;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Number of bits in the storage word.
pub(crate) const WORD_BITS: u32 = u64::BITS;

/// `LOW_MASK[n]` has the `n` low bits set, for every `n` in `0..=64`.
///
/// A table instead of `(1 << n) - 1`, which needs a special case at
/// `n == 64` where the shift leaves the u64 range.
static LOW_MASK: Lazy<[u64; 65]> = Lazy::new(|| {
    let mut masks = [0u64; 65];
    for n in 1..=64 {
        masks[n] = masks[n - 1] << 1 | 1;
    }
    masks
});

/// The `n` low bits set, `n` in `0..=64`.
#[inline]
pub(crate) fn mask(n: u32) -> u64 {
    LOW_MASK[n as usize]
}

/// Turns a 0/1 vector into a bitvec.
/// Handy in tests, where a pattern can be written down bit by bit.
pub fn create_bitvector(bits: Vec<usize>) -> SeqBitVector {
    let mut bv = SeqBitVector::with_capacity(bits.len());
    for b in bits {
        bv.push(b == 1);
    }
    bv
}

/// Generates a random sequence of `n_bits` bits from a seeded rng,
/// as a [`BitQueue`]. Used by the integration tests and benches.
pub fn random_bit_stream(n_bits: usize, seed: u64) -> BitQueue {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut queue = BitQueue::new();
    for _ in 0..n_bits {
        queue.enqueue(rng.gen::<bool>());
    }
    queue
}

/// just for debugging purposes
pub fn bitstream_to_string(bits: impl IntoIterator<Item = bool>) -> String {
    bits.into_iter().map(|b| if b { '1' } else { '0' }).join("")
}
