//! Overflow storage for bit sequences longer than one word.
//!
//! [`SpillBuf`] holds bits in three regions, oldest first: a partial `head`
//! word, a [`WordQueue`] of full 64-bit words, and a partial `tail` word.
//! Enqueued bits land in the tail, which is flushed onto the queue whenever
//! it saturates; dequeued bits come out of the head, which is refilled one
//! full word at a time. No call ever shifts more than one word's worth of
//! bits, which is what keeps sustained enqueue-then-dequeue traffic
//! amortized O(1) per operation instead of O(n).
use crate::error::{Error, Result};
use crate::utils::{mask, WORD_BITS};
use crate::word_queue::WordQueue;

/// Bits that no longer fit the inline word of
/// [`SmallBits`](crate::small::SmallBits).
///
/// Region invariants, restored after every mutating call:
/// * `head_len` and `tail_len` stay below 64; bits above a region's length
///   are zero.
/// * If head and queue are both empty, any bits live in the head, never
///   the tail — single-region content is always addressed through `head`.
#[derive(Debug, Clone, Default)]
pub struct SpillBuf {
    head: u64,
    head_len: u32,
    words: WordQueue<u64>,
    tail: u64,
    tail_len: u32,
}

impl SpillBuf {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of bits across all three regions.
    pub fn len(&self) -> usize {
        self.head_len as usize + self.words.len() * WORD_BITS as usize + self.tail_len as usize
    }

    /// True if no bits are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `bit_count` bits, consumed from the low end of `bits`.
    ///
    /// The bits fill the tail up to 64; a saturated tail is pushed onto the
    /// word queue and the remainder restarts an empty tail. At most one
    /// queue push per call.
    pub fn enqueue(&mut self, bits: u64, bit_count: u32) {
        debug_assert!((1..=WORD_BITS).contains(&bit_count));
        let bits = bits & mask(bit_count);
        let room = WORD_BITS - self.tail_len;
        if bit_count < room {
            self.tail |= bits << self.tail_len;
            self.tail_len += bit_count;
        } else {
            self.tail |= (bits & mask(room)) << self.tail_len;
            self.words.push(self.tail);
            self.tail = bits.checked_shr(room).unwrap_or(0);
            self.tail_len = bit_count - room;
        }
        self.normalize();
        self.debug_check();
    }

    /// Removes the oldest `bit_count` bits, returned right-aligned in the
    /// low bits of the result.
    ///
    /// Bits drain out of the head; an exhausted head refills with the next
    /// full word from the queue, or with the migrated tail once the queue
    /// runs dry. Check [`len`](Self::len) first: fewer than `bit_count`
    /// stored bits is an error.
    pub fn dequeue(&mut self, bit_count: u32) -> Result<u64> {
        debug_assert!((1..=WORD_BITS).contains(&bit_count));
        let available = self.len();
        if bit_count as usize > available {
            return Err(Error::NotEnoughBits {
                requested: bit_count as usize,
                available,
            });
        }
        let mut out = 0u64;
        let mut got = 0u32;
        while got < bit_count {
            if self.head_len == 0 {
                self.refill_head();
            }
            let take = (bit_count - got).min(self.head_len);
            out |= (self.head & mask(take)) << got;
            self.head = self.head.checked_shr(take).unwrap_or(0);
            self.head_len -= take;
            got += take;
        }
        self.normalize();
        self.debug_check();
        Ok(out)
    }

    /// The bit at position `index` (0 = oldest).
    ///
    /// O(1): the index lands in exactly one of the three regions.
    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.bit_at(index))
    }

    /// Unchecked positional read; `index` must be below `len()`.
    pub(crate) fn bit_at(&self, index: usize) -> bool {
        let head_len = self.head_len as usize;
        let queued = self.words.len() * WORD_BITS as usize;
        if index < head_len {
            (self.head >> index) & 1 == 1
        } else if index < head_len + queued {
            let rel = index - head_len;
            let word = self.words[rel / WORD_BITS as usize];
            (word >> (rel % WORD_BITS as usize)) & 1 == 1
        } else {
            let rel = index - head_len - queued;
            (self.tail >> rel) & 1 == 1
        }
    }

    /// Walks head, queued words and tail in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.bit_at(i))
    }

    /// Moves the next full word (or the tail, once the queue is empty)
    /// into the exhausted head.
    fn refill_head(&mut self) {
        debug_assert_eq!(self.head_len, 0);
        match self.words.pop() {
            Ok(word) => {
                self.head = word;
                self.head_len = WORD_BITS;
            }
            Err(_) => {
                // everything left lives in the tail
                self.head = self.tail;
                self.head_len = self.tail_len;
                self.tail = 0;
                self.tail_len = 0;
            }
        }
    }

    /// Restores the single-region invariant: content sitting only in the
    /// tail migrates to the head.
    fn normalize(&mut self) {
        if self.head_len == 0 && self.words.is_empty() && self.tail_len > 0 {
            self.head = self.tail;
            self.head_len = self.tail_len;
            self.tail = 0;
            self.tail_len = 0;
        }
    }

    fn debug_check(&self) {
        debug_assert!(self.head_len < WORD_BITS && self.tail_len < WORD_BITS);
        debug_assert_eq!(self.head & !mask(self.head_len), 0);
        debug_assert_eq!(self.tail & !mask(self.tail_len), 0);
        // normalized: bits never sit only in the tail
        debug_assert!(
            self.head_len > 0 || !self.words.is_empty() || self.tail_len == 0
        );
    }
}

/// Content equality. Two buffers holding the same bits compare equal even
/// when their operation histories left them with different head/tail
/// splits.
impl PartialEq for SpillBuf {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for SpillBuf {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_region_lives_in_the_head() {
        let mut buf = SpillBuf::new();
        buf.enqueue(0b10110, 5);
        assert_eq!(buf.len(), 5);
        // sequence order: low bit first
        assert_eq!(buf.get(0), Ok(false));
        assert_eq!(buf.get(1), Ok(true));
        assert_eq!(buf.get(2), Ok(true));
        assert_eq!(buf.get(3), Ok(false));
        assert_eq!(buf.get(4), Ok(true));
        assert_eq!(buf.get(5), Err(Error::IndexOutOfRange { index: 5, len: 5 }));
    }

    #[test]
    fn tail_flushes_into_the_queue() {
        let mut buf = SpillBuf::new();
        // 3 x 30 bits crosses the word boundary once
        buf.enqueue(mask(30), 30);
        buf.enqueue(0, 30);
        buf.enqueue(mask(30), 30);
        assert_eq!(buf.len(), 90);
        for i in 0..90 {
            let expected = !(30..60).contains(&i);
            assert_eq!(buf.bit_at(i), expected, "bit {i}");
        }
    }

    #[test]
    fn dequeue_refills_from_the_queue() {
        let mut buf = SpillBuf::new();
        for chunk in 0..4 {
            let bits = if chunk % 2 == 0 { mask(40) } else { 0 };
            buf.enqueue(bits, 40);
        }
        assert_eq!(buf.len(), 160);
        assert_eq!(buf.dequeue(40), Ok(mask(40)));
        assert_eq!(buf.dequeue(40), Ok(0));
        assert_eq!(buf.dequeue(40), Ok(mask(40)));
        assert_eq!(buf.dequeue(40), Ok(0));
        assert!(buf.is_empty());
    }

    #[test]
    fn dequeue_straddles_regions() {
        let mut buf = SpillBuf::new();
        buf.enqueue(u64::MAX, 64);
        buf.enqueue(0b101, 3);
        // 67 bits total: a full word in the queue, 3 bits in the tail
        assert_eq!(buf.dequeue(64), Ok(u64::MAX));
        assert_eq!(buf.dequeue(2), Ok(0b01));
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.dequeue(1), Ok(1));
    }

    #[test]
    fn dequeue_needs_enough_bits() {
        let mut buf = SpillBuf::new();
        buf.enqueue(0b11, 2);
        assert_eq!(
            buf.dequeue(3),
            Err(Error::NotEnoughBits {
                requested: 3,
                available: 2
            })
        );
        // the failed call left the buffer untouched
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.dequeue(2), Ok(0b11));
    }

    #[test]
    fn equal_content_different_histories() {
        // a: built by pure enqueues
        let mut a = SpillBuf::new();
        a.enqueue(u64::MAX, 64);
        a.enqueue(mask(6), 6);

        // b: built larger, then dequeued down to the same 70 ones
        let mut b = SpillBuf::new();
        for _ in 0..4 {
            b.enqueue(u64::MAX, 20);
        }
        b.dequeue(10).unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a, b);

        let mut c = SpillBuf::new();
        c.enqueue(u64::MAX, 64);
        c.enqueue(mask(5), 6); // one zero bit at the end
        assert_ne!(a, c);
    }

    #[test]
    fn iteration_walks_all_regions_in_order() {
        let mut buf = SpillBuf::new();
        buf.enqueue(0b1, 1);
        buf.enqueue(0, 64);
        buf.enqueue(0b1, 2);
        let bits: Vec<bool> = buf.iter().collect();
        assert_eq!(bits.len(), 67);
        assert!(bits[0]);
        assert!(bits[65]);
        assert!(!bits[66]);
        assert!(bits[1..65].iter().all(|&b| !b));
    }
}
