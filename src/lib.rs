//! A bit-level queue/array engine: build ordered sequences of single bits,
//! append bits or fixed-width integers, dequeue from the front, read any
//! position, and convert to/from unsigned integers of 8/16/32/64 bits.
//!
//! ## Introduction
//! Sequences up to 64 bits live in a single machine word (the common case
//! for packing message headers, flags and counters); longer sequences
//! transparently spill into an overflow structure that keeps both ends
//! amortized O(1), so streaming encode/decode traffic never degrades into
//! per-call O(n) shifting. The transition between the two representations
//! is observationally invisible.
//!
//! Two façades wrap the same engine:
//! - [`BitQueue`] — mutable, in-place enqueue/dequeue.
//! - [`BitArray`] — immutable-flavored; combining operations return new
//!   values.
//!
//! Integers enter and leave with an explicit bit count and a
//! [`PackOrder`]: most-significant-bit-first (the wire-format default) or
//! least-significant-bit-first. The order is part of your external
//! contract — a value packed MSB-first reads back correctly only when
//! dequeued MSB-first.
//!
//! # Examples
//! Packing and unpacking a small header:
//! ```rust
//! use bitseq::{BitQueue, PackOrder};
//!
//! let mut msg = BitQueue::new();
//! msg.enqueue_u8(0b101, 3, PackOrder::MsbFirst).unwrap();   // version
//! msg.enqueue(true);                                        // flag
//! msg.enqueue_u16(1234, 12, PackOrder::MsbFirst).unwrap();  // length
//! assert_eq!(msg.len(), 16);
//!
//! assert_eq!(msg.dequeue_u8(3, PackOrder::MsbFirst).unwrap(), 0b101);
//! assert_eq!(msg.dequeue().unwrap(), true);
//! assert_eq!(msg.dequeue_u16(12, PackOrder::MsbFirst).unwrap(), 1234);
//! ```
//!
//! Value-style manipulation with [`BitArray`]:
//! ```rust
//! use bitseq::BitArray;
//!
//! let bits: BitArray = "1010-1100".parse().unwrap();
//! assert_eq!(bits.len(), 8);
//! assert_eq!(bits.get(0).unwrap(), true);
//! assert_eq!(bits.format_with("G").unwrap(), "{10101100}");
//!
//! let (front, rest) = bits.divide(4).unwrap();
//! assert_eq!(front.concat(&rest), bits);
//! ```
//!
//! Sequences longer than one word keep working the same way:
//! ```rust
//! use bitseq::{BitQueue, PackOrder};
//!
//! let mut q = BitQueue::new();
//! for i in 0..100 {
//!     q.enqueue(i % 2 == 0);
//! }
//! assert_eq!(q.len(), 100);
//! assert_eq!(q.get(98).unwrap(), true);
//! assert_eq!(q.dequeue_u8(8, PackOrder::LsbFirst).unwrap(), 0b0101_0101);
//! ```
//!
//! The engine is a single-writer value type: no internal locking, no
//! shared state between clones. Clone a sequence to hand out a stable
//! snapshot.
pub mod array;
pub mod error;
pub mod order;
pub mod queue;
pub mod small;
pub mod spill;
pub mod utils;
pub mod word_queue;

use bitvec::prelude as bv;

/// The bitvec flavor this crate converses in. The engine stores its own
/// words; these aliases are the ecosystem interop type.
pub type SeqBitSlice = bv::BitSlice<u8, bv::Msb0>;
/// owning type that goes with [`SeqBitSlice`]
pub type SeqBitVector = bv::BitVec<u8, bv::Msb0>;

pub use array::BitArray;
pub use error::{Error, Result};
pub use order::PackOrder;
pub use queue::BitQueue;
