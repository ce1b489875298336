#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Type-keyed lookup table for small, closed key sets.
//!
//! # Purpose
//!
//! Resolution hot paths look up a factory by type many millions of times, while the set
//! of types is fixed during warm-up. [`SlotTable`] trades an expensive write for a read
//! that is one shift, one mask and one array load, with no probing and no equality check.
//!
//! # Mental Model
//!
//! 1. **Write:** [`SlotTable::set`] records the pair in an insertion-ordered backing store.
//! 2. **Remap:** the table searches shifts `0..32` for the first one under which
//!    `(hash >> shift) & 0xFF` is distinct for every stored key, then copies each value
//!    into its slot of a fresh 256-entry array.
//! 3. **Read:** [`SlotTable::get`] recomputes the slot for the key and returns its content.
//!
//! # Concurrency
//!
//! Writes take `&mut self` and reads take `&self`, so the single-writer, many-readers
//! discipline is checked by the compiler. A shared table is safe to read from any thread.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`SlotTable`] | Backing store plus derived slot array. |
//! | [`SlotKey`] | Stable 32-bit hash projection of a key. |
//! | [`SlotTableError`] | Raised when no shift separates the keys. |

mod error;
mod key;
mod table;

pub use error::SlotTableError;
pub use key::{SlotKey, fx_hash};
pub use table::{MAX_SHIFT, SLOT_BITS, SLOT_COUNT, SLOT_MASK, SlotTable, find_shift, slot_index};

#[cfg(test)]
mod tests;
