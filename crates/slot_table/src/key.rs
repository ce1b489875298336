//! Hash projection used to place keys in the slot array.

use std::any::TypeId;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// A key that can be stored in a [`crate::SlotTable`].
///
/// `slot_hash` must be stable for the lifetime of the table: equal keys return equal
/// hashes, and repeated calls on the same key return the same value. Distinct keys may
/// share a hash, but such a pair can never be placed and makes every write fail.
pub trait SlotKey: Eq + Hash {
	fn slot_hash(&self) -> u32;
}

impl SlotKey for u32 {
	#[inline]
	fn slot_hash(&self) -> u32 {
		*self
	}
}

impl SlotKey for u64 {
	#[inline]
	fn slot_hash(&self) -> u32 {
		fold(*self)
	}
}

impl SlotKey for usize {
	#[inline]
	fn slot_hash(&self) -> u32 {
		fold(*self as u64)
	}
}

impl SlotKey for TypeId {
	#[inline]
	fn slot_hash(&self) -> u32 {
		fx_hash(self)
	}
}

impl SlotKey for &'static str {
	#[inline]
	fn slot_hash(&self) -> u32 {
		fx_hash(*self)
	}
}

impl SlotKey for String {
	#[inline]
	fn slot_hash(&self) -> u32 {
		fx_hash(self.as_str())
	}
}

/// Hashes `value` with Fx and folds the result to 32 bits.
pub fn fx_hash<T: Hash + ?Sized>(value: &T) -> u32 {
	let mut hasher = FxHasher::default();
	value.hash(&mut hasher);
	fold(hasher.finish())
}

#[inline]
fn fold(hash: u64) -> u32 {
	(hash ^ (hash >> 32)) as u32
}
