//! Slot table storage, shift search and lookups.
//!
//! # Role
//!
//! [`SlotTable`] keeps two views of the same registrations: the authoritative,
//! insertion-ordered backing store and a fixed 256-entry slot array derived from it.
//! Every write rebuilds the slot array; reads only touch the slot array.
//!
//! # Invariants
//!
//! - After a successful write, every stored key maps to a distinct slot under `shift`,
//!   and that slot holds the key's current value.
//!   - Enforced in: [`SlotTable::rebuild`].
//!   - Tested by: `tests::prop_indices_are_distinct`, `tests::prop_round_trip`.
//! - A failed write leaves the table exactly as it was.
//!   - Enforced in: [`SlotTable::set`], [`SlotTable::try_extend`] (undo log).
//!   - Tested by: `tests::failed_set_rolls_back`, `tests::failed_extend_rolls_back`.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::{SlotKey, SlotTableError};

/// Number of bits of the shifted hash used as the slot index.
pub const SLOT_BITS: u32 = 8;
/// Length of the slot array.
pub const SLOT_COUNT: usize = 1 << SLOT_BITS;
/// Mask applied to the shifted hash.
pub const SLOT_MASK: u32 = (SLOT_COUNT as u32) - 1;
/// Exclusive upper bound of the shift search.
pub const MAX_SHIFT: u32 = u32::BITS;

/// Slot index of `hash` under `shift`.
#[inline]
pub fn slot_index(hash: u32, shift: u32) -> usize {
	((hash >> shift) & SLOT_MASK) as usize
}

/// Lookup table for a small, closed set of keys written once and read many times.
///
/// Reads are a shift, a mask and an array load. Writes rebuild the whole slot array, which
/// costs up to `len * MAX_SHIFT` index computations.
///
/// [`get`](Self::get) does not check that the key was ever set. For such a key it returns
/// whatever occupies the computed slot: another key's value or `None`. Use
/// [`get_checked`](Self::get_checked) when the key set is not known to the caller.
pub struct SlotTable<K, V> {
	source: IndexMap<K, V, FxBuildHasher>,
	slots: Box<[Option<V>]>,
	shift: u32,
}

impl<K, V> SlotTable<K, V>
where
	K: SlotKey,
	V: Clone,
{
	/// Creates an empty table.
	pub fn new() -> Self {
		Self {
			source: IndexMap::with_hasher(FxBuildHasher),
			slots: empty_slots(),
			shift: 0,
		}
	}

	/// Inserts or overwrites `key`, then rebuilds the slot array.
	///
	/// Returns [`SlotTableError::NoUniqueShift`] if the resulting key set cannot be spread
	/// over distinct slots; the table is left unchanged in that case.
	pub fn set(&mut self, key: K, value: V) -> Result<(), SlotTableError> {
		let (index, previous) = self.source.insert_full(key, value);
		if let Err(err) = self.rebuild() {
			self.undo(index, previous);
			return Err(err);
		}
		Ok(())
	}

	/// Inserts every pair and rebuilds once at the end.
	///
	/// On failure the whole batch is undone.
	pub fn try_extend<I>(&mut self, entries: I) -> Result<(), SlotTableError>
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let undo_log: Vec<(usize, Option<V>)> = entries
			.into_iter()
			.map(|(key, value)| self.source.insert_full(key, value))
			.collect();
		if let Err(err) = self.rebuild() {
			for (index, previous) in undo_log.into_iter().rev() {
				self.undo(index, previous);
			}
			return Err(err);
		}
		Ok(())
	}

	/// Returns the value in `key`'s slot.
	#[inline]
	pub fn get(&self, key: &K) -> Option<&V> {
		self.slots[slot_index(key.slot_hash(), self.shift)].as_ref()
	}

	/// Returns the value set for `key`, going through the backing store.
	pub fn get_checked(&self, key: &K) -> Option<&V> {
		self.source.get(key)
	}

	pub fn contains_key(&self, key: &K) -> bool {
		self.source.contains_key(key)
	}

	/// Slot `key` maps to under the current shift.
	#[inline]
	pub fn slot_index(&self, key: &K) -> usize {
		slot_index(key.slot_hash(), self.shift)
	}

	/// Current shift parameter; `0` while the table is empty.
	pub fn shift(&self) -> u32 {
		self.shift
	}

	pub fn len(&self) -> usize {
		self.source.len()
	}

	pub fn is_empty(&self) -> bool {
		self.source.is_empty()
	}

	/// Entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
		self.source.iter()
	}

	pub fn keys(&self) -> impl Iterator<Item = &K> {
		self.source.keys()
	}

	/// Finds the first collision-free shift for the backing store and repopulates the slots.
	fn rebuild(&mut self) -> Result<(), SlotTableError> {
		let hashes: Vec<u32> = self.source.keys().map(SlotKey::slot_hash).collect();
		let Some(shift) = find_shift(&hashes) else {
			tracing::warn!(keys = hashes.len(), "no collision-free slot shift");
			return Err(SlotTableError::NoUniqueShift {
				keys: hashes.len(),
				slots: SLOT_COUNT,
			});
		};

		let mut slots = empty_slots();
		for (&hash, value) in hashes.iter().zip(self.source.values()) {
			slots[slot_index(hash, shift)] = Some(value.clone());
		}
		self.slots = slots;
		self.shift = shift;
		tracing::trace!(keys = hashes.len(), shift, "slot table rebuilt");
		Ok(())
	}

	/// Reverts one `insert_full`. Must be applied newest first.
	fn undo(&mut self, index: usize, previous: Option<V>) {
		match previous {
			Some(value) => self.source[index] = value,
			None => {
				// New keys are appended, so the newest one is always last.
				debug_assert_eq!(index + 1, self.source.len());
				self.source.pop();
			}
		}
	}
}

/// Returns the smallest shift under which every hash lands in its own slot.
pub fn find_shift(hashes: &[u32]) -> Option<u32> {
	if hashes.len() > SLOT_COUNT {
		return None;
	}
	(0..MAX_SHIFT).find(|&shift| {
		let mut occupied = [0u64; SLOT_COUNT / 64];
		hashes.iter().all(|&hash| {
			let index = slot_index(hash, shift);
			let bit = 1u64 << (index % 64);
			let word = &mut occupied[index / 64];
			let fresh = *word & bit == 0;
			*word |= bit;
			fresh
		})
	})
}

fn empty_slots<V>() -> Box<[Option<V>]> {
	std::iter::repeat_with(|| None).take(SLOT_COUNT).collect()
}

impl<K, V> Default for SlotTable<K, V>
where
	K: SlotKey,
	V: Clone,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<K, V> fmt::Debug for SlotTable<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SlotTable")
			.field("len", &self.source.len())
			.field("shift", &self.shift)
			.finish_non_exhaustive()
	}
}
