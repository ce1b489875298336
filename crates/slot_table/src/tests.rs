use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use crate::{SLOT_COUNT, SlotKey, SlotTable, SlotTableError, find_shift, slot_index};

fn assert_collision_free<K: SlotKey, V: Clone>(table: &SlotTable<K, V>) {
	let indices: HashSet<usize> = table.keys().map(|key| table.slot_index(key)).collect();
	assert_eq!(indices.len(), table.len());
}

#[test]
fn test_empty_table() {
	let table = SlotTable::<u32, &str>::new();
	assert!(table.is_empty());
	assert_eq!(table.shift(), 0);
	assert_eq!(table.get(&7), None);
	assert_eq!(table.get_checked(&7), None);
}

#[test]
fn test_set_then_get() {
	let mut table = SlotTable::new();
	table.set(3u32, "three").unwrap();
	table.set(5u32, "five").unwrap();

	assert_eq!(table.get(&3), Some(&"three"));
	assert_eq!(table.get(&5), Some(&"five"));
	assert_eq!(table.len(), 2);
	assert!(table.contains_key(&3));
	assert!(!table.contains_key(&4));
}

#[test]
fn test_overwrite_keeps_last_value() {
	let mut table = SlotTable::new();
	table.set(42u32, 1).unwrap();
	table.set(42u32, 2).unwrap();

	assert_eq!(table.get(&42), Some(&2));
	assert_eq!(table.get_checked(&42), Some(&2));
	assert_eq!(table.len(), 1);
}

#[test]
fn test_overwrite_keeps_insertion_position() {
	let mut table = SlotTable::new();
	table.set(1u32, 'a').unwrap();
	table.set(2u32, 'b').unwrap();
	table.set(1u32, 'c').unwrap();

	let entries: Vec<_> = table.iter().map(|(k, v)| (*k, *v)).collect();
	assert_eq!(entries, vec![(1, 'c'), (2, 'b')]);
}

#[test]
fn test_selects_first_separating_shift() {
	let mut table = SlotTable::new();
	table.set(0u32, 'a').unwrap();
	table.set(256u32, 'b').unwrap();

	// Shift 0 puts both keys in slot 0.
	assert_eq!(table.shift(), 1);
	assert_eq!(table.slot_index(&0), 0);
	assert_eq!(table.slot_index(&256), 128);
	assert_eq!(table.get(&0), Some(&'a'));
	assert_eq!(table.get(&256), Some(&'b'));
}

#[test]
fn test_high_bit_keys_need_large_shift() {
	let mut table = SlotTable::new();
	table.set(0u32, 'a').unwrap();
	table.set(0x8000_0000u32, 'b').unwrap();

	// The keys only differ in bit 31, which enters the mask at shift 24.
	assert_eq!(table.shift(), 24);
	assert_eq!(table.get(&0), Some(&'a'));
	assert_eq!(table.get(&0x8000_0000), Some(&'b'));
}

#[test]
fn test_shift_follows_current_key_set() {
	let mut table = SlotTable::new();
	table.set(1u32, 'a').unwrap();
	table.set(2u32, 'b').unwrap();
	assert_eq!(table.shift(), 0);

	table.set(257u32, 'c').unwrap();
	assert_ne!(table.shift(), 0);
	assert_collision_free(&table);
	for (key, value) in [(1, 'a'), (2, 'b'), (257, 'c')] {
		assert_eq!(table.get(&key), Some(&value));
	}
}

#[test]
fn test_find_shift() {
	assert_eq!(find_shift(&[]), Some(0));
	assert_eq!(find_shift(&[0, 1, 2]), Some(0));
	assert_eq!(find_shift(&[0, 256]), Some(1));
	assert_eq!(find_shift(&[7, 7]), None);

	let full: Vec<u32> = (0..SLOT_COUNT as u32).collect();
	assert_eq!(find_shift(&full), Some(0));
	let over: Vec<u32> = (0..=SLOT_COUNT as u32).collect();
	assert_eq!(find_shift(&over), None);
}

#[test]
fn test_more_keys_than_slots_fails() {
	let mut table = SlotTable::new();
	for key in 0..SLOT_COUNT as u32 {
		table.set(key, key).unwrap();
	}
	assert_eq!(table.shift(), 0);

	let err = table.set(SLOT_COUNT as u32, 0).unwrap_err();
	assert_eq!(
		err,
		SlotTableError::NoUniqueShift {
			keys: SLOT_COUNT + 1,
			slots: SLOT_COUNT,
		}
	);
	assert_eq!(table.len(), SLOT_COUNT);
	assert_eq!(table.get(&255), Some(&255));
}

#[test]
fn test_equal_hashes_fail() {
	let low = 1u64;
	let high = 1u64 << 32;
	assert_eq!(low.slot_hash(), high.slot_hash());

	let mut table = SlotTable::new();
	table.set(low, "low").unwrap();
	let err = table.set(high, "high").unwrap_err();
	assert!(matches!(err, SlotTableError::NoUniqueShift { keys: 2, .. }));
	assert!(
		err.to_string()
			.starts_with("cannot find a shift parameter yielding unique indices")
	);
}

#[test]
fn failed_set_rolls_back() {
	let low = 1u64;
	let high = 1u64 << 32;

	let mut table = SlotTable::new();
	table.set(low, "low").unwrap();
	table.set(9u64, "nine").unwrap();
	let shift = table.shift();

	assert!(table.set(high, "high").is_err());
	assert_eq!(table.len(), 2);
	assert_eq!(table.shift(), shift);
	assert!(!table.contains_key(&high));
	assert_eq!(table.get(&low), Some(&"low"));
	assert_eq!(table.get(&9), Some(&"nine"));
}

#[test]
fn test_try_extend_rebuilds_once() {
	let mut table = SlotTable::new();
	table
		.try_extend([(0u32, 'a'), (256, 'b'), (512, 'c')])
		.unwrap();

	assert_eq!(table.len(), 3);
	assert_collision_free(&table);
	assert_eq!(table.get(&0), Some(&'a'));
	assert_eq!(table.get(&256), Some(&'b'));
	assert_eq!(table.get(&512), Some(&'c'));
}

#[test]
fn failed_extend_rolls_back() {
	let mut table = SlotTable::new();
	table.set(1u64, "a").unwrap();

	let result = table.try_extend([(1u64, "b"), (2, "c"), (2, "d"), (1 << 32, "e")]);
	assert!(result.is_err());
	assert_eq!(table.len(), 1);
	assert_eq!(table.get(&1), Some(&"a"));
	assert_eq!(table.get_checked(&1), Some(&"a"));
	assert_eq!(table.get_checked(&2), None);
}

#[test]
fn test_unset_key_reads_shared_slot() {
	let mut table = SlotTable::new();
	table.set(0u32, "zero").unwrap();

	// 256 was never set but lands in the same slot as 0.
	assert_eq!(table.get(&256), Some(&"zero"));
	assert_eq!(table.get_checked(&256), None);
	// An empty slot reads as nothing.
	assert_eq!(table.get(&1), None);
}

#[test]
fn test_repeated_reads_are_identical() {
	let mut table = SlotTable::new();
	table.set("alpha", Arc::new(1)).unwrap();

	let first = table.get(&"alpha").unwrap();
	for _ in 0..16 {
		assert!(Arc::ptr_eq(first, table.get(&"alpha").unwrap()));
	}
}

#[test]
fn test_ten_factories_end_to_end() {
	type Factory = Arc<dyn Fn() -> u32 + Send + Sync>;

	let mut table: SlotTable<u32, Factory> = SlotTable::new();
	for n in 1..=10u32 {
		table.set(n << 12, Arc::new(move || n)).unwrap();
	}
	// Low bits are all zero; shift 8 is the first that separates 1..=10.
	assert_eq!(table.shift(), 8);

	for n in [7u32, 2, 10, 1, 5, 9, 3, 8, 4, 6] {
		let factory = table.get(&(n << 12)).unwrap();
		assert_eq!(factory(), n);
	}
}

#[test]
fn test_table_is_send_sync() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<SlotTable<u32, Arc<dyn Fn() -> u32 + Send + Sync>>>();
	assert_send_sync::<SlotTable<std::any::TypeId, Arc<str>>>();
}

#[test]
fn test_concurrent_reads() {
	let mut table = SlotTable::new();
	for n in 1..=10u32 {
		table.set(n << 12, n).unwrap();
	}

	std::thread::scope(|scope| {
		for _ in 0..4 {
			scope.spawn(|| {
				for _ in 0..1_000 {
					for n in 1..=10u32 {
						assert_eq!(table.get(&(n << 12)), Some(&n));
					}
				}
			});
		}
	});
}

#[test]
fn test_debug_hides_slots() {
	let mut table = SlotTable::new();
	table.set(0u32, "zero").unwrap();
	assert_eq!(format!("{table:?}"), "SlotTable { len: 1, shift: 0, .. }");
}

#[test]
fn test_slot_index() {
	assert_eq!(slot_index(0x1234_5678, 0), 0x78);
	assert_eq!(slot_index(0x1234_5678, 8), 0x56);
	assert_eq!(slot_index(0x1234_5678, 28), 0x01);
	assert_eq!(slot_index(u32::MAX, 31), 1);
}

#[test]
fn test_string_keys_match_str_keys() {
	assert_eq!("IDummyOne".slot_hash(), String::from("IDummyOne").slot_hash());
}

proptest! {
	#[test]
	fn prop_round_trip(keys in prop::collection::hash_set(any::<u32>(), 1..=50)) {
		let mut table = SlotTable::new();
		let mut stored = Vec::new();
		for (i, key) in keys.into_iter().enumerate() {
			// Keys that leave no collision-free shift are rejected and not stored.
			if table.set(key, i).is_ok() {
				stored.push((key, i));
			}
		}

		prop_assert_eq!(table.len(), stored.len());
		for (key, i) in &stored {
			prop_assert_eq!(table.get(key), Some(i));
		}
	}

	#[test]
	fn prop_indices_are_distinct(keys in prop::collection::vec(any::<u32>(), 1..=50)) {
		let mut table = SlotTable::new();
		for key in keys {
			let before = table.len();
			let shift = table.shift();
			match table.set(key, key) {
				Ok(()) => {
					let indices: HashSet<usize> =
						table.keys().map(|k| table.slot_index(k)).collect();
					prop_assert_eq!(indices.len(), table.len());
					for k in table.keys() {
						prop_assert_eq!(table.get(k), Some(k));
					}
				}
				Err(SlotTableError::NoUniqueShift { .. }) => {
					prop_assert_eq!(table.len(), before);
					prop_assert_eq!(table.shift(), shift);
				}
			}
		}
	}
}
