use std::sync::Arc;

use iocperf_slot_table::SlotKey;

use super::{
	Combined, Complex, ComplexPropertyObject, DummyEight, DummyFive, DummyFour, DummyNine,
	DummyOne, DummySeven, DummySix, DummyTen, DummyThree, DummyTwo, FirstService,
	ImportConditionObject, ImportConditionObject2, ImportGeneric, ImportMultiple, SecondService,
	Singleton, ThirdService, Transient,
};

/// A type that can be resolved from an adapter, tagged with its registration key.
pub trait Service: Send + 'static {
	const KEY: ServiceKey;
}

macro_rules! service_keys {
	($($key:ident => $ty:ty),* $(,)?) => {
		/// Closed set of services the harness resolves.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		#[repr(u32)]
		pub enum ServiceKey {
			$($key,)*
		}

		impl ServiceKey {
			/// Every key, in declaration order.
			pub const ALL: &'static [ServiceKey] = &[$(ServiceKey::$key,)*];
		}

		$(
			impl Service for $ty {
				const KEY: ServiceKey = ServiceKey::$key;
			}
		)*
	};
}

service_keys! {
	DummyOne => DummyOne,
	DummyTwo => DummyTwo,
	DummyThree => DummyThree,
	DummyFour => DummyFour,
	DummyFive => DummyFive,
	DummySix => DummySix,
	DummySeven => DummySeven,
	DummyEight => DummyEight,
	DummyNine => DummyNine,
	DummyTen => DummyTen,
	Singleton => Arc<Singleton>,
	Transient => Transient,
	Combined => Combined,
	FirstService => Arc<FirstService>,
	SecondService => Arc<SecondService>,
	ThirdService => Arc<ThirdService>,
	Complex => Complex,
	ComplexPropertyObject => ComplexPropertyObject,
	ImportGeneric => ImportGeneric<i32>,
	ImportConditionObject => ImportConditionObject,
	ImportConditionObject2 => ImportConditionObject2,
	ImportMultiple => ImportMultiple,
}

impl SlotKey for ServiceKey {
	#[inline]
	fn slot_hash(&self) -> u32 {
		*self as u32
	}
}
