//! Object graph resolved by every benchmark scenario.
//!
//! Each resolvable type carries a [`ServiceKey`] through [`Service::KEY`]. Shared services
//! are resolved as `Arc<T>`, per-resolve services by value.

mod complex;
mod conditions;
mod dummy;
mod generics;
mod key;
mod multiple;
mod properties;
mod standard;

pub use complex::{
	Complex, FirstService, SecondService, SubObjectOne, SubObjectThree, SubObjectTwo,
	ThirdService,
};
pub use conditions::{
	ExportConditionInterface, ExportConditionalObject, ExportConditionalObject2,
	ImportConditionObject, ImportConditionObject2,
};
pub use dummy::{
	Dummy, DummyEight, DummyFive, DummyFour, DummyNine, DummyOne, DummySeven, DummySix,
	DummyTen, DummyThree, DummyTwo,
};
pub use generics::{GenericExport, ImportGeneric};
pub use key::{Service, ServiceKey};
pub use multiple::{
	ImportMultiple, SimpleAdapter, SimpleAdapterFive, SimpleAdapterFour, SimpleAdapterOne,
	SimpleAdapterThree, SimpleAdapterTwo, all_simple_adapters,
};
pub use properties::{
	ComplexPropertyObject, ServiceA, ServiceB, ServiceC, SubObjectA, SubObjectB, SubObjectC,
};
pub use standard::{Combined, Singleton, Transient};
