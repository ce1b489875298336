//! Baseline adapter with no container behind it.
//!
//! # Role
//!
//! Each service gets a hand-written factory stored in a [`SlotTable`] under its
//! [`ServiceKey`]. Resolution is one slot read plus the factory call,
//! which is the floor every real container is measured against.

use std::sync::Arc;

use iocperf_slot_table::{SlotTable, SlotTableError};

use crate::services::{
	Combined, Complex, ComplexPropertyObject, DummyEight, DummyFive, DummyFour, DummyNine,
	DummyOne, DummySeven, DummySix, DummyTen, DummyThree, DummyTwo, ExportConditionalObject,
	ExportConditionalObject2, FirstService, GenericExport, ImportConditionObject,
	ImportConditionObject2, ImportGeneric, ImportMultiple, SecondService, Service, ServiceA,
	ServiceB, ServiceC, ServiceKey, Singleton, SubObjectA, SubObjectB, SubObjectC, ThirdService,
	Transient, all_simple_adapters,
};
use crate::{AdapterError, AdapterInfo, ContainerAdapter, Factory, Features, Instance};

#[derive(Debug, Default)]
pub struct NoneAdapter {
	table: SlotTable<ServiceKey, Factory>,
}

impl NoneAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of registered services.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// Lookup table backing this adapter.
	pub fn table(&self) -> &SlotTable<ServiceKey, Factory> {
		&self.table
	}

	fn register<T, F>(&mut self, factory: F) -> Result<(), SlotTableError>
	where
		T: Service,
		F: Fn() -> T + Send + Sync + 'static,
	{
		self.table.set(
			T::KEY,
			Arc::new(move || -> Instance { Box::new(factory()) }),
		)
	}

	fn register_dummies(&mut self) -> Result<(), SlotTableError> {
		self.register(|| DummyOne)?;
		self.register(|| DummyTwo)?;
		self.register(|| DummyThree)?;
		self.register(|| DummyFour)?;
		self.register(|| DummyFive)?;
		self.register(|| DummySix)?;
		self.register(|| DummySeven)?;
		self.register(|| DummyEight)?;
		self.register(|| DummyNine)?;
		self.register(|| DummyTen)
	}

	fn register_standard(&mut self) -> Result<(), SlotTableError> {
		let singleton = Arc::new(Singleton);

		let shared = Arc::clone(&singleton);
		self.register(move || Arc::clone(&shared))?;
		self.register(Transient::new)?;
		self.register(move || Combined::new(Arc::clone(&singleton), Transient::new()))
	}

	fn register_complex(&mut self) -> Result<(), SlotTableError> {
		let first = Arc::new(FirstService);
		let second = Arc::new(SecondService);
		let third = Arc::new(ThirdService);

		let shared = Arc::clone(&first);
		self.register(move || Arc::clone(&shared))?;
		let shared = Arc::clone(&second);
		self.register(move || Arc::clone(&shared))?;
		let shared = Arc::clone(&third);
		self.register(move || Arc::clone(&shared))?;
		self.register(move || {
			Complex::new(Arc::clone(&first), Arc::clone(&second), Arc::clone(&third))
		})
	}

	#[allow(clippy::field_reassign_with_default)]
	fn register_property_injection(&mut self) -> Result<(), SlotTableError> {
		let service_a = Arc::new(ServiceA);
		let service_b = Arc::new(ServiceB);
		let service_c = Arc::new(ServiceC);

		self.register(move || {
			let mut object = ComplexPropertyObject::default();
			object.service_a = Some(Arc::clone(&service_a));
			object.service_b = Some(Arc::clone(&service_b));
			object.service_c = Some(Arc::clone(&service_c));
			object.sub_object_a = Some(SubObjectA {
				service_a: Some(Arc::clone(&service_a)),
			});
			object.sub_object_b = Some(SubObjectB {
				service_b: Some(Arc::clone(&service_b)),
			});
			object.sub_object_c = Some(SubObjectC {
				service_c: Some(Arc::clone(&service_c)),
			});
			object
		})
	}

	fn register_generic(&mut self) -> Result<(), SlotTableError> {
		self.register(|| ImportGeneric::<i32>::new(GenericExport::default()))
	}

	fn register_conditional(&mut self) -> Result<(), SlotTableError> {
		self.register(|| ImportConditionObject::new(Box::new(ExportConditionalObject)))?;
		self.register(|| ImportConditionObject2::new(Box::new(ExportConditionalObject2)))
	}

	fn register_multiple(&mut self) -> Result<(), SlotTableError> {
		let adapters = all_simple_adapters();
		self.register(move || ImportMultiple::new(adapters.clone()))
	}
}

impl ContainerAdapter for NoneAdapter {
	fn info(&self) -> AdapterInfo {
		AdapterInfo {
			package_name: "None",
			url: "",
			version: "",
		}
	}

	fn features(&self) -> Features {
		Features::all()
	}

	fn prepare(&mut self) -> Result<(), AdapterError> {
		self.register_dummies()?;
		self.register_standard()?;
		self.register_complex()?;
		self.register_property_injection()?;
		self.register_generic()?;
		self.register_conditional()?;
		self.register_multiple()?;
		tracing::debug!(
			adapter = "None",
			registrations = self.table.len(),
			shift = self.table.shift(),
			"adapter prepared"
		);
		Ok(())
	}

	#[inline]
	fn resolve_instance(&self, key: ServiceKey) -> Option<Instance> {
		self.table.get(&key).map(|factory| factory())
	}
}
