use std::any::Any;
use std::sync::Arc;

use iocperf_slot_table::SlotTableError;

use crate::services::{Service, ServiceKey};

/// A resolved service, boxed for type-erased transport.
pub type Instance = Box<dyn Any + Send>;

/// Zero-argument producer of one service type.
pub type Factory = Arc<dyn Fn() -> Instance + Send + Sync>;

bitflags::bitflags! {
	/// Optional scenarios an adapter can run.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct Features: u8 {
		/// Different implementations injected depending on the consumer.
		const CONDITIONAL = 1 << 0;
		/// Closed instances of generic registrations.
		const GENERIC = 1 << 1;
		/// Injection of every registered implementation of one contract.
		const MULTIPLE = 1 << 2;
		/// Dependencies assigned to fields after construction.
		const PROPERTY_INJECTION = 1 << 3;
	}
}

/// Identification of the container behind an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterInfo {
	pub package_name: &'static str,
	pub url: &'static str,
	pub version: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
	#[error("registration failed: {0}")]
	Table(#[from] SlotTableError),

	#[error("no registration produces {type_name}")]
	Unresolved { type_name: &'static str },
}

/// Uniform surface the harness uses to drive a container.
pub trait ContainerAdapter {
	fn info(&self) -> AdapterInfo;

	fn features(&self) -> Features {
		Features::empty()
	}

	/// Registers every service of the benchmark graph.
	fn prepare(&mut self) -> Result<(), AdapterError>;

	/// Produces an instance for the service identified by `key`.
	///
	/// Adapters may skip existence checks on this path, so an unregistered key can yield
	/// an instance of another service.
	fn resolve_instance(&self, key: ServiceKey) -> Option<Instance>;

	/// Resolves `T` and checks that the produced instance really is a `T`.
	fn resolve<T: Service>(&self) -> Result<T, AdapterError>
	where
		Self: Sized,
	{
		self.resolve_instance(T::KEY)
			.and_then(|instance| instance.downcast::<T>().ok())
			.map(|instance| *instance)
			.ok_or(AdapterError::Unresolved {
				type_name: std::any::type_name::<T>(),
			})
	}
}
