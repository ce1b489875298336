//! Services wired by assigning fields after default construction.

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct ServiceA;

#[derive(Debug, Default)]
pub struct ServiceB;

#[derive(Debug, Default)]
pub struct ServiceC;

#[derive(Debug, Default)]
pub struct SubObjectA {
	pub service_a: Option<Arc<ServiceA>>,
}

#[derive(Debug, Default)]
pub struct SubObjectB {
	pub service_b: Option<Arc<ServiceB>>,
}

#[derive(Debug, Default)]
pub struct SubObjectC {
	pub service_c: Option<Arc<ServiceC>>,
}

#[derive(Debug, Default)]
pub struct ComplexPropertyObject {
	pub service_a: Option<Arc<ServiceA>>,
	pub service_b: Option<Arc<ServiceB>>,
	pub service_c: Option<Arc<ServiceC>>,
	pub sub_object_a: Option<SubObjectA>,
	pub sub_object_b: Option<SubObjectB>,
	pub sub_object_c: Option<SubObjectC>,
}

impl ComplexPropertyObject {
	/// Returns true once every field has been injected.
	pub fn is_wired(&self) -> bool {
		self.service_a.is_some()
			&& self.service_b.is_some()
			&& self.service_c.is_some()
			&& self.sub_object_a.as_ref().is_some_and(|s| s.service_a.is_some())
			&& self.sub_object_b.as_ref().is_some_and(|s| s.service_b.is_some())
			&& self.sub_object_c.as_ref().is_some_and(|s| s.service_c.is_some())
	}
}
