//! One contract, two implementations, chosen by the consumer.

use std::fmt::Debug;

pub trait ExportConditionInterface: Debug + Send {
	fn name(&self) -> &'static str;
}

#[derive(Debug, Default)]
pub struct ExportConditionalObject;

impl ExportConditionInterface for ExportConditionalObject {
	fn name(&self) -> &'static str {
		"ExportConditionalObject"
	}
}

#[derive(Debug, Default)]
pub struct ExportConditionalObject2;

impl ExportConditionInterface for ExportConditionalObject2 {
	fn name(&self) -> &'static str {
		"ExportConditionalObject2"
	}
}

/// Consumer that receives [`ExportConditionalObject`].
#[derive(Debug)]
pub struct ImportConditionObject {
	pub export: Box<dyn ExportConditionInterface>,
}

impl ImportConditionObject {
	pub fn new(export: Box<dyn ExportConditionInterface>) -> Self {
		Self { export }
	}
}

/// Consumer that receives [`ExportConditionalObject2`].
#[derive(Debug)]
pub struct ImportConditionObject2 {
	pub export: Box<dyn ExportConditionInterface>,
}

impl ImportConditionObject2 {
	pub fn new(export: Box<dyn ExportConditionInterface>) -> Self {
		Self { export }
	}
}
