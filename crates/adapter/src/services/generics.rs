#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenericExport<T> {
	pub value: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportGeneric<T> {
	pub export: GenericExport<T>,
}

impl<T> ImportGeneric<T> {
	pub fn new(export: GenericExport<T>) -> Self {
		Self { export }
	}
}
