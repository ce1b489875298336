use std::fmt::Debug;
use std::sync::Arc;

pub trait SimpleAdapter: Debug + Send + Sync {
	fn name(&self) -> &'static str;
}

macro_rules! simple_adapters {
	($($name:ident),* $(,)?) => {
		$(
			#[derive(Debug, Default)]
			pub struct $name;

			impl SimpleAdapter for $name {
				fn name(&self) -> &'static str {
					stringify!($name)
				}
			}
		)*
	};
}

simple_adapters!(
	SimpleAdapterOne,
	SimpleAdapterTwo,
	SimpleAdapterThree,
	SimpleAdapterFour,
	SimpleAdapterFive,
);

/// Every [`SimpleAdapter`] implementation, in declaration order.
pub fn all_simple_adapters() -> Vec<Arc<dyn SimpleAdapter>> {
	vec![
		Arc::new(SimpleAdapterOne),
		Arc::new(SimpleAdapterTwo),
		Arc::new(SimpleAdapterThree),
		Arc::new(SimpleAdapterFour),
		Arc::new(SimpleAdapterFive),
	]
}

#[derive(Debug)]
pub struct ImportMultiple {
	pub adapters: Vec<Arc<dyn SimpleAdapter>>,
}

impl ImportMultiple {
	pub fn new(adapters: Vec<Arc<dyn SimpleAdapter>>) -> Self {
		Self { adapters }
	}
}
