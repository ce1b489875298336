use std::sync::Arc;

#[derive(Debug, Default)]
pub struct FirstService;

#[derive(Debug, Default)]
pub struct SecondService;

#[derive(Debug, Default)]
pub struct ThirdService;

#[derive(Debug)]
pub struct SubObjectOne {
	pub first: Arc<FirstService>,
}

#[derive(Debug)]
pub struct SubObjectTwo {
	pub second: Arc<SecondService>,
}

#[derive(Debug)]
pub struct SubObjectThree {
	pub third: Arc<ThirdService>,
}

/// Constructor-injected graph: three shared services plus one sub-object per service.
#[derive(Debug)]
pub struct Complex {
	pub first: Arc<FirstService>,
	pub second: Arc<SecondService>,
	pub third: Arc<ThirdService>,
	pub sub_one: SubObjectOne,
	pub sub_two: SubObjectTwo,
	pub sub_three: SubObjectThree,
}

impl Complex {
	pub fn new(
		first: Arc<FirstService>,
		second: Arc<SecondService>,
		third: Arc<ThirdService>,
	) -> Self {
		Self {
			sub_one: SubObjectOne {
				first: Arc::clone(&first),
			},
			sub_two: SubObjectTwo {
				second: Arc::clone(&second),
			},
			sub_three: SubObjectThree {
				third: Arc::clone(&third),
			},
			first,
			second,
			third,
		}
	}
}
