/// Trivial service with no dependencies, numbered 1 to 10.
pub trait Dummy {
	fn number(&self) -> u8;
}

macro_rules! dummies {
	($($name:ident = $number:literal),* $(,)?) => {
		$(
			#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
			pub struct $name;

			impl Dummy for $name {
				fn number(&self) -> u8 {
					$number
				}
			}
		)*
	};
}

dummies! {
	DummyOne = 1,
	DummyTwo = 2,
	DummyThree = 3,
	DummyFour = 4,
	DummyFive = 5,
	DummySix = 6,
	DummySeven = 7,
	DummyEight = 8,
	DummyNine = 9,
	DummyTen = 10,
}
