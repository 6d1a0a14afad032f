mod capacity;
mod window;

use std::{
	cell::Cell,
	rc::Rc
};

/// Element counting how many times values sharing its counter were dropped.
#[derive(Debug)]
pub struct Tracked {
	pub value: u32,
	drops: Rc<Cell<usize>>
}

impl Tracked {
	pub fn new(value: u32, drops: &Rc<Cell<usize>>) -> Self {
		Tracked {
			value,
			drops: drops.clone()
		}
	}
}

impl Clone for Tracked {
	fn clone(&self) -> Self {
		Tracked::new(self.value, &self.drops)
	}
}

impl Drop for Tracked {
	fn drop(&mut self) {
		self.drops.set(self.drops.get() + 1)
	}
}

/// Checks that `capacity` is 0 or `floor` times a power of two.
pub fn is_valid_capacity(capacity: usize, floor: usize) -> bool {
	capacity == 0 || (capacity % floor == 0 && (capacity / floor).is_power_of_two())
}
