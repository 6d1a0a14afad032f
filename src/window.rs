/// Live range `[first, last)` of the backing buffer.
///
/// Slots before `first` have already been popped from the front but are still
/// part of the allocation until the next compaction.
/// Every mutation goes through this type so that `first <= last <= capacity`
/// is checked in a single place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
	first: usize,
	last: usize
}

impl Window {
	/// The empty window at the start of the buffer.
	#[inline]
	pub const fn new() -> Self {
		Window {
			first: 0,
			last: 0
		}
	}

	/// Physical index of the first live slot.
	#[inline]
	pub fn first(&self) -> usize {
		self.first
	}

	/// Physical index one past the last live slot.
	#[inline]
	pub fn last(&self) -> usize {
		self.last
	}

	/// Number of live elements.
	#[inline]
	pub fn len(&self) -> usize {
		self.last - self.first
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.first == self.last
	}

	/// Physical index of the logical `index`, if it is live.
	#[inline]
	pub fn physical(&self, index: usize) -> Option<usize> {
		if index < self.len() {
			Some(self.first + index)
		} else {
			None
		}
	}

	/// Extends the window by one slot at the back.
	#[inline]
	pub fn grow_back(&mut self, capacity: usize) {
		assert!(self.last < capacity, "window overflows the buffer");
		self.last += 1
	}

	/// Removes the last live slot from the window.
	#[inline]
	pub fn shrink_back(&mut self) {
		assert!(self.last > self.first, "window is empty");
		self.last -= 1
	}

	/// Removes the first live slot from the window.
	#[inline]
	pub fn shrink_front(&mut self) {
		assert!(self.last > self.first, "window is empty");
		self.first += 1
	}

	/// Moves the end of the window to the logical length `len`.
	#[inline]
	pub fn set_len(&mut self, len: usize, capacity: usize) {
		assert!(self.first <= capacity && len <= capacity - self.first, "window overflows the buffer");
		self.last = self.first + len
	}

	/// Slides the window back to the start of the buffer.
	///
	/// Returns how far it moved.
	#[inline]
	pub fn rewind(&mut self) -> usize {
		let first = self.first;
		self.first = 0;
		self.last -= first;
		first
	}

	/// Resets to the empty window at the start of the buffer.
	#[inline]
	pub fn reset(&mut self) {
		*self = Window::new()
	}
}
