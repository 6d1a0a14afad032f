use core::{
	fmt,
	iter::FusedIterator,
	marker::PhantomData,
	mem::{
		self,
		MaybeUninit
	},
	ops::{
		Index,
		IndexMut
	},
	slice
};
use crate::{
	error::VecError,
	raw::{
		self,
		RawSlideVec
	},
	window::Window
};

/// Ownership mode of the elements of a [`SlideVec`].
///
/// The mode decides what a slot of the backing array is, and how values are
/// moved in and out of it.
/// This crate provides two implementations of this trait:
/// [`ByValue`](crate::by_value::ByValue) stores the elements themselves in the array,
/// [`ByRef`](crate::by_ref::ByRef) stores a pointer per slot, each to its own
/// allocation.
///
/// ## Safety
///
/// A slot passed to `write` must not hold a live value.
/// A slot passed to `read`, `get`, `get_mut` or `drop_in_place` must hold one.
/// After `read` or `drop_in_place` the slot no longer holds a live value, but
/// stays prepared.
/// Implementations must keep slots valid when they are moved around in memory
/// (rotated, swapped, reversed, or copied into a new array).
///
/// A [`SlideVec`] is `Send` (resp. `Sync`) whenever `T` is, so a slot must be
/// safe to send (resp. share) across threads whenever `T` is.
/// A slot may only own the element it stores, and never state shared with
/// other slots or vectors (such as an `Rc`).
pub unsafe trait Mode<T> {
	/// What is stored in the backing array.
	type Slot;

	/// Name of the mode, for diagnostics.
	const NAME: &'static str;

	/// Whether slots own a separate allocation that must be prepared when the
	/// array grows and released when it shrinks.
	const EAGER: bool;

	/// Prepares freshly added slots.
	///
	/// Only called when `EAGER` is `true`.
	/// Either every slot is prepared, or none is and whatever was allocated on
	/// the way is released before returning the error.
	unsafe fn prepare(slots: &mut [MaybeUninit<Self::Slot>]) -> Result<(), VecError>;

	/// Releases prepared slots that hold no live value.
	unsafe fn release(slots: &mut [Self::Slot]);

	/// Moves a value into an empty slot.
	unsafe fn write(slot: &mut Self::Slot, value: T);

	/// Moves the value out of a slot.
	unsafe fn read(slot: &Self::Slot) -> T;

	unsafe fn get(slot: &Self::Slot) -> &T;

	unsafe fn get_mut(slot: &mut Self::Slot) -> &mut T;

	/// Drops the value held by a slot.
	unsafe fn drop_in_place(slot: &mut Self::Slot);

	/// Number of bytes reserved per slot.
	fn slot_bytes() -> usize;
}

/// Growable double-ended array type.
///
/// This type behaves mostly like a `Vec<T>`, with two differences.
/// First, popping from the front is O(1): the front of the array simply
/// slides forward, and the space it leaves behind is only recovered by the
/// next [`shrink`](SlideVec::shrink) or [`resize`](SlideVec::resize).
/// Second, the storage of the elements is given by the ownership mode `M`:
/// they are either embedded in the backing array
/// ([`by_value::SlideVec`](crate::by_value::SlideVec)) or individually
/// allocated ([`by_ref::SlideVec`](crate::by_ref::SlideVec)), in which case
/// references to elements survive the reallocation of the backing array.
///
/// The capacity is either 0 or `FLOOR` times a power of two.
/// `PAD` slots are always kept free past the last element, as soon as the
/// vector holds anything.
/// The vector itself never reads or writes them: in by-value mode they are
/// reachable through [`spare_capacity_mut`](crate::by_value::SlideVec::spare_capacity_mut),
/// for instance to keep a null-terminated byte string.
///
/// Every operation that may change the capacity comes in two flavors:
/// `try_*` returns a [`VecError`] on allocation failure, leaving the array
/// untouched, while the plain version aborts like the standard collections do.
///
/// # Examples
///
/// ```
/// # use slide_vec::SlideVec;
/// let mut vec: SlideVec<u32> = SlideVec::new();
/// vec.push_back(10);
/// vec.push_back(20);
/// vec.push_front(0);
/// assert_eq!(vec, [0, 10, 20]);
///
/// assert_eq!(vec.pop_front(), Some(0));
/// assert_eq!(vec.offset(), 1); // the front moved forward.
///
/// vec.shrink();
/// assert_eq!(vec.offset(), 0);
/// assert_eq!(vec, [10, 20]);
/// ```
pub struct SlideVec<M: Mode<T>, T, const FLOOR: usize = 4, const PAD: usize = 0> {
	/// Backing array.
	raw: RawSlideVec<M, T>,

	/// Live slots.
	window: Window,

	marker: PhantomData<T>
}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> Drop for SlideVec<M, T, FLOOR, PAD> {
	fn drop(&mut self) {
		// the backing array is freed by `RawSlideVec`.
		self.truncate(0)
	}
}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> SlideVec<M, T, FLOOR, PAD> {
	const VALID_FLOOR: () = assert!(FLOOR > 0, "the capacity floor must not be zero");

	/// Creates a new empty `SlideVec`.
	///
	/// The vector will not allocate until elements are pushed onto it.
	#[inline]
	pub const fn new() -> Self {
		#[allow(clippy::let_unit_value)]
		let () = Self::VALID_FLOOR;

		SlideVec {
			raw: RawSlideVec::new(),
			window: Window::new(),
			marker: PhantomData
		}
	}

	/// Creates a new empty `SlideVec` able to hold at least `capacity` elements.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		let mut vec = Self::new();
		vec.reserve(capacity);
		vec
	}

	/// Same as `with_capacity`, but returns on errors instead of aborting.
	pub fn try_with_capacity(capacity: usize) -> Result<Self, VecError> {
		let mut vec = Self::new();
		vec.try_reserve(capacity)?;
		Ok(vec)
	}

	/// Returns the number of elements in the vector.
	#[inline]
	pub fn len(&self) -> usize {
		self.window.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.window.is_empty()
	}

	/// Returns the number of slots in the backing array.
	///
	/// This includes the slots left behind by `pop_front`, see [`offset`](SlideVec::offset).
	#[inline]
	pub fn capacity(&self) -> usize {
		self.raw.capacity()
	}

	/// Returns the number of slots at the start of the backing array freed by
	/// `pop_front` and not yet recovered.
	#[inline]
	pub fn offset(&self) -> usize {
		self.window.first()
	}

	/// Returns the number of bytes allocated by the vector.
	///
	/// In by-reference mode this includes the slots allocations.
	#[inline]
	pub fn reserved_bytes(&self) -> usize {
		self.raw.reserved_bytes()
	}

	#[inline]
	pub(crate) fn live_slots(&self) -> &[M::Slot] {
		&self.raw.slots()[self.window.first()..self.window.last()]
	}

	#[inline]
	pub(crate) fn live_slots_mut(&mut self) -> &mut [M::Slot] {
		let (first, last) = (self.window.first(), self.window.last());
		&mut self.raw.slots_mut()[first..last]
	}

	/// Slots past the last element, up to the capacity.
	#[inline]
	pub(crate) fn spare_slots_mut(&mut self) -> &mut [M::Slot] {
		let last = self.window.last();
		&mut self.raw.slots_mut()[last..]
	}

	/// Pointer to the first live slot, valid up to the end of the backing array.
	#[inline]
	pub(crate) fn front_ptr(&self) -> *const M::Slot {
		self.raw.slots()[self.window.first()..].as_ptr()
	}

	/// Smallest `FLOOR * 2^n` capacity holding `slots` slots,
	/// starting from the current capacity.
	fn grown_capacity(&self, slots: usize) -> Result<usize, VecError> {
		let mut capacity = if self.capacity() == 0 { FLOOR } else { self.capacity() };
		while capacity < slots {
			capacity = capacity.checked_mul(2).ok_or(VecError::CapacityOverflow)?;
		}

		Ok(capacity)
	}

	/// The same as `reserve`, but returns on errors instead of aborting.
	pub fn try_reserve(&mut self, min_items: usize) -> Result<(), VecError> {
		let required = self.window.first()
			.checked_add(min_items)
			.and_then(|n| n.checked_add(PAD))
			.ok_or(VecError::CapacityOverflow)?;

		if required > self.capacity() {
			let capacity = self.grown_capacity(required)?;
			self.raw.try_grow_to(capacity)
		} else {
			Ok(())
		}
	}

	/// Makes room for at least `min_items` elements without moving the front of
	/// the array (plus the `PAD` trailing slots).
	///
	/// The capacity doubles from `FLOOR` until it is large enough.
	/// Does nothing if the capacity is already sufficient, and never shrinks.
	/// In by-reference mode, every new slot is allocated here.
	#[inline]
	pub fn reserve(&mut self, min_items: usize) {
		raw::handle_reserve(self.try_reserve(min_items))
	}

	/// Slides the live elements back to the start of the backing array.
	fn rewind(&mut self) {
		if self.window.first() > 0 {
			let last = self.window.last();
			let first = self.window.rewind();
			self.raw.slots_mut()[..last].rotate_left(first);
		}
	}

	/// Halves the capacity while it is more than twice what is needed, down
	/// to `FLOOR`.
	fn shrink_back(&mut self) -> Result<(), VecError> {
		let capacity = self.capacity();
		if capacity == 0 {
			return Ok(())
		}

		let needed = self.window.last() + PAD;
		let mut target = capacity;
		while target > FLOOR && target / 2 > needed {
			target /= 2
		}

		if target < capacity {
			self.raw.try_shrink_to(target)
		} else {
			Ok(())
		}
	}

	/// The same as `shrink`, but returns on errors instead of aborting.
	///
	/// The front offset is recovered even if shrinking the array fails.
	pub fn try_shrink(&mut self) -> Result<(), VecError> {
		self.rewind();
		self.shrink_back()
	}

	/// Recovers the slots freed by `pop_front` and releases the excess capacity.
	///
	/// The live elements are first moved back to the start of the array.
	/// Then the capacity is halved as long as it stays more than twice the
	/// length, but never below `FLOOR`.
	#[inline]
	pub fn shrink(&mut self) {
		raw::handle_reserve(self.try_shrink())
	}

	/// The same as `resize_with`, but returns on errors instead of aborting.
	pub fn try_resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), VecError> where F: FnMut() -> T {
		self.rewind();

		if new_len > self.len() {
			self.try_reserve(new_len)?;
			while self.len() < new_len {
				unsafe { self.write_back(f()) }
			}
		} else {
			self.truncate(new_len)
		}

		self.shrink_back()
	}

	/// Resizes the vector so that its length is `new_len`, then releases the
	/// excess capacity as [`shrink`](SlideVec::shrink) does.
	///
	/// New elements are created by calling `f`.
	/// Truncated elements are dropped.
	#[inline]
	pub fn resize_with<F>(&mut self, new_len: usize, f: F) where F: FnMut() -> T {
		raw::handle_reserve(self.try_resize_with(new_len, f))
	}

	/// The same as `resize`, but returns on errors instead of aborting.
	#[inline]
	pub fn try_resize(&mut self, new_len: usize) -> Result<(), VecError> where T: Default {
		self.try_resize_with(new_len, T::default)
	}

	/// Resizes the vector so that its length is `new_len`, filling the new
	/// slots with `T::default()`.
	///
	/// See [`resize_with`](SlideVec::resize_with).
	#[inline]
	pub fn resize(&mut self, new_len: usize) where T: Default {
		self.resize_with(new_len, T::default)
	}

	/// Shortens the vector, keeping the first `len` elements and dropping
	/// the rest.
	///
	/// If `len` is greater than the vector's current length, this has no
	/// effect.
	/// The capacity is not modified.
	pub fn truncate(&mut self, len: usize) {
		let old_len = self.len();
		if len >= old_len {
			return
		}

		let first = self.window.first();
		let capacity = self.capacity();
		self.window.set_len(len, capacity);

		let slots = self.raw.slots_mut();
		let mut guard = DropGuard::<M, T> {
			slots: slots[(first + len)..(first + old_len)].iter_mut(),
			marker: PhantomData
		};

		while let Some(slot) = guard.slots.next() {
			unsafe { M::drop_in_place(slot) }
		}
	}

	/// Drops every element and moves the front back to the start of the array.
	///
	/// The capacity is not modified.
	#[inline]
	pub fn clear(&mut self) {
		self.truncate(0);
		self.window.reset()
	}

	/// Drops every element and frees the backing array (and every slot in
	/// by-reference mode).
	///
	/// The vector is then in the same state as a new one.
	pub fn free(&mut self) {
		self.clear();
		self.raw.free()
	}

	/// Writes `value` right after the last element.
	///
	/// ## Safety
	///
	/// There must be a free slot after the last element.
	#[inline]
	unsafe fn write_back(&mut self, value: T) {
		let last = self.window.last();
		let capacity = self.capacity();
		M::write(&mut self.raw.slots_mut()[last], value);
		self.window.grow_back(capacity)
	}

	/// The same as `push_back`, but returns on errors instead of aborting.
	pub fn try_push_back(&mut self, value: T) -> Result<(), VecError> {
		self.try_reserve(self.len() + 1)?;
		unsafe { self.write_back(value) }
		Ok(())
	}

	/// Appends an element to the back of the vector.
	#[inline]
	pub fn push_back(&mut self, value: T) {
		raw::handle_reserve(self.try_push_back(value))
	}

	/// The same as `push_front`, but returns on errors instead of aborting.
	#[inline]
	pub fn try_push_front(&mut self, value: T) -> Result<(), VecError> {
		self.try_insert_at(0, value)
	}

	/// Prepends an element to the vector.
	///
	/// Every element is shifted one slot to the right, so this is O(n).
	/// The slots freed by `pop_front` are not reused.
	#[inline]
	pub fn push_front(&mut self, value: T) {
		raw::handle_reserve(self.try_push_front(value))
	}

	/// The same as `insert_at`, but returns on errors instead of aborting.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	pub fn try_insert_at(&mut self, index: usize, value: T) -> Result<(), VecError> {
		let len = self.len();
		if index > len {
			insertion_out_of_bounds(index, len)
		}

		self.try_reserve(len + 1)?;

		let at = self.window.first() + index;
		let last = self.window.last();
		let capacity = self.capacity();

		let slots = self.raw.slots_mut();
		// the free slot after the last element comes around to `at`.
		slots[at..=last].rotate_right(1);
		unsafe { M::write(&mut slots[at], value) }

		self.window.grow_back(capacity);
		Ok(())
	}

	/// Inserts an element at position `index` within the vector, shifting all
	/// elements after it to the right.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	#[inline]
	pub fn insert_at(&mut self, index: usize, value: T) {
		raw::handle_reserve(self.try_insert_at(index, value))
	}

	/// Removes the first element and returns it, or `None` if the vector is empty.
	///
	/// This is O(1): the front of the vector slides forward and the slot left
	/// behind is only recovered by [`shrink`](SlideVec::shrink) or
	/// [`resize`](SlideVec::resize).
	pub fn pop_front(&mut self) -> Option<T> {
		let at = self.window.physical(0)?;
		self.window.shrink_front();
		Some(unsafe { M::read(&self.raw.slots()[at]) })
	}

	/// Removes the last element and returns it, or `None` if the vector is empty.
	///
	/// The capacity is not modified.
	pub fn pop_back(&mut self) -> Option<T> {
		if self.is_empty() {
			None
		} else {
			self.window.shrink_back();
			let at = self.window.last();
			Some(unsafe { M::read(&self.raw.slots()[at]) })
		}
	}

	/// Removes and returns the element at position `index`, shifting all
	/// elements after it to the left.
	///
	/// Returns `None` if `index` is out of bounds.
	pub fn pop_at(&mut self, index: usize) -> Option<T> {
		let at = self.window.physical(index)?;
		let last = self.window.last();

		let slots = self.raw.slots_mut();
		let value = unsafe { M::read(&slots[at]) };
		// the emptied slot goes past the last element.
		slots[at..last].rotate_left(1);

		self.window.shrink_back();
		Some(value)
	}

	/// Returns a reference to the element at `index`, or `None` if out of bounds.
	#[inline]
	pub fn get_at(&self, index: usize) -> Option<&T> {
		let at = self.window.physical(index)?;
		Some(unsafe { M::get(&self.raw.slots()[at]) })
	}

	/// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
	#[inline]
	pub fn get_at_mut(&mut self, index: usize) -> Option<&mut T> {
		let at = self.window.physical(index)?;
		Some(unsafe { M::get_mut(&mut self.raw.slots_mut()[at]) })
	}

	#[inline]
	pub fn get_front(&self) -> Option<&T> {
		self.get_at(0)
	}

	#[inline]
	pub fn get_front_mut(&mut self) -> Option<&mut T> {
		self.get_at_mut(0)
	}

	#[inline]
	pub fn get_back(&self) -> Option<&T> {
		self.get_at(self.len().checked_sub(1)?)
	}

	#[inline]
	pub fn get_back_mut(&mut self) -> Option<&mut T> {
		self.get_at_mut(self.len().checked_sub(1)?)
	}

	/// Overwrites the element at `index`, dropping the previous one.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	#[inline]
	pub fn set_at(&mut self, index: usize, value: T) {
		self[index] = value
	}

	/// Overwrites the element at `index` and returns the previous one.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	#[inline]
	pub fn replace_at(&mut self, index: usize, value: T) -> T {
		mem::replace(&mut self[index], value)
	}

	/// Swaps two elements.
	///
	/// No element is dropped.
	///
	/// # Panics
	///
	/// Panics if `a` or `b` are out of bounds.
	pub fn swap(&mut self, a: usize, b: usize) {
		let len = self.len();
		let a = self.window.physical(a).unwrap_or_else(|| out_of_bounds(a, len));
		let b = self.window.physical(b).unwrap_or_else(|| out_of_bounds(b, len));
		self.raw.slots_mut().swap(a, b)
	}

	/// Reverses the order of the elements, in place.
	#[inline]
	pub fn reverse(&mut self) {
		self.live_slots_mut().reverse()
	}

	/// Returns an iterator over the elements, front to back.
	#[inline]
	pub fn iter(&self) -> Iter<'_, M, T> {
		Iter {
			slots: self.live_slots().iter(),
			marker: PhantomData
		}
	}

	/// Returns an iterator over mutable references to the elements, front to back.
	#[inline]
	pub fn iter_mut(&mut self) -> IterMut<'_, M, T> {
		IterMut {
			slots: self.live_slots_mut().iter_mut(),
			marker: PhantomData
		}
	}

	/// The same as `copy_from`, but returns on errors instead of aborting.
	///
	/// On error, `self` is left empty.
	pub fn try_copy_from(&mut self, src: &Self) -> Result<(), VecError> where T: Clone {
		self.clear();
		self.try_reserve(src.len())?;
		for item in src {
			unsafe { self.write_back(item.clone()) }
		}

		Ok(())
	}

	/// Replaces the content of this vector with clones of the elements of `src`.
	///
	/// In by-reference mode every clone goes into its own slot, so the two
	/// vectors never share an element.
	#[inline]
	pub fn copy_from(&mut self, src: &Self) where T: Clone {
		raw::handle_reserve(self.try_copy_from(src))
	}
}

/// Drops the remaining slots if dropping one of them panics.
struct DropGuard<'a, M: Mode<T>, T> {
	slots: slice::IterMut<'a, M::Slot>,
	marker: PhantomData<T>
}

impl<'a, M: Mode<T>, T> Drop for DropGuard<'a, M, T> {
	fn drop(&mut self) {
		for slot in &mut self.slots {
			unsafe { M::drop_in_place(slot) }
		}
	}
}

#[cold]
#[inline(never)]
fn out_of_bounds(index: usize, len: usize) -> ! {
	panic!("index out of bounds: the len is {} but the index is {}", len, index)
}

#[cold]
#[inline(never)]
fn insertion_out_of_bounds(index: usize, len: usize) -> ! {
	panic!("insertion index (is {}) should be <= len (is {})", index, len)
}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> Default for SlideVec<M, T, FLOOR, PAD> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<M: Mode<T>, T: Clone, const FLOOR: usize, const PAD: usize> Clone for SlideVec<M, T, FLOOR, PAD> {
	fn clone(&self) -> Self {
		let mut vec = Self::new();
		vec.copy_from(self);
		vec
	}

	fn clone_from(&mut self, source: &Self) {
		self.copy_from(source)
	}
}

/// Sending a vector sends its elements.
///
/// ```compile_fail
/// # use std::rc::Rc;
/// fn assert_send<S: Send>(_: &S) {}
/// let vec: slide_vec::RefVec<Rc<u32>> = slide_vec::RefVec::new();
/// assert_send(&vec);
/// ```
unsafe impl<M: Mode<T>, T: Send, const FLOOR: usize, const PAD: usize> Send for SlideVec<M, T, FLOOR, PAD> {}
unsafe impl<M: Mode<T>, T: Sync, const FLOOR: usize, const PAD: usize> Sync for SlideVec<M, T, FLOOR, PAD> {}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> Index<usize> for SlideVec<M, T, FLOOR, PAD> {
	type Output = T;

	#[inline]
	fn index(&self, index: usize) -> &T {
		match self.get_at(index) {
			Some(item) => item,
			None => out_of_bounds(index, self.len())
		}
	}
}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> IndexMut<usize> for SlideVec<M, T, FLOOR, PAD> {
	#[inline]
	fn index_mut(&mut self, index: usize) -> &mut T {
		let len = self.len();
		match self.get_at_mut(index) {
			Some(item) => item,
			None => out_of_bounds(index, len)
		}
	}
}

/// Immutable iterator over the elements of a [`SlideVec`].
pub struct Iter<'a, M: Mode<T>, T> {
	slots: slice::Iter<'a, M::Slot>,
	marker: PhantomData<&'a T>
}

impl<'a, M: Mode<T>, T> Iterator for Iter<'a, M, T> {
	type Item = &'a T;

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		self.slots.next().map(|slot| unsafe { M::get(slot) })
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.slots.size_hint()
	}
}

impl<'a, M: Mode<T>, T> DoubleEndedIterator for Iter<'a, M, T> {
	#[inline]
	fn next_back(&mut self) -> Option<&'a T> {
		self.slots.next_back().map(|slot| unsafe { M::get(slot) })
	}
}

impl<'a, M: Mode<T>, T> ExactSizeIterator for Iter<'a, M, T> {}
impl<'a, M: Mode<T>, T> FusedIterator for Iter<'a, M, T> {}

impl<'a, M: Mode<T>, T> Clone for Iter<'a, M, T> {
	fn clone(&self) -> Self {
		Iter {
			slots: self.slots.clone(),
			marker: PhantomData
		}
	}
}

/// Mutable iterator over the elements of a [`SlideVec`].
pub struct IterMut<'a, M: Mode<T>, T> {
	slots: slice::IterMut<'a, M::Slot>,
	marker: PhantomData<&'a mut T>
}

impl<'a, M: Mode<T>, T> Iterator for IterMut<'a, M, T> {
	type Item = &'a mut T;

	#[inline]
	fn next(&mut self) -> Option<&'a mut T> {
		self.slots.next().map(|slot| unsafe { M::get_mut(slot) })
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.slots.size_hint()
	}
}

impl<'a, M: Mode<T>, T> DoubleEndedIterator for IterMut<'a, M, T> {
	#[inline]
	fn next_back(&mut self) -> Option<&'a mut T> {
		self.slots.next_back().map(|slot| unsafe { M::get_mut(slot) })
	}
}

impl<'a, M: Mode<T>, T> ExactSizeIterator for IterMut<'a, M, T> {}
impl<'a, M: Mode<T>, T> FusedIterator for IterMut<'a, M, T> {}

/// Owning iterator over the elements of a [`SlideVec`].
///
/// Elements are popped from the front, so this never moves them around.
pub struct IntoIter<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> {
	vec: SlideVec<M, T, FLOOR, PAD>
}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> Iterator for IntoIter<M, T, FLOOR, PAD> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<T> {
		self.vec.pop_front()
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.vec.len();
		(len, Some(len))
	}
}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> DoubleEndedIterator for IntoIter<M, T, FLOOR, PAD> {
	#[inline]
	fn next_back(&mut self) -> Option<T> {
		self.vec.pop_back()
	}
}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> ExactSizeIterator for IntoIter<M, T, FLOOR, PAD> {}
impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> FusedIterator for IntoIter<M, T, FLOOR, PAD> {}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> IntoIterator for SlideVec<M, T, FLOOR, PAD> {
	type Item = T;
	type IntoIter = IntoIter<M, T, FLOOR, PAD>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			vec: self
		}
	}
}

impl<'v, M: Mode<T>, T, const FLOOR: usize, const PAD: usize> IntoIterator for &'v SlideVec<M, T, FLOOR, PAD> {
	type Item = &'v T;
	type IntoIter = Iter<'v, M, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'v, M: Mode<T>, T, const FLOOR: usize, const PAD: usize> IntoIterator for &'v mut SlideVec<M, T, FLOOR, PAD> {
	type Item = &'v mut T;
	type IntoIter = IterMut<'v, M, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> Extend<T> for SlideVec<M, T, FLOOR, PAD> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		let iter = iter.into_iter();
		let (lower, _) = iter.size_hint();
		self.reserve(self.len().saturating_add(lower));
		for item in iter {
			self.push_back(item)
		}
	}
}

impl<'a, M: Mode<T>, T: Copy + 'a, const FLOOR: usize, const PAD: usize> Extend<&'a T> for SlideVec<M, T, FLOOR, PAD> {
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
		<Self as Extend<T>>::extend(self, iter.into_iter().copied())
	}
}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> FromIterator<T> for SlideVec<M, T, FLOOR, PAD> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut vec = Self::new();
		vec.extend(iter);
		vec
	}
}

impl<M: Mode<T>, T, const FLOOR: usize, const PAD: usize> From<Vec<T>> for SlideVec<M, T, FLOOR, PAD> {
	#[inline]
	fn from(vec: Vec<T>) -> Self {
		vec.into_iter().collect()
	}
}

impl<M: Mode<T>, T: Clone, const FLOOR: usize, const PAD: usize> From<&[T]> for SlideVec<M, T, FLOOR, PAD> {
	#[inline]
	fn from(slice: &[T]) -> Self {
		slice.iter().cloned().collect()
	}
}

impl<M: Mode<T>, T: fmt::Debug, const FLOOR: usize, const PAD: usize> fmt::Debug for SlideVec<M, T, FLOOR, PAD> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<M, N, T, U, const F: usize, const P: usize, const G: usize, const Q: usize> PartialEq<SlideVec<N, U, G, Q>> for SlideVec<M, T, F, P> where M: Mode<T>, N: Mode<U>, T: PartialEq<U> {
	#[inline]
	fn eq(&self, other: &SlideVec<N, U, G, Q>) -> bool {
		self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
	}
}

macro_rules! impl_slice_eq {
	([$($lt:lifetime)?] [$($vars:tt)*] $rhs:ty) => {
		impl<$($lt,)? M: Mode<T>, T, U, const FLOOR: usize, const PAD: usize $($vars)*> PartialEq<$rhs> for SlideVec<M, T, FLOOR, PAD> where T: PartialEq<U> {
			#[inline]
			fn eq(&self, other: &$rhs) -> bool {
				self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
			}
		}
	}
}

impl_slice_eq! { [] [] Vec<U> }
impl_slice_eq! { [] [] [U] }
impl_slice_eq! { ['b] [] &'b [U] }
impl_slice_eq! { [] [, const O: usize] [U; O] }
impl_slice_eq! { ['b] [, const O: usize] &'b [U; O] }

impl<M: Mode<T>, T: Eq, const FLOOR: usize, const PAD: usize> Eq for SlideVec<M, T, FLOOR, PAD> {}
