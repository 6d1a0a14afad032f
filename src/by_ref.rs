//! By-reference storage: every slot points to its own heap allocation.
use core::{
	alloc::Layout,
	mem::{
		self,
		MaybeUninit
	},
	ptr::{
		self,
		NonNull
	}
};
use crate::{
	error::VecError,
	generic,
	raw
};

/// Ownership mode storing a pointer per slot, each one to an individually
/// allocated element.
///
/// Slots are allocated eagerly, as soon as the capacity grows, and zeroed.
/// They are moved around (never copied) when elements are shifted, so every
/// slot keeps owning a distinct allocation for the whole life of the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByRef;

fn allocate_slot<T>() -> Result<NonNull<T>, VecError> {
	let layout = Layout::new::<T>();
	if layout.size() == 0 {
		Ok(NonNull::dangling())
	} else {
		raw::allocate_zeroed(layout).map(NonNull::cast)
	}
}

unsafe fn deallocate_slot<T>(slot: NonNull<T>) {
	let layout = Layout::new::<T>();
	if layout.size() != 0 {
		raw::deallocate(slot.cast(), layout)
	}
}

unsafe impl<T> generic::Mode<T> for ByRef {
	type Slot = NonNull<T>;

	const NAME: &'static str = "by-reference";

	const EAGER: bool = true;

	unsafe fn prepare(slots: &mut [MaybeUninit<NonNull<T>>]) -> Result<(), VecError> {
		for i in 0..slots.len() {
			match allocate_slot::<T>() {
				Ok(ptr) => {
					slots[i].write(ptr);
				},
				Err(e) => {
					for slot in &slots[..i] {
						deallocate_slot(slot.assume_init_read())
					}

					return Err(e)
				}
			}
		}

		Ok(())
	}

	unsafe fn release(slots: &mut [NonNull<T>]) {
		for slot in slots {
			deallocate_slot(*slot)
		}
	}

	#[inline]
	unsafe fn write(slot: &mut NonNull<T>, value: T) {
		slot.as_ptr().write(value)
	}

	#[inline]
	unsafe fn read(slot: &NonNull<T>) -> T {
		slot.as_ptr().read()
	}

	#[inline]
	unsafe fn get(slot: &NonNull<T>) -> &T {
		slot.as_ref()
	}

	#[inline]
	unsafe fn get_mut(slot: &mut NonNull<T>) -> &mut T {
		slot.as_mut()
	}

	#[inline]
	unsafe fn drop_in_place(slot: &mut NonNull<T>) {
		ptr::drop_in_place(slot.as_ptr())
	}

	#[inline]
	fn slot_bytes() -> usize {
		mem::size_of::<NonNull<T>>() + mem::size_of::<T>()
	}
}

pub type SlideVec<T, const FLOOR: usize = 4, const PAD: usize = 0> = generic::SlideVec<ByRef, T, FLOOR, PAD>;
