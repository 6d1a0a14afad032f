use core::{
	alloc::Layout,
	marker::PhantomData,
	mem::{
		self,
		MaybeUninit
	},
	ptr::{
		self,
		NonNull
	},
	slice
};
use std::alloc::handle_alloc_error;
use crate::{
	error::VecError,
	generic::Mode
};

/// A low-level utility for more ergonomically managing the backing array of a
/// [`SlideVec`](crate::generic::SlideVec).
///
/// The buffer holds `capacity` slots, every one of them prepared by the mode `M`
/// (for by-reference modes, each slot owns its own allocation).
/// This type does not in any way inspect the values stored in the slots.
/// When dropped it *will* release the slots and free the array, but it *won't*
/// try to drop the values they contain. It is up to the user of `RawSlideVec`
/// to drop the live values first.
pub struct RawSlideVec<M: Mode<T>, T> {
	/// Pointer to the first slot.
	ptr: NonNull<M::Slot>,

	/// Number of prepared slots.
	cap: usize,

	marker: PhantomData<T>
}

impl<M: Mode<T>, T> Drop for RawSlideVec<M, T> {
	fn drop(&mut self) {
		self.free()
	}
}

impl<M: Mode<T>, T> RawSlideVec<M, T> {
	/// Creates a new empty buffer.
	///
	/// Nothing is allocated until the buffer is grown.
	#[inline]
	pub const fn new() -> Self {
		RawSlideVec {
			ptr: NonNull::dangling(),
			cap: 0,
			marker: PhantomData
		}
	}

	/// Number of prepared slots.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.cap
	}

	/// Number of bytes reserved by the array and, in by-reference modes, by
	/// the slots allocations.
	#[inline]
	pub fn reserved_bytes(&self) -> usize {
		self.cap * M::slot_bytes()
	}

	/// All the prepared slots.
	#[inline]
	pub fn slots(&self) -> &[M::Slot] {
		// SAFETY: `[0, cap)` is always prepared and `ptr` is dangling (but aligned) when `cap` is 0.
		unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
	}

	/// All the prepared slots, mutably.
	#[inline]
	pub fn slots_mut(&mut self) -> &mut [M::Slot] {
		unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
	}

	/// Returns the current allocated memory and layout.
	///
	/// Returns `None` if nothing is allocated or if slots are zero-sized.
	fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
		if self.cap == 0 || mem::size_of::<M::Slot>() == 0 {
			None
		} else {
			// We have an allocated chunk of memory, so we can bypass runtime
			// checks to get our current layout.
			unsafe {
				let align = mem::align_of::<M::Slot>();
				let size = mem::size_of::<M::Slot>() * self.cap;
				let layout = Layout::from_size_align_unchecked(size, align);
				Some((self.ptr.cast(), layout))
			}
		}
	}

	/// Grows the buffer to exactly `capacity` slots.
	///
	/// On error, the buffer is left untouched.
	pub fn try_grow_to(&mut self, capacity: usize) -> Result<(), VecError> {
		assert!(capacity > self.cap, "tried to grow to a smaller capacity");

		let new_layout = Layout::array::<M::Slot>(capacity).map_err(|_| VecError::CapacityOverflow)?;
		alloc_guard(new_layout.size())?;

		tracing::trace!(mode = M::NAME, from = self.cap, to = capacity, "growing buffer");

		if new_layout.size() == 0 {
			// zero-sized slots are never allocated.
			self.cap = capacity;
			return Ok(())
		}

		if M::EAGER {
			self.grow_staged(capacity, new_layout)
		} else {
			let ptr = finish_grow(new_layout, self.current_memory())?;
			self.ptr = ptr.cast();
			self.cap = capacity;
			Ok(())
		}
	}

	/// Grows into a fresh array so that the slots can be prepared before the
	/// old array is given up.
	fn grow_staged(&mut self, capacity: usize, new_layout: Layout) -> Result<(), VecError> {
		let new_ptr: NonNull<M::Slot> = match allocate(new_layout) {
			Ok(ptr) => ptr.cast(),
			Err(_) if self.cap > 0 => return Err(VecError::ReallocationFailed { layout: new_layout }),
			Err(e) => return Err(e)
		};

		unsafe {
			let fresh = slice::from_raw_parts_mut(
				new_ptr.as_ptr().add(self.cap) as *mut MaybeUninit<M::Slot>,
				capacity - self.cap
			);

			if let Err(e) = M::prepare(fresh) {
				deallocate(new_ptr.cast(), new_layout);
				return Err(e)
			}

			ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.cap);

			if let Some((ptr, layout)) = self.current_memory() {
				deallocate(ptr, layout)
			}
		}

		self.ptr = new_ptr;
		self.cap = capacity;
		Ok(())
	}

	/// Shrinks the buffer to exactly `capacity` slots.
	///
	/// The slots in `[capacity, self.capacity())` are released and must not hold
	/// live values.
	/// On error, the buffer is left untouched.
	pub fn try_shrink_to(&mut self, capacity: usize) -> Result<(), VecError> {
		assert!(capacity <= self.cap, "tried to shrink to a larger capacity");

		if capacity == self.cap {
			return Ok(())
		}

		if capacity == 0 {
			self.free();
			return Ok(())
		}

		tracing::trace!(mode = M::NAME, from = self.cap, to = capacity, "shrinking buffer");

		let (ptr, layout) = match self.current_memory() {
			Some(mem) => mem,
			None => {
				// zero-sized slots.
				self.cap = capacity;
				return Ok(())
			}
		};

		// The alignment is the same and the size is smaller, so this cannot fail.
		let new_layout = unsafe { Layout::from_size_align_unchecked(mem::size_of::<M::Slot>() * capacity, layout.align()) };

		if M::EAGER {
			let new_ptr: NonNull<M::Slot> = allocate(new_layout)
				.map_err(|_| VecError::ReallocationFailed { layout: new_layout })?
				.cast();

			unsafe {
				ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), capacity);
				M::release(&mut self.slots_mut()[capacity..]);
				deallocate(ptr, layout);
			}

			self.ptr = new_ptr;
		} else {
			self.ptr = reallocate(ptr, layout, new_layout)?.cast();
		}

		self.cap = capacity;
		Ok(())
	}

	/// Releases every slot and the array itself, going back to the empty state.
	pub fn free(&mut self) {
		if self.cap > 0 {
			unsafe {
				M::release(self.slots_mut());

				if let Some((ptr, layout)) = self.current_memory() {
					deallocate(ptr, layout)
				}
			}

			self.ptr = NonNull::dangling();
			self.cap = 0;
		}
	}
}

/// Allocation failure injection, for tests.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocBehaviour {
	/// Every allocation goes to the global allocator.
	None,

	/// The allocation request with the given index (counting from 0, from the
	/// moment the behaviour is set) fails. Later requests succeed again.
	FailAt(usize)
}

#[cfg(any(test, feature = "test-utils"))]
std::thread_local! {
	static ALLOC_BEHAVIOUR: core::cell::Cell<AllocBehaviour> = core::cell::Cell::new(AllocBehaviour::None);
}

/// Sets the allocation behaviour of the current thread.
#[cfg(any(test, feature = "test-utils"))]
pub fn set_alloc_behaviour(behaviour: AllocBehaviour) {
	ALLOC_BEHAVIOUR.with(|b| b.set(behaviour))
}

#[cfg(any(test, feature = "test-utils"))]
fn inject_failure() -> bool {
	ALLOC_BEHAVIOUR.with(|b| {
		match b.get() {
			AllocBehaviour::None => false,
			AllocBehaviour::FailAt(0) => {
				b.set(AllocBehaviour::None);
				true
			},
			AllocBehaviour::FailAt(n) => {
				b.set(AllocBehaviour::FailAt(n - 1));
				false
			}
		}
	})
}

#[cfg(not(any(test, feature = "test-utils")))]
#[inline(always)]
fn inject_failure() -> bool {
	false
}

/// Allocates a block of memory for `layout`.
///
/// The layout size must not be zero.
pub(crate) fn allocate(layout: Layout) -> Result<NonNull<u8>, VecError> {
	debug_assert_ne!(layout.size(), 0);
	let ptr = if inject_failure() {
		ptr::null_mut()
	} else {
		unsafe { std::alloc::alloc(layout) }
	};

	NonNull::new(ptr).ok_or_else(|| {
		tracing::warn!(size = layout.size(), "allocation failed");
		VecError::AllocationFailed { layout }
	})
}

/// Allocates a zero-initialized block of memory for `layout`.
///
/// The layout size must not be zero.
pub(crate) fn allocate_zeroed(layout: Layout) -> Result<NonNull<u8>, VecError> {
	debug_assert_ne!(layout.size(), 0);
	let ptr = if inject_failure() {
		ptr::null_mut()
	} else {
		unsafe { std::alloc::alloc_zeroed(layout) }
	};

	NonNull::new(ptr).ok_or_else(|| {
		tracing::warn!(size = layout.size(), "allocation failed");
		VecError::AllocationFailed { layout }
	})
}

/// Resizes the block at `ptr` from `old_layout` to `new_layout`.
///
/// Both layouts must have the same alignment and a non-zero size.
/// On error the old block is still valid.
fn reallocate(ptr: NonNull<u8>, old_layout: Layout, new_layout: Layout) -> Result<NonNull<u8>, VecError> {
	debug_assert_eq!(old_layout.align(), new_layout.align());
	let new_ptr = if inject_failure() {
		ptr::null_mut()
	} else {
		unsafe { std::alloc::realloc(ptr.as_ptr(), old_layout, new_layout.size()) }
	};

	NonNull::new(new_ptr).ok_or_else(|| {
		tracing::warn!(size = new_layout.size(), "reallocation failed");
		VecError::ReallocationFailed { layout: new_layout }
	})
}

/// Frees the block at `ptr`.
///
/// ## Safety
///
/// `ptr` must have been allocated by this module with the given `layout`.
pub(crate) unsafe fn deallocate(ptr: NonNull<u8>, layout: Layout) {
	std::alloc::dealloc(ptr.as_ptr(), layout)
}

// This function is outside `RawSlideVec` to minimize compile times, since it
// does not depend on the element type.
#[inline(never)]
fn finish_grow(new_layout: Layout, current_memory: Option<(NonNull<u8>, Layout)>) -> Result<NonNull<u8>, VecError> {
	match current_memory {
		Some((ptr, old_layout)) => reallocate(ptr, old_layout, new_layout),
		None => allocate(new_layout)
	}
}

// Central function for reserve error handling.
#[inline]
pub(crate) fn handle_reserve<R>(result: Result<R, VecError>) -> R {
	match result {
		Err(VecError::CapacityOverflow) => capacity_overflow(),
		Err(VecError::AllocationFailed { layout }) => handle_alloc_error(layout),
		Err(VecError::ReallocationFailed { layout }) => handle_alloc_error(layout),
		Ok(r) => r
	}
}

// We need to guarantee the following:
// * We don't ever allocate `> isize::MAX` byte-size objects.
// * We don't overflow `usize::MAX` and actually allocate too little.
//
// On 64-bit we just need to check for overflow since trying to allocate
// `> isize::MAX` bytes will surely fail. On 32-bit and 16-bit we need to add
// an extra guard for this in case we're running on a platform which can use
// all 4GB in user-space, e.g., PAE or x32.
#[inline]
fn alloc_guard(alloc_size: usize) -> Result<(), VecError> {
	if usize::BITS < 64 && alloc_size > isize::MAX as usize {
		Err(VecError::CapacityOverflow)
	} else {
		Ok(())
	}
}

// One central function responsible for reporting capacity overflows. This'll
// ensure that the code generation related to these panics is minimal as there's
// only one location which panics rather than a bunch throughout the module.
pub(crate) fn capacity_overflow() -> ! {
	panic!("capacity overflow");
}
