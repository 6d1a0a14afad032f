//! By-value storage: elements are embedded contiguously in the backing array.
use core::{
	mem::{
		self,
		MaybeUninit
	},
	ops::{
		Deref,
		DerefMut
	},
	slice
};
use crate::{
	error::VecError,
	generic
};

/// Ownership mode storing the elements directly in the backing array.
///
/// Slots outside of the live window are uninitialized memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByValue;

unsafe impl<T> generic::Mode<T> for ByValue {
	type Slot = MaybeUninit<T>;

	const NAME: &'static str = "by-value";

	const EAGER: bool = false;

	unsafe fn prepare(_slots: &mut [MaybeUninit<MaybeUninit<T>>]) -> Result<(), VecError> {
		Ok(())
	}

	unsafe fn release(_slots: &mut [MaybeUninit<T>]) {}

	#[inline]
	unsafe fn write(slot: &mut MaybeUninit<T>, value: T) {
		slot.write(value);
	}

	#[inline]
	unsafe fn read(slot: &MaybeUninit<T>) -> T {
		slot.assume_init_read()
	}

	#[inline]
	unsafe fn get(slot: &MaybeUninit<T>) -> &T {
		slot.assume_init_ref()
	}

	#[inline]
	unsafe fn get_mut(slot: &mut MaybeUninit<T>) -> &mut T {
		slot.assume_init_mut()
	}

	#[inline]
	unsafe fn drop_in_place(slot: &mut MaybeUninit<T>) {
		slot.assume_init_drop()
	}

	#[inline]
	fn slot_bytes() -> usize {
		mem::size_of::<T>()
	}
}

pub type SlideVec<T, const FLOOR: usize = 4, const PAD: usize = 0> = generic::SlideVec<ByValue, T, FLOOR, PAD>;

impl<T, const FLOOR: usize, const PAD: usize> generic::SlideVec<ByValue, T, FLOOR, PAD> {
	/// Extracts a slice containing the live elements.
	///
	/// Equivalent to `&s[..]`.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		let live = self.live_slots();
		// SAFETY: live slots are initialized and `MaybeUninit<T>` has the layout of `T`.
		unsafe { slice::from_raw_parts(live.as_ptr() as *const T, live.len()) }
	}

	/// Extracts a mutable slice containing the live elements.
	///
	/// Equivalent to `&mut s[..]`.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		let live = self.live_slots_mut();
		unsafe { slice::from_raw_parts_mut(live.as_mut_ptr() as *mut T, live.len()) }
	}

	/// Returns a raw pointer to the first element.
	///
	/// The pointer stays valid past the last element, up to the capacity, so
	/// that the spare slots written through [`spare_capacity_mut`](Self::spare_capacity_mut)
	/// can be read through it.
	/// It is invalidated by any operation that may change the capacity.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.front_ptr() as *const T
	}

	/// Returns the slots past the last element, up to the capacity.
	///
	/// They include the `PAD` slots kept free after the last element.
	/// Their content is left untouched by the vector until the next element is
	/// pushed over them or the capacity changes.
	///
	/// ```
	/// # use slide_vec::SlideVec;
	/// use std::ffi::CStr;
	///
	/// let mut text: SlideVec<u8, 8, 1> = SlideVec::new();
	/// text.extend(b"hello");
	/// text.spare_capacity_mut()[0].write(0);
	///
	/// let c_str = unsafe { CStr::from_ptr(text.as_ptr().cast()) };
	/// assert_eq!(c_str.to_bytes(), b"hello");
	/// ```
	#[inline]
	pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
		self.spare_slots_mut()
	}
}

impl<T, const FLOOR: usize, const PAD: usize> Deref for generic::SlideVec<ByValue, T, FLOOR, PAD> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T, const FLOOR: usize, const PAD: usize> DerefMut for generic::SlideVec<ByValue, T, FLOOR, PAD> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}

impl<T, const FLOOR: usize, const PAD: usize> AsRef<[T]> for generic::SlideVec<ByValue, T, FLOOR, PAD> {
	#[inline]
	fn as_ref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T, const FLOOR: usize, const PAD: usize> AsMut<[T]> for generic::SlideVec<ByValue, T, FLOOR, PAD> {
	#[inline]
	fn as_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}
