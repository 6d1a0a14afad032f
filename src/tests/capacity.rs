use core::mem;
use std::ptr::NonNull;
use crate::{
	RefVec,
	SlideVec
};
use super::is_valid_capacity;

// =============================================================================
// new() / with_capacity()
// =============================================================================

#[test]
fn test_new_is_empty_and_unallocated() {
	let vec: SlideVec<u32> = SlideVec::new();
	assert_eq!(vec.len(), 0);
	assert!(vec.is_empty());
	assert_eq!(vec.capacity(), 0);
	assert_eq!(vec.offset(), 0);
	assert_eq!(vec.reserved_bytes(), 0);

	let vec: RefVec<u32> = RefVec::default();
	assert_eq!(vec.capacity(), 0);
	assert_eq!(vec.reserved_bytes(), 0);
}

#[test]
fn test_with_capacity_rounds_up() {
	let vec: SlideVec<u32> = SlideVec::with_capacity(5);
	assert_eq!(vec.capacity(), 8);
	assert!(vec.is_empty());

	let vec: SlideVec<u32> = SlideVec::try_with_capacity(0).unwrap();
	assert_eq!(vec.capacity(), 0);
}

// =============================================================================
// reserve()
// =============================================================================

#[test]
fn test_reserve_floor_and_doubling() {
	for k in 1..=200 {
		let mut vec: SlideVec<u8> = SlideVec::new();
		vec.reserve(k);
		assert!(vec.capacity() >= k);
		assert!(is_valid_capacity(vec.capacity(), 4), "k = {}: capacity {}", k, vec.capacity());
		// the smallest such capacity.
		assert!(vec.capacity() == 4 || vec.capacity() / 2 < k);
	}
}

#[test]
fn test_reserve_never_shrinks() {
	let mut vec: SlideVec<u8> = SlideVec::new();
	vec.reserve(100);
	assert_eq!(vec.capacity(), 128);

	vec.reserve(3);
	assert_eq!(vec.capacity(), 128);

	vec.reserve(0);
	assert_eq!(vec.capacity(), 128);
}

#[test]
fn test_reserve_counts_the_front_offset() {
	let mut vec: SlideVec<u8> = (0..4).collect();
	assert_eq!(vec.capacity(), 4);

	vec.pop_front();
	vec.pop_front();
	// 2 slots are still taken at the front.
	vec.reserve(3);
	assert_eq!(vec.capacity(), 8);
	assert_eq!(vec.offset(), 2);
	assert_eq!(vec, [2, 3]);
}

#[test]
fn test_push_back_capacity_sequence() {
	let mut vec: SlideVec<u32> = SlideVec::new();
	let expected = [4, 4, 4, 4, 8, 8, 8, 8, 16];
	for (i, capacity) in expected.into_iter().enumerate() {
		vec.push_back(i as u32);
		assert_eq!(vec.capacity(), capacity);
	}
}

#[test]
fn test_custom_floor() {
	let mut vec: SlideVec<u8, 32> = SlideVec::new();
	vec.push_back(1);
	assert_eq!(vec.capacity(), 32);

	vec.reserve(33);
	assert_eq!(vec.capacity(), 64);
}

#[test]
fn test_padding_keeps_free_slots() {
	let mut vec: SlideVec<u8, 4, 1> = SlideVec::new();
	vec.extend([1, 2, 3]);
	assert_eq!(vec.capacity(), 4);

	vec.push_back(4);
	assert_eq!(vec.capacity(), 8);

	let mut vec: SlideVec<u8, 4, 2> = SlideVec::new();
	vec.reserve(4);
	assert_eq!(vec.capacity(), 8);
}

// =============================================================================
// shrink()
// =============================================================================

#[test]
fn test_shrink_halves_down_to_needed() {
	let mut vec: SlideVec<u32> = (0..100).collect();
	assert_eq!(vec.capacity(), 128);

	vec.truncate(5);
	assert_eq!(vec.capacity(), 128);

	vec.shrink();
	assert_eq!(vec.capacity(), 8);
	assert_eq!(vec, [0, 1, 2, 3, 4]);
}

#[test]
fn test_shrink_honors_floor() {
	let mut vec: SlideVec<u32, 16> = (0..100).collect();
	vec.clear();
	vec.shrink();
	assert_eq!(vec.capacity(), 16);

	let mut vec: SlideVec<u32> = (0..100).collect();
	vec.clear();
	vec.shrink();
	assert_eq!(vec.capacity(), 4);
}

#[test]
fn test_shrink_unallocated() {
	let mut vec: SlideVec<u32> = SlideVec::new();
	vec.shrink();
	assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_shrink_recovers_front_offset() {
	let mut vec: SlideVec<u32> = (1..=8).collect();
	for _ in 0..3 {
		vec.pop_front();
	}
	assert_eq!(vec.offset(), 3);

	vec.shrink();
	assert_eq!(vec.offset(), 0);
	assert_eq!(vec.capacity(), 8);
	assert_eq!(vec, [4, 5, 6, 7, 8]);

	// now 3 elements fit without growing.
	vec.extend([9, 10, 11]);
	assert_eq!(vec.capacity(), 8);
}

#[test]
fn test_shrink_keeps_padding() {
	let mut vec: SlideVec<u32, 4, 4> = (0..100).collect();
	vec.truncate(3);
	vec.shrink();
	// 3 elements and 4 padding slots.
	assert_eq!(vec.capacity(), 8);

	// a fourth element fills the array.
	vec.push_back(3);
	assert_eq!(vec.capacity(), 8);
	vec.push_back(4);
	assert_eq!(vec.capacity(), 16);
}

// =============================================================================
// resize()
// =============================================================================

#[test]
fn test_resize_grows_with_default() {
	let mut vec: SlideVec<u32> = SlideVec::new();
	vec.resize(10);
	assert_eq!(vec.len(), 10);
	assert!(vec.iter().all(|x| *x == 0));
	assert_eq!(vec.capacity(), 16);
}

#[test]
fn test_resize_truncates_and_shrinks() {
	let mut vec: SlideVec<u32> = (0..100).collect();
	vec.resize(3);
	assert_eq!(vec, [0, 1, 2]);
	assert_eq!(vec.capacity(), 4);
}

#[test]
fn test_resize_recovers_front_offset() {
	let mut vec: SlideVec<u32> = (1..=6).collect();
	vec.pop_front();
	vec.pop_front();

	vec.resize(6);
	assert_eq!(vec.offset(), 0);
	assert_eq!(vec, [3, 4, 5, 6, 0, 0]);
}

#[test]
fn test_resize_with() {
	let mut next = 0;
	let mut vec: RefVec<u32> = RefVec::new();
	vec.resize_with(5, || {
		next += 1;
		next
	});
	assert_eq!(vec, [1, 2, 3, 4, 5]);

	vec.resize_with(2, || unreachable!());
	assert_eq!(vec, [1, 2]);
}

// =============================================================================
// free() / reserved_bytes()
// =============================================================================

#[test]
fn test_free_returns_to_the_zero_state() {
	let mut vec: SlideVec<u32> = (0..1000).collect();
	vec.pop_front();
	vec.free();
	assert_eq!(vec.len(), 0);
	assert_eq!(vec.capacity(), 0);
	assert_eq!(vec.offset(), 0);
	assert_eq!(vec.reserved_bytes(), 0);

	vec.push_back(1);
	assert_eq!(vec.capacity(), 4);
	assert_eq!(vec, [1]);

	let mut vec: RefVec<String> = (0..10).map(|i| i.to_string()).collect();
	vec.free();
	assert_eq!(vec.capacity(), 0);
	assert_eq!(vec.reserved_bytes(), 0);
}

#[test]
fn test_reserved_bytes() {
	let mut vec: SlideVec<u32> = SlideVec::new();
	vec.push_back(1);
	assert_eq!(vec.reserved_bytes(), 4 * mem::size_of::<u32>());

	let mut vec: RefVec<u32> = RefVec::new();
	vec.push_back(1);
	assert_eq!(vec.reserved_bytes(), 4 * (mem::size_of::<NonNull<u32>>() + mem::size_of::<u32>()));
}

// =============================================================================
// zero-sized elements
// =============================================================================

#[test]
fn test_zero_sized_elements() {
	let mut vec: SlideVec<()> = SlideVec::new();
	for _ in 0..10 {
		vec.push_back(());
	}
	assert_eq!(vec.len(), 10);
	assert_eq!(vec.capacity(), 16);
	assert_eq!(vec.reserved_bytes(), 0);
	assert_eq!(vec.pop_front(), Some(()));
	vec.shrink();
	assert_eq!(vec.len(), 9);

	let mut vec: RefVec<()> = RefVec::new();
	vec.push_front(());
	vec.push_front(());
	assert_eq!(vec.pop_back(), Some(()));
	assert_eq!(vec.len(), 1);
}
