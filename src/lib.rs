//! This crate provides the [`SlideVec`](generic::SlideVec) data structure:
//! a growable array that can also be consumed from the front in constant time.
//! Popping the first element does not shift the others, it simply slides the
//! front of the array forward.
//! The space left behind is recovered only when the array is explicitly
//! [shrunk](generic::SlideVec::shrink) or [resized](generic::SlideVec::resize).
//!
//! Elements are either stored by value, embedded in the backing array
//! ([`by_value::SlideVec`]), or by reference, each one in its own allocation
//! ([`by_ref::SlideVec`]).
//! In the second case the allocations of every slot are made as soon as the
//! capacity grows, and they are never moved: a reallocation of the backing
//! array only moves pointers.
//!
//! ## Basic usage
//!
//! ```rust
//! use slide_vec::SlideVec;
//!
//! let mut vec: SlideVec<u32> = SlideVec::new(); // nothing is allocated yet.
//! vec.push_back(1);
//! vec.push_back(2);
//! vec.push_back(3);
//! assert_eq!(vec.capacity(), 4); // the capacity starts at 4 and doubles.
//!
//! assert_eq!(vec.pop_front(), Some(1)); // O(1).
//! assert_eq!(vec, [2, 3]);
//! assert_eq!(vec.offset(), 1);
//! ```
//!
//! The initial capacity and the number of slots kept free after the last
//! element are given as const parameters:
//! ```rust
//! # use slide_vec::SlideVec;
//! // capacity grows 32, 64, 128... and one slot is always free at the end.
//! let mut text: SlideVec<u8, 32, 1> = SlideVec::new();
//! text.extend(b"hello");
//! assert_eq!(text.capacity(), 32);
//! ```
//!
//! ## By-reference storage
//!
//! ```rust
//! use slide_vec::RefVec;
//!
//! let mut names: RefVec<String> = RefVec::new();
//! names.push_back("ada".to_string());
//! names.push_back("grace".to_string());
//!
//! let mut copy: RefVec<String> = RefVec::new();
//! copy.copy_from(&names);
//! copy[0].push_str(" lovelace");
//! assert_eq!(names[0], "ada"); // every slot is owned by a single vector.
//! ```
pub mod error;
pub mod raw;
pub mod generic;
pub mod by_value;
pub mod by_ref;
mod window;

#[cfg(test)]
mod tests;

pub use error::VecError;
pub use generic::Mode;
pub use by_value::{
	ByValue,
	SlideVec
};
pub use by_ref::ByRef;

/// Vector storing its elements by value.
pub type ValueVec<T, const FLOOR: usize = 4, const PAD: usize = 0> = by_value::SlideVec<T, FLOOR, PAD>;

/// Vector storing its elements by reference.
pub type RefVec<T, const FLOOR: usize = 4, const PAD: usize = 0> = by_ref::SlideVec<T, FLOOR, PAD>;
