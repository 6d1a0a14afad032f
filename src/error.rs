use core::alloc::Layout;
use thiserror::Error;

/// Error returned by every operation that changes the capacity of a
/// [`SlideVec`](crate::generic::SlideVec).
///
/// Whenever one of these is returned the container is left exactly as it was
/// before the failing call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VecError {
	/// A fresh allocation failed: the first backing array, or one of the
	/// individually allocated slots of a by-reference container.
	#[error("memory allocation of {} bytes failed", .layout.size())]
	AllocationFailed {
		layout: Layout
	},

	/// Growing or shrinking an existing backing array failed.
	#[error("memory reallocation to {} bytes failed", .layout.size())]
	ReallocationFailed {
		layout: Layout
	},

	/// The requested capacity does not fit in the address space.
	#[error("capacity overflow")]
	CapacityOverflow
}

impl VecError {
	/// Layout of the allocation that failed, if any.
	pub fn layout(&self) -> Option<Layout> {
		match self {
			VecError::AllocationFailed { layout } => Some(*layout),
			VecError::ReallocationFailed { layout } => Some(*layout),
			VecError::CapacityOverflow => None
		}
	}
}
