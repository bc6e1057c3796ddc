//! Array-backed binary max-heap algorithms (e.g., [construction], [sorting], [extraction]) for
//! 1-dimensional (sub)views into *n*-dimensional [`ndarray`] arrays with arbitrary memory
//! layout (e.g., non-contiguous), plus a growable [`MaxHeap`] priority queue over a contiguous
//! buffer.
//!
//! # Example
//!
//! ```
//! use ndarray_heap::{Heap1Ext, ndarray::arr2};
//!
//! // 2-dimensional array of 4 rows and 3 columns.
//! let mut v = arr2(&[[-5, 4, 1],   // row 0, axis 0
//!                    [ 8, 3, 2],   // row 1, axis 0
//!                    [38, 9, 3],   // row 2, axis 0
//!                    [ 4, 9, 0]]); // row 3, axis 0
//!
//! // Mutable subview into the first column.
//! let mut column = v.column_mut(0);
//!
//! // Due to row-major memory layout, columns are non-contiguous
//! // and hence cannot be heapified by viewing them as mutable slices.
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // Instead, the heap operations are specifically implemented for
//! // non-contiguous mutable (sub)views.
//! column.build_heap();
//!
//! assert!(column.is_heap());
//! assert_eq!(column.peek_max(), Ok(&38));
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view or heap.
//!
//! | Operation | [`build_heap`] | [`heapify`]  | [`heap_sort`]    | [`pop`]      | [`push`]     | [`increase_key`] | [`peek_max`] |
//! |-----------|----------------|--------------|------------------|--------------|--------------|------------------|--------------|
//! | Time      | *O*(*n*)       | *O*(log *n*) | *O*(*n* log *n*) | *O*(log *n*) | *O*(log *n*) | *O*(log *n*)     | *O*(1)       |
//! | Space     | *O*(1)         | *O*(1)       | *O*(1)           | *O*(1)       | *O*(1)       | *O*(1)           | *O*(1)       |
//!
//! Every sift walks a single root-to-leaf path with a bounded loop instead of recursion. All
//! operations are single-threaded and non-suspending; sharing a heap across threads requires
//! external synchronization around each call.
//!
//! [construction]: Heap1Ext::build_heap
//! [sorting]: Heap1Ext::heap_sort
//! [extraction]: MaxHeap::pop
//!
//! [`build_heap`]: Heap1Ext::build_heap
//! [`heapify`]: Heap1Ext::heapify
//! [`heap_sort`]: Heap1Ext::heap_sort
//! [`pop`]: MaxHeap::pop
//! [`push`]: MaxHeap::push
//! [`increase_key`]: MaxHeap::increase_key
//! [`peek_max`]: Heap1Ext::peek_max
//!
//! # Features
//!
//!   * `alloc` for the growable [`MaxHeap`]. Enabled by `std`.
//!   * `std` for `std` interop of [`ndarray`] and [`HeapError`]. Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
mod heap;
mod sift;

pub use crate::error::HeapError;
#[cfg(feature = "alloc")]
pub use crate::heap::MaxHeap;

use crate::sift::{build_heap, heap_sort, is_heap, sift_down};
use ndarray::{ArrayBase, Data, DataMut, Ix1, s};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing binary max-heap operations (e.g.,
/// [construction], [sorting], [extraction]).
///
/// A view of length *n* is interpreted as a binary tree rooted at index 0 where the node at
/// index *i* has its left child at `2 * i + 1`, its right child at `2 * i + 2`, and, unless it
/// is the root, its parent at `(i - 1) / 2`. The max-heap invariant requires every parent to
/// be greater than or equal to both of its children, placing the maximum at the root.
///
/// The ordering is fixed to the maximum ordering of [`Ord`]; for a minimum ordering or custom
/// priorities, wrap the element type (e.g., in [`core::cmp::Reverse`]).
///
/// The operations here leave the length unchanged. Insertion and extraction grow and shrink
/// the underlying storage and hence live on the owning [`MaxHeap`].
///
/// [construction]: Heap1Ext::build_heap
/// [sorting]: Heap1Ext::heap_sort
/// [extraction]: Heap1Ext::peek_max
pub trait Heap1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Rearranges the array into a binary max-heap, in place.
	///
	/// After this call, [`is_heap`](Self::is_heap) holds over the full length and the maximum
	/// occupies index 0.
	///
	/// # Current Implementation
	///
	/// Sifts down every non-leaf node from the last one toward the root, so both subtrees of a
	/// node are already max-heaps by the time the node itself is sifted. This bottom-up pass
	/// runs in *O*(*n*) time and *O*(1) space.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{Heap1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[1, 2, 3, 4, 5, 6, 7, 8]);
	///
	/// v.build_heap();
	/// assert!(v.is_heap());
	/// assert_eq!(v.peek_max(), Ok(&8));
	/// ```
	fn build_heap(&mut self)
	where
		A: Ord,
		S: DataMut;

	/// Restores the max-heap invariant at the subtree rooted at `node`, within the logical
	/// heap region `..size`.
	///
	/// Both subtrees of `node` must already be valid max-heaps within `size`. Elements at
	/// `size..` are untouched, allowing a sorted suffix to coexist with the heap region.
	/// A no-op for `size <= 1` as there is nothing to compare.
	///
	/// # Current Implementation
	///
	/// Sifts the value at `node` down along a single root-to-leaf path, swapping it with its
	/// greater child until both children are no longer greater, in *O*(log *size*) time and
	/// *O*(1) space.
	///
	/// # Panics
	///
	/// Panics when `size > len()` or when `node >= size` for `size > 1`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{Heap1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[16, 4, 10, 14, 7, 9, 3, 2, 8, 1]);
	///
	/// let size = v.len();
	/// v.heapify(1, size);
	/// assert_eq!(v, arr1(&[16, 14, 10, 8, 7, 9, 3, 2, 4, 1]));
	/// ```
	fn heapify(&mut self, node: usize, size: usize)
	where
		A: Ord,
		S: DataMut;

	/// Sorts the array in ascending order using heapsort, in place.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), and *O*(*n* \* log(*n*)) worst-case.
	///
	/// # Current Implementation
	///
	/// Builds a max-heap over the full length, then repeatedly swaps the root (the current
	/// maximum) into the last unsorted slot, shrinks the logical heap region by one, and sifts
	/// the new root back down.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{Heap1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[16, 4, 10, 14, 7, 9, 3, 2, 8, 1]);
	///
	/// v.heap_sort();
	/// assert_eq!(v, arr1(&[1, 2, 3, 4, 7, 8, 9, 10, 14, 16]));
	/// ```
	fn heap_sort(&mut self)
	where
		A: Ord,
		S: DataMut;

	/// Checks the max-heap invariant over the full length.
	///
	/// That is, for every node but the root, its parent must be greater than or equal to it.
	/// Arrays of length zero or one are trivially heaps.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{Heap1Ext, ndarray::arr1};
	///
	/// assert!(arr1(&[8, 5, 7, 4, 2, 6, 3, 1]).is_heap());
	/// assert!(!arr1(&[1, 2, 3]).is_heap());
	/// assert!(arr1(&[0]).is_heap());
	/// ```
	#[must_use]
	fn is_heap(&self) -> bool
	where
		A: Ord;

	/// Returns the maximum without removing it, in *O*(1).
	///
	/// The array must be a valid max-heap (e.g., via [`build_heap`](Self::build_heap)) for the
	/// root to be the maximum.
	///
	/// # Errors
	///
	/// Fails with [`HeapError::Underflow`] when the array is empty.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{Heap1Ext, HeapError, ndarray::arr1};
	///
	/// let mut v = arr1(&[16, 4, 10, 14, 7, 9, 3, 2, 8, 1]);
	///
	/// v.build_heap();
	/// assert_eq!(v.peek_max(), Ok(&16));
	///
	/// let empty = arr1(&[0; 0]);
	/// assert_eq!(empty.peek_max(), Err(HeapError::Underflow));
	/// ```
	fn peek_max(&self) -> Result<&A, HeapError>;
}

impl<A, S> Heap1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn build_heap(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		build_heap(self.view_mut(), A::lt);
	}
	fn heapify(&mut self, node: usize, size: usize)
	where
		A: Ord,
		S: DataMut,
	{
		assert!(size <= self.len(), "size out of bounds");
		if size <= 1 {
			return;
		}
		assert!(node < size, "node out of bounds");
		sift_down(self.slice_mut(s![..size]), node, &mut A::lt);
	}
	#[inline]
	fn heap_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		heap_sort(self.view_mut(), A::lt);
	}
	#[inline]
	fn is_heap(&self) -> bool
	where
		A: Ord,
	{
		is_heap(self.view(), A::lt)
	}
	#[inline]
	fn peek_max(&self) -> Result<&A, HeapError> {
		self.first().ok_or(HeapError::Underflow)
	}
}
