//! Growable binary max-heap backed by a contiguous buffer.

#![cfg(feature = "alloc")]

use crate::{
	HeapError,
	sift::{build_heap, heap_sort, sift_down, sift_up},
};
use alloc::vec::Vec;
use ndarray::ArrayViewMut1;

/// A growable binary max-heap over a contiguous buffer.
///
/// Complements [`Heap1Ext`](crate::Heap1Ext) with the operations that change the number of
/// elements, which fixed-length array views cannot express: [`push`](Self::push) grows the
/// buffer by one with amortized *O*(1) append and [`pop`](Self::pop) shrinks it by one with
/// *O*(1) tail removal, keeping both operations *O*(log *n*) overall. The sift routines run
/// over a 1-dimensional view into the buffer, shared with [`Heap1Ext`](crate::Heap1Ext).
///
/// The ordering is the maximum ordering of [`Ord`]; every parent is greater than or equal to
/// its children and the maximum occupies the root. All operations either succeed with the
/// invariant restored or fail with [`HeapError`] leaving the heap unmodified.
///
/// # Examples
///
/// ```
/// use ndarray_heap::MaxHeap;
///
/// let mut heap = MaxHeap::from_vec(vec![16, 4, 10, 14, 7, 9, 3, 2, 8, 1]);
///
/// assert_eq!(heap.peek(), Ok(&16));
/// assert_eq!(heap.pop(), Ok(16));
/// assert_eq!(heap.pop(), Ok(14));
///
/// heap.push(15);
/// assert_eq!(heap.pop(), Ok(15));
/// ```
#[derive(Debug, Clone)]
pub struct MaxHeap<A> {
	data: Vec<A>,
}

impl<A> Default for MaxHeap<A> {
	fn default() -> Self {
		Self { data: Vec::new() }
	}
}

impl<A: Ord> MaxHeap<A> {
	/// Creates an empty heap.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{HeapError, MaxHeap};
	///
	/// let mut heap = MaxHeap::new();
	/// assert_eq!(heap.pop(), Err(HeapError::Underflow));
	///
	/// heap.push(2);
	/// assert_eq!(heap.pop(), Ok(2));
	/// ```
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a heap over `data` in place, in *O*(*n*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::MaxHeap;
	///
	/// let heap = MaxHeap::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8]);
	/// assert_eq!(heap.peek(), Ok(&8));
	/// ```
	#[must_use]
	pub fn from_vec(data: Vec<A>) -> Self {
		let mut heap = Self { data };
		build_heap(heap.view_mut(), A::lt);
		heap
	}

	/// Returns the number of elements in the heap.
	#[must_use]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Checks whether the heap contains no elements.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Returns the maximum without removing it, in *O*(1).
	///
	/// # Errors
	///
	/// Fails with [`HeapError::Underflow`] when the heap is empty.
	pub fn peek(&self) -> Result<&A, HeapError> {
		self.data.first().ok_or(HeapError::Underflow)
	}

	/// Removes the maximum and returns it, in *O*(log *n*).
	///
	/// The last element moves into the root slot, the buffer shrinks by one, and the root is
	/// sifted back down.
	///
	/// # Errors
	///
	/// Fails with [`HeapError::Underflow`] when the heap is empty, without mutating it.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::MaxHeap;
	///
	/// let mut heap = MaxHeap::from_vec(vec![16, 4, 10, 14, 7, 9, 3, 2, 8, 1]);
	///
	/// assert_eq!(heap.pop(), Ok(16));
	/// assert_eq!(heap.len(), 9);
	/// ```
	pub fn pop(&mut self) -> Result<A, HeapError> {
		if self.data.is_empty() {
			return Err(HeapError::Underflow);
		}
		let max = self.data.swap_remove(0);
		sift_down(self.view_mut(), 0, &mut A::lt);
		Ok(max)
	}

	/// Inserts `key` at its correct position, in *O*(log *n*).
	///
	/// Appends `key` as the new last leaf and sifts it up, with no placeholder element.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::MaxHeap;
	///
	/// let mut heap = MaxHeap::from_vec(vec![16, 4, 10, 14, 7, 9, 3, 2, 8, 1]);
	///
	/// heap.push(15);
	/// assert_eq!(heap.len(), 11);
	/// assert_eq!(heap.peek(), Ok(&16));
	/// ```
	pub fn push(&mut self, key: A) {
		self.data.push(key);
		let node = self.data.len() - 1;
		sift_up(self.view_mut(), node, &mut A::lt);
	}

	/// Raises the key at `node` to `key` and sifts it up to its correct position, in
	/// *O*(log *n*).
	///
	/// # Errors
	///
	/// Fails with [`HeapError::InvalidKeyUpdate`] when `key` is smaller than the key currently
	/// stored at `node`, without mutating the heap. Replacing a key with an equal one is
	/// permitted.
	///
	/// # Panics
	///
	/// Panics when `node >= len()`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{HeapError, MaxHeap};
	///
	/// let mut heap = MaxHeap::from_vec(vec![16, 4, 10, 14, 7, 9, 3, 2, 8, 1]);
	///
	/// assert_eq!(heap.increase_key(3, 17), Ok(()));
	/// assert_eq!(heap.peek(), Ok(&17));
	///
	/// assert_eq!(heap.increase_key(3, 4), Err(HeapError::InvalidKeyUpdate));
	/// ```
	pub fn increase_key(&mut self, node: usize, key: A) -> Result<(), HeapError> {
		if key < self.data[node] {
			return Err(HeapError::InvalidKeyUpdate);
		}
		self.data[node] = key;
		sift_up(self.view_mut(), node, &mut A::lt);
		Ok(())
	}

	/// Consumes the heap and returns its buffer sorted in ascending order, in
	/// *O*(*n* \* log(*n*)).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::MaxHeap;
	///
	/// let heap = MaxHeap::from_vec(vec![16, 4, 10, 14, 7, 9, 3, 2, 8, 1]);
	/// assert_eq!(
	/// 	heap.into_sorted_vec(),
	/// 	vec![1, 2, 3, 4, 7, 8, 9, 10, 14, 16],
	/// );
	/// ```
	#[must_use]
	pub fn into_sorted_vec(mut self) -> Vec<A> {
		heap_sort(self.view_mut(), A::lt);
		self.data
	}

	fn view_mut(&mut self) -> ArrayViewMut1<'_, A> {
		ArrayViewMut1::from(&mut self.data[..])
	}
}

impl<A> MaxHeap<A> {
	/// Returns the elements in heap order as a slice.
	#[must_use]
	pub fn as_slice(&self) -> &[A] {
		&self.data
	}

	/// Consumes the heap and returns its buffer in heap order.
	#[must_use]
	pub fn into_vec(self) -> Vec<A> {
		self.data
	}
}

impl<A: Ord> From<Vec<A>> for MaxHeap<A> {
	fn from(data: Vec<A>) -> Self {
		Self::from_vec(data)
	}
}

impl<A: Ord> FromIterator<A> for MaxHeap<A> {
	fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
		Self::from_vec(iter.into_iter().collect())
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::MaxHeap;
	use crate::{HeapError, sift::is_heap};
	use ndarray::ArrayView1;
	use quickcheck_macros::quickcheck;

	fn heap_valid(heap: &MaxHeap<u32>) -> bool {
		is_heap(ArrayView1::from(heap.as_slice()), u32::lt)
	}

	fn multiset(mut xs: Vec<u32>) -> Vec<u32> {
		xs.sort_unstable();
		xs
	}

	#[quickcheck]
	fn built(xs: Vec<u32>) {
		let heap = MaxHeap::from_vec(xs.clone());
		assert!(heap_valid(&heap));
		assert_eq!(multiset(heap.into_vec()), multiset(xs));
	}

	#[quickcheck]
	fn popped_max(xs: Vec<u32>) {
		let mut heap = MaxHeap::from_vec(xs.clone());
		match heap.pop() {
			Ok(max) => {
				assert_eq!(Some(&max), xs.iter().max());
				assert!(heap_valid(&heap));
				assert_eq!(heap.len(), xs.len() - 1);
				let mut rest = multiset(xs);
				let at = rest.binary_search(&max).unwrap();
				rest.remove(at);
				assert_eq!(multiset(heap.into_vec()), rest);
			}
			Err(error) => {
				assert_eq!(error, HeapError::Underflow);
				assert!(xs.is_empty());
				assert!(heap.is_empty());
			}
		}
	}

	#[quickcheck]
	fn pushed(xs: Vec<u32>, key: u32) {
		let mut heap = MaxHeap::from_vec(xs.clone());
		heap.push(key);
		assert!(heap_valid(&heap));
		assert_eq!(heap.len(), xs.len() + 1);
		let mut xs = xs;
		xs.push(key);
		assert_eq!(multiset(heap.into_vec()), multiset(xs));
	}

	#[quickcheck]
	fn key_increased(xs: Vec<u32>, node: usize, raise: u32) {
		if xs.is_empty() {
			return;
		}
		let mut heap = MaxHeap::from_vec(xs);
		let node = node % heap.len();
		let old = heap.as_slice()[node];
		let new = old.saturating_add(raise);
		let mut rest = multiset(heap.as_slice().to_vec());
		assert_eq!(heap.increase_key(node, new), Ok(()));
		assert!(heap_valid(&heap));
		let at = rest.binary_search(&old).unwrap();
		rest[at] = new;
		assert_eq!(multiset(heap.into_vec()), multiset(rest));
	}

	#[quickcheck]
	fn key_decrease_rejected(xs: Vec<u32>, node: usize) {
		if xs.is_empty() {
			return;
		}
		let mut heap = MaxHeap::from_vec(xs);
		let node = node % heap.len();
		let Some(new) = heap.as_slice()[node].checked_sub(1) else {
			return;
		};
		let before = heap.as_slice().to_vec();
		assert_eq!(
			heap.increase_key(node, new),
			Err(HeapError::InvalidKeyUpdate)
		);
		assert_eq!(heap.as_slice(), before);
	}

	#[quickcheck]
	fn drained_descending(xs: Vec<u32>) {
		let mut heap: MaxHeap<u32> = xs.iter().copied().collect();
		let mut drained = Vec::new();
		while let Ok(max) = heap.pop() {
			drained.push(max);
		}
		drained.reverse();
		assert_eq!(drained, multiset(xs));
	}

	#[test]
	fn underflow() {
		let mut heap = MaxHeap::<u32>::new();
		assert_eq!(heap.peek(), Err(HeapError::Underflow));
		assert_eq!(heap.pop(), Err(HeapError::Underflow));
		assert!(heap.is_empty());
	}

	#[test]
	fn equal_key_update_is_permitted() {
		let mut heap = MaxHeap::from_vec(vec![3, 1, 2]);
		assert_eq!(heap.increase_key(0, 3), Ok(()));
		assert_eq!(heap.peek(), Ok(&3));
	}

	#[test]
	fn increased_key_sifts_to_root() {
		let mut heap = MaxHeap::from_vec(vec![16, 4, 10, 14, 7, 9, 3, 2, 8, 1]);
		assert_eq!(heap.as_slice(), [16, 14, 10, 8, 7, 9, 3, 2, 4, 1]);
		assert_eq!(heap.increase_key(3, 17), Ok(()));
		assert_eq!(heap.as_slice(), [17, 16, 10, 14, 7, 9, 3, 2, 4, 1]);
	}
}
