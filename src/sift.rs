//! Binary max-heap primitives over 1-dimensional (sub)views.
//!
//! Derivative work of [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

use ndarray::{ArrayView1, ArrayViewMut1, s};

/// Index of the parent of `node`. Must not be called on the root.
#[inline]
pub fn parent(node: usize) -> usize {
	(node - 1) / 2
}

/// Index of the left child of `node`.
#[inline]
pub fn left(node: usize) -> usize {
	2 * node + 1
}

/// Index of the right child of `node`.
#[inline]
pub fn right(node: usize) -> usize {
	2 * node + 2
}

/// Sifts the value at `node` down until the invariant `parent >= child` holds below it.
///
/// Both subtrees of `node` must already respect the invariant. Walks a single root-to-leaf
/// path with a bounded loop, hence *O*(log *n*) time and *O*(1) space. Elements outside the
/// view are untouched, so sifting within a logical heap size is done by slicing `v` first.
pub fn sift_down<T, F>(mut v: ArrayViewMut1<'_, T>, mut node: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		// Children of `node`.
		let mut child = left(node);
		if child >= v.len() {
			break;
		}

		// Choose the greater child, preferring the left on ties.
		if right(node) < v.len() && is_less(&v[child], &v[right(node)]) {
			child = right(node);
		}

		// Stop if the invariant holds at `node`.
		if !is_less(&v[node], &v[child]) {
			break;
		}

		// Swap `node` with the greater child, move one step down, and continue sifting.
		v.swap(node, child);
		node = child;
	}
}

/// Sifts the value at `node` up toward the root until the invariant `parent >= child` holds
/// above it.
///
/// The view must respect the invariant everywhere except at `node`, whose value may only have
/// grown. Terminates at the root or at the first parent that is no longer smaller.
pub fn sift_up<T, F>(mut v: ArrayViewMut1<'_, T>, mut node: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	while node > 0 && is_less(&v[parent(node)], &v[node]) {
		v.swap(node, parent(node));
		node = parent(node);
	}
}

/// Builds a max-heap over the full view in *O*(*n*).
///
/// Sifts down every non-leaf node from the last one toward the root, so both subtrees of a
/// node are already max-heaps by the time the node itself is sifted.
pub fn build_heap<T, F>(mut v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	F: FnMut(&T, &T) -> bool,
{
	for node in (0..v.len() / 2).rev() {
		sift_down(v.view_mut(), node, &mut is_less);
	}
}

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
pub fn heap_sort<T, F>(mut v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Build the heap in linear time.
	build_heap(v.view_mut(), &mut is_less);

	// Pop maximal elements from the heap into the sorted suffix.
	for i in (1..v.len()).rev() {
		v.swap(0, i);
		sift_down(v.slice_mut(s![..i]), 0, &mut is_less);
	}
}

/// Checks the invariant `parent >= child` over the full view.
///
/// Views of length zero or one are trivially heaps.
pub fn is_heap<T, F>(v: ArrayView1<'_, T>, mut is_less: F) -> bool
where
	F: FnMut(&T, &T) -> bool,
{
	(1..v.len()).all(|node| !is_less(&v[parent(node)], &v[node]))
}
