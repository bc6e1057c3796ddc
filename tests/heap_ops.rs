use ndarray_heap::{Heap1Ext, HeapError, MaxHeap, ndarray::Array2, ndarray::arr1};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::BinaryHeap;

#[test]
fn build_heap_of_consecutive_values() {
	let mut v = arr1(&[1, 2, 3, 4, 5, 6, 7, 8]);
	v.build_heap();
	assert!(v.is_heap());
	let mut values = v.to_vec();
	values.sort_unstable();
	assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn extract_max_after_build() {
	let mut heap = MaxHeap::from_vec(vec![16, 4, 10, 14, 7, 9, 3, 2, 8, 1]);
	assert_eq!(heap.pop(), Ok(16));
	assert_eq!(heap.len(), 9);
	let mut rest = heap.into_vec();
	rest.sort_unstable();
	assert_eq!(rest, [1, 2, 3, 4, 7, 8, 9, 10, 14]);
}

#[test]
fn rejected_key_update_leaves_heap_unchanged() {
	let mut heap = MaxHeap::from_vec(vec![16, 4, 10, 14, 7, 9, 3, 2, 8, 1]);
	let before = heap.as_slice().to_vec();
	assert_eq!(heap.increase_key(3, 4), Err(HeapError::InvalidKeyUpdate));
	assert_eq!(heap.as_slice(), before);
}

#[test]
fn random_ops_match_binary_heap() {
	let mut rng = StdRng::seed_from_u64(0x6865_6170);
	for _ in 0..100 {
		let mut heap = MaxHeap::new();
		let mut model = BinaryHeap::new();
		for _ in 0..200 {
			match rng.random_range(0..4u8) {
				0 | 1 => {
					let key: u32 = rng.random_range(0..1_000);
					heap.push(key);
					model.push(key);
				}
				2 => assert_eq!(heap.pop().ok(), model.pop()),
				_ => assert_eq!(heap.peek().ok(), model.peek()),
			}
			assert_eq!(heap.len(), model.len());
		}
		assert_eq!(heap.into_sorted_vec(), model.into_sorted_vec());
	}
}

#[test]
fn sorting_columns_of_random_matrix() {
	let mut rng = StdRng::seed_from_u64(0x736f_7274);
	let mut v = Array2::from_shape_fn((32, 8), |_| rng.random_range(0..100u32));
	for mut column in v.columns_mut() {
		// Columns of a row-major matrix are non-contiguous.
		assert_eq!(column.as_slice_mut(), None);
		column.heap_sort();
	}
	for column in v.columns() {
		for i in 1..column.len() {
			assert!(column[i - 1] <= column[i]);
		}
	}
}
