//! Tests for real-buffer sorting.

use ndmath::prelude::*;

fn buf(values: &[f64]) -> NdBuffer<f64> {
    NdBuffer::from_vec(&[values.len()], values.to_vec()).unwrap()
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_sort_ascending_and_descending() {
    let x = buf(&[3.0, -1.0, 2.0, -1.5]);

    let mut r = NdBuffer::zeros(&[4]);
    sort(&x, &mut r, true).unwrap();
    assert_eq!(r.as_slice(), &[-1.5, -1.0, 2.0, 3.0]);

    sort(&x, &mut r, false).unwrap();
    assert_eq!(r.as_slice(), &[3.0, 2.0, -1.0, -1.5]);

    // Input untouched
    assert_eq!(x.as_slice(), &[3.0, -1.0, 2.0, -1.5]);
}

#[test]
fn test_sort_reallocates_mismatched_output() {
    let x = buf(&[2.0, 1.0]);
    let mut r = NdBuffer::zeros(&[5]);

    sort(&x, &mut r, true).unwrap();
    assert_eq!(r.dims(), &[2]);
    assert_eq!(r.as_slice(), &[1.0, 2.0]);
}

#[test]
fn test_sort_empty_buffer() {
    let x: NdBuffer<f64> = NdBuffer::zeros(&[0]);
    let mut r: NdBuffer<f64> = NdBuffer::zeros(&[0]);
    sort(&x, &mut r, true).unwrap();
    assert!(r.is_empty());
}

#[test]
fn test_sort_with_duplicates() {
    let x = buf(&[1.0, 3.0, 1.0, 3.0, 2.0]);
    let mut r = NdBuffer::zeros(&[5]);
    sort(&x, &mut r, true).unwrap();
    assert_eq!(r.as_slice(), &[1.0, 1.0, 2.0, 3.0, 3.0]);
}
