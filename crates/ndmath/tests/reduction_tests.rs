//! Tests for scalar-producing reductions.
//!
//! These tests verify:
//! - 1- and 2-norms over real and complex buffers
//! - Conjugate and plain dot products
//! - The norm/dot consistency identity `norm2(x)^2 == dotc(x, x).re`
//! - Min/max-by-magnitude scans with first-occurrence tie-breaking
//! - Documented empty-buffer results

use approx::assert_relative_eq;
use ndmath::prelude::*;

fn buf(values: &[f64]) -> NdBuffer<f64> {
    NdBuffer::from_vec(&[values.len()], values.to_vec()).unwrap()
}

fn cbuf(values: &[(f64, f64)]) -> NdBuffer<Complex<f64>> {
    NdBuffer::from_vec(
        &[values.len()],
        values.iter().map(|&(re, im)| Complex::new(re, im)).collect(),
    )
    .unwrap()
}

// ============================================================================
// Norms
// ============================================================================

#[test]
fn test_norm2_real() {
    let x = buf(&[3.0, 4.0]);
    assert_relative_eq!(norm2(&x), 5.0, max_relative = 1e-12);
}

#[test]
fn test_norm2_complex() {
    // |3+4i| = 5, |i| = 1 -> sqrt(25 + 1)
    let x = cbuf(&[(3.0, 4.0), (0.0, 1.0)]);
    assert_relative_eq!(norm2(&x), 26.0_f64.sqrt(), max_relative = 1e-12);
}

#[test]
fn test_norm1_sums_magnitudes() {
    let x = buf(&[-3.0, 4.0, -5.0]);
    assert_relative_eq!(norm1(&x), 12.0, max_relative = 1e-12);

    let x = cbuf(&[(3.0, 4.0), (0.0, -1.0)]);
    assert_relative_eq!(norm1(&x), 6.0, max_relative = 1e-12);
}

#[test]
fn test_norms_on_empty_buffer_are_zero() {
    let x: NdBuffer<f64> = NdBuffer::zeros(&[0]);
    assert_eq!(norm1(&x), 0.0);
    assert_eq!(norm2(&x), 0.0);
}

#[test]
fn test_norm2_large_buffer_parallel_reduction() {
    let n = 10_000;
    let x = NdBuffer::from_elem(&[n], 2.0_f64);
    assert_relative_eq!(norm2(&x), (4.0 * n as f64).sqrt(), max_relative = 1e-12);
    assert_relative_eq!(norm1(&x), 2.0 * n as f64, max_relative = 1e-12);
}

// ============================================================================
// Dot Products
// ============================================================================

#[test]
fn test_dotc_conjugates_first_argument() {
    let x = cbuf(&[(0.0, 1.0)]);
    let y = cbuf(&[(1.0, 0.0)]);
    // conj(i) * 1 = -i
    assert_eq!(dotc(&x, &y).unwrap(), Complex::new(0.0, -1.0));
}

#[test]
fn test_dotu_does_not_conjugate() {
    let x = cbuf(&[(0.0, 1.0)]);
    let y = cbuf(&[(0.0, 1.0)]);
    // i * i = -1, while conj(i) * i = 1
    assert_eq!(dotu(&x, &y).unwrap(), Complex::new(-1.0, 0.0));
    assert_eq!(dotc(&x, &y).unwrap(), Complex::new(1.0, 0.0));
}

#[test]
fn test_norm2_squared_equals_dotc_with_self() {
    let x = cbuf(&[(1.0, 2.0), (-3.0, 0.5), (0.0, -4.0)]);
    let d = dotc(&x, &x).unwrap();
    let n = norm2(&x);

    assert_relative_eq!(d.re, n * n, max_relative = 1e-12);
    assert_relative_eq!(d.im, 0.0, epsilon = 1e-12);
}

#[test]
fn test_dot_shape_mismatch() {
    let x = buf(&[1.0, 2.0]);
    let y = buf(&[1.0]);
    assert_eq!(
        dotc(&x, &y),
        Err(KernelError::ShapeMismatch { expected: 2, got: 1 })
    );
    assert_eq!(
        dotu(&x, &y),
        Err(KernelError::ShapeMismatch { expected: 2, got: 1 })
    );
}

#[test]
fn test_dot_on_empty_buffers_is_additive_identity() {
    let x: NdBuffer<Complex<f64>> = NdBuffer::zeros(&[0]);
    let y: NdBuffer<Complex<f64>> = NdBuffer::zeros(&[0]);
    assert_eq!(dotc(&x, &y).unwrap(), Complex::new(0.0, 0.0));
    assert_eq!(dotu(&x, &y).unwrap(), Complex::new(0.0, 0.0));
}

// ============================================================================
// Magnitude Scans
// ============================================================================

#[test]
fn test_min_max_abs_documented_example() {
    // Magnitudes: 5, sqrt(2), 0, 5
    let x = cbuf(&[(3.0, 4.0), (1.0, 1.0), (0.0, 0.0), (-5.0, 0.0)]);

    let (min_val, min_idx) = min_abs(&x).unwrap();
    assert_eq!(min_val, Complex::new(0.0, 0.0));
    assert_eq!(min_idx, 2);

    // 3+4i at index 0 ties -5 at index 3; first occurrence wins.
    let (max_val, max_idx) = max_abs(&x).unwrap();
    assert_eq!(max_val, Complex::new(3.0, 4.0));
    assert_eq!(max_idx, 0);
}

#[test]
fn test_min_max_abs_return_raw_values() {
    let x = buf(&[-5.0, 1.0, 5.0]);

    // |-5| ties |5|; the first occurrence is returned, sign intact.
    assert_eq!(max_abs(&x).unwrap(), (-5.0, 0));
    assert_eq!(min_abs(&x).unwrap(), (1.0, 1));
}

#[test]
fn test_min_max_abs_on_empty_buffer() {
    let x: NdBuffer<f64> = NdBuffer::zeros(&[0]);
    assert_eq!(min_abs(&x), None);
    assert_eq!(max_abs(&x), None);
}

#[test]
fn test_min_max_abs_single_element() {
    let x = cbuf(&[(0.0, -2.0)]);
    assert_eq!(min_abs(&x).unwrap(), (Complex::new(0.0, -2.0), 0));
    assert_eq!(max_abs(&x).unwrap(), (Complex::new(0.0, -2.0), 0));
}
