//! Tests for periodic-boundary convolution.
//!
//! These tests verify:
//! - Identity kernels (1x1 and unit-center taps) leave inputs unchanged
//! - Shifted single-tap kernels produce cyclic shifts (periodic wrap)
//! - Batched stacks convolve each block independently
//! - Sum conservation under an all-ones kernel
//! - Degenerate extents, complex elements, and the error taxonomy

use approx::assert_relative_eq;
use ndmath::prelude::*;

/// 4x4 plane with values 0..15, axis 0 fastest.
fn plane_0_15() -> NdBuffer<f64> {
    NdBuffer::from_vec(&[4, 4], (0..16).map(|i| i as f64).collect()).unwrap()
}

// ============================================================================
// Identity Kernels
// ============================================================================

#[test]
fn test_conv2_identity_1x1_kernel() {
    let x = plane_0_15();
    let kernel = NdBuffer::from_vec(&[1, 1], vec![1.0]).unwrap();
    let mut z = NdBuffer::zeros(&[4, 4]);

    conv2(&x, &kernel, &mut z).unwrap();
    assert_eq!(z.as_slice(), x.as_slice());
}

#[test]
fn test_conv2_identity_center_tap_3x3() {
    let x = plane_0_15();
    let mut k = vec![0.0; 9];
    k[4] = 1.0; // tap (ro, e1) = (1, 1), the center of a 3x3 kernel
    let kernel = NdBuffer::from_vec(&[3, 3], k).unwrap();
    let mut z = NdBuffer::zeros(&[4, 4]);

    conv2(&x, &kernel, &mut z).unwrap();
    assert_eq!(z.as_slice(), x.as_slice());
}

#[test]
fn test_conv3_identity_1x1x1_kernel() {
    let x = NdBuffer::from_vec(&[2, 3, 4], (0..24).map(|i| i as f64).collect()).unwrap();
    let kernel = NdBuffer::from_vec(&[1, 1, 1], vec![1.0]).unwrap();
    let mut z = NdBuffer::zeros(&[2, 3, 4]);

    conv3(&x, &kernel, &mut z).unwrap();
    assert_eq!(z.as_slice(), x.as_slice());
}

// ============================================================================
// Periodic Shifts
// ============================================================================

#[test]
fn test_conv2_single_tap_shifts_with_wraparound() {
    let x = plane_0_15();
    // (2,1) kernel with the unit tap at offset (+1, 0): every row shifts
    // left by one column, the first column wrapping in from the last.
    let kernel = NdBuffer::from_vec(&[2, 1], vec![1.0, 0.0]).unwrap();
    let mut z = NdBuffer::zeros(&[4, 4]);

    conv2(&x, &kernel, &mut z).unwrap();

    let expected: Vec<f64> = (0..16)
        .map(|i| {
            let (ro, e1) = (i % 4, i / 4);
            ((ro + 1) % 4 + 4 * e1) as f64
        })
        .collect();
    assert_eq!(z.as_slice(), expected.as_slice());
}

#[test]
fn test_conv2_even_kernel_trailing_tap_is_identity() {
    // The tap at index 1 of a (2,1) kernel sits at the flip center: offset 0.
    let x = plane_0_15();
    let kernel = NdBuffer::from_vec(&[2, 1], vec![0.0, 1.0]).unwrap();
    let mut z = NdBuffer::zeros(&[4, 4]);

    conv2(&x, &kernel, &mut z).unwrap();
    assert_eq!(z.as_slice(), x.as_slice());
}

#[test]
fn test_conv3_single_tap_shifts_along_axis_2() {
    let x = NdBuffer::from_vec(&[2, 2, 2], (0..8).map(|i| i as f64).collect()).unwrap();
    // Unit tap at offset +1 along axis 2: z[.., e2] = x[.., (e2+1) % 2]
    let kernel = NdBuffer::from_vec(&[1, 1, 2], vec![1.0, 0.0]).unwrap();
    let mut z = NdBuffer::zeros(&[2, 2, 2]);

    conv3(&x, &kernel, &mut z).unwrap();
    assert_eq!(z.as_slice(), &[4.0, 5.0, 6.0, 7.0, 0.0, 1.0, 2.0, 3.0]);
}

// ============================================================================
// Accumulation Properties
// ============================================================================

#[test]
fn test_conv2_all_ones_kernel_conserves_scaled_sum() {
    let x = plane_0_15();
    let kernel = NdBuffer::from_elem(&[3, 3], 1.0);
    let mut z = NdBuffer::zeros(&[4, 4]);

    conv2(&x, &kernel, &mut z).unwrap();

    // Periodic boundary: every sample is counted exactly once per tap.
    let sum_x: f64 = x.as_slice().iter().sum();
    let sum_z: f64 = z.as_slice().iter().sum();
    assert_relative_eq!(sum_z, 9.0 * sum_x, max_relative = 1e-12);
}

#[test]
fn test_conv2_complex_elements() {
    let i = Complex::new(0.0, 1.0);
    let x = NdBuffer::from_vec(
        &[2, 2],
        vec![
            Complex::new(1.0, 0.0),
            Complex::new(0.0, 2.0),
            Complex::new(-1.0, 0.0),
            Complex::new(3.0, -1.0),
        ],
    )
    .unwrap();
    let kernel = NdBuffer::from_vec(&[1, 1], vec![i]).unwrap();
    let mut z = NdBuffer::zeros(&[2, 2]);

    conv2(&x, &kernel, &mut z).unwrap();
    for (zi, xi) in z.as_slice().iter().zip(x.as_slice()) {
        assert_eq!(*zi, i * *xi);
    }
}

// ============================================================================
// Batched Stacks
// ============================================================================

#[test]
fn test_conv2_batched_planes_convolve_independently() {
    // Two 4x4 planes stacked along axis 2
    let data: Vec<f64> = (0..32).map(|i| i as f64).collect();
    let x = NdBuffer::from_vec(&[4, 4, 2], data).unwrap();
    let kernel = NdBuffer::from_vec(&[2, 1], vec![1.0, 0.0]).unwrap();
    let mut z = NdBuffer::zeros(&[4, 4, 2]);

    conv2(&x, &kernel, &mut z).unwrap();

    for p in 0..2 {
        for e1 in 0..4 {
            for ro in 0..4 {
                let shifted = ((ro + 1) % 4 + 4 * e1 + 16 * p) as f64;
                assert_eq!(z.as_slice()[ro + 4 * e1 + 16 * p], shifted);
            }
        }
    }
}

#[test]
fn test_conv3_batched_volumes() {
    // Three 2x2x2 volumes stacked along axis 3, identity kernel
    let data: Vec<f64> = (0..24).map(|i| (i * i) as f64).collect();
    let x = NdBuffer::from_vec(&[2, 2, 2, 3], data).unwrap();
    let kernel = NdBuffer::from_vec(&[1, 1, 1], vec![1.0]).unwrap();
    let mut z = NdBuffer::zeros(&[2, 2, 2, 3]);

    conv3(&x, &kernel, &mut z).unwrap();
    assert_eq!(z.as_slice(), x.as_slice());
}

// ============================================================================
// Degenerate Extents
// ============================================================================

#[test]
fn test_conv2_single_element_plane() {
    // Every neighbor wraps back to the one sample: z = sum(kernel) * x
    let x = NdBuffer::from_vec(&[1, 1], vec![2.5]).unwrap();
    let kernel = NdBuffer::from_elem(&[3, 3], 1.0);
    let mut z = NdBuffer::zeros(&[1, 1]);

    conv2(&x, &kernel, &mut z).unwrap();
    assert_relative_eq!(z.as_slice()[0], 9.0 * 2.5, max_relative = 1e-12);
}

#[test]
fn test_conv2_reallocates_mismatched_output() {
    let x = plane_0_15();
    let kernel = NdBuffer::from_vec(&[1, 1], vec![1.0]).unwrap();
    let mut z = NdBuffer::zeros(&[2]);

    conv2(&x, &kernel, &mut z).unwrap();
    assert_eq!(z.dims(), &[4, 4]);
    assert_eq!(z.as_slice(), x.as_slice());
}

// ============================================================================
// Error Taxonomy
// ============================================================================

#[test]
fn test_conv2_empty_input_and_kernel() {
    let empty: NdBuffer<f64> = NdBuffer::zeros(&[0]);
    let x = plane_0_15();
    let kernel = NdBuffer::from_vec(&[1, 1], vec![1.0]).unwrap();
    let mut z = NdBuffer::zeros(&[4, 4]);

    assert_eq!(
        conv2(&empty, &kernel, &mut z),
        Err(KernelError::NullBuffer { operand: "input" })
    );
    assert_eq!(
        conv2(&x, &empty, &mut z),
        Err(KernelError::NullBuffer { operand: "kernel" })
    );
}

#[test]
fn test_conv2_rejects_kernel_breaking_single_wrap() {
    let x = NdBuffer::from_vec(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    // half-extent 4 exceeds the plane extent 2
    let kernel = NdBuffer::from_elem(&[9, 1], 1.0);
    let mut z = NdBuffer::zeros(&[2, 2]);

    assert!(matches!(
        conv2(&x, &kernel, &mut z),
        Err(KernelError::ComputeError(_))
    ));
}
