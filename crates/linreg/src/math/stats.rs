//! Single-pass statistical accumulation.
//!
//! ## Purpose
//!
//! This module accumulates the raw sums a least-squares fit needs — Σx, Σy,
//! Σx², Σxy — in one pass over paired samples, and derives means, variance,
//! and covariance from them.
//!
//! ## Design notes
//!
//! * **One pass, O(1) state**: Only the four running sums and a count are
//!   kept, regardless of input size.
//! * **Specialization**: `f32`/`f64` accumulate through SIMD lanes (`wide`),
//!   with a generic scalar path for every other `Float` type, selected
//!   through the [`MomentAccumulator`] trait.
//! * **Unnormalized**: Variance and covariance are left scaled by n; the
//!   shared factor cancels in the slope ratio.
//!
//! ## Invariants
//!
//! * Scalar and SIMD paths accumulate the same sums up to floating-point
//!   reassociation.
//! * `n` counts the pairs actually consumed (the shorter of the two inputs).
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (lengths, finiteness).
//! * This module does not solve for coefficients (see the algorithms layer).

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// ============================================================================
// Moments
// ============================================================================

/// Raw sums from a single pass over paired samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<T> {
    /// Number of pairs consumed.
    pub n: usize,

    /// Sum of x-values.
    pub sum_x: T,

    /// Sum of y-values.
    pub sum_y: T,

    /// Sum of squared x-values.
    pub sum_xx: T,

    /// Sum of x·y products.
    pub sum_xy: T,
}

impl<T: Float> Moments<T> {
    /// Mean of the x-values; zero for an empty sample.
    pub fn mean_x(&self) -> T {
        if self.n == 0 {
            return T::zero();
        }
        self.sum_x / T::from(self.n).unwrap_or(T::one())
    }

    /// Mean of the y-values; zero for an empty sample.
    pub fn mean_y(&self) -> T {
        if self.n == 0 {
            return T::zero();
        }
        self.sum_y / T::from(self.n).unwrap_or(T::one())
    }

    /// Variance of x, scaled by n: Σ(x − mean_x)² = Σx² − (Σx)²/n.
    pub fn variance_x(&self) -> T {
        if self.n == 0 {
            return T::zero();
        }
        let n_t = T::from(self.n).unwrap_or(T::one());
        self.sum_xx - (self.sum_x * self.sum_x) / n_t
    }

    /// Covariance of x and y, scaled by n: Σxy − (Σx·Σy)/n.
    pub fn covariance(&self) -> T {
        if self.n == 0 {
            return T::zero();
        }
        let n_t = T::from(self.n).unwrap_or(T::one());
        self.sum_xy - (self.sum_x * self.sum_y) / n_t
    }
}

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar accumulation of paired-sample moments (generic Float).
#[inline]
pub fn accumulate_scalar<T: Float>(x: &[T], y: &[T]) -> Moments<T> {
    let n = x.len().min(y.len());

    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xx = T::zero();
    let mut sum_xy = T::zero();

    for i in 0..n {
        let x_val = x[i];
        let y_val = y[i];

        sum_x = sum_x + x_val;
        sum_y = sum_y + y_val;
        sum_xx = sum_xx + x_val * x_val;
        sum_xy = sum_xy + x_val * y_val;
    }

    Moments {
        n,
        sum_x,
        sum_y,
        sum_xx,
        sum_xy,
    }
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized accumulation of paired-sample moments (f64).
#[inline]
pub fn accumulate_simd_f64(x: &[f64], y: &[f64]) -> Moments<f64> {
    let n = x.len().min(y.len());
    if n == 0 {
        return Moments {
            n: 0,
            sum_x: 0.0,
            sum_y: 0.0,
            sum_xx: 0.0,
            sum_xy: 0.0,
        };
    }

    let mut i = 0;
    let mut s_x = f64x2::splat(0.0);
    let mut s_y = f64x2::splat(0.0);
    let mut s_xx = f64x2::splat(0.0);
    let mut s_xy = f64x2::splat(0.0);

    unsafe {
        while i + 2 <= n {
            let x_val = f64x2::new([*x.get_unchecked(i), *x.get_unchecked(i + 1)]);
            let y_val = f64x2::new([*y.get_unchecked(i), *y.get_unchecked(i + 1)]);

            s_x += x_val;
            s_y += y_val;
            s_xx += x_val * x_val;
            s_xy += x_val * y_val;

            i += 2;
        }
    }

    let mut a_x = s_x.reduce_add();
    let mut a_y = s_y.reduce_add();
    let mut a_xx = s_xx.reduce_add();
    let mut a_xy = s_xy.reduce_add();

    unsafe {
        while i < n {
            let x_val = *x.get_unchecked(i);
            let y_val = *y.get_unchecked(i);

            a_x += x_val;
            a_y += y_val;
            a_xx += x_val * x_val;
            a_xy += x_val * y_val;

            i += 1;
        }
    }

    Moments {
        n,
        sum_x: a_x,
        sum_y: a_y,
        sum_xx: a_xx,
        sum_xy: a_xy,
    }
}

/// SIMD-optimized accumulation of paired-sample moments (f32).
#[inline]
pub fn accumulate_simd_f32(x: &[f32], y: &[f32]) -> Moments<f32> {
    let n = x.len().min(y.len());
    if n == 0 {
        return Moments {
            n: 0,
            sum_x: 0.0,
            sum_y: 0.0,
            sum_xx: 0.0,
            sum_xy: 0.0,
        };
    }

    let mut i = 0;
    let mut s_x = f32x8::splat(0.0);
    let mut s_y = f32x8::splat(0.0);
    let mut s_xx = f32x8::splat(0.0);
    let mut s_xy = f32x8::splat(0.0);

    unsafe {
        while i + 8 <= n {
            let x_val = f32x8::new([
                *x.get_unchecked(i),
                *x.get_unchecked(i + 1),
                *x.get_unchecked(i + 2),
                *x.get_unchecked(i + 3),
                *x.get_unchecked(i + 4),
                *x.get_unchecked(i + 5),
                *x.get_unchecked(i + 6),
                *x.get_unchecked(i + 7),
            ]);
            let y_val = f32x8::new([
                *y.get_unchecked(i),
                *y.get_unchecked(i + 1),
                *y.get_unchecked(i + 2),
                *y.get_unchecked(i + 3),
                *y.get_unchecked(i + 4),
                *y.get_unchecked(i + 5),
                *y.get_unchecked(i + 6),
                *y.get_unchecked(i + 7),
            ]);

            s_x += x_val;
            s_y += y_val;
            s_xx += x_val * x_val;
            s_xy += x_val * y_val;

            i += 8;
        }
    }

    let mut a_x = s_x.reduce_add();
    let mut a_y = s_y.reduce_add();
    let mut a_xx = s_xx.reduce_add();
    let mut a_xy = s_xy.reduce_add();

    unsafe {
        while i < n {
            let x_val = *x.get_unchecked(i);
            let y_val = *y.get_unchecked(i);

            a_x += x_val;
            a_y += y_val;
            a_xx += x_val * x_val;
            a_xy += x_val * y_val;

            i += 1;
        }
    }

    Moments {
        n,
        sum_x: a_x,
        sum_y: a_y,
        sum_xx: a_xx,
        sum_xy: a_xy,
    }
}

// ============================================================================
// Accumulator Trait
// ============================================================================

/// Trait for type-specific moment accumulation.
pub trait MomentAccumulator: Float {
    /// Accumulate paired-sample moments.
    #[inline]
    fn accumulate(x: &[Self], y: &[Self]) -> Moments<Self> {
        accumulate_scalar(x, y)
    }
}

impl MomentAccumulator for f64 {
    #[inline]
    fn accumulate(x: &[f64], y: &[f64]) -> Moments<f64> {
        accumulate_simd_f64(x, y)
    }
}

impl MomentAccumulator for f32 {
    #[inline]
    fn accumulate(x: &[f32], y: &[f32]) -> Moments<f32> {
        accumulate_simd_f32(x, y)
    }
}

// ============================================================================
// Simple Reductions
// ============================================================================

/// Arithmetic mean of a sequence; zero for an empty input.
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values.iter().copied().fold(T::zero(), |acc, v| acc + v);
    sum / T::from(values.len()).unwrap_or(T::one())
}
