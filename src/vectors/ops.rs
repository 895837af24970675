//! Dense vector arithmetic.
//!
//! Vectors are stored as `f32`; reductions accumulate in `f64`.

/// Dot product of two equal-length slices.
#[inline]
pub fn dot(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    // Process in chunks of 4 for autovectorization
    let chunks = a.len() / 4;
    let mut sum = 0.0f64;

    for i in 0..chunks {
        let base = i * 4;
        sum += f64::from(a[base]) * f64::from(b[base])
            + f64::from(a[base + 1]) * f64::from(b[base + 1])
            + f64::from(a[base + 2]) * f64::from(b[base + 2])
            + f64::from(a[base + 3]) * f64::from(b[base + 3]);
    }

    for i in chunks * 4..a.len() {
        sum += f64::from(a[i]) * f64::from(b[i]);
    }

    sum
}

/// Squared Euclidean norm.
#[inline]
pub fn squared_norm(v: &[f32]) -> f64 {
    dot(v, v)
}

/// Euclidean norm.
#[inline]
pub fn norm(v: &[f32]) -> f64 {
    squared_norm(v).sqrt()
}

/// `acc += v`.
#[inline]
pub fn add_assign(acc: &mut [f64], v: &[f32]) {
    debug_assert_eq!(acc.len(), v.len());
    for (a, x) in acc.iter_mut().zip(v) {
        *a += f64::from(*x);
    }
}

/// `acc -= v`.
#[inline]
pub fn sub_assign(acc: &mut [f64], v: &[f32]) {
    debug_assert_eq!(acc.len(), v.len());
    for (a, x) in acc.iter_mut().zip(v) {
        *a -= f64::from(*x);
    }
}

/// Narrows an `f64` accumulator to a stored `f32` vector, dividing by `divisor`.
pub fn finish(acc: &[f64], divisor: f64) -> Vec<f32> {
    acc.iter().map(|x| (x / divisor) as f32).collect()
}
