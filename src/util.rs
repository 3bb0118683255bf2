use num_traits::Float;

/// Linearly interpolate between two values.
///
/// No clamping is applied; callers clamp `t` upstream when unit semantics
/// are required.
pub fn lerp<T: Float>(v0: T, v1: T, t: T) -> T {
    v0 + ((v1 - v0) * t)
}

/// Clamp a value to the unit range 0.0 ..= 1.0
pub fn unit_clamp(t: f64) -> f64 {
    t.max(0.0).min(1.0)
}

/// Returns `count` equally spaced values across the unit range, starting at
/// exactly 0.0 and ending at exactly 1.0. `count` must be greater than 1.
pub fn equally_spaced(count: usize) -> impl Iterator<Item = f64> + Clone {
    assert!(count > 1, "equally spaced values require a count > 1");
    let dx = 1.0 / (count - 1) as f64;
    // The final element must be exactly 1.0, not count-1 multiples of dx
    (0..count).map(move |i| {
        if i == count - 1 {
            1.0
        } else {
            i as f64 * dx
        }
    })
}

/// Equality to a number of decimal places: |a - b| < 10^-places
pub fn approx_eq(a: f64, b: f64, places: u32) -> bool {
    (a - b).abs() < 10f64.powi(-(places as i32))
}
