pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(v))
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Maps a progress ratio onto one of `count` equal buckets.
///
/// Returns 0 for an empty list so callers can index a fallback entry.
pub fn step_index(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let raw = (progress * count as f64).floor();
    clamp(raw, 0.0, (count - 1) as f64) as usize
}
