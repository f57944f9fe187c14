//! Partition of the temperature range into palette buckets.
//!
//! With `N` buckets over `[min, max]`, bucket `k` covers
//! `[min + k*segment, min + (k+1)*segment)` where `segment = (max - min) / N`.
//! The last bucket is closed on the right so `max` lands in bucket `N - 1`.

/// Width of one bucket. Zero when the range is empty or `palette_size` is 0.
pub fn segment_width(min_temp: f64, max_temp: f64, palette_size: usize) -> f64 {
    if palette_size == 0 {
        return 0.0;
    }
    (max_temp - min_temp) / palette_size as f64
}

/// Palette index for a temperature, always in `[0, palette_size - 1]`.
///
/// Values outside `[min_temp, max_temp]` are clamped to the first or last
/// bucket. An all-equal dataset maps every value to bucket 0, as does a
/// `palette_size` of 0.
pub fn bucket_color(temp: f64, min_temp: f64, max_temp: f64, palette_size: usize) -> usize {
    let segment = segment_width(min_temp, max_temp, palette_size);
    if segment == 0.0 || !segment.is_finite() {
        return 0;
    }

    let position = ((temp - min_temp) / segment).floor();
    if position.is_nan() || position <= 0.0 {
        return 0;
    }

    (position as usize).min(palette_size - 1)
}

/// Lower bound of every bucket, `min + k*segment` for `k = 0..N`.
pub fn segment_boundaries(min_temp: f64, max_temp: f64, palette_size: usize) -> Vec<f64> {
    let segment = segment_width(min_temp, max_temp, palette_size);
    (0..palette_size)
        .map(|k| min_temp + k as f64 * segment)
        .collect()
}
