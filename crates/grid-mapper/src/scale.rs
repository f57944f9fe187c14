//! Linear scales from data values to chart coordinates.

use serde::Serialize;
use tracing::warn;

/// A linear mapping from `domain` onto `range`.
///
/// A degenerate domain (`min == max`) maps every value to `range.0`
/// instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Build the scale `f(v) = range_min + (v - domain_min) / (domain_max - domain_min) * (range_max - range_min)`.
pub fn make_linear_scale(
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
) -> LinearScale {
    LinearScale::new((domain_min, domain_max), (range_min, range_max))
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let scale = Self { domain, range };
        if scale.is_degenerate() {
            warn!(
                domain_min = domain.0,
                range_min = range.0,
                "Degenerate scale domain, all values map to range minimum"
            );
        }
        scale
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// True when the domain has zero width.
    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }

    /// Map a domain value onto the range. Values outside the domain are
    /// extrapolated, not clamped.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values inside the domain, roughly `count` of them.
    ///
    /// Steps are 1, 2, 5 or 10 times a power of ten. A degenerate domain
    /// yields its single value.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }

        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let step = tick_step(start, stop, count);
        let mut ticks: Vec<f64> = if step >= 1.0 {
            let lo = (start / step).ceil() as i64;
            let hi = (stop / step).floor() as i64;
            (lo..=hi).map(|i| i as f64 * step).collect()
        } else {
            // Divide by the inverse so e.g. 0.1 steps print as 0.3, not 0.30000000000000004
            let inv = (1.0 / step).round();
            let lo = (start * inv).ceil() as i64;
            let hi = (stop * inv).floor() as i64;
            (lo..=hi).map(|i| i as f64 / inv).collect()
        };

        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor();
    let magnitude = 10f64.powf(power);
    let error = raw / magnitude;

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}
