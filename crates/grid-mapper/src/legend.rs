//! Legend tick values and labels.

use serde::Serialize;

use crate::bucket::{segment_boundaries, segment_width};

/// One labelled legend position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendTick {
    pub value: f64,
    pub label: String,
}

impl LegendTick {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: format_label(value),
        }
    }
}

/// `palette_size + 1` ticks at the bucket edges, `min + k*segment` for
/// `k = 0..=palette_size`. The last tick is `max_temp`.
pub fn legend_ticks(min_temp: f64, max_temp: f64, palette_size: usize) -> Vec<LegendTick> {
    let segment = segment_width(min_temp, max_temp, palette_size);
    (0..=palette_size)
        .map(|k| {
            if k == palette_size {
                // exact, no accumulated rounding
                LegendTick::new(max_temp)
            } else {
                LegendTick::new(min_temp + k as f64 * segment)
            }
        })
        .collect()
}

/// `palette_size + 1` ticks laid out like the published chart: a synthetic
/// `0` followed by the lower bound of every bucket.
///
/// Unlike [`legend_ticks`] the values are not guaranteed to be ordered:
/// the leading `0` sits above a negative minimum.
pub fn legend_ticks_leading_zero(
    min_temp: f64,
    max_temp: f64,
    palette_size: usize,
) -> Vec<LegendTick> {
    std::iter::once(0.0)
        .chain(segment_boundaries(min_temp, max_temp, palette_size))
        .map(LegendTick::new)
        .collect()
}

/// `">" + value rounded to 3 decimals + "°"`.
pub fn format_label(value: f64) -> String {
    format!(">{}°", round_temperature(value))
}

/// Round half up (toward positive infinity) to three decimals, never
/// producing negative zero. Shared by legend labels and cell tooltips.
pub fn round_temperature(value: f64) -> f64 {
    let rounded = (value * 1000.0 + 0.5).floor() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_temperature_halfway() {
        // 1.0625 * 1000 is exactly 1062.5
        assert_eq!(round_temperature(1.0625), 1.063);
        assert_eq!(round_temperature(-1.0625), -1.062);
        assert_eq!(round_temperature(-0.0004), 0.0);
        assert!(round_temperature(-0.0004).is_sign_positive());
    }

    #[test]
    fn test_label_format() {
        assert_eq!(format_label(7.5), ">7.5°");
        assert_eq!(format_label(8.0), ">8°");
        assert_eq!(format_label(1.68412), ">1.684°");
        assert_eq!(format_label(2.9996), ">3°");
        assert_eq!(format_label(-0.0001), ">0°");
        assert_eq!(format_label(-1.2345), ">-1.234°");
    }

    #[test]
    fn test_tick_count_and_order() {
        let ticks = legend_ticks(7.5, 9.5, 10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0].value, 7.5);
        assert_eq!(ticks[10].value, 9.5);
        assert!(ticks.windows(2).all(|w| w[0].value <= w[1].value));
        assert_eq!(ticks[10].label, ">9.5°");
    }

    #[test]
    fn test_zero_span() {
        let ticks = legend_ticks(8.0, 8.0, 10);
        assert_eq!(ticks.len(), 11);
        assert!(ticks.iter().all(|t| t.value == 8.0 && t.label == ">8°"));
    }

    #[test]
    fn test_leading_zero_layout() {
        let ticks = legend_ticks_leading_zero(7.5, 9.5, 10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0].value, 0.0);
        assert_eq!(ticks[0].label, ">0°");
        assert_eq!(ticks[1].value, 7.5);
        // the maximum is not itself a tick in this layout
        assert!((ticks[10].value - 9.3).abs() < 1e-9);
    }

    #[test]
    fn test_empty_palette_still_has_one_tick() {
        assert_eq!(legend_ticks(1.0, 2.0, 0).len(), 1);
        assert_eq!(legend_ticks_leading_zero(1.0, 2.0, 0).len(), 1);
    }
}
