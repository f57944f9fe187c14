//! Tests for the temperature grid mapping pipeline.

use grid_mapper::{
    bucket_color, compute_domain, legend_ticks, make_linear_scale, normalize,
    TemperatureGridMapper,
};
use heatmap_common::{ChartLayout, HeatmapError, RawDataset};
use test_utils::{
    assert_all_approx_eq, assert_approx_eq, generate_dataset, three_record_dataset,
    uniform_dataset, EMPTY_JSON, MALFORMED_JSON, SAMPLE_YEAR_JSON,
};

// ============================================================================
// normalize tests
// ============================================================================

#[test]
fn test_three_record_scenario() {
    let dataset = normalize(&three_record_dataset()).unwrap();
    let temps: Vec<f64> = dataset.records.iter().map(|r| r.temperature).collect();
    assert_all_approx_eq!(&temps, &[7.5, 8.0, 9.5], 1e-12);

    let domain = compute_domain(&dataset.records).unwrap();
    assert_eq!(domain.min_temp, 7.5);
    assert_eq!(domain.max_temp, 9.5);

    assert_eq!(bucket_color(7.5, domain.min_temp, domain.max_temp, 10), 0);
    assert_eq!(bucket_color(9.5, domain.min_temp, domain.max_temp, 10), 9);
}

#[test]
fn test_normalize_round_trip_through_raw() {
    let once = normalize(&three_record_dataset()).unwrap();
    let twice = normalize(&once.to_raw()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_normalize_sample_year() {
    let raw = RawDataset::from_json(SAMPLE_YEAR_JSON).unwrap();
    let dataset = normalize(&raw).unwrap();
    assert_eq!(dataset.len(), 12);
    assert_eq!(dataset.records[0].month, 0);
    assert_eq!(dataset.records[11].month, 11);
    assert_approx_eq!(dataset.records[0].temperature, 8.66 - 1.366, 1e-12);
}

#[test]
fn test_empty_document_fails_with_empty_dataset() {
    let raw = RawDataset::from_json(EMPTY_JSON).unwrap();
    assert!(matches!(normalize(&raw), Err(HeatmapError::EmptyDataset)));
}

#[test]
fn test_malformed_document_fails_before_normalize() {
    assert!(matches!(
        RawDataset::from_json(MALFORMED_JSON),
        Err(HeatmapError::MalformedRecord { index: 1, .. })
    ));
}

// ============================================================================
// bucket_color properties
// ============================================================================

#[test]
fn test_every_bucket_in_range_for_full_dataset() {
    let dataset = normalize(&generate_dataset(1753, 2015, 0.005)).unwrap();
    let domain = compute_domain(&dataset.records).unwrap();

    for palette_size in [1, 2, 7, 10, 16] {
        let mut seen = vec![false; palette_size];
        for record in &dataset.records {
            let bucket = bucket_color(
                record.temperature,
                domain.min_temp,
                domain.max_temp,
                palette_size,
            );
            assert!(bucket < palette_size);
            seen[bucket] = true;
        }
        assert!(seen[0], "minimum must land in the first bucket");
        assert!(seen[palette_size - 1], "maximum must land in the last bucket");
    }
}

#[test]
fn test_uniform_dataset_is_all_bucket_zero() {
    let dataset = normalize(&uniform_dataset(5)).unwrap();
    let domain = compute_domain(&dataset.records).unwrap();
    assert_eq!(domain.temperature_span(), 0.0);

    for record in &dataset.records {
        assert_eq!(
            bucket_color(record.temperature, domain.min_temp, domain.max_temp, 10),
            0
        );
    }
}

// ============================================================================
// scale properties
// ============================================================================

#[test]
fn test_scale_endpoints_and_monotonicity() {
    let cases = [
        (1753.0, 2015.0, 60.0, 840.0),
        (0.0, 11.0, 60.0, 540.0),
        (-5.0, 5.0, 0.0, 1.0),
        (0.001, 0.002, 10.0, 1000.0),
    ];

    for (a, b, p, q) in cases {
        let scale = make_linear_scale(a, b, p, q);
        assert_approx_eq!(scale.apply(a), p, 1e-9);
        assert_approx_eq!(scale.apply(b), q, 1e-9);

        let samples: Vec<f64> = (0..=100).map(|i| a + (b - a) * i as f64 / 100.0).collect();
        let mapped: Vec<f64> = samples.iter().map(|v| scale.apply(*v)).collect();
        assert!(mapped.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_degenerate_scale_policy() {
    let scale = make_linear_scale(3.0, 3.0, 25.0, 75.0);
    for v in [3.0, -1e9, 1e9, f64::INFINITY] {
        assert_eq!(scale.apply(v), 25.0);
    }
}

// ============================================================================
// legend properties
// ============================================================================

#[test]
fn test_legend_tick_count_and_order() {
    for (min, max) in [(7.5, 9.5), (-3.0, 2.0), (1.684, 13.888), (4.0, 4.0)] {
        for palette_size in [1, 5, 10] {
            let ticks = legend_ticks(min, max, palette_size);
            assert_eq!(ticks.len(), palette_size + 1);
            assert!(ticks.windows(2).all(|w| w[0].value <= w[1].value));
            assert!(ticks.iter().all(|t| t.label.starts_with('>') && t.label.ends_with('°')));
        }
    }
}

// ============================================================================
// full pipeline
// ============================================================================

#[test]
fn test_full_dataset_geometry() {
    let mapper = TemperatureGridMapper::new(10, ChartLayout::default()).unwrap();
    let model = mapper.map(&generate_dataset(1753, 2015, 0.005)).unwrap();

    assert_eq!(model.domain.distinct_years, 263);
    assert_eq!(model.domain.distinct_months, 12);
    assert_approx_eq!(model.cell_width, 780.0 / 263.0, 1e-12);
    assert_approx_eq!(model.cell_height, 40.0, 1e-12);
    assert_eq!(model.cells.len(), 3156);

    for cell in &model.cells {
        assert!(cell.x >= 60.0 && cell.x <= 840.0);
        assert!(cell.y >= 40.0 && cell.y <= 520.0);
        assert!(cell.bucket < 10);
    }

    assert_eq!(model.x_scale.ticks(10).first(), Some(&1760.0));
    assert_eq!(model.months(), (0..12).collect::<Vec<u32>>());
}

#[test]
fn test_mapping_is_deterministic() {
    let mapper = TemperatureGridMapper::new(10, ChartLayout::default()).unwrap();
    let raw = generate_dataset(1900, 1950, 0.02);
    let a = mapper.map(&raw).unwrap();
    let b = mapper.map(&raw).unwrap();
    assert_eq!(a.cells, b.cells);
    assert_eq!(a.legend, b.legend);
}
