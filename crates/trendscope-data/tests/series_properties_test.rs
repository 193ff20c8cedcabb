//! Structural and statistical properties of generated series.
//!
//! Exact values are never asserted: generators here are entropy-seeded, the
//! way production output is.

use rand::rngs::StdRng;
use rand::SeedableRng;
use trendscope_data::{generate_series, SeriesParams};

fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

#[test]
fn test_default_series_stay_within_practical_ceiling() {
    let mut rng = entropy_rng();
    let params = SeriesParams::default();
    let mut total = 0usize;
    let mut within = 0usize;

    for _ in 0..1000 {
        let series = generate_series(
            &mut rng,
            params.length,
            params.peakiness,
            params.start_value,
        );
        for value in series.values() {
            total += 1;
            if (0.0..=100.0).contains(&value) {
                within += 1;
            }
        }
    }

    let ratio = within as f64 / total as f64;
    assert!(ratio >= 0.95, "only {:.3} of values within [0, 100]", ratio);
}

#[test]
fn test_catalog_shaped_series_are_well_formed() {
    let mut rng = entropy_rng();
    for _ in 0..100 {
        let series = generate_series(&mut rng, 7, 0.8, 40.0);
        assert_eq!(series.len(), 7);
        assert_eq!(series.first().unwrap().label, "Day 1");
        assert_eq!(series.last().unwrap().label, "Day 7");
        assert!(series.values().all(|v| v >= 0.0));
    }
}

#[test]
fn test_long_series_are_non_negative() {
    let mut rng = entropy_rng();
    for (length, peakiness) in [(30, 0.6), (90, 0.5)] {
        for _ in 0..50 {
            let series = generate_series(&mut rng, length, peakiness, 15.0);
            assert_eq!(series.len(), length);
            assert!(series.values().all(|v| v >= 0.0));
        }
    }
}

#[test]
fn test_series_serializes_as_point_array() {
    let series = generate_series(&mut StdRng::seed_from_u64(3), 2, 0.7, 10.0);
    let json = serde_json::to_value(&series).unwrap();

    let points = json.as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["label"], "Day 1");
    assert!(points[1]["value"].is_number());
}
