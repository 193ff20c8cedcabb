//! Random-walk series generator.
//!
//! The walk starts at the most recent day and steps backward in time; the
//! points are reversed at the end so the series reads forward from "Day 1".

use rand::Rng;
use tracing::trace;

use trendscope_core::defaults;
use trendscope_core::{Series, SeriesPoint};

/// Shape parameters of one generated series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesParams {
    /// Number of points.
    pub length: usize,
    /// Upward-drift bias in [0, 1]. Out-of-range values are clamped.
    pub peakiness: f64,
    /// Running value at the start of the walk (the last day).
    pub start_value: f64,
}

impl SeriesParams {
    pub fn new(length: usize, peakiness: f64, start_value: f64) -> Self {
        Self {
            length,
            peakiness,
            start_value,
        }
    }
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            length: defaults::SERIES_LENGTH,
            peakiness: defaults::SERIES_PEAKINESS,
            start_value: defaults::SERIES_START_VALUE,
        }
    }
}

/// Generate a chronologically ordered series of `length` points.
///
/// Every value is `max(0, round(running))`. A zero length yields an empty
/// series.
pub fn generate_series<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    peakiness: f64,
    start_value: f64,
) -> Series {
    let peakiness = peakiness.clamp(0.0, 1.0);
    let bias = 0.5 - peakiness * 0.2;
    let mut current = start_value;
    let mut points = Vec::with_capacity(length);

    for day in (1..=length).rev() {
        points.push(SeriesPoint::day(day, current.round().max(0.0)));

        current += (rng.gen::<f64>() - bias) * 20.0;
        if current < defaults::SERIES_FLOOR {
            current = defaults::SERIES_FLOOR + rng.gen::<f64>() * 5.0;
        }
        if current > defaults::SERIES_PEAK
            && rng.gen::<f64>() < defaults::SERIES_PULLBACK_PROBABILITY
        {
            current -= rng.gen::<f64>() * 10.0;
        }
    }

    points.reverse();
    trace!(length, peakiness, start_value, "Generated series");
    Series::from_chronological(points)
}

/// Generate a series from bundled parameters.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, params: SeriesParams) -> Series {
    generate_series(rng, params.length, params.peakiness, params.start_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length_and_labels() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = generate_series(&mut rng, 30, 0.6, 15.0);

        assert_eq!(series.len(), 30);
        for (i, point) in series.iter().enumerate() {
            assert_eq!(point.label, format!("Day {}", i + 1));
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(generate_series(&mut rng, 0, 0.7, 10.0).is_empty());
    }

    #[test]
    fn test_start_value_anchors_last_day() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = generate_series(&mut rng, 7, 0.8, 40.0);
        assert_eq!(series.last().unwrap().value, 40.0);
        assert_eq!(series.last().unwrap().label, "Day 7");
    }

    #[test]
    fn test_negative_start_is_floored_at_zero() {
        let mut rng = StdRng::seed_from_u64(4);
        let series = generate_series(&mut rng, 5, 0.5, -12.0);
        assert_eq!(series.last().unwrap().value, 0.0);
        assert!(series.values().all(|v| v >= 0.0));
    }

    #[test]
    fn test_values_are_whole_numbers() {
        let mut rng = StdRng::seed_from_u64(5);
        let series = generate_series(&mut rng, 90, 0.5, 7.3);
        assert!(series.values().all(|v| v.fract() == 0.0));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_series(&mut StdRng::seed_from_u64(42), 30, 0.6, 20.0);
        let b = generate_series(&mut StdRng::seed_from_u64(42), 30, 0.6, 20.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_floor_reset_keeps_values_at_least_five() {
        // Peakiness 0 drifts downward; the floor reset keeps values >= 5.
        let mut rng = StdRng::seed_from_u64(6);
        let series = generate_series(&mut rng, 60, 0.0, 6.0);
        assert!(series.values().all(|v| v >= 5.0));
    }

    #[test]
    fn test_peakiness_is_clamped() {
        let a = generate_series(&mut StdRng::seed_from_u64(9), 20, 3.0, 30.0);
        let b = generate_series(&mut StdRng::seed_from_u64(9), 20, 1.0, 30.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_params() {
        let params = SeriesParams::default();
        assert_eq!(params.length, 7);
        assert_eq!(params.peakiness, 0.7);
        assert_eq!(params.start_value, 10.0);

        let series = generate_with(&mut StdRng::seed_from_u64(10), params);
        assert_eq!(series.len(), 7);
    }
}
