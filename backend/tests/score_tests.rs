//! Tests for the suitability scorer
//! Verifies score bounds, band classification and monotonicity

use proptest::prelude::*;
use shared::{classify_score, score_breakdown, suitability_score, ScoreBand, ScoreFactor};

fn score(feels_like: f64, precipitation: f64, wind_speed: f64) -> u8 {
    suitability_score(feels_like, precipitation, wind_speed).value()
}

// =============================================================================
// Penalty Table Tests
// =============================================================================

mod penalty_table {
    use super::*;

    #[test]
    fn ideal_conditions_score_ten() {
        assert_eq!(score(10.0, 0.0, 0.0), 10);
    }

    #[test]
    fn cold_band_edges() {
        assert_eq!(score(-0.01, 0.0, 0.0), 7);
        assert_eq!(score(0.0, 0.0, 0.0), 8);
        assert_eq!(score(4.99, 0.0, 0.0), 8);
        assert_eq!(score(5.0, 0.0, 0.0), 10);
    }

    #[test]
    fn warm_band_edge() {
        assert_eq!(score(20.0, 0.0, 0.0), 10);
        assert_eq!(score(20.01, 0.0, 0.0), 8);
    }

    #[test]
    fn penalties_add_up() {
        // cold 3 + heavy rain 3 + strong wind 2
        assert_eq!(score(-3.0, 4.0, 30.0), 2);
    }

    #[test]
    fn breakdown_names_each_factor() {
        let breakdown = score_breakdown(3.0, 2.0, 10.0);
        assert_eq!(breakdown.score.value(), 5);
        let factors: Vec<ScoreFactor> = breakdown.penalties.iter().map(|p| p.factor).collect();
        assert_eq!(factors, vec![ScoreFactor::Temperature, ScoreFactor::Precipitation]);
        assert!(breakdown.penalties.iter().all(|p| !p.reason.message_nl.is_empty()));
    }
}

// =============================================================================
// Band Classification Tests
// =============================================================================

mod bands {
    use super::*;

    #[test]
    fn bands_follow_score() {
        assert_eq!(classify_score(suitability_score(-3.0, 4.0, 30.0)), ScoreBand::Poor);
        assert_eq!(classify_score(suitability_score(3.0, 2.0, 10.0)), ScoreBand::Marginal);
        assert_eq!(classify_score(suitability_score(22.0, 0.0, 5.0)), ScoreBand::Good);
    }
}

// =============================================================================
// Property Tests: Bounds and Monotonicity
// =============================================================================

mod properties {
    use super::*;

    proptest! {
        #[test]
        fn score_always_within_bounds(
            f in -50.0f64..50.0,
            p in 0.0f64..100.0,
            w in 0.0f64..150.0,
        ) {
            let s = score(f, p, w);
            prop_assert!((1..=10).contains(&s));
        }

        #[test]
        fn more_rain_never_raises_score(
            f in -20.0f64..35.0,
            w in 0.0f64..60.0,
            a in 0.0f64..10.0,
            b in 0.0f64..10.0,
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(score(f, high, w) <= score(f, low, w));
        }

        #[test]
        fn more_wind_never_raises_score(
            f in -20.0f64..35.0,
            p in 0.0f64..10.0,
            a in 0.0f64..80.0,
            b in 0.0f64..80.0,
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(score(f, p, high) <= score(f, p, low));
        }

        #[test]
        fn colder_below_five_never_raises_score(
            p in 0.0f64..10.0,
            w in 0.0f64..60.0,
            a in -30.0f64..5.0,
            b in -30.0f64..5.0,
        ) {
            let (cold, colder) = if a >= b { (a, b) } else { (b, a) };
            prop_assert!(score(colder, p, w) <= score(cold, p, w));
        }

        #[test]
        fn warmer_above_twenty_never_raises_score(
            p in 0.0f64..10.0,
            w in 0.0f64..60.0,
            a in 20.0f64..45.0,
            b in 20.0f64..45.0,
        ) {
            let (warm, warmer) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(score(warmer, p, w) <= score(warm, p, w));
        }

        #[test]
        fn scoring_is_deterministic(
            f in -50.0f64..50.0,
            p in 0.0f64..100.0,
            w in 0.0f64..150.0,
        ) {
            prop_assert_eq!(score_breakdown(f, p, w), score_breakdown(f, p, w));
        }
    }
}
