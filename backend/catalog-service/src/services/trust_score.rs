// ============================================
// Trust Score Computation
// ============================================
//
// Normalizes three raw reliability signals to 0-100 sub-scores and blends
// them with fixed weights into one aggregate trust score.
//
// Signals used:
// - Shipping speed in days (faster is better, 1-7 day window)
// - Retailer reputation rating (0-5 star scale)
// - Historical driver error rate (0-20% window, lower is better)

use crate::models::TrustScoreBreakdown;

/// Fixed blend weights; reputation counts most, driver risk least.
/// The three weights sum to 1.0.
pub const SHIPPING_WEIGHT: f64 = 0.35;
pub const REPUTATION_WEIGHT: f64 = 0.45;
pub const DRIVER_WEIGHT: f64 = 0.20;

/// Raw reliability signals for one listing
#[derive(Debug, Clone, Copy)]
pub struct TrustSignals {
    pub shipping_speed_days: f64,
    pub reputation_score: f64,
    pub driver_error_rate: f64,
}

/// Map shipping days to a 0-100 sub-score.
/// 1 day scores 100, 7 days scores 0, linear in between. Inputs outside
/// [1, 7] are clamped to the boundary before scoring, not penalized further.
pub fn normalize_shipping(days: f64) -> f64 {
    let clamped_days = days.clamp(1.0, 7.0);
    let score = 100.0 - ((clamped_days - 1.0) / 6.0) * 100.0;
    score.clamp(0.0, 100.0)
}

/// Map a 0-5 star rating to a 0-100 sub-score. Linear.
pub fn normalize_reputation(rating: f64) -> f64 {
    let clamped_rating = rating.clamp(0.0, 5.0);
    (clamped_rating / 5.0) * 100.0
}

/// Map a driver error rate to a 0-100 sub-score.
/// 0% scores 100, 20% and above score 0, linear in between.
pub fn normalize_driver_error(rate: f64) -> f64 {
    let clamped_rate = rate.clamp(0.0, 0.20);
    let score = 100.0 - (clamped_rate / 0.20) * 100.0;
    score.clamp(0.0, 100.0)
}

/// Compute the full trust score breakdown for one listing.
///
/// The aggregate is blended from the unrounded sub-scores and rounded once;
/// each sub-score is rounded independently for reporting. Aggregating from
/// already-rounded sub-scores would drift from the reference output.
///
/// Pure and total: out-of-domain inputs are clamped, never rejected.
pub fn calculate_trust_score(signals: &TrustSignals) -> TrustScoreBreakdown {
    let shipping_score = normalize_shipping(signals.shipping_speed_days);
    let reputation_score = normalize_reputation(signals.reputation_score);
    let driver_score = normalize_driver_error(signals.driver_error_rate);

    let trust_score = shipping_score * SHIPPING_WEIGHT
        + reputation_score * REPUTATION_WEIGHT
        + driver_score * DRIVER_WEIGHT;

    TrustScoreBreakdown {
        shipping_score: shipping_score.round() as i32,
        reputation_score: reputation_score.round() as i32,
        driver_score: driver_score.round() as i32,
        trust_score: trust_score.round() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(days: f64, rating: f64, rate: f64) -> TrustSignals {
        TrustSignals {
            shipping_speed_days: days,
            reputation_score: rating,
            driver_error_rate: rate,
        }
    }

    #[test]
    fn test_shipping_boundaries() {
        assert_eq!(normalize_shipping(1.0), 100.0);
        assert_eq!(normalize_shipping(7.0), 0.0);
        assert_eq!(normalize_shipping(4.0), 50.0);
    }

    #[test]
    fn test_shipping_clamps_out_of_range() {
        assert_eq!(normalize_shipping(0.0), normalize_shipping(1.0));
        assert_eq!(normalize_shipping(-3.0), normalize_shipping(1.0));
        assert_eq!(normalize_shipping(30.0), normalize_shipping(7.0));
    }

    #[test]
    fn test_shipping_non_increasing() {
        let mut previous = normalize_shipping(0.0);
        for tenths in 0..=100 {
            let days = tenths as f64 / 10.0;
            let score = normalize_shipping(days);
            assert!(
                score <= previous,
                "score increased at {} days: {} > {}",
                days,
                score,
                previous
            );
            previous = score;
        }
    }

    #[test]
    fn test_reputation_is_linear() {
        for tenths in 0..=50 {
            let rating = tenths as f64 / 10.0;
            let score = normalize_reputation(rating);
            assert!((score - 20.0 * rating).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reputation_clamps_out_of_range() {
        assert_eq!(normalize_reputation(-1.0), 0.0);
        assert_eq!(normalize_reputation(6.5), 100.0);
    }

    #[test]
    fn test_driver_error_boundaries() {
        assert_eq!(normalize_driver_error(0.0), 100.0);
        assert_eq!(normalize_driver_error(0.20), 0.0);
        // Rates beyond 20% are fully penalized, not more
        assert_eq!(normalize_driver_error(0.5), 0.0);
        assert_eq!(normalize_driver_error(1.0), 0.0);
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((SHIPPING_WEIGHT + REPUTATION_WEIGHT + DRIVER_WEIGHT - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reference_example_fast_shipping() {
        // 2 days, 4.6 stars, 4% error rate
        let breakdown = calculate_trust_score(&signals(2.0, 4.6, 0.04));
        assert_eq!(breakdown.shipping_score, 83);
        assert_eq!(breakdown.reputation_score, 92);
        assert_eq!(breakdown.driver_score, 80);
        // round(83.33 * 0.35 + 92 * 0.45 + 80 * 0.20) = round(86.57) = 87
        assert_eq!(breakdown.trust_score, 87);
    }

    #[test]
    fn test_reference_example_slow_shipping() {
        // 5 days, 4.1 stars, 8% error rate
        let breakdown = calculate_trust_score(&signals(5.0, 4.1, 0.08));
        assert_eq!(breakdown.shipping_score, 33);
        assert_eq!(breakdown.reputation_score, 82);
        assert_eq!(breakdown.driver_score, 60);
        // round(33.33 * 0.35 + 82 * 0.45 + 60 * 0.20) = round(60.57) = 61
        assert_eq!(breakdown.trust_score, 61);
    }

    #[test]
    fn test_aggregate_from_unrounded_sub_scores() {
        // Rounded sub-scores would give round(83*0.35 + 92*0.45 + 80*0.20) =
        // round(86.45) = 86; the reference arithmetic gives 87.
        let breakdown = calculate_trust_score(&signals(2.0, 4.6, 0.04));
        assert_eq!(breakdown.trust_score, 87);
    }

    #[test]
    fn test_aggregate_always_in_range() {
        let extremes = [
            signals(-10.0, -10.0, -10.0),
            signals(0.0, 0.0, 0.0),
            signals(1.0, 5.0, 0.0),
            signals(7.0, 0.0, 0.20),
            signals(1000.0, 1000.0, 1000.0),
        ];
        for input in extremes {
            let breakdown = calculate_trust_score(&input);
            for value in [
                breakdown.shipping_score,
                breakdown.reputation_score,
                breakdown.driver_score,
                breakdown.trust_score,
            ] {
                assert!((0..=100).contains(&value), "out of range for {:?}", input);
            }
        }
    }

    #[test]
    fn test_best_and_worst_case() {
        let best = calculate_trust_score(&signals(1.0, 5.0, 0.0));
        assert_eq!(best.trust_score, 100);

        let worst = calculate_trust_score(&signals(7.0, 0.0, 0.20));
        assert_eq!(worst.trust_score, 0);
    }

    #[test]
    fn test_deterministic() {
        let input = signals(3.0, 4.2, 0.06);
        assert_eq!(calculate_trust_score(&input), calculate_trust_score(&input));
    }
}
