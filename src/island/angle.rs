use std::f32::consts::TAU;

/// Reduce an angle in radians into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let normalized = ((angle % TAU) + TAU) % TAU;
    // tiny negative inputs round up to exactly TAU
    if normalized >= TAU { 0.0 } else { normalized }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_zero_stays_zero() {
        assert_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn test_negative_wraps_to_upper_range() {
        assert_close(normalize_angle(-0.1), TAU - 0.1);
    }

    #[test]
    fn test_result_in_range() {
        for i in -200..200 {
            let angle = i as f32 * 0.37;
            let n = normalize_angle(angle);
            assert!((0.0..TAU).contains(&n), "normalize({angle}) = {n}");
        }
    }

    #[test]
    fn test_full_turns_are_ignored() {
        for k in -5..=5 {
            let shifted = 1.234 + TAU * k as f32;
            assert_close(normalize_angle(shifted), 1.234);
        }
    }

    #[test]
    fn test_tiny_negative_does_not_return_tau() {
        let n = normalize_angle(-1e-9);
        assert!(n < TAU);
    }
}
