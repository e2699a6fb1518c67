/// Cubic ease-in-out over normalized progress.
///
/// Accelerates through the first half, decelerates through the second.
/// Input outside [0, 1] is clamped so frame-timing jitter at the ends of an
/// animation cannot overshoot the target value.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn stays_within_unit_range() {
        for i in 0..=1000 {
            let t = i as f64 / 1000.0;
            let eased = ease_in_out_cubic(t);
            assert!((0.0..=1.0).contains(&eased), "eased({t}) = {eased}");
        }
    }

    #[test]
    fn monotonic_non_decreasing() {
        let mut prev = 0.0;
        for i in 0..=1000 {
            let eased = ease_in_out_cubic(i as f64 / 1000.0);
            assert!(eased >= prev);
            prev = eased;
        }
    }

    #[test]
    fn clamps_out_of_range_input() {
        assert_eq!(ease_in_out_cubic(-0.5), 0.0);
        assert_eq!(ease_in_out_cubic(1.5), 1.0);
    }
}
