//! Easing curves for the cosmetic animations. Times are in seconds.

use std::f64::consts::PI;

/// Period of one full bounce of the scroll indicator.
pub const BOUNCE_PERIOD: f64 = 1.0;
pub const BOUNCE_AMPLITUDE: f64 = 12.0;
pub const STAGGER_DELAY: f64 = 0.1;
pub const STAGGER_DURATION: f64 = 0.3;

pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Fraction of `duration` covered after `elapsed`, clamped to `[0, 1]`.
pub fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Height above the resting position, in pixels.
pub fn bounce_offset(elapsed: f64, amplitude: f64) -> f64 {
    let phase = (elapsed / BOUNCE_PERIOD).rem_euclid(1.0);
    amplitude * (phase * PI).sin().abs()
}

/// Entry `index` of a list starts `index * STAGGER_DELAY` after the first.
pub fn stagger_progress(elapsed: f64, index: usize) -> f64 {
    let start = index as f64 * STAGGER_DELAY;
    ease_in_out(progress(elapsed - start, STAGGER_DURATION))
}

/// Distance left to travel for a slide of `distance` at progress `p`. Zero once settled.
pub fn slide_offset(p: f64, distance: f64) -> f64 {
    distance * (1.0 - p.clamp(0.0, 1.0))
}

pub fn micros_to_secs(micros: i64) -> f64 {
    micros as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-12);
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = ease_in_out(i as f64 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(-1.0, 0.5), 0.0);
        assert_eq!(progress(0.25, 0.5), 0.5);
        assert_eq!(progress(2.0, 0.5), 1.0);
        assert_eq!(progress(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_bounce_stays_in_range_and_repeats() {
        for i in 0..200 {
            let t = i as f64 * 0.037;
            let v = bounce_offset(t, BOUNCE_AMPLITUDE);
            assert!((0.0..=BOUNCE_AMPLITUDE).contains(&v), "{t}: {v}");
            assert!((v - bounce_offset(t + BOUNCE_PERIOD, BOUNCE_AMPLITUDE)).abs() < 1e-9);
        }
        assert!(bounce_offset(0.0, BOUNCE_AMPLITUDE).abs() < 1e-12);
        assert!((bounce_offset(0.5, BOUNCE_AMPLITUDE) - BOUNCE_AMPLITUDE).abs() < 1e-9);
    }

    #[test]
    fn test_stagger_waits_for_its_turn() {
        assert_eq!(stagger_progress(0.15, 2), 0.0);
        assert_eq!(stagger_progress(0.25 + STAGGER_DURATION, 2), 1.0);
        assert!(stagger_progress(0.05, 0) > 0.0);
    }

    #[test]
    fn test_slide_settles_at_rest() {
        assert_eq!(slide_offset(0.0, 20.0), 20.0);
        assert_eq!(slide_offset(0.5, 20.0), 10.0);
        assert_eq!(slide_offset(1.0, 20.0), 0.0);
        assert_eq!(slide_offset(1.3, 20.0), 0.0);
    }
}
