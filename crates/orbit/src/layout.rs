use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Angle of slot 0, in degrees. Negative so the ring starts at twelve o'clock.
pub const START_ANGLE_DEG: f64 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: Offset) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation, `t = 0` is `self` and `t = 1` is `to`.
    pub fn lerp(&self, to: Offset, t: f64) -> Self {
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

/// Position of `index` relative to `active`, counted clockwise around the ring.
///
/// Both indices must be below `count`.
pub fn slot(index: usize, active: usize, count: NonZeroUsize) -> usize {
    let n = count.get();
    debug_assert!(index < n && active < n);
    (index + n - active) % n
}

/// Angle of a slot in radians.
pub fn angle(slot: usize, count: NonZeroUsize) -> f64 {
    let step = 360.0 / count.get() as f64;
    (slot as f64 * step + START_ANGLE_DEG).to_radians()
}

pub fn offset(slot: usize, count: NonZeroUsize, radius: f64) -> Offset {
    let angle = angle(slot, count);
    Offset::new(angle.cos() * radius, angle.sin() * radius)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadiusMode {
    /// The featured item, drawn at the center of the ring.
    Center,
    /// Every item on the ring itself.
    Orbit,
}

/// Picks the ring radius from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusPolicy {
    pub orbit: f64,
    pub compact: f64,
    /// Widths strictly below this use `compact`.
    pub compact_below: f64,
}

impl Default for RadiusPolicy {
    fn default() -> Self {
        Self {
            orbit: 270.0,
            compact: 170.0,
            compact_below: 640.0,
        }
    }
}

impl RadiusPolicy {
    pub fn radius_for(&self, viewport_width: f64) -> f64 {
        if viewport_width < self.compact_below {
            self.compact
        } else {
            self.orbit
        }
    }

    pub fn radius(&self, mode: RadiusMode, viewport_width: f64) -> f64 {
        match mode {
            RadiusMode::Center => 0.0,
            RadiusMode::Orbit => self.radius_for(viewport_width),
        }
    }

    /// Ratio of the current radius to the full orbit radius, used to shrink circle sizes.
    pub fn scale_for(&self, viewport_width: f64) -> f64 {
        if self.orbit <= 0.0 {
            return 1.0;
        }
        self.radius_for(viewport_width) / self.orbit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn n(count: usize) -> NonZeroUsize {
        NonZeroUsize::new(count).unwrap()
    }

    #[test]
    fn test_offsets_lie_on_circle() {
        for count in 1..=12 {
            for s in 0..count {
                for radius in [0.0, 1.0, 170.0, 270.0] {
                    let o = offset(s, n(count), radius);
                    assert!(
                        (o.x * o.x + o.y * o.y - radius * radius).abs() < 1e-6,
                        "slot {s}/{count} at r={radius} off circle: {o:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_slot_zero_is_top() {
        for count in 1..=12 {
            let o = offset(0, n(count), 270.0);
            assert!(o.x.abs() < EPS, "{o:?}");
            assert!((o.y + 270.0).abs() < EPS, "{o:?}");
        }
    }

    #[test]
    fn test_slot_zero_only_for_active() {
        for count in 1..=8 {
            for active in 0..count {
                for i in 0..count {
                    assert_eq!(slot(i, active, n(count)) == 0, i == active);
                }
            }
        }
    }

    #[test]
    fn test_slot_wraps() {
        assert_eq!(slot(0, 1, n(5)), 4);
        assert_eq!(slot(2, 1, n(5)), 1);
        assert_eq!(slot(4, 4, n(5)), 0);
    }

    #[test]
    fn test_quarter_turns() {
        let right = offset(1, n(4), 100.0);
        assert!((right.x - 100.0).abs() < EPS && right.y.abs() < EPS);

        let bottom = offset(2, n(4), 100.0);
        assert!(bottom.x.abs() < EPS && (bottom.y - 100.0).abs() < EPS);
    }

    #[test]
    fn test_radius_policy() {
        let policy = RadiusPolicy::default();
        assert_eq!(policy.radius_for(1280.0), 270.0);
        assert_eq!(policy.radius_for(640.0), 270.0);
        assert_eq!(policy.radius_for(639.0), 170.0);
        assert_eq!(policy.radius(RadiusMode::Center, 1280.0), 0.0);
        assert_eq!(policy.radius(RadiusMode::Orbit, 320.0), 170.0);
        assert!((policy.scale_for(320.0) - 170.0 / 270.0).abs() < EPS);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Offset::new(-10.0, 4.0);
        let b = Offset::new(30.0, -8.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Offset::new(10.0, -2.0));
    }
}
