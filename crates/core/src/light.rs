//! Point-light brightness.
//!
//! Linear falloff: a light contributes `(1 - d / radius) * intensity` at
//! distance `d < radius` and nothing at or beyond its radius. The sum is
//! clamped to [`MAX_BRIGHTNESS`] from above only.

use crate::entity::Light;
use crate::types::MAX_BRIGHTNESS;

/// A light placed at a grid position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emitter {
    pub light: Light,
    pub x: i32,
    pub y: i32,
}

impl Emitter {
    pub const fn new(light: Light, x: i32, y: i32) -> Self {
        Self { light, x, y }
    }

    /// Contribution of this emitter at `(x, y)`.
    pub fn contribution(&self, x: f64, y: f64) -> f64 {
        let d = (x - self.x as f64).hypot(y - self.y as f64);
        if d < self.light.radius {
            (1.0 - d / self.light.radius) * self.light.intensity
        } else {
            0.0
        }
    }
}

/// Brightness at `(x, y)` from `lights`.
pub fn light_at(x: f64, y: f64, lights: &[Emitter]) -> f64 {
    let value: f64 = lights.iter().map(|e| e.contribution(x, y)).sum();
    value.min(MAX_BRIGHTNESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn torch(x: i32, y: i32) -> Emitter {
        Emitter::new(Light::new(5.0, 1.0), x, y)
    }

    #[test]
    fn full_brightness_at_the_source() {
        assert_eq!(light_at(5.0, 5.0, &[torch(5, 5)]), 1.0);
    }

    #[test]
    fn halfway_to_radius_is_half() {
        let b = light_at(7.5, 5.0, &[torch(5, 5)]);
        assert!((b - 0.5).abs() < 1e-9, "got {b}");
    }

    #[test]
    fn zero_at_and_beyond_radius() {
        assert_eq!(light_at(10.0, 5.0, &[torch(5, 5)]), 0.0);
        assert_eq!(light_at(5.0, 11.0, &[torch(5, 5)]), 0.0);
        assert_eq!(light_at(9.0, 9.0, &[torch(5, 5)]), 0.0);
    }

    #[test]
    fn falloff_is_non_increasing_with_distance() {
        let lights = [torch(0, 0)];
        let mut prev = f64::INFINITY;
        for step in 0..=60 {
            let d = step as f64 * 0.1;
            let b = light_at(d, 0.0, &lights);
            assert!(b <= prev, "brightness rose at d={d}");
            prev = b;
        }
        assert_eq!(prev, 0.0);
    }

    #[test]
    fn overlapping_lights_clamp_to_one() {
        // Each contributes 0.8 at the midpoint.
        let lights = [
            Emitter::new(Light::new(5.0, 1.0), 0, 0),
            Emitter::new(Light::new(5.0, 1.0), 2, 0),
        ];
        assert!((lights[0].contribution(1.0, 0.0) - 0.8).abs() < 1e-12);
        assert!((lights[1].contribution(1.0, 0.0) - 0.8).abs() < 1e-12);
        assert_eq!(light_at(1.0, 0.0, &lights), 1.0);
    }

    #[test]
    fn negative_intensity_is_not_floored() {
        let lights = [Emitter::new(Light::new(4.0, -1.0), 0, 0)];
        assert_eq!(light_at(0.0, 0.0, &lights), -1.0);
    }

    #[test]
    fn no_lights_is_dark() {
        assert_eq!(light_at(3.0, 3.0, &[]), 0.0);
    }
}
