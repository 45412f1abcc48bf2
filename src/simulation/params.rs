//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the immutable runtime settings:
//! - scale constants mapping km, kg and km/s into pixel space,
//! - the gravitational constant and the simulation speed multiplier,
//! - the optional distance floor used by the force law
//!
//! `UnitConversion` groups the conversions applied when a body is built,
//! so the unit policy can be inspected and tested on its own.
//! `Viewport` describes the window the pixel space belongs to.

use crate::error::{Result, SimError};
use crate::simulation::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub size_scale: f64, // km of size per pixel of radius
    pub distance_scale: f64, // km of distance per pixel
    pub sim_speed: f64, // multiplier on every velocity increment
    pub g: f64, // gravitational constant
    pub mass_divisor: f64, // raw kg divided by this before storage
    pub velocity_scale: f64, // raw velocity multiplied by this before storage
    pub min_distance: f64, // distance floor in pixels, 0 = none
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("size_scale", self.size_scale),
            ("distance_scale", self.distance_scale),
            ("sim_speed", self.sim_speed),
            ("mass_divisor", self.mass_divisor),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidParameter(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if !(self.g.is_finite() && self.g >= 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "G must be finite and non-negative, got {}",
                self.g
            )));
        }
        if !(self.min_distance.is_finite() && self.min_distance >= 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "min_distance must be finite and non-negative, got {}",
                self.min_distance
            )));
        }
        if !self.velocity_scale.is_finite() {
            return Err(SimError::InvalidParameter(format!(
                "velocity_scale must be finite, got {}",
                self.velocity_scale
            )));
        }
        Ok(())
    }

    /// Velocity change produced in one frame by `force` acting on a body of
    /// (scaled) `mass`
    pub fn velocity_delta(&self, force: NVec2, mass: f64) -> NVec2 {
        force * self.sim_speed / mass / self.size_scale
    }

    /// Pixel displacement produced in one frame by `velocity`
    pub fn drift(&self, velocity: NVec2) -> NVec2 {
        velocity / self.distance_scale
    }

    pub fn units(&self) -> UnitConversion {
        UnitConversion {
            mass_divisor: self.mass_divisor,
            size_scale: self.size_scale,
            distance_scale: self.distance_scale,
            velocity_scale: self.velocity_scale,
        }
    }
}

/// Conversions from physical units into the scaled units bodies store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConversion {
    pub mass_divisor: f64,
    pub size_scale: f64,
    pub distance_scale: f64,
    pub velocity_scale: f64,
}

impl UnitConversion {
    pub fn mass(&self, kg: f64) -> f64 {
        kg / self.mass_divisor
    }

    pub fn radius(&self, size_km: f64) -> f64 {
        size_km / self.size_scale
    }

    /// Top-left anchor of a circle of `radius` pixels whose center sits at
    /// `km` from the window center.
    pub fn screen_position(&self, km: NVec2, radius: f64, viewport: &Viewport) -> NVec2 {
        km / self.distance_scale - NVec2::new(radius, radius) + viewport.half_extent()
    }

    /// Initial velocities are kept in raw units; positions convert them with
    /// `Parameters::drift` every frame.
    pub fn velocity(&self, raw: NVec2) -> NVec2 {
        raw * self.velocity_scale
    }
}

/// Pixel-space window a scenario is laid out in
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub frame_rate_cap: u32,
}

impl Viewport {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidParameter(format!(
                "window must have a non-zero size, got {}x{}",
                self.width, self.height
            )));
        }
        if self.frame_rate_cap == 0 {
            return Err(SimError::InvalidParameter("frame_rate_cap must be positive".into()));
        }
        Ok(())
    }

    /// Integer half of the window size, the pixel position of the origin
    pub fn half_extent(&self) -> NVec2 {
        NVec2::new((self.width / 2) as f64, (self.height / 2) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> Parameters {
        Parameters {
            size_scale: 1.0e4,
            distance_scale: 5.0e5,
            sim_speed: 1.0e13,
            g: 6.6e-11,
            mass_divisor: 1.0e20,
            velocity_scale: 1.0,
            min_distance: 0.0,
        }
    }

    #[test]
    fn odd_window_sizes_halve_like_integers() {
        let viewport = Viewport { width: 1501, height: 801, title: String::new(), frame_rate_cap: 60 };
        assert_eq!(viewport.half_extent(), NVec2::new(750.0, 400.0));
    }

    #[test]
    fn velocity_delta_divides_by_mass_and_size_scale() {
        let dv = params().velocity_delta(NVec2::new(2.0, -4.0), 1.0e4);
        assert_relative_eq!(dv.x, 2.0 * 1.0e13 / 1.0e4 / 1.0e4);
        assert_relative_eq!(dv.y, -4.0 * 1.0e13 / 1.0e4 / 1.0e4);
    }

    #[test]
    fn velocity_scale_multiplies_raw_velocity() {
        let p = Parameters { velocity_scale: 2.5, ..params() };
        assert_eq!(p.units().velocity(NVec2::new(4.0, -2.0)), NVec2::new(10.0, -5.0));
    }

    #[test]
    fn rejects_non_positive_scales() {
        let mut p = params();
        p.distance_scale = 0.0;
        assert!(p.validate().is_err());

        let mut p = params();
        p.min_distance = -1.0;
        assert!(p.validate().is_err());

        assert!(params().validate().is_ok());
    }
}
