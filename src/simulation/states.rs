//! Core state types for the simulation.
//!
//! - `Body`: one celestial body in pixel space, built from physical units
//! - `System`: the fixed collection of bodies and the current frame number
//! - `IdCounter`: hands out body ids, owned by whoever builds the bodies
//! - `BodyColor`: RGBA display color

use std::fmt;

use nalgebra::Vector2;

use crate::error::{Result, SimError};
use crate::simulation::forces::pairwise_force;
use crate::simulation::params::{Parameters, Viewport};
use crate::simulation::render::{RenderData, RenderTarget};

pub type NVec2 = Vector2<f64>;

/// Speed (raw velocity units) is multiplied by this before clamping to [0, 1]
pub const SPEED_COLOR_FACTOR: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of body ids
#[derive(Debug, Default)]
pub struct IdCounter {
    next: usize,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current value and advance
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl BodyColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Look up one of the basic named colors, ignoring case
    pub fn named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::rgb(0, 0, 0),
            "white" => Self::rgb(255, 255, 255),
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 255, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "magenta" => Self::rgb(255, 0, 255),
            "cyan" => Self::rgb(0, 255, 255),
            "transparent" => Self::rgba(0, 0, 0, 0),
            _ => return None,
        };
        Some(color)
    }
}

/// Initial state of a body in physical units (km, kg, raw velocity)
#[derive(Debug, Clone)]
pub struct BodySpec {
    pub name: String,
    pub x: NVec2, // km from the window center
    pub v: NVec2, // raw velocity
    pub m: f64, // kg
    pub size: f64, // km
    pub color: BodyColor,
}

#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    name: String,
    pub x: NVec2, // top-left anchor in pixels
    pub v: NVec2, // velocity
    m: f64, // scaled mass
    radius: f64, // pixels
    color: BodyColor,
}

impl Body {
    /// Build a body from physical units, taking the next id from `ids`
    pub fn new(ids: &mut IdCounter, spec: BodySpec, params: &Parameters, viewport: &Viewport) -> Result<Self> {
        if !(spec.m.is_finite() && spec.m > 0.0) {
            return Err(SimError::InvalidMass { name: spec.name, mass: spec.m });
        }
        if !(spec.size.is_finite() && spec.size > 0.0) {
            return Err(SimError::InvalidSize { name: spec.name, size: spec.size });
        }
        if !(spec.x.iter().all(|c| c.is_finite()) && spec.v.iter().all(|c| c.is_finite())) {
            return Err(SimError::InvalidState(spec.name));
        }

        let units = params.units();
        let id = ids.next_id();
        let m = units.mass(spec.m);
        let radius = units.radius(spec.size);
        let x = units.screen_position(spec.x, radius, viewport);
        let v = units.velocity(spec.v);

        Ok(Self {
            id,
            name: spec.name,
            x,
            v,
            m,
            radius,
            color: spec.color,
        })
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> BodyColor {
        self.color
    }

    pub fn set_color(&mut self, color: BodyColor) {
        self.color = color;
    }

    /// Center of the circle, the anchor shifted by the radius
    pub fn center(&self) -> NVec2 {
        self.x + NVec2::new(self.radius, self.radius)
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    pub fn render_data(&self) -> RenderData {
        RenderData {
            id: self.id,
            position: self.x,
            radius: self.radius,
            color: self.color,
        }
    }

    pub fn render(&self, target: &mut impl RenderTarget) {
        target.draw_circle(self.render_data());
    }

    /// Blend from blue (at rest) to red (speed 10 and above)
    pub fn color_by_speed(&mut self) -> BodyColor {
        let value = (self.v.norm() * SPEED_COLOR_FACTOR).min(1.0);
        let intensity = lerp(0.0, 255.0, value) as u8;
        let color = BodyColor::rgba(intensity, 10, 255 - intensity, 255);
        self.set_color(color);
        color
    }

    /// Pull this body toward every other body of `bodies`, one at a time.
    ///
    /// Each pair kicks the velocity and then drifts the position before the
    /// next pair is visited, so the result depends on the order of `bodies`.
    pub fn update_physics(&mut self, bodies: &[Body], params: &Parameters) -> Result<()> {
        for other in bodies {
            if other.id == self.id {
                continue;
            }
            self.pull_toward(other, params)?;
        }
        Ok(())
    }

    /// One kick-drift step from the pull of a single other body
    pub(crate) fn pull_toward(&mut self, other: &Body, params: &Parameters) -> Result<()> {
        let force = pairwise_force(params.g, params.min_distance, self.x, self.m, other.x, other.m)
            .ok_or(SimError::CoincidentBodies { a: self.id, b: other.id })?;

        self.v += params.velocity_delta(force, self.m);
        self.x += params.drift(self.v);
        Ok(())
    }
}

fn lerp(a: f64, b: f64, f: f64) -> f64 {
    a * (1.0 - f) + b * f
}

#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>, // fixed once the scenario is built
    pub frame: u64, // number of completed steps
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, frame: 0 }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to the bodies; the collection itself cannot grow or shrink
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
