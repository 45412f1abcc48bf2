//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator choice and color-by-speed toggle
//! - [`WindowConfig`]     – window size, title and frame-rate cap
//! - [`ParametersConfig`] – scale constants and the gravitational constant
//! - [`BodyConfig`]       – initial state for each body, in physical units
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section except `bodies` may be omitted and falls back to the values
//! of the built-in Sun/Earth scenario.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "semi_implicit_euler"   # or "sequential_euler"
//!   color_by_speed: false
//!
//! window:
//!   width: 1500
//!   height: 800
//!   title: "Jen gravité"
//!   frame_rate_cap: 90
//!
//! parameters:
//!   size_scale: 1.0e4        # km per pixel of radius
//!   distance_scale: 5.0e5    # km per pixel of distance
//!   sim_speed: 1.0e13
//!   G: 6.6e-11
//!   mass_divisor: 1.0e20
//!   velocity_scale: 1.0      # raw velocities are stored as given
//!   min_distance: 0.0        # 0 disables the distance floor
//!
//! bodies:
//!   - name: "Sun"
//!     x: [0.0, 0.0]          # km
//!     v: [0.0, 0.0]
//!     m: 1.989e30            # kg
//!     size: 1.4e6            # km
//!     color: "yellow"
//!   - name: "Earth"
//!     x: [0.0, 1.5e8]
//!     v: [10.0, 0.0]
//!     m: 5.972e24
//!     size: 1.27e4
//!     color: [0, 0, 255]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::simulation::states::BodyColor;

/// Which integrator the engine advances the system with
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "semi_implicit_euler")] // all increments from one snapshot, then one drift per body
    #[default]
    SemiImplicitEuler,

    #[serde(rename = "sequential_euler")] // body-by-body in-place update, kick and drift per pair
    SequentialEuler,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the system
    pub color_by_speed: bool, // recolor every body from its speed after each step
}

/// Window the scenario is drawn in
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub frame_rate_cap: u32, // physics steps per second
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 800,
            title: "Jen gravité".to_string(),
            frame_rate_cap: 90,
        }
    }
}

/// Scale constants and physical constants for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub size_scale: f64,     // km of body size per pixel of radius
    pub distance_scale: f64, // km of distance per pixel
    pub sim_speed: f64,      // multiplier applied to every velocity increment
    #[serde(rename = "G")]
    pub g: f64,              // gravitational constant
    pub mass_divisor: f64,   // raw kg are divided by this before storage
    pub velocity_scale: f64, // raw velocities are multiplied by this before storage
    pub min_distance: f64,   // floor on the distance used in the force law, 0 = none
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            size_scale: 1.0e4,
            distance_scale: 5.0e5,
            sim_speed: 1.0e13,
            g: 6.6e-11,
            mass_divisor: 1.0e20,
            velocity_scale: 1.0,
            min_distance: 0.0,
        }
    }
}

/// Display color of a body: a named color or explicit RGB(A) channels
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorConfig {
    Named(String),
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl ColorConfig {
    pub fn to_color(&self) -> Result<BodyColor> {
        match self {
            ColorConfig::Named(name) => {
                BodyColor::named(name).ok_or_else(|| SimError::UnknownColor(name.clone()))
            }
            ColorConfig::Rgb([r, g, b]) => Ok(BodyColor::rgb(*r, *g, *b)),
            ColorConfig::Rgba([r, g, b, a]) => Ok(BodyColor::rgba(*r, *g, *b, *a)),
        }
    }
}

/// Configuration for a single body's initial state, in physical units
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: [f64; 2], // position in km, origin at the window center
    #[serde(default)]
    pub v: [f64; 2], // initial velocity, converted by `velocity_scale`
    pub m: f64,      // mass in kg
    pub size: f64,   // size in km
    pub color: ColorConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a scenario from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// The Sun/Earth demo: a sun at rest in the window center and an earth one
/// astronomical unit below it, drifting sideways at 10 km/s.
impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            window: WindowConfig::default(),
            parameters: ParametersConfig::default(),
            bodies: vec![
                BodyConfig {
                    name: "Sun".to_string(),
                    x: [0.0, 0.0],
                    v: [0.0, 0.0],
                    m: 1.989e30,
                    size: 1.4e6,
                    color: ColorConfig::Named("yellow".to_string()),
                },
                BodyConfig {
                    name: "Earth".to_string(),
                    x: [0.0, 150.0e6],
                    v: [10.0, 0.0],
                    m: 5.972e24,
                    size: 12.7e3,
                    color: ColorConfig::Named("blue".to_string()),
                },
            ],
        }
    }
}
