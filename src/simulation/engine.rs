//! High-level runtime engine settings
//!
//! Selects the integrator and whether bodies are recolored from their
//! speed after every step of a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub integrator: IntegratorConfig, // semi-implicit or sequential euler
    pub color_by_speed: bool, // recolor bodies after each step
}
