//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - scale and physical parameters (`Parameters`)
//! - the window layout (`Viewport`)
//! - system state (`System` with bodies at frame 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics and drawing systems

use bevy::log::info;
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::step;
use crate::simulation::params::{Parameters, Viewport};
use crate::simulation::render::RenderTarget;
use crate::simulation::states::{Body, BodySpec, IdCounter, NVec2, System};

/// Bevy resource representing a fully-initialized simulation scenario
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub viewport: Viewport,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            size_scale: p_cfg.size_scale,
            distance_scale: p_cfg.distance_scale,
            sim_speed: p_cfg.sim_speed,
            g: p_cfg.g,
            mass_divisor: p_cfg.mass_divisor,
            velocity_scale: p_cfg.velocity_scale,
            min_distance: p_cfg.min_distance,
        };
        parameters.validate()?;

        let w_cfg = cfg.window;
        let viewport = Viewport {
            width: w_cfg.width,
            height: w_cfg.height,
            title: w_cfg.title,
            frame_rate_cap: w_cfg.frame_rate_cap,
        };
        viewport.validate()?;

        let engine = Engine {
            integrator: cfg.engine.integrator,
            color_by_speed: cfg.engine.color_by_speed,
        };

        // Bodies: map `BodyConfig` -> runtime `Body`, ids in config order
        let mut ids = IdCounter::new();
        let bodies = cfg
            .bodies
            .into_iter()
            .map(|bc: BodyConfig| {
                let spec = BodySpec {
                    name: bc.name,
                    x: NVec2::new(bc.x[0], bc.x[1]),
                    v: NVec2::new(bc.v[0], bc.v[1]),
                    m: bc.m,
                    size: bc.size,
                    color: bc.color.to_color()?,
                };
                Body::new(&mut ids, spec, &parameters, &viewport)
            })
            .collect::<Result<Vec<Body>>>()?;

        let system = System::new(bodies);

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity);

        Ok(Self {
            engine,
            parameters,
            viewport,
            system,
            forces,
        })
    }

    /// Advance one frame, then recolor bodies if the engine asks for it
    pub fn step(&mut self) -> Result<()> {
        step(&mut self.system, &self.forces, &self.parameters, self.engine.integrator)?;

        if self.engine.color_by_speed {
            for body in self.system.bodies_mut() {
                body.color_by_speed();
            }
        }
        Ok(())
    }

    /// Log the scales in use and every body's physical and scaled size and mass
    pub fn log_summary(&self) {
        let p = &self.parameters;
        info!("Using a scale of 1/{} for size", p.size_scale);
        info!("Using a scale of 1/{} for distance", p.distance_scale);
        info!("Integrator: {:?}, color by speed: {}", self.engine.integrator, self.engine.color_by_speed);

        let origin = self.viewport.half_extent();
        for body in self.system.bodies() {
            let offset = (body.center() - origin).norm();
            info!("{} source created, id {}", body.name(), body.id());
            info!("\t size: {}km (radius of {}px with scale)", body.radius() * p.size_scale, body.radius());
            info!("\t mass: {}kg ({} with scale)", body.mass() * p.mass_divisor, body.mass());
            info!("\t distance from origin: {}km ({}px with scale)", offset * p.distance_scale, offset);
        }
    }

    /// Log where every body ended up, with the system's momentum and energy
    pub fn log_state(&self) {
        info!("Frame {}", self.system.frame);
        for body in self.system.bodies() {
            info!(
                "\t {}: position ({:.3}, {:.3})px, velocity ({:.3}, {:.3})",
                body.name(), body.x.x, body.x.y, body.v.x, body.v.y
            );
        }
        let p = self.system.total_momentum();
        info!("\t momentum ({:.6e}, {:.6e}), kinetic energy {:.6e}", p.x, p.y, self.system.kinetic_energy());
    }

    /// Clear `target` and draw every body on it in collection order
    pub fn render(&self, target: &mut impl RenderTarget) {
        target.clear();
        for body in self.system.bodies() {
            body.render(target);
        }
    }
}
