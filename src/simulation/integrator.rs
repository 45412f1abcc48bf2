//! Fixed-step integrators for the simulation
//!
//! Both integrators use an implicit unit time step of one frame:
//! velocities change by the per-frame increment from the force terms and
//! positions move by `velocity / distance_scale`.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};
use crate::configuration::config::IntegratorConfig;
use crate::error::Result;

/// Advance the system by one frame with semi-implicit Euler
/// All increments come from the same snapshot, so the result does not
/// depend on the order of the bodies
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) -> Result<()> {
    let n = sys.bodies().len();

    // dv[i] holds the velocity increment of body i for this frame
    let mut dv = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys, params, &mut dv)?;

    // Kick: v_n+1 = v_n + dv_n
    for (b, a) in sys.bodies_mut().iter_mut().zip(dv.iter()) {
        b.v += *a;
    }

    // Drift with the new velocity: x_n+1 = x_n + v_n+1 / distance_scale
    for b in sys.bodies_mut().iter_mut() {
        b.x += params.drift(b.v);
    }

    sys.frame += 1;
    Ok(())
}

/// Advance the system by one frame body by body, in collection order
/// Body i sees bodies 0..i already moved this frame and kicks and drifts
/// after every single pair, reproducing the original demo numerically
pub fn sequential_euler(sys: &mut System, params: &Parameters) -> Result<()> {
    let bodies = sys.bodies_mut();

    for i in 0..bodies.len() {
        let (before, rest) = bodies.split_at_mut(i);
        if let Some((body, after)) = rest.split_first_mut() {
            for other in before.iter().chain(after.iter()) {
                body.pull_toward(other, params)?;
            }
        }
    }

    sys.frame += 1;
    Ok(())
}

/// Advance the system by one frame with the configured integrator
pub fn step(sys: &mut System, forces: &AccelSet, params: &Parameters, integrator: IntegratorConfig) -> Result<()> {
    match integrator {
        IntegratorConfig::SemiImplicitEuler => semi_implicit_euler(sys, forces, params),
        IntegratorConfig::SequentialEuler => sequential_euler(sys, params),
    }
}
