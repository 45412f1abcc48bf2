//! Force contributors for the simulation
//!
//! The force law itself is a pair of pure functions. `NewtonianGravity`
//! applies it to every pair of a `System`, and `AccelSet` sums the
//! per-frame velocity increments of all registered terms.

use crate::error::{Result, SimError};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Inverse-square pull magnitude between two masses `distance` apart
pub fn gravitational_pull(g: f64, m1: f64, m2: f64, distance: f64) -> f64 {
    g * (m1 * m2) / (distance * distance)
}

/// Force on the body at `x_self` from the body at `x_other`, pointing toward
/// `x_other`.
///
/// The distance used for the magnitude is floored at `min_distance`.
/// Returns `None` when the two positions coincide and no direction exists.
pub fn pairwise_force(g: f64, min_distance: f64, x_self: NVec2, m_self: f64, x_other: NVec2, m_other: f64) -> Option<NVec2> {
    let r = x_other - x_self;
    let distance = r.norm();
    if distance == 0.0 {
        return None;
    }
    let direction = r / distance;
    Some(direction * gravitational_pull(g, m_self, m_other, distance.max(min_distance)))
}

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single per-frame velocity increment per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute the velocity increments of this frame for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) -> Result<()> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, params, out)?;
        }
        Ok(())
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force terms operating on [`System`]
/// Implementations add their velocity increment into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) -> Result<()>;
}

/// Direct-sum Newtonian gravity in the scaled unit system
pub struct NewtonianGravity;

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) -> Result<()> {
        let bodies = sys.bodies();
        let n = bodies.len();

        // Each unordered pair (i, j) once: equal and opposite forces
        for i in 0..n {
            let bi = &bodies[i];
            for j in (i + 1)..n {
                let bj = &bodies[j];

                let f = pairwise_force(params.g, params.min_distance, bi.x, bi.mass(), bj.x, bj.mass())
                    .ok_or(SimError::CoincidentBodies { a: bi.id(), b: bj.id() })?;

                out[i] += params.velocity_delta(f, bi.mass());
                out[j] += params.velocity_delta(-f, bj.mass());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pull_follows_inverse_square() {
        let near = gravitational_pull(2.0, 3.0, 5.0, 1.0);
        let far = gravitational_pull(2.0, 3.0, 5.0, 2.0);
        assert_relative_eq!(near, 30.0);
        assert_relative_eq!(near / far, 4.0);
    }

    #[test]
    fn coincident_positions_have_no_force() {
        let x = NVec2::new(1.0, 1.0);
        assert!(pairwise_force(1.0, 0.0, x, 1.0, x, 1.0).is_none());
        assert!(pairwise_force(1.0, 5.0, x, 1.0, x, 1.0).is_none());
    }

    #[test]
    fn distance_floor_caps_the_magnitude() {
        let a = NVec2::new(0.0, 0.0);
        let b = NVec2::new(0.0, 0.5);
        let f = pairwise_force(1.0, 2.0, a, 1.0, b, 1.0).unwrap();
        assert_relative_eq!(f.norm(), 0.25);
        assert_relative_eq!(f.x, 0.0);
        assert!(f.y > 0.0);
    }
}
