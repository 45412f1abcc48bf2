pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod error;

pub use simulation::states::{Body, BodyColor, BodyId, BodySpec, IdCounter, System, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, gravitational_pull, pairwise_force};
pub use simulation::integrator::{semi_implicit_euler, sequential_euler, step};
pub use simulation::params::{Parameters, UnitConversion, Viewport};
pub use simulation::render::{RenderData, RenderTarget};
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, WindowConfig, ParametersConfig, BodyConfig, ColorConfig, ScenarioConfig};

pub use visualization::{gravsim_vis2d::run_2d, headless::run_headless};

pub use error::{Result, SimError};
