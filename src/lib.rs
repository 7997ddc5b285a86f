pub mod configuration;
pub mod simulation;
pub mod visualization;

pub use simulation::engine::{Command, Engine};
pub use simulation::forces::{Attraction, PlanetaryGravity};
pub use simulation::integrator::euler_step;
pub use simulation::params::SimContext;
pub use simulation::scenario::Scenario;
pub use simulation::states::{sphere_mass, Body, BodyError, NVec2, Peer, Registry};

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;
