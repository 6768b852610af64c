pub mod config;
pub mod connections;
pub mod engine;
pub mod error;
pub mod force;
pub mod formation;
pub mod modulation;
pub mod particle;
pub mod pointer;
pub mod render;
pub mod state;

pub use config::*;
pub use connections::{edge_opacity, pointer_links, ConnectionSelector, Edge, PointerLink};
pub use engine::*;
pub use error::ConfigError;
pub use formation::{perimeter_points, FormationController, FormationPhase, ReleaseOutcome};
pub use modulation::{HueRotation, Pulse, Shake, VisualModulator};
pub use particle::{Particle, ParticleSet};
pub use pointer::{Debounce, PointerState};
pub use render::{draw_frame, Canvas};
pub use state::*;
