pub mod apply;
pub mod circuit;
pub mod complex;
pub mod config;
pub mod display;
pub mod easybuild;
pub mod error;
pub mod gate;
pub mod index;
pub mod instruct;
pub mod measure;
pub mod menu;
pub mod state;

pub use apply::{apply, apply_gate};
pub use circuit::{Circuit, MAX_QUBITS};
pub use config::SimulatorConfig;
pub use error::{Result, SimError};
pub use gate::Gate;
pub use state::State;
