//! Launch preparation and the exec handoff.
pub mod config;
pub mod exec;
pub mod plan;
pub mod probe;
pub mod startup;

pub use config::{Credential, LaunchConfig};
pub use exec::{ProcessImage, SystemImage};
pub use plan::LaunchPlan;
pub use probe::{resolve_binary, RuntimeProbe, SystemProbe};
pub use startup::{launch, RuntimeExit};
