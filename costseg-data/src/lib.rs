pub mod loader;

pub use loader::{ScenarioLoadError, ScenarioLoader, ScenarioRecord};
