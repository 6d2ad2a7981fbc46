mod property_type;
mod scenario;

pub use property_type::{ParsePropertyTypeError, PropertyType};
pub use scenario::DepreciationScenario;
