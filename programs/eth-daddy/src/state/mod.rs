pub mod registry;
pub mod domain;

pub use registry::*;
pub use domain::*;
