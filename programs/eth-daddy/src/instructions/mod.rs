pub mod admin;
pub mod mint;
pub mod query;

pub use admin::*;
pub use mint::*;
pub use query::*;
