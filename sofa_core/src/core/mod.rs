pub mod errors;
pub mod registry;
