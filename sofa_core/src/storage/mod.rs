pub mod cushion;
pub mod store;
