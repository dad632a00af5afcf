pub mod core;
pub mod storage;
pub mod utils;

// re‑export ergonomic entry points
pub use crate::core::errors::RegistryError;
pub use crate::core::registry::CushionRegistry;
pub use crate::storage::cushion::Cushion;
pub use crate::storage::store::CushionStore;
