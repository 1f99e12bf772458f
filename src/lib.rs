pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod storage;

pub use config::{Inventory, RegistryConfig};
pub use error::{RegistryError, Result};
pub use model::{Car, CarFields};
pub use server::{router, CarRegistryServer};
pub use storage::{CarStore, MemoryStore};
