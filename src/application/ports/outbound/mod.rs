//! Outbound ports - Contracts the infrastructure must implement

mod repository_port;

pub use repository_port::{CharacterRepositoryPort, ItemRepositoryPort};
