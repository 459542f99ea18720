pub mod error;
pub mod repo;
pub mod service;

pub use error::DomainError;
pub use repo::UsersRepository;
pub use service::{Service, ServiceConfig};
