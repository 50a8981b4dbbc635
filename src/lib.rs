pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::AionError;
pub use crate::core::services::UserService;
pub use crate::infrastructure::repository::in_memory::InMemoryUserRepository;

#[cfg(test)]
mod tests;
