use async_trait::async_trait;

use crate::core::errors::AionError;
use crate::core::models::user::{NewUser, User};

/// The persistence capability the use case depends on. Absence of a user is a
/// normal outcome (`Ok(None)`), never an error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AionError>;

    /// Persists the record, assigning id and creation timestamp. Implementors
    /// must enforce the unique-email constraint themselves and report a
    /// violation as [`AionError::EmailAlreadyRegistered`].
    async fn create(&self, user: NewUser) -> Result<User, AionError>;
}

pub mod in_memory;
