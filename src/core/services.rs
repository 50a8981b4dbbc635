use tracing::{debug, info};

use crate::core::errors::AionError;
use crate::core::models::user::User;
use crate::core::schemas::CreateUserInput;
use crate::infrastructure::repository::UserRepository;

/// The CreateUser use case. Holds no state of its own; every mutation goes
/// through the injected repository, so concurrent calls need no internal
/// synchronization.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        UserService { repo }
    }

    /// Registers a user: validate, check uniqueness, persist, return the
    /// created entity unchanged.
    ///
    /// Two concurrent calls with the same email may both pass the uniqueness
    /// check before either persists; the repository's own unique-email
    /// constraint decides the loser, surfaced as
    /// [`AionError::EmailAlreadyRegistered`].
    pub async fn create_user(&self, input: CreateUserInput) -> Result<User, AionError> {
        let new_user = input.parse()?;

        if self.repo.find_by_email(&new_user.email).await?.is_some() {
            return Err(AionError::EmailAlreadyRegistered(new_user.email));
        }

        let created = self.repo.create(new_user).await?;
        info!(user_id = %created.id, "user registered");
        debug!(email = %created.email, "registration details");

        Ok(created)
    }
}
