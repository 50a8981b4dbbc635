use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::errors::AionError;
use crate::core::models::user::{NewUser, User};
use crate::infrastructure::repository::UserRepository;

// The port only ever looks users up by email, so email is the sole key.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users_by_email: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        InMemoryUserRepository {
            users_by_email: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AionError> {
        let users_by_email = self.users_by_email.read().await;
        Ok(users_by_email.get(email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, AionError> {
        // Check and insert happen under one write lock; it doubles as the
        // unique constraint for racing registrations.
        let mut users_by_email = self.users_by_email.write().await;
        if users_by_email.contains_key(&user.email) {
            return Err(AionError::EmailAlreadyRegistered(user.email));
        }

        let created = User {
            id: Uuid::new_v4().to_string(),
            email: user.email,
            name: user.name,
            created_at: Utc::now(),
        };

        users_by_email.insert(created.email.clone(), created.clone());
        Ok(created)
    }
}
