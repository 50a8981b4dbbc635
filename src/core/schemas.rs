use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::core::errors::{AionError, FieldError};
use crate::core::models::user::NewUser;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[a-zA-Z]{2,}$").expect("valid email regex"));

/// Semi-typed registration payload as it arrives from the boundary.
#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct CreateUserInput {
    pub email: String,
    pub name: String,
}

impl CreateUserInput {
    /// Validates the payload into a well-formed [`NewUser`], or reports every
    /// violated field at once. Never returns a partial value.
    pub fn parse(&self) -> Result<NewUser, AionError> {
        let mut errors = Vec::new();

        if !EMAIL.is_match(&self.email) {
            errors.push(FieldError {
                field: "email".to_string(),
                title: "Invalid email".to_string(),
                description: "must be a syntactically valid email address".to_string(),
            });
        }

        let name_len = self.name.chars().count();
        if name_len < NAME_MIN_LEN || name_len > NAME_MAX_LEN {
            errors.push(FieldError {
                field: "name".to_string(),
                title: "Invalid name".to_string(),
                description: format!(
                    "length must be between {} and {} characters",
                    NAME_MIN_LEN, NAME_MAX_LEN
                ),
            });
        }

        if !errors.is_empty() {
            return Err(AionError::InvalidInput(errors));
        }

        Ok(NewUser {
            email: self.email.clone(),
            name: self.name.clone(),
        })
    }
}
