use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered user. The id and creation timestamp are assigned by the
/// repository at persistence time and never change afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied subset of a user: what a registration request carries
/// before the repository has assigned identity. Compared by content only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}
