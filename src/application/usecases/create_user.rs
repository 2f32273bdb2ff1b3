use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::{
    application::services::validation::{UserPayload, validate_user},
    domain::{errors::DomainError, models::User, repositories::UserRepository},
};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Validation runs to completion before uniqueness is consulted. The store
    /// repeats the uniqueness check under its write lock, which settles races
    /// between concurrent creates.
    pub async fn execute(&self, payload: UserPayload) -> Result<User, DomainError> {
        let valid = validate_user(&payload).map_err(DomainError::Validation)?;

        if self.repo.email_in_use(&valid.email, None).await? {
            return Err(DomainError::EmailTaken(valid.email));
        }

        let user = self
            .repo
            .insert(User {
                id: Uuid::new_v4(),
                name: valid.name,
                email: valid.email,
                age: valid.age,
                created_at: Utc::now(),
                updated_at: None,
            })
            .await?;

        info!(user_id = %user.id, "user created");
        Ok(user)
    }
}
