use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    application::services::validation::{UserPayload, validate_user},
    domain::{
        errors::DomainError,
        models::{User, UserChanges},
        repositories::UserRepository,
    },
};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct UpdateUserRequest {
    pub id: Uuid,
    pub payload: UserPayload,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateUserRequest) -> Result<User, DomainError> {
        let valid = validate_user(&request.payload).map_err(DomainError::Validation)?;

        if !self.repo.exists(&request.id).await? {
            return Err(DomainError::NotFound(request.id));
        }

        if self
            .repo
            .email_in_use(&valid.email, Some(&request.id))
            .await?
        {
            return Err(DomainError::EmailTaken(valid.email));
        }

        let user = self
            .repo
            .update(
                &request.id,
                UserChanges {
                    name: valid.name,
                    email: valid.email,
                    age: valid.age,
                },
            )
            .await?;

        info!(user_id = %user.id, "user updated");
        Ok(user)
    }
}
