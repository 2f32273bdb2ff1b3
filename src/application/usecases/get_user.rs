use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: Uuid) -> Result<User, DomainError> {
        self.repo.get(&id).await?.ok_or(DomainError::NotFound(id))
    }
}
