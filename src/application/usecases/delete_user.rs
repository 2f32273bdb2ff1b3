use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{errors::DomainError, repositories::UserRepository};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.remove(&id).await?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}
