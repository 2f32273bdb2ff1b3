use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    errors::DomainError,
    models::{User, UserChanges},
};

/// Owner of every stored user.
///
/// `insert` and `update` re-check email uniqueness inside the same critical
/// section that performs the write, so two concurrent writers can never both
/// claim one address.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get(&self, id: &Uuid) -> Result<Option<User>, DomainError>;
    async fn exists(&self, id: &Uuid) -> Result<bool, DomainError>;
    async fn email_in_use(&self, email: &str, exclude_id: Option<&Uuid>)
    -> Result<bool, DomainError>;
    async fn insert(&self, user: User) -> Result<User, DomainError>;
    async fn update(&self, id: &Uuid, changes: UserChanges) -> Result<User, DomainError>;
    async fn remove(&self, id: &Uuid) -> Result<(), DomainError>;
}
