use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    errors::DomainError,
    models::{User, UserChanges, normalize_email},
    repositories::UserRepository,
};

#[derive(Default)]
struct UserTable {
    users: HashMap<Uuid, User>,
    // ids of deleted users; never handed out again
    retired: HashSet<Uuid>,
}

impl UserTable {
    fn email_in_use(&self, email: &str, exclude_id: Option<&Uuid>) -> bool {
        let email = normalize_email(email);
        self.users
            .values()
            .any(|u| Some(&u.id) != exclude_id && u.email == email)
    }
}

/// Process-local user store. Not durable across restarts.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        let mut users: Vec<User> = table.users.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(users)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.get(id).cloned())
    }

    async fn exists(&self, id: &Uuid) -> Result<bool, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.contains_key(id))
    }

    async fn email_in_use(
        &self,
        email: &str,
        exclude_id: Option<&Uuid>,
    ) -> Result<bool, DomainError> {
        let table = self.table.read().await;
        Ok(table.email_in_use(email, exclude_id))
    }

    async fn insert(&self, mut user: User) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        if table.users.contains_key(&user.id) || table.retired.contains(&user.id) {
            return Err(DomainError::Other(anyhow!(
                "user id {} has already been issued",
                user.id
            )));
        }

        user.email = normalize_email(&user.email);
        if table.email_in_use(&user.email, None) {
            return Err(DomainError::EmailTaken(user.email));
        }

        table.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: &Uuid, mut changes: UserChanges) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        if !table.users.contains_key(id) {
            return Err(DomainError::NotFound(*id));
        }

        changes.email = normalize_email(&changes.email);
        if table.email_in_use(&changes.email, Some(id)) {
            return Err(DomainError::EmailTaken(changes.email));
        }

        let user = table
            .users
            .get_mut(id)
            .ok_or(DomainError::NotFound(*id))?;
        user.apply(changes, Utc::now());
        Ok(user.clone())
    }

    async fn remove(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        table.users.remove(id).ok_or(DomainError::NotFound(*id))?;
        table.retired.insert(*id);
        Ok(())
    }
}
