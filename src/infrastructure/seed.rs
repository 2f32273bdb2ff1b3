use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

const SAMPLE_USERS: [(&str, &str, i32); 2] = [
    ("Ada Lovelace", "ada@example.com", 28),
    ("Alan Turing", "alan@example.com", 41),
];

/// Inserts the sample users when the store holds nobody yet.
pub async fn seed_if_empty(repo: &dyn UserRepository) -> Result<usize, DomainError> {
    if !repo.list().await?.is_empty() {
        return Ok(0);
    }

    for (name, email, age) in SAMPLE_USERS {
        repo.insert(User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            age,
            created_at: Utc::now(),
            updated_at: None,
        })
        .await?;
    }

    info!(count = SAMPLE_USERS.len(), "seeded sample users");
    Ok(SAMPLE_USERS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemoryUserRepository;

    #[tokio::test]
    async fn seeds_an_empty_store_once() {
        let repo = InMemoryUserRepository::new();

        assert_eq!(seed_if_empty(&repo).await.unwrap(), 2);
        assert_eq!(seed_if_empty(&repo).await.unwrap(), 0);

        let emails: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();
        assert_eq!(emails.len(), 2);
        assert!(emails.contains(&"ada@example.com".to_string()));
        assert!(emails.contains(&"alan@example.com".to_string()));
    }
}
