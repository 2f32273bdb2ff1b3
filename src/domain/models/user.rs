use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Field values an update writes over an existing user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl User {
    pub fn apply(&mut self, changes: UserChanges, now: DateTime<Utc>) {
        self.name = changes.name;
        self.email = changes.email;
        self.age = changes.age;
        // clocks can step backwards; updated_at never precedes created_at
        self.updated_at = Some(now.max(self.created_at));
    }
}

/// Canonical form used for storage and uniqueness checks.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
