//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository pre-populated with the given users
    pub async fn with_users(users: Vec<User>) -> Self {
        let repo = Self::new();
        for user in users {
            let mut map = repo.users.write().await;
            map.insert(user.username.clone(), user);
        }
        repo
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn upsert(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let stored = match users.get(&user.username) {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.password_hash = user.password_hash;
                updated
            }
            None => user,
        };
        users.insert(stored.username.clone(), stored.clone());
        Ok(stored)
    }
}
