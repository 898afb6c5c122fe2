use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users in storage order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// Add a new user
    async fn add(&self, user: User) -> UserResult<()>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn add(&self, user: User) -> UserResult<()> {
        let mut users = self.users.write().await;
        tracing::info!(user_id = %user.id, "Created user");
        users.push(user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_and_get_user() {
        let repo = InMemoryUserRepository::new();

        repo.add(sample_user("1", "one@example.com")).await.unwrap();

        let fetched = repo.get_by_id("1").await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().email, "one@example.com");
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryUserRepository::new();

        repo.add(sample_user("b", "b@example.com")).await.unwrap();
        repo.add(sample_user("a", "a@example.com")).await.unwrap();
        repo.add(sample_user("c", "c@example.com")).await.unwrap();

        let users = repo.list().await.unwrap();
        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_get_missing_user_is_none() {
        let repo = InMemoryUserRepository::new();

        let fetched = repo.get_by_id("missing").await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_non_numeric_ids_are_accepted() {
        let repo = InMemoryUserRepository::new();

        repo.add(sample_user("ABC", "abc@example.com"))
            .await
            .unwrap();

        let fetched = repo.get_by_id("ABC").await.unwrap();
        assert_eq!(fetched.unwrap().id, "ABC");
    }
}
