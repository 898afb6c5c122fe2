use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{User, UserDto};
use crate::repository::UserRepository;

/// Service layer for User account logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all users as DTOs, in storage order
    pub async fn list_users(&self) -> UserResult<Vec<UserDto>> {
        let users = self.repository.list().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Get a user by ID.
    ///
    /// Absence is not an error here; the transport layer decides how to
    /// report a missing user.
    pub async fn get_user(&self, id: &str) -> UserResult<Option<UserDto>> {
        let user = self.repository.get_by_id(id).await?;
        Ok(user.map(UserDto::from))
    }

    /// Add a user to the repository.
    ///
    /// The entity is stored exactly as given; no field validation happens
    /// on this path.
    pub async fn add_user(&self, user: User) -> UserResult<()> {
        self.repository.add(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryUserRepository, MockUserRepository};

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
    async fn test_list_users_maps_entities_to_dtos() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_list().returning(|| {
            Ok(vec![
                sample_user("1", "first@example.com"),
                sample_user("2", "second@example.com"),
            ])
        });

        let service = UserService::new(mock_repo);
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "1");
        assert_eq!(users[0].email, "first@example.com");
        assert_eq!(users[1].id, "2");
        assert_eq!(users[1].email, "second@example.com");
    }

    #[tokio::test]
    async fn test_list_users_never_exposes_passwords() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Ok(vec![sample_user("1", "first@example.com")]));

        let service = UserService::new(mock_repo);
        let users = service.list_users().await.unwrap();

        assert!(users[0].password.is_none());
    }

    #[tokio::test]
    async fn test_list_users_empty_store() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_list().returning(|| Ok(vec![]));

        let service = UserService::new(mock_repo);
        let users = service.list_users().await.unwrap();

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_get_user_returns_exact_fields() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq("28"))
            .returning(|_| Ok(Some(sample_user("28", "stub@example.com"))));

        let service = UserService::new(mock_repo);
        let user = service.get_user("28").await.unwrap().unwrap();

        assert_eq!(user.id, "28");
        assert_eq!(user.email, "stub@example.com");
        assert_eq!(user.first_name, "Test");
        assert_eq!(user.last_name, "User");
        assert!(user.password.is_none());
    }

    #[tokio::test]
    async fn test_get_missing_user_is_ok_none() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = UserService::new(mock_repo);
        let user = service.get_user("missing").await.unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_add_user_forwards_to_repository_once() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_add().times(1).returning(|_| Ok(()));

        let service = UserService::new(mock_repo);
        service
            .add_user(sample_user("7", "new@example.com"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_default_user_succeeds() {
        // A dummy entity with empty fields passes through untouched.
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_add().times(1).returning(|_| Ok(()));

        let service = UserService::new(mock_repo);
        service.add_user(User::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_user_with_unvalidated_email_succeeds() {
        // Entities bypass the DTO email guard on the add path.
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_add().times(1).returning(|_| Ok(()));

        let service = UserService::new(mock_repo);
        service
            .add_user(sample_user("9", "no-at-sign"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_fake_repository_round_trip() {
        let service = UserService::new(InMemoryUserRepository::new());

        service
            .add_user(sample_user("ABC", "fake@example.com"))
            .await
            .unwrap();

        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 1);

        let user = service.get_user("ABC").await.unwrap().unwrap();
        assert_eq!(user.email, "fake@example.com");
    }

    #[tokio::test]
    async fn test_two_users_keep_storage_order() {
        let service = UserService::new(InMemoryUserRepository::new());

        service
            .add_user(sample_user("1", "first@example.com"))
            .await
            .unwrap();
        service
            .add_user(sample_user("2", "second@example.com"))
            .await
            .unwrap();

        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "1");
        assert_eq!(users[1].id, "2");
    }
}
