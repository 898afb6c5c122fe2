use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::entity;
use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;

/// PostgreSQL implementation of UserRepository backed by Sea-ORM
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let models = entity::user::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let model = entity::user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(User::from))
    }

    async fn add(&self, user: User) -> UserResult<()> {
        let active_model: entity::user::ActiveModel = user.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(user_id = %model.id, "Created user");
        Ok(())
    }
}
