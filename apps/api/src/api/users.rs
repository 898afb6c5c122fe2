use axum::Router;
use domain_users::{handlers, InMemoryUserRepository, PgUserRepository, UserService};

/// Builds the users router against whichever repository is configured.
///
/// With a database connection the users live in PostgreSQL; otherwise they
/// are held in process memory and vanish on restart.
pub fn router(state: &crate::state::AppState) -> Router {
    match &state.db {
        Some(db) => {
            let repository = PgUserRepository::new(db.clone());
            handlers::router(UserService::new(repository))
        }
        None => {
            let repository = InMemoryUserRepository::new();
            handlers::router(UserService::new(repository))
        }
    }
}
