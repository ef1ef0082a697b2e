use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error("failed to hash fixture password: {0}")]
    PasswordHash(String),
    #[error(transparent)]
    App(Box<dyn std::error::Error + Send + Sync>),
}
