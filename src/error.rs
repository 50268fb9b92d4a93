use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Sign-in required")]
    SignInRequired,
}

pub type AppResult<T> = Result<T, AppError>;
