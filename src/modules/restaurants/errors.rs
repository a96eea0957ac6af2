use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum RestaurantError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("restaurant {0} not found")]
    NotFound(i32),

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}
