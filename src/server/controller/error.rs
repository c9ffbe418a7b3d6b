use crate::server::error::AppError;

/// Fallback for every unmatched route.
pub async fn not_found() -> AppError {
    AppError::NotFound("No route matched".to_string())
}
