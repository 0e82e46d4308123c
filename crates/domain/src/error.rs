//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`StockroomError`] via `From`.

use std::error::Error;

/// Base error crossing the port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum StockroomError {
    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn Error + Send + Sync>),
}

/// No row matched the given identifier.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Lower-case name of the missing record kind (e.g. `product`).
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_without_id() {
        let err = StockroomError::from(NotFoundError {
            entity: "product",
            id: "7".to_string(),
        });
        assert_eq!(err.to_string(), "product not found");
    }

    #[test]
    fn should_prefix_storage_errors() {
        let err = StockroomError::Storage(Box::new(std::io::Error::other("disk on fire")));
        assert_eq!(err.to_string(), "storage error: disk on fire");
    }
}
