use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No live row matches the id. `entity` is the lowercase resource name
    /// used in client-facing messages (e.g. `"album"`).
    #[error("Cannot find {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
