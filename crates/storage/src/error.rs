use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

impl StorageError {
    /// Wraps a raw sqlx error, turning a unique-key violation into
    /// `ConstraintViolation` with the given message.
    pub(crate) fn from_insert(error: sqlx::Error, on_duplicate: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = error
            && db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
        {
            return StorageError::ConstraintViolation(on_duplicate.to_string());
        }
        StorageError::from(error)
    }

    pub fn is_unique_violation(&self) -> bool {
        match self {
            StorageError::ConstraintViolation(_) => true,
            StorageError::Database(sqlx::Error::Database(e)) => {
                e.code().as_deref() == Some(UNIQUE_VIOLATION)
            }
            _ => false,
        }
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
        )
    }
}
