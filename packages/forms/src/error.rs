use common::filestore::FileStoreError;
use thiserror::Error;

use crate::filename::FilenameError;

/// Errors surfaced by submitted-file-field operations.
///
/// A file reference that no longer resolves is not an error — it is handled
/// by omission. An unreachable store is: rendering must fail loudly rather
/// than silently show "no file".
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("file store error: {0}")]
    Storage(#[from] FileStoreError),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("invalid upload filename: {0}")]
    Filename(#[from] FilenameError),
}

pub type Result<T> = std::result::Result<T, FieldError>;
