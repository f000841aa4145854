mod error;
mod file;
mod traits;

pub mod memory;

pub use error::FileStoreError;
pub use file::{FileAccess, Stage, StoredFile, UrlGrant};
pub use traits::VersionedFileStore;
