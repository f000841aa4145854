use async_trait::async_trait;
use uuid::Uuid;

use super::error::FileStoreError;
use super::file::{Stage, StoredFile, UrlGrant};

/// Read-only lookups against the versioned file store.
///
/// Every query names the stage it reads from. There is no ambient read
/// context to set and restore, so an error mid-query cannot leave the store
/// pinned to the wrong stage for unrelated requests.
#[async_trait]
pub trait VersionedFileStore: Send + Sync {
    /// Fetch the files with the given ids at `stage`, preserving the order
    /// of `ids`. Ids with no record at that stage are omitted.
    async fn files_by_ids(
        &self,
        stage: Stage,
        ids: &[Uuid],
    ) -> Result<Vec<StoredFile>, FileStoreError>;

    /// Fetch a single file by id at `stage`.
    async fn file_by_id(
        &self,
        stage: Stage,
        id: Uuid,
    ) -> Result<Option<StoredFile>, FileStoreError>;

    /// Produce a download URL for `file` under the given grant mode.
    ///
    /// `None` means the store cannot produce one: the underlying asset is
    /// gone, or the file is protected and only a public URL was requested.
    async fn download_url(
        &self,
        file: &StoredFile,
        grant: UrlGrant,
    ) -> Result<Option<String>, FileStoreError>;
}
