use std::collections::HashMap;

use common::filestore::{Stage, StoredFile, VersionedFileStore};
use tracing::debug;
use uuid::Uuid;

use super::SubmittedFileField;
use crate::error::FieldError;

/// Resolves a submitted field's file references against the draft stage.
///
/// Uploads land in draft by default, and the draft snapshot is what the
/// submission actually referenced — even after the live file is replaced or
/// unpublished. Outcomes are memoized per field id for the lifetime of the
/// resolver, including the resolved-to-nothing outcome; store failures are
/// not cached, so a later call retries.
pub struct DraftFileResolver<'a> {
    store: &'a dyn VersionedFileStore,
    cache: HashMap<Uuid, Option<Vec<StoredFile>>>,
}

impl<'a> DraftFileResolver<'a> {
    pub fn new(store: &'a dyn VersionedFileStore) -> Self {
        Self {
            store,
            cache: HashMap::new(),
        }
    }

    pub(super) fn store(&self) -> &'a dyn VersionedFileStore {
        self.store
    }

    /// Resolve the field's files, preferring the multi-upload set over the
    /// legacy single reference.
    pub async fn resolve(
        &mut self,
        field: &SubmittedFileField,
    ) -> Result<Option<Vec<StoredFile>>, FieldError> {
        if let Some(cached) = self.cache.get(&field.id) {
            debug!(field_id = %field.id, "resolved files served from cache");
            return Ok(cached.clone());
        }

        let files = if !field.uploaded_file_ids.is_empty() {
            Some(
                self.store
                    .files_by_ids(Stage::Draft, &field.uploaded_file_ids)
                    .await?,
            )
        } else if let Some(file_id) = field.uploaded_file_id {
            self.store
                .file_by_id(Stage::Draft, file_id)
                .await?
                .map(|file| vec![file])
        } else {
            None
        };

        self.cache.insert(field.id, files.clone());
        Ok(files)
    }
}
