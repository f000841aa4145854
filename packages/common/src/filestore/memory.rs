use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::error::FileStoreError;
use super::file::{Stage, StoredFile, UrlGrant};
use super::traits::VersionedFileStore;

/// In-memory two-stage file store for tests and local development.
///
/// Draft and live stages are independent maps: inserting a file at one stage
/// does not make it visible at the other, which mirrors how a replaced or
/// unpublished live file diverges from the draft snapshot a submission keeps
/// referencing.
pub struct MemoryFileStore {
    stages: RwLock<HashMap<Stage, HashMap<Uuid, StoredFile>>>,
    unavailable: AtomicBool,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self {
            stages: RwLock::new(HashMap::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Insert or replace a file record at the given stage.
    pub fn insert(&self, stage: Stage, file: StoredFile) {
        if let Ok(mut stages) = self.stages.write() {
            stages.entry(stage).or_default().insert(file.id, file);
        }
    }

    /// Remove a file record from the given stage.
    pub fn remove(&self, stage: Stage, id: Uuid) {
        if let Ok(mut stages) = self.stages.write()
            && let Some(files) = stages.get_mut(&stage)
        {
            files.remove(&id);
        }
    }

    /// Simulate a store outage: while set, every query fails with
    /// [`FileStoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), FileStoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(FileStoreError::Unavailable("memory store offline".into()));
        }
        Ok(())
    }

    fn read_stage(
        &self,
        stage: Stage,
        f: impl FnOnce(Option<&HashMap<Uuid, StoredFile>>) -> Vec<StoredFile>,
    ) -> Result<Vec<StoredFile>, FileStoreError> {
        let stages = self
            .stages
            .read()
            .map_err(|_| FileStoreError::Unavailable("store lock poisoned".into()))?;
        Ok(f(stages.get(&stage)))
    }
}

impl Default for MemoryFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionedFileStore for MemoryFileStore {
    async fn files_by_ids(
        &self,
        stage: Stage,
        ids: &[Uuid],
    ) -> Result<Vec<StoredFile>, FileStoreError> {
        self.check_available()?;
        let found = self.read_stage(stage, |files| {
            let Some(files) = files else {
                return Vec::new();
            };
            ids.iter().filter_map(|id| files.get(id).cloned()).collect()
        })?;
        if found.len() != ids.len() {
            debug!(
                requested = ids.len(),
                found = found.len(),
                ?stage,
                "some requested ids have no record at this stage"
            );
        }
        Ok(found)
    }

    async fn file_by_id(
        &self,
        stage: Stage,
        id: Uuid,
    ) -> Result<Option<StoredFile>, FileStoreError> {
        self.check_available()?;
        let found = self.read_stage(stage, |files| {
            files
                .and_then(|f| f.get(&id).cloned())
                .into_iter()
                .collect()
        })?;
        Ok(found.into_iter().next())
    }

    async fn download_url(
        &self,
        file: &StoredFile,
        grant: UrlGrant,
    ) -> Result<Option<String>, FileStoreError> {
        self.check_available()?;
        if !file.exists {
            return Ok(None);
        }
        let url = match grant {
            UrlGrant::Granted => Some(format!("/assets/grant/{}/{}", file.id, file.name)),
            UrlGrant::PublicOnly if file.protected => None,
            UrlGrant::PublicOnly => Some(format!("/assets/{}/{}", file.id, file.name)),
        };
        Ok(url)
    }
}
