mod export;
mod links;
mod render;
mod resolve;

pub use links::FileLink;
pub use render::{FileAudience, RenderMessages};
pub use resolve::DraftFileResolver;

use common::Viewer;
use common::filestore::{StoredFile, UrlGrant, VersionedFileStore};
use uuid::Uuid;

use crate::error::FieldError;

/// A submitted file-upload field as the resolver consumes it: the immutable
/// file references captured when the submission was persisted.
///
/// Loaded from the entity layer via [`crate::repository::load_file_field`],
/// or constructed directly in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmittedFileField {
    pub id: Uuid,
    /// Legacy single-upload reference.
    pub uploaded_file_id: Option<Uuid>,
    /// Multi-upload set, in upload order. Takes precedence over the legacy
    /// reference whenever non-empty.
    pub uploaded_file_ids: Vec<Uuid>,
}

/// Per-request rendering context for submitted file fields.
///
/// Owns the resolution cache, so a context must not outlive the logical
/// request it was created for; pooled reuse across requests would leak stale
/// resolutions.
pub struct FileFieldContext<'a> {
    resolver: DraftFileResolver<'a>,
    base_url: &'a str,
    messages: RenderMessages,
}

impl<'a> FileFieldContext<'a> {
    pub fn new(store: &'a dyn VersionedFileStore, base_url: &'a str) -> Self {
        Self {
            resolver: DraftFileResolver::new(store),
            base_url,
            messages: RenderMessages::default(),
        }
    }

    /// Replace the default English strings, e.g. with translated ones.
    pub fn with_messages(mut self, messages: RenderMessages) -> Self {
        self.messages = messages;
        self
    }

    /// The files this field referenced at draft stage when it was submitted,
    /// or `None` for a field with no surviving references.
    pub async fn uploaded_files_from_draft(
        &mut self,
        field: &SubmittedFileField,
    ) -> Result<Option<Vec<StoredFile>>, FieldError> {
        self.resolver.resolve(field).await
    }

    /// Absolute download links for the field's files, in resolution order.
    pub async fn links(
        &mut self,
        field: &SubmittedFileField,
        grant: UrlGrant,
    ) -> Result<Option<Vec<FileLink>>, FieldError> {
        links::build_links(&mut self.resolver, self.base_url, field, grant).await
    }

    /// HTML summary for report display; `None` when there is nothing to
    /// show (distinct from an empty value).
    pub async fn formatted_value(
        &mut self,
        field: &SubmittedFileField,
        viewer: Option<&Viewer>,
    ) -> Result<Option<String>, FieldError> {
        render::formatted_value(&mut self.resolver, self.base_url, &self.messages, field, viewer)
            .await
    }

    /// Plain-text value for CSV export: public URLs joined with `\r`.
    pub async fn export_value(&mut self, field: &SubmittedFileField) -> Result<String, FieldError> {
        export::export_value(&mut self.resolver, self.base_url, field).await
    }

    /// Names of the field's files, in resolution order.
    pub async fn file_names(
        &mut self,
        field: &SubmittedFileField,
    ) -> Result<Option<Vec<String>>, FieldError> {
        export::file_names(&mut self.resolver, field).await
    }
}
