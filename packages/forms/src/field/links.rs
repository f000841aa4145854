use common::filestore::UrlGrant;
use tracing::debug;
use uuid::Uuid;

use super::SubmittedFileField;
use super::resolve::DraftFileResolver;
use crate::error::FieldError;

/// An absolute download link for one resolved file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileLink {
    pub file_id: Uuid,
    pub url: String,
}

/// Build absolute download links for the field's resolved files.
///
/// `None` when the field resolves to no files at all. Files whose underlying
/// asset is gone, and files the store yields no URL for, are skipped rather
/// than rendered as broken links.
pub(super) async fn build_links(
    resolver: &mut DraftFileResolver<'_>,
    base_url: &str,
    field: &SubmittedFileField,
    grant: UrlGrant,
) -> Result<Option<Vec<FileLink>>, FieldError> {
    let Some(files) = resolver.resolve(field).await? else {
        return Ok(None);
    };
    if files.is_empty() {
        return Ok(None);
    }

    let mut links = Vec::with_capacity(files.len());
    for file in &files {
        if !file.exists {
            debug!(file_id = %file.id, name = %file.name, "skipping link for missing asset");
            continue;
        }
        if let Some(url) = resolver.store().download_url(file, grant).await? {
            links.push(FileLink {
                file_id: file.id,
                url: absolute_url(base_url, &url),
            });
        }
    }
    Ok(Some(links))
}

/// Absolutize a store URL against the configured base origin. URLs already
/// carrying a scheme pass through unchanged.
pub(super) fn absolute_url(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}
