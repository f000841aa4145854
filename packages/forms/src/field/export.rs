use common::filestore::UrlGrant;

use super::SubmittedFileField;
use super::links;
use super::resolve::DraftFileResolver;
use crate::error::FieldError;

/// CSV export value: public download URLs joined with a carriage return.
///
/// Built without grant: exported rows land in spreadsheets with no
/// downstream visibility gate, so only ordinarily-resolvable URLs may
/// appear. No HTML, no escaping.
pub(super) async fn export_value(
    resolver: &mut DraftFileResolver<'_>,
    base_url: &str,
    field: &SubmittedFileField,
) -> Result<String, FieldError> {
    match links::build_links(resolver, base_url, field, UrlGrant::PublicOnly).await? {
        Some(links) if !links.is_empty() => Ok(links
            .into_iter()
            .map(|l| l.url)
            .collect::<Vec<_>>()
            .join("\r")),
        _ => Ok(String::new()),
    }
}

/// Names of the resolved files, in resolution order.
pub(super) async fn file_names(
    resolver: &mut DraftFileResolver<'_>,
    field: &SubmittedFileField,
) -> Result<Option<Vec<String>>, FieldError> {
    let Some(files) = resolver.resolve(field).await? else {
        return Ok(None);
    };
    if files.is_empty() {
        return Ok(None);
    }
    Ok(Some(files.into_iter().map(|f| f.name).collect()))
}
