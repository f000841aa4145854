use common::Viewer;
use common::filestore::{StoredFile, UrlGrant};

use super::SubmittedFileField;
use super::links::{self, FileLink};
use super::resolve::DraftFileResolver;
use crate::error::FieldError;

/// The three viewer states a file can render under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileAudience {
    /// The viewer may view the file in the CMS.
    Authorized,
    /// An authenticated viewer without rights to this file.
    SignedInWithoutAccess,
    /// No authenticated viewer.
    Anonymous,
}

impl FileAudience {
    /// Classify a file against the current viewer.
    pub fn of(file: &StoredFile, viewer: Option<&Viewer>) -> Self {
        if file.viewable(viewer) {
            Self::Authorized
        } else if viewer.is_some() {
            Self::SignedInWithoutAccess
        } else {
            Self::Anonymous
        }
    }
}

/// User-facing strings in the rendered summary. Replace for translation.
#[derive(Clone, Debug)]
pub struct RenderMessages {
    pub download_label: String,
    pub insufficient_rights: String,
    pub must_log_in: String,
}

impl Default for RenderMessages {
    fn default() -> Self {
        Self {
            download_label: "Download File".into(),
            insufficient_rights: "You don't have the right permissions to download this file"
                .into(),
            must_log_in: "You must be logged in to view this file".into(),
        }
    }
}

/// HTML summary of the field's files for report display.
///
/// Links are built in granted mode for every audience: the anonymous branch
/// shows the link next to the must-log-in notice, so an emailed recipient
/// reading the notification while logged out can still reach the file.
pub(super) async fn formatted_value(
    resolver: &mut DraftFileResolver<'_>,
    base_url: &str,
    messages: &RenderMessages,
    field: &SubmittedFileField,
    viewer: Option<&Viewer>,
) -> Result<Option<String>, FieldError> {
    let Some(links) = links::build_links(resolver, base_url, field, UrlGrant::Granted).await?
    else {
        return Ok(None);
    };
    let files = resolver.resolve(field).await?.unwrap_or_default();

    let mut values = Vec::new();
    for file in &files {
        let Some(link) = links.iter().find(|l| l.file_id == file.id) else {
            continue;
        };
        values.push(fragment(file, link, viewer, messages));
    }

    if values.is_empty() {
        Ok(None)
    } else {
        Ok(Some(values.join("<br>")))
    }
}

fn fragment(
    file: &StoredFile,
    link: &FileLink,
    viewer: Option<&Viewer>,
    messages: &RenderMessages,
) -> String {
    let name = escape_html(&file.name);
    let url = escape_html(&link.url);
    match FileAudience::of(file, viewer) {
        FileAudience::Authorized => format!(
            "{name} - <a href=\"{url}\" target=\"_blank\">{}</a>",
            escape_html(&messages.download_label)
        ),
        // The link is withheld, not just hidden in text.
        FileAudience::SignedInWithoutAccess => format!(
            "<i class=\"icon font-icon-lock\"></i> {name} - <em>{}</em>",
            escape_html(&messages.insufficient_rights)
        ),
        FileAudience::Anonymous => format!(
            "{name} - <a href=\"{url}\" target=\"_blank\">{}</a> - <em>{}</em>",
            escape_html(&messages.download_label),
            escape_html(&messages.must_log_in)
        ),
    }
}

/// Minimal HTML escaping, safe for both text and attribute positions.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::filestore::FileAccess;
    use uuid::Uuid;

    #[test]
    fn escape_html_covers_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain name.pdf"), "plain name.pdf");
    }

    fn restricted_file() -> StoredFile {
        StoredFile {
            id: Uuid::new_v4(),
            name: "secret.pdf".into(),
            exists: true,
            protected: false,
            access: FileAccess::WithPermission("FILE_VIEW".into()),
        }
    }

    #[test]
    fn audience_matrix() {
        let file = restricted_file();
        let unprivileged = Viewer {
            id: 1,
            username: "member".into(),
            permissions: vec![],
        };
        let privileged = Viewer {
            id: 2,
            username: "admin".into(),
            permissions: vec!["FILE_VIEW".into()],
        };

        assert_eq!(FileAudience::of(&file, None), FileAudience::Anonymous);
        assert_eq!(
            FileAudience::of(&file, Some(&unprivileged)),
            FileAudience::SignedInWithoutAccess
        );
        assert_eq!(
            FileAudience::of(&file, Some(&privileged)),
            FileAudience::Authorized
        );
    }

    #[test]
    fn locked_fragment_never_contains_the_link() {
        let file = restricted_file();
        let link = FileLink {
            file_id: file.id,
            url: "http://cms.example.com/assets/secret.pdf".into(),
        };
        let viewer = Viewer {
            id: 1,
            username: "member".into(),
            permissions: vec![],
        };

        let html = fragment(&file, &link, Some(&viewer), &RenderMessages::default());
        assert!(html.contains("font-icon-lock"));
        assert!(!html.contains("href"));
        assert!(!html.contains(&link.url));
    }
}
