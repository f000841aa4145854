use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::viewer::Viewer;

/// Read stage of the versioned file store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// The unpublished working version of a record.
    Draft,
    /// The currently published version.
    Live,
}

/// URL mode requested from the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlGrant {
    /// Hand back a signed/temporary URL regardless of viewer rights.
    Granted,
    /// Only produce a URL if the file is ordinarily publicly resolvable.
    PublicOnly,
}

/// Who may view a file in the CMS.
///
/// This is the file's own security setting, independent of whether a
/// download URL can be produced for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileAccess {
    Anyone,
    LoggedIn,
    WithPermission(String),
}

/// A file record as the versioned store returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: Uuid,
    /// Original upload filename.
    pub name: String,
    /// Whether the underlying asset is still present.
    pub exists: bool,
    /// Protected assets have no publicly resolvable URL; access is grant-only.
    pub protected: bool,
    pub access: FileAccess,
}

impl StoredFile {
    /// Evaluate this file's access rule against the current viewer.
    pub fn viewable(&self, viewer: Option<&Viewer>) -> bool {
        match &self.access {
            FileAccess::Anyone => true,
            FileAccess::LoggedIn => viewer.is_some(),
            FileAccess::WithPermission(code) => viewer.is_some_and(|v| v.has_permission(code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(access: FileAccess) -> StoredFile {
        StoredFile {
            id: Uuid::new_v4(),
            name: "report.pdf".into(),
            exists: true,
            protected: false,
            access,
        }
    }

    fn viewer(permissions: &[&str]) -> Viewer {
        Viewer {
            id: 1,
            username: "member".into(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn anyone_is_viewable_by_all() {
        let f = file(FileAccess::Anyone);
        assert!(f.viewable(None));
        assert!(f.viewable(Some(&viewer(&[]))));
    }

    #[test]
    fn logged_in_requires_a_viewer() {
        let f = file(FileAccess::LoggedIn);
        assert!(!f.viewable(None));
        assert!(f.viewable(Some(&viewer(&[]))));
    }

    #[test]
    fn permission_gate_checks_the_code() {
        let f = file(FileAccess::WithPermission("FILE_VIEW".into()));
        assert!(!f.viewable(None));
        assert!(!f.viewable(Some(&viewer(&["CMS_ACCESS"]))));
        assert!(f.viewable(Some(&viewer(&["FILE_VIEW"]))));
    }
}
