use serde::{Deserialize, Serialize};

/// An authenticated CMS member, as handed over by the auth subsystem.
///
/// Rendering code receives this as an explicit `Option<&Viewer>` argument;
/// `None` means an anonymous visitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: i32,
    pub username: String,
    /// Permission codes granted through the member's roles.
    pub permissions: Vec<String>,
}

impl Viewer {
    /// Returns `true` if the viewer holds the given permission code.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_permission_matches_exact_code() {
        let viewer = Viewer {
            id: 7,
            username: "editor".into(),
            permissions: vec!["CMS_ACCESS".into(), "FILE_VIEW".into()],
        };

        assert!(viewer.has_permission("FILE_VIEW"));
        assert!(!viewer.has_permission("FILE_EDIT"));
        assert!(!viewer.has_permission("file_view")); // case-sensitive
    }
}
