use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Language, User};

/// Identifies a persisted snippet owned by a user account.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserSnippetId {
    pub user: User,
    pub id: String,
}

impl UserSnippetId {
    pub fn to_user_url(&self) -> String {
        format!("/u/{}", self.user)
    }

    pub fn to_view_url(&self) -> String {
        format!("/u/{}/{}", self.user, self.id)
    }

    pub fn to_raw_url(&self) -> String {
        format!("/u/{}/{}/raw", self.user, self.id)
    }
}

impl fmt::Display for UserSnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.user, self.id)
    }
}

/// A snippet as listed on a user's profile.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetSummary {
    pub id: String,
    pub user: User,
    pub filename: String,
    pub language: Language,
    pub last_modified: u64,
}

impl SnippetSummary {
    pub fn to_url(&self) -> String {
        format!("/u/{}/{}", self.user, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> UserSnippetId {
        UserSnippetId {
            user: User::new_unchecked("alice".to_owned()),
            id: "abc123".to_owned(),
        }
    }

    #[test]
    fn snippet_urls() {
        assert_eq!(id().to_user_url(), "/u/alice");
        assert_eq!(id().to_view_url(), "/u/alice/abc123");
        assert_eq!(id().to_raw_url(), "/u/alice/abc123/raw");
    }

    #[test]
    fn display() {
        assert_eq!(id().to_string(), "alice:abc123");
    }

    #[test]
    fn summary_from_wire() {
        let summary: SnippetSummary = serde_json::from_str(
            r#"{
                "id": "abc123",
                "user": "alice",
                "filename": "brave-otter.py",
                "language": "python",
                "lastModified": 1700000000000
            }"#,
        )
        .unwrap();

        assert_eq!(summary.filename, "brave-otter.py");
        assert_eq!(summary.language, Language::Python);
        assert_eq!(summary.to_url(), "/u/alice/abc123");
    }
}
