use reqwasm::http::{Request, Response};
use serde::{Deserialize, Serialize};
use shared::{SnippetSummary, User, UserSnippetId};

use crate::{Error, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub current_user: User,
    pub snippets: Vec<SnippetSummary>,
}

#[derive(Debug, Deserialize)]
pub struct SnippetResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

#[derive(Serialize)]
pub struct SaveSnippet<'a> {
    pub filename: &'a str,
    pub code: &'a str,
}

/// Fetches the current user and their existing snippets.
pub async fn get_profile() -> Result<ProfileResponse> {
    let resp = Request::get("/api/internal/profile").send().await?;

    if !resp.ok() {
        return Err(handle_error_response(resp).await);
    }

    Ok(resp.json().await?)
}

/// Persists the editor content under the given filename, returns the new
/// snippet's id.
pub async fn save_snippet(snippet: SaveSnippet<'_>) -> Result<String> {
    let resp = Request::post("/api/internal/snippet/")
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&snippet)?)
        .send()
        .await?;

    if !resp.ok() {
        return Err(handle_error_response(resp).await);
    }

    Ok(resp.json::<SnippetResponse>().await?.id)
}

pub async fn get_snippet(id: &UserSnippetId) -> Result<String> {
    let resp = Request::get(&id.to_raw_url()).send().await?;

    if resp.status() == 404 {
        return Err(Error::NotFound("snippet", id.to_string()));
    }

    if !resp.ok() {
        return Err(handle_error_response(resp).await);
    }

    Ok(resp.text().await?)
}

/// The shareable, fully qualified link to a freshly saved snippet.
///
/// Callers navigating in-app only reuse the path and query of this link.
pub fn gen_view_snippet_link(user: &User, id: &str) -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();

    let id = UserSnippetId {
        user: user.clone(),
        id: id.to_owned(),
    };

    format!("{origin}{}", id.to_view_url())
}

async fn handle_error_response(resp: Response) -> Error {
    if let Ok(err) = resp.json::<ErrorResponse>().await {
        Error::ApiError(err.code, err.message)
    } else {
        Error::UnhandledStatus(resp.status(), resp.status_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_response_from_wire() {
        let resp: ProfileResponse = serde_json::from_str(
            r#"{
                "currentUser": "alice",
                "snippets": [{
                    "id": "abc123",
                    "user": "alice",
                    "filename": "brave-otter.js",
                    "language": "javascript",
                    "lastModified": 1700000000000
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(resp.current_user.as_str(), "alice");
        assert_eq!(resp.snippets.len(), 1);
        assert_eq!(resp.snippets[0].id, "abc123");
    }

    #[test]
    fn save_snippet_body() {
        let body = serde_json::to_string(&SaveSnippet {
            filename: "foo.py",
            code: "print(1)",
        })
        .unwrap();
        assert_eq!(body, r#"{"filename":"foo.py","code":"print(1)"}"#);
    }
}
