//! REST access for the admin console: a thin `gloo_net` wrapper plus typed
//! per-resource calls. Every request goes through the helpers here so URL
//! building, error mapping, and JSON decoding stay in one place.

pub mod archive;
pub mod console;
pub mod endpoints;
pub mod shop;

use gloo_net::http::{Request, Response};
use js_sys::Date;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use web_sys::FormData;

use crate::config::API_BASE;

/// Failure of one REST call. `Status` carries the response body so the
/// feedback modal can show what the server said.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response decode error: {0}")]
    Decode(String),
    #[error("bad endpoint template: {0}")]
    BadTemplate(String),
}

/// Listing parameters shared by every paginated endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl ListQuery {
    /// Query for one page of `page_size` rows, 1-based page index.
    pub fn page(page: usize, page_size: usize) -> Self {
        ListQuery {
            search: None,
            offset: Some(page.max(1).saturating_sub(1) * page_size),
            limit: Some(page_size),
        }
    }

    /// Adds a search term unless it is blank.
    pub fn with_search(mut self, term: &str) -> Self {
        let term = term.trim();
        if !term.is_empty() {
            self.search = Some(term.to_string());
        }
        self
    }
}

/// Generic paginated response envelope used by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: usize,
    #[serde(default)]
    pub has_more: bool,
}

/// Builds the absolute request URL: base + path + query string.
pub(crate) fn build_url(path: &str, query: &ListQuery) -> String {
    let mut url = format!("{API_BASE}{path}");
    let mut params = Vec::new();
    if let Some(search) = query.search.as_deref() {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    if let Some(offset) = query.offset {
        params.push(format!("offset={offset}"));
    }
    if let Some(limit) = query.limit {
        params.push(format!("limit={limit}"));
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

/// Maps a non-2xx response to `ApiError::Status`, preserving the body text.
pub(crate) fn status_error(status: u16, body: String) -> ApiError {
    let body = if body.trim().is_empty() {
        "(empty response body)".to_string()
    } else {
        body
    };
    ApiError::Status { status, body }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = status_error(status, body);
    web_sys::console::error_1(&format!("api: {err}").into());
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(format!("{e:?}")))
}

/// GET returning decoded JSON. A timestamp parameter defeats stale caches in
/// addition to the no-cache header.
pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let url = format!(
        "{url}{}_ts={}",
        if url.contains('?') { '&' } else { '?' },
        Date::now() as u64
    );
    let response = Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    decode(check(response).await?).await
}

/// POST with a JSON body, returning decoded JSON.
pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    decode(check(response).await?).await
}

/// PUT with a JSON body, returning decoded JSON.
pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = Request::put(url)
        .json(body)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    decode(check(response).await?).await
}

/// POST a multipart form (file uploads), returning decoded JSON.
pub(crate) async fn post_form<T: DeserializeOwned>(
    url: &str,
    form: FormData,
) -> Result<T, ApiError> {
    let request = Request::post(url)
        .body(form)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    decode(check(response).await?).await
}

/// DELETE, discarding any response body.
pub(crate) async fn delete(url: &str) -> Result<(), ApiError> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    check(response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_includes_response_text() {
        let err = status_error(422, "samputa 9 not found".to_string());
        let message = err.to_string();
        assert!(message.contains("422"));
        assert!(message.contains("samputa 9 not found"));
    }

    #[test]
    fn status_error_notes_an_empty_body() {
        let err = status_error(500, "  ".to_string());
        assert!(err.to_string().contains("empty response body"));
    }

    #[test]
    fn build_url_appends_only_set_params() {
        assert_eq!(
            build_url("/api/tatvapada/samputa", &ListQuery::default()),
            format!("{API_BASE}/api/tatvapada/samputa"),
        );
        let query = ListQuery {
            search: Some("ಷರೀಫ".into()),
            offset: Some(40),
            limit: Some(20),
        };
        let url = build_url("/admin/users", &query);
        assert!(url.starts_with(&format!("{API_BASE}/admin/users?search=")));
        assert!(url.contains("offset=40"));
        assert!(url.contains("limit=20"));
        assert!(!url.contains('ಷ'), "search term must be percent-encoded");
    }

    #[test]
    fn page_query_is_zero_based_offset() {
        let query = ListQuery::page(3, 25);
        assert_eq!(query.offset, Some(50));
        assert_eq!(query.limit, Some(25));
        // Page numbers below 1 clamp to the first page.
        assert_eq!(ListQuery::page(0, 25).offset, Some(0));
    }

    #[test]
    fn blank_search_terms_are_dropped() {
        let query = ListQuery::default().with_search("   ");
        assert_eq!(query.search, None);
        let query = ListQuery::default().with_search(" ಅಲ್ಲಮ ");
        assert_eq!(query.search.as_deref(), Some("ಅಲ್ಲಮ"));
    }
}
