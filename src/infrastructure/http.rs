// SPDX-License-Identifier: MPL-2.0
//! JSON API client for the Pictury backend.
//!
//! One [`ApiClient`] implements the account, gallery and fetch ports. The
//! session lives in the client's cookie store, so every clone of the client
//! shares it.
//!
//! Endpoints, relative to the configured API URL:
//!
//! | Action              | Request                        |
//! |---------------------|--------------------------------|
//! | sign in / up / out  | `POST auth/sign-in` ...        |
//! | current user        | `GET auth/user`                |
//! | gallery listing     | `GET images`                   |
//! | liked ids           | `GET images/liked`             |
//! | like / unlike       | `PUT` / `DELETE images/{id}/like` |
//! | download location   | `POST images/{id}/download`    |

use crate::application::port::{ActionFuture, AuthActions, BinaryFetcher, ImageActions};
use crate::config::ServerConfig;
use crate::domain::auth::{Credentials, User};
use crate::domain::gallery::{ImageId, ImageRecord};
use crate::error::{ActionError, Error, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const USER_AGENT: &str = concat!("Pictury/", env!("CARGO_PKG_VERSION"));

/// Body of a failed request. Backends disagree on the field name.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    #[serde(default)]
    user: Option<User>,
}

#[derive(Debug, Deserialize)]
struct DownloadLocation {
    url: String,
}

/// HTTP adapter for every remote port.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    /// Builds a client for `server.api_url` with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the API URL does not parse and
    /// [`Error::Http`] when the HTTP client cannot be initialised.
    pub fn new(server: &ServerConfig) -> Result<Self> {
        let base = parse_base_url(&server.api_url)?;
        let client = Client::builder()
            .cookie_store(true)
            .timeout(server.request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, base })
    }

    /// The API root every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> std::result::Result<Url, ActionError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                tracing::error!("API URL {} cannot carry a path", self.base);
                ActionError::unknown()
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> std::result::Result<RequestBuilder, ActionError> {
        let url = self.endpoint(segments)?;
        Ok(self.client.request(method, url))
    }
}

/// Normalises the API root so relative endpoints land under it.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).map_err(|err| Error::Config(format!("invalid api_url {raw:?}: {err}")))
}

/// Sends the request and fails with the backend's message on a non-success
/// status.
async fn send(request: RequestBuilder) -> std::result::Result<Response, ActionError> {
    let response = request.send().await.map_err(|err| {
        tracing::warn!("request failed: {err}");
        ActionError::from(err)
    })?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    let error = error_from_body(status, &body);
    tracing::warn!(%status, %url, "backend refused request: {error}");
    Err(error)
}

async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> std::result::Result<T, ActionError> {
    let response = send(request).await?;
    response.json::<T>().await.map_err(|err| {
        tracing::warn!("unexpected response body: {err}");
        ActionError::unknown()
    })
}

async fn send_empty(request: RequestBuilder) -> std::result::Result<(), ActionError> {
    send(request).await.map(|_| ())
}

/// Extracts the human-readable message of a failed request.
///
/// Prefers `message`, then `error`, then the canonical status text.
fn error_from_body(status: StatusCode, body: &str) -> ActionError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .filter(|m| !m.trim().is_empty())
        .or(parsed.error.filter(|m| !m.trim().is_empty()))
        .or_else(|| status.canonical_reason().map(str::to_string));

    message.map_or_else(ActionError::unknown, ActionError::new)
}

impl AuthActions for ApiClient {
    fn sign_in(&self, credentials: Credentials) -> ActionFuture<()> {
        let request = self.request(Method::POST, &["auth", "sign-in"]);
        Box::pin(async move { send_empty(request?.json(&credentials)).await })
    }

    fn sign_up(&self, credentials: Credentials) -> ActionFuture<()> {
        let request = self.request(Method::POST, &["auth", "sign-up"]);
        Box::pin(async move { send_empty(request?.json(&credentials)).await })
    }

    fn sign_out(&self) -> ActionFuture<()> {
        let request = self.request(Method::POST, &["auth", "sign-out"]);
        Box::pin(async move { send_empty(request?).await })
    }

    fn current_user(&self) -> ActionFuture<Option<User>> {
        let request = self.request(Method::GET, &["auth", "user"]);
        Box::pin(async move {
            let response = request?.send().await?;
            if response.status() == StatusCode::UNAUTHORIZED {
                return Ok(None);
            }
            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(error_from_body(status, &body));
            }
            let envelope: UserEnvelope = response.json().await?;
            Ok(envelope.user)
        })
    }
}

impl ImageActions for ApiClient {
    fn list_images(&self) -> ActionFuture<Vec<ImageRecord>> {
        let request = self.request(Method::GET, &["images"]);
        Box::pin(async move { send_json(request?).await })
    }

    fn liked_ids(&self) -> ActionFuture<Vec<ImageId>> {
        let request = self.request(Method::GET, &["images", "liked"]);
        Box::pin(async move {
            let response = request?.send().await?;
            // Anonymous sessions have no likes.
            if response.status() == StatusCode::UNAUTHORIZED {
                return Ok(Vec::new());
            }
            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(error_from_body(status, &body));
            }
            Ok(response.json().await?)
        })
    }

    fn set_liked(&self, id: ImageId, liked: bool) -> ActionFuture<()> {
        let method = if liked { Method::PUT } else { Method::DELETE };
        let request = self.request(method, &["images", id.as_str(), "like"]);
        Box::pin(async move { send_empty(request?).await })
    }

    fn download_reference(&self, record: &ImageRecord) -> ActionFuture<String> {
        let request = self
            .request(Method::POST, &["images", record.id.as_str(), "download"])
            .map(|request| request.json(record));
        Box::pin(async move {
            let location: DownloadLocation = send_json(request?).await?;
            Ok(location.url)
        })
    }
}

impl BinaryFetcher for ApiClient {
    fn fetch(&self, url: String) -> ActionFuture<Vec<u8>> {
        // Signed locations are absolute; anything else is relative to the API.
        let target = Url::parse(&url).or_else(|_| self.base.join(&url));
        let client = self.client.clone();
        Box::pin(async move {
            let target = target.map_err(|err| {
                tracing::warn!("invalid fetch location {url:?}: {err}");
                ActionError::unknown()
            })?;
            let response = send(client.get(target)).await?;
            let bytes = response.bytes().await?;
            Ok(bytes.to_vec())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_url: &str) -> ApiClient {
        let server = ServerConfig {
            api_url: api_url.to_string(),
            ..ServerConfig::default()
        };
        ApiClient::new(&server).expect("client builds")
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let api = client("https://pictury.example/api");
        assert_eq!(api.base_url().as_str(), "https://pictury.example/api/");
    }

    #[test]
    fn endpoints_are_nested_under_base_path() {
        let api = client("https://pictury.example/api/");
        let url = api.endpoint(&["images", "liked"]).expect("endpoint");
        assert_eq!(url.as_str(), "https://pictury.example/api/images/liked");
    }

    #[test]
    fn image_ids_are_percent_encoded() {
        let api = client("https://pictury.example/api/");
        let url = api
            .endpoint(&["images", "a b/c", "like"])
            .expect("endpoint");
        assert_eq!(
            url.as_str(),
            "https://pictury.example/api/images/a%20b%2Fc/like"
        );
    }

    #[test]
    fn invalid_api_url_is_a_config_error() {
        let server = ServerConfig {
            api_url: "not a url".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(ApiClient::new(&server), Err(Error::Config(_))));
    }

    #[test]
    fn error_message_prefers_message_field() {
        let error = error_from_body(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Invalid credentials","error":"invalid_grant"}"#,
        );
        assert_eq!(error.message(), Some("Invalid credentials"));
    }

    #[test]
    fn error_message_falls_back_to_error_field() {
        let error = error_from_body(StatusCode::FORBIDDEN, r#"{"error":"Email not confirmed"}"#);
        assert_eq!(error.message(), Some("Email not confirmed"));
    }

    #[test]
    fn error_message_falls_back_to_status_text() {
        let error = error_from_body(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(error.message(), Some("Internal Server Error"));
    }

    #[test]
    fn blank_message_is_ignored() {
        let error = error_from_body(StatusCode::NOT_FOUND, r#"{"message":"  "}"#);
        assert_eq!(error.message(), Some("Not Found"));
    }
}
