use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// An API client for the storefront's resource API.
///
/// Each method performs exactly one HTTP round trip. There is no retry and
/// no timeout beyond what the transport applies.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}{path}", self.address.trim_end_matches('/'))
    }

    /// Send a request against the resource API and decode the JSON reply.
    ///
    /// The body, if any, is sent as JSON. Non-success responses become
    /// [`ClientError::APIError`] carrying the server's `message` when the
    /// error body has one.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;
        ok_body(response).await
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(%method, path, "api request");
        let mut request =
            self.inner_client.request(method, self.format_url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    pub(crate) async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn patch<B, T>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Deletes ignore the response body; only the status matters.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.send::<()>(Method::DELETE, path, None).await?;
        ok_empty(response).await
    }
}

/// Methods on the backend API that aren't tied to a collection.
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response =
            self.send::<()>(Method::GET, "/health_check", None).await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the extracted message.
    #[error("{1}")]
    APIError(StatusCode, String),
    /// A lookup succeeded but matched nothing.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pick the message to show for a failed response: the JSON `message` field
/// when present, otherwise a status-based fallback.
pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    match response.text().await {
        Ok(text) => ClientError::APIError(status, error_message(status, &text)),
        Err(e) => ClientError::Network(e),
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}
