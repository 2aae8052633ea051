//! HTTP client for the webmail API.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::types::{CreateResponse, Email, EmailId, EmailUpdate, ErrorResponse, Mailbox, NewEmail};

/// Client for the four webmail endpoints.
///
/// Every call is a single attempt; failures are returned to the caller
/// and never retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Server root, always ending in `/`.
    base_url: Url,
    /// HTTP client.
    http_client: Client,
}

impl ApiClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let mut base_url = Url::parse(base_url.as_ref())?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            http_client: Client::new(),
        })
    }

    /// Returns the server root this client talks to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Lists the emails of a mailbox, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// body that is not a JSON array of emails.
    pub async fn list_emails(&self, mailbox: Mailbox) -> Result<Vec<Email>> {
        let url = self.endpoint(&format!("emails/{mailbox}"))?;
        debug!(%url, "GET mailbox");

        let response = self.http_client.get(url).send().await?;
        decode(response).await
    }

    /// Fetches the full content of one email.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status (e.g. the
    /// email does not exist), or a malformed body.
    pub async fn get_email(&self, id: EmailId) -> Result<Email> {
        let url = self.endpoint(&format!("emails/{id}"))?;
        debug!(%url, "GET email");

        let response = self.http_client.get(url).send().await?;
        decode(response).await
    }

    /// Merges a partial update into a stored email.
    ///
    /// The response body is only inspected for an `error` field when the
    /// status is not a success.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    pub async fn update_email(&self, id: EmailId, update: &EmailUpdate) -> Result<()> {
        let url = self.endpoint(&format!("emails/{id}"))?;
        debug!(%url, ?update, "PUT email");

        let response = self.http_client.put(url).json(update).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await?;
        Err(server_error(status, &body))
    }

    /// Submits a new outgoing email.
    ///
    /// A rejection that the server explains in an `error` field is returned
    /// as `Ok` with [`CreateResponse::error`] set, whatever the status code.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, or when the response is
    /// neither a success nor a decodable error body.
    pub async fn create_email(&self, email: &NewEmail) -> Result<CreateResponse> {
        let url = self.endpoint("emails")?;
        debug!(%url, recipients = %email.recipients, "POST email");

        let response = self.http_client.post(url).json(email).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<CreateResponse>(&body) {
            Ok(created) if status.is_success() || created.error.is_some() => Ok(created),
            Ok(_) => Err(server_error(status, &body)),
            Err(_) if !status.is_success() => Err(server_error(status, &body)),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolves a path relative to the server root.
    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

/// Decodes a JSON body, turning non-success statuses into [`Error::Server`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(server_error(status, &body));
    }

    serde_json::from_str(&body).map_err(Into::into)
}

/// Builds a server error, preferring the body's `error` field.
fn server_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorResponse>(body).map_or_else(
        |_| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        },
        |e| e.error,
    );
    Error::server(status.as_u16(), message)
}
