//! Blocking HTTP implementation of [`MailApi`]

use super::MailApi;
use super::params::{
    CreateInboxParams, ForwardMessageParams, ListInboxesParams, ListThreadsParams,
    ReplyMessageParams, SendMessageParams, UpdateMessageParams,
};
use crate::config::ApiConfig;
use crate::error::ApiError;
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configured handle to the AgentMail REST API
///
/// Holds the resolved API key; can only be built once a key exists.
pub struct HttpClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Build the API handle from resolved configuration.
///
/// Fails with [`ApiError::MissingApiKey`] before touching the network when
/// no key was resolved.
pub fn connect(config: &ApiConfig) -> Result<HttpClient, ApiError> {
    HttpClient::new(config)
}

impl HttpClient {
    /// Create a client from resolved configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let api_key = config.require_api_key()?.to_string();

        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| ApiError::Config(format!("invalid base URL {:?}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "base URL {:?} cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("agentmail-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Append percent-encoded path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        debug!("{method} {}", url.path());
        self.client
            .request(method, url)
            .bearer_auth(&self.api_key)
    }

    /// Send the request and decode the JSON body.
    ///
    /// Empty success bodies decode to `Value::Null`.
    fn execute(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send()?;
        let status = response.status();
        debug!("response status {status}");

        if !status.is_success() {
            // An unreadable error body only loses the details
            let text = response.text().unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &text));
        }
        let text = response.text()?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|source| ApiError::Decode { source })
    }
}

impl MailApi for HttpClient {
    fn list_inboxes(&self, params: &ListInboxesParams) -> Result<Value, ApiError> {
        let request = self
            .request(Method::GET, &["inboxes"])
            .query(&params.query_pairs());
        self.execute(request)
    }

    fn get_inbox(&self, inbox_id: &str) -> Result<Value, ApiError> {
        self.execute(self.request(Method::GET, &["inboxes", inbox_id]))
    }

    fn create_inbox(&self, params: &CreateInboxParams) -> Result<Value, ApiError> {
        let request = self.request(Method::POST, &["inboxes"]).json(params);
        self.execute(request)
    }

    fn delete_inbox(&self, inbox_id: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, &["inboxes", inbox_id]))?;
        Ok(())
    }

    fn list_threads(&self, inbox_id: &str, params: &ListThreadsParams) -> Result<Value, ApiError> {
        let request = self
            .request(Method::GET, &["inboxes", inbox_id, "threads"])
            .query(&params.query_pairs());
        self.execute(request)
    }

    fn get_thread(&self, inbox_id: &str, thread_id: &str) -> Result<Value, ApiError> {
        self.execute(self.request(Method::GET, &["inboxes", inbox_id, "threads", thread_id]))
    }

    fn send_message(&self, inbox_id: &str, params: &SendMessageParams) -> Result<Value, ApiError> {
        let request = self
            .request(Method::POST, &["inboxes", inbox_id, "messages", "send"])
            .json(params);
        self.execute(request)
    }

    fn reply_to_message(
        &self,
        inbox_id: &str,
        message_id: &str,
        params: &ReplyMessageParams,
    ) -> Result<Value, ApiError> {
        let request = self
            .request(Method::POST, &["inboxes", inbox_id, "messages", message_id, "reply"])
            .json(params);
        self.execute(request)
    }

    fn forward_message(
        &self,
        inbox_id: &str,
        message_id: &str,
        params: &ForwardMessageParams,
    ) -> Result<Value, ApiError> {
        let request = self
            .request(Method::POST, &["inboxes", inbox_id, "messages", message_id, "forward"])
            .json(params);
        self.execute(request)
    }

    fn update_message(
        &self,
        inbox_id: &str,
        message_id: &str,
        params: &UpdateMessageParams,
    ) -> Result<Value, ApiError> {
        let request = self
            .request(Method::PATCH, &["inboxes", inbox_id, "messages", message_id])
            .json(params);
        self.execute(request)
    }

    fn get_attachment(&self, thread_id: &str, attachment_id: &str) -> Result<Value, ApiError> {
        self.execute(self.request(
            Method::GET,
            &["threads", thread_id, "attachments", attachment_id],
        ))
    }
}
