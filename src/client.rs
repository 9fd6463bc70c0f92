use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, header};
use tokio_util::sync::CancellationToken;

use crate::client_logger::ClientLogger;
use crate::error::{Error, Result};
use crate::observability::{
    CLIENT_INPUT_TOKENS, CLIENT_MISSING_TEXT, CLIENT_OUTPUT_TOKENS, CLIENT_REQUEST_DURATION,
    CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS,
};
use crate::types::{Message, MessageCreateParams, MessageParam, Model, ReplyText};

/// Base URL of the Anthropic API.
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/";
/// Value of the `anthropic-version` header.
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";
/// Output token budget used unless configured otherwise.
pub const DEFAULT_MAX_TOKENS: u32 = 800;
/// Substituted when a successful reply carries no text.
pub const NO_TEXT_PLACEHOLDER: &str = "(no text returned)";

/// Produces the next assistant turn for a conversation.
///
/// Implementations never fail: every error is rendered as text so the caller
/// can record it in the conversation like any other reply.
#[async_trait::async_trait]
pub trait Completion: Send + Sync {
    /// Send the whole conversation and return the reply text.
    async fn complete(&self, transcript: &[MessageParam], cancel: &CancellationToken) -> String;
}

/// Client for the Anthropic messages endpoint.
#[derive(Clone)]
pub struct CompletionClient {
    client: ReqwestClient,
    headers: HeaderMap,
    base_url: String,
    model: Model,
    max_tokens: u32,
    logger: Option<Arc<dyn ClientLogger>>,
}

impl CompletionClient {
    /// Create a new client that authenticates with `api_key`.
    ///
    /// No request timeout is configured; use the cancellation token passed to
    /// [`Completion::complete`] to bound a call.
    pub fn new(api_key: impl AsRef<str>) -> Result<Self> {
        let client = ReqwestClient::builder().build().map_err(|e| {
            Error::http_client(
                format!("Failed to build HTTP client: {}", e),
                Some(Box::new(e)),
            )
        })?;
        Ok(Self {
            client,
            headers: default_headers(api_key.as_ref())?,
            base_url: DEFAULT_API_URL.to_string(),
            model: Model::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            logger: None,
        })
    }

    /// Point the client at a different API root.  A trailing slash is added if missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Sets the model to request.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the output token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Installs a logger that observes every exchange.
    pub fn with_logger(mut self, logger: Arc<dyn ClientLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The model this client requests.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The output token budget this client requests.
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Build the request body for a conversation.
    pub fn params_for(&self, transcript: &[MessageParam]) -> MessageCreateParams {
        MessageCreateParams::new(self.model.clone(), self.max_tokens, transcript.to_vec())
    }

    /// Send a request and decode the reply.
    ///
    /// A non-success status becomes [`Error::Api`] carrying the raw body; a
    /// body that does not decode becomes [`Error::Serialization`].
    pub async fn send(&self, params: &MessageCreateParams) -> Result<Message> {
        if let Some(logger) = &self.logger {
            logger.log_request(params);
        }
        CLIENT_REQUESTS.click();
        let start = Instant::now();
        let result = self.exchange(params).await;
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());
        match &result {
            Ok(message) => {
                if let Some(usage) = message.usage {
                    CLIENT_INPUT_TOKENS.count(usage.input_tokens);
                    CLIENT_OUTPUT_TOKENS.count(usage.output_tokens);
                }
                if let Some(logger) = &self.logger {
                    logger.log_response(message);
                }
            }
            Err(err) => {
                CLIENT_REQUEST_ERRORS.click();
                if let Some(logger) = &self.logger {
                    logger.log_error(err);
                }
            }
        }
        result
    }

    async fn exchange(&self, params: &MessageCreateParams) -> Result<Message> {
        let url = format!("{}messages", self.base_url);
        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::connection(e.to_string(), Some(Box::new(e)))
                } else {
                    Error::http_client(e.to_string(), Some(Box::new(e)))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::http_client(
                format!("Failed to read response: {}", e),
                Some(Box::new(e)),
            )
        })?;

        if !status.is_success() {
            return Err(Error::api(
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                body,
            ));
        }

        serde_json::from_str::<Message>(&body).map_err(|e| {
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        })
    }
}

#[async_trait::async_trait]
impl Completion for CompletionClient {
    async fn complete(&self, transcript: &[MessageParam], cancel: &CancellationToken) -> String {
        let params = self.params_for(transcript);
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::aborted("cancelled by user")),
            result = self.send(&params) => result,
        };
        reply_to_text(result)
    }
}

/// Render the outcome of an exchange as the text of the assistant turn.
pub fn reply_to_text(result: Result<Message>) -> String {
    match result {
        Ok(message) => match message.reply_text() {
            ReplyText::Text(text) => text.to_string(),
            ReplyText::Missing => {
                CLIENT_MISSING_TEXT.click();
                NO_TEXT_PLACEHOLDER.to_string()
            }
        },
        Err(err) if err.is_api() => err.to_string(),
        Err(err) if err.is_serialization() => {
            CLIENT_MISSING_TEXT.click();
            NO_TEXT_PLACEHOLDER.to_string()
        }
        Err(err) => format!("[ERROR] {err}"),
    }
}

fn default_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    let key = HeaderValue::from_str(api_key).map_err(|e| {
        Error::configuration_missing(format!("API key is not a valid header value: {e}"))
    })?;
    headers.insert("x-api-key", key);
    headers.insert(
        "anthropic-version",
        HeaderValue::from_static(ANTHROPIC_API_VERSION),
    );
    Ok(headers)
}
