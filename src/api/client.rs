// client.rs
use crate::api::ApiError;
use crate::config::UpstreamConfig;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Thin JSON-over-HTTP wrapper around one upstream base URL.
///
/// Every call is a single attempt: no retry, no backoff and no timeout.
pub struct ApiClient {
    client: Client,
    base_url: String,
    authorization: Option<String>,
}

impl ApiClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ApiError> {
        // reqwest's blocking client defaults to a 30s timeout; turn it off.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization: config.authorization.clone(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request::<Value>(Method::GET, path, None)
    }

    pub fn put<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, Some(body))
    }

    pub fn request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%method, %url, "upstream request");

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(auth) = &self.authorization {
            builder = builder.header(AUTHORIZATION, auth.as_str());
        }

        if let Some(body) = body {
            let payload =
                serde_json::to_vec(body).map_err(|e| ApiError::Transport(e.to_string()))?;
            builder = builder.body(payload);
        }

        let resp = builder.send().map_err(|e| {
            warn!(%method, %url, error = %e, "upstream request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = resp.status().as_u16();
        let text = if expects_body(status) {
            resp.text()
                .map_err(|e| ApiError::Transport(e.to_string()))?
        } else {
            String::new()
        };

        let result = interpret_response(status, &text);
        if let Err(err) = &result {
            warn!(%method, %url, status, error = %err, "upstream call unsuccessful");
        }
        result
    }
}

fn expects_body(status: u16) -> bool {
    (200..300).contains(&status) && status != 202
}

/// Map an upstream status + body to the wrapper's result.
///
/// 202 yields `{}` without looking at the body; any other non-2xx is an error
/// carrying the status code.
pub fn interpret_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if status == 202 {
        return Ok(Value::Object(Map::new()));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Transport(e.to_string()))
}
