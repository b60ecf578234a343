//! Generic HTTP client tools
//!
//! Shared request/response handling for every endpoint: sending, logging,
//! status classification and JSON parsing. Callers build the
//! `RequestBuilder` themselves.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::BackendError;
use crate::types::{Endpoint, ErrorBody};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// The request body is never logged; the response body is truncated.
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))`
    /// * `Err(BackendError::Network)` - the request could not be sent or the body could not be read
    pub async fn execute_request(
        request_builder: RequestBuilder,
        endpoint: Endpoint,
    ) -> Result<(u16, String), BackendError> {
        log::debug!("[backend] POST {endpoint}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| BackendError::Network {
                endpoint,
                detail: e.to_string(),
            })?;

        let status_code = response.status().as_u16();
        log::debug!("[backend] {endpoint} Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| BackendError::Network {
                endpoint,
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[backend] {endpoint} Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(BackendError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str, endpoint: Endpoint) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[backend] {endpoint} JSON parse failed: {e}");
            log::error!(
                "[backend] {endpoint} Raw response: {}",
                truncate_for_log(response_text)
            );
            BackendError::Parse {
                endpoint,
                detail: e.to_string(),
            }
        })
    }

    /// Turn a status code and body into the endpoint's success type or an error
    ///
    /// - 2xx: the body must parse as `T`
    /// - other status with a JSON body: [`BackendError::Service`] carrying its `error` field
    /// - other status with a non-JSON body: [`BackendError::Parse`]
    pub fn parse_response<T>(
        status_code: u16,
        response_text: &str,
        endpoint: Endpoint,
    ) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        if (200..300).contains(&status_code) {
            return Self::parse_json(response_text, endpoint);
        }

        match serde_json::from_str::<ErrorBody>(response_text) {
            Ok(body) => {
                let message = body
                    .error
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty());
                log::warn!(
                    "[backend] {endpoint} returned HTTP {status_code}: {}",
                    message.as_deref().unwrap_or("<no error message>")
                );
                Err(BackendError::Service {
                    endpoint,
                    status: status_code,
                    message,
                })
            }
            Err(e) => {
                log::error!(
                    "[backend] {endpoint} returned HTTP {status_code} with a non-JSON body: {}",
                    truncate_for_log(response_text)
                );
                Err(BackendError::Parse {
                    endpoint,
                    detail: format!("HTTP {status_code}: {e}"),
                })
            }
        }
    }
}
