// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the [`CountryLookup`] port.

use super::{CountryLookup, CountryRecord, FetchError, FlagImage};
use crate::config::{self, ApiConfig};
use crate::domain::CountryCode;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("IcedAtlas/", env!("CARGO_PKG_VERSION"));

/// Fetches country records from `{base_url}/api/countries/{code}`.
#[derive(Debug, Clone)]
pub struct HttpCountryLookup {
    client: reqwest::Client,
    base_url: String,
    check_status: bool,
}

impl HttpCountryLookup {
    /// Creates a lookup against `base_url`.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        check_status: bool,
    ) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            check_status,
        })
    }

    /// Creates a lookup from the `[api]` settings section.
    pub fn from_config(api: &ApiConfig) -> Result<Self, FetchError> {
        Self::new(
            api.base_url
                .clone()
                .unwrap_or_else(|| config::DEFAULT_API_BASE_URL.to_string()),
            api.timeout_secs.map(Duration::from_secs),
            api.check_status.unwrap_or(false),
        )
    }

    /// Returns the record URL for `code`.
    #[must_use]
    pub fn country_url(&self, code: &CountryCode) -> String {
        format!("{}/api/countries/{}", self.base_url, code)
    }
}

impl CountryLookup for HttpCountryLookup {
    fn lookup(&self, code: &CountryCode) -> BoxFuture<'static, Result<CountryRecord, FetchError>> {
        let client = self.client.clone();
        let url = self.country_url(code);
        let check_status = self.check_status;

        async move {
            tracing::debug!(%url, "fetching country record");
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            // Error statuses with a JSON body are read like any other answer
            // unless status checking is enabled.
            let status = response.status();
            if check_status && !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            decode_record(&body)
        }
        .boxed()
    }

    fn flag_image(&self, url: &str) -> BoxFuture<'static, Result<FlagImage, FetchError>> {
        let client = self.client.clone();
        let url = url.to_string();

        async move {
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            if !response.status().is_success() {
                return Err(FetchError::Status(response.status().as_u16()));
            }

            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = response
                .bytes()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            Ok(FlagImage::classify(
                &url,
                content_type.as_deref(),
                bytes.to_vec(),
            ))
        }
        .boxed()
    }
}

/// Decodes a response body into a [`CountryRecord`].
pub fn decode_record(body: &[u8]) -> Result<CountryRecord, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_url_joins_base_and_code() {
        let lookup = HttpCountryLookup::new("https://countries.test/", None, false)
            .expect("client builds");
        assert_eq!(
            lookup.country_url(&CountryCode::new("DK")),
            "https://countries.test/api/countries/DK"
        );
    }

    #[test]
    fn from_config_uses_default_base_url() {
        let lookup = HttpCountryLookup::from_config(&ApiConfig::default()).expect("client builds");
        assert_eq!(
            lookup.country_url(&CountryCode::new("SE")),
            format!("{}/api/countries/SE", config::DEFAULT_API_BASE_URL)
        );
        assert!(!lookup.check_status);
    }

    #[test]
    fn decode_record_reports_malformed_json() {
        let err = decode_record(b"<html>502</html>").expect_err("html is not json");
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn decode_record_accepts_error_body_shape() {
        // A failing status with a JSON body still decodes; the panel then
        // fails on the first missing field.
        let record = decode_record(br#"{"message": "Not found"}"#).expect("json decodes");
        assert!(record.capital.is_none());
    }

    #[test]
    fn decode_record_tolerates_mistyped_fields() {
        let record = decode_record(
            br#"{"name": {"common": "Italy"}, "capital": "Rome", "borders": ["FRA"]}"#,
        )
        .expect("mistyped field does not reject the body");
        assert_eq!(record.common_name(), Some("Italy"));
        assert!(record.capital.is_none());
        assert_eq!(record.borders, Some(vec!["FRA".to_string()]));
    }
}
