//! Client side of the certificate claim endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::issuance::ClaimRequest;
use super::types::AnyCertificate;
use super::CertificateError;

/// Path of the claim endpoint, relative to the API base
pub const CLAIM_PATH: &str = "/api/course/certificate";

/// Claims certificates on behalf of the signed-in student
#[async_trait]
pub trait CertificateApi: Send + Sync {
    async fn claim(&self, request: &ClaimRequest) -> Result<AnyCertificate, CertificateError>;
}

#[derive(Deserialize)]
struct ClaimBody {
    certificate: AnyCertificate,
}

/// [`CertificateApi`] over HTTP
///
/// # Example
///
/// ```rust,no_run
/// use design_engineer::certificate::{CertificateApi, ClaimRequest, HttpCertificateApi, Platform};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api = HttpCertificateApi::new("https://designengineer.xyz", None, None)?;
/// let request = ClaimRequest { platform: Platform::Web, track: None };
/// let certificate = api.claim(&request).await?;
/// println!("{}", certificate.slug());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpCertificateApi {
    base_url: String,
    client: Client,
}

impl HttpCertificateApi {
    pub fn new(
        base_url: impl Into<String>,
        session_token: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self, CertificateError> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = session_token {
            let value = header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| CertificateError::Unauthorized)?;
            headers.insert(header::AUTHORIZATION, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn claim_url(&self) -> String {
        format!("{}{}", self.base_url, CLAIM_PATH)
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<AnyCertificate, CertificateError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CertificateError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CertificateError::Server {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        let body: ClaimBody = response.json().await?;
        Ok(body.certificate)
    }
}

/// The `error` field of a JSON error body, else the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl CertificateApi for HttpCertificateApi {
    async fn claim(&self, request: &ClaimRequest) -> Result<AnyCertificate, CertificateError> {
        let url = self.claim_url();
        tracing::debug!(%url, platform = %request.platform, track = ?request.track, "claiming certificate");
        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::types::{Platform, Track};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_claim_url() {
        let api = HttpCertificateApi::new("https://designengineer.xyz/", None, None).unwrap();
        assert_eq!(api.claim_url(), "https://designengineer.xyz/api/course/certificate");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"error":"Invalid platform"}"#), "Invalid platform");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_request_body() {
        let master = ClaimRequest {
            platform: Platform::Ios,
            track: None,
        };
        assert_eq!(serde_json::to_string(&master).unwrap(), r#"{"platform":"ios"}"#);
        let track = ClaimRequest {
            platform: Platform::Web,
            track: Some(Track::Engineering),
        };
        assert_eq!(
            serde_json::to_string(&track).unwrap(),
            r#"{"platform":"web","track":"engineering"}"#
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let api = HttpCertificateApi::new("http://127.0.0.1:9", None, Some(Duration::from_secs(2))).unwrap();
        let request = ClaimRequest {
            platform: Platform::Web,
            track: None,
        };
        assert!(matches!(api.claim(&request).await, Err(CertificateError::Http(_))));
    }
}
