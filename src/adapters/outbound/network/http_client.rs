use crate::ports::outbound::{ApiError, ApiResult, TraceabilityApi};
use crate::shared::error::TraceConsoleError;
use crate::shared::Result;
use crate::traceability::domain::{RandomSerials, SerialNumber, SerialTraceResult, SupplierQualityRow};
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

const HEALTH_PATH: &str = "/api/health";
const SUPPLIER_QUALITY_PATH: &str = "/api/suppliers/quality";
const RANDOM_SERIALS_PATH: &str = "/api/serial/random";
const ADMIN_CLEAR_PATH: &str = "/api/admin/clear";
const ADMIN_SEED_PATH: &str = "/api/admin/seed";

/// HttpTraceabilityClient adapter for the traceability backend
///
/// Implements the TraceabilityApi port over reqwest's async client.
///
/// # Behaviour
/// - No retries: one request per call
/// - No client-side timeout; the transport default applies
/// - No authentication headers and no request bodies
pub struct HttpTraceabilityClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTraceabilityClient {
    /// Creates a client for an already normalised base URL (no trailing slash)
    pub fn new(base_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("supply-trace/{}", version);
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| TraceConsoleError::HttpClientInit {
                details: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Path of the trace endpoint with the serial percent-encoded
    ///
    /// Everything but ASCII alphanumerics and `-_.~` is escaped, including
    /// `!'()*`. The backend decodes the escaped and bare forms to the same serial.
    fn trace_path(serial: &SerialNumber) -> String {
        format!("/api/serial/{}/trace", urlencoding::encode(serial.as_str()))
    }

    /// Sends one request and returns the body of a 2xx response
    async fn send(&self, method: Method, path: &str) -> ApiResult<Vec<u8>> {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "sending request");

        let response = self
            .client
            .request(method.clone(), &url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                details: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!(%method, %url, status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| ApiError::Network {
            details: e.to_string(),
        })?;
        Ok(body.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.send(Method::GET, path).await?;
        decode_body(&body)
    }

    async fn post_opaque(&self, path: &str) -> ApiResult<Value> {
        let body = self.send(Method::POST, path).await?;
        decode_opaque(&body)
    }
}

/// Decodes a JSON body into `T`
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode {
        details: e.to_string(),
    })
}

/// Decodes an opaque admin response; an empty body is `null`
fn decode_opaque(body: &[u8]) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    decode_body(body)
}

/// Supplier report rows; a JSON body that is not an array reads as no rows
fn supplier_rows_from(value: Value) -> ApiResult<Vec<SupplierQualityRow>> {
    match value {
        Value::Array(_) => serde_json::from_value(value).map_err(|e| ApiError::Decode {
            details: e.to_string(),
        }),
        other => {
            tracing::debug!(body = %other, "supplier quality body is not an array");
            Ok(Vec::new())
        }
    }
}

#[async_trait]
impl TraceabilityApi for HttpTraceabilityClient {
    async fn probe_health(&self) -> ApiResult<Value> {
        self.get_json(HEALTH_PATH).await
    }

    async fn fetch_supplier_quality(&self) -> ApiResult<Vec<SupplierQualityRow>> {
        let value: Value = self.get_json(SUPPLIER_QUALITY_PATH).await?;
        supplier_rows_from(value)
    }

    async fn fetch_serial_trace(&self, serial: &SerialNumber) -> ApiResult<SerialTraceResult> {
        let body = match self.send(Method::GET, &Self::trace_path(serial)).await {
            Err(ApiError::Http { status: 404 }) => return Err(ApiError::NotFound),
            other => other?,
        };
        decode_body(&body)
    }

    async fn fetch_random_serials(&self) -> ApiResult<Vec<String>> {
        let body: RandomSerials = self.get_json(RANDOM_SERIALS_PATH).await?;
        Ok(body.into_serials())
    }

    async fn clear_database(&self) -> ApiResult<Value> {
        self.post_opaque(ADMIN_CLEAR_PATH).await
    }

    async fn seed_database(&self) -> ApiResult<Value> {
        self.post_opaque(ADMIN_SEED_PATH).await
    }
}
