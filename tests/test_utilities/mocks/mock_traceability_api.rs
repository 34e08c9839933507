use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use supply_trace::prelude::*;
use tokio::sync::Notify;

/// Mock TraceabilityApi for testing
///
/// Every endpoint returns a configurable canned result and records the call.
/// Clones share the call log, so a test can keep one clone after handing
/// the other to a dashboard.
#[derive(Clone)]
pub struct MockTraceabilityApi {
    health: ApiResult<Value>,
    suppliers: ApiResult<Vec<SupplierQualityRow>>,
    trace: ApiResult<SerialTraceResult>,
    random: ApiResult<Vec<String>>,
    clear: ApiResult<Value>,
    seed: ApiResult<Value>,
    gate: Option<Arc<Notify>>,
    calls: Arc<Mutex<Vec<String>>>,
    traced: Arc<Mutex<Vec<String>>>,
}

impl MockTraceabilityApi {
    pub fn new() -> Self {
        Self {
            health: Ok(json!({ "ok": true })),
            suppliers: Ok(vec![]),
            trace: Err(ApiError::NotFound),
            random: Ok(vec![]),
            clear: Ok(json!({ "ok": true })),
            seed: Ok(json!({ "ok": true })),
            gate: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            traced: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_health(mut self, result: ApiResult<Value>) -> Self {
        self.health = result;
        self
    }

    pub fn with_suppliers(mut self, result: ApiResult<Vec<SupplierQualityRow>>) -> Self {
        self.suppliers = result;
        self
    }

    pub fn with_trace(mut self, result: ApiResult<SerialTraceResult>) -> Self {
        self.trace = result;
        self
    }

    pub fn with_random(mut self, serials: &[&str]) -> Self {
        self.random = Ok(serials.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_random_error(mut self, error: ApiError) -> Self {
        self.random = Err(error);
        self
    }

    pub fn with_clear(mut self, result: ApiResult<Value>) -> Self {
        self.clear = result;
        self
    }

    pub fn with_seed(mut self, result: ApiResult<Value>) -> Self {
        self.seed = result;
        self
    }

    /// Every call waits for `gate` to be notified before answering
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == endpoint)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Serials passed to the trace endpoint, in call order
    pub fn traced_serials(&self) -> Vec<String> {
        self.traced.lock().unwrap().clone()
    }

    async fn record(&self, endpoint: &str) {
        self.calls.lock().unwrap().push(endpoint.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

impl Default for MockTraceabilityApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TraceabilityApi for MockTraceabilityApi {
    async fn probe_health(&self) -> ApiResult<Value> {
        self.record("health").await;
        self.health.clone()
    }

    async fn fetch_supplier_quality(&self) -> ApiResult<Vec<SupplierQualityRow>> {
        self.record("suppliers").await;
        self.suppliers.clone()
    }

    async fn fetch_serial_trace(&self, serial: &SerialNumber) -> ApiResult<SerialTraceResult> {
        self.traced.lock().unwrap().push(serial.as_str().to_string());
        self.record("trace").await;
        self.trace.clone()
    }

    async fn fetch_random_serials(&self) -> ApiResult<Vec<String>> {
        self.record("random").await;
        self.random.clone()
    }

    async fn clear_database(&self) -> ApiResult<Value> {
        self.record("clear").await;
        self.clear.clone()
    }

    async fn seed_database(&self) -> ApiResult<Value> {
        self.record("seed").await;
        self.seed.clone()
    }
}
