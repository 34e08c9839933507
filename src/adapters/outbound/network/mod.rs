/// Network adapters for the traceability backend
mod http_client;

pub use http_client::HttpTraceabilityClient;
