//! supply-trace - console for the supply-chain traceability demo backend
//!
//! This library provides a typed client for the traceability REST API and a
//! small dashboard of view components (health, supplier quality, serial trace
//! and optional admin controls), following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`traceability`): Backend payload types and presentation rules
//! - **Application Layer** (`application`): Components, view handles and the dashboard
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types and exit codes
//!
//! # Example
//!
//! ```no_run
//! use supply_trace::prelude::*;
//!
//! # async fn demo() -> Result<()> {
//! let api = HttpTraceabilityClient::new("http://localhost:8000")?;
//! let dashboard = Dashboard::new(
//!     "http://localhost:8000",
//!     api,
//!     TracingDiagnosticReporter::new(),
//!     StdinConfirmationPrompt::new(),
//!     false,
//! );
//!
//! dashboard.on_load().await;
//! dashboard.suppliers().load().await;
//! dashboard.trace().trace("SN-00042").await;
//!
//! let output = TextRenderer::new(false).render(&dashboard.snapshot())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod traceability;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::{ShellCommand, ShellSession};
    pub use crate::adapters::outbound::console::{
        AssumeYes, StdinConfirmationPrompt, StdoutPresenter, TracingDiagnosticReporter,
    };
    pub use crate::adapters::outbound::network::HttpTraceabilityClient;
    pub use crate::adapters::outbound::renderers::{JsonRenderer, TextRenderer};
    pub use crate::application::components::{
        ActionOutcome, AdminControls, HealthIndicator, SerialTraceView, SupplierQualityView,
    };
    pub use crate::application::dashboard::{Dashboard, DashboardHandles};
    pub use crate::application::dto::RenderFormat;
    pub use crate::application::view::{
        AffectedSerialsView, DashboardSnapshot, Placeholder, PlaceholderTone, RegionContent,
        RegionId,
    };
    pub use crate::ports::outbound::{
        ApiError, ApiResult, ConfirmationPrompt, DiagnosticReporter, OutputPresenter,
        TraceabilityApi, ViewRenderer,
    };
    pub use crate::shared::error::ExitCode;
    pub use crate::shared::Result;
    pub use crate::traceability::domain::{
        HealthFailureKind, HealthStatus, SerialNumber, SerialTraceResult, SupplierQualityRow,
        TraceStatus,
    };
    pub use crate::traceability::policies::{PillVariant, RejectRatePolicy};
}
