use crate::application::components::{
    AdminButtons, AdminControls, AdminTargets, HealthIndicator, SerialTraceView,
    SupplierQualityView,
};
use crate::application::view::messages::suppliers;
use crate::application::view::{
    Control, ControlSnapshot, DashboardSnapshot, HealthLamp, HealthView, InlineNotice,
    InputSnapshot, Region, RegionId, RegionSnapshot, TextInput,
};
use crate::ports::outbound::{ConfirmationPrompt, DiagnosticReporter, TraceabilityApi};
use crate::shared::error::TraceConsoleError;
use crate::traceability::domain::HealthStatus;
use chrono::Utc;
use std::sync::Arc;

/// Every view handle on the page.
///
/// Created once and handed to the components that write to them; the
/// dashboard keeps clones to take snapshots.
#[derive(Debug, Clone)]
pub struct DashboardHandles {
    pub health: HealthLamp,
    pub load_suppliers: Control,
    pub suppliers: Region,
    pub trace_input: TextInput,
    pub trace_notice: InlineNotice,
    pub trace: Region,
    pub admin: AdminButtons,
    pub random_serials: Region,
}

impl Default for DashboardHandles {
    fn default() -> Self {
        Self {
            health: HealthLamp::new(),
            load_suppliers: Control::new(suppliers::BUTTON_LABEL),
            suppliers: Region::new(),
            trace_input: TextInput::new(),
            trace_notice: InlineNotice::new(),
            trace: Region::new(),
            admin: AdminButtons::default(),
            random_serials: Region::new(),
        }
    }
}

/// Dashboard - wires components to a shared API client and view handles
///
/// # Type Parameters
/// * `A` - TraceabilityApi implementation
/// * `D` - DiagnosticReporter implementation
/// * `C` - ConfirmationPrompt implementation (used only by admin controls)
pub struct Dashboard<A, D, C> {
    api_base: String,
    handles: DashboardHandles,
    health: HealthIndicator<A, D>,
    suppliers: SupplierQualityView<A, D>,
    trace: SerialTraceView<A, D>,
    admin: Option<AdminControls<A, D, C>>,
}

impl<A, D, C> Dashboard<A, D, C>
where
    A: TraceabilityApi,
    D: DiagnosticReporter,
    C: ConfirmationPrompt,
{
    /// Creates a dashboard with injected dependencies
    ///
    /// Admin controls are only created when `admin_controls` is set.
    pub fn new(
        api_base: impl Into<String>,
        api: A,
        diagnostics: D,
        confirmation: C,
        admin_controls: bool,
    ) -> Self {
        let api = Arc::new(api);
        let diagnostics = Arc::new(diagnostics);
        let handles = DashboardHandles::default();

        let health = HealthIndicator::new(
            Arc::clone(&api),
            Arc::clone(&diagnostics),
            handles.health.clone(),
        );
        let suppliers = SupplierQualityView::new(
            Arc::clone(&api),
            Arc::clone(&diagnostics),
            handles.load_suppliers.clone(),
            handles.suppliers.clone(),
        );
        let trace = SerialTraceView::new(
            Arc::clone(&api),
            Arc::clone(&diagnostics),
            handles.trace_input.clone(),
            handles.trace_notice.clone(),
            handles.trace.clone(),
        );
        let admin = admin_controls.then(|| {
            AdminControls::new(
                Arc::clone(&api),
                Arc::clone(&diagnostics),
                Arc::new(confirmation),
                handles.admin.clone(),
                AdminTargets {
                    suppliers: handles.suppliers.clone(),
                    random_serials: handles.random_serials.clone(),
                    trace: handles.trace.clone(),
                    trace_input: handles.trace_input.clone(),
                },
            )
        });

        Self {
            api_base: api_base.into(),
            handles,
            health,
            suppliers,
            trace,
            admin,
        }
    }

    /// Page-load hook: probes backend health once
    pub async fn on_load(&self) -> HealthStatus {
        tracing::debug!(api_base = %self.api_base, "dashboard loaded");
        self.health.probe().await
    }

    pub fn health(&self) -> &HealthIndicator<A, D> {
        &self.health
    }

    pub fn suppliers(&self) -> &SupplierQualityView<A, D> {
        &self.suppliers
    }

    pub fn trace(&self) -> &SerialTraceView<A, D> {
        &self.trace
    }

    /// Admin controls, if enabled
    ///
    /// # Errors
    /// Returns `AdminControlsDisabled` when the dashboard was built without them
    pub fn admin(&self) -> Result<&AdminControls<A, D, C>, TraceConsoleError> {
        self.admin
            .as_ref()
            .ok_or(TraceConsoleError::AdminControlsDisabled)
    }

    pub fn has_admin_controls(&self) -> bool {
        self.admin.is_some()
    }

    pub fn handles(&self) -> &DashboardHandles {
        &self.handles
    }

    /// Copies the current state of every handle
    pub fn snapshot(&self) -> DashboardSnapshot {
        let h = &self.handles;
        let control = |c: &Control| ControlSnapshot {
            label: c.label(),
            enabled: c.is_enabled(),
        };

        let mut regions = vec![
            RegionSnapshot {
                id: RegionId::Suppliers,
                controls: vec![control(&h.load_suppliers)],
                content: h.suppliers.content(),
            },
            RegionSnapshot {
                id: RegionId::Trace,
                controls: vec![],
                content: h.trace.content(),
            },
        ];
        if self.admin.is_some() {
            regions.push(RegionSnapshot {
                id: RegionId::RandomSerials,
                controls: vec![
                    control(&h.admin.random),
                    control(&h.admin.seed),
                    control(&h.admin.clear),
                ],
                content: h.random_serials.content(),
            });
        }

        DashboardSnapshot {
            api_base: self.api_base.clone(),
            rendered_at: Utc::now(),
            admin_controls: self.admin.is_some(),
            health: HealthView::from(h.health.status()),
            trace_input: InputSnapshot {
                value: h.trace_input.value(),
                focused: h.trace_input.is_focused(),
                notice: h.trace_notice.message(),
            },
            regions,
        }
    }
}
