use super::ActionOutcome;
use crate::application::view::messages::suppliers;
use crate::application::view::{Control, PlaceholderTone, Region, RegionContent, SupplierTableView};
use crate::ports::outbound::{DiagnosticReporter, TraceabilityApi};
use std::sync::Arc;

/// SupplierQualityView - loads the supplier quality report on demand
pub struct SupplierQualityView<A, D> {
    api: Arc<A>,
    diagnostics: Arc<D>,
    control: Control,
    results: Region,
}

impl<A, D> SupplierQualityView<A, D>
where
    A: TraceabilityApi,
    D: DiagnosticReporter,
{
    pub fn new(api: Arc<A>, diagnostics: Arc<D>, control: Control, results: Region) -> Self {
        Self {
            api,
            diagnostics,
            control,
            results,
        }
    }

    /// Fetches the report and renders it
    ///
    /// The load button stays disabled while the request is in flight and is
    /// restored on every exit path. A load triggered while another is in
    /// flight returns `Busy` without issuing a request.
    pub async fn load(&self) -> ActionOutcome {
        let Some(_busy) = self.control.engage(suppliers::BUSY_LABEL) else {
            tracing::debug!("supplier load already in flight");
            return ActionOutcome::Busy;
        };
        self.results
            .show_placeholder(PlaceholderTone::Loading, suppliers::LOADING);

        match self.api.fetch_supplier_quality().await {
            Ok(rows) => match SupplierTableView::from_rows(&rows) {
                Some(table) => {
                    self.diagnostics
                        .report(&format!("Loaded {} supplier row(s)", table.rows.len()));
                    self.results.set(RegionContent::SupplierTable(table));
                    ActionOutcome::Rendered
                }
                None => {
                    self.results
                        .show_placeholder(PlaceholderTone::Guidance, suppliers::EMPTY);
                    ActionOutcome::Empty
                }
            },
            Err(err) => {
                self.diagnostics
                    .report_error("Failed to load suppliers", &err.to_string());
                self.results
                    .show_placeholder(PlaceholderTone::Error, suppliers::ERROR);
                ActionOutcome::Failed
            }
        }
    }

    pub fn control(&self) -> &Control {
        &self.control
    }
}
