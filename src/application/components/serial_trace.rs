use super::ActionOutcome;
use crate::application::view::messages::trace;
use crate::application::view::{
    InlineNotice, PlaceholderTone, Region, RegionContent, TextInput, TraceDetailView,
};
use crate::ports::outbound::{ApiError, DiagnosticReporter, TraceabilityApi};
use crate::traceability::domain::SerialNumber;
use std::sync::Arc;

/// SerialTraceView - the trace form and its result area
pub struct SerialTraceView<A, D> {
    api: Arc<A>,
    diagnostics: Arc<D>,
    input: TextInput,
    notice: InlineNotice,
    results: Region,
}

impl<A, D> SerialTraceView<A, D>
where
    A: TraceabilityApi,
    D: DiagnosticReporter,
{
    pub fn new(
        api: Arc<A>,
        diagnostics: Arc<D>,
        input: TextInput,
        notice: InlineNotice,
        results: Region,
    ) -> Self {
        Self {
            api,
            diagnostics,
            input,
            notice,
            results,
        }
    }

    /// Submits the form with whatever the input currently holds
    ///
    /// Blank input shows the inline notice and leaves the previous result
    /// in place; no request is made.
    pub async fn submit(&self) -> ActionOutcome {
        self.notice.hide();

        let serial = match SerialNumber::parse(&self.input.value()) {
            Ok(serial) => serial,
            Err(err) => {
                self.notice.show(&err.to_string());
                return ActionOutcome::Rejected;
            }
        };

        self.results
            .show_placeholder(PlaceholderTone::Loading, trace::LOADING);

        match self.api.fetch_serial_trace(&serial).await {
            Ok(result) => {
                self.results
                    .set(RegionContent::TraceDetail(TraceDetailView::from(&result)));
                ActionOutcome::Rendered
            }
            Err(ApiError::NotFound) => {
                self.diagnostics
                    .report(&format!("Serial {} not found", serial));
                self.results
                    .show_placeholder(PlaceholderTone::NotFound, trace::NOT_FOUND);
                ActionOutcome::NotFound
            }
            Err(err) => {
                self.diagnostics.report_error(
                    "Trace request failed",
                    &format!("serial {}: {}", serial, err),
                );
                self.results
                    .show_placeholder(PlaceholderTone::Error, trace::ERROR);
                ActionOutcome::Failed
            }
        }
    }

    /// Types `text` into the input, then submits
    pub async fn trace(&self, text: &str) -> ActionOutcome {
        self.input.set_value(text);
        self.submit().await
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }
}
