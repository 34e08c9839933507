use super::ActionOutcome;
use crate::application::view::messages::admin;
use crate::application::view::{
    Control, PlaceholderTone, Region, RegionContent, SerialListView, TextInput,
};
use crate::ports::outbound::{ConfirmationPrompt, DiagnosticReporter, TraceabilityApi};
use std::sync::Arc;

/// Regions the admin actions write to.
#[derive(Debug, Clone)]
pub struct AdminTargets {
    pub suppliers: Region,
    pub random_serials: Region,
    pub trace: Region,
    pub trace_input: TextInput,
}

/// Buttons owned by the admin panel.
#[derive(Debug, Clone)]
pub struct AdminButtons {
    pub clear: Control,
    pub seed: Control,
    pub random: Control,
}

impl Default for AdminButtons {
    fn default() -> Self {
        Self {
            clear: Control::new(admin::CLEAR_LABEL),
            seed: Control::new(admin::SEED_LABEL),
            random: Control::new(admin::RANDOM_LABEL),
        }
    }
}

/// AdminControls - demo data management and the random serial sampler
///
/// Optional: only wired up when admin controls are enabled.
pub struct AdminControls<A, D, C> {
    api: Arc<A>,
    diagnostics: Arc<D>,
    confirmation: Arc<C>,
    buttons: AdminButtons,
    targets: AdminTargets,
}

impl<A, D, C> AdminControls<A, D, C>
where
    A: TraceabilityApi,
    D: DiagnosticReporter,
    C: ConfirmationPrompt,
{
    pub fn new(
        api: Arc<A>,
        diagnostics: Arc<D>,
        confirmation: Arc<C>,
        buttons: AdminButtons,
        targets: AdminTargets,
    ) -> Self {
        Self {
            api,
            diagnostics,
            confirmation,
            buttons,
            targets,
        }
    }

    /// Wipes the backend after an explicit confirmation
    ///
    /// On success the supplier, random-serial and trace regions each get
    /// their own reset message. A failure only touches the supplier region.
    pub async fn clear_database(&self) -> ActionOutcome {
        // no confirmation for a busy button
        if !self.buttons.clear.is_enabled() {
            return ActionOutcome::Busy;
        }
        if !self.confirmation.confirm(admin::CLEAR_QUESTION) {
            self.diagnostics.report("Clear database declined");
            return ActionOutcome::Declined;
        }

        let Some(_busy) = self.buttons.clear.engage(admin::CLEAR_BUSY_LABEL) else {
            return ActionOutcome::Busy;
        };

        match self.api.clear_database().await {
            Ok(body) => {
                self.diagnostics
                    .report(&format!("Database cleared: {}", body));
                self.targets
                    .suppliers
                    .show_placeholder(PlaceholderTone::Guidance, admin::CLEARED_SUPPLIERS);
                self.targets
                    .random_serials
                    .show_placeholder(PlaceholderTone::Guidance, admin::CLEARED_RANDOM);
                self.targets
                    .trace
                    .show_placeholder(PlaceholderTone::Guidance, admin::CLEARED_TRACE);
                ActionOutcome::Rendered
            }
            Err(err) => {
                self.diagnostics
                    .report_error("Failed to clear database", &err.to_string());
                self.targets
                    .suppliers
                    .show_placeholder(PlaceholderTone::Error, admin::CLEAR_ERROR);
                ActionOutcome::Failed
            }
        }
    }

    /// Loads the demo data set; the supplier table is not reloaded
    pub async fn seed_database(&self) -> ActionOutcome {
        let Some(_busy) = self.buttons.seed.engage(admin::SEED_BUSY_LABEL) else {
            return ActionOutcome::Busy;
        };

        match self.api.seed_database().await {
            Ok(body) => {
                self.diagnostics
                    .report(&format!("Database seeded: {}", body));
                self.targets
                    .suppliers
                    .show_placeholder(PlaceholderTone::Guidance, admin::SEEDED);
                ActionOutcome::Rendered
            }
            Err(err) => {
                self.diagnostics
                    .report_error("Failed to seed database", &err.to_string());
                self.targets
                    .suppliers
                    .show_placeholder(PlaceholderTone::Error, admin::SEED_ERROR);
                ActionOutcome::Failed
            }
        }
    }

    /// Samples serials from the backend into a clickable list
    pub async fn load_random_serials(&self) -> ActionOutcome {
        let Some(_busy) = self.buttons.random.engage(admin::RANDOM_BUSY_LABEL) else {
            return ActionOutcome::Busy;
        };
        let region = &self.targets.random_serials;
        region.show_placeholder(PlaceholderTone::Loading, admin::RANDOM_LOADING);

        match self.api.fetch_random_serials().await {
            Ok(serials) => match SerialListView::from_serials(serials) {
                Some(list) => {
                    region.set(RegionContent::SerialList(list));
                    ActionOutcome::Rendered
                }
                None => {
                    region.show_placeholder(PlaceholderTone::Guidance, admin::RANDOM_EMPTY);
                    ActionOutcome::Empty
                }
            },
            Err(err) => {
                self.diagnostics
                    .report_error("Failed to load random serials", &err.to_string());
                region.show_placeholder(PlaceholderTone::Error, admin::RANDOM_ERROR);
                ActionOutcome::Failed
            }
        }
    }

    /// Clicks the `index`-th listed serial (zero-based)
    ///
    /// Copies the serial into the trace input and focuses it without
    /// submitting the trace form. Returns the picked serial, or `None` when
    /// no list is shown or the index is out of range.
    pub fn pick_serial(&self, index: usize) -> Option<String> {
        let picked = self.targets.random_serials.with_content(|content| match content {
            RegionContent::SerialList(list) => list.get(index).map(str::to_string),
            _ => None,
        })?;

        self.targets.trace_input.set_value(&picked);
        self.targets.trace_input.focus();
        Some(picked)
    }

    pub fn buttons(&self) -> &AdminButtons {
        &self.buttons
    }
}
