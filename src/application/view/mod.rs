/// View layer - injected view handles and the view-models written into them
///
/// Components never build text. They write typed content into handles;
/// renderers read a [`DashboardSnapshot`] of those handles.
pub mod content;
pub mod handles;
pub mod messages;
pub mod snapshot;

pub use content::{
    AffectedSerialsView, Placeholder, PlaceholderTone, RegionContent, SerialListView,
    SupplierRowView, SupplierTableView, TraceDetailView,
};
pub use handles::{BusyGuard, Control, HealthLamp, InlineNotice, Region, TextInput};
pub use snapshot::{
    ControlSnapshot, DashboardSnapshot, HealthView, InputSnapshot, RegionId, RegionSnapshot,
};
