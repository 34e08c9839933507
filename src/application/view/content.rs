use super::messages;
use crate::traceability::domain::{SerialTraceResult, SupplierQualityRow};
use crate::traceability::policies::{PillVariant, RejectRatePolicy};
use serde::Serialize;

/// What kind of message a placeholder carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderTone {
    Loading,
    Guidance,
    NotFound,
    Error,
}

/// A short message shown in place of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub tone: PlaceholderTone,
    pub message: String,
}

impl Placeholder {
    pub fn new(tone: PlaceholderTone, message: &str) -> Self {
        Self {
            tone,
            message: message.to_string(),
        }
    }
}

/// Everything a region can display.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegionContent {
    /// Nothing requested yet
    #[default]
    Blank,
    Placeholder(Placeholder),
    SupplierTable(SupplierTableView),
    TraceDetail(TraceDetailView),
    SerialList(SerialListView),
}

impl RegionContent {
    pub fn placeholder(&self) -> Option<&Placeholder> {
        match self {
            RegionContent::Placeholder(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, RegionContent::Blank)
    }
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or(RejectRatePolicy::PLACEHOLDER).to_string()
}

fn count_or_dash(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| RejectRatePolicy::PLACEHOLDER.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierRowView {
    pub supplier: String,
    pub supplier_id: String,
    pub total: String,
    pub rejected: String,
    pub rate: String,
    pub pill: PillVariant,
}

impl From<&SupplierQualityRow> for SupplierRowView {
    fn from(row: &SupplierQualityRow) -> Self {
        Self {
            supplier: or_dash(row.supplier.as_deref()),
            supplier_id: or_dash(row.supplier_id.as_deref()),
            total: count_or_dash(row.total),
            rejected: count_or_dash(row.rejected),
            rate: RejectRatePolicy::format_rate(row.reject_rate_percent),
            pill: RejectRatePolicy::pill_for(row.reject_rate_percent),
        }
    }
}

/// Supplier quality table. Row order is whatever the backend sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierTableView {
    pub caption: String,
    pub columns: Vec<String>,
    pub rows: Vec<SupplierRowView>,
}

impl SupplierTableView {
    /// Builds the table view, or `None` for an empty report.
    pub fn from_rows(rows: &[SupplierQualityRow]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        Some(Self {
            caption: messages::suppliers::CAPTION.to_string(),
            columns: messages::suppliers::COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            rows: rows.iter().map(SupplierRowView::from).collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AffectedSerialsView {
    List { serials: Vec<String> },
    NoOthers { note: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceDetailView {
    pub status_label: String,
    pub status_pill: PillVariant,
    pub serial: String,
    pub batch_id: String,
    pub supplier_name: String,
    pub supplier_id: String,
    pub affected: AffectedSerialsView,
}

impl From<&SerialTraceResult> for TraceDetailView {
    fn from(result: &SerialTraceResult) -> Self {
        let status = result.trace_status();
        let status_pill = match &status {
            Some(s) if s.is_reject() => PillVariant::Reject,
            _ => PillVariant::Ok,
        };
        let affected = match result.affected() {
            [] => AffectedSerialsView::NoOthers {
                note: messages::trace::NO_OTHER_SERIALS.to_string(),
            },
            serials => AffectedSerialsView::List {
                serials: serials.to_vec(),
            },
        };

        Self {
            status_label: format!("Status: {}", or_dash(status.as_ref().map(|s| s.as_str()))),
            status_pill,
            serial: or_dash(result.serial.as_deref()),
            batch_id: or_dash(result.batch_id.as_deref()),
            supplier_name: or_dash(result.supplier_name.as_deref()),
            supplier_id: or_dash(result.supplier_id.as_deref()),
            affected,
        }
    }
}

/// Clickable list of sampled serials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerialListView {
    pub serials: Vec<String>,
}

impl SerialListView {
    pub fn from_serials(serials: Vec<String>) -> Option<Self> {
        if serials.is_empty() {
            None
        } else {
            Some(Self { serials })
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.serials.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_table_empty_is_none() {
        assert!(SupplierTableView::from_rows(&[]).is_none());
    }

    #[test]
    fn test_supplier_table_keeps_backend_order() {
        let rows = vec![
            SupplierQualityRow::new("Low", "S-2", 100, 1, Some(1.0)),
            SupplierQualityRow::new("High", "S-1", 100, 30, Some(30.0)),
        ];
        let table = SupplierTableView::from_rows(&rows).unwrap();
        assert_eq!(table.rows[0].supplier, "Low");
        assert_eq!(table.rows[1].supplier, "High");
        assert_eq!(table.caption, "Sorted by highest reject rate first.");
        assert_eq!(table.columns.len(), 5);
    }

    #[test]
    fn test_supplier_row_view_formats_rate_and_pill() {
        let row = SupplierQualityRow::new("Acme", "S-1", 200, 25, Some(12.5));
        let view = SupplierRowView::from(&row);
        assert_eq!(view.rate, "12.50%");
        assert_eq!(view.pill, PillVariant::Reject);
        assert_eq!(view.total, "200");
        assert_eq!(view.rejected, "25");
    }

    #[test]
    fn test_supplier_row_view_missing_fields_are_dashes() {
        let view = SupplierRowView::from(&SupplierQualityRow::default());
        assert_eq!(view.supplier, "-");
        assert_eq!(view.supplier_id, "-");
        assert_eq!(view.total, "-");
        assert_eq!(view.rejected, "-");
        assert_eq!(view.rate, "-");
        assert_eq!(view.pill, PillVariant::Ok);
    }

    #[test]
    fn test_trace_detail_reject_pill() {
        let result = SerialTraceResult {
            serial: Some("SN-9".to_string()),
            status: Some("REJECT".to_string()),
            affected_serials: Some(vec!["SN-8".to_string(), "SN-9".to_string()]),
            ..Default::default()
        };
        let view = TraceDetailView::from(&result);
        assert_eq!(view.status_label, "Status: REJECT");
        assert_eq!(view.status_pill, PillVariant::Reject);
        assert_eq!(
            view.affected,
            AffectedSerialsView::List {
                serials: vec!["SN-8".to_string(), "SN-9".to_string()]
            }
        );
    }

    #[test]
    fn test_trace_detail_partial_data() {
        let view = TraceDetailView::from(&SerialTraceResult::default());
        assert_eq!(view.status_label, "Status: -");
        assert_eq!(view.status_pill, PillVariant::Ok);
        assert_eq!(view.serial, "-");
        assert_eq!(view.batch_id, "-");
        assert_eq!(view.supplier_name, "-");
        assert_eq!(view.supplier_id, "-");
        assert_eq!(
            view.affected,
            AffectedSerialsView::NoOthers {
                note: "No other serials in this batch.".to_string()
            }
        );
    }

    #[test]
    fn test_serial_list_view() {
        assert!(SerialListView::from_serials(vec![]).is_none());
        let list = SerialListView::from_serials(vec!["SN-1".into(), "SN-2".into()]).unwrap();
        assert_eq!(list.get(1), Some("SN-2"));
        assert_eq!(list.get(2), None);
    }
}
