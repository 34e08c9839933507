use super::wire;
use serde::{Deserialize, Serialize};

/// One entry of the supplier quality report.
///
/// The backend sorts the report by reject rate, highest first. That order
/// is preserved as received; nothing on this side re-sorts rows.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierQualityRow {
    #[serde(default, alias = "supplierName", deserialize_with = "wire::opt_text")]
    pub supplier: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub supplier_id: Option<String>,
    #[serde(default, alias = "totalSerials", deserialize_with = "wire::opt_count")]
    pub total: Option<u64>,
    #[serde(default, alias = "rejectedCount", deserialize_with = "wire::opt_count")]
    pub rejected: Option<u64>,
    /// Percentage in 0..=100; absent when the backend could not compute it
    #[serde(default, deserialize_with = "wire::opt_number")]
    pub reject_rate_percent: Option<f64>,
}

impl SupplierQualityRow {
    pub fn new(
        supplier: impl Into<String>,
        supplier_id: impl Into<String>,
        total: u64,
        rejected: u64,
        reject_rate_percent: Option<f64>,
    ) -> Self {
        Self {
            supplier: Some(supplier.into()),
            supplier_id: Some(supplier_id.into()),
            total: Some(total),
            rejected: Some(rejected),
            reject_rate_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_row() {
        let json = r#"{"supplier":"Acme Castings","supplierId":"SUP-1","total":120,"rejected":18,"rejectRatePercent":15.0}"#;
        let row: SupplierQualityRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.supplier.as_deref(), Some("Acme Castings"));
        assert_eq!(row.supplier_id.as_deref(), Some("SUP-1"));
        assert_eq!(row.total, Some(120));
        assert_eq!(row.rejected, Some(18));
        assert_eq!(row.reject_rate_percent, Some(15.0));
    }

    #[test]
    fn test_deserialize_long_field_names() {
        let json = r#"{"supplierName":"Borealis","supplierId":7,"totalSerials":10,"rejectedCount":0,"rejectRatePercent":0}"#;
        let row: SupplierQualityRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.supplier.as_deref(), Some("Borealis"));
        assert_eq!(row.supplier_id.as_deref(), Some("7"));
        assert_eq!(row.total, Some(10));
        assert_eq!(row.reject_rate_percent, Some(0.0));
    }

    #[test]
    fn test_deserialize_partial_row() {
        let json = r#"{"supplier":null,"rejectRatePercent":"n/a"}"#;
        let row: SupplierQualityRow = serde_json::from_str(json).unwrap();
        assert!(row.supplier.is_none());
        assert!(row.supplier_id.is_none());
        assert!(row.total.is_none());
        assert!(row.reject_rate_percent.is_none());
    }
}
