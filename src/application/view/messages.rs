//! User-facing texts. Placeholders are short and non-technical; the detail
//! goes to the diagnostic channel.

pub mod suppliers {
    pub const BUTTON_LABEL: &str = "Load data";
    pub const BUSY_LABEL: &str = "Loading…";
    pub const LOADING: &str = "Loading supplier quality data…";
    pub const EMPTY: &str = "No supplier data returned. Did you seed the database?";
    pub const ERROR: &str = "Error fetching data. Check logs for details.";
    pub const CAPTION: &str = "Sorted by highest reject rate first.";
    pub const COLUMNS: [&str; 5] = ["Supplier", "ID", "Total serials", "Rejected", "Reject rate"];
}

pub mod trace {
    pub const LOADING: &str = "Tracing serial…";
    pub const NOT_FOUND: &str = "Serial not found. Try a different serial number.";
    pub const ERROR: &str = "Error while tracing serial. Check logs for details.";
    pub const NO_OTHER_SERIALS: &str = "No other serials in this batch.";
}

pub mod admin {
    pub const CLEAR_LABEL: &str = "Clear database";
    pub const CLEAR_BUSY_LABEL: &str = "Clearing…";
    pub const CLEAR_QUESTION: &str =
        "This deletes every supplier, batch and serial on the backend. Continue?";
    pub const CLEARED_SUPPLIERS: &str = "Database cleared. Seed demo data to load suppliers again.";
    pub const CLEARED_RANDOM: &str = "Database cleared. No serials left to sample.";
    pub const CLEARED_TRACE: &str = "Database cleared. Seed demo data before tracing a serial.";
    pub const CLEAR_ERROR: &str = "Error clearing database. Check logs for details.";

    pub const SEED_LABEL: &str = "Seed demo data";
    pub const SEED_BUSY_LABEL: &str = "Seeding…";
    pub const SEEDED: &str = "Demo data seeded. Load supplier data to see the results.";
    pub const SEED_ERROR: &str = "Error seeding database. Check logs for details.";

    pub const RANDOM_LABEL: &str = "Sample serials";
    pub const RANDOM_BUSY_LABEL: &str = "Sampling…";
    pub const RANDOM_LOADING: &str = "Sampling serials…";
    pub const RANDOM_EMPTY: &str = "No serials returned. Seed the database first.";
    pub const RANDOM_ERROR: &str = "Error fetching random serials. Check logs for details.";
}
