use supply_trace::prelude::*;

/// Mock DiagnosticReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockDiagnosticReporter {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockDiagnosticReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn error_count(&self) -> usize {
        self.get_messages()
            .iter()
            .filter(|m| m.starts_with("Error: "))
            .count()
    }
}

impl DiagnosticReporter for MockDiagnosticReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_error(&self, context: &str, details: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}: {}", context, details));
    }
}
