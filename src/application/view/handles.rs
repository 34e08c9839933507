use super::content::{Placeholder, PlaceholderTone, RegionContent};
use crate::traceability::domain::HealthStatus;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handles are written from async tasks; a panic while holding one of these
/// locks leaves plain data behind, so a poisoned lock is simply reused.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A content area of the dashboard. Clones share the same area.
#[derive(Debug, Clone, Default)]
pub struct Region {
    content: Arc<Mutex<RegionContent>>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, content: RegionContent) {
        *lock(&self.content) = content;
    }

    pub fn show_placeholder(&self, tone: PlaceholderTone, message: &str) {
        self.set(RegionContent::Placeholder(Placeholder::new(tone, message)));
    }

    pub fn content(&self) -> RegionContent {
        lock(&self.content).clone()
    }

    pub fn with_content<R>(&self, f: impl FnOnce(&RegionContent) -> R) -> R {
        f(&lock(&self.content))
    }
}

#[derive(Debug)]
struct ControlState {
    enabled: bool,
    label: String,
    idle_label: String,
}

/// A button. Disabled and relabelled for the duration of its own action.
#[derive(Debug, Clone)]
pub struct Control {
    state: Arc<Mutex<ControlState>>,
}

impl Control {
    pub fn new(label: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(ControlState {
                enabled: true,
                label: label.to_string(),
                idle_label: label.to_string(),
            })),
        }
    }

    pub fn is_enabled(&self) -> bool {
        lock(&self.state).enabled
    }

    pub fn label(&self) -> String {
        lock(&self.state).label.clone()
    }

    /// Marks the control busy until the returned guard is dropped.
    ///
    /// Returns `None` without touching the control when it is already busy,
    /// so a second trigger of the same action never starts a request.
    /// The guard restores the idle label and re-enables the control on every
    /// exit path, including early returns and panics while rendering.
    #[must_use = "the control is restored as soon as the guard is dropped"]
    pub fn engage(&self, busy_label: &str) -> Option<BusyGuard> {
        {
            let mut state = lock(&self.state);
            if !state.enabled {
                return None;
            }
            state.enabled = false;
            state.label = busy_label.to_string();
        }
        Some(BusyGuard {
            control: self.clone(),
        })
    }

    fn restore(&self) {
        let mut state = lock(&self.state);
        state.enabled = true;
        state.label = state.idle_label.clone();
    }
}

/// Restores its control on drop.
#[derive(Debug)]
pub struct BusyGuard {
    control: Control,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.control.restore();
    }
}

#[derive(Debug, Default)]
struct InputState {
    value: String,
    focused: bool,
}

/// A single-line text field.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    state: Arc<Mutex<InputState>>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> String {
        lock(&self.state).value.clone()
    }

    pub fn set_value(&self, value: &str) {
        lock(&self.state).value = value.to_string();
    }

    pub fn focus(&self) {
        lock(&self.state).focused = true;
    }

    pub fn is_focused(&self) -> bool {
        lock(&self.state).focused
    }
}

/// Inline message next to a form field; hidden when `None`.
#[derive(Debug, Clone, Default)]
pub struct InlineNotice {
    message: Arc<Mutex<Option<String>>>,
}

impl InlineNotice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, message: &str) {
        *lock(&self.message) = Some(message.to_string());
    }

    pub fn hide(&self) {
        *lock(&self.message) = None;
    }

    pub fn message(&self) -> Option<String> {
        lock(&self.message).clone()
    }
}

/// The health dot and its caption.
#[derive(Debug, Clone, Default)]
pub struct HealthLamp {
    status: Arc<Mutex<HealthStatus>>,
}

impl HealthLamp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, status: HealthStatus) {
        *lock(&self.status) = status;
    }

    pub fn status(&self) -> HealthStatus {
        lock(&self.status).clone()
    }
}
