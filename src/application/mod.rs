/// Application layer - components, view handles and the dashboard
///
/// This layer orchestrates user actions: it calls the backend through the
/// outbound ports and writes view-models into injected view handles.
pub mod components;
pub mod dashboard;
pub mod dto;
pub mod factories;
pub mod view;
