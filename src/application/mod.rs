// Application layer - Use cases and the seams they depend on
pub mod analytics_client;
pub mod dashboard_sync;
pub mod dashboard_view;
pub mod report_definitions;
pub mod report_service;
pub mod snapshot_source;
