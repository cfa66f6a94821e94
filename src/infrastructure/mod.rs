// Infrastructure layer - External dependencies and adapters
pub mod board_view;
pub mod config;
pub mod dashboard_api;
pub mod frame_clock;
pub mod google_analytics;
