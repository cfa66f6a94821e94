// Domain layer - Normalized analytics records and display rules
pub mod dashboard;
pub mod display;
pub mod metrics;
