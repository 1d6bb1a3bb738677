pub mod status_coordinator;
pub mod status_summary;
pub mod status_validator;
