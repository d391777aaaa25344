/// Data Transfer Objects for application layer
///
/// DTOs carry the settings a load needs from the configuration layer into
/// the use case, keeping the domain layer free of configuration concerns.
mod report_settings;

pub use report_settings::{
    ReportSettings, DEFAULT_CURRENT_QUERY, DEFAULT_OUTDATED_QUERY, DEFAULT_REPORT_FILE,
};
